use boxlens_engine::coords::Vec2;
use boxlens_engine::paint::Color;
use boxlens_engine::surface::Surface;

use crate::error::{checked_size, OverlayError};
use crate::label::px;
use crate::style::OverlayStyle;

/// Upper bound on gridline steps along either axis.
pub const MAX_GRID_LINES: u32 = 100_000;

/// Draws an evenly spaced coordinate grid over the whole surface.
#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    style: OverlayStyle,
}

impl GridRenderer {
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Clears `surface` and strokes gridlines every `pitch` pixels on both
    /// axes, from 0 up to and including the first line at or past the far
    /// edge. With `show_labels`, every line except the one at 0 is labelled
    /// with its offset.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        pitch: f32,
        color: Color,
        show_labels: bool,
    ) -> Result<(), OverlayError> {
        if !(pitch.is_finite() && pitch > 0.0) {
            return Err(OverlayError::InvalidPitch(pitch));
        }
        let size = checked_size(surface)?;
        let rows = line_steps(size.height, pitch)?;
        let cols = line_steps(size.width, pitch)?;
        let step = self.style.line_step();

        surface.clear();
        surface.begin_path();
        surface.save();
        surface.set_line_width(self.style.grid_line_width);
        surface.set_stroke_color(color);
        surface.set_font(self.style.font.clone());

        for i in 0..=rows {
            let y = i as f32 * pitch;
            if show_labels && i != 0 {
                self.label(surface, y, Vec2::new(0.0, y + step));
            }
            surface.move_to(Vec2::new(0.0, y));
            surface.line_to(Vec2::new(size.width, y));
        }

        for i in 0..=cols {
            let x = i as f32 * pitch;
            if show_labels && i != 0 {
                self.label(surface, x, Vec2::new(x, step));
            }
            surface.move_to(Vec2::new(x, 0.0));
            surface.line_to(Vec2::new(x, size.height));
        }

        surface.stroke();
        surface.restore();

        log::debug!(
            "grid: {}x{} pitch={} lines={} labels={}",
            size.width,
            size.height,
            pitch,
            rows + cols + 2,
            show_labels
        );
        Ok(())
    }

    fn label<S: Surface + ?Sized>(&self, surface: &mut S, offset: f32, at: Vec2) {
        surface.save();
        surface.set_fill_color(self.style.grid_label_color);
        surface.fill_text(&px(offset), at);
        surface.restore();
    }
}

/// `ceil(extent / pitch)`, rejected when it would exceed [`MAX_GRID_LINES`].
fn line_steps(extent: f32, pitch: f32) -> Result<u32, OverlayError> {
    let n = (extent / pitch).ceil();
    if n.is_finite() && n <= MAX_GRID_LINES as f32 {
        Ok(n as u32)
    } else {
        Err(OverlayError::InvalidPitch(pitch))
    }
}

/// Draws a coordinate grid with the default overlay style.
///
/// See [`GridRenderer::render`].
pub fn draw_coordinate<S: Surface + ?Sized>(
    surface: &mut S,
    pitch: f32,
    color: Color,
    show_labels: bool,
) -> Result<(), OverlayError> {
    GridRenderer::default().render(surface, pitch, color, show_labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxlens_engine::raster::{PixelBuffer, Rasterizer};
    use boxlens_engine::scene::DrawCmd;
    use boxlens_engine::surface::Canvas;
    use boxlens_engine::text::FontSystem;

    fn grid(width: f32, height: f32, pitch: f32, labels: bool) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        draw_coordinate(&mut canvas, pitch, Color::from_srgb_u8(0, 128, 0, 255), labels).unwrap();
        canvas
    }

    #[test]
    fn line_counts_include_far_edge() {
        let canvas = grid(200.0, 100.0, 50.0, false);
        let list = canvas.draw_list();

        let paths: Vec<_> = list.paths().collect();
        assert_eq!(paths.len(), 1, "all gridlines share one path");
        let segs = &paths[0].segments;
        assert_eq!(segs.iter().filter(|s| s.is_horizontal()).count(), 3);
        assert_eq!(segs.iter().filter(|s| s.is_vertical()).count(), 5);
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn lines_span_the_surface() {
        let canvas = grid(200.0, 100.0, 50.0, false);
        let path = canvas.draw_list().paths().next().unwrap();

        let ys: Vec<f32> = path.segments.iter().filter(|s| s.is_horizontal()).map(|s| s.from.y).collect();
        assert_eq!(ys, [0.0, 50.0, 100.0]);
        let xs: Vec<f32> = path.segments.iter().filter(|s| s.is_vertical()).map(|s| s.from.x).collect();
        assert_eq!(xs, [0.0, 50.0, 100.0, 150.0, 200.0]);
        assert!(path.segments.iter().filter(|s| s.is_horizontal()).all(|s| s.to.x == 200.0));
        assert!(path.segments.iter().filter(|s| s.is_vertical()).all(|s| s.to.y == 100.0));
    }

    #[test]
    fn path_uses_caller_color_and_unit_width() {
        let canvas = grid(200.0, 100.0, 50.0, false);
        let path = canvas.draw_list().paths().next().unwrap();
        assert_eq!(path.stroke.color, Color::from_srgb_u8(0, 128, 0, 255));
        assert_eq!(path.stroke.width, 1.0);
    }

    #[test]
    fn labels_skip_the_origin() {
        let canvas = grid(200.0, 100.0, 50.0, true);
        let texts: Vec<_> = canvas.draw_list().texts().collect();

        let labels: Vec<&str> = texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(labels, ["50", "100", "50", "100", "150", "200"]);
        assert!(texts.iter().all(|t| t.color == Color::white()));
        assert!(texts.iter().all(|t| t.font.size == 14.0));

        // Row labels sit below their line at the left edge, column labels
        // along the top.
        assert_eq!(texts[0].origin, Vec2::new(0.0, 64.0));
        assert_eq!(texts[2].origin, Vec2::new(50.0, 14.0));
    }

    #[test]
    fn uneven_pitch_rounds_line_count_up() {
        let canvas = grid(100.0, 30.0, 40.0, false);
        let path = canvas.draw_list().paths().next().unwrap();
        // ceil(30/40) = 1 → rows at 0, 40; ceil(100/40) = 3 → columns at 0..=120.
        assert_eq!(path.segments.iter().filter(|s| s.is_horizontal()).count(), 2);
        assert_eq!(path.segments.iter().filter(|s| s.is_vertical()).count(), 4);
    }

    #[test]
    fn starts_with_a_full_clear() {
        let canvas = grid(200.0, 100.0, 50.0, true);
        assert!(matches!(canvas.draw_list().items()[0], DrawCmd::Clear(_)));
        assert!(matches!(canvas.draw_list().items().last(), Some(DrawCmd::StrokePath(_))));
    }

    #[test]
    fn state_is_restored() {
        let mut canvas = Canvas::new(200.0, 100.0);
        draw_coordinate(&mut canvas, 25.0, Color::white(), true).unwrap();
        assert_eq!(canvas.state_depth(), 0);
        assert_eq!(canvas.state().stroke, Color::black());
        assert_eq!(canvas.state().fill, Color::black());
    }

    #[test]
    fn rejects_non_positive_pitch() {
        let mut canvas = Canvas::new(200.0, 100.0);
        for pitch in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let err = draw_coordinate(&mut canvas, pitch, Color::white(), false).unwrap_err();
            assert!(matches!(err, OverlayError::InvalidPitch(_)));
        }
        assert!(canvas.draw_list().is_empty());
    }

    #[test]
    fn rejects_pitch_too_fine_for_surface() {
        let mut canvas = Canvas::new(200.0, 100.0);
        for pitch in [f32::MIN_POSITIVE, 1e-30, 200.0 / (MAX_GRID_LINES as f32 * 4.0)] {
            let err = draw_coordinate(&mut canvas, pitch, Color::white(), true).unwrap_err();
            assert_eq!(err, OverlayError::InvalidPitch(pitch));
        }
        assert!(canvas.draw_list().is_empty());
    }

    #[test]
    fn line_cap_is_inclusive() {
        assert_eq!(line_steps(MAX_GRID_LINES as f32, 1.0), Ok(MAX_GRID_LINES));
        assert!(line_steps(MAX_GRID_LINES as f32 + 1.0, 1.0).is_err());
    }

    #[test]
    fn rejects_empty_surface() {
        let mut canvas = Canvas::new(0.0, 100.0);
        let err = draw_coordinate(&mut canvas, 10.0, Color::white(), false).unwrap_err();
        assert_eq!(err, OverlayError::EmptySurface { width: 0.0, height: 100.0 });
    }

    #[test]
    fn repeated_calls_leave_identical_trace() {
        let mut canvas = grid(200.0, 100.0, 50.0, true);
        let first = canvas.draw_list().clone();
        draw_coordinate(&mut canvas, 50.0, Color::from_srgb_u8(0, 128, 0, 255), true).unwrap();
        assert_eq!(canvas.draw_list(), &first);
    }

    #[test]
    fn repeated_calls_give_identical_pixels() {
        let fonts = FontSystem::new();
        let raster = Rasterizer::new(&fonts);
        let mut buf = PixelBuffer::new(200, 100).unwrap();

        let mut canvas = grid(200.0, 100.0, 50.0, true);
        raster.render_into(canvas.draw_list(), &mut buf);
        let first = buf.clone();

        draw_coordinate(&mut canvas, 50.0, Color::from_srgb_u8(0, 128, 0, 255), true).unwrap();
        raster.render_into(canvas.draw_list(), &mut buf);
        assert_eq!(buf, first);

        // The gridline at x = 50 was painted.
        assert!(first.get(50, 30).is_some_and(|c| c.a > 0.0) || first.get(49, 30).is_some_and(|c| c.a > 0.0));
    }
}
