use boxlens_engine::coords::Vec2;
use boxlens_engine::surface::Surface;

use crate::error::{checked_size, OverlayError};
use crate::host::{PointerSample, ViewportMetrics, ViewportProvider};
use crate::label::px;
use crate::style::OverlayStyle;

/// Draws the viewport size and scroll offset in the bottom-right corner of
/// the visible area, plus pointer coordinates next to the pointer.
#[derive(Debug, Clone, Default)]
pub struct ViewportInfoRenderer {
    style: OverlayStyle,
}

impl ViewportInfoRenderer {
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Clears `surface` and draws the readout.
    ///
    /// Lines stack upwards from the visible bottom-right corner: inner
    /// width lowest, then inner height, horizontal offset and vertical
    /// offset on top. A pointer sample adds its client and page positions
    /// one and two lines below-right of the pointer.
    pub fn render<S, V>(
        &self,
        surface: &mut S,
        viewport: &V,
        pointer: Option<PointerSample>,
    ) -> Result<(), OverlayError>
    where
        S: Surface + ?Sized,
        V: ViewportProvider + ?Sized,
    {
        checked_size(surface)?;
        let m = viewport.metrics();
        let step = self.style.line_step();

        surface.clear();
        surface.save();
        surface.set_fill_color(self.style.info_color);
        surface.set_font(self.style.font.clone());

        let corner = m.visible_bottom_right();
        let x = corner.x - self.style.info_inset.x;
        let bottom = corner.y - self.style.info_inset.y;
        for (slot, text) in readout(&m).iter().enumerate() {
            surface.fill_text(text, Vec2::new(x, bottom - slot as f32 * step));
        }

        if let Some(p) = pointer {
            surface.fill_text(
                &format!("client: ({}, {})", px(p.client.x), px(p.client.y)),
                p.page.offset(step, step),
            );
            surface.fill_text(
                &format!("page: ({}, {})", px(p.page.x), px(p.page.y)),
                p.page.offset(step, step * 2.0),
            );
        }

        surface.restore();

        log::debug!(
            "viewport info: {}x{} at ({}, {}) pointer={}",
            m.inner_width,
            m.inner_height,
            m.page_x_offset,
            m.page_y_offset,
            pointer.is_some()
        );
        Ok(())
    }
}

/// Readout lines, bottom line first.
fn readout(m: &ViewportMetrics) -> [String; 4] {
    [
        format!("innerWidth:{}", px(m.inner_width)),
        format!("innerHeight:{}", px(m.inner_height)),
        format!("pageXOffset:{}", px(m.page_x_offset)),
        format!("pageYOffset:{}", px(m.page_y_offset)),
    ]
}

/// Draws the viewport readout with the default overlay style.
///
/// See [`ViewportInfoRenderer::render`].
pub fn draw_window_dimension<S, V>(
    surface: &mut S,
    viewport: &V,
    pointer: Option<PointerSample>,
) -> Result<(), OverlayError>
where
    S: Surface + ?Sized,
    V: ViewportProvider + ?Sized,
{
    ViewportInfoRenderer::default().render(surface, viewport, pointer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxlens_engine::surface::Canvas;

    fn viewport() -> ViewportMetrics {
        ViewportMetrics::new(1024.0, 768.0, 0.0, 400.0)
    }

    #[test]
    fn four_lines_without_pointer() {
        let mut canvas = Canvas::new(1024.0, 2000.0);
        draw_window_dimension(&mut canvas, &viewport(), None).unwrap();

        let texts: Vec<_> = canvas.draw_list().texts().collect();
        assert_eq!(texts.len(), 4);
        assert!(!texts.iter().any(|t| t.text.starts_with("client") || t.text.starts_with("page:")));
    }

    #[test]
    fn readout_stacks_upwards_from_visible_corner() {
        let mut canvas = Canvas::new(1024.0, 2000.0);
        draw_window_dimension(&mut canvas, &viewport(), None).unwrap();

        let placed: Vec<(&str, Vec2)> =
            canvas.draw_list().texts().map(|t| (t.text.as_str(), t.origin)).collect();
        // x = 0 + 1024 - 150, bottom baseline = 400 + 768 - 15.
        assert_eq!(
            placed,
            [
                ("innerWidth:1024", Vec2::new(874.0, 1153.0)),
                ("innerHeight:768", Vec2::new(874.0, 1139.0)),
                ("pageXOffset:0", Vec2::new(874.0, 1125.0)),
                ("pageYOffset:400", Vec2::new(874.0, 1111.0)),
            ]
        );
    }

    #[test]
    fn pointer_adds_two_lines_offset_from_page_position() {
        let mut canvas = Canvas::new(1024.0, 2000.0);
        let pointer = PointerSample::from_client(Vec2::new(100.0, 20.0), &viewport());
        draw_window_dimension(&mut canvas, &viewport(), Some(pointer)).unwrap();

        let texts: Vec<_> = canvas.draw_list().texts().collect();
        assert_eq!(texts.len(), 6);
        assert_eq!(texts[4].text, "client: (100, 20)");
        assert_eq!(texts[4].origin, Vec2::new(114.0, 434.0));
        assert_eq!(texts[5].text, "page: (100, 420)");
        assert_eq!(texts[5].origin, Vec2::new(114.0, 448.0));
    }

    #[test]
    fn text_uses_info_color_and_state_is_restored() {
        let mut canvas = Canvas::new(800.0, 600.0);
        draw_window_dimension(&mut canvas, &viewport(), None).unwrap();

        let style = OverlayStyle::default();
        assert!(canvas.draw_list().texts().all(|t| t.color == style.info_color && t.font == style.font));
        assert_eq!(canvas.state_depth(), 0);
        assert_eq!(canvas.state().font, boxlens_engine::text::FontSpec::default());
    }

    #[test]
    fn provider_is_queried_per_call() {
        use std::cell::Cell;

        struct Scrolling(Cell<f32>);
        impl ViewportProvider for Scrolling {
            fn metrics(&self) -> ViewportMetrics {
                let y = self.0.get();
                self.0.set(y + 100.0);
                ViewportMetrics::new(800.0, 600.0, 0.0, y)
            }
        }

        let provider = Scrolling(Cell::new(0.0));
        let mut canvas = Canvas::new(800.0, 2000.0);
        draw_window_dimension(&mut canvas, &provider, None).unwrap();
        draw_window_dimension(&mut canvas, &provider, None).unwrap();

        let top = canvas.draw_list().texts().last().unwrap();
        assert_eq!(top.text, "pageYOffset:100");
    }

    #[test]
    fn repeated_calls_leave_identical_trace() {
        use boxlens_engine::raster::Rasterizer;
        use boxlens_engine::text::FontSystem;

        let fonts = FontSystem::new();
        let raster = Rasterizer::new(&fonts);
        let pointer = PointerSample::from_client(Vec2::new(100.0, 20.0), &viewport());
        let mut canvas = Canvas::new(1024.0, 2000.0);

        draw_window_dimension(&mut canvas, &viewport(), Some(pointer)).unwrap();
        let first = canvas.draw_list().clone();
        let first_pixels = raster.render(canvas.draw_list(), canvas.size()).unwrap();

        draw_window_dimension(&mut canvas, &viewport(), Some(pointer)).unwrap();
        assert_eq!(canvas.draw_list(), &first);
        assert_eq!(canvas.draw_list().len(), 7);
        assert_eq!(raster.render(canvas.draw_list(), canvas.size()).unwrap(), first_pixels);
    }

    #[test]
    fn rejects_empty_surface() {
        let mut canvas = Canvas::new(10.0, -1.0);
        assert!(draw_window_dimension(&mut canvas, &viewport(), None).is_err());
        assert!(canvas.draw_list().is_empty());
    }
}
