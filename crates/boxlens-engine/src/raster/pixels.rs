use std::fmt;
use std::path::Path;

use tiny_skia::{BlendMode, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8, Transform};

use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{LineSegment, Stroke};

use super::RasterError;

/// CPU pixel buffer backed by a `tiny_skia::Pixmap` (premultiplied RGBA8).
///
/// Fills are aliased: a pixel is covered when its centre is inside the
/// rectangle. Strokes are antialiased.
#[derive(Clone)]
pub struct PixelBuffer {
    pixmap: Pixmap,
}

impl PixelBuffer {
    /// Transparent buffer of the given size. Fails for a zero dimension.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::BufferSize { width, height })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?;
        let unit = |v: u8| v as f32 / 255.0;
        Some(Color { r: unit(p.red()), g: unit(p.green()), b: unit(p.blue()), a: unit(p.alpha()) })
    }

    /// Resets the pixels under `rect` to transparent.
    pub fn clear_rect(&mut self, rect: Rect) {
        let Some(r) = skia_rect(rect) else {
            return;
        };
        let mut paint = Paint::default();
        paint.anti_alias = false;
        paint.blend_mode = BlendMode::Clear;
        self.pixmap.fill_rect(r, &paint, Transform::identity(), None);
    }

    /// Blends `color` over every pixel under `rect`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (Some(r), Some(paint)) = (skia_rect(rect), solid(color, false)) else {
            return;
        };
        self.pixmap.fill_rect(r, &paint, Transform::identity(), None);
    }

    /// Outlines `rect` as one closed path, so translucent corners are not
    /// painted twice.
    pub fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        let (Some(r), Some(paint)) = (skia_rect(rect), solid(stroke.color, true)) else {
            return;
        };
        let path = PathBuilder::from_rect(r);
        self.pixmap.stroke_path(&path, &paint, &pen(stroke), Transform::identity(), None);
    }

    /// Strokes disjoint segments as subpaths of a single path.
    pub fn stroke_segments(&mut self, segments: &[LineSegment], stroke: Stroke) {
        let mut pb = PathBuilder::new();
        for seg in segments {
            pb.move_to(seg.from.x, seg.from.y);
            pb.line_to(seg.to.x, seg.to.y);
        }
        let (Some(path), Some(paint)) = (pb.finish(), solid(stroke.color, true)) else {
            return;
        };
        self.pixmap.stroke_path(&path, &paint, &pen(stroke), Transform::identity(), None);
    }

    /// Composites `color` through a row-major 8-bit coverage mask `width`
    /// pixels wide whose top-left pixel lands on `(left, top)`.
    pub fn draw_coverage(&mut self, left: i32, top: i32, width: usize, coverage: &[u8], color: Color) {
        if width == 0 || coverage.len() < width {
            return;
        }
        let height = coverage.len() / width;
        let Some(mut mask) = Pixmap::new(width as u32, height as u32) else {
            return;
        };
        for (px, &c) in mask.pixels_mut().iter_mut().zip(coverage) {
            let k = c as f32 / 255.0;
            let q = |v: f32| (v.clamp(0.0, 1.0) * k * 255.0).round() as u8;
            if let Some(p) = PremultipliedColorU8::from_rgba(q(color.r), q(color.g), q(color.b), q(color.a)) {
                *px = p;
            }
        }
        self.pixmap
            .draw_pixmap(left, top, mask.as_ref(), &PixmapPaint::default(), Transform::identity(), None);
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        self.pixmap.encode_png().map_err(|e| RasterError::Encode(e.to_string()))
    }

    /// Encodes the buffer as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        self.pixmap
            .save_png(path.as_ref())
            .map_err(|e| RasterError::Encode(e.to_string()))
    }
}

impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width() && self.height() == other.height() && self.pixmap.data() == other.pixmap.data()
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

fn skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    let r = rect.normalized();
    tiny_skia::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y)
}

/// Solid paint from a premultiplied color; `None` for non-finite channels.
fn solid(color: Color, anti_alias: bool) -> Option<Paint<'static>> {
    let (r, g, b, a) = color.to_straight();
    let unit = |v: f32| v.clamp(0.0, 1.0);
    let mut paint = Paint::default();
    paint.set_color(tiny_skia::Color::from_rgba(unit(r), unit(g), unit(b), unit(a))?);
    paint.anti_alias = anti_alias;
    Some(paint)
}

fn pen(stroke: Stroke) -> tiny_skia::Stroke {
    tiny_skia::Stroke { width: stroke.width, ..Default::default() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn alpha(buf: &PixelBuffer, x: u32, y: u32) -> f32 {
        buf.get(x, y).map_or(0.0, |c| c.a)
    }

    #[test]
    fn new_buffer_is_transparent() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        assert_eq!(buf.get(3, 2), Some(Color::transparent()));
        assert_eq!(buf.get(4, 0), None);
        assert_eq!(buf.pixmap().data().len(), 4 * 3 * 4);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(PixelBuffer::new(0, 10), Err(RasterError::BufferSize { width: 0, height: 10 }));
    }

    #[test]
    fn fill_covers_pixel_centres_only() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.fill_rect(Rect::new(2.0, 2.0, 3.0, 2.0), Color::black());
        assert_eq!(buf.get(2, 2), Some(Color::black()));
        assert_eq!(buf.get(4, 3), Some(Color::black()));
        assert_eq!(buf.get(5, 3), Some(Color::transparent()));
        assert_eq!(buf.get(2, 4), Some(Color::transparent()));
    }

    #[test]
    fn negative_size_fills_normalized_rect() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.fill_rect(Rect::new(5.0, 5.0, -2.0, -2.0), Color::white());
        assert_eq!(buf.get(3, 3), Some(Color::white()));
        assert_eq!(buf.get(5, 5), Some(Color::transparent()));
    }

    #[test]
    fn translucent_fills_accumulate() {
        let mut buf = PixelBuffer::new(1, 1).unwrap();
        let layer = Color::rgba(88, 46, 155, 0.2);
        buf.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), layer);
        buf.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), layer);
        let a = alpha(&buf, 0, 0);
        assert!((a - 0.36).abs() < 0.01, "alpha was {a}");
    }

    #[test]
    fn clear_resets_and_clips_to_bounds() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        buf.fill_rect(Rect::new(-10.0, -10.0, 100.0, 100.0), Color::black());
        buf.clear_rect(Rect::new(2.0, 2.0, 50.0, 50.0));
        assert_eq!(buf.get(1, 1), Some(Color::black()));
        assert_eq!(buf.get(3, 3), Some(Color::transparent()));
    }

    #[test]
    fn stroke_on_pixel_centre_fills_one_row() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        let seg = LineSegment::new(Vec2::new(0.0, 5.5), Vec2::new(10.0, 5.5));
        buf.stroke_segments(&[seg], Stroke::new(1.0, Color::black()));
        assert!((1..9).all(|x| alpha(&buf, x, 5) > 0.5));
        assert!((0..10).all(|x| alpha(&buf, x, 3) == 0.0 && alpha(&buf, x, 7) == 0.0));
    }

    #[test]
    fn coverage_mask_scales_color() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        buf.draw_coverage(1, 1, 2, &[255, 0, 128, 255], Color::black());
        assert_eq!(buf.get(1, 1), Some(Color::black()));
        assert_eq!(buf.get(2, 1), Some(Color::transparent()));
        assert!((alpha(&buf, 1, 2) - 0.5).abs() < 0.01);
        assert_eq!(buf.get(0, 0), Some(Color::transparent()));
    }

    #[test]
    fn coverage_mask_is_clipped_to_bounds() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.draw_coverage(-1, 1, 2, &[255, 255, 255, 255], Color::black());
        assert_eq!(buf.get(0, 1), Some(Color::black()));
        assert_eq!(buf.get(1, 1), Some(Color::transparent()));
    }

    #[test]
    fn png_has_signature() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        let png = buf.encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
