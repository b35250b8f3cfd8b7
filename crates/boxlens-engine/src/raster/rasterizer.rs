use crate::coords::Viewport;
use crate::scene::{DrawCmd, DrawList, TextCmd};
use crate::text::{FontId, FontSystem};

use super::{PixelBuffer, RasterError};

/// Replays draw commands into a [`PixelBuffer`].
///
/// Text is drawn with a single loaded face regardless of the command's
/// `FontSpec::family`; only the size is honoured. With no font available,
/// text commands are skipped.
pub struct Rasterizer<'a> {
    fonts: &'a FontSystem,
    font: Option<FontId>,
}

impl<'a> Rasterizer<'a> {
    /// Uses the first font loaded into `fonts`, if any.
    pub fn new(fonts: &'a FontSystem) -> Self {
        Self { fonts, font: fonts.first() }
    }

    /// Renders `list` into a fresh transparent buffer of `size` (rounded up
    /// to whole pixels).
    pub fn render(&self, list: &DrawList, size: Viewport) -> Result<PixelBuffer, RasterError> {
        let w = size.width.max(0.0).ceil() as u32;
        let h = size.height.max(0.0).ceil() as u32;
        let mut buf = PixelBuffer::new(w, h)?;
        self.render_into(list, &mut buf);
        Ok(buf)
    }

    /// Replays `list` on top of the existing contents of `buf`.
    pub fn render_into(&self, list: &DrawList, buf: &mut PixelBuffer) {
        let mut skipped_text = 0usize;

        for cmd in list {
            match cmd {
                DrawCmd::Clear(rect) => buf.clear_rect(*rect),
                DrawCmd::FillRect(r) => buf.fill_rect(r.rect, r.color),
                DrawCmd::StrokeRect(r) => buf.stroke_rect(r.rect, r.stroke),
                DrawCmd::StrokePath(p) => buf.stroke_segments(&p.segments, p.stroke),
                DrawCmd::Text(t) => {
                    if !self.draw_text(buf, t) {
                        skipped_text += 1;
                    }
                }
            }
        }

        if skipped_text > 0 {
            log::warn!("Rasterizer: no usable font, skipped {skipped_text} text command(s)");
        }
    }

    /// Returns `false` when no font face is available.
    fn draw_text(&self, buf: &mut PixelBuffer, cmd: &TextCmd) -> bool {
        let Some(font) = self.font.and_then(|id| self.fonts.get(id)) else {
            return false;
        };

        let size = cmd.font.size;
        let baseline = cmd.origin.y;
        let mut pen_x = cmd.origin.x;

        for ch in cmd.text.chars() {
            let (m, coverage) = font.rasterize(ch, size);
            // `ymin` is the offset from the baseline to the bitmap's bottom edge.
            let left = pen_x.round() as i32 + m.xmin;
            let top = (baseline - m.ymin as f32 - m.height as f32).round() as i32;
            buf.draw_coverage(left, top, m.width, &coverage, cmd.color);
            pen_x += m.advance_width;
        }
        true
    }
}
