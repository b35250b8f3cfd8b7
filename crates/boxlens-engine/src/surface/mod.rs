//! Drawing surface abstraction.
//!
//! [`Surface`] is the immediate-mode 2D context overlay renderers draw
//! through: clear/fill/stroke/text primitives, path building and a
//! save/restore stack of drawing state. [`Canvas`] is the implementation
//! shipped here; it records every paint operation into a
//! [`DrawList`](crate::scene::DrawList) that tests inspect and the
//! rasteriser replays. Hosts with their own 2D context implement the trait
//! directly.

mod canvas;
mod state;

pub use canvas::Canvas;
pub use state::DrawState;

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::text::FontSpec;

/// Immediate-mode 2D drawing context bound to a fixed-size surface.
///
/// Fill and stroke operations use the colors, line width and font of the
/// current [`DrawState`]. `save` pushes a copy of that state, `restore` pops
/// it; a `restore` with nothing saved is ignored.
pub trait Surface {
    /// Surface size in logical pixels.
    fn size(&self) -> Viewport;

    /// Resets `rect` to fully transparent.
    fn clear_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);

    /// Starts a new, empty path.
    fn begin_path(&mut self);
    /// Starts a new sub-path at `p`.
    fn move_to(&mut self, p: Vec2);
    /// Adds a straight segment from the current point to `p`.
    fn line_to(&mut self, p: Vec2);
    /// Strokes the current path. The path is kept until `begin_path`.
    fn stroke(&mut self);

    /// Draws `text` with its alphabetic baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: Vec2);

    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, font: FontSpec);

    /// Clears the whole surface.
    fn clear(&mut self) {
        let bounds = self.size().bounds();
        self.clear_rect(bounds);
    }
}
