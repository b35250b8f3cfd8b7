//! Fonts: the CSS-style font description carried by text commands, and the
//! loaded font faces the rasteriser draws glyphs with.

mod font_system;
mod spec;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use spec::FontSpec;
