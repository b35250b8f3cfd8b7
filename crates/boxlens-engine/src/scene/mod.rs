//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - keep paint order equal to recording order
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::Stroke;
pub use shapes::path::{LineSegment, PathCmd};
pub use shapes::rect::{RectCmd, StrokeRectCmd};
pub use shapes::text::TextCmd;
