use crate::coords::Rect;
use crate::scene::shapes::path::PathCmd;
use crate::scene::shapes::rect::{RectCmd, StrokeRectCmd};
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `raster::Rasterizer` to replay it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Resets the region to fully transparent.
    Clear(Rect),
    FillRect(RectCmd),
    StrokeRect(StrokeRectCmd),
    StrokePath(PathCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short name used in traces and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Clear(_) => "clear",
            DrawCmd::FillRect(_) => "fill_rect",
            DrawCmd::StrokeRect(_) => "stroke_rect",
            DrawCmd::StrokePath(_) => "stroke_path",
            DrawCmd::Text(_) => "text",
        }
    }
}
