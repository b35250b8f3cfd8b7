use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Stroke;

/// Filled rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

/// Outlined rectangle payload. The stroke is centred on the rectangle edge.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRectCmd {
    pub rect: Rect,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a region reset to transparent.
    #[inline]
    pub fn push_clear(&mut self, rect: Rect) {
        self.push(DrawCmd::Clear(rect));
    }

    /// Records a filled rectangle.
    #[inline]
    pub fn push_fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::FillRect(RectCmd::new(rect, color)));
    }

    /// Records a rectangle outline.
    #[inline]
    pub fn push_stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.push(DrawCmd::StrokeRect(StrokeRectCmd { rect, stroke }));
    }
}
