pub(crate) mod path;
pub(crate) mod rect;
pub(crate) mod text;

use crate::paint::Color;

/// Pen used for outlines and line paths.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
