use crate::paint::Color;
use crate::text::FontSpec;

/// The part of a surface's state that `save`/`restore` preserves.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f32,
    pub font: FontSpec,
}

impl Default for DrawState {
    /// Canvas defaults: black fill and stroke, 1px lines, `10px sans-serif`.
    fn default() -> Self {
        Self {
            fill: Color::black(),
            stroke: Color::black(),
            line_width: 1.0,
            font: FontSpec::default(),
        }
    }
}
