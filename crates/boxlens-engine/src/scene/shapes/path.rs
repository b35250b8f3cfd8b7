use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

use super::Stroke;

/// One straight piece of a stroked path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
}

impl LineSegment {
    #[inline]
    pub const fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.from.y == self.to.y && self.from.x != self.to.x
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        self.from.x == self.to.x && self.from.y != self.to.y
    }
}

/// A set of line segments stroked together with one pen.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub segments: Vec<LineSegment>,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a stroked path. Empty paths are dropped.
    pub fn push_stroke_path(&mut self, segments: Vec<LineSegment>, stroke: Stroke) {
        if segments.is_empty() {
            return;
        }
        self.push(DrawCmd::StrokePath(PathCmd { segments, stroke }));
    }
}
