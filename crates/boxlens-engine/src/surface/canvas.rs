use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::scene::{DrawList, LineSegment, Stroke};
use crate::text::FontSpec;

use super::{DrawState, Surface};

/// Recording [`Surface`].
///
/// Every paint call becomes a [`DrawCmd`](crate::scene::DrawCmd) in the
/// canvas's [`DrawList`], in call order. Clearing the whole surface discards
/// everything recorded so far, since none of it can be visible afterwards;
/// a canvas therefore only ever holds the commands of the current frame.
#[derive(Debug)]
pub struct Canvas {
    size: Viewport,
    draw_list: DrawList,
    state: DrawState,
    saved: Vec<DrawState>,
    path: Vec<LineSegment>,
    cursor: Option<Vec2>,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Viewport::new(width, height),
            draw_list: DrawList::new(),
            state: DrawState::default(),
            saved: Vec::new(),
            path: Vec::new(),
            cursor: None,
        }
    }

    /// Commands recorded since the last full clear.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Current drawing state.
    #[inline]
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Number of states currently saved on the stack.
    #[inline]
    pub fn state_depth(&self) -> usize {
        self.saved.len()
    }

    fn stroke_pen(&self) -> Stroke {
        Stroke::new(self.state.line_width, self.state.stroke)
    }
}

impl Surface for Canvas {
    #[inline]
    fn size(&self) -> Viewport {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        if rect.covers(self.size.bounds()) {
            self.draw_list.clear();
        }
        self.draw_list.push_clear(rect);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.draw_list.push_fill_rect(rect, self.state.fill);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let pen = self.stroke_pen();
        self.draw_list.push_stroke_rect(rect, pen);
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.cursor = None;
    }

    fn move_to(&mut self, p: Vec2) {
        self.cursor = Some(p);
    }

    fn line_to(&mut self, p: Vec2) {
        // A segment with no current point only establishes one.
        if let Some(from) = self.cursor {
            self.path.push(LineSegment::new(from, p));
        }
        self.cursor = Some(p);
    }

    fn stroke(&mut self) {
        let pen = self.stroke_pen();
        self.draw_list.push_stroke_path(self.path.clone(), pen);
    }

    fn fill_text(&mut self, text: &str, origin: Vec2) {
        self.draw_list
            .push_text(text, self.state.font.clone(), self.state.fill, origin);
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Non-positive and non-finite widths are ignored, as on a 2D canvas.
        if width > 0.0 && width.is_finite() {
            self.state.line_width = width;
        }
    }

    fn set_font(&mut self, font: FontSpec) {
        self.state.font = font;
    }
}
