use super::{DrawCmd, PathCmd, RectCmd, TextCmd};

/// Recorded draw stream for one surface.
///
/// Items are kept in paint order (back-to-front), which is simply the order
/// they were pushed. `push()` is O(1); `clear()` keeps allocated capacity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every recorded command.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }

    // ── filtered views ────────────────────────────────────────────────────

    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn fill_rects(&self) -> impl Iterator<Item = &RectCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::FillRect(r) => Some(r),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::StrokePath(p) => Some(p),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCmd;
    type IntoIter = core::slice::Iter<'a, DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
