use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Width and height may be negative; the surface treats such rectangles the
/// same way a 2D canvas does and draws their [`normalized`](Rect::normalized)
/// form.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    /// Grows the rectangle by `d` on every side. Negative `d` shrinks it.
    #[inline]
    pub fn expand(self, d: f32) -> Self {
        Rect::new(
            self.origin.x - d,
            self.origin.y - d,
            self.size.x + d * 2.0,
            self.size.y + d * 2.0,
        )
    }

    /// Shrinks the rectangle by `d` on every side.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        self.expand(-d)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// True when `other` lies entirely inside `self` (edges inclusive).
    #[inline]
    pub fn covers(self, other: Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.origin.x <= b.origin.x
            && a.origin.y <= b.origin.y
            && a.max().x >= b.max().x
            && a.max().y >= b.max().y
    }
}
