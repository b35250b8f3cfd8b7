use boxlens_engine::coords::Vec2;

use super::ViewportMetrics;

/// Client and page coordinates of one pointer event.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerSample {
    /// Relative to the visible viewport.
    pub client: Vec2,
    /// Relative to the document origin.
    pub page: Vec2,
}

impl PointerSample {
    #[inline]
    pub const fn new(client: Vec2, page: Vec2) -> Self {
        Self { client, page }
    }

    /// Derives page coordinates from a client position and the page scroll.
    #[inline]
    pub fn from_client(client: Vec2, viewport: &ViewportMetrics) -> Self {
        let o = viewport.page_offset();
        Self { client, page: client.offset(o.x, o.y) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_client_plus_scroll() {
        let vp = ViewportMetrics { page_x_offset: 10.0, page_y_offset: 300.0, ..Default::default() };
        let p = PointerSample::from_client(Vec2::new(5.0, 7.0), &vp);
        assert_eq!(p.page, Vec2::new(15.0, 307.0));
    }
}
