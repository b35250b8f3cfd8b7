use boxlens_engine::coords::Vec2;

/// Window size and document scroll offset, in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ViewportMetrics {
    pub inner_width: f32,
    pub inner_height: f32,
    pub page_x_offset: f32,
    pub page_y_offset: f32,
}

impl ViewportMetrics {
    #[inline]
    pub const fn new(inner_width: f32, inner_height: f32, page_x_offset: f32, page_y_offset: f32) -> Self {
        Self { inner_width, inner_height, page_x_offset, page_y_offset }
    }

    /// Document scroll offset.
    #[inline]
    pub fn page_offset(&self) -> Vec2 {
        Vec2::new(self.page_x_offset, self.page_y_offset)
    }

    /// Bottom-right corner of the visible area, in page coordinates.
    #[inline]
    pub fn visible_bottom_right(&self) -> Vec2 {
        Vec2::new(self.page_x_offset + self.inner_width, self.page_y_offset + self.inner_height)
    }
}

/// Read-only source of the current viewport metrics.
///
/// Renderers query it once at the start of each call.
pub trait ViewportProvider {
    fn metrics(&self) -> ViewportMetrics;
}

/// A fixed snapshot is its own provider.
impl ViewportProvider for ViewportMetrics {
    #[inline]
    fn metrics(&self) -> ViewportMetrics {
        *self
    }
}

impl<P: ViewportProvider + ?Sized> ViewportProvider for &P {
    #[inline]
    fn metrics(&self) -> ViewportMetrics {
        (**self).metrics()
    }
}
