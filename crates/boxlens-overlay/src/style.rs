use boxlens_engine::coords::Vec2;
use boxlens_engine::paint::Color;
use boxlens_engine::text::FontSpec;

/// Colors, font and label offsets shared by the overlay renderers.
///
/// `Default` reproduces the classic overlay look: 14px monospace labels,
/// translucent purple box layers and a teal viewport readout.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Label font. Its size is also the vertical step between stacked labels.
    pub font: FontSpec,

    // ── grid ──────────────────────────────────────────────────────────────
    pub grid_line_width: f32,
    pub grid_label_color: Color,

    // ── viewport readout ──────────────────────────────────────────────────
    pub info_color: Color,
    /// Distance of the readout's first baseline from the visible
    /// bottom-right corner (x leftwards, y upwards).
    pub info_inset: Vec2,

    // ── box model ─────────────────────────────────────────────────────────
    pub layer_fill: Color,
    pub label_color: Color,
    /// Client-top/left ticks and the padding-box outline.
    pub outline_color: Color,
    /// Lines from the page edges to the element's position.
    pub reference_color: Color,
    /// Left shift of the `clientLeft` label from the border box.
    pub client_left_offset: f32,
    /// Left shift of the scroll labels from the element.
    pub scroll_label_offset: f32,
    /// Left shift of the `clientRectX/Y` labels from the element.
    pub rect_label_offset: f32,
    /// Upward nudge for labels that sit on an edge.
    pub label_lift: f32,
}

impl OverlayStyle {
    /// Vertical distance between stacked label baselines.
    #[inline]
    pub fn line_step(&self) -> f32 {
        self.font.size
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font: FontSpec::monospace(14.0),
            grid_line_width: 1.0,
            grid_label_color: Color::white(),
            info_color: Color::from_srgb_u8(0x3d, 0x7e, 0x9a, 0xff),
            info_inset: Vec2::new(150.0, 15.0),
            layer_fill: Color::rgba(88, 46, 155, 0.2),
            label_color: Color::black(),
            outline_color: Color::rgba(0, 0, 0, 0.7),
            reference_color: Color::rgba(88, 46, 155, 0.7),
            client_left_offset: 90.0,
            scroll_label_offset: 120.0,
            rect_label_offset: 140.0,
            label_lift: 2.0,
        }
    }
}
