use boxlens_engine::coords::{Rect, Vec2};
use boxlens_engine::surface::Surface;

use crate::error::{checked_size, OverlayError};
use crate::host::{ElementGeometry, GeometryBox, ViewportProvider};
use crate::label::px;
use crate::style::OverlayStyle;

/// Draws a labelled box-model diagram for each target element.
///
/// Per target, back to front:
/// 1. margin box, labelled with the margin width
/// 2. border box, labelled with the border width
/// 3. ticks at the top-right and bottom-left border corners, labelled with
///    the measured `clientTop`/`clientLeft`
/// 4. padding box with an outline, labelled with the padding width and the
///    measured `clientWidth`/`clientHeight`
/// 5. content box, labelled with its derived width and height
///
/// followed by the element's scroll offsets and reference lines from the
/// page's left and top edges to the element's position.
#[derive(Debug, Clone, Default)]
pub struct BoxModelRenderer {
    style: OverlayStyle,
}

impl BoxModelRenderer {
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Clears `surface` once, then draws every target in order.
    ///
    /// All targets are measured before anything is drawn; if any
    /// measurement fails the call is rejected with that error and the
    /// surface is left untouched.
    pub fn render<S, V, T>(&self, surface: &mut S, viewport: &V, targets: &[T]) -> Result<(), OverlayError>
    where
        S: Surface + ?Sized,
        V: ViewportProvider + ?Sized,
        T: ElementGeometry,
    {
        if targets.is_empty() {
            return Err(OverlayError::NoTargets);
        }
        checked_size(surface)?;
        let boxes = targets
            .iter()
            .map(ElementGeometry::geometry)
            .collect::<Result<Vec<_>, _>>()?;
        let page = viewport.metrics().page_offset();

        surface.clear();
        surface.save();
        surface.set_font(self.style.font.clone());

        for g in &boxes {
            self.draw_target(surface, g, page);
        }

        surface.restore();

        log::debug!("box model: {} target(s), page offset ({}, {})", boxes.len(), page.x, page.y);
        Ok(())
    }

    fn draw_target<S: Surface + ?Sized>(&self, surface: &mut S, g: &GeometryBox, page: Vec2) {
        let s = &self.style;
        let step = s.line_step();
        let (b, m) = (g.edges.border, g.edges.margin);
        let inset = g.edges.content_inset();

        let border_box = g.border_box(page);
        let Vec2 { x, y } = border_box.origin;
        let right = x + g.width - b;
        let bottom = y + g.height - b;

        surface.save();

        // margin edge
        let margin_box = g.margin_box(page);
        self.layer(surface, margin_box, &format!("margin:{}", px(m)), margin_box.origin);

        // border edge
        self.layer(surface, border_box, &format!("border:{}", px(b)), border_box.origin);

        // clientTop & clientLeft
        surface.set_stroke_color(s.outline_color);
        surface.begin_path();
        surface.move_to(Vec2::new(right, y));
        surface.line_to(Vec2::new(right, y + b));
        surface.move_to(Vec2::new(x, bottom));
        surface.line_to(Vec2::new(x + b, bottom));
        surface.stroke();
        surface.fill_text(&format!("clientTop:{}", px(g.client_top)), Vec2::new(right, y - s.label_lift));
        surface.fill_text(
            &format!("clientLeft:{}", px(g.client_left)),
            Vec2::new(x - s.client_left_offset - b, bottom),
        );

        // padding edge, outlined, with the measured client size under it
        let padding_box = g.padding_box(page);
        self.layer(
            surface,
            padding_box,
            &format!("padding:{}", px(g.edges.padding)),
            Vec2::new(x + b, y + b - s.label_lift),
        );
        surface.stroke_rect(padding_box);
        surface.fill_text(&format!("clientWidth:{}", px(g.client_width)), Vec2::new(x + b, bottom + step));
        surface.fill_text(
            &format!("clientHeight:{}", px(g.client_height)),
            Vec2::new(x + b, bottom + step * 2.0),
        );

        // content
        let content = g.content_size();
        let content_origin = Vec2::new(x + inset, y + inset);
        self.layer(
            surface,
            g.content_box(page),
            &format!("w:{}", px(content.x)),
            content_origin.offset(0.0, -step),
        );
        surface.fill_text(&format!("h:{}", px(content.y)), content_origin);

        // element scroll offset
        let side_x = page.x + g.client_rect_x - s.scroll_label_offset - m;
        surface.fill_text(&format!("scrollTop:{}", px(g.scroll_top)), Vec2::new(side_x, content_origin.y - step));
        surface.fill_text(&format!("scrollLeft:{}", px(g.scroll_left)), Vec2::new(side_x, content_origin.y));

        // viewport-relative position, measured from the page edges
        surface.set_stroke_color(s.reference_color);
        surface.begin_path();
        surface.move_to(Vec2::new(page.x, y));
        surface.line_to(Vec2::new(page.x + g.client_rect_x, y));
        surface.move_to(Vec2::new(x, page.y));
        surface.line_to(Vec2::new(x, page.y + g.client_rect_y));
        surface.stroke();
        let ref_x = page.x + g.client_rect_x - s.rect_label_offset - m;
        surface.fill_text(&format!("clientRectX:{}", px(g.client_rect_x)), Vec2::new(ref_x, y - m));
        surface.fill_text(&format!("clientRectY:{}", px(g.client_rect_y)), Vec2::new(ref_x, y - m + step));

        surface.restore();
    }

    /// One translucent box layer with its label in the label color.
    fn layer<S: Surface + ?Sized>(&self, surface: &mut S, rect: Rect, label: &str, at: Vec2) {
        surface.set_fill_color(self.style.layer_fill);
        surface.fill_rect(rect);
        surface.set_fill_color(self.style.label_color);
        surface.fill_text(label, at);
    }
}

/// Draws box-model diagrams for `targets` with the default overlay style.
///
/// See [`BoxModelRenderer::render`].
pub fn draw_boxes_dimension<S, V, T>(surface: &mut S, viewport: &V, targets: &[T]) -> Result<(), OverlayError>
where
    S: Surface + ?Sized,
    V: ViewportProvider + ?Sized,
    T: ElementGeometry,
{
    BoxModelRenderer::default().render(surface, viewport, targets)
}
