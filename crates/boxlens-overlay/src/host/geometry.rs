use boxlens_engine::coords::{Rect, Vec2};

use crate::error::OverlayError;

/// Uniform border, margin and padding widths of one element.
///
/// Each value stands for all four sides. Elements with asymmetric edges are
/// drawn as if every side had the given width.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoxEdges {
    pub border: f32,
    pub margin: f32,
    pub padding: f32,
}

impl BoxEdges {
    #[inline]
    pub const fn new(border: f32, margin: f32, padding: f32) -> Self {
        Self { border, margin, padding }
    }

    /// Distance from the border edge to the content edge.
    #[inline]
    pub fn content_inset(&self) -> f32 {
        self.border + self.padding
    }

    /// Reads edges from computed-style `(property, value)` pairs.
    ///
    /// Takes the first entry named exactly `border`, `margin` and `padding`
    /// and parses its leading integer (`"2px solid red"` is 2, `"10.5px"` is
    /// 10). Which shorthand a host reports, and in what order, varies between
    /// hosts; prefer [`BoxEdges::new`] with resolved widths when available.
    pub fn from_computed_style<I, K, V>(entries: I) -> Result<Self, OverlayError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut border = None;
        let mut margin = None;
        let mut padding = None;

        for (key, value) in entries {
            let slot = match key.as_ref() {
                "border" => &mut border,
                "margin" => &mut margin,
                "padding" => &mut padding,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(leading_int(value.as_ref()));
            }
        }

        let pick = |v: Option<Option<f32>>, name: &'static str| {
            v.flatten().ok_or(OverlayError::MissingStyle(name))
        };
        Ok(Self {
            border: pick(border, "border")?,
            margin: pick(margin, "margin")?,
            padding: pick(padding, "padding")?,
        })
    }
}

/// `parseInt`-style parse: optional leading whitespace and sign, then
/// decimal digits up to the first non-digit.
fn leading_int(s: &str) -> Option<f32> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<f64>().ok().map(|v| (sign * v) as f32)
}

/// One element's measurements, read once per render call.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GeometryBox {
    /// Border-box position relative to the viewport.
    pub client_rect_x: f32,
    pub client_rect_y: f32,
    /// Border-box size.
    pub width: f32,
    pub height: f32,
    /// Padding-box size excluding scrollbars.
    pub client_width: f32,
    pub client_height: f32,
    /// Measured top/left border thickness.
    pub client_top: f32,
    pub client_left: f32,
    /// The element's own scroll offset.
    pub scroll_top: f32,
    pub scroll_left: f32,
    pub edges: BoxEdges,
}

impl GeometryBox {
    /// Border box in page coordinates, given the document scroll offset.
    #[inline]
    pub fn border_box(&self, page_offset: Vec2) -> Rect {
        Rect::new(
            self.client_rect_x + page_offset.x,
            self.client_rect_y + page_offset.y,
            self.width,
            self.height,
        )
    }

    #[inline]
    pub fn margin_box(&self, page_offset: Vec2) -> Rect {
        self.border_box(page_offset).expand(self.edges.margin)
    }

    #[inline]
    pub fn padding_box(&self, page_offset: Vec2) -> Rect {
        self.border_box(page_offset).inset(self.edges.border)
    }

    #[inline]
    pub fn content_box(&self, page_offset: Vec2) -> Rect {
        self.border_box(page_offset).inset(self.edges.content_inset())
    }

    /// Content size derived from the border box and the uniform edges.
    #[inline]
    pub fn content_size(&self) -> Vec2 {
        let inset = self.edges.content_inset() * 2.0;
        Vec2::new(self.width - inset, self.height - inset)
    }
}

/// Host seam for anything the box-model overlay can measure.
pub trait ElementGeometry {
    fn geometry(&self) -> Result<GeometryBox, OverlayError>;
}

/// Pre-measured geometry measures as itself.
impl ElementGeometry for GeometryBox {
    #[inline]
    fn geometry(&self) -> Result<GeometryBox, OverlayError> {
        Ok(*self)
    }
}

impl<T: ElementGeometry + ?Sized> ElementGeometry for &T {
    #[inline]
    fn geometry(&self) -> Result<GeometryBox, OverlayError> {
        (**self).geometry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeometryBox {
        GeometryBox {
            client_rect_x: 30.0,
            client_rect_y: 40.0,
            width: 100.0,
            height: 50.0,
            edges: BoxEdges::new(2.0, 10.0, 5.0),
            ..Default::default()
        }
    }

    // ── boxes ─────────────────────────────────────────────────────────────

    #[test]
    fn nested_boxes_from_uniform_edges() {
        let g = sample();
        let page = Vec2::new(0.0, 200.0);
        assert_eq!(g.border_box(page), Rect::new(30.0, 240.0, 100.0, 50.0));
        assert_eq!(g.margin_box(page), Rect::new(20.0, 230.0, 120.0, 70.0));
        assert_eq!(g.padding_box(page), Rect::new(32.0, 242.0, 96.0, 46.0));
        assert_eq!(g.content_box(page), Rect::new(37.0, 247.0, 86.0, 36.0));
        assert_eq!(g.content_size(), Vec2::new(86.0, 36.0));
    }

    // ── computed style ────────────────────────────────────────────────────

    #[test]
    fn computed_style_takes_first_exact_match() {
        let entries = [
            ("border-top-width", "7px"),
            ("border", "2px solid rgb(0, 0, 0)"),
            ("margin", "10px"),
            ("border", "9px"),
            ("padding", "5.75px"),
        ];
        let edges = BoxEdges::from_computed_style(entries).unwrap();
        assert_eq!(edges, BoxEdges::new(2.0, 10.0, 5.0));
    }

    #[test]
    fn computed_style_accepts_owned_pairs() {
        let entries = vec![
            ("margin".to_string(), "-4px".to_string()),
            ("padding".to_string(), " 0".to_string()),
            ("border".to_string(), "+1px".to_string()),
        ];
        let edges = BoxEdges::from_computed_style(entries).unwrap();
        assert_eq!(edges, BoxEdges::new(1.0, -4.0, 0.0));
    }

    #[test]
    fn computed_style_missing_entry() {
        let err = BoxEdges::from_computed_style([("border", "1px"), ("margin", "0px")]).unwrap_err();
        assert_eq!(err, OverlayError::MissingStyle("padding"));
    }

    #[test]
    fn computed_style_non_numeric_entry() {
        let entries = [("border", "medium none"), ("margin", "0"), ("padding", "0")];
        let err = BoxEdges::from_computed_style(entries).unwrap_err();
        assert_eq!(err, OverlayError::MissingStyle("border"));
    }

    #[test]
    fn leading_int_stops_at_first_non_digit() {
        assert_eq!(leading_int("10.5px"), Some(10.0));
        assert_eq!(leading_int("px"), None);
        assert_eq!(leading_int("-"), None);
    }

    // ── seam ──────────────────────────────────────────────────────────────

    struct Detached;

    impl ElementGeometry for Detached {
        fn geometry(&self) -> Result<GeometryBox, OverlayError> {
            Err(OverlayError::Geometry("element is not attached".into()))
        }
    }

    #[test]
    fn trait_objects_measure_through_references() {
        let g = sample();
        let targets: [&dyn ElementGeometry; 2] = [&g, &Detached];
        assert_eq!(targets[0].geometry().unwrap(), g);
        assert!(targets[1].geometry().is_err());
    }
}
