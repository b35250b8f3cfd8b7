//! Scene files: one surface, one viewport snapshot and one overlay to draw.
//!
//! ```json
//! {
//!   "surface": { "width": 1280, "height": 2000 },
//!   "viewport": { "inner_width": 1280, "inner_height": 720, "page_x_offset": 0, "page_y_offset": 300 },
//!   "overlay": { "kind": "boxes", "targets": [
//!     { "client_rect_x": 40, "client_rect_y": 60, "width": 320, "height": 180,
//!       "edges": { "border": 1, "margin": 16, "padding": 12 } }
//!   ] }
//! }
//! ```

use serde::Deserialize;

use boxlens_engine::coords::Vec2;
use boxlens_engine::paint::Color;
use boxlens_engine::surface::Surface;
use boxlens_overlay::host::{BoxEdges, ElementGeometry, GeometryBox, PointerSample, ViewportMetrics};
use boxlens_overlay::{draw_boxes_dimension, draw_coordinate, draw_window_dimension, OverlayError};

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub surface: SurfaceSpec,
    /// Defaults to the surface size with no scroll.
    #[serde(default)]
    pub viewport: Option<ViewportSpec>,
    pub overlay: OverlaySpec,
}

#[derive(Debug, Copy, Clone, Deserialize)]
pub struct SurfaceSpec {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Copy, Clone, Deserialize)]
pub struct ViewportSpec {
    pub inner_width: f32,
    pub inner_height: f32,
    #[serde(default)]
    pub page_x_offset: f32,
    #[serde(default)]
    pub page_y_offset: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlaySpec {
    Grid {
        pitch: f32,
        /// `#rgb`, `#rrggbb` or `#rrggbbaa`.
        color: String,
        #[serde(default)]
        show_labels: bool,
    },
    Window {
        #[serde(default)]
        pointer: Option<PointerSpec>,
    },
    Boxes {
        targets: Vec<TargetSpec>,
    },
}

#[derive(Debug, Copy, Clone, Deserialize)]
pub struct PointerSpec {
    pub client: [f32; 2],
    /// Derived from `client` and the page scroll when absent.
    #[serde(default)]
    pub page: Option<[f32; 2]>,
}

/// One measured element. Edges come either resolved (`edges`) or as
/// computed-style pairs in host order (`computed_style`).
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSpec {
    pub client_rect_x: f32,
    pub client_rect_y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub client_width: Option<f32>,
    #[serde(default)]
    pub client_height: Option<f32>,
    #[serde(default)]
    pub client_top: Option<f32>,
    #[serde(default)]
    pub client_left: Option<f32>,
    #[serde(default)]
    pub scroll_top: f32,
    #[serde(default)]
    pub scroll_left: f32,
    #[serde(default)]
    pub edges: Option<EdgesSpec>,
    #[serde(default)]
    pub computed_style: Option<Vec<(String, String)>>,
}

#[derive(Debug, Copy, Clone, Deserialize)]
pub struct EdgesSpec {
    pub border: f32,
    pub margin: f32,
    pub padding: f32,
}

impl ElementGeometry for TargetSpec {
    /// Missing client measurements are derived from the uniform edges, as a
    /// host without scrollbars would report them.
    fn geometry(&self) -> Result<GeometryBox, OverlayError> {
        let edges = match (&self.edges, &self.computed_style) {
            (Some(e), _) => BoxEdges::new(e.border, e.margin, e.padding),
            (None, Some(style)) => BoxEdges::from_computed_style(style.iter().map(|(k, v)| (k, v)))?,
            (None, None) => {
                return Err(OverlayError::Geometry(
                    "target has neither `edges` nor `computed_style`".into(),
                ));
            }
        };
        let b = edges.border;
        Ok(GeometryBox {
            client_rect_x: self.client_rect_x,
            client_rect_y: self.client_rect_y,
            width: self.width,
            height: self.height,
            client_width: self.client_width.unwrap_or(self.width - b * 2.0),
            client_height: self.client_height.unwrap_or(self.height - b * 2.0),
            client_top: self.client_top.unwrap_or(b),
            client_left: self.client_left.unwrap_or(b),
            scroll_top: self.scroll_top,
            scroll_left: self.scroll_left,
            edges,
        })
    }
}

impl Scene {
    pub fn viewport(&self) -> ViewportMetrics {
        match self.viewport {
            Some(v) => ViewportMetrics::new(v.inner_width, v.inner_height, v.page_x_offset, v.page_y_offset),
            None => ViewportMetrics::new(self.surface.width, self.surface.height, 0.0, 0.0),
        }
    }

    /// Draws the scene's overlay onto `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> anyhow::Result<()> {
        let viewport = self.viewport();
        match &self.overlay {
            OverlaySpec::Grid { pitch, color, show_labels } => {
                let color = Color::from_hex(color)
                    .ok_or_else(|| anyhow::anyhow!("invalid grid color {color:?}"))?;
                draw_coordinate(surface, *pitch, color, *show_labels)?;
            }
            OverlaySpec::Window { pointer } => {
                let pointer = pointer.map(|p| {
                    let client = Vec2::new(p.client[0], p.client[1]);
                    match p.page {
                        Some([x, y]) => PointerSample::new(client, Vec2::new(x, y)),
                        None => PointerSample::from_client(client, &viewport),
                    }
                });
                draw_window_dimension(surface, &viewport, pointer)?;
            }
            OverlaySpec::Boxes { targets } => {
                draw_boxes_dimension(surface, &viewport, targets)?;
            }
        }
        Ok(())
    }
}
