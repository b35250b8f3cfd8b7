//! boxlens overlays: debug drawings on top of a [`Surface`].
//!
//! Three independent, stateless renderers:
//!
//! - [`GridRenderer`] / [`draw_coordinate`]: coordinate grid
//! - [`ViewportInfoRenderer`] / [`draw_window_dimension`]: viewport size,
//!   scroll offset and pointer position
//! - [`BoxModelRenderer`] / [`draw_boxes_dimension`]: margin, border,
//!   padding and content boxes of measured elements
//!
//! Each call clears the whole surface first, so the last call wins.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use boxlens_overlay::prelude::*;
//!
//! let mut canvas = Canvas::new(1280.0, 2000.0);
//! let viewport = ViewportMetrics::new(1280.0, 720.0, 0.0, 300.0);
//! let card = GeometryBox {
//!     client_rect_x: 40.0,
//!     client_rect_y: 60.0,
//!     width: 320.0,
//!     height: 180.0,
//!     edges: BoxEdges::new(1.0, 16.0, 12.0),
//!     ..Default::default()
//! };
//! draw_boxes_dimension(&mut canvas, &viewport, &[card])?;
//! // canvas.draw_list() now holds the recorded commands.
//! ```
//!
//! [`Surface`]: boxlens_engine::surface::Surface

pub mod box_model;
pub mod error;
pub mod grid;
pub mod host;
pub mod label;
pub mod style;
pub mod viewport_info;

pub use box_model::{draw_boxes_dimension, BoxModelRenderer};
pub use error::OverlayError;
pub use grid::{draw_coordinate, GridRenderer};
pub use style::OverlayStyle;
pub use viewport_info::{draw_window_dimension, ViewportInfoRenderer};

/// Everything needed to draw an overlay.
pub mod prelude {
    pub use crate::host::{BoxEdges, ElementGeometry, GeometryBox, PointerSample, ViewportMetrics, ViewportProvider};
    pub use crate::{
        draw_boxes_dimension, draw_coordinate, draw_window_dimension, BoxModelRenderer, GridRenderer,
        OverlayError, OverlayStyle, ViewportInfoRenderer,
    };
    pub use boxlens_engine::coords::{Rect, Vec2};
    pub use boxlens_engine::paint::Color;
    pub use boxlens_engine::surface::{Canvas, Surface};
}
