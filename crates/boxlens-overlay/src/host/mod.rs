//! Host-provided inputs.
//!
//! The overlays never query a window or document themselves. Hosts hand
//! them already-measured values through these types: element geometry,
//! viewport/scroll metrics and an optional pointer sample.

mod geometry;
mod pointer;
mod viewport;

pub use geometry::{BoxEdges, ElementGeometry, GeometryBox};
pub use pointer::PointerSample;
pub use viewport::{ViewportMetrics, ViewportProvider};
