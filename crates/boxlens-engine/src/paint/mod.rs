//! Paint model shared between the surface and the rasteriser.
//!
//! Colors are premultiplied. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
