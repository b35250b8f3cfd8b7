//! boxlens engine crate.
//!
//! This crate owns the drawing surface, the recorded draw stream and the CPU
//! rasteriser that overlay renderers draw through.

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod surface;
pub mod raster;
pub mod text;
