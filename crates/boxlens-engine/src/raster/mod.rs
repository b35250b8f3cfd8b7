//! CPU rasteriser.
//!
//! Replays a recorded [`DrawList`](crate::scene::DrawList) into a
//! [`PixelBuffer`] backed by `tiny_skia`. Fills cover whole pixels while
//! strokes are antialiased. Text uses `fontdue` glyph coverage.

mod pixels;
mod rasterizer;

use std::fmt;

pub use pixels::PixelBuffer;
pub use rasterizer::Rasterizer;

/// Error returned when a pixel buffer cannot be written out.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// The requested buffer has a zero or oversized dimension.
    BufferSize { width: u32, height: u32 },
    /// PNG encoding or file I/O failed.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::BufferSize { width, height } => {
                write!(f, "raster error: cannot allocate a {width}x{height} pixel buffer")
            }
            RasterError::Encode(msg) => write!(f, "raster error: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}
