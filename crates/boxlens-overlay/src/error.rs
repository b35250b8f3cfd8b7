use std::fmt;

use boxlens_engine::coords::Viewport;
use boxlens_engine::surface::Surface;

/// Why an overlay call was rejected.
///
/// Every variant is a caller precondition violation; renderers check them
/// before touching the surface, so a rejected call draws nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayError {
    /// Grid pitch must be finite and greater than zero, and coarse enough to
    /// stay within [`MAX_GRID_LINES`](crate::grid::MAX_GRID_LINES) per axis.
    InvalidPitch(f32),
    /// The surface has no drawable area.
    EmptySurface { width: f32, height: f32 },
    /// The box-model overlay was given no targets.
    NoTargets,
    /// A required computed-style entry was absent or not numeric.
    MissingStyle(&'static str),
    /// The host could not measure an element.
    Geometry(String),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::InvalidPitch(p) => write!(f, "overlay error: invalid grid pitch {p}"),
            OverlayError::EmptySurface { width, height } => {
                write!(f, "overlay error: surface {width}x{height} has no drawable area")
            }
            OverlayError::NoTargets => write!(f, "overlay error: no target elements given"),
            OverlayError::MissingStyle(name) => {
                write!(f, "overlay error: computed style has no numeric '{name}' entry")
            }
            OverlayError::Geometry(msg) => write!(f, "overlay error: cannot measure element: {msg}"),
        }
    }
}

impl std::error::Error for OverlayError {}

/// Returns the surface size, or `EmptySurface` if it cannot be drawn on.
pub(crate) fn checked_size<S: Surface + ?Sized>(surface: &S) -> Result<Viewport, OverlayError> {
    let size = surface.size();
    if size.is_valid() {
        Ok(size)
    } else {
        Err(OverlayError::EmptySurface { width: size.width, height: size.height })
    }
}
