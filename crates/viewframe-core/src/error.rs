//! Error types for viewframe.

use thiserror::Error;

/// Geometric configurations the frame solver refuses to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateGeometry {
    /// Camera position and look-at point coincide.
    ZeroViewDirection,
    /// The field-of-view boundary ray coincides with the view direction.
    FovBoundaryParallel,
    /// The up vector is parallel to the view direction.
    UpParallelToView,
}

impl std::fmt::Display for DegenerateGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            DegenerateGeometry::ZeroViewDirection => "camera position equals look-at point",
            DegenerateGeometry::FovBoundaryParallel => {
                "field-of-view boundary is parallel to the view direction"
            }
            DegenerateGeometry::UpParallelToView => "up vector is parallel to the view direction",
        };
        f.write_str(msg)
    }
}

/// The main error type for viewframe operations.
#[derive(Error, Debug)]
pub enum FramingError {
    /// The camera manipulator is not bound to a live view.
    #[error("camera manipulator not initialized - bind it to a view first")]
    NotInitialized,

    /// The framing radius must be finite and strictly positive.
    #[error("invalid framing radius: {0}")]
    InvalidRadius(f64),

    /// The vertical field of view must lie strictly between 0 and 180 degrees.
    #[error("invalid vertical field of view: {0} degrees")]
    InvalidFieldOfView(f64),

    /// A coordinate or vector argument contained NaN or infinity.
    #[error("non-finite {0}")]
    NonFiniteInput(&'static str),

    /// The requested framing cannot be solved for the current camera.
    #[error("cannot frame: {0}")]
    Degenerate(DegenerateGeometry),

    /// A configuration value is out of range.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption {
        name: &'static str,
        reason: &'static str,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<DegenerateGeometry> for FramingError {
    fn from(kind: DegenerateGeometry) -> Self {
        FramingError::Degenerate(kind)
    }
}

/// A specialized Result type for viewframe operations.
pub type Result<T> = std::result::Result<T, FramingError>;
