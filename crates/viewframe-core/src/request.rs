//! Framing requests issued by the application layer.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;

/// A "go to this place" request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FramingRequest {
    /// Fit the circle of `radius` around `center` into the vertical FOV.
    CenterOnRegion {
        center: DVec3,
        radius: f64,
        apply_zoom: bool,
    },
    /// Bring the ground point under the view ray to `(x, y, 0)`.
    MoveToGround { x: f64, y: f64 },
    /// Like [`FramingRequest::MoveToGround`], targeting a boundary's center.
    ///
    /// Reduced to a ground move at `boundary_center` when applied.
    MoveToGroundViaBounds { boundary_center: DVec2 },
}

impl FramingRequest {
    /// Builds a bounds request from a boundary.
    #[must_use]
    pub fn via_bounds(boundary: &Boundary) -> Self {
        FramingRequest::MoveToGroundViaBounds {
            boundary_center: boundary.center(),
        }
    }
}
