//! Camera pose and projection.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{DegenerateGeometry, FramingError, Result};

/// Camera placement: where it sits, what it looks at, and which way is up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Camera position in world space.
    pub position: DVec3,
    /// Point the camera is looking at.
    pub look_at: DVec3,
    /// Up vector.
    pub up: DVec3,
}

impl Pose {
    /// Creates a pose without validating it.
    #[must_use]
    pub fn new(position: DVec3, look_at: DVec3, up: DVec3) -> Self {
        Self {
            position,
            look_at,
            up,
        }
    }

    /// Creates a pose and checks it describes a usable camera.
    pub fn try_new(position: DVec3, look_at: DVec3, up: DVec3) -> Result<Self> {
        let pose = Self::new(position, look_at, up);
        pose.validate(0.0)?;
        Ok(pose)
    }

    /// Recovers a pose from an inverse view (camera-to-world) matrix.
    ///
    /// The look-at point is placed `look_distance` units along the camera's
    /// forward axis.
    #[must_use]
    pub fn from_inverse_view(inverse_view: DMat4, look_distance: f64) -> Self {
        let position = inverse_view.transform_point3(DVec3::ZERO);
        let forward = inverse_view.transform_vector3(DVec3::NEG_Z).normalize_or_zero();
        let up = inverse_view.transform_vector3(DVec3::Y).normalize_or_zero();
        Self {
            position,
            look_at: position + forward * look_distance,
            up,
        }
    }

    /// Unnormalized view direction (`look_at - position`).
    #[must_use]
    pub fn direction(&self) -> DVec3 {
        self.look_at - self.position
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.look_at, self.up.normalize_or_zero())
    }

    /// Returns the inverse view (camera-to-world) matrix.
    #[must_use]
    pub fn inverse_view_matrix(&self) -> DMat4 {
        self.view_matrix().inverse()
    }

    /// Checks finiteness, a non-zero view direction, and that `up` is not
    /// parallel to it.
    ///
    /// `tolerance` bounds the sine of the angle between `up` and the view
    /// direction below which the two count as parallel.
    pub fn validate(&self, tolerance: f64) -> Result<()> {
        if !(self.position.is_finite() && self.look_at.is_finite() && self.up.is_finite()) {
            return Err(FramingError::NonFiniteInput("pose"));
        }
        let dir = self.direction();
        if dir.length_squared() == 0.0 {
            return Err(DegenerateGeometry::ZeroViewDirection.into());
        }
        if self.up.length_squared() == 0.0 || is_parallel(dir, self.up, tolerance) {
            return Err(DegenerateGeometry::UpParallelToView.into());
        }
        Ok(())
    }

    /// Returns a copy translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            position: self.position + offset,
            look_at: self.look_at + offset,
            up: self.up,
        }
    }
}

/// Returns true when `a` and `b` are parallel (or anti-parallel) within
/// `tolerance`, measured as the sine of the angle between them.
#[must_use]
pub fn is_parallel(a: DVec3, b: DVec3, tolerance: f64) -> bool {
    let denom = a.length() * b.length();
    if denom == 0.0 {
        return true;
    }
    a.cross(b).length() / denom <= tolerance
}

/// Perspective projection parameters as reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub vertical_fov: f64,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Near clipping plane.
    pub near_plane: f64,
    /// Far clipping plane.
    pub far_plane: f64,
}

impl Projection {
    /// Creates a projection from a vertical FOV in degrees.
    #[must_use]
    pub fn new(vertical_fov: f64, aspect_ratio: f64, near_plane: f64, far_plane: f64) -> Self {
        Self {
            vertical_fov,
            aspect_ratio,
            near_plane,
            far_plane,
        }
    }

    /// Half of the vertical field of view, in radians.
    #[must_use]
    pub fn half_fov_radians(&self) -> f64 {
        (0.5 * self.vertical_fov).to_radians()
    }

    /// Returns the right-handed perspective projection matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.vertical_fov.to_radians(),
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        )
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(30.0, 16.0 / 9.0, 0.1, 10_000.0)
    }
}
