//! Frame solver: closed-form camera placement for framing requests.
//!
//! Both solves keep the current viewing direction wherever the geometry
//! allows it. Inputs are validated up front and every degenerate case is
//! reported as an error, so a solved pose is always finite with a non-zero
//! view direction and an up vector that is not parallel to it.

use glam::DVec3;

use crate::error::{DegenerateGeometry, FramingError, Result};
use crate::options::FramingOptions;
use crate::pose::{Pose, Projection};

/// How a ground move repositions the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundMode {
    /// Snap above the target, looking straight down.
    BirdsEye,
    /// Translate horizontally, keeping the view direction.
    OrientedShift,
}

/// Pure geometry for framing requests.
#[derive(Debug, Clone, Default)]
pub struct FrameSolver {
    options: FramingOptions,
}

impl FrameSolver {
    /// Creates a solver with the given options.
    #[must_use]
    pub fn new(options: FramingOptions) -> Self {
        Self { options }
    }

    /// Returns the solver options.
    #[must_use]
    pub fn options(&self) -> &FramingOptions {
        &self.options
    }

    /// Places the camera so the circle of `radius` around `center` exactly
    /// fills the vertical field of view, looking at `center` along the
    /// current view direction.
    ///
    /// The circle is taken in the plane spanned by the view direction's
    /// horizontal normal. For a vertical view direction the normal falls back
    /// to `-X`.
    pub fn center_on_region(
        &self,
        pose: &Pose,
        projection: &Projection,
        center: DVec3,
        radius: f64,
    ) -> Result<Pose> {
        let tolerance = self.options.parallel_tolerance;
        pose.validate(tolerance)?;
        if !center.is_finite() {
            return Err(FramingError::NonFiniteInput("region center"));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(FramingError::InvalidRadius(radius));
        }
        let fov = projection.vertical_fov;
        if !(fov.is_finite() && fov > 0.0 && fov < 180.0) {
            return Err(FramingError::InvalidFieldOfView(fov));
        }

        let dir = pose.direction().normalize();
        let ortho_dir = horizontal_normal(dir, tolerance);
        let edge = center + ortho_dir * radius;

        let half_fov = projection.half_fov_radians();
        let outer_fov = dir * half_fov.cos() + ortho_dir * half_fov.sin();
        let radius_vec = edge - center;

        let edge_moment = outer_fov.cross(radius_vec);
        let dir_moment = outer_fov.cross(dir);
        if dir_moment.length() <= tolerance {
            return Err(DegenerateGeometry::FovBoundaryParallel.into());
        }
        // Negative when the camera has to sit behind the center.
        let sign = if edge_moment.dot(dir_moment) > 0.0 {
            1.0
        } else {
            -1.0
        };
        let distance = edge_moment.length() / dir_moment.length();
        let position = center + dir * sign * distance;

        let framed = Pose::new(position, center, pose.up);
        framed.validate(tolerance)?;
        log::debug!(
            "framed region at {center:?} (radius {radius}) from {position:?}, distance {distance}"
        );
        Ok(framed)
    }

    /// Picks the ground-move mode for the current attitude.
    ///
    /// A view direction with a (near) zero vertical component never reaches
    /// the oriented shift, which would divide by it.
    #[must_use]
    pub fn ground_mode(&self, pose: &Pose) -> GroundMode {
        let dir = pose.direction();
        let level = dir.z.abs() <= self.options.parallel_tolerance * dir.length();
        if (dir.z > 0.0 && pose.position.z >= 0.0) || level {
            GroundMode::BirdsEye
        } else {
            GroundMode::OrientedShift
        }
    }

    /// Moves the camera so that it frames `(x, y)` on the ground plane z = 0.
    pub fn move_to_ground(&self, pose: &Pose, x: f64, y: f64) -> Result<Pose> {
        let tolerance = self.options.parallel_tolerance;
        pose.validate(tolerance)?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(FramingError::NonFiniteInput("ground target"));
        }

        let mode = self.ground_mode(pose);
        let moved = match mode {
            GroundMode::BirdsEye => {
                let position = DVec3::new(x, y, pose.position.z);
                Pose::new(position, position - DVec3::Z, birds_eye_up(pose, tolerance))
            }
            GroundMode::OrientedShift => {
                let dir = pose.direction();
                let t = -pose.position.z / dir.z;
                let ground = pose.position + dir * t;
                pose.translated(DVec3::new(x - ground.x, y - ground.y, 0.0))
            }
        };

        moved.validate(tolerance)?;
        log::debug!("ground move to ({x}, {y}) via {mode:?}: {moved:?}");
        Ok(moved)
    }
}

/// Unit vector perpendicular to `dir` within the horizontal plane, or `-X`
/// when `dir` is vertical.
fn horizontal_normal(dir: DVec3, tolerance: f64) -> DVec3 {
    let normal = DVec3::new(-dir.y, dir.x, 0.0);
    if normal.length() <= tolerance {
        DVec3::NEG_X
    } else {
        normal.normalize()
    }
}

/// Up vector for a straight-down camera.
///
/// The screen top always points along the previous horizontal heading, so
/// level, slightly rising and slightly falling cameras all land with the same
/// orientation. A camera that was already looking vertically has no heading
/// and keeps its up vector, which validation guarantees is not vertical.
fn birds_eye_up(pose: &Pose, tolerance: f64) -> DVec3 {
    let dir = pose.direction();
    let heading = DVec3::new(dir.x, dir.y, 0.0);
    if heading.length() <= tolerance * dir.length() {
        pose.up
    } else {
        heading.normalize()
    }
}
