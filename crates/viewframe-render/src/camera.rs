//! Camera manipulator and view management.

use glam::{DMat4, DVec3};
use viewframe_core::{FramingError, Pose, PoseSink, PoseSource, Projection, Result};

/// A camera manipulator holding the live transform of one view.
///
/// A manipulator starts out unbound; reading from it fails with
/// [`FramingError::NotInitialized`] until [`CameraManipulator::bind`] attaches
/// a pose and projection. Writes are always accepted.
#[derive(Debug, Clone, Default)]
pub struct CameraManipulator {
    pose: Option<Pose>,
    projection: Option<Projection>,
    home: Option<Pose>,
}

impl CameraManipulator {
    /// Creates a manipulator bound to a view.
    #[must_use]
    pub fn new(pose: Pose, projection: Projection) -> Self {
        Self {
            pose: Some(pose),
            projection: Some(projection),
            home: Some(pose),
        }
    }

    /// Creates a manipulator that is not yet bound to a view.
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Binds the manipulator to a view. The pose also becomes the home pose.
    pub fn bind(&mut self, pose: Pose, projection: Projection) {
        self.pose = Some(pose);
        self.projection = Some(projection);
        self.home = Some(pose);
    }

    /// Returns whether a pose and projection are attached.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.pose.is_some() && self.projection.is_some()
    }

    /// Returns the current pose, look-at point included.
    #[must_use]
    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    /// Returns the home pose.
    #[must_use]
    pub fn home_pose(&self) -> Option<Pose> {
        self.home
    }

    /// Returns the projection.
    #[must_use]
    pub fn projection(&self) -> Option<Projection> {
        self.projection
    }

    /// Distance between the camera and the look-at point.
    #[must_use]
    pub fn distance(&self) -> Option<f64> {
        self.pose.map(|pose| pose.direction().length())
    }

    /// Sets the aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        if let Some(projection) = self.projection.as_mut() {
            projection.aspect_ratio = aspect_ratio;
        }
    }

    /// Sets the vertical field of view in degrees.
    pub fn set_fov_degrees(&mut self, degrees: f64) {
        if let Some(projection) = self.projection.as_mut() {
            projection.vertical_fov = degrees.clamp(1.0, 179.0);
        }
    }

    /// Returns the view matrix.
    pub fn view_matrix(&self) -> Result<DMat4> {
        self.pose
            .map(|pose| pose.view_matrix())
            .ok_or(FramingError::NotInitialized)
    }

    /// Returns the projection matrix.
    pub fn projection_matrix(&self) -> Result<DMat4> {
        self.projection
            .map(|projection| projection.matrix())
            .ok_or(FramingError::NotInitialized)
    }

    /// Returns the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Result<DMat4> {
        Ok(self.projection_matrix()? * self.view_matrix()?)
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Option<DVec3> {
        self.pose.map(|pose| pose.direction().normalize_or_zero())
    }
}

impl PoseSource for CameraManipulator {
    fn inverse_view_matrix(&self) -> Result<DMat4> {
        self.pose
            .map(|pose| pose.inverse_view_matrix())
            .ok_or(FramingError::NotInitialized)
    }

    fn projection_as_perspective(&self) -> Result<Projection> {
        self.projection.ok_or(FramingError::NotInitialized)
    }
}

impl PoseSink for CameraManipulator {
    fn set_home_position(&mut self, pose: &Pose) {
        self.home = Some(*pose);
    }

    fn home(&mut self) {
        match self.home {
            Some(home) => self.pose = Some(home),
            None => log::warn!("home requested before a home pose was set"),
        }
    }

    /// Keeps the current orbit distance, so the look-at point moves with the
    /// camera rather than snapping to unit distance.
    fn set_by_inverse_matrix(&mut self, inverse_view: DMat4) {
        let distance = self
            .distance()
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(1.0);
        self.pose = Some(Pose::from_inverse_view(inverse_view, distance));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose() -> Pose {
        Pose::new(DVec3::new(0.0, -10.0, 10.0), DVec3::ZERO, DVec3::Z)
    }

    fn assert_vec_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_unbound_reads_fail() {
        let manipulator = CameraManipulator::unbound();
        assert!(!manipulator.is_bound());
        assert!(matches!(
            manipulator.inverse_view_matrix(),
            Err(FramingError::NotInitialized)
        ));
        assert!(matches!(
            manipulator.projection_as_perspective(),
            Err(FramingError::NotInitialized)
        ));
    }

    #[test]
    fn test_bind() {
        let mut manipulator = CameraManipulator::unbound();
        manipulator.bind(pose(), Projection::default());
        assert!(manipulator.is_bound());
        assert_eq!(manipulator.home_pose(), Some(pose()));
        assert!(manipulator.view_projection_matrix().is_ok());
    }

    #[test]
    fn test_home_resets_to_home_pose() {
        let mut manipulator = CameraManipulator::new(pose(), Projection::default());
        let home = Pose::new(DVec3::new(5.0, 5.0, 50.0), DVec3::new(5.0, 6.0, 0.0), DVec3::Z);
        manipulator.set_home_position(&home);
        assert_eq!(manipulator.pose(), Some(pose()));

        manipulator.home();
        assert_eq!(manipulator.pose(), Some(home));
    }

    #[test]
    fn test_set_by_inverse_matrix_keeps_distance() {
        let mut manipulator = CameraManipulator::new(pose(), Projection::default());
        let start_distance = manipulator.distance().unwrap();

        let target = pose().translated(DVec3::new(3.0, 4.0, 0.0));
        manipulator.set_by_inverse_matrix(target.inverse_view_matrix());

        let current = manipulator.pose().unwrap();
        assert_vec_close(current.position, target.position);
        assert_vec_close(current.look_at, target.look_at);
        assert!((manipulator.distance().unwrap() - start_distance).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_view_round_trip() {
        let mut manipulator = CameraManipulator::new(pose(), Projection::default());
        let written = Pose::new(DVec3::new(-7.0, 2.0, 30.0), DVec3::new(-7.0, 3.0, 29.0), DVec3::Z);
        manipulator.set_by_inverse_matrix(written.inverse_view_matrix());

        let read = Pose::from_inverse_view(manipulator.inverse_view_matrix().unwrap(), 1.0);
        assert_vec_close(read.position, written.position);
        assert_vec_close(read.direction(), written.direction().normalize());
    }

    #[test]
    fn test_set_fov_clamping() {
        let mut manipulator = CameraManipulator::new(pose(), Projection::default());
        manipulator.set_fov_degrees(0.0);
        assert_eq!(manipulator.projection().unwrap().vertical_fov, 1.0);
        manipulator.set_fov_degrees(270.0);
        assert_eq!(manipulator.projection().unwrap().vertical_fov, 179.0);
    }

    #[test]
    fn test_projection_setters_read_back() {
        let mut manipulator = CameraManipulator::new(pose(), Projection::default());
        manipulator.set_aspect_ratio(4.0 / 3.0);
        manipulator.set_fov_degrees(60.0);

        let projection = manipulator.projection_as_perspective().unwrap();
        assert_eq!(projection.aspect_ratio, 4.0 / 3.0);
        assert_eq!(projection.vertical_fov, 60.0);
    }

    #[test]
    fn test_projection_setters_ignored_when_unbound() {
        let mut manipulator = CameraManipulator::unbound();
        manipulator.set_aspect_ratio(2.0);
        manipulator.set_fov_degrees(60.0);
        assert!(manipulator.projection_as_perspective().is_err());
    }

    #[test]
    fn test_forward() {
        let manipulator = CameraManipulator::new(pose(), Projection::default());
        let forward = manipulator.forward().unwrap();
        assert_vec_close(forward, DVec3::new(0.0, 1.0, -1.0).normalize());
    }
}
