//! Perspective changer: framing requests against a live camera manipulator.
//!
//! Every operation reads the current pose fresh from the manipulator, solves
//! the request, and writes the result back. A request that cannot be solved
//! returns an error before anything is written, so the camera stays where it
//! was.

use viewframe_core::{
    distance_from_zoom, zoom_from_distance, Boundary, DVec3, FrameSolver, FramingError,
    FramingOptions, FramingRequest, Pose, PoseSink, PoseSource, Projection, Result,
};

/// Camera framing controller bound to one manipulator for its whole lifetime.
///
/// The manipulator is borrowed, not owned, so the controller cannot outlive
/// it and access to it is serialized through the controller.
#[derive(Debug)]
pub struct PerspectiveChanger<'a, M>
where
    M: PoseSource + PoseSink,
{
    manipulator: &'a mut M,
    solver: FrameSolver,
    orig_width: f64,
    orig_height: f64,
    /// Recorded but never applied to the camera transform.
    rotation: f64,
}

impl<'a, M> PerspectiveChanger<'a, M>
where
    M: PoseSource + PoseSink,
{
    /// Creates a controller for the view covering `viewport`.
    pub fn new(manipulator: &'a mut M, viewport: &Boundary) -> Self {
        Self::with_options(manipulator, viewport, FramingOptions::default())
    }

    /// Creates a controller with custom options.
    pub fn with_options(
        manipulator: &'a mut M,
        viewport: &Boundary,
        options: FramingOptions,
    ) -> Self {
        Self {
            manipulator,
            solver: FrameSolver::new(options),
            orig_width: viewport.width(),
            orig_height: viewport.height(),
            rotation: 0.0,
        }
    }

    /// Returns the options in use.
    pub fn options(&self) -> &FramingOptions {
        self.solver.options()
    }

    /// Returns the bound manipulator.
    pub fn manipulator(&self) -> &M {
        &*self.manipulator
    }

    /// Width of the viewport the controller was created for.
    pub fn orig_width(&self) -> f64 {
        self.orig_width
    }

    /// Height of the viewport the controller was created for.
    pub fn orig_height(&self) -> f64 {
        self.orig_height
    }

    // ========================================================================
    // Pose reader
    // ========================================================================

    /// Reads the current pose from the manipulator's inverse view matrix.
    pub fn read_pose(&self) -> Result<Pose> {
        let inverse_view = require_bound(self.manipulator.inverse_view_matrix())?;
        Ok(Pose::from_inverse_view(
            inverse_view,
            self.solver.options().look_distance,
        ))
    }

    /// Reads the current projection.
    pub fn read_projection(&self) -> Result<Projection> {
        require_bound(self.manipulator.projection_as_perspective())
    }

    // ========================================================================
    // Framing requests
    // ========================================================================

    /// Dispatches any framing request.
    ///
    /// This is where a bounds request is reduced to a ground move at the
    /// boundary's center.
    pub fn apply(&mut self, request: FramingRequest) -> Result<Pose> {
        match request {
            FramingRequest::CenterOnRegion {
                center,
                radius,
                apply_zoom,
            } => self.center_on_region(center, radius, apply_zoom),
            FramingRequest::MoveToGround { x, y } => self.move_to_ground(x, y),
            FramingRequest::MoveToGroundViaBounds { boundary_center } => {
                self.move_to_ground(boundary_center.x, boundary_center.y)
            }
        }
    }

    /// Keeps the view direction and moves the camera so that the circle of
    /// `radius` around `center` fills the vertical field of view.
    ///
    /// The result becomes the manipulator's home pose and the view is reset
    /// to it immediately. `apply_zoom` is accepted for API compatibility; zoom
    /// is not derived from distance yet.
    pub fn center_on_region(
        &mut self,
        center: DVec3,
        radius: f64,
        apply_zoom: bool,
    ) -> Result<Pose> {
        let pose = self.read_pose()?;
        let projection = self.read_projection()?;
        let framed =
            reject_on_error(self.solver.center_on_region(&pose, &projection, center, radius))?;
        if apply_zoom {
            log::debug!("zoom requested for region framing; zoom is a placeholder and is ignored");
        }
        self.write_home(&framed);
        Ok(framed)
    }

    /// Moves the camera so that it frames `(x, y)` on the ground plane.
    ///
    /// Looking down at the ground from an oblique angle, the camera is shifted
    /// horizontally with its view direction kept. Otherwise it snaps above the
    /// target looking straight down.
    pub fn move_to_ground(&mut self, x: f64, y: f64) -> Result<Pose> {
        let pose = self.read_pose()?;
        let moved = reject_on_error(self.solver.move_to_ground(&pose, x, y))?;
        self.write_direct(&moved);
        Ok(moved)
    }

    /// Moves to the center of `boundary` on the ground plane.
    pub fn move_to_ground_via_bounds(&mut self, boundary: &Boundary) -> Result<Pose> {
        self.apply(FramingRequest::via_bounds(boundary))
    }

    /// Moves to `(x, y)`; the zoom level is ignored.
    pub fn set_viewport(&mut self, _zoom: f64, x: f64, y: f64) -> Result<Pose> {
        self.move_to_ground(x, y)
    }

    /// Moves to `(x, y)`; the height is ignored and the current one kept.
    pub fn set_viewport_from(&mut self, x: f64, y: f64, _z: f64) -> Result<Pose> {
        self.move_to_ground(x, y)
    }

    // ========================================================================
    // Pose writer
    // ========================================================================

    fn write_home(&mut self, pose: &Pose) {
        self.manipulator.set_home_position(pose);
        self.manipulator.home();
    }

    fn write_direct(&mut self, pose: &Pose) {
        self.manipulator.set_by_inverse_matrix(pose.inverse_view_matrix());
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Camera x position.
    pub fn x_pos(&self) -> Result<f64> {
        Ok(self.read_pose()?.position.x)
    }

    /// Camera y position.
    pub fn y_pos(&self) -> Result<f64> {
        Ok(self.read_pose()?.position.y)
    }

    /// Camera z position.
    pub fn z_pos(&self) -> Result<f64> {
        Ok(self.read_pose()?.position.z)
    }

    /// Returns the recorded rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Records a rotation in degrees. The camera transform is not changed.
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Current zoom level. Currently a constant placeholder.
    pub fn zoom(&self) -> f64 {
        self.solver.options().placeholder_zoom
    }

    /// See [`viewframe_core::zoom_from_distance`].
    pub fn zoom_from_distance(&self, distance: f64) -> f64 {
        zoom_from_distance(self.solver.options(), distance)
    }

    /// See [`viewframe_core::distance_from_zoom`].
    pub fn distance_from_zoom(&self, zoom: f64) -> f64 {
        distance_from_zoom(self.solver.options(), zoom)
    }
}

fn require_bound<T>(result: Result<T>) -> Result<T> {
    result.map_err(|err| {
        if matches!(err, FramingError::NotInitialized) {
            log::error!("framing requested on an unbound camera manipulator");
        }
        err
    })
}

fn reject_on_error(result: Result<Pose>) -> Result<Pose> {
    result.map_err(|err| {
        log::warn!("framing request rejected, camera left unchanged: {err}");
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewframe_core::{DMat4, DegenerateGeometry};

    /// Manipulator double recording every write.
    #[derive(Debug, Default)]
    struct RecordingManipulator {
        inverse_view: Option<DMat4>,
        projection: Option<Projection>,
        home_pose: Option<Pose>,
        home_calls: usize,
        direct_writes: Vec<DMat4>,
    }

    impl RecordingManipulator {
        fn bound(pose: Pose) -> Self {
            Self {
                inverse_view: Some(pose.inverse_view_matrix()),
                projection: Some(Projection::new(60.0, 1.0, 0.1, 1000.0)),
                ..Self::default()
            }
        }

        fn untouched(&self) -> bool {
            self.home_pose.is_none() && self.home_calls == 0 && self.direct_writes.is_empty()
        }
    }

    impl PoseSource for RecordingManipulator {
        fn inverse_view_matrix(&self) -> Result<DMat4> {
            self.inverse_view.ok_or(FramingError::NotInitialized)
        }

        fn projection_as_perspective(&self) -> Result<Projection> {
            self.projection.ok_or(FramingError::NotInitialized)
        }
    }

    impl PoseSink for RecordingManipulator {
        fn set_home_position(&mut self, pose: &Pose) {
            self.home_pose = Some(*pose);
        }

        fn home(&mut self) {
            self.home_calls += 1;
            if let Some(pose) = self.home_pose {
                self.inverse_view = Some(pose.inverse_view_matrix());
            }
        }

        fn set_by_inverse_matrix(&mut self, inverse_view: DMat4) {
            self.direct_writes.push(inverse_view);
            self.inverse_view = Some(inverse_view);
        }
    }

    fn oblique() -> Pose {
        Pose::new(DVec3::new(0.0, -100.0, 100.0), DVec3::new(0.0, -99.0, 99.0), DVec3::Z)
    }

    fn viewport() -> Boundary {
        Boundary::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn test_unbound_is_reported() {
        let mut manipulator = RecordingManipulator::default();
        let mut changer = PerspectiveChanger::new(&mut manipulator, &viewport());

        assert!(matches!(changer.x_pos(), Err(FramingError::NotInitialized)));
        assert!(matches!(
            changer.move_to_ground(1.0, 2.0),
            Err(FramingError::NotInitialized)
        ));
        assert!(matches!(
            changer.center_on_region(DVec3::ZERO, 1.0, false),
            Err(FramingError::NotInitialized)
        ));
        assert!(manipulator.untouched());
    }

    #[test]
    fn test_center_on_region_writes_home_and_resets() {
        let mut manipulator = RecordingManipulator::bound(oblique());
        let mut changer = PerspectiveChanger::new(&mut manipulator, &viewport());

        let center = DVec3::new(20.0, 30.0, 0.0);
        let framed = changer.center_on_region(center, 15.0, true).unwrap();
        assert_eq!(framed.look_at, center);

        assert_eq!(manipulator.home_pose, Some(framed));
        assert_eq!(manipulator.home_calls, 1);
        assert!(manipulator.direct_writes.is_empty());
    }

    #[test]
    fn test_move_to_ground_writes_inverse_matrix() {
        let mut manipulator = RecordingManipulator::bound(oblique());
        let mut changer = PerspectiveChanger::new(&mut manipulator, &viewport());

        let moved = changer.move_to_ground(10.0, 20.0).unwrap();

        assert_eq!(manipulator.direct_writes.len(), 1);
        assert_eq!(manipulator.home_calls, 0);
        let written = Pose::from_inverse_view(manipulator.direct_writes[0], 1.0);
        assert!((written.position - moved.position).length() < 1e-9);
    }

    #[test]
    fn test_rejected_request_leaves_camera_unchanged() {
        let start = oblique();
        let mut manipulator = RecordingManipulator::bound(start);
        let mut changer = PerspectiveChanger::new(&mut manipulator, &viewport());

        assert!(matches!(
            changer.center_on_region(DVec3::ZERO, -1.0, false),
            Err(FramingError::InvalidRadius(_))
        ));
        assert!(matches!(
            changer.move_to_ground(f64::INFINITY, 0.0),
            Err(FramingError::NonFiniteInput(_))
        ));
        assert!(manipulator.untouched());
        assert_eq!(manipulator.inverse_view, Some(start.inverse_view_matrix()));
    }

    #[test]
    fn test_degenerate_projection_is_rejected() {
        let mut manipulator = RecordingManipulator::bound(oblique());
        manipulator.projection = Some(Projection::new(1e-12, 1.0, 0.1, 100.0));
        let mut changer = PerspectiveChanger::new(&mut manipulator, &viewport());

        assert!(matches!(
            changer.center_on_region(DVec3::ZERO, 5.0, false),
            Err(FramingError::Degenerate(DegenerateGeometry::FovBoundaryParallel))
        ));
        assert!(manipulator.untouched());
    }

    #[test]
    fn test_rotation_is_recorded_not_applied() {
        let start = oblique();
        let mut manipulator = RecordingManipulator::bound(start);
        let mut changer = PerspectiveChanger::new(&mut manipulator, &viewport());

        assert_eq!(changer.rotation(), 0.0);
        changer.set_rotation(45.0);
        assert_eq!(changer.rotation(), 45.0);
        assert!(manipulator.untouched());
        assert_eq!(manipulator.inverse_view, Some(start.inverse_view_matrix()));
    }

    #[test]
    fn test_viewport_dimensions_and_zoom_placeholders() {
        let mut manipulator = RecordingManipulator::bound(oblique());
        let changer = PerspectiveChanger::new(&mut manipulator, &viewport());

        assert_eq!(changer.orig_width(), 800.0);
        assert_eq!(changer.orig_height(), 600.0);
        assert_eq!(changer.zoom(), 100.0);
        assert_eq!(changer.zoom_from_distance(3.0), 100.0);
        assert_eq!(changer.distance_from_zoom(3.0), 100.0);
    }

    #[test]
    fn test_set_viewport_ignores_zoom_and_height() {
        let mut a = RecordingManipulator::bound(oblique());
        let mut b = RecordingManipulator::bound(oblique());

        let via_viewport = PerspectiveChanger::new(&mut a, &viewport())
            .set_viewport(7.0, 5.0, 6.0)
            .unwrap();
        let via_from = PerspectiveChanger::new(&mut b, &viewport())
            .set_viewport_from(5.0, 6.0, 999.0)
            .unwrap();

        assert_eq!(via_viewport, via_from);
    }

    #[test]
    fn test_apply_dispatches_bounds() {
        let mut manipulator = RecordingManipulator::bound(oblique());
        let mut changer = PerspectiveChanger::new(&mut manipulator, &viewport());

        let bounds = Boundary::new(-10.0, -10.0, 30.0, 10.0);
        let moved = changer.apply(FramingRequest::via_bounds(&bounds)).unwrap();
        let direct = changer.move_to_ground(10.0, 0.0).unwrap();
        assert!((moved.position - direct.position).length() < 1e-9);

        let via_bounds = changer.move_to_ground_via_bounds(&bounds).unwrap();
        assert!((via_bounds.position - moved.position).length() < 1e-9);
        assert!((via_bounds.look_at - moved.look_at).length() < 1e-9);
    }
}
