//! Capability traits for the external camera manipulator.
//!
//! The controller never owns camera state. It reads the current transform
//! through a [`PoseSource`] and writes solved poses through a [`PoseSink`].

use glam::DMat4;

use crate::error::Result;
use crate::pose::{Pose, Projection};

/// Read side of a camera manipulator.
pub trait PoseSource {
    /// Returns the camera-to-world matrix.
    ///
    /// Fails with [`crate::FramingError::NotInitialized`] when the manipulator
    /// is not bound to a view yet.
    fn inverse_view_matrix(&self) -> Result<DMat4>;

    /// Returns the current perspective projection.
    fn projection_as_perspective(&self) -> Result<Projection>;
}

/// Write side of a camera manipulator.
pub trait PoseSink {
    /// Stores the pose that [`PoseSink::home`] returns to.
    fn set_home_position(&mut self, pose: &Pose);

    /// Resets the camera to its home pose.
    fn home(&mut self);

    /// Replaces the camera transform with the given camera-to-world matrix.
    fn set_by_inverse_matrix(&mut self, inverse_view: DMat4);
}
