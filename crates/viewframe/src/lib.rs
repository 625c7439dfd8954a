//! viewframe: camera framing for interactive 3D scene viewers.
//!
//! Given a focus point and a radius of interest, or a target position on the
//! ground plane, viewframe computes a new camera pose that keeps the current
//! viewing direction wherever possible and applies it to a camera manipulator.
//!
//! # Quick Start
//!
//! ```
//! use viewframe::*;
//!
//! fn main() -> Result<()> {
//!     let pose = Pose::new(
//!         DVec3::new(0.0, -100.0, 100.0),
//!         DVec3::new(0.0, -99.0, 99.0),
//!         DVec3::Z,
//!     );
//!     let mut camera = CameraManipulator::new(pose, Projection::default());
//!     let mut changer = PerspectiveChanger::new(&mut camera, &Boundary::new(0.0, 0.0, 800.0, 600.0));
//!
//!     // Fit a circle of radius 25 around a point into the view.
//!     changer.center_on_region(DVec3::new(10.0, 20.0, 0.0), 25.0, false)?;
//!
//!     // Slide the camera so it looks at (40, -5) on the ground.
//!     changer.move_to_ground(40.0, -5.0)?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`PerspectiveChanger`] reads the pose, solves the request, and writes
//!   the result back to the manipulator
//! - [`FrameSolver`] holds the geometry and never touches the camera
//! - [`PoseSource`] / [`PoseSink`] abstract the manipulator;
//!   [`CameraManipulator`] is the in-memory implementation

mod controller;

pub use controller::PerspectiveChanger;

// Re-export core types
pub use viewframe_core::{
    boundary::Boundary,
    error::{DegenerateGeometry, FramingError, Result},
    manipulator::{PoseSink, PoseSource},
    options::FramingOptions,
    pose::{Pose, Projection},
    request::FramingRequest,
    solver::{FrameSolver, GroundMode},
    DMat4, DVec2, DVec3,
};

// Re-export render types
pub use viewframe_render::CameraManipulator;

/// Initializes logging through `env_logger`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("viewframe logging initialized");
    }
}
