//! Core abstractions for viewframe.
//!
//! This crate provides the types and geometry behind camera framing:
//! - [`Pose`] and [`Projection`] describing the current camera
//! - [`FramingRequest`] for "go to this place" requests
//! - [`FrameSolver`] computing new poses in closed form
//! - [`PoseSource`] / [`PoseSink`] traits for the external camera manipulator
//! - Configuration options and error types

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Coordinates are conventionally x/y/z
#![allow(clippy::many_single_char_names)]

pub mod boundary;
pub mod error;
pub mod manipulator;
pub mod options;
pub mod pose;
pub mod request;
pub mod solver;
pub mod zoom;

pub use boundary::Boundary;
pub use error::{DegenerateGeometry, FramingError, Result};
pub use manipulator::{PoseSink, PoseSource};
pub use options::FramingOptions;
pub use pose::{is_parallel, Pose, Projection};
pub use request::FramingRequest;
pub use solver::{FrameSolver, GroundMode};
pub use zoom::{distance_from_zoom, zoom_from_distance};

// Re-export glam types for convenience
pub use glam::{DMat4, DVec2, DVec3};
