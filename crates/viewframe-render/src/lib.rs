//! Camera manipulation backend for viewframe.
//!
//! This crate provides [`CameraManipulator`], an in-memory camera that
//! implements the [`viewframe_core::PoseSource`] and
//! [`viewframe_core::PoseSink`] capabilities and exposes view and projection
//! matrices for rendering.

pub mod camera;

pub use camera::CameraManipulator;
