//! Zoom conversions.
//!
//! Zoom is not yet derived from camera distance: both conversions report the
//! configured placeholder regardless of their argument.

use crate::options::FramingOptions;

/// Converts a camera height to a zoom level. Currently a constant.
#[must_use]
pub fn zoom_from_distance(options: &FramingOptions, _distance: f64) -> f64 {
    options.placeholder_zoom
}

/// Converts a zoom level to a camera height. Currently a constant.
// TODO: derive the height from the vertical FOV once zoom is applied by region framing.
#[must_use]
pub fn distance_from_zoom(options: &FramingOptions, _zoom: f64) -> f64 {
    options.placeholder_zoom
}
