//! Distance matrices.
//!
//! Provides a dense integer distance matrix built from great-circle
//! distances between location coordinates.

mod haversine;
mod matrix;

pub use haversine::{haversine_m, EARTH_RADIUS_M};
pub use matrix::DistanceMatrix;
