pub mod smoothing;
pub mod trace_io;
pub mod config;
pub mod synthetic;

pub use smoothing::{smooth, smooth_to_vec, SmoothingError, SmoothingParams};
