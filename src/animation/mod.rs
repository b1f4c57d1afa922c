//! Animation helpers shared by the can tilt and the audio fades

mod smoothing;

pub use smoothing::{smooth_toward, ramp_toward};
