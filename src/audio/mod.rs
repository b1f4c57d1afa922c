//! Background music, the watering loop and bloom chimes

pub mod mixer;
pub mod web;

pub use mixer::{AudioBackend, AudioMixer, StartResult, Track};
pub use web::WebAudioBackend;
