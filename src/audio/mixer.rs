//! Audio state that does not depend on the browser
//!
//! The mixer decides *what* should be heard each tick. An [`AudioBackend`]
//! carries the commands out. Starting playback is asynchronous in browsers,
//! so it is split into a request ([`AudioBackend::request_start`]) and a
//! result ([`StartResult`]) collected on a later tick.

use crate::animation::ramp_toward;
use crate::data::{AudioConfig, FlowerVariant};

/// Long-running tracks the mixer controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Background music, started on first interaction
    Background,
    /// Looping pour sound, faded in and out with watering
    Water,
}

/// Outcome of an earlier start request
#[derive(Debug, Clone, PartialEq)]
pub enum StartResult {
    Started(Track),
    Failed(Track, String),
}

/// Sink for mixer commands
pub trait AudioBackend {
    /// Begin playback; the outcome is reported through `poll_results`
    fn request_start(&mut self, track: Track);
    /// Results of start requests that settled since the last poll
    fn poll_results(&mut self) -> Vec<StartResult>;
    fn set_gain(&mut self, track: Track, gain: f32);
    /// Pause and rewind to the beginning
    fn stop(&mut self, track: Track);
    /// Fire-and-forget one-shot; overlapping plays must not cut each other off
    fn play_bloom(&mut self, variant: FlowerVariant);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PlayState {
    #[default]
    Stopped,
    /// Start requested, result not in yet
    Pending,
    Playing,
}

pub struct AudioMixer {
    params: AudioConfig,
    background: PlayState,
    water: PlayState,
    /// Set after a rejected water start; cleared by the next interaction
    water_blocked: bool,
    water_gain: f32,
}

impl AudioMixer {
    pub fn new(params: AudioConfig) -> Self {
        Self {
            params,
            background: PlayState::Stopped,
            water: PlayState::Stopped,
            water_blocked: false,
            water_gain: 0.0,
        }
    }

    /// Called on any pointer move, press or touch.
    ///
    /// Starts the background track once; a failed start is retried on the
    /// next interaction.
    pub fn unlock(&mut self, backend: &mut dyn AudioBackend) {
        self.water_blocked = false;
        if !self.params.enabled || self.background != PlayState::Stopped {
            return;
        }
        self.background = PlayState::Pending;
        backend.request_start(Track::Background);
    }

    /// Per-tick update of the water loop
    pub fn update(&mut self, any_watering: bool, backend: &mut dyn AudioBackend) {
        for result in backend.poll_results() {
            self.on_start_result(result);
        }

        if !self.params.enabled {
            return;
        }

        let target = if any_watering { self.params.water_gain } else { 0.0 };

        if any_watering && self.water == PlayState::Stopped && !self.water_blocked {
            self.water = PlayState::Pending;
            backend.request_start(Track::Water);
        }

        self.water_gain = ramp_toward(self.water_gain, target, self.params.gain_step);
        backend.set_gain(Track::Water, self.water_gain);

        if self.water_gain <= 0.0 && target <= 0.0 && self.water == PlayState::Playing {
            backend.stop(Track::Water);
            self.water = PlayState::Stopped;
        }
    }

    /// Apply a settled start request
    pub fn on_start_result(&mut self, result: StartResult) {
        match result {
            StartResult::Started(track) => {
                log::debug!("{:?} track started", track);
                *self.state_mut(track) = PlayState::Playing;
            }
            StartResult::Failed(track, reason) => {
                log::warn!("{:?} track failed to start: {}", track, reason);
                *self.state_mut(track) = PlayState::Stopped;
                if track == Track::Water {
                    self.water_blocked = true;
                }
            }
        }
    }

    pub fn bloom(&mut self, variant: FlowerVariant, backend: &mut dyn AudioBackend) {
        if self.params.enabled {
            backend.play_bloom(variant);
        }
    }

    fn state_mut(&mut self, track: Track) -> &mut PlayState {
        match track {
            Track::Background => &mut self.background,
            Track::Water => &mut self.water,
        }
    }

    #[cfg(test)]
    fn water_gain(&self) -> f32 {
        self.water_gain
    }

    #[cfg(test)]
    fn background_started(&self) -> bool {
        self.background == PlayState::Playing
    }

    #[cfg(test)]
    fn water_playing(&self) -> bool {
        self.water == PlayState::Playing
    }
}
