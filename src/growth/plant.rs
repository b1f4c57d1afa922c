use crate::data::{FlowerVariant, GrowthConfig};
use crate::math::Vec2;

/// Where a plant is in its watering lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantState {
    /// Not being watered and not yet grown
    Idle,
    /// Reach point is inside the trigger radius
    Watering,
    /// Growth reached 1.0; proximity is ignored from now on
    Grown,
}

/// Fired once when a plant finishes growing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bloom {
    pub row: usize,
    pub col: usize,
    pub variant: FlowerVariant,
}

/// A single pot in the garden grid
#[derive(Debug, Clone)]
pub struct Plant {
    pub position: Vec2,
    pub row: usize,
    pub col: usize,
    pub variant: FlowerVariant,
    watering: bool,
    growth: f32,
    /// Scene time (seconds) at which the current watering run started
    start_time: f64,
    bloom_played: bool,
}

impl Plant {
    pub fn new(position: Vec2, row: usize, col: usize) -> Self {
        Self {
            position,
            row,
            col,
            variant: FlowerVariant::for_cell(row, col),
            watering: false,
            growth: 0.0,
            start_time: 0.0,
            bloom_played: false,
        }
    }

    /// Advance the watering state machine.
    ///
    /// `reach` is the pointer position already shifted by the hand offset.
    /// Returns a bloom the first tick growth hits 1.0.
    pub fn update(&mut self, reach: Vec2, now: f64, params: &GrowthConfig) -> Option<Bloom> {
        if reach.distance(&self.position) >= params.trigger_radius {
            self.watering = false;
            return None;
        }

        if self.is_grown() {
            self.watering = false;
            return None;
        }

        if !self.watering {
            // Fresh run: no credit for earlier interrupted watering
            self.watering = true;
            self.start_time = now;
            self.growth = 0.0;
            self.bloom_played = false;
        }

        let elapsed = now - self.start_time;
        self.growth = (elapsed / f64::from(params.duration)).clamp(0.0, 1.0) as f32;

        if self.growth >= 1.0 && !self.bloom_played {
            self.bloom_played = true;
            log::info!(
                "Plant ({}, {}) bloomed as {:?}",
                self.row, self.col, self.variant
            );
            return Some(Bloom {
                row: self.row,
                col: self.col,
                variant: self.variant,
            });
        }

        None
    }

    pub fn state(&self) -> PlantState {
        if self.is_grown() {
            PlantState::Grown
        } else if self.watering {
            PlantState::Watering
        } else {
            PlantState::Idle
        }
    }

    pub fn is_watering(&self) -> bool {
        self.watering
    }

    pub fn is_grown(&self) -> bool {
        self.growth >= 1.0
    }

    pub fn growth(&self) -> f32 {
        self.growth
    }

    #[cfg(test)]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    #[cfg(test)]
    pub fn bloom_played(&self) -> bool {
        self.bloom_played
    }

    /// Back to an empty pot
    pub fn reset(&mut self) {
        self.watering = false;
        self.growth = 0.0;
        self.start_time = 0.0;
        self.bloom_played = false;
    }
}
