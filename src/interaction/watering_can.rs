use crate::animation::smooth_toward;
use crate::data::CanConfig;
use crate::math::Vec2;

/// The watering can that follows the pointer.
///
/// The pointer is the can center; `tilt` (degrees) leans the can forward
/// while it pours.
#[derive(Debug, Clone)]
pub struct WateringCan {
    pub position: Vec2,
    tilt: f32,
    params: CanConfig,
}

impl WateringCan {
    pub fn new(params: CanConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            tilt: 0.0,
            params,
        }
    }

    /// Ease the tilt toward the pouring or resting angle
    pub fn update(&mut self, pouring: bool) {
        let target = if pouring { self.params.pour_tilt } else { 0.0 };
        self.tilt = smooth_toward(self.tilt, target, self.params.smoothing);
    }

    /// Current tilt in degrees
    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn tilt_radians(&self) -> f32 {
        self.tilt.to_radians()
    }

    /// Spout tip in unrotated can coordinates
    pub fn spout_tip_local(&self) -> Vec2 {
        let dir = Vec2::from_angle(self.params.spout_angle.to_radians());
        self.params.spout_base + dir * self.params.spout_length
    }

    /// Spout tip in canvas coordinates, following the current tilt
    pub fn spout_tip(&self) -> Vec2 {
        self.position + self.spout_tip_local().rotate(self.tilt_radians())
    }

    pub fn params(&self) -> &CanConfig {
        &self.params
    }

    pub fn reset(&mut self) {
        self.tilt = 0.0;
    }
}
