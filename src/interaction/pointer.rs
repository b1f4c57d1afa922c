use crate::math::Vec2;

/// Last known pointer position plus the offset to where the can pours.
///
/// The can is held by its handle at the pointer, so the water lands down
/// and to the right of it.
#[derive(Debug, Clone)]
pub struct Pointer {
    pub position: Vec2,
    hand_offset: Vec2,
}

impl Pointer {
    pub fn new(hand_offset: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            hand_offset,
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Point tested against each pot's trigger radius
    pub fn reach(&self) -> Vec2 {
        self.position + self.hand_offset
    }
}
