use serde::{Deserialize, Serialize};
use super::config::AssetConfig;

/// The three flower looks a pot can grow into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowerVariant {
    Sunflower,
    PinkFlower,
    BlueFlower,
}

impl FlowerVariant {
    pub const ALL: [FlowerVariant; 3] = [
        FlowerVariant::Sunflower,
        FlowerVariant::PinkFlower,
        FlowerVariant::BlueFlower,
    ];

    /// Pick a variant from grid coordinates.
    ///
    /// `(row * 2 + col) % 3` spreads the looks so neighbours rarely match.
    pub fn for_cell(row: usize, col: usize) -> Self {
        Self::ALL[(row * 2 + col) % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            FlowerVariant::Sunflower => 0,
            FlowerVariant::PinkFlower => 1,
            FlowerVariant::BlueFlower => 2,
        }
    }

    /// Flower size in pixels once fully grown
    pub fn max_size(self) -> f32 {
        match self {
            FlowerVariant::BlueFlower => 90.0,
            _ => 72.0,
        }
    }

    /// Image path for this variant
    pub fn image_path(self, assets: &AssetConfig) -> &str {
        match self {
            FlowerVariant::Sunflower => &assets.sunflower,
            FlowerVariant::PinkFlower => &assets.pink_flower,
            FlowerVariant::BlueFlower => &assets.blue_flower,
        }
    }

    /// Bloom sound path for this variant
    pub fn bloom_sound_path(self, assets: &AssetConfig) -> &str {
        match self {
            FlowerVariant::Sunflower => &assets.bloom_sunflower,
            FlowerVariant::PinkFlower => &assets.bloom_pink_flower,
            FlowerVariant::BlueFlower => &assets.bloom_blue_flower,
        }
    }
}
