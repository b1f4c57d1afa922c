pub mod config;
pub mod flower;

pub use config::{
    GardenConfig, CanvasConfig, GridConfig, GrowthConfig, DropletConfig, CanConfig,
    AudioConfig, AssetConfig,
};
pub use flower::FlowerVariant;
