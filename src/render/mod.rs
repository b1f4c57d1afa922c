pub mod assets;
pub mod banner;
pub mod canvas;
pub mod pipeline;
pub mod sprites;

pub use assets::ImageAssets;
pub use pipeline::SceneRenderer;
