use web_sys::HtmlImageElement;

use crate::data::{AssetConfig, FlowerVariant};
use super::canvas::js_error;

/// Scene artwork. Images load in the background; anything not ready yet is
/// skipped (or replaced by a flat color) when drawing.
pub struct ImageAssets {
    pub background: HtmlImageElement,
    pub pot: HtmlImageElement,
    pub stem: HtmlImageElement,
    flowers: Vec<HtmlImageElement>,
}

impl ImageAssets {
    pub fn load(config: &AssetConfig) -> Result<Self, String> {
        let flowers = FlowerVariant::ALL
            .iter()
            .map(|variant| load_image(variant.image_path(config)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            background: load_image(&config.background)?,
            pot: load_image(&config.pot)?,
            stem: load_image(&config.stem)?,
            flowers,
        })
    }

    pub fn flower(&self, variant: FlowerVariant) -> Option<&HtmlImageElement> {
        self.flowers.get(variant.index())
    }
}

/// Decoded and drawable
pub fn is_ready(image: &HtmlImageElement) -> bool {
    image.complete() && image.natural_width() > 0
}

/// Width / height of a loaded image, 1.0 until it is ready
pub fn aspect_ratio(image: &HtmlImageElement) -> f32 {
    if !is_ready(image) || image.natural_height() == 0 {
        return 1.0;
    }
    image.natural_width() as f32 / image.natural_height() as f32
}

fn load_image(src: &str) -> Result<HtmlImageElement, String> {
    let image = HtmlImageElement::new()
        .map_err(|e| format!("Failed to create image for '{}': {}", src, js_error(&e)))?;
    image.set_src(src);
    Ok(image)
}
