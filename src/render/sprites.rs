//! Sprite placement for a single pot, in pot-local coordinates
//!
//! Origin is the pot center; y grows downward. Kept free of canvas calls so
//! the geometry can be unit tested.

use crate::data::FlowerVariant;

/// Top of the pot, where the stem emerges
pub const POT_RIM_Y: f32 = -25.0;
pub const POT_SIZE: f32 = 70.0;
/// Pot image is drawn slightly below the plant center
pub const POT_OFFSET_Y: f32 = 5.0;
pub const MAX_STEM_HEIGHT: f32 = 80.0;
pub const FLOWER_MIN_SIZE: f32 = 24.0;

/// Native size of the stem artwork
const STEM_ART_WIDTH: f32 = 152.0;
const STEM_ART_HEIGHT: f32 = 368.0;
/// Stem is drawn a bit thicker than its art
const STEM_THICKEN: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Everything needed to draw one pot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantSprite {
    pub pot: Rect,
    /// Absent until the plant has started growing
    pub stem: Option<Rect>,
    pub flower: Option<Rect>,
}

/// Lay out pot, stem and flower for the given growth.
///
/// `flower_aspect` is the flower image's width / height, or 1.0 if the image
/// has not loaded yet.
pub fn plant_sprite(growth: f32, variant: FlowerVariant, flower_aspect: f32) -> PlantSprite {
    let pot = Rect {
        x: -POT_SIZE / 2.0,
        y: POT_OFFSET_Y - POT_SIZE / 2.0,
        w: POT_SIZE,
        h: POT_SIZE,
    };

    if growth <= 0.0 {
        return PlantSprite { pot, stem: None, flower: None };
    }

    let growth = growth.min(1.0);
    let flower_center_y = POT_RIM_Y - MAX_STEM_HEIGHT * growth;

    // Stem keeps a fixed size and slides up with the flower; the pot hides
    // whatever is below the rim.
    let stem_scale = MAX_STEM_HEIGHT / STEM_ART_HEIGHT;
    let stem_w = STEM_ART_WIDTH * stem_scale * STEM_THICKEN;
    let stem_h = STEM_ART_HEIGHT * stem_scale;
    let stem = Rect {
        x: -stem_w / 2.0,
        y: flower_center_y,
        w: stem_w,
        h: stem_h,
    };

    let size = FLOWER_MIN_SIZE + (variant.max_size() - FLOWER_MIN_SIZE) * growth;
    let (w, h) = fit_aspect(size, flower_aspect);
    let flower = Rect {
        x: -w / 2.0,
        y: flower_center_y - h / 2.0,
        w,
        h,
    };

    PlantSprite {
        pot,
        stem: Some(stem),
        flower: Some(flower),
    }
}

/// Fit an image of the given aspect ratio so its longer side equals `size`
pub fn fit_aspect(size: f32, aspect: f32) -> (f32, f32) {
    if !aspect.is_finite() || aspect <= 0.0 {
        return (size, size);
    }
    if aspect > 1.0 {
        (size, size / aspect)
    } else {
        (size * aspect, size)
    }
}
