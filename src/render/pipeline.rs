use std::f32::consts::PI;

use web_sys::HtmlCanvasElement;

use crate::growth::Plant;
use crate::scene::Scene;
use super::assets::{self, ImageAssets};
use super::banner::{self, BANNER_HEIGHT, INSTRUCTIONS};
use super::canvas::Canvas2D;
use super::sprites::{plant_sprite, Rect};

const SKY_FALLBACK: &str = "rgb(220, 245, 255)";
/// Darkens the background art slightly
const SHADE_OVERLAY: &str = "rgba(0, 0, 0, 0.118)";
const DROPLET_COLOR: &str = "rgb(0, 120, 255)";
const DROPLET_WIDTH: f32 = 3.0;
const CAN_BODY: &str = "rgb(60, 170, 255)";
const CAN_TOP: &str = "rgb(90, 190, 255)";
const BANNER_FILL: &str = "rgb(144, 238, 144)";
const BANNER_TEXT: &str = "rgb(0, 100, 0)";
const BANNER_FONT: &str = "14px sans-serif";
const BANNER_FONT_BOLD: &str = "bold 14px sans-serif";

/// Draws a `Scene` onto a 2D canvas, back to front
pub struct SceneRenderer {
    canvas: Canvas2D,
    assets: ImageAssets,
    width: f32,
    height: f32,
}

impl SceneRenderer {
    pub fn new(canvas: &HtmlCanvasElement, assets: ImageAssets) -> Result<Self, String> {
        Ok(Self {
            canvas: Canvas2D::from_canvas(canvas)?,
            assets,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }

    pub fn render(&self, scene: &Scene) -> Result<(), String> {
        self.draw_background()?;

        for plant in scene.plants() {
            self.draw_plant(plant)?;
        }

        for droplet in scene.droplets().iter() {
            let tail = droplet.tail();
            self.canvas.line(
                droplet.position.x,
                droplet.position.y,
                tail.x,
                tail.y,
                DROPLET_WIDTH,
                DROPLET_COLOR,
            );
        }

        self.draw_can(scene)?;
        self.draw_banner(scene)
    }

    fn draw_background(&self) -> Result<(), String> {
        let full = Rect { x: 0.0, y: 0.0, w: self.width, h: self.height };
        if assets::is_ready(&self.assets.background) {
            self.canvas.draw_image(&self.assets.background, full)?;
        } else {
            self.canvas.fill_rect(0.0, 0.0, self.width, self.height, SKY_FALLBACK);
        }
        self.canvas.fill_rect(0.0, 0.0, self.width, self.height, SHADE_OVERLAY);
        Ok(())
    }

    fn draw_plant(&self, plant: &Plant) -> Result<(), String> {
        let flower_image = self.assets.flower(plant.variant);
        let aspect = flower_image.map(assets::aspect_ratio).unwrap_or(1.0);
        let sprite = plant_sprite(plant.growth(), plant.variant, aspect);

        self.canvas.push_transform(plant.position.x, plant.position.y, 0.0)?;

        // Stem and flower go behind the pot
        if let Some(stem) = sprite.stem {
            if assets::is_ready(&self.assets.stem) {
                self.canvas.draw_image(&self.assets.stem, stem)?;
            }
        }
        if let (Some(flower), Some(image)) = (sprite.flower, flower_image) {
            if assets::is_ready(image) {
                self.canvas.draw_image(image, flower)?;
            }
        }
        if assets::is_ready(&self.assets.pot) {
            self.canvas.draw_image(&self.assets.pot, sprite.pot)?;
        }

        self.canvas.pop_transform();
        Ok(())
    }

    /// Procedural can: body, lid, handle and spout, tilted around the pointer
    fn draw_can(&self, scene: &Scene) -> Result<(), String> {
        let can = scene.can();
        let spout = can.params();
        self.canvas.push_transform(can.position.x, can.position.y, can.tilt_radians())?;

        self.canvas.fill_rect(-33.0, -15.0, 68.0, 75.0, CAN_BODY);
        self.canvas.fill_ellipse(0.0, -15.0, 34.0, 11.5, CAN_TOP)?;
        self.canvas.stroke_arc(0.0, -15.0, 30.0, 52.5, PI, 2.0 * PI, 9.0, CAN_BODY)?;

        self.canvas.push_transform(
            spout.spout_base.x,
            spout.spout_base.y,
            spout.spout_angle.to_radians(),
        )?;
        self.canvas.fill_rect(-15.0, 0.0, spout.spout_length, 15.0, CAN_BODY);
        self.canvas.fill_polygon(
            &[(38.0, 15.0), (53.0, 23.0), (53.0, -8.0), (38.0, 0.0)],
            CAN_BODY,
        );
        self.canvas.pop_transform();

        self.canvas.pop_transform();
        Ok(())
    }

    fn draw_banner(&self, scene: &Scene) -> Result<(), String> {
        let top = self.height - BANNER_HEIGHT;
        let mid = self.height - BANNER_HEIGHT / 2.0;
        self.canvas.fill_rect(0.0, top, self.width, BANNER_HEIGHT, BANNER_FILL);

        let count = banner::flower_count_label(scene.flowers_grown(), scene.plants().len());
        self.canvas.fill_text(&count, 20.0, mid, BANNER_FONT, "left", BANNER_TEXT)?;
        self.canvas.fill_text(INSTRUCTIONS, self.width / 2.0, mid, BANNER_FONT_BOLD, "center", BANNER_TEXT)?;
        self.canvas.fill_text(
            &banner::format_elapsed(scene.time()),
            self.width - 20.0,
            mid,
            BANNER_FONT,
            "right",
            BANNER_TEXT,
        )
    }
}
