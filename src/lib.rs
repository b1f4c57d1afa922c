use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub mod animation;
pub mod audio;
pub mod data;
pub mod growth;
pub mod interaction;
pub mod math;
pub mod particles;
pub mod render;
pub mod scene;

use audio::{AudioMixer, WebAudioBackend};
use data::GardenConfig;
use render::{ImageAssets, SceneRenderer};
use scene::Scene;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init (e.g. hot reload) keeps the existing logger
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Garden engine exposed to JavaScript
#[wasm_bindgen]
pub struct GardenToy {
    scene: Scene,
    renderer: SceneRenderer,
    mixer: AudioMixer,
    /// `None` when audio is disabled or the elements could not be created
    audio: Option<WebAudioBackend>,
}

#[wasm_bindgen]
impl GardenToy {
    /// Create a garden with the default layout and assets
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<GardenToy, JsValue> {
        Self::build(canvas, GardenConfig::default())
    }

    /// Create a garden from a YAML configuration document
    #[wasm_bindgen]
    pub fn with_config(canvas: HtmlCanvasElement, yaml: &str) -> Result<GardenToy, JsValue> {
        let config = GardenConfig::from_yaml(yaml).map_err(|e| JsValue::from_str(&e))?;
        Self::build(canvas, config)
    }

    fn build(canvas: HtmlCanvasElement, config: GardenConfig) -> Result<GardenToy, JsValue> {
        let level = config.log_level_filter().map_err(|e| JsValue::from_str(&e))?;
        log::set_max_level(level);

        canvas.set_width(config.canvas.width as u32);
        canvas.set_height(config.canvas.height as u32);

        let assets = ImageAssets::load(&config.assets).map_err(|e| JsValue::from_str(&e))?;
        let renderer = SceneRenderer::new(&canvas, assets).map_err(|e| JsValue::from_str(&e))?;

        let audio = if config.audio.enabled {
            match WebAudioBackend::new(&config.assets, &config.audio) {
                Ok(backend) => Some(backend),
                Err(e) => {
                    log::warn!("Audio unavailable, continuing silently: {}", e);
                    None
                }
            }
        } else {
            None
        };

        log::info!(
            "Garden ready: {} pots on a {}x{} canvas, audio {}",
            config.plant_count(),
            config.canvas.width,
            config.canvas.height,
            if audio.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            scene: Scene::new(&config),
            renderer,
            mixer: AudioMixer::new(config.audio.clone()),
            audio,
        })
    }

    /// Update and render a frame
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f32) -> Result<(), JsValue> {
        let report = self.scene.tick(dt);

        if let Some(backend) = self.audio.as_mut() {
            for bloom in &report.blooms {
                self.mixer.bloom(bloom.variant, backend);
            }
            self.mixer.update(report.any_watering, backend);
        }

        self.renderer
            .render(&self.scene)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Pointer moved (canvas coordinates)
    #[wasm_bindgen]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.scene.set_pointer(x, y);
        self.unlock_audio();
    }

    /// Pointer pressed; only used to unlock audio
    #[wasm_bindgen]
    pub fn on_pointer_down(&mut self) {
        self.unlock_audio();
    }

    /// Touch started (canvas coordinates)
    #[wasm_bindgen]
    pub fn on_touch_start(&mut self, x: f32, y: f32) {
        self.scene.set_pointer(x, y);
        self.unlock_audio();
    }

    fn unlock_audio(&mut self) {
        if let Some(backend) = self.audio.as_mut() {
            self.mixer.unlock(backend);
        }
    }

    /// Empty all pots and restart the timer
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.scene.reset();
    }

    #[wasm_bindgen]
    pub fn flowers_grown(&self) -> usize {
        self.scene.flowers_grown()
    }

    #[wasm_bindgen]
    pub fn total_plants(&self) -> usize {
        self.scene.plants().len()
    }

    #[wasm_bindgen]
    pub fn is_watering(&self) -> bool {
        self.scene.is_watering()
    }

    /// Current can tilt in degrees
    #[wasm_bindgen]
    pub fn tilt(&self) -> f32 {
        self.scene.can().tilt()
    }

    #[wasm_bindgen]
    pub fn droplet_count(&self) -> usize {
        self.scene.droplets().count()
    }

    /// Seconds since the garden started
    #[wasm_bindgen]
    pub fn elapsed(&self) -> f64 {
        self.scene.time()
    }
}
