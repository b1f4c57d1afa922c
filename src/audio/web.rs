use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::data::{AssetConfig, AudioConfig, FlowerVariant};
use crate::render::canvas::js_error;
use super::mixer::{AudioBackend, StartResult, Track};

/// `AudioBackend` on top of `<audio>` elements
pub struct WebAudioBackend {
    background: HtmlAudioElement,
    water: HtmlAudioElement,
    /// One template per flower variant; cloned for each play
    blooms: Vec<HtmlAudioElement>,
    bloom_volume: f64,
    /// Filled by start futures, drained by `poll_results`
    results: Rc<RefCell<Vec<StartResult>>>,
}

impl WebAudioBackend {
    pub fn new(assets: &AssetConfig, params: &AudioConfig) -> Result<Self, String> {
        let background = load_audio(&assets.background_music)?;
        background.set_loop(true);
        background.set_volume(params.background_volume.clamp(0.0, 1.0) as f64);

        let water = load_audio(&assets.water_loop)?;
        water.set_loop(true);
        water.set_volume(0.0);

        let blooms = FlowerVariant::ALL
            .iter()
            .map(|variant| load_audio(variant.bloom_sound_path(assets)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            background,
            water,
            blooms,
            bloom_volume: params.bloom_volume.clamp(0.0, 1.0) as f64,
            results: Rc::new(RefCell::new(Vec::new())),
        })
    }

    fn element(&self, track: Track) -> &HtmlAudioElement {
        match track {
            Track::Background => &self.background,
            Track::Water => &self.water,
        }
    }
}

impl AudioBackend for WebAudioBackend {
    fn request_start(&mut self, track: Track) {
        let promise: js_sys::Promise = match self.element(track).play() {
            Ok(promise) => promise,
            Err(e) => {
                self.results
                    .borrow_mut()
                    .push(StartResult::Failed(track, js_error(&e)));
                return;
            }
        };

        let results = Rc::clone(&self.results);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match JsFuture::from(promise).await {
                Ok(_) => StartResult::Started(track),
                Err(e) => StartResult::Failed(track, js_error(&e)),
            };
            results.borrow_mut().push(outcome);
        });
    }

    fn poll_results(&mut self) -> Vec<StartResult> {
        std::mem::take(&mut *self.results.borrow_mut())
    }

    fn set_gain(&mut self, track: Track, gain: f32) {
        self.element(track).set_volume(gain.clamp(0.0, 1.0) as f64);
    }

    fn stop(&mut self, track: Track) {
        let element = self.element(track);
        if let Err(e) = element.pause() {
            log::warn!("Failed to pause {:?}: {}", track, js_error(&e));
        }
        element.set_current_time(0.0);
    }

    fn play_bloom(&mut self, variant: FlowerVariant) {
        let Some(template) = self.blooms.get(variant.index()) else {
            return;
        };

        // A fresh element per play lets blooms overlap
        let instance = match template
            .clone_node()
            .and_then(|node| node.dyn_into::<HtmlAudioElement>().map_err(JsValue::from))
        {
            Ok(instance) => instance,
            Err(e) => {
                log::warn!("Failed to clone bloom sound: {}", js_error(&e));
                return;
            }
        };
        instance.set_volume(self.bloom_volume);

        match instance.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::debug!("Bloom sound {:?} rejected: {}", variant, js_error(&e));
                    }
                });
            }
            Err(e) => log::debug!("Bloom sound {:?} failed: {}", variant, js_error(&e)),
        }
    }
}

fn load_audio(src: &str) -> Result<HtmlAudioElement, String> {
    let element = HtmlAudioElement::new_with_src(src)
        .map_err(|e| format!("Failed to create audio element for '{}': {}", src, js_error(&e)))?;
    element.set_preload("auto");
    Ok(element)
}
