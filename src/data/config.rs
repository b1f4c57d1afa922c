use serde::Deserialize;
use crate::math::Vec2;

/// Complete scene configuration, usually loaded from YAML.
///
/// Every section falls back to its defaults, so an empty document (or one
/// that only overrides `growth.duration`) is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub canvas: CanvasConfig,
    pub grid: GridConfig,
    pub growth: GrowthConfig,
    pub droplets: DropletConfig,
    pub can: CanConfig,
    pub audio: AudioConfig,
    pub assets: AssetConfig,
    /// Seed for droplet randomness
    pub seed: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

/// Pot grid placement
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Extra vertical spacing added to `height / (rows + 1)`
    pub row_spacing_extra: f32,
    /// Vertical offset of the first row
    pub top_offset: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Seconds of uninterrupted watering to reach full bloom
    pub duration: f32,
    /// Watering trigger radius around the pot center (px)
    pub trigger_radius: f32,
    /// Offset from the pointer to where the can actually pours
    pub hand_offset: Vec2,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DropletConfig {
    /// Per-tick spawn probability for each watering plant
    pub spawn_chance: f32,
    /// Spawn position jitter on both axes (px)
    pub jitter: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_length: f32,
    pub max_length: f32,
    /// Stop point relative to the watered plant center
    pub stop_offset: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanConfig {
    /// Tilt while pouring, in degrees
    pub pour_tilt: f32,
    /// Exponential smoothing factor per tick
    pub smoothing: f32,
    /// Spout base in unrotated can coordinates
    pub spout_base: Vec2,
    /// Spout direction relative to the can body, in degrees
    pub spout_angle: f32,
    pub spout_length: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub background_volume: f32,
    /// Gain the water loop ramps toward while pouring
    pub water_gain: f32,
    /// Linear gain change per tick
    pub gain_step: f32,
    pub bloom_volume: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub pot: String,
    pub stem: String,
    pub background: String,
    pub sunflower: String,
    pub pink_flower: String,
    pub blue_flower: String,
    pub background_music: String,
    pub water_loop: String,
    pub bloom_sunflower: String,
    pub bloom_pink_flower: String,
    pub bloom_blue_flower: String,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            grid: GridConfig::default(),
            growth: GrowthConfig::default(),
            droplets: DropletConfig::default(),
            can: CanConfig::default(),
            audio: AudioConfig::default(),
            assets: AssetConfig::default(),
            seed: 0x5EED_F10E,
            log_level: "info".to_string(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            row_spacing_extra: 25.0,
            top_offset: 165.0,
        }
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            duration: 5.0,
            trigger_radius: 70.0,
            hand_offset: Vec2::new(75.0, 75.0),
        }
    }
}

impl Default for DropletConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.3,
            jitter: 8.0,
            min_speed: 4.0,
            max_speed: 8.0,
            min_length: 8.0,
            max_length: 15.0,
            stop_offset: 0.0,
        }
    }
}

impl Default for CanConfig {
    fn default() -> Self {
        Self {
            pour_tilt: 33.0,
            smoothing: 0.15,
            spout_base: Vec2::new(38.0, -8.0),
            spout_angle: -20.0,
            spout_length: 60.0,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            background_volume: 0.4,
            water_gain: 0.55,
            gain_step: 0.02,
            bloom_volume: 0.8,
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            pot: "img/POT.svg".to_string(),
            stem: "img/stem.svg".to_string(),
            background: "img/background.png".to_string(),
            sunflower: "img/sunflower.svg".to_string(),
            pink_flower: "img/pinkflower.svg".to_string(),
            blue_flower: "img/blueflower.svg".to_string(),
            background_music: "audio/background.mp3".to_string(),
            water_loop: "audio/water.mp3".to_string(),
            bloom_sunflower: "audio/twinkle1.mp3".to_string(),
            bloom_pink_flower: "audio/twinkle2.mp3".to_string(),
            bloom_blue_flower: "audio/twinkle3.mp3".to_string(),
        }
    }
}

impl GardenConfig {
    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: GardenConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), String> {
        if self.canvas.width <= 0.0 || self.canvas.height <= 0.0 {
            return Err(format!(
                "Canvas size must be positive, got {}x{}",
                self.canvas.width, self.canvas.height
            ));
        }
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err("Grid must have at least one row and one column".to_string());
        }
        if self.growth.duration <= 0.0 {
            return Err(format!("Growth duration must be positive, got {}", self.growth.duration));
        }
        if self.growth.trigger_radius <= 0.0 {
            return Err(format!(
                "Trigger radius must be positive, got {}",
                self.growth.trigger_radius
            ));
        }
        if !(0.0..=1.0).contains(&self.droplets.spawn_chance) {
            return Err(format!(
                "Droplet spawn chance must be within [0, 1], got {}",
                self.droplets.spawn_chance
            ));
        }
        if self.droplets.min_speed <= 0.0 || self.droplets.min_speed > self.droplets.max_speed {
            return Err(format!(
                "Droplet speed range [{}, {}] is invalid",
                self.droplets.min_speed, self.droplets.max_speed
            ));
        }
        if self.droplets.min_length < 0.0 || self.droplets.min_length > self.droplets.max_length {
            return Err(format!(
                "Droplet length range [{}, {}] is invalid",
                self.droplets.min_length, self.droplets.max_length
            ));
        }
        if !(0.0..=1.0).contains(&self.can.smoothing) || self.can.smoothing == 0.0 {
            return Err(format!("Can smoothing must be within (0, 1], got {}", self.can.smoothing));
        }
        if self.audio.gain_step <= 0.0 {
            return Err(format!("Audio gain step must be positive, got {}", self.audio.gain_step));
        }
        if !(0.0..=1.0).contains(&self.audio.water_gain) {
            return Err(format!(
                "Water gain must be within [0, 1], got {}",
                self.audio.water_gain
            ));
        }
        self.log_level_filter()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_level_filter(&self) -> Result<log::LevelFilter, String> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| format!("Unknown log level '{}'", self.log_level))
    }

    /// Total number of pots in the grid
    pub fn plant_count(&self) -> usize {
        self.grid.rows * self.grid.cols
    }
}
