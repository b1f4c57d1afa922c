//! Water droplets poured from the can spout
//!
//! Droplets fall straight down at a per-particle speed until their leading
//! edge reaches a stop line (the center of the pot being watered), then
//! vanish on the following update, after being drawn once at the line.

use crate::data::DropletConfig;
use crate::math::{Lcg, Vec2};

/// A single falling droplet, drawn as a short vertical streak
#[derive(Debug, Clone)]
pub struct Droplet {
    /// Top of the streak
    pub position: Vec2,
    /// Pixels per tick
    pub speed: f32,
    pub length: f32,
    /// Leading edge stops here
    pub target_y: f32,
    done: bool,
}

impl Droplet {
    pub fn new(position: Vec2, speed: f32, length: f32, target_y: f32) -> Self {
        Self {
            position,
            speed,
            length,
            target_y,
            done: false,
        }
    }

    pub fn update(&mut self) {
        if self.done {
            return;
        }
        self.position.y += self.speed;
        if self.position.y + self.length >= self.target_y {
            self.done = true;
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn should_remove(&self, viewport_height: f32) -> bool {
        self.is_done() || self.position.y > viewport_height
    }

    /// Bottom end of the streak
    pub fn tail(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y + self.length)
    }
}

/// Owns every live droplet; prunes itself each update
pub struct DropletSystem {
    droplets: Vec<Droplet>,
    params: DropletConfig,
    viewport_height: f32,
}

impl DropletSystem {
    pub fn new(params: DropletConfig, viewport_height: f32) -> Self {
        Self {
            droplets: Vec::new(),
            params,
            viewport_height,
        }
    }

    /// Roll the per-tick spawn chance; emits at most one droplet.
    ///
    /// `target_y` is the stop line; `None` lets the droplet fall to the
    /// bottom of the viewport.
    pub fn try_spawn(&mut self, spout: Vec2, target_y: Option<f32>, rng: &mut Lcg) -> bool {
        if !rng.chance(self.params.spawn_chance) {
            return false;
        }
        self.spawn(spout, target_y, rng);
        true
    }

    pub fn spawn(&mut self, spout: Vec2, target_y: Option<f32>, rng: &mut Lcg) {
        let jitter = self.params.jitter;
        let position = Vec2::new(
            spout.x + rng.range(-jitter, jitter),
            spout.y + rng.range(-jitter, jitter),
        );
        let speed = rng.range(self.params.min_speed, self.params.max_speed);
        let length = rng.range(self.params.min_length, self.params.max_length);
        let target_y = target_y.unwrap_or(self.viewport_height);

        self.droplets.push(Droplet::new(position, speed, length, target_y));
    }

    /// Drop droplets that finished on the previous update, then advance the
    /// rest (order not kept).
    ///
    /// Pruning before advancing means a droplet that reaches its stop line is
    /// still drawn for that frame.
    pub fn update(&mut self) {
        let viewport_height = self.viewport_height;
        let mut i = 0;
        while i < self.droplets.len() {
            if self.droplets[i].should_remove(viewport_height) {
                self.droplets.swap_remove(i);
            } else {
                self.droplets[i].update();
                i += 1;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Droplet> {
        self.droplets.iter()
    }

    pub fn count(&self) -> usize {
        self.droplets.len()
    }

    pub fn clear(&mut self) {
        self.droplets.clear();
    }

    /// Stop line used for droplets aimed at a pot centered at `plant_y`
    pub fn stop_line_for(&self, plant_y: f32) -> f32 {
        plant_y + self.params.stop_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> DropletSystem {
        DropletSystem::new(DropletConfig::default(), 600.0)
    }

    #[test]
    fn test_droplet_falls_at_its_speed() {
        let mut d = Droplet::new(Vec2::new(10.0, 100.0), 5.0, 10.0, 400.0);
        d.update();
        assert_eq!(d.position.y, 105.0);
        assert!(!d.is_done());
    }

    #[test]
    fn test_droplet_done_when_leading_edge_reaches_target() {
        let mut d = Droplet::new(Vec2::new(10.0, 100.0), 5.0, 10.0, 120.0);
        d.update(); // 105 + 10 = 115
        assert!(!d.is_done());
        d.update(); // 110 + 10 = 120
        assert!(d.is_done());
        assert!(d.should_remove(600.0));
    }

    #[test]
    fn test_done_droplet_stops_moving() {
        let mut d = Droplet::new(Vec2::new(0.0, 0.0), 50.0, 10.0, 20.0);
        d.update();
        let y = d.position.y;
        d.update();
        assert_eq!(d.position.y, y);
    }

    #[test]
    fn test_offscreen_droplet_is_removed() {
        let d = Droplet::new(Vec2::new(0.0, 601.0), 5.0, 10.0, 10_000.0);
        assert!(d.should_remove(600.0));
    }

    #[test]
    fn test_fresh_droplet_is_kept() {
        let d = Droplet::new(Vec2::new(0.0, 100.0), 5.0, 10.0, 300.0);
        assert!(!d.should_remove(600.0));
    }

    #[test]
    fn test_spawn_respects_ranges() {
        let mut system = system();
        let mut rng = Lcg::new(11);
        let spout = Vec2::new(500.0, 200.0);
        for _ in 0..200 {
            system.spawn(spout, Some(400.0), &mut rng);
        }
        for d in system.iter() {
            assert!((d.position.x - spout.x).abs() <= 8.0);
            assert!((d.position.y - spout.y).abs() <= 8.0);
            assert!(d.speed >= 4.0 && d.speed < 8.0);
            assert!(d.length >= 8.0 && d.length < 15.0);
            assert_eq!(d.target_y, 400.0);
        }
    }

    #[test]
    fn test_untargeted_droplet_falls_to_viewport_bottom() {
        let mut system = system();
        let mut rng = Lcg::new(5);
        system.spawn(Vec2::new(0.0, 0.0), None, &mut rng);
        assert_eq!(system.iter().next().unwrap().target_y, 600.0);
    }

    #[test]
    fn test_removal_within_bounded_ticks() {
        let mut system = system();
        let mut rng = Lcg::new(23);
        for _ in 0..50 {
            system.spawn(Vec2::new(100.0, 100.0), Some(300.0), &mut rng);
        }
        // slowest speed is 4 px/tick; spawn y is at least 92; one more
        // update clears the frame drawn at the stop line
        let bound = ((300.0f32 - 92.0) / 4.0).ceil() as usize + 2;
        for _ in 0..bound {
            system.update();
        }
        assert_eq!(system.count(), 0);
    }

    #[test]
    fn test_update_prunes_only_finished() {
        let mut system = system();
        let mut rng = Lcg::new(8);
        system.spawn(Vec2::new(0.0, 0.0), Some(590.0), &mut rng);
        system.spawn(Vec2::new(0.0, 0.0), Some(0.0), &mut rng);
        system.update();
        system.update();
        assert_eq!(system.count(), 1);
        assert_eq!(system.iter().next().unwrap().target_y, 590.0);
    }

    #[test]
    fn test_finished_droplet_survives_one_update() {
        let mut system = system();
        let mut rng = Lcg::new(3);
        system.spawn(Vec2::new(0.0, 100.0), Some(0.0), &mut rng);

        system.update();
        assert_eq!(system.count(), 1);
        assert!(system.iter().all(Droplet::is_done));

        system.update();
        assert_eq!(system.count(), 0);
    }

    #[test]
    fn test_try_spawn_probability() {
        let mut system = system();
        let mut rng = Lcg::new(1234);
        let spawned = (0..1000)
            .filter(|_| system.try_spawn(Vec2::ZERO, None, &mut rng))
            .count();
        assert_eq!(system.count(), spawned);
        assert!(spawned > 220 && spawned < 380, "spawned = {}", spawned);
    }

    #[test]
    fn test_stop_line_is_pot_center() {
        let system = system();
        assert_eq!(system.stop_line_for(340.0), 340.0);
    }
}
