//! The whole garden as one owned value
//!
//! `Scene` holds every piece of mutable state (pots, droplets, can, pointer,
//! clock) and advances it one frame at a time. It never touches the browser,
//! so it can be driven directly from tests.

use crate::data::{GardenConfig, GrowthConfig};
use crate::growth::{layout_plants, Bloom, Plant};
use crate::interaction::{Pointer, WateringCan};
use crate::math::Lcg;
use crate::particles::DropletSystem;

/// What happened during one tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// At least one pot was being watered
    pub any_watering: bool,
    /// Pots that finished growing this tick
    pub blooms: Vec<Bloom>,
}

pub struct Scene {
    plants: Vec<Plant>,
    droplets: DropletSystem,
    can: WateringCan,
    pointer: Pointer,
    growth: GrowthConfig,
    /// Seconds since the scene started; f64 so small frame steps still
    /// register after days of uptime
    time: f64,
    rng: Lcg,
    seed: u32,
}

impl Scene {
    pub fn new(config: &GardenConfig) -> Self {
        Self {
            plants: layout_plants(&config.canvas, &config.grid),
            droplets: DropletSystem::new(config.droplets.clone(), config.canvas.height),
            can: WateringCan::new(config.can.clone()),
            pointer: Pointer::new(config.growth.hand_offset),
            growth: config.growth.clone(),
            time: 0.0,
            rng: Lcg::new(config.seed),
            seed: config.seed,
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    /// Advance the scene by `dt` seconds (one rendered frame)
    pub fn tick(&mut self, dt: f32) -> TickReport {
        self.time += f64::from(dt.max(0.0));
        self.can.position = self.pointer.position;

        let reach = self.pointer.reach();
        let spout = self.can.spout_tip();
        let mut report = TickReport::default();

        for plant in &mut self.plants {
            if let Some(bloom) = plant.update(reach, self.time, &self.growth) {
                report.blooms.push(bloom);
            }
            if plant.is_watering() {
                report.any_watering = true;
                let stop_line = self.droplets.stop_line_for(plant.position.y);
                self.droplets.try_spawn(spout, Some(stop_line), &mut self.rng);
            }
        }

        self.can.update(report.any_watering);
        self.droplets.update();

        log::trace!(
            "tick t={:.3} watering={} droplets={} tilt={:.2}",
            self.time,
            report.any_watering,
            self.droplets.count(),
            self.can.tilt()
        );

        report
    }

    /// Empty every pot and restart the clock
    pub fn reset(&mut self) {
        for plant in &mut self.plants {
            plant.reset();
        }
        self.droplets.clear();
        self.can.reset();
        self.time = 0.0;
        self.rng = Lcg::new(self.seed);
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn droplets(&self) -> &DropletSystem {
        &self.droplets
    }

    pub fn can(&self) -> &WateringCan {
        &self.can
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn flowers_grown(&self) -> usize {
        self.plants.iter().filter(|p| p.is_grown()).count()
    }

    pub fn is_watering(&self) -> bool {
        self.plants.iter().any(|p| p.is_watering())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::PlantState;
    use crate::math::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn scene() -> Scene {
        Scene::new(&GardenConfig::default())
    }

    /// Pointer position whose reach lands on the given plant
    fn hover(scene: &mut Scene, index: usize) {
        let target = scene.plants()[index].position - Vec2::new(75.0, 75.0);
        scene.set_pointer(target.x, target.y);
    }

    fn move_away(scene: &mut Scene) {
        scene.set_pointer(-500.0, -500.0);
    }

    #[test]
    fn test_scene_init() {
        let scene = scene();
        assert_eq!(scene.plants().len(), 9);
        assert_eq!(scene.flowers_grown(), 0);
        assert_eq!(scene.droplets().count(), 0);
        assert_eq!(scene.can().tilt(), 0.0);
    }

    #[test]
    fn test_idle_scene_stays_idle() {
        let mut scene = scene();
        for _ in 0..120 {
            let report = scene.tick(DT);
            assert!(!report.any_watering);
        }
        assert_eq!(scene.droplets().count(), 0);
        assert_eq!(scene.can().tilt(), 0.0);
    }

    #[test]
    fn test_full_watering_run() {
        let mut scene = scene();
        hover(&mut scene, 4);

        let mut blooms = Vec::new();
        let mut max_droplets = 0;
        for _ in 0..(5.5 / DT) as usize {
            let report = scene.tick(DT);
            blooms.extend(report.blooms);
            max_droplets = max_droplets.max(scene.droplets().count());
        }

        assert_eq!(scene.plants()[4].growth(), 1.0);
        assert_eq!(scene.plants()[4].state(), PlantState::Grown);
        assert_eq!(blooms.len(), 1);
        assert_eq!(blooms[0].variant, scene.plants()[4].variant);
        assert!(max_droplets > 0);
        assert_eq!(scene.flowers_grown(), 1);
    }

    #[test]
    fn test_interrupted_watering_restarts_from_zero() {
        let mut scene = scene();
        hover(&mut scene, 0);
        while scene.plants()[0].growth() < 0.4 {
            scene.tick(DT);
        }

        move_away(&mut scene);
        scene.tick(DT);
        assert_eq!(scene.plants()[0].state(), PlantState::Idle);

        hover(&mut scene, 0);
        scene.tick(DT);
        assert_eq!(scene.plants()[0].growth(), 0.0);
        assert_eq!(scene.plants()[0].start_time(), scene.time());
    }

    #[test]
    fn test_growth_bounded_and_monotonic_while_watering() {
        let mut scene = scene();
        let mut rng = Lcg::new(77);
        let mut prev: Vec<(bool, f32)> = scene
            .plants()
            .iter()
            .map(|p| (p.is_watering(), p.growth()))
            .collect();

        for _ in 0..3000 {
            // wander the pointer, mostly staying put
            if rng.chance(0.02) {
                scene.set_pointer(rng.range(0.0, 1200.0), rng.range(0.0, 600.0));
            }
            scene.tick(DT);

            for (plant, (was_watering, old_growth)) in scene.plants().iter().zip(prev.iter()) {
                let g = plant.growth();
                assert!((0.0..=1.0).contains(&g));
                if *was_watering && plant.is_watering() {
                    assert!(g >= *old_growth);
                }
            }
            prev = scene
                .plants()
                .iter()
                .map(|p| (p.is_watering(), p.growth()))
                .collect();
        }
    }

    #[test]
    fn test_can_tilts_while_watering() {
        let mut scene = scene();
        hover(&mut scene, 2);
        for _ in 0..60 {
            scene.tick(DT);
        }
        assert!(scene.can().tilt() > 30.0);

        move_away(&mut scene);
        for _ in 0..60 {
            scene.tick(DT);
        }
        assert!(scene.can().tilt() < 1.0);
    }

    #[test]
    fn test_droplets_stay_visible_while_watering() {
        let mut scene = scene();
        hover(&mut scene, 4);
        for _ in 0..60 {
            scene.tick(DT);
        }

        let mut ticks_with_droplets = 0;
        let mut total = 0;
        for _ in 0..200 {
            scene.tick(DT);
            let count = scene.droplets().count();
            total += count;
            if count > 0 {
                ticks_with_droplets += 1;
            }
        }
        assert!(scene.is_watering());
        assert!(ticks_with_droplets > 150, "ticks_with_droplets = {}", ticks_with_droplets);
        assert!(total as f32 / 200.0 > 1.0, "total = {}", total);
    }

    #[test]
    fn test_poured_droplets_live_several_frames() {
        let mut scene = scene();
        hover(&mut scene, 4);
        for _ in 0..60 {
            scene.tick(DT);
        }

        let spout = scene.can.spout_tip();
        let stop = scene.droplets.stop_line_for(scene.plants[4].position.y);
        scene.droplets.clear();
        let mut rng = Lcg::new(9);
        for _ in 0..100 {
            scene.droplets.spawn(spout, Some(stop), &mut rng);
        }
        scene.droplets.update();
        scene.droplets.update();
        assert_eq!(scene.droplets.count(), 100);
    }

    #[test]
    fn test_clock_advances_after_long_uptime() {
        let mut scene = scene();
        scene.tick(600_000.0);
        let start = scene.time();
        scene.tick(DT);
        assert!(scene.time() > start);

        hover(&mut scene, 4);
        for _ in 0..150 {
            scene.tick(DT);
        }
        let growth = scene.plants()[4].growth();
        assert!((growth - 149.0 / 300.0).abs() < 0.01, "growth = {}", growth);
    }

    #[test]
    fn test_droplets_drain_after_watering_stops() {
        let mut scene = scene();
        hover(&mut scene, 4);
        for _ in 0..60 {
            scene.tick(DT);
        }
        move_away(&mut scene);
        for _ in 0..200 {
            scene.tick(DT);
        }
        assert_eq!(scene.droplets().count(), 0);
    }

    #[test]
    fn test_grown_plant_is_not_rewatered() {
        let mut scene = scene();
        hover(&mut scene, 1);
        for _ in 0..(5.5 / DT) as usize {
            scene.tick(DT);
        }
        move_away(&mut scene);
        scene.tick(DT);
        hover(&mut scene, 1);
        let report = scene.tick(DT);
        assert!(!report.any_watering);
        assert!(report.blooms.is_empty());
        assert_eq!(scene.plants()[1].growth(), 1.0);
    }

    #[test]
    fn test_reset() {
        let mut scene = scene();
        hover(&mut scene, 3);
        for _ in 0..(5.5 / DT) as usize {
            scene.tick(DT);
        }
        scene.reset();
        assert_eq!(scene.flowers_grown(), 0);
        assert_eq!(scene.time(), 0.0);
        assert_eq!(scene.droplets().count(), 0);
    }
}
