//! Per-tick scalar filters

/// One step of exponential smoothing toward `target`
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// One step of a linear ramp toward `target`, never overshooting
pub fn ramp_toward(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_first_step() {
        let v = smooth_toward(0.0, 33.0, 0.15);
        assert!((v - 4.95).abs() < 0.0001);
    }

    #[test]
    fn test_smooth_monotonic_without_overshoot() {
        let mut v = 0.0;
        for _ in 0..200 {
            let next = smooth_toward(v, 33.0, 0.15);
            assert!(next >= v);
            assert!(next <= 33.0);
            v = next;
        }
        assert!((v - 33.0).abs() < 0.01);
    }

    #[test]
    fn test_smooth_back_down() {
        let mut v = 33.0;
        for _ in 0..200 {
            let next = smooth_toward(v, 0.0, 0.15);
            assert!(next <= v);
            assert!(next >= 0.0);
            v = next;
        }
        assert!(v < 0.01);
    }

    #[test]
    fn test_ramp_reaches_target_exactly() {
        let mut g = 0.0;
        let mut ticks = 0;
        while g < 0.55 {
            g = ramp_toward(g, 0.55, 0.02);
            ticks += 1;
        }
        assert_eq!(g, 0.55);
        assert_eq!(ticks, 28);
    }

    #[test]
    fn test_ramp_down_clamps_at_zero() {
        assert_eq!(ramp_toward(0.01, 0.0, 0.02), 0.0);
        assert_eq!(ramp_toward(0.0, 0.0, 0.02), 0.0);
    }
}
