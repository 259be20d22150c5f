//! Inertial continuation of a released pan.

use crate::config::GestureTuning;

/// A running momentum animation.
///
/// Each animation frame moves the view by `velocity * frame_interval_ms`
/// pixels, then decays the velocity geometrically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentum {
    velocity: f32,
}

impl Momentum {
    /// Starts momentum if the release speed is strictly above `threshold`.
    pub fn start(velocity: f32, threshold: f32) -> Option<Self> {
        if velocity.is_finite() && velocity.abs() > threshold {
            Some(Self { velocity })
        } else {
            None
        }
    }

    /// Current velocity in px/ms.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Advances one frame.
    ///
    /// # Returns
    /// The pixel distance to apply this frame, or `None` once the animation
    /// has come to rest (nothing is applied on that frame).
    pub fn step(&mut self, tuning: &GestureTuning) -> Option<f32> {
        if self.velocity.abs() < tuning.momentum_stop_velocity {
            return None;
        }
        let px = self.velocity * tuning.frame_interval_ms;
        self.velocity *= tuning.momentum_friction;
        Some(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_requires_threshold() {
        assert!(Momentum::start(0.5, 0.5).is_none());
        assert!(Momentum::start(-0.4, 0.5).is_none());
        assert!(Momentum::start(f32::NAN, 0.5).is_none());
        assert_eq!(Momentum::start(-0.6, 0.5).map(|m| m.velocity()), Some(-0.6));
    }

    #[test]
    fn test_step_decays_until_rest() {
        let tuning = GestureTuning::default();
        let mut momentum = Momentum::start(1.0, 0.5).unwrap();

        let first = momentum.step(&tuning).unwrap();
        assert_eq!(first, 16.0);
        assert!((momentum.velocity() - 0.95).abs() < 1e-6);

        let mut frames = 1;
        while momentum.step(&tuning).is_some() {
            frames += 1;
            assert!(frames < 1000, "momentum never settled");
        }
        // 0.95^n < 0.1 first holds at n = 45.
        assert_eq!(frames, 45);
        assert!(momentum.velocity() < tuning.momentum_stop_velocity);
    }

    #[test]
    fn test_negative_velocity_moves_negative() {
        let tuning = GestureTuning::default();
        let mut momentum = Momentum::start(-2.0, 0.3).unwrap();
        assert_eq!(momentum.step(&tuning), Some(-32.0));
    }
}
