//! Configuration types for the simulation world.

use crate::float::Float;

/// Configuration for the world's step protocol.
///
/// # Builder Pattern
/// ```
/// use squishy::config::WorldConfig;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_steps_per_second(240.0)
///     .with_relaxation_passes(3)
///     .with_bounce_energy(0.8);
/// ```
pub struct WorldConfig<F: Float> {
    /// Fixed timestep. Physics is defined in simulation time, not wall
    /// clock; `dt` never varies with frame jitter. Default: 1/240.
    pub dt: F,
    /// Collision/boundary relaxation passes per step. Default: 3.
    pub relaxation_passes: usize,
    /// Fraction of velocity retained along an axis after a boundary
    /// bounce. Default: 1.0 (elastic).
    pub bounce_energy: F,
    /// Gain for the acceleration nudge injected on overlapping pairs.
    /// Default: 100_000.
    pub collision_impulse_gain: F,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            dt: F::one() / F::from_f32(240.0),
            relaxation_passes: 3,
            bounce_energy: F::one(),
            collision_impulse_gain: F::from_f32(100_000.0),
        }
    }

    /// Set the timestep from a target step rate.
    pub fn with_steps_per_second(mut self, rate: F) -> Self {
        self.dt = F::one() / rate;
        self
    }

    /// Set the number of relaxation passes.
    pub fn with_relaxation_passes(mut self, passes: usize) -> Self {
        self.relaxation_passes = passes.max(1);
        self
    }

    /// Set the boundary restitution coefficient.
    pub fn with_bounce_energy(mut self, bounce_energy: F) -> Self {
        self.bounce_energy = bounce_energy;
        self
    }

    /// Set the collision impulse gain.
    pub fn with_collision_impulse_gain(mut self, gain: F) -> Self {
        self.collision_impulse_gain = gain;
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
