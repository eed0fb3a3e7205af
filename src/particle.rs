//! Verlet point masses with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass advanced by Verlet integration.
///
/// Velocity is never stored: it is always derived as `pos - prev_pos`.
/// Forces accumulate into `acceleration` over a step and are cleared by
/// the world at the start of the next one.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub radius: F,
    pub mass: F,
    pub inv_mass: F,
}

impl<F: Float> Particle<F> {
    /// Create a particle at rest.
    pub fn new(pos: Vec2<F>, radius: F, mass: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            radius,
            mass,
            inv_mass: F::one() / mass,
        }
    }

    /// Create a particle with an initial velocity, encoded into `prev_pos`.
    pub fn with_velocity(pos: Vec2<F>, radius: F, vel: Vec2<F>, mass: F, dt: F) -> Self {
        Particle {
            pos,
            prev_pos: pos - vel.scale(dt),
            acceleration: Vec2::zero(),
            radius,
            mass,
            inv_mass: F::one() / mass,
        }
    }

    /// Accumulate a force, mass-weighted into acceleration.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.acceleration = self.acceleration + force.scale(self.inv_mass);
    }

    /// Accumulate a raw acceleration (uniform and pointer forces).
    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        self.acceleration = self.acceleration + accel;
    }

    /// Zero the accumulated acceleration.
    pub fn clear_forces(&mut self) {
        self.acceleration = Vec2::zero();
    }

    /// Advance one step: `pos + (pos - prev_pos) + acceleration * dt^2`.
    ///
    /// The accumulator is left in place after integrating; the world resets
    /// it at the start of the next step.
    pub fn integrate(&mut self, dt: F) {
        let new_pos = self.pos + (self.pos - self.prev_pos) + self.acceleration.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
    }

    /// Scale the implicit velocity component-wise without moving the particle.
    ///
    /// A factor of `-r` on one axis reflects and attenuates the velocity
    /// along it; `1` on the other axis leaves that component untouched.
    pub fn scale_velocity(&mut self, factor: Vec2<F>) {
        self.prev_pos = self.pos + (self.prev_pos - self.pos).component_mul(factor);
    }

    /// Per-step displacement, `pos - prev_pos`.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}
