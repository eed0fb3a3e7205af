//! Damped Hookean springs between mesh particles.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;

/// A spring connecting two particles of the same mesh by index.
///
/// Springs own no particles; `a` and `b` index into the mesh's particle
/// container. Rest length is fixed at construction and never changes.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F, damping: F) -> Self {
        Spring { a, b, rest_length, stiffness, damping }
    }

    /// Spring at the endpoints' current separation.
    pub fn from_particles(
        a: usize,
        b: usize,
        particles: &[Particle<F>],
        stiffness: F,
        damping: F,
    ) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Spring { a, b, rest_length, stiffness, damping }
    }

    /// Accumulate the elastic and damping forces onto both endpoints.
    ///
    /// Coincident endpoints normalize to the zero vector and contribute no
    /// force; a zero rest length is skipped for the same reason.
    pub fn apply(&self, particles: &mut [Particle<F>]) {
        if self.rest_length.is_near_zero(F::from_f32(1e-10)) {
            return;
        }

        let pos_a = particles[self.a].pos;
        let pos_b = particles[self.b].pos;

        // Signed compression fraction: positive when compressed.
        let separation = (self.rest_length - pos_a.distance(pos_b)) / self.rest_length;
        let dir = (pos_a - pos_b).normalize();
        let force = dir.scale(self.stiffness * separation);

        particles[self.a].apply_force(force);
        particles[self.b].apply_force(-force);

        // Damping acts only along the spring axis; transverse motion is untouched.
        let vel_a = particles[self.a].velocity_raw();
        let vel_b = particles[self.b].velocity_raw();
        let alignment = (vel_b - vel_a).dot(dir);
        let damping_force = dir.scale(self.damping * alignment);

        particles[self.a].apply_force(damping_force);
        particles[self.b].apply_force(-damping_force);
    }

    /// Current compression/extension fraction, for stress visualization.
    ///
    /// Positive = compressed, negative = stretched, zero at rest length.
    pub fn strain(&self, particles: &[Particle<F>]) -> F {
        if self.rest_length.is_near_zero(F::from_f32(1e-10)) {
            return F::zero();
        }
        let dist = particles[self.a].pos.distance(particles[self.b].pos);
        (self.rest_length - dist) / self.rest_length
    }
}
