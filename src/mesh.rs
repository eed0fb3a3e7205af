//! Particle/spring aggregates forming one physical body.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::error::PhysicsError;
use alloc::vec::Vec;

/// A deformable body: an ordered set of particles joined by springs.
///
/// Springs reference particles by index into this mesh only; there are no
/// cross-mesh springs. A mesh is the unit of addition and removal in the
/// world.
pub struct Mesh<F: Float> {
    particles: Vec<Particle<F>>,
    springs: Vec<Spring<F>>,
}

impl<F: Float> Mesh<F> {
    pub fn new() -> Self {
        Mesh {
            particles: Vec::new(),
            springs: Vec::new(),
        }
    }

    /// Assemble a mesh from builder-produced parts. Indices are correct by
    /// construction, so the public validation path is skipped.
    pub(crate) fn from_parts(particles: Vec<Particle<F>>, springs: Vec<Spring<F>>) -> Self {
        Mesh { particles, springs }
    }

    /// A one-particle mesh, used for transient pointer-spawned bodies.
    pub fn single(pos: Vec2<F>, radius: F, mass: F) -> Self {
        let mut mesh = Mesh::new();
        mesh.add_particle(Particle::new(pos, radius, mass));
        mesh
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Add a spring after validating its endpoint indices.
    pub fn add_spring(&mut self, spring: Spring<F>) -> Result<(), PhysicsError> {
        let count = self.particles.len();
        if spring.a >= count {
            return Err(PhysicsError::SpringEndpointOutOfBounds { index: spring.a, count });
        }
        if spring.b >= count {
            return Err(PhysicsError::SpringEndpointOutOfBounds { index: spring.b, count });
        }
        if spring.a == spring.b {
            return Err(PhysicsError::SpringEndpointsEqual { index: spring.a });
        }
        self.springs.push(spring);
        Ok(())
    }

    /// Connect two particles with a spring at their current separation.
    pub fn connect(
        &mut self,
        a: usize,
        b: usize,
        stiffness: F,
        damping: F,
    ) -> Result<(), PhysicsError> {
        let count = self.particles.len();
        if a >= count {
            return Err(PhysicsError::SpringEndpointOutOfBounds { index: a, count });
        }
        if b >= count {
            return Err(PhysicsError::SpringEndpointOutOfBounds { index: b, count });
        }
        if a == b {
            return Err(PhysicsError::SpringEndpointsEqual { index: a });
        }
        self.springs
            .push(Spring::from_particles(a, b, &self.particles, stiffness, damping));
        Ok(())
    }

    /// Evaluate every spring, accumulating forces onto its endpoints.
    pub fn apply_spring_forces(&mut self) {
        for spring in &self.springs {
            spring.apply(&mut self.particles);
        }
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle<F>] {
        &mut self.particles
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }
}

impl<F: Float> Default for Mesh<F> {
    fn default() -> Self {
        Self::new()
    }
}
