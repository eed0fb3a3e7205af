//! Simulation world: the fixed-timestep step protocol.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use crate::mesh::Mesh;
use crate::boundary::Boundary;
use crate::config::WorldConfig;
use crate::observer::StepObserver;
use alloc::vec::Vec;

/// A localized force staged for the next step.
struct PointerForce<F: Float> {
    point: Vec2<F>,
    force: Vec2<F>,
    radius: F,
}

/// Owns all meshes and the boundary; drives force accumulation,
/// integration, and collision/boundary relaxation.
///
/// External and pointer forces are staged with [`World::apply_external_force`]
/// and [`World::apply_pointer_force`] and drained by the next [`World::step`];
/// they are never persisted across steps.
pub struct World<F: Float> {
    meshes: Vec<Mesh<F>>,
    boundary: Boundary<F>,
    config: WorldConfig<F>,
    external_force: Vec2<F>,
    pointer_forces: Vec<PointerForce<F>>,
}

impl<F: Float> World<F> {
    pub fn new(boundary: Boundary<F>, config: WorldConfig<F>) -> Self {
        World {
            meshes: Vec::new(),
            boundary,
            config,
            external_force: Vec2::zero(),
            pointer_forces: Vec::new(),
        }
    }

    /// Append a mesh produced by a factory closure.
    pub fn add_mesh<B: FnOnce() -> Mesh<F>>(&mut self, build: B) {
        self.meshes.push(build());
    }

    /// Append an already-built mesh.
    pub fn push_mesh(&mut self, mesh: Mesh<F>) {
        self.meshes.push(mesh);
    }

    /// Remove the most recently added mesh.
    ///
    /// Supports the transient spawn-on-press, discard-on-release lifecycle;
    /// the world itself never tracks trigger state.
    pub fn remove_last_mesh(&mut self) -> Option<Mesh<F>> {
        self.meshes.pop()
    }

    /// Stage a uniform force for the next step only.
    pub fn apply_external_force(&mut self, force: Vec2<F>) {
        self.external_force = self.external_force + force;
    }

    /// Stage a force on every particle within `radius` of `point` for the
    /// next step only. The host derives `force` from pointer displacement.
    pub fn apply_pointer_force(&mut self, point: Vec2<F>, force: Vec2<F>, radius: F) {
        self.pointer_forces.push(PointerForce { point, force, radius });
    }

    /// Advance the simulation by one fixed timestep.
    ///
    /// Phases run in strict order: reset, spring forces, staged external and
    /// pointer forces, integration, then `relaxation_passes` rounds of
    /// collision resolution and boundary containment.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        let dt = self.config.dt;

        for mesh in &mut self.meshes {
            for p in mesh.particles_mut() {
                p.clear_forces();
            }
        }

        for mesh in &mut self.meshes {
            mesh.apply_spring_forces();
        }

        let uniform = self.external_force;
        self.external_force = Vec2::zero();
        if uniform != Vec2::zero() {
            for mesh in &mut self.meshes {
                for p in mesh.particles_mut() {
                    p.apply_acceleration(uniform);
                }
            }
        }

        let pointer_forces = core::mem::take(&mut self.pointer_forces);
        for pf in pointer_forces {
            let radius_sq = pf.radius * pf.radius;
            for mesh in &mut self.meshes {
                for p in mesh.particles_mut() {
                    if p.pos.distance_sq(pf.point) < radius_sq {
                        p.apply_acceleration(pf.force);
                    }
                }
            }
        }
        observer.on_forces_accumulated();

        for mesh in &mut self.meshes {
            for p in mesh.particles_mut() {
                p.integrate(dt);
            }
        }
        observer.on_integrate();

        for pass in 0..self.config.relaxation_passes {
            self.resolve_collisions(dt);
            self.resolve_bounds();
            observer.on_relaxation_pass(pass);
        }

        observer.on_step_complete();
    }

    /// Brute-force all-pairs collision resolution across every mesh.
    ///
    /// Pairs are corrected in sequence, so later pairs observe earlier
    /// corrections within the same pass.
    fn resolve_collisions(&mut self, dt: F) {
        let gain = self.config.collision_impulse_gain;

        let mut ids: Vec<(usize, usize)> = Vec::new();
        for (m, mesh) in self.meshes.iter().enumerate() {
            for i in 0..mesh.particle_count() {
                ids.push((m, i));
            }
        }

        for x in 0..ids.len() {
            for i in (x + 1)..ids.len() {
                let (pos_x, r_x) = {
                    let p = self.particle_at(ids[x]);
                    (p.pos, p.radius)
                };
                let (pos_i, r_i) = {
                    let p = self.particle_at(ids[i]);
                    (p.pos, p.radius)
                };

                let delta = pos_i - pos_x;
                let distance_sq = delta.length_sq();
                let combined = r_i + r_x;
                if distance_sq - combined * combined > F::zero() {
                    continue;
                }

                let overlap = combined - distance_sq.sqrt();
                if overlap > F::zero() {
                    // Coincident centers normalize to zero: no correction axis.
                    let dir = delta.normalize();
                    let shift = dir.scale(overlap * F::half());
                    let nudge = dir.scale(overlap * dt * gain);

                    let p = self.particle_at_mut(ids[i]);
                    p.pos = p.pos + shift;
                    p.apply_acceleration(nudge);

                    let p = self.particle_at_mut(ids[x]);
                    p.pos = p.pos - shift;
                    p.apply_acceleration(-nudge);
                }
            }
        }
    }

    /// Clamp escaped particles so they rest against the boundary edge and
    /// reflect their velocity along the violated axis, attenuated by
    /// `bounce_energy`.
    ///
    /// At most one axis is corrected per `if`/`else if` arm per pass;
    /// repeated relaxation passes converge the remainder.
    fn resolve_bounds(&mut self) {
        let min = self.boundary.min();
        let max = self.boundary.max();
        let bounce = self.config.bounce_energy;
        let reflect_x = Vec2::new(-bounce, F::one());
        let reflect_y = Vec2::new(F::one(), -bounce);

        for mesh in &mut self.meshes {
            for p in mesh.particles_mut() {
                let lo = min + Vec2::splat(p.radius);
                let hi = max - Vec2::splat(p.radius);
                if p.pos.x < lo.x {
                    p.pos.x = lo.x;
                    p.scale_velocity(reflect_x);
                } else if p.pos.y < lo.y {
                    p.pos.y = lo.y;
                    p.scale_velocity(reflect_y);
                }
                if p.pos.x > hi.x {
                    p.pos.x = hi.x;
                    p.scale_velocity(reflect_x);
                } else if p.pos.y > hi.y {
                    p.pos.y = hi.y;
                    p.scale_velocity(reflect_y);
                }
            }
        }
    }

    fn particle_at(&self, id: (usize, usize)) -> &Particle<F> {
        &self.meshes[id.0].particles()[id.1]
    }

    fn particle_at_mut(&mut self, id: (usize, usize)) -> &mut Particle<F> {
        &mut self.meshes[id.0].particles_mut()[id.1]
    }

    pub fn meshes(&self) -> &[Mesh<F>] {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut [Mesh<F>] {
        &mut self.meshes
    }

    pub fn boundary(&self) -> &Boundary<F> {
        &self.boundary
    }

    pub fn config(&self) -> &WorldConfig<F> {
        &self.config
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn particle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.particle_count()).sum()
    }
}
