//! Mesh presets: rectangle grids, ring bodies, and triangles.
//!
//! Pure data construction with no dynamics; each preset produces a mesh's
//! initial particle and spring lists.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::mesh::Mesh;
use crate::error::PhysicsError;
use alloc::vec::Vec;

/// Configuration for a rectangular grid mesh.
#[derive(Clone)]
pub struct RectConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub spacing: F,
    pub particle_radius: F,
    pub particle_mass: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Default for RectConfig<F> {
    fn default() -> Self {
        RectConfig {
            cols: 5,
            rows: 5,
            spacing: F::from_f32(50.0),
            particle_radius: F::from_f32(15.0),
            particle_mass: F::one(),
            stiffness: F::from_f32(50_000.0),
            damping: F::from_f32(4_000.0),
        }
    }
}

/// Configuration for a ring mesh (hub plus rim).
///
/// Rim spring constants are scaled by segment count when the mesh is built:
/// stiffness divided by `segments`, damping multiplied by it, so overall
/// rim behavior stays comparable across resolutions.
#[derive(Clone)]
pub struct RingConfig<F: Float> {
    pub segments: usize,
    pub ring_radius: F,
    pub particle_radius: F,
    pub particle_mass: F,
    pub spoke_stiffness: F,
    pub spoke_damping: F,
    pub rim_stiffness: F,
    pub rim_damping: F,
}

impl<F: Float> Default for RingConfig<F> {
    fn default() -> Self {
        RingConfig {
            segments: 25,
            ring_radius: F::from_f32(100.0),
            particle_radius: F::from_f32(15.0),
            particle_mass: F::one(),
            spoke_stiffness: F::from_f32(300_000.0),
            spoke_damping: F::from_f32(7_500.0),
            rim_stiffness: F::from_f32(3_000_000.0),
            rim_damping: F::from_f32(750.0),
        }
    }
}

/// Build a `cols x rows` grid of particles centered on `center`.
///
/// Every ordered pair of distinct particles closer than 1.5 cell diagonals
/// is linked, so each neighboring pair carries a spring in both directions.
pub fn rectangle<F: Float>(center: Vec2<F>, config: &RectConfig<F>) -> Mesh<F> {
    let mut particles = Vec::with_capacity(config.cols * config.rows);

    let (x_lo, x_hi) = centered_range(config.cols);
    let (y_lo, y_hi) = centered_range(config.rows);
    for x in x_lo..x_hi {
        for y in y_lo..y_hi {
            let offset = Vec2::new(
                F::from_f32(x as f32) * config.spacing,
                F::from_f32(y as f32) * config.spacing,
            );
            particles.push(Particle::new(
                center + offset,
                config.particle_radius,
                config.particle_mass,
            ));
        }
    }

    let cutoff = Vec2::splat(config.spacing).length() * F::from_f32(1.5);
    let mut springs = Vec::new();
    for i in 0..particles.len() {
        for j in 0..particles.len() {
            if j == i {
                continue;
            }
            let distance = particles[i].pos.distance(particles[j].pos);
            if distance <= cutoff {
                springs.push(Spring::new(i, j, distance, config.stiffness, config.damping));
            }
        }
    }

    Mesh::from_parts(particles, springs)
}

/// Build a hub-and-rim ring: one center particle, `segments` rim particles,
/// spokes from hub to rim, and edges around the rim.
pub fn ring<F: Float>(center: Vec2<F>, config: &RingConfig<F>) -> Result<Mesh<F>, PhysicsError> {
    if config.segments < 3 {
        return Err(PhysicsError::InsufficientSegments);
    }

    let segments = config.segments;
    let mut particles = Vec::with_capacity(segments + 1);
    particles.push(Particle::new(center, config.particle_radius, config.particle_mass));

    let increment = F::two() * F::pi() / F::from_f32(segments as f32);
    for i in 0..segments {
        let angle = increment * F::from_f32(i as f32);
        let offset = Vec2::new(angle.sin(), angle.cos()).scale(config.ring_radius);
        particles.push(Particle::new(
            center + offset,
            config.particle_radius,
            config.particle_mass,
        ));
    }

    let seg_count = F::from_f32(segments as f32);
    let rim_stiffness = config.rim_stiffness / seg_count;
    let rim_damping = config.rim_damping * seg_count;

    let mut springs = Vec::with_capacity(segments * 2);
    for i in 1..=segments {
        springs.push(Spring::from_particles(
            0,
            i,
            &particles,
            config.spoke_stiffness,
            config.spoke_damping,
        ));

        let next = if i == segments { 1 } else { i + 1 };
        springs.push(Spring::from_particles(i, next, &particles, rim_stiffness, rim_damping));
    }

    Ok(Mesh::from_parts(particles, springs))
}

/// A three-segment ring.
pub fn triangle<F: Float>(center: Vec2<F>, config: &RingConfig<F>) -> Result<Mesh<F>, PhysicsError> {
    ring(center, &RingConfig { segments: 3, ..config.clone() })
}

/// Index range spanning `count` cells centered on zero, matching a
/// floor-based split (e.g. 5 cells -> -3..2, 8 cells -> -4..4).
fn centered_range(count: usize) -> (i32, i32) {
    let count = count as i32;
    (-(count + 1) / 2, count / 2)
}
