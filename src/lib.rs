//! Spring-mass soft body physics with Verlet integration.
//!
//! `squishy` models deformable bodies as meshes of point masses joined by
//! damped springs, advanced with position-based Verlet dynamics under a
//! fixed timestep, with brute-force pairwise collision resolution and
//! axis-aligned boundary containment. Designed to sit under an external
//! rendering/input driver that calls [`World::step`] once per frame.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Damped springs**: Hookean force law with axial velocity damping
//! - **Mesh bodies**: Particle/spring aggregates added and removed at runtime
//! - **Collision & containment**: All-pairs overlap resolution and boundary
//!   bounce with configurable restitution
//! - **Presets**: Rectangle, ring, and triangle mesh builders
//! - **Observable**: Monitor step phases via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod mesh;
pub mod boundary;
pub mod world;
pub mod shapes;
pub mod config;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use spring::Spring;
pub use mesh::Mesh;
pub use boundary::Boundary;
pub use world::World;
pub use config::WorldConfig;
pub use shapes::{RectConfig, RingConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
