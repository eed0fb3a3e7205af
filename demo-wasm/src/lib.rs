use squishy::{shapes, Boundary, Mesh, NoOpStepObserver, RectConfig, RingConfig, Vec2, World, WorldConfig};
use wasm_bindgen::prelude::*;

/// Interactive spring-mass world, driven from JS one fixed step per frame.
#[wasm_bindgen]
pub struct WorldDemo {
    world: World<f32>,
    dt: f32,
    gravity_on: bool,
    spawned: bool,
}

#[wasm_bindgen]
impl WorldDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        let boundary = Boundary::new(Vec2::new(0.0, 0.0), Vec2::new(width, height));
        let config = WorldConfig::new().with_steps_per_second(240.0);
        let dt = config.dt;
        let mut world = World::new(boundary, config);

        world.add_mesh(|| {
            shapes::rectangle(
                Vec2::new(width / 5.0, height / 2.0),
                &RectConfig { cols: 8, rows: 8, particle_radius: 20.0, ..RectConfig::default() },
            )
        });
        world.add_mesh(|| {
            shapes::rectangle(
                Vec2::new(width / 5.0 * 2.0, height / 2.0),
                &RectConfig { cols: 5, rows: 9, spacing: 40.0, ..RectConfig::default() },
            )
        });
        if let Ok(mesh) = shapes::ring(
            Vec2::new(width / 5.0 * 3.8, height / 2.0),
            &RingConfig {
                segments: 20,
                ring_radius: 150.0,
                particle_radius: 20.0,
                ..RingConfig::default()
            },
        ) {
            world.push_mesh(mesh);
        }
        if let Ok(mesh) = shapes::triangle(
            Vec2::new(width / 2.0, 150.0),
            &RingConfig { ring_radius: 150.0, particle_radius: 25.0, ..RingConfig::default() },
        ) {
            world.push_mesh(mesh);
        }

        WorldDemo { world, dt, gravity_on: false, spawned: false }
    }

    /// Advance one fixed simulation step.
    pub fn update(&mut self) {
        if self.gravity_on {
            self.world.apply_external_force(Vec2::new(0.0, 500.0));
        }
        self.world.step(&mut NoOpStepObserver);
    }

    pub fn toggle_gravity(&mut self) {
        self.gravity_on = !self.gravity_on;
    }

    /// Drag interaction: pushes particles near the pointer along its motion.
    pub fn drag(&mut self, x: f32, y: f32, last_x: f32, last_y: f32) {
        let pos = Vec2::new(x, y);
        let force = (pos - Vec2::new(last_x, last_y)).scale(5.0 / self.dt);
        self.world.apply_pointer_force(pos, force, 100.0);
    }

    /// Hold interaction: keeps a transient particle under the pointer.
    pub fn press(&mut self, x: f32, y: f32) {
        if self.spawned {
            self.world.remove_last_mesh();
        }
        self.world.push_mesh(Mesh::single(Vec2::new(x, y), 25.0, 1.0));
        self.spawned = true;
    }

    pub fn release(&mut self) {
        if self.spawned {
            self.world.remove_last_mesh();
            self.spawned = false;
        }
    }

    /// Returns flat [x, y, radius, ...] for every particle.
    pub fn particles(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.world.particle_count() * 3);
        for mesh in self.world.meshes() {
            for p in mesh.particles() {
                out.push(p.pos.x);
                out.push(p.pos.y);
                out.push(p.radius);
            }
        }
        out
    }

    /// Returns flat [ax, ay, bx, by, strain, ...] for every spring.
    pub fn springs(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for mesh in self.world.meshes() {
            for s in mesh.springs() {
                let a = mesh.particles()[s.a].pos;
                let b = mesh.particles()[s.b].pos;
                out.push(a.x);
                out.push(a.y);
                out.push(b.x);
                out.push(b.y);
                out.push(s.strain(mesh.particles()));
            }
        }
        out
    }

    pub fn particle_count(&self) -> usize {
        self.world.particle_count()
    }
}
