use squishy::{Boundary, Mesh, NoOpStepObserver, Particle, Spring, Vec2, World, WorldConfig};

const DT: f32 = 1.0 / 240.0;

#[test]
fn elastic_and_damping_forces_obey_newtons_third_law() {
    let mut particles = [
        Particle::with_velocity(Vec2::new(0.0f32, 0.0), 1.0, Vec2::new(50.0, -20.0), 2.0, DT),
        Particle::with_velocity(Vec2::new(80.0f32, 30.0), 1.0, Vec2::new(-10.0, 5.0), 3.0, DT),
    ];
    let spring = Spring::new(0, 1, 100.0, 30_000.0, 5_000.0);
    spring.apply(&mut particles);

    let f0 = particles[0].acceleration.scale(particles[0].mass);
    let f1 = particles[1].acceleration.scale(particles[1].mass);
    assert!(f0.length() > 0.0, "spring should produce a force");
    assert!(
        (f0 + f1).length() < f0.length() * 1e-4,
        "forces should be equal and opposite, residual ({}, {})",
        (f0 + f1).x,
        (f0 + f1).y,
    );
}

#[test]
fn at_rest_length_no_force() {
    let mut particles = [
        Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 1.0),
        Particle::new(Vec2::new(100.0f32, 0.0), 1.0, 1.0),
    ];
    let spring = Spring::new(0, 1, 100.0, 30_000.0, 5_000.0);
    spring.apply(&mut particles);

    assert!(particles[0].acceleration.length() < 1e-6);
    assert!(particles[1].acceleration.length() < 1e-6);
}

#[test]
fn stretched_spring_pulls_endpoints_together() {
    let mut particles = [
        Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 1.0),
        Particle::new(Vec2::new(120.0f32, 0.0), 1.0, 1.0),
    ];
    let spring = Spring::new(0, 1, 100.0, 30_000.0, 0.0);
    spring.apply(&mut particles);

    assert!(particles[0].acceleration.x > 0.0, "left endpoint should be pulled right");
    assert!(particles[1].acceleration.x < 0.0, "right endpoint should be pulled left");
}

#[test]
fn compressed_spring_pushes_endpoints_apart() {
    let mut particles = [
        Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 1.0),
        Particle::new(Vec2::new(80.0f32, 0.0), 1.0, 1.0),
    ];
    let spring = Spring::new(0, 1, 100.0, 30_000.0, 0.0);
    spring.apply(&mut particles);

    assert!(particles[0].acceleration.x < 0.0, "left endpoint should be pushed left");
    assert!(particles[1].acceleration.x > 0.0, "right endpoint should be pushed right");
}

#[test]
fn heavier_endpoint_accelerates_less() {
    let mut particles = [
        Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 10.0),
        Particle::new(Vec2::new(120.0f32, 0.0), 1.0, 1.0),
    ];
    let spring = Spring::new(0, 1, 100.0, 30_000.0, 0.0);
    spring.apply(&mut particles);

    assert!(
        particles[0].acceleration.length() < particles[1].acceleration.length(),
        "heavy endpoint moved {} vs light {}",
        particles[0].acceleration.length(),
        particles[1].acceleration.length(),
    );
}

#[test]
fn damping_opposes_closing_speed() {
    // At rest length so only the damping term acts; endpoints approach head-on.
    let mut particles = [
        Particle::with_velocity(Vec2::new(0.0f32, 0.0), 1.0, Vec2::new(240.0, 0.0), 1.0, DT),
        Particle::with_velocity(Vec2::new(100.0f32, 0.0), 1.0, Vec2::new(-240.0, 0.0), 1.0, DT),
    ];
    let spring = Spring::new(0, 1, 100.0, 0.0, 5_000.0);
    spring.apply(&mut particles);

    assert!(particles[0].acceleration.x < 0.0, "damping should decelerate the left endpoint");
    assert!(particles[1].acceleration.x > 0.0, "damping should decelerate the right endpoint");
}

#[test]
fn transverse_motion_is_undamped() {
    // Relative velocity perpendicular to the spring axis projects to zero.
    let mut particles = [
        Particle::with_velocity(Vec2::new(0.0f32, 0.0), 1.0, Vec2::new(0.0, 240.0), 1.0, DT),
        Particle::new(Vec2::new(100.0f32, 0.0), 1.0, 1.0),
    ];
    let spring = Spring::new(0, 1, 100.0, 0.0, 5_000.0);
    spring.apply(&mut particles);

    assert!(particles[0].acceleration.length() < 1e-6);
    assert!(particles[1].acceleration.length() < 1e-6);
}

#[test]
fn coincident_endpoints_produce_no_force() {
    let mut particles = [
        Particle::new(Vec2::new(5.0f32, 5.0), 1.0, 1.0),
        Particle::new(Vec2::new(5.0f32, 5.0), 1.0, 1.0),
    ];
    let spring = Spring::new(0, 1, 10.0, 30_000.0, 5_000.0);
    spring.apply(&mut particles);

    assert_eq!(particles[0].acceleration, Vec2::zero());
    assert_eq!(particles[1].acceleration, Vec2::zero());
}

#[test]
fn zero_rest_length_produces_no_force() {
    let mut particles = [
        Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 1.0),
        Particle::new(Vec2::new(50.0f32, 0.0), 1.0, 1.0),
    ];
    let spring = Spring::new(0, 1, 0.0, 30_000.0, 5_000.0);
    spring.apply(&mut particles);

    assert_eq!(particles[0].acceleration, Vec2::zero());
    assert_eq!(particles[1].acceleration, Vec2::zero());
}

#[test]
fn strain_reports_signed_compression_fraction() {
    let compressed = [
        Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 1.0),
        Particle::new(Vec2::new(80.0f32, 0.0), 1.0, 1.0),
    ];
    let spring = Spring::new(0, 1, 100.0, 1.0, 0.0);
    assert!((spring.strain(&compressed) - 0.2).abs() < 1e-6);

    let stretched = [
        Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 1.0),
        Particle::new(Vec2::new(120.0f32, 0.0), 1.0, 1.0),
    ];
    assert!((spring.strain(&stretched) + 0.2).abs() < 1e-6);
}

#[test]
fn two_particle_spring_at_rest_stays_at_rest() {
    let boundary = Boundary::new(Vec2::new(-500.0f32, -500.0), Vec2::new(1000.0, 1000.0));
    let mut world = World::new(boundary, WorldConfig::new());

    let mut mesh = Mesh::new();
    mesh.add_particle(Particle::new(Vec2::new(0.0, 0.0), 1.0, 1.0));
    mesh.add_particle(Particle::new(Vec2::new(100.0, 0.0), 1.0, 1.0));
    mesh.connect(0, 1, 30_000.0, 5_000.0).unwrap();
    world.push_mesh(mesh);

    for _ in 0..500 {
        world.step(&mut NoOpStepObserver);
    }

    let a = world.meshes()[0].particles()[0].pos;
    let b = world.meshes()[0].particles()[1].pos;
    assert!(
        a.distance(Vec2::new(0.0, 0.0)) < 1e-4,
        "first particle drifted to ({}, {})",
        a.x,
        a.y,
    );
    assert!(
        b.distance(Vec2::new(100.0, 0.0)) < 1e-4,
        "second particle drifted to ({}, {})",
        b.x,
        b.y,
    );
}
