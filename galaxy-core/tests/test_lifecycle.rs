//! Tests for spawning, erasing and resetting entities

use galaxy_core::engine::{StarColor, Viewport};
use galaxy_core::lifecycle::{
    orbital_velocity, remove_near, reset_population, restart, spawn_attractor, spawn_burst,
    spawn_repulsor, spawn_star, BURST_RADIUS, ERASE_RADIUS, SPAWN_DISC_FRACTION,
};
use galaxy_core::settings::Settings;
use galaxy_core::tests::test_helpers::{
    approx_eq_f32, approx_eq_vec2, empty_world, inert_settings, seeded_rng,
};
use glam::Vec2;

#[test]
fn test_orbital_velocity_at_offset() {
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let center = viewport.center();
    let offset = Vec2::new(100.0, 0.0);
    let settings = Settings::default();

    let vel = orbital_velocity(center + offset, center, &settings);

    assert!(approx_eq_f32(vel.length(), (5000.0f32 / 100.0).sqrt(), 1e-4));
    assert!(approx_eq_f32(vel.length(), 7.0710678, 1e-4));
    assert!(approx_eq_f32(vel.dot(offset), 0.0, 1e-3));
    // Counter-clockwise in screen coordinates: (-sin θ, cos θ) with θ = 0
    assert!(vel.y > 0.0);
}

#[test]
fn test_orbital_velocity_degenerate_cases() {
    let center = Vec2::new(400.0, 300.0);
    let settings = Settings::default();
    assert_eq!(orbital_velocity(center, center, &settings), Vec2::ZERO);

    let repulsive = Settings {
        gravity: -100.0,
        ..Settings::default()
    };
    let vel = orbital_velocity(center + Vec2::new(50.0, 0.0), center, &repulsive);
    assert_eq!(vel, Vec2::ZERO);

    let off = inert_settings();
    let vel = orbital_velocity(center + Vec2::new(50.0, 0.0), center, &off);
    assert_eq!(vel, Vec2::ZERO);
}

#[test]
fn test_global_spawn_stays_in_disc_on_orbits() {
    let settings = Settings::default();
    let mut world = empty_world();
    let mut rng = seeded_rng(7);
    let center = world.viewport.center();
    let max_radius = world.viewport.width / 2.0 * SPAWN_DISC_FRACTION;

    for _ in 0..500 {
        spawn_star(&mut world, &settings, &mut rng);
    }

    assert_eq!(world.stars.len(), 500);
    for star in &world.stars {
        let offset = star.pos - center;
        let dist = offset.length();
        assert!(dist <= max_radius + 1e-3);
        assert!(star.size() >= 0.5 && star.size() < 0.5 + settings.star_size + 1e-6);
        assert!(StarColor::PALETTE.contains(&star.color()));
        if dist > 1.0 {
            let speed = (settings.gravity / dist).sqrt();
            assert!(approx_eq_f32(star.vel.length(), speed, speed * 1e-4));
            assert!(approx_eq_f32(star.vel.normalize().dot(offset / dist), 0.0, 1e-4));
        }
    }
}

#[test]
fn test_global_spawn_is_denser_near_center() {
    let settings = inert_settings();
    let mut world = empty_world();
    let mut rng = seeded_rng(13);
    let center = world.viewport.center();
    let max_radius = world.viewport.width / 2.0 * SPAWN_DISC_FRACTION;

    for _ in 0..4000 {
        spawn_star(&mut world, &settings, &mut rng);
    }

    let mut radii: Vec<f32> = world
        .stars
        .iter()
        .map(|s| s.pos.distance(center) / max_radius)
        .collect();
    radii.sort_by(|a, b| a.total_cmp(b));

    // sqrt(u) radii put half the stars inside 1/sqrt(2) of the disc radius
    let median = radii[radii.len() / 2];
    assert!(approx_eq_f32(median, std::f32::consts::FRAC_1_SQRT_2, 0.03));
    // and a quarter inside half the radius, where a uniform radius would put half
    let inner = radii.iter().filter(|&&r| r <= 0.5).count() as f32 / radii.len() as f32;
    assert!(approx_eq_f32(inner, 0.25, 0.03));
}

#[test]
fn test_global_spawn_at_rest_without_central_gravity() {
    let settings = inert_settings();
    let mut world = empty_world();
    let mut rng = seeded_rng(3);

    for _ in 0..50 {
        spawn_star(&mut world, &settings, &mut rng);
    }

    assert!(world.stars.iter().all(|s| s.vel == Vec2::ZERO));
}

#[test]
fn test_burst_spawns_around_point_orbiting_center() {
    let settings = Settings {
        stars_per_click: 25,
        ..Settings::default()
    };
    let mut world = empty_world();
    let mut rng = seeded_rng(11);
    let point = Vec2::new(150.0, 120.0);
    let center = world.viewport.center();

    spawn_burst(&mut world, &settings, point, &mut rng);

    assert_eq!(world.stars.len(), 25);
    for star in &world.stars {
        assert!(star.pos.distance(point) <= BURST_RADIUS + 1e-3);
        let offset = star.pos - center;
        assert!(approx_eq_f32(star.vel.normalize().dot(offset.normalize()), 0.0, 1e-4));
        let speed = (settings.gravity / offset.length()).sqrt();
        assert!(approx_eq_f32(star.vel.length(), speed, 1e-3));
    }
}

#[test]
fn test_sources_keep_strength_given_at_creation() {
    let mut settings = Settings::default();
    let mut world = empty_world();

    spawn_repulsor(&mut world, Vec2::new(10.0, 10.0), settings.repulse_force);
    spawn_attractor(&mut world, Vec2::new(20.0, 20.0), settings.attract_force);
    settings.repulse_force = 1.0;
    settings.attract_force = 2.0;

    assert_eq!(world.repulsors[0].strength, 10000.0);
    assert_eq!(world.attractors[0].strength, 10000.0);
}

#[test]
fn test_remove_near_respects_radius() {
    let mut world = empty_world();
    let point = Vec2::new(100.0, 100.0);
    let eps = 0.01;

    spawn_repulsor(&mut world, point + Vec2::new(ERASE_RADIUS - eps, 0.0), 1.0);
    spawn_repulsor(&mut world, point + Vec2::new(ERASE_RADIUS + eps, 0.0), 1.0);
    spawn_attractor(&mut world, point + Vec2::new(0.0, ERASE_RADIUS - eps), 1.0);
    spawn_attractor(&mut world, point + Vec2::new(0.0, -(ERASE_RADIUS + eps)), 1.0);
    spawn_attractor(&mut world, point, 1.0);

    let removed = remove_near(&mut world, point, ERASE_RADIUS);

    assert_eq!(removed, 3);
    assert_eq!(world.repulsors.len(), 1);
    assert_eq!(world.attractors.len(), 1);
    assert!(approx_eq_vec2(
        world.repulsors[0].pos,
        point + Vec2::new(ERASE_RADIUS + eps, 0.0),
        1e-4
    ));
    assert!(approx_eq_vec2(
        world.attractors[0].pos,
        point + Vec2::new(0.0, -(ERASE_RADIUS + eps)),
        1e-4
    ));
}

#[test]
fn test_remove_near_is_inclusive_at_radius() {
    let mut world = empty_world();
    spawn_repulsor(&mut world, Vec2::new(110.0, 100.0), 1.0);
    assert_eq!(remove_near(&mut world, Vec2::new(100.0, 100.0), 10.0), 1);
    assert!(world.repulsors.is_empty());
}

#[test]
fn test_reset_population_clears_sources() {
    let settings = Settings::default();
    let mut world = empty_world();
    let mut rng = seeded_rng(1);
    spawn_burst(&mut world, &settings, Vec2::new(50.0, 50.0), &mut rng);
    spawn_repulsor(&mut world, Vec2::ZERO, 1.0);
    spawn_attractor(&mut world, Vec2::ONE, 1.0);

    reset_population(&mut world, &settings, 321, &mut rng);

    assert_eq!(world.stars.len(), 321);
    assert!(world.repulsors.is_empty());
    assert!(world.attractors.is_empty());
}

#[test]
fn test_restart_reads_star_count() {
    let mut settings = Settings::default();
    let mut world = empty_world();
    let mut rng = seeded_rng(2);

    settings.star_count = 42;
    restart(&mut world, &settings, &mut rng);
    assert_eq!(world.stars.len(), 42);

    settings.star_count = 0;
    restart(&mut world, &settings, &mut rng);
    assert!(world.stars.is_empty());
}
