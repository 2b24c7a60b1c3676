//! Creation and removal of stars and force sources.

use crate::engine::{ForceSource, Star, StarColor, World};
use crate::forces::CENTRAL_MIN_DISTANCE;
use crate::settings::Settings;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Fraction of the half-width covered by the initial disc.
pub const SPAWN_DISC_FRACTION: f32 = 0.8;

/// Maximum scatter of a burst around the click point.
pub const BURST_RADIUS: f32 = 50.0;

/// Reach of the erase gesture.
pub const ERASE_RADIUS: f32 = 10.0;

/// Smallest radius any star is given; `star_size` adds on top of it.
const MIN_STAR_SIZE: f32 = 0.5;

/// Initial velocity for a star at `pos`: a tangential circular-orbit speed
/// `sqrt(G / d)` around `center` when central gravity is on, zero otherwise.
///
/// Stars at the center, or under a non-positive `G`, have no circular orbit
/// and start at rest.
pub fn orbital_velocity(pos: Vec2, center: Vec2, settings: &Settings) -> Vec2 {
    if !settings.central_gravity || settings.gravity <= 0.0 {
        return Vec2::ZERO;
    }
    let offset = pos - center;
    let dist = offset.length();
    if dist <= CENTRAL_MIN_DISTANCE {
        return Vec2::ZERO;
    }
    let speed = (settings.gravity / dist).sqrt();
    offset.perp() / dist * speed
}

/// Create a star at `pos` with randomized size and color.
pub fn create_star<R: Rng>(pos: Vec2, world: &World, settings: &Settings, rng: &mut R) -> Star {
    let vel = orbital_velocity(pos, world.viewport.center(), settings);
    let size = rng.gen::<f32>() * settings.star_size + MIN_STAR_SIZE;
    let color = StarColor::PALETTE[rng.gen_range(0..StarColor::PALETTE.len())];
    Star::new(pos, vel, size, color)
}

/// Place a star somewhere in the disc around the viewport center.
///
/// The radius is `sqrt(u)` scaled, which biases placement toward the middle.
pub fn spawn_star<R: Rng>(world: &mut World, settings: &Settings, rng: &mut R) {
    let angle = rng.gen::<f32>() * TAU;
    let max_radius = world.viewport.width / 2.0 * SPAWN_DISC_FRACTION;
    let radius = rng.gen::<f32>().sqrt() * max_radius;
    let pos = world.viewport.center() + Vec2::from_angle(angle) * radius;

    let star = create_star(pos, world, settings, rng);
    world.stars.push(star);
}

/// Place a star within [`BURST_RADIUS`] of `point`.
///
/// The orbit rule still refers to the viewport center, not `point`.
pub fn spawn_star_near<R: Rng>(world: &mut World, settings: &Settings, point: Vec2, rng: &mut R) {
    let angle = rng.gen::<f32>() * TAU;
    let radius = rng.gen::<f32>() * BURST_RADIUS;
    let pos = point + Vec2::from_angle(angle) * radius;

    let star = create_star(pos, world, settings, rng);
    world.stars.push(star);
}

/// Spawn `stars_per_click` stars around `point`.
pub fn spawn_burst<R: Rng>(world: &mut World, settings: &Settings, point: Vec2, rng: &mut R) {
    for _ in 0..settings.stars_per_click {
        spawn_star_near(world, settings, point, rng);
    }
    log::debug!(
        "burst of {} stars at ({:.1}, {:.1})",
        settings.stars_per_click,
        point.x,
        point.y
    );
}

pub fn spawn_repulsor(world: &mut World, pos: Vec2, strength: f32) {
    world.repulsors.push(ForceSource::new(pos, strength));
    log::debug!("repulsor placed at ({:.1}, {:.1})", pos.x, pos.y);
}

pub fn spawn_attractor(world: &mut World, pos: Vec2, strength: f32) {
    world.attractors.push(ForceSource::new(pos, strength));
    log::debug!("attractor placed at ({:.1}, {:.1})", pos.x, pos.y);
}

/// Delete every repulsor and attractor within `radius` of `point` (inclusive).
///
/// Returns how many sources were removed.
pub fn remove_near(world: &mut World, point: Vec2, radius: f32) -> usize {
    let before = world.repulsors.len() + world.attractors.len();
    world.repulsors.retain(|s| s.pos.distance(point) > radius);
    world.attractors.retain(|s| s.pos.distance(point) > radius);
    let removed = before - world.repulsors.len() - world.attractors.len();
    if removed > 0 {
        log::debug!("erased {removed} force sources");
    }
    removed
}

/// Clear every entity and spawn `count` fresh stars.
pub fn reset_population<R: Rng>(world: &mut World, settings: &Settings, count: usize, rng: &mut R) {
    world.stars.clear();
    world.repulsors.clear();
    world.attractors.clear();
    world.stars.reserve(count);
    for _ in 0..count {
        spawn_star(world, settings, rng);
    }
    log::info!("population reset to {count} stars");
}

/// Reset using the current `star_count`.
pub fn restart<R: Rng>(world: &mut World, settings: &Settings, rng: &mut R) {
    reset_population(world, settings, settings.star_count, rng);
}
