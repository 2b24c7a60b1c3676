//! Inverse-square acceleration contributions.
//!
//! Every function returns the acceleration one source imparts on a point for
//! a single tick, already scaled by `simulation_speed`. Pairs closer than the
//! relevant minimum distance contribute exactly zero.

use crate::engine::ForceSource;
use crate::settings::Settings;
use glam::Vec2;

/// Repulsors and attractors are ignored at or below this separation.
pub const SOURCE_MIN_DISTANCE: f32 = 5.0;

/// Star pairs are ignored at or below this separation.
pub const STAR_MIN_DISTANCE: f32 = 2.0;

/// Central gravity is ignored at or below this separation from the center.
pub const CENTRAL_MIN_DISTANCE: f32 = 1.0;

/// Acceleration of magnitude `strength / d²` pointing from `point` toward `target`,
/// or zero when `d <= min_distance`.
fn pull_toward(point: Vec2, target: Vec2, strength: f32, min_distance: f32, speed: f32) -> Vec2 {
    let r = target - point;
    let dist_sq = r.length_squared();
    let dist = dist_sq.sqrt();
    if dist <= min_distance {
        return Vec2::ZERO;
    }
    let force_mag = strength / dist_sq * speed;
    r / dist * force_mag
}

/// Pull toward the viewport center with strength `G`.
pub fn central_gravity(point: Vec2, center: Vec2, settings: &Settings) -> Vec2 {
    pull_toward(
        point,
        center,
        settings.gravity,
        CENTRAL_MIN_DISTANCE,
        settings.simulation_speed,
    )
}

/// Push away from a repulsor.
pub fn repulsion(point: Vec2, source: &ForceSource, settings: &Settings) -> Vec2 {
    -pull_toward(
        point,
        source.pos,
        source.strength,
        SOURCE_MIN_DISTANCE,
        settings.simulation_speed,
    )
}

/// Pull toward an attractor.
pub fn attraction(point: Vec2, source: &ForceSource, settings: &Settings) -> Vec2 {
    pull_toward(
        point,
        source.pos,
        source.strength,
        SOURCE_MIN_DISTANCE,
        settings.simulation_speed,
    )
}

/// Pull toward another star with strength `G`.
pub fn star_gravity(point: Vec2, other: Vec2, settings: &Settings) -> Vec2 {
    pull_toward(
        point,
        other,
        settings.gravity,
        STAR_MIN_DISTANCE,
        settings.simulation_speed,
    )
}
