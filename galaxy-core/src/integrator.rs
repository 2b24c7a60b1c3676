use crate::engine::World;
use crate::settings::Settings;
use glam::Vec2;

/// Advance every star by one tick using semi-implicit Euler integration.
///
/// The tick is the unit of time: `v += a`, then `x += v * simulation_speed`.
pub fn step(world: &mut World, settings: &Settings) {
    // First, compute all accelerations against the pre-update state
    let accelerations = compute_accelerations(world, settings);

    let speed = settings.simulation_speed;
    for (star, accel) in world.stars.iter_mut().zip(accelerations) {
        star.vel += accel;
        star.pos += star.vel * speed;
    }
}

/// Net acceleration of every star, in star order, from the current state.
#[cfg(not(feature = "parallel"))]
pub fn compute_accelerations(world: &World, settings: &Settings) -> Vec<Vec2> {
    (0..world.stars.len())
        .map(|i| world.compute_acceleration(i, settings))
        .collect()
}

/// Net acceleration of every star, in star order, from the current state.
///
/// Each entry depends only on the unmodified world, so the rayon pass gives
/// the same values as the serial one.
#[cfg(feature = "parallel")]
pub fn compute_accelerations(world: &World, settings: &Settings) -> Vec<Vec2> {
    use rayon::prelude::*;

    (0..world.stars.len())
        .into_par_iter()
        .map(|i| world.compute_acceleration(i, settings))
        .collect()
}
