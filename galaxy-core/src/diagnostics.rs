//! Diagnostics for a running simulation
//!
//! This module summarizes the population for reporting and flags stars whose
//! state has become non-finite, which is the one way the simulation can
//! degrade without failing.

use crate::engine::World;
use std::fmt;

/// Aggregate figures over the current star population.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopulationStats {
    pub stars: usize,
    pub repulsors: usize,
    pub attractors: usize,
    /// Mean speed over finite stars.
    pub mean_speed: f32,
    /// `Σ ½ r² |v|²`, using the star radius as a mass proxy.
    pub kinetic_energy: f32,
    /// Stars whose position or velocity is NaN or infinite.
    pub non_finite: usize,
}

impl PopulationStats {
    pub fn collect(world: &World) -> Self {
        let mut stats = Self {
            stars: world.stars.len(),
            repulsors: world.repulsors.len(),
            attractors: world.attractors.len(),
            ..Self::default()
        };

        let mut speed_sum = 0.0;
        for star in &world.stars {
            if !(star.pos.is_finite() && star.vel.is_finite()) {
                stats.non_finite += 1;
                continue;
            }
            let speed_sq = star.vel.length_squared();
            speed_sum += speed_sq.sqrt();
            stats.kinetic_energy += 0.5 * star.size() * star.size() * speed_sq;
        }

        let finite = stats.stars - stats.non_finite;
        if finite > 0 {
            stats.mean_speed = speed_sum / finite as f32;
        }
        stats
    }
}

impl fmt::Display for PopulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stars={} repulsors={} attractors={} mean_speed={:.3} energy={:.1}",
            self.stars, self.repulsors, self.attractors, self.mean_speed, self.kinetic_energy
        )?;
        if self.non_finite > 0 {
            write!(f, " non_finite={}", self.non_finite)?;
        }
        Ok(())
    }
}

/// Number of stars whose position or velocity is NaN or infinite.
pub fn count_non_finite(world: &World) -> usize {
    world
        .stars
        .iter()
        .filter(|s| !(s.pos.is_finite() && s.vel.is_finite()))
        .count()
}

/// Format an error for display to users
pub fn format_error(error: &dyn std::error::Error) -> String {
    let mut msg = format!("Error: {}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        msg.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    msg
}
