use crate::diagnostics::count_non_finite;
use crate::engine::{Viewport, World};
use crate::input::{ClickModifier, InputEvent};
use crate::integrator::step;
use crate::lifecycle::{self, ERASE_RADIUS};
use crate::render::{self, RenderItem};
use crate::settings::Settings;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A running simulation: the world, its settings, and loop state.
///
/// Ticks and mutations both take `&mut self`, so edits can only ever land
/// between two ticks.
#[derive(Debug)]
pub struct SimulationContext {
    pub world: World,
    pub settings: Settings,
    pub current_tick: u64,
    rng: StdRng,
    running: bool,
    non_finite: usize,
}

/// Build a context and spawn the initial population of `settings.star_count` stars.
///
/// With a seed, spawning is reproducible.
pub fn build_simulation_context(
    settings: Settings,
    viewport: Viewport,
    seed: Option<u64>,
) -> SimulationContext {
    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut ctx = SimulationContext {
        world: World::new(viewport),
        settings,
        current_tick: 0,
        rng,
        running: true,
        non_finite: 0,
    };
    lifecycle::restart(&mut ctx.world, &ctx.settings, &mut ctx.rng);
    ctx
}

/// Run one tick if the loop is running. Returns whether a tick happened.
pub fn step_simulation(ctx: &mut SimulationContext) -> bool {
    if !ctx.running {
        return false;
    }
    step(&mut ctx.world, &ctx.settings);
    ctx.current_tick += 1;

    let non_finite = count_non_finite(&ctx.world);
    if non_finite != ctx.non_finite {
        if non_finite > 0 {
            log::warn!(
                "tick {}: {} stars have non-finite position or velocity",
                ctx.current_tick,
                non_finite
            );
        }
        ctx.non_finite = non_finite;
    }
    true
}

impl SimulationContext {
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop scheduling ticks; `step_simulation` becomes a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Draw list for the current state.
    pub fn frame(&self) -> Vec<RenderItem> {
        render::frame(&self.world, &self.settings)
    }

    /// Apply one input command.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { pos, modifier } => match modifier {
                ClickModifier::None => {
                    lifecycle::spawn_burst(&mut self.world, &self.settings, pos, &mut self.rng)
                }
                ClickModifier::Repel => {
                    lifecycle::spawn_repulsor(&mut self.world, pos, self.settings.repulse_force)
                }
                ClickModifier::Attract => {
                    lifecycle::spawn_attractor(&mut self.world, pos, self.settings.attract_force)
                }
            },
            InputEvent::Erase { pos } => {
                lifecycle::remove_near(&mut self.world, pos, ERASE_RADIUS);
            }
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::ResetSettings => {
                self.settings.reset_to_defaults();
                log::info!("settings reset to defaults");
            }
            InputEvent::Restart => self.restart(),
        }
    }

    /// Clear everything and respawn `star_count` stars.
    pub fn restart(&mut self) {
        lifecycle::restart(&mut self.world, &self.settings, &mut self.rng);
        self.non_finite = 0;
    }

    /// Update the viewport; invalid dimensions are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        match Viewport::new(width, height) {
            Ok(viewport) => self.world.viewport = viewport,
            Err(e) => log::warn!("ignoring resize: {e}"),
        }
    }
}
