//! Draw descriptors handed to whatever paints the canvas.

use crate::engine::{StarColor, World};
use crate::settings::Settings;
use glam::Vec2;

/// Radius of the ring drawn for repulsors and attractors.
pub const SOURCE_MARKER_RADIUS: f32 = 6.0;

/// One thing to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderItem {
    /// Partially clear the previous frame with a translucent black layer.
    TrailFade { opacity: f32 },
    Star {
        pos: Vec2,
        radius: f32,
        color: StarColor,
    },
    Repulsor { pos: Vec2 },
    Attractor { pos: Vec2 },
}

/// Everything to draw for the current state, in paint order:
/// trail fade, stars, repulsors, attractors.
pub fn frame(world: &World, settings: &Settings) -> Vec<RenderItem> {
    let mut items =
        Vec::with_capacity(1 + world.stars.len() + world.repulsors.len() + world.attractors.len());

    items.push(RenderItem::TrailFade {
        opacity: settings.trail_opacity,
    });
    items.extend(world.stars.iter().map(|s| RenderItem::Star {
        pos: s.pos,
        radius: s.size(),
        color: s.color(),
    }));
    items.extend(
        world
            .repulsors
            .iter()
            .map(|r| RenderItem::Repulsor { pos: r.pos }),
    );
    items.extend(
        world
            .attractors
            .iter()
            .map(|a| RenderItem::Attractor { pos: a.pos }),
    );

    items
}
