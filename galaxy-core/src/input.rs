//! Commands an input adapter sends to the simulation between ticks.

use glam::Vec2;

/// Which modifier accompanied a primary click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickModifier {
    /// Plain click: burst of new stars.
    #[default]
    None,
    /// Place a repulsor (shift-click on desktop).
    Repel,
    /// Place an attractor (ctrl-click on desktop).
    Attract,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Click { pos: Vec2, modifier: ClickModifier },
    /// Remove force sources within the erase radius of `pos`.
    Erase { pos: Vec2 },
    Resize { width: f32, height: f32 },
    /// Restore every setting to its default.
    ResetSettings,
    /// Rebuild the population using the current star count.
    Restart,
}
