pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod forces;
pub mod input;
pub mod integrator;
pub mod lifecycle;
pub mod render;
pub mod runtime;
pub mod settings;

pub use diagnostics::PopulationStats;
pub use engine::{ForceSource, Star, StarColor, Viewport, World};
pub use error::{Error, Result};
pub use glam::Vec2;
pub use input::{ClickModifier, InputEvent};
pub use render::RenderItem;
pub use runtime::{build_simulation_context, step_simulation, SimulationContext};
pub use settings::{SettingValue, Settings, FIELD_NAMES};
