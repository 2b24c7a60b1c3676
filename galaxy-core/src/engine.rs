use crate::error::{Error, Result};
use crate::forces;
use crate::settings::Settings;
use glam::Vec2;

/// Star tints, as RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarColor {
    White,
    Warm,
    Cool,
    Pink,
}

impl StarColor {
    pub const PALETTE: [StarColor; 4] = [
        StarColor::White,
        StarColor::Warm,
        StarColor::Cool,
        StarColor::Pink,
    ];

    pub fn rgb(self) -> [u8; 3] {
        match self {
            StarColor::White => [0xff, 0xff, 0xff],
            StarColor::Warm => [0xff, 0xe9, 0xc4],
            StarColor::Cool => [0xd4, 0xfb, 0xff],
            StarColor::Pink => [0xff, 0xd1, 0xdc],
        }
    }
}

/// A simulated point mass
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
    size: f32,
    color: StarColor,
}

impl Star {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, color: StarColor) -> Self {
        Self {
            pos,
            vel,
            size,
            color,
        }
    }

    /// Radius, fixed at creation.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> StarColor {
        self.color
    }
}

/// A fixed point source of radial force (repulsor or attractor).
///
/// The strength is captured when the source is placed and does not follow
/// later settings edits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceSource {
    pub pos: Vec2,
    pub strength: f32,
}

impl ForceSource {
    pub fn new(pos: Vec2, strength: f32) -> Self {
        Self { pos, strength }
    }
}

/// Canvas dimensions; the center is both the gravity well and the spawn centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// All simulated entities
#[derive(Debug, Clone)]
pub struct World {
    pub stars: Vec<Star>,
    pub repulsors: Vec<ForceSource>,
    pub attractors: Vec<ForceSource>,
    pub viewport: Viewport,
}

impl World {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            stars: Vec::new(),
            repulsors: Vec::new(),
            attractors: Vec::new(),
            viewport,
        }
    }

    /// Compute the net acceleration on the star at the given index from the
    /// current (pre-update) state of everything else.
    pub fn compute_acceleration(&self, star_idx: usize, settings: &Settings) -> Vec2 {
        let star = &self.stars[star_idx];
        let mut accel = Vec2::ZERO;

        if settings.central_gravity {
            accel += forces::central_gravity(star.pos, self.viewport.center(), settings);
        }
        for rep in &self.repulsors {
            accel += forces::repulsion(star.pos, rep, settings);
        }
        for att in &self.attractors {
            accel += forces::attraction(star.pos, att, settings);
        }
        if settings.star_gravity {
            for (i, other) in self.stars.iter().enumerate() {
                if i != star_idx {
                    accel += forces::star_gravity(star.pos, other.pos, settings);
                }
            }
        }

        accel
    }
}
