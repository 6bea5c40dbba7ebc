//=========================================================================
// Physics Body
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{Aabb, BodyId};

//=== BodyKind ============================================================

/// How the world treats a body during `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Integrated every step and resolved against its collider targets.
    Dynamic,

    /// Never integrated; moved explicitly (tweens) and carries riders.
    Kinematic,

    /// Never moves.
    Static,
}

//=== Blocked =============================================================

/// Contact flags from the most recent step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub down: bool,
    pub up: bool,
    pub left: bool,
    pub right: bool,
}

impl Blocked {
    pub fn none(&self) -> bool {
        !(self.down || self.up || self.left || self.right)
    }
}

//=== Body ================================================================

#[derive(Debug, Clone)]
pub struct Body {
    /// Center position.
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub kind: BodyKind,
    pub allow_gravity: bool,
    /// When false the body is frozen in place regardless of velocity.
    pub moves: bool,
    /// Fraction of impact speed kept on a vertical landing.
    pub bounce: f32,
    pub collide_world_bounds: bool,
    pub blocked: Blocked,
    /// Disabled bodies take no part in collisions or overlap queries.
    pub enabled: bool,
    /// Body this one landed on during the last step, if any.
    pub resting_on: Option<BodyId>,
}

impl Body {
    pub fn new(kind: BodyKind, position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            kind,
            allow_gravity: kind == BodyKind::Dynamic,
            moves: kind == BodyKind::Dynamic,
            bounce: 0.0,
            collide_world_bounds: false,
            blocked: Blocked::default(),
            enabled: true,
            resting_on: None,
        }
    }

    pub fn dynamic(position: Vec2, size: Vec2) -> Self {
        Self::new(BodyKind::Dynamic, position, size)
    }

    pub fn kinematic(position: Vec2, size: Vec2) -> Self {
        Self::new(BodyKind::Kinematic, position, size)
    }

    pub fn fixed(position: Vec2, size: Vec2) -> Self {
        Self::new(BodyKind::Static, position, size)
    }

    pub fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.size)
    }

    /// Grounded: standing on something as of the last step.
    pub fn on_ground(&self) -> bool {
        self.blocked.down
    }

    /// Zeroes velocity and stops integration.
    pub fn freeze(&mut self) {
        self.velocity = Vec2::ZERO;
        self.moves = false;
    }
}
