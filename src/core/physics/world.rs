//=========================================================================
// Physics World
//=========================================================================
//
// Arcade-style rigid body world: gravity, explicit Euler integration and
// axis-separated AABB resolution against toggleable collider groups.
//
// Step order per dynamic body:
//   gravity → move X → resolve X → move Y → resolve Y → world bounds
//
// Kinematic bodies are never integrated. They are moved explicitly with
// `move_kinematic()`, which carries any body that landed on them during
// the previous step.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::trace;

//=== Internal Dependencies ===============================================

use super::{Aabb, Blocked, Body, BodyKind};

//=== Constants ===========================================================

/// Penetration tolerated when deciding which side a contact came from.
const OVERLAP_BIAS: f32 = 4.0;

/// Rebound speeds below this settle to zero instead of bouncing.
const SETTLE_SPEED: f32 = 20.0;

//=== Handles =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderId(usize);

//=== Collider ============================================================

/// Collision relation between one body and a group of target bodies.
///
/// Deactivating a collider suspends the relation without removing it.
#[derive(Debug, Clone)]
struct Collider {
    body: BodyId,
    targets: Vec<BodyId>,
    active: bool,
}

//=== PhysicsWorld ========================================================

pub struct PhysicsWorld {
    bodies: Vec<Body>,
    colliders: Vec<Collider>,
    gravity: Vec2,
    bounds: Aabb,
}

impl PhysicsWorld {
    //--- Construction -----------------------------------------------------

    /// Creates a world with downward gravity and bounds `[0, size]`.
    pub fn new(gravity: f32, size: Vec2) -> Self {
        Self {
            bodies: Vec::new(),
            colliders: Vec::new(),
            gravity: Vec2::new(0.0, gravity),
            bounds: Aabb::new(Vec2::ZERO, size),
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    //--- Bodies -----------------------------------------------------------

    pub fn add_body(&mut self, body: Body) -> BodyId {
        self.bodies.push(body);
        BodyId(self.bodies.len() - 1)
    }

    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.0]
    }

    /// Takes a body out of the simulation. Its id stays valid.
    pub fn remove_body(&mut self, id: BodyId) {
        let body = &mut self.bodies[id.0];
        body.enabled = false;
        body.freeze();
    }

    /// Moves a kinematic body and carries bodies resting on it.
    pub fn move_kinematic(&mut self, id: BodyId, position: Vec2) {
        let delta = position - self.bodies[id.0].position;
        self.bodies[id.0].position = position;

        if delta == Vec2::ZERO {
            return;
        }

        for rider in self
            .bodies
            .iter_mut()
            .filter(|b| b.enabled && b.moves && b.resting_on == Some(id))
        {
            rider.position += delta;
        }
    }

    //--- Colliders --------------------------------------------------------

    pub fn add_collider<I>(&mut self, body: BodyId, targets: I) -> ColliderId
    where
        I: IntoIterator<Item = BodyId>,
    {
        self.colliders.push(Collider {
            body,
            targets: targets.into_iter().collect(),
            active: true,
        });
        ColliderId(self.colliders.len() - 1)
    }

    pub fn set_collider_active(&mut self, id: ColliderId, active: bool) {
        self.colliders[id.0].active = active;
    }

    pub fn is_collider_active(&self, id: ColliderId) -> bool {
        self.colliders[id.0].active
    }

    //--- Queries ----------------------------------------------------------

    /// Bounding-box intersection between two enabled bodies.
    pub fn overlaps(&self, a: BodyId, b: BodyId) -> bool {
        let (a, b) = (&self.bodies[a.0], &self.bodies[b.0]);
        a.enabled && b.enabled && a.aabb().intersects(&b.aabb())
    }

    //--- Simulation -------------------------------------------------------

    /// Advances every moving dynamic body by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        for index in 0..self.bodies.len() {
            let body = &self.bodies[index];
            if !body.enabled || !body.moves || body.kind != BodyKind::Dynamic {
                continue;
            }

            let targets = self.active_targets(BodyId(index));
            let gravity = self.gravity;
            let bounds = self.bounds;
            let body = &mut self.bodies[index];

            integrate(body, &targets, gravity, bounds, dt);
        }
    }

    fn active_targets(&self, id: BodyId) -> Vec<(BodyId, Aabb)> {
        self.colliders
            .iter()
            .filter(|c| c.active && c.body == id)
            .flat_map(|c| c.targets.iter().copied())
            .filter(|t| *t != id && self.bodies[t.0].enabled)
            .map(|t| (t, self.bodies[t.0].aabb()))
            .collect()
    }
}

//=== Integration =========================================================

fn integrate(body: &mut Body, targets: &[(BodyId, Aabb)], gravity: Vec2, bounds: Aabb, dt: f32) {
    let prev = body.aabb();
    let half = body.size * 0.5;

    if body.allow_gravity {
        body.velocity += gravity * dt;
    }
    body.blocked = Blocked::default();
    body.resting_on = None;

    //--- X axis -----------------------------------------------------------
    body.position.x += body.velocity.x * dt;
    for (_, target) in targets {
        if !body.aabb().intersects(target) {
            continue;
        }
        if prev.max.x <= target.min.x + OVERLAP_BIAS {
            body.position.x = target.min.x - half.x;
            body.velocity.x = 0.0;
            body.blocked.right = true;
        } else if prev.min.x >= target.max.x - OVERLAP_BIAS {
            body.position.x = target.max.x + half.x;
            body.velocity.x = 0.0;
            body.blocked.left = true;
        }
    }

    //--- Y axis -----------------------------------------------------------
    body.position.y += body.velocity.y * dt;
    for (id, target) in targets {
        if !body.aabb().intersects(target) {
            continue;
        }
        if body.velocity.y >= 0.0 && prev.max.y <= target.min.y + OVERLAP_BIAS {
            body.position.y = target.min.y - half.y;
            body.velocity.y = rebound(body.velocity.y, body.bounce);
            body.blocked.down = true;
            body.resting_on = Some(*id);
        } else if body.velocity.y < 0.0 && prev.min.y >= target.max.y - OVERLAP_BIAS {
            body.position.y = target.max.y + half.y;
            body.velocity.y = 0.0;
            body.blocked.up = true;
        }
    }

    //--- World bounds -----------------------------------------------------
    if body.collide_world_bounds {
        if body.position.x - half.x < bounds.min.x {
            body.position.x = bounds.min.x + half.x;
            body.velocity.x = 0.0;
            body.blocked.left = true;
        } else if body.position.x + half.x > bounds.max.x {
            body.position.x = bounds.max.x - half.x;
            body.velocity.x = 0.0;
            body.blocked.right = true;
        }

        if body.position.y - half.y < bounds.min.y {
            body.position.y = bounds.min.y + half.y;
            body.velocity.y = 0.0;
            body.blocked.up = true;
        } else if body.position.y + half.y > bounds.max.y {
            body.position.y = bounds.max.y - half.y;
            body.velocity.y = rebound(body.velocity.y, body.bounce);
            body.blocked.down = true;
        }
    }

    if !body.blocked.none() {
        trace!(target: "core::physics", "Contact {:?} at {:?}", body.blocked, body.position);
    }
}

fn rebound(speed: f32, bounce: f32) -> f32 {
    let rebound = -speed * bounce;
    if rebound.abs() < SETTLE_SPEED {
        0.0
    } else {
        rebound
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
