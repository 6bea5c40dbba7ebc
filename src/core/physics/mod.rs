//=========================================================================
// Physics
//=========================================================================
//
// Minimal arcade physics used by the level: bodies, overlap queries and
// toggleable collision relations.
//
// Architecture:
//   PhysicsWorld
//     ├─ bodies: Vec<Body>       (addressed by BodyId)
//     └─ colliders: Vec<Collider> (addressed by ColliderId)
//
//=========================================================================

//=== Module Declarations =================================================

mod aabb;
mod body;
mod world;

//=== Public API ==========================================================

pub use aabb::Aabb;
pub use body::{Blocked, Body, BodyKind};
pub use world::{BodyId, ColliderId, PhysicsWorld};
