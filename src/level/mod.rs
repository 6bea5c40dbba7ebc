//=========================================================================
// Level
//=========================================================================
//
// The Sam and Sadie co-op level: two characters, one active at a time,
// a button that raises a platform, and a goal both must reach.
//
// Architecture:
//   FrameInput ──► Session::update()
//                    ├─ CharacterController  (switch, move, jump, abilities)
//                    ├─ PhysicsWorld::step
//                    ├─ ButtonTrigger        (one-shot platform tween)
//                    └─ WinTracker           (sticky | simultaneous)
//                  ──► Vec<LevelEvent> ──► Hud
//
//=========================================================================

//=== Module Declarations =================================================

mod character;
mod controller;
mod controls;
mod event;
mod hud;
mod interaction;
mod layout;
mod session;

//=== Public API ==========================================================

pub use character::{Ability, Character, CharacterId};
pub use controller::{CharacterController, AIR_CONTROL_STEP, MOVE_SPEED};
pub use controls::{bind_default_controls, FrameInput, LevelAction, GAMEPLAY, WIN_SCREEN};
pub use event::LevelEvent;
pub use hud::Hud;
pub use interaction::{ButtonTrigger, WinRule, WinTracker};
pub use layout::{AssetRegistry, LayoutRevision, LevelLayout, MovingPlatform, OwnedPlatform, Placement, Texture};
pub use session::Session;

//=== External Dependencies ===============================================

use thiserror::Error;

//=== LevelError ==========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("Asset '{0}' was not registered")]
    MissingAsset(String),
}
