//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use sam_and_sadie::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::PlatformError;

// Configuration
pub use crate::config::{ConfigError, LevelConfig};

// Input system
pub use crate::core::input::{Action, InputContext, InputSystem, KeyCode, MouseButton};

// Level
pub use crate::level::{
    Ability, CharacterId, FrameInput, LayoutRevision, LevelAction, LevelError, LevelEvent, Session,
    WinRule,
};
