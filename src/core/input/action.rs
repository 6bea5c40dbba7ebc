//=========================================================================
// Action Trait & Input Context
//=========================================================================
//
// Game-defined action trait and input context system.
//
// Actions: Opaque identifiers routed by the input system, interpreted by
//          the level.
// Contexts: Different bindings for different states (gameplay vs the
//           win screen).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Efficient passing and deduplication
/// - `Debug`: Logging support
/// - `Send + 'static`: Owned by the logic thread
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== InputContext ========================================================

/// Identifies which set of input bindings are currently active.
///
/// ```
/// # use sam_and_sadie::prelude::*;
/// const GAMEPLAY: InputContext = InputContext::Primary;
/// const WIN_SCREEN: InputContext = InputContext::custom(1);
/// assert_ne!(GAMEPLAY, WIN_SCREEN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputContext {
    /// Default context for primary gameplay.
    #[default]
    Primary,

    /// User-defined context.
    Custom(u32),
}

impl InputContext {
    /// Creates a custom context.
    #[inline]
    pub const fn custom(id: u32) -> Self {
        Self::Custom(id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
