//=========================================================================
// Input System
//
// High-level interface for input handling on the logic thread.
// Wraps the `ActionMapper` and turns the low-level `StateTracker` into
// per-frame action state.
//
// Responsibilities:
// - Feed each frame's raw input batches through the `StateTracker`
// - Resolve held keys/buttons into held actions (`is_action_down`)
// - Resolve newly pressed keys/buttons into edge actions (`is_action_pressed`)
// - Switch binding contexts (gameplay vs win screen)
//
// Notes:
// This system is owned and updated by the CoreSystemsOrchestrator.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
mod action_mapper;
pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, InputContext};
pub use event::{InputEvent, KeyCode, MouseButton};
pub use state_tracker::StateTracker;

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== External Crates =====================================================

use log::trace;

//=== Internal Imports ====================================================

use action_mapper::ActionMapper;

//=== InputSystem =========================================================

/// Action-level input for one frame.
///
/// Bind keys with [`bind_key`](Self::bind_key), feed batches with
/// [`process_frame`](Self::process_frame), then query actions.
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
    actions_down: HashSet<A>,
    actions_pressed: HashSet<A>,
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
            actions_down: HashSet::new(),
            actions_pressed: HashSet::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    pub fn bind_key(&mut self, key: KeyCode, action: A, context: InputContext) {
        self.mapper.bind_key(key, action, context);
    }

    pub fn bind_mouse(&mut self, button: MouseButton, action: A, context: InputContext) {
        self.mapper.bind_mouse(button, action, context);
    }

    /// Switches the active binding context.
    ///
    /// Takes effect on the next `process_frame`; keys already held resolve
    /// under the new context from then on.
    pub fn set_context(&mut self, context: InputContext) {
        if self.mapper.current_context() != context {
            trace!(target: "core::input", "Input context -> {:?}", context);
            self.mapper.set_context(context);
        }
    }

    pub fn context(&self) -> InputContext {
        self.mapper.current_context()
    }

    //--- update -----------------------------------------------------------

    /// Consumes all input batches received during the current frame and
    /// recomputes action state.
    pub fn process_frame(&mut self, state: &mut StateTracker, batches: &[Vec<InputEvent>]) {
        state.clear();
        for batch in batches {
            state.process_events(batch);
        }

        self.actions_down.clear();
        self.actions_pressed.clear();

        for key in state.keys_down() {
            if let Some(action) = self.mapper.map_key(*key) {
                self.actions_down.insert(action);
            }
        }
        for button in state.buttons_down() {
            if let Some(action) = self.mapper.map_button(*button) {
                self.actions_down.insert(action);
            }
        }
        for key in state.keys_pressed() {
            if let Some(action) = self.mapper.map_key(*key) {
                self.actions_pressed.insert(action);
            }
        }
        for button in state.buttons_pressed() {
            if let Some(action) = self.mapper.map_button(*button) {
                self.actions_pressed.insert(action);
            }
        }
    }

    //--- Query Methods ----------------------------------------------------

    /// Returns `true` while any key bound to `action` is held.
    pub fn is_action_down(&self, action: A) -> bool {
        self.actions_down.contains(&action)
    }

    /// Returns `true` on the frame a key bound to `action` went down.
    pub fn is_action_pressed(&self, action: A) -> bool {
        self.actions_pressed.contains(&action)
    }

    /// Returns an iterator over actions pressed this frame.
    pub fn actions_pressed(&self) -> impl Iterator<Item = &A> {
        self.actions_pressed.iter()
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
