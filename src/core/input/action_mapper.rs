//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps physical keys and mouse buttons to game actions based on the
// configured bindings and the active context.
//
// Architecture:
//   (key/button, context) → HashMap → Action
//
// Only bindings in the active context resolve to actions. Several keys
// may resolve to the same action.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, InputContext},
    event::{KeyCode, MouseButton},
};

//=== ActionMapper ========================================================

pub(crate) struct ActionMapper<A: Action> {
    /// Key bindings: (key, context) → action
    key_bindings: HashMap<(KeyCode, InputContext), A>,

    /// Mouse button bindings: (button, context) → action
    mouse_bindings: HashMap<(MouseButton, InputContext), A>,

    /// Currently active input context
    current_context: InputContext,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a new mapper with Primary context active and no bindings.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            mouse_bindings: HashMap::new(),
            current_context: InputContext::Primary,
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action. Rebinding the same key replaces the action.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A, context: InputContext) {
        self.key_bindings.insert((key, context), action);
    }

    /// Binds a mouse button to an action.
    pub(crate) fn bind_mouse(&mut self, button: MouseButton, action: A, context: InputContext) {
        self.mouse_bindings.insert((button, context), action);
    }

    //--- Mapping ----------------------------------------------------------

    /// Maps a key to an action in the active context.
    pub(crate) fn map_key(&self, key: KeyCode) -> Option<A> {
        self.key_bindings.get(&(key, self.current_context)).copied()
    }

    /// Maps a mouse button to an action in the active context.
    pub(crate) fn map_button(&self, button: MouseButton) -> Option<A> {
        self.mouse_bindings
            .get(&(button, self.current_context))
            .copied()
    }

    /// Sets the active input context.
    pub(crate) fn set_context(&mut self, context: InputContext) {
        self.current_context = context;
    }

    /// Returns the current active context.
    pub(crate) fn current_context(&self) -> InputContext {
        self.current_context
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
        Switch,
        Restart,
    }

    impl Action for TestAction {}

    const WIN: InputContext = InputContext::custom(1);

    #[test]
    fn bind_and_map_simple_key() {
        let mut mapper = ActionMapper::<TestAction>::new();
        mapper.bind_key(KeyCode::ArrowUp, TestAction::Jump, InputContext::Primary);

        assert_eq!(mapper.map_key(KeyCode::ArrowUp), Some(TestAction::Jump));
        assert_eq!(mapper.map_key(KeyCode::Space), None);
    }

    #[test]
    fn several_keys_can_share_an_action() {
        let mut mapper = ActionMapper::<TestAction>::new();
        mapper.bind_key(KeyCode::ArrowUp, TestAction::Jump, InputContext::Primary);
        mapper.bind_key(KeyCode::KeyW, TestAction::Jump, InputContext::Primary);

        assert_eq!(mapper.map_key(KeyCode::ArrowUp), Some(TestAction::Jump));
        assert_eq!(mapper.map_key(KeyCode::KeyW), Some(TestAction::Jump));
    }

    #[test]
    fn rebinding_replaces_action() {
        let mut mapper = ActionMapper::<TestAction>::new();
        mapper.bind_key(KeyCode::Space, TestAction::Jump, InputContext::Primary);
        mapper.bind_key(KeyCode::Space, TestAction::Switch, InputContext::Primary);

        assert_eq!(mapper.map_key(KeyCode::Space), Some(TestAction::Switch));
    }

    #[test]
    fn only_active_context_resolves() {
        let mut mapper = ActionMapper::<TestAction>::new();
        mapper.bind_key(KeyCode::Space, TestAction::Switch, InputContext::Primary);
        mapper.bind_key(KeyCode::Enter, TestAction::Restart, WIN);

        assert_eq!(mapper.map_key(KeyCode::Enter), None);

        mapper.set_context(WIN);
        assert_eq!(mapper.current_context(), WIN);
        assert_eq!(mapper.map_key(KeyCode::Enter), Some(TestAction::Restart));
        assert_eq!(mapper.map_key(KeyCode::Space), None);
    }

    #[test]
    fn mouse_bindings_are_context_scoped() {
        let mut mapper = ActionMapper::<TestAction>::new();
        mapper.bind_mouse(MouseButton::Left, TestAction::Restart, WIN);

        assert_eq!(mapper.map_button(MouseButton::Left), None);
        mapper.set_context(WIN);
        assert_eq!(mapper.map_button(MouseButton::Left), Some(TestAction::Restart));
    }
}
