//=========================================================================
// Level Controls
//=========================================================================
//
// Level actions, their default bindings, and the per-frame input snapshot
// the level logic consumes.
//
//   InputSystem<LevelAction> + StateTracker → FrameInput → Session::update
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, InputContext, InputSystem, KeyCode, MouseButton, StateTracker};

//=== Contexts ============================================================

pub const GAMEPLAY: InputContext = InputContext::Primary;
pub const WIN_SCREEN: InputContext = InputContext::custom(1);

//=== LevelAction =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelAction {
    MoveLeft,
    MoveRight,
    Jump,
    Switch,
    Phase,
    Restart,
    Click,
}

impl Action for LevelAction {}

/// Installs the default keyboard and mouse layout.
pub fn bind_default_controls(input: &mut InputSystem<LevelAction>) {
    input.bind_key(KeyCode::ArrowLeft, LevelAction::MoveLeft, GAMEPLAY);
    input.bind_key(KeyCode::ArrowRight, LevelAction::MoveRight, GAMEPLAY);
    input.bind_key(KeyCode::ArrowUp, LevelAction::Jump, GAMEPLAY);
    input.bind_key(KeyCode::KeyA, LevelAction::MoveLeft, GAMEPLAY);
    input.bind_key(KeyCode::KeyD, LevelAction::MoveRight, GAMEPLAY);
    input.bind_key(KeyCode::KeyW, LevelAction::Jump, GAMEPLAY);
    input.bind_key(KeyCode::Space, LevelAction::Switch, GAMEPLAY);
    input.bind_key(KeyCode::ShiftLeft, LevelAction::Phase, GAMEPLAY);
    input.bind_key(KeyCode::ShiftRight, LevelAction::Phase, GAMEPLAY);

    input.bind_key(KeyCode::Enter, LevelAction::Restart, WIN_SCREEN);
    input.bind_key(KeyCode::KeyR, LevelAction::Restart, WIN_SCREEN);
    input.bind_mouse(MouseButton::Left, LevelAction::Click, WIN_SCREEN);
}

//=== FrameInput ==========================================================

/// Input state for one level update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_held: bool,
    pub jump_pressed: bool,
    pub switch_pressed: bool,
    pub phase_held: bool,
    pub restart_pressed: bool,
    pub click_pressed: bool,
    /// Pointer in world coordinates.
    pub pointer: Vec2,
}

impl FrameInput {
    pub fn from_input(input: &InputSystem<LevelAction>, state: &StateTracker) -> Self {
        let (x, y) = state.mouse_position();
        Self {
            move_left: input.is_action_down(LevelAction::MoveLeft),
            move_right: input.is_action_down(LevelAction::MoveRight),
            jump_held: input.is_action_down(LevelAction::Jump),
            jump_pressed: input.is_action_pressed(LevelAction::Jump),
            switch_pressed: input.is_action_pressed(LevelAction::Switch),
            phase_held: input.is_action_down(LevelAction::Phase),
            restart_pressed: input.is_action_pressed(LevelAction::Restart),
            click_pressed: input.is_action_pressed(LevelAction::Click),
            pointer: Vec2::new(x, y),
        }
    }

    /// -1 for left, 1 for right, 0 for neither. Left wins a tie.
    pub fn direction(&self) -> f32 {
        if self.move_left {
            -1.0
        } else if self.move_right {
            1.0
        } else {
            0.0
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent;

    fn frame(
        input: &mut InputSystem<LevelAction>,
        state: &mut StateTracker,
        events: Vec<InputEvent>,
    ) -> FrameInput {
        input.process_frame(state, &[events]);
        FrameInput::from_input(input, state)
    }

    #[test]
    fn gameplay_bindings_resolve_held_and_edge_state() {
        let mut input = InputSystem::new();
        let mut state = StateTracker::new();
        bind_default_controls(&mut input);

        let first = frame(
            &mut input,
            &mut state,
            vec![
                InputEvent::KeyDown { key: KeyCode::ArrowUp },
                InputEvent::KeyDown { key: KeyCode::Space },
                InputEvent::KeyDown { key: KeyCode::ShiftRight },
            ],
        );
        assert!(first.jump_held && first.jump_pressed);
        assert!(first.switch_pressed);
        assert!(first.phase_held);

        let second = frame(&mut input, &mut state, vec![]);
        assert!(second.jump_held && !second.jump_pressed);
        assert!(!second.switch_pressed);
        assert!(second.phase_held);
    }

    #[test]
    fn restart_only_resolves_on_win_screen() {
        let mut input = InputSystem::new();
        let mut state = StateTracker::new();
        bind_default_controls(&mut input);

        let gameplay = frame(
            &mut input,
            &mut state,
            vec![
                InputEvent::KeyDown { key: KeyCode::Enter },
                InputEvent::MouseButtonDown { button: MouseButton::Left },
            ],
        );
        assert!(!gameplay.restart_pressed);
        assert!(!gameplay.click_pressed);

        input.set_context(WIN_SCREEN);
        let win = frame(
            &mut input,
            &mut state,
            vec![
                InputEvent::MouseMoved { x: 400.0, y: 300.0 },
                InputEvent::KeyDown { key: KeyCode::KeyR },
                InputEvent::MouseButtonUp { button: MouseButton::Left },
                InputEvent::MouseButtonDown { button: MouseButton::Left },
            ],
        );
        assert!(win.restart_pressed);
        assert!(win.click_pressed);
        assert_eq!(win.pointer, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn left_wins_when_both_directions_held() {
        let input = FrameInput { move_left: true, move_right: true, ..Default::default() };
        assert_eq!(input.direction(), -1.0);
        assert_eq!(FrameInput::default().direction(), 0.0);
    }
}
