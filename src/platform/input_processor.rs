//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Keys outside the engine's KeyCode set are filtered (returns None).
// Cursor positions arrive already mapped to world coordinates.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor;

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent (filters unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = key_event.physical_key else {
            return None;
        };
        self.process_key(code, key_event.state)
    }

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);
        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button },
            ElementState::Released => InputEvent::MouseButtonUp { button },
        }
    }

    /// Cursor motion in world coordinates.
    pub(crate) fn process_mouse_move(&self, x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_key(&self, code: WinitKeyCode, state: ElementState) -> Option<InputEvent> {
        let key = KeyCode::from(code);
        if key == KeyCode::Unidentified {
            return None;
        }

        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key },
            ElementState::Released => InputEvent::KeyUp { key },
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Unmapped keys become `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Arrows -------------------------------------------------------
            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Letters ------------------------------------------------------
            KeyA => KeyCode::KeyA,
            KeyD => KeyCode::KeyD,
            KeyR => KeyCode::KeyR,
            KeyW => KeyCode::KeyW,

            //--- Special ------------------------------------------------------
            Space => KeyCode::Space,
            Enter | NumpadEnter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            ShiftLeft => KeyCode::ShiftLeft,
            ShiftRight => KeyCode::ShiftRight,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_keys_are_reported_as_keys() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.process_key(WinitKeyCode::ShiftLeft, ElementState::Pressed),
            Some(InputEvent::KeyDown { key: KeyCode::ShiftLeft })
        );
        assert_eq!(
            processor.process_key(WinitKeyCode::ShiftRight, ElementState::Released),
            Some(InputEvent::KeyUp { key: KeyCode::ShiftRight })
        );
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        let processor = InputProcessor::new();
        assert_eq!(processor.process_key(WinitKeyCode::F13, ElementState::Pressed), None);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::Unidentified);
    }

    #[test]
    fn keycode_conversion_covers_level_keys() {
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyR), KeyCode::KeyR);
    }

    #[test]
    fn mouse_button_state_maps_to_down_and_up() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed),
            InputEvent::MouseButtonDown { button: MouseButton::Left }
        );
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Back, ElementState::Released),
            InputEvent::MouseButtonUp { button: MouseButton::Other }
        );
    }

    #[test]
    fn mouse_move_keeps_coordinates() {
        let processor = InputProcessor::new();
        match processor.process_mouse_move(123.5, 456.5) {
            InputEvent::MouseMoved { x, y } => assert_eq!((x, y), (123.5, 456.5)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }
}
