//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (Winit) into a
// unified, engine-friendly format used by the input subsystem.
//
// Responsibilities:
// - Represent keyboard and mouse inputs in a stable, portable way
// - Provide equality and hashing semantics for deduplication
// - Enable event coalescing (multiple MouseMoved → last position)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held state + per-frame edges)
//         ↓
//    LevelAction (gameplay input)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Only the keys the level can bind are represented. Shift keys are
/// reported as regular keys so they can be bound to actions (the phase
/// ability is held on Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    //--- Letter Keys ------------------------------------------------------
    KeyA,
    KeyD,
    KeyR,
    KeyW,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    ShiftLeft,
    ShiftRight,

    /// Fallback for keys not mapped by the platform layer.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// `MouseMoved` events are equal regardless of coordinates, so the
/// platform buffer can coalesce them (last position wins).
///
/// ```text
/// KeyDown{Space}   == KeyDown{Space}    ✓
/// KeyDown{Space}   == KeyUp{Space}      ✗
/// MouseMoved{...}  == MouseMoved{...}   ✓ (always equal)
/// ```
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton },

    /// Cursor moved, in world coordinates (top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized or unsupported event, ignored by the input system.
    Unidentified,
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a }, KeyDown { key: b }) => a == b,
            (KeyUp { key: a }, KeyUp { key: b }) => a == b,
            (MouseButtonDown { button: a }, MouseButtonDown { button: b }) => a == b,
            (MouseButtonUp { button: a }, MouseButtonUp { button: b }) => a == b,
            // MouseMoved: coordinates ignored, always equal
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + key/button. Coordinates are NOT hashed for
/// MouseMoved (consistent with equality).
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key } | Self::KeyUp { key } => key.hash(state),
            Self::MouseButtonDown { button } | Self::MouseButtonUp { button } => {
                button.hash(state)
            }
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_same_type_same_key() {
        let a = InputEvent::KeyDown { key: KeyCode::Space };
        let b = InputEvent::KeyDown { key: KeyCode::Space };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn equality_down_and_up_differ() {
        let a = InputEvent::KeyDown { key: KeyCode::ArrowUp };
        let b = InputEvent::KeyUp { key: KeyCode::ArrowUp };
        assert_ne!(a, b);
    }

    #[test]
    fn equality_different_buttons_differ() {
        let a = InputEvent::MouseButtonDown { button: MouseButton::Left };
        let b = InputEvent::MouseButtonDown { button: MouseButton::Right };
        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn mouse_moved_ignores_coordinates() {
        let a = InputEvent::MouseMoved { x: 10.0, y: 10.0 };
        let b = InputEvent::MouseMoved { x: 200.0, y: 300.0 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn mouse_moved_coalesces_in_set() {
        let mut set = HashSet::new();
        set.replace(InputEvent::MouseMoved { x: 1.0, y: 1.0 });
        set.replace(InputEvent::MouseMoved { x: 5.0, y: 7.0 });

        assert_eq!(set.len(), 1);
        match set.iter().next() {
            Some(InputEvent::MouseMoved { x, y }) => assert_eq!((*x, *y), (5.0, 7.0)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }

    #[test]
    fn key_and_mouse_families_differ() {
        let key = InputEvent::KeyDown { key: KeyCode::Enter };
        let mouse = InputEvent::MouseButtonDown { button: MouseButton::Left };
        assert_ne!(key, mouse);
    }
}
