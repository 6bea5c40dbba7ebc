//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking with per-frame delta tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: clear() → process_events() → query
//
// Edge iterators (`keys_pressed`) yield a key for exactly one frame per
// physical press, which is what makes character switching toggle at most
// once per press no matter how long the key is held.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-frame press edges.
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            keys_pressed_this_frame: HashSet::new(),
            mouse_buttons_pressed_this_frame: HashSet::new(),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears this frame's press edges.
    pub(crate) fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
    }

    /// Processes input events, updating internal state.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                // Only mark as pressed if it wasn't already down
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.insert(key);
                }
            }

            InputEvent::KeyUp { key } => {
                self.keys_down.remove(&key);
            }

            InputEvent::MouseButtonDown { button } => {
                if self.mouse_buttons_down.insert(button) {
                    self.mouse_buttons_pressed_this_frame.insert(button);
                }
            }

            InputEvent::MouseButtonUp { button } => {
                self.mouse_buttons_down.remove(&button);
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns the last known cursor position in world coordinates.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    pub fn keys_pressed(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_pressed_this_frame.iter()
    }

    pub fn buttons_down(&self) -> impl Iterator<Item = &MouseButton> {
        self.mouse_buttons_down.iter()
    }

    pub fn buttons_pressed(&self) -> impl Iterator<Item = &MouseButton> {
        self.mouse_buttons_pressed_this_frame.iter()
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    fn frame(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
    }

    fn pressed(tracker: &StateTracker, key: KeyCode) -> bool {
        tracker.keys_pressed().any(|k| *k == key)
    }

    fn held(tracker: &StateTracker, key: KeyCode) -> bool {
        tracker.keys_down().any(|k| *k == key)
    }

    fn has_left<'a>(mut buttons: impl Iterator<Item = &'a MouseButton>) -> bool {
        buttons.any(|b| *b == MouseButton::Left)
    }

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    #[test]
    fn key_pressed_only_on_transition_frame() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[key_down(KeyCode::Space)]);
        assert!(pressed(&tracker, KeyCode::Space));
        assert!(held(&tracker, KeyCode::Space));

        frame(&mut tracker, &[]);
        assert!(!pressed(&tracker, KeyCode::Space));
        assert!(held(&tracker, KeyCode::Space));

        frame(&mut tracker, &[key_up(KeyCode::Space)]);
        assert!(!pressed(&tracker, KeyCode::Space));
        assert!(!held(&tracker, KeyCode::Space));
    }

    /// Holding a key across many frames yields a single press edge.
    #[test]
    fn held_key_yields_single_edge() {
        let mut tracker = StateTracker::new();
        let mut edges = 0;

        frame(&mut tracker, &[key_down(KeyCode::Space)]);
        edges += pressed(&tracker, KeyCode::Space) as u32;

        for _ in 0..30 {
            // OS key repeat re-sends KeyDown while held
            frame(&mut tracker, &[key_down(KeyCode::Space)]);
            edges += pressed(&tracker, KeyCode::Space) as u32;
            assert!(held(&tracker, KeyCode::Space), "Key should remain down");
        }

        assert_eq!(edges, 1);
    }

    /// Press + release inside one frame still leaves the press edge.
    #[test]
    fn fast_tap_keeps_press_edge() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[key_down(KeyCode::Space), key_up(KeyCode::Space)]);

        assert!(pressed(&tracker, KeyCode::Space), "Should register press");
        assert!(!held(&tracker, KeyCode::Space), "Should end up not down");
    }

    #[test]
    fn key_up_without_down_ignored() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[key_up(KeyCode::KeyR)]);

        assert_eq!(tracker.keys_down().count(), 0);
        assert_eq!(tracker.keys_pressed().count(), 0);
    }

    #[test]
    fn multiple_keys_tracked_independently() {
        let mut tracker = StateTracker::new();

        frame(
            &mut tracker,
            &[key_down(KeyCode::ArrowLeft), key_down(KeyCode::ShiftLeft)],
        );
        frame(&mut tracker, &[key_up(KeyCode::ArrowLeft)]);

        assert!(!held(&tracker, KeyCode::ArrowLeft));
        assert!(held(&tracker, KeyCode::ShiftLeft));
        assert_eq!(tracker.keys_down().count(), 1);
    }

    //=====================================================================
    // Mouse Tests
    //=====================================================================

    #[test]
    fn mouse_button_pressed_then_held() {
        let mut tracker = StateTracker::new();

        frame(
            &mut tracker,
            &[InputEvent::MouseButtonDown { button: MouseButton::Left }],
        );
        assert!(has_left(tracker.buttons_pressed()));
        assert!(has_left(tracker.buttons_down()));

        frame(&mut tracker, &[]);
        assert!(!has_left(tracker.buttons_pressed()));
        assert!(has_left(tracker.buttons_down()));

        frame(
            &mut tracker,
            &[InputEvent::MouseButtonUp { button: MouseButton::Left }],
        );
        assert_eq!(tracker.buttons_down().count(), 0);
    }

    #[test]
    fn mouse_position_updated() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::MouseMoved { x: 100.0, y: 200.0 }]);

        assert_eq!(tracker.mouse_position(), (100.0, 200.0));
    }

    #[test]
    fn unidentified_events_ignored() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::Unidentified]);

        assert_eq!(tracker.keys_down().count(), 0);
        assert_eq!(tracker.mouse_position(), (0.0, 0.0));
    }
}
