//=========================================================================
// Interaction State
//=========================================================================
//
// One-way latches that drive the level's progression:
//
//   ButtonTrigger  false → true on Sadie's first overlap, never resets
//   WinTracker     per-character goal flags → Won, never resets
//
// Both are pure state machines fed with overlap results, so they carry
// no physics or rendering dependencies.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::{CharacterId, LevelEvent};

//=== ButtonTrigger =======================================================

#[derive(Debug, Clone, Default)]
pub struct ButtonTrigger {
    pressed: bool,
}

impl ButtonTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only on the update that latches the button.
    pub fn check(&mut self, overlapping: bool) -> bool {
        if overlapping && !self.pressed {
            self.pressed = true;
            return true;
        }
        false
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

//=== WinRule =============================================================

/// How goal arrivals combine into a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinRule {
    /// A character that touched the goal stays counted.
    StickyArrival,
    /// Both characters must overlap the goal in the same update.
    #[default]
    Simultaneous,
}

//=== WinTracker ==========================================================

#[derive(Debug, Clone)]
pub struct WinTracker {
    rule: WinRule,
    at_goal: [bool; 2],
    hinted: bool,
    won: bool,
}

impl WinTracker {
    pub fn new(rule: WinRule) -> Self {
        Self {
            rule,
            at_goal: [false; 2],
            hinted: false,
            won: false,
        }
    }

    pub fn rule(&self) -> WinRule {
        self.rule
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn at_goal(&self, id: CharacterId) -> bool {
        self.at_goal[id.index()]
    }

    /// Feeds this update's goal overlaps, indexed by `CharacterId::index()`.
    pub fn evaluate(&mut self, overlapping: [bool; 2], events: &mut Vec<LevelEvent>) {
        if self.won {
            return;
        }

        let previous = self.at_goal;
        self.at_goal = match self.rule {
            WinRule::StickyArrival => [previous[0] || overlapping[0], previous[1] || overlapping[1]],
            WinRule::Simultaneous => overlapping,
        };

        if self.at_goal != previous {
            events.push(LevelEvent::GoalStatusChanged {
                sam: self.at_goal[0],
                sadie: self.at_goal[1],
            });
        }

        if self.at_goal == [true, true] {
            self.won = true;
            events.push(LevelEvent::Won);
            return;
        }

        let Some(missing) = CharacterId::ALL.into_iter().find(|id| !self.at_goal[id.index()]) else {
            return;
        };
        if !self.at_goal[missing.other().index()] {
            return;
        }

        let hint = match self.rule {
            // every new arrival re-issues the hint
            WinRule::StickyArrival => self.at_goal != previous,
            WinRule::Simultaneous => !self.hinted,
        };
        if hint {
            self.hinted = true;
            events.push(LevelEvent::PartnerNeeded { missing });
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [bool; 2] = [false, false];
    const SAM: [bool; 2] = [true, false];
    const SADIE: [bool; 2] = [false, true];
    const BOTH: [bool; 2] = [true, true];

    fn run(tracker: &mut WinTracker, frames: &[[bool; 2]]) -> Vec<LevelEvent> {
        let mut events = Vec::new();
        for frame in frames {
            tracker.evaluate(*frame, &mut events);
        }
        events
    }

    //--- ButtonTrigger ----------------------------------------------------

    #[test]
    fn button_latches_once() {
        let mut button = ButtonTrigger::new();
        assert!(!button.check(false));
        assert!(button.check(true));
        assert!(!button.check(true));
        assert!(!button.check(false));
        assert!(!button.check(true));
        assert!(button.is_pressed());
    }

    //--- Both rules -------------------------------------------------------

    #[test]
    fn lone_arrival_never_wins() {
        for rule in [WinRule::StickyArrival, WinRule::Simultaneous] {
            let mut tracker = WinTracker::new(rule);
            let events = run(&mut tracker, &[SAM; 5]);
            assert!(!tracker.is_won(), "{:?}", rule);
            assert!(!events.contains(&LevelEvent::Won));
        }
    }

    #[test]
    fn simultaneous_arrival_wins_under_both_rules() {
        for rule in [WinRule::StickyArrival, WinRule::Simultaneous] {
            let mut tracker = WinTracker::new(rule);
            let events = run(&mut tracker, &[NONE, BOTH]);
            assert!(tracker.is_won());
            assert_eq!(events.last(), Some(&LevelEvent::Won));
        }
    }

    #[test]
    fn won_tracker_ignores_further_input() {
        let mut tracker = WinTracker::new(WinRule::Simultaneous);
        run(&mut tracker, &[BOTH]);
        assert!(run(&mut tracker, &[NONE, BOTH]).is_empty());
        assert!(tracker.is_won());
    }

    //--- StickyArrival ----------------------------------------------------

    #[test]
    fn sticky_rule_counts_staggered_arrivals() {
        let mut tracker = WinTracker::new(WinRule::StickyArrival);
        let events = run(&mut tracker, &[SAM, NONE, NONE, SADIE]);

        assert!(tracker.is_won());
        assert_eq!(
            events,
            vec![
                LevelEvent::GoalStatusChanged { sam: true, sadie: false },
                LevelEvent::PartnerNeeded { missing: CharacterId::Sadie },
                LevelEvent::GoalStatusChanged { sam: true, sadie: true },
                LevelEvent::Won,
            ]
        );
    }

    #[test]
    fn sticky_flags_never_clear() {
        let mut tracker = WinTracker::new(WinRule::StickyArrival);
        run(&mut tracker, &[SADIE, NONE]);
        assert!(tracker.at_goal(CharacterId::Sadie));
        assert!(!tracker.at_goal(CharacterId::Sam));
    }

    //--- Simultaneous -----------------------------------------------------

    #[test]
    fn simultaneous_rule_rejects_staggered_arrivals() {
        let mut tracker = WinTracker::new(WinRule::Simultaneous);
        run(&mut tracker, &[SAM, NONE, SADIE, NONE]);

        assert!(!tracker.is_won());
        assert!(!tracker.at_goal(CharacterId::Sam));
        assert!(!tracker.at_goal(CharacterId::Sadie));
    }

    #[test]
    fn simultaneous_hint_is_shown_once() {
        let mut tracker = WinTracker::new(WinRule::Simultaneous);
        let events = run(&mut tracker, &[SAM, NONE, SADIE, SAM]);

        let hints: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, LevelEvent::PartnerNeeded { .. }))
            .collect();
        assert_eq!(hints, vec![&LevelEvent::PartnerNeeded { missing: CharacterId::Sadie }]);
    }

    #[test]
    fn status_change_reported_when_flag_clears() {
        let mut tracker = WinTracker::new(WinRule::Simultaneous);
        let events = run(&mut tracker, &[SAM, SAM, NONE]);

        assert_eq!(
            events,
            vec![
                LevelEvent::GoalStatusChanged { sam: true, sadie: false },
                LevelEvent::PartnerNeeded { missing: CharacterId::Sadie },
                LevelEvent::GoalStatusChanged { sam: false, sadie: false },
            ]
        );
    }
}
