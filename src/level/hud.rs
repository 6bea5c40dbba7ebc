//=========================================================================
// HUD
//=========================================================================
//
// On-screen text for the level, rebuilt from `LevelEvent`s.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Ability, CharacterId, LevelEvent};

//=== Hud =================================================================

#[derive(Debug, Clone)]
pub struct Hud {
    instructions: Vec<String>,
    active: String,
    tip: Option<String>,
    platform_hint: Option<String>,
    goal_status: Option<String>,
    partner_hint: Option<String>,
    banner: Option<String>,
}

impl Hud {
    pub fn new(abilities: [Ability; 2], active: CharacterId) -> Self {
        let mut instructions = vec!["Press SPACE to switch characters".to_string()];
        for id in CharacterId::ALL {
            match abilities[id.index()] {
                Ability::PhaseThrough => instructions.push(format!(
                    "Press SHIFT for {} to phase through obstacles",
                    id.name()
                )),
                Ability::DoubleJump => {
                    instructions.push(format!("Press UP again in mid-air for {} to double jump", id.name()))
                }
                Ability::None => {}
            }
        }

        Self {
            instructions,
            active: active_line(active),
            tip: Some("Tip: Get Sadie to the red button on the left!".to_string()),
            platform_hint: None,
            goal_status: None,
            partner_hint: None,
            banner: None,
        }
    }

    /// Applies one event. Returns `true` if any line changed.
    pub fn apply(&mut self, event: &LevelEvent) -> bool {
        match *event {
            LevelEvent::Switched { active } => self.active = active_line(active),
            LevelEvent::ButtonPressed => {
                self.tip = None;
                self.platform_hint = Some("↑ Platform moving! ↑".to_string());
            }
            LevelEvent::PlatformArrived => self.platform_hint = None,
            LevelEvent::GoalStatusChanged { sam, sadie } => {
                self.goal_status = goal_line(sam, sadie);
            }
            LevelEvent::PartnerNeeded { missing } => {
                self.partner_hint = Some(format!("Now bring {} to the goal!", missing.name()));
            }
            LevelEvent::Won => {
                self.partner_hint = None;
                self.banner = Some("You Win! Both Sam and Sadie reached the goal together!".to_string());
            }
            LevelEvent::Jumped { .. }
            | LevelEvent::DoubleJumped { .. }
            | LevelEvent::PhaseChanged { .. }
            | LevelEvent::RestartRequested => return false,
        }
        true
    }

    /// Visible lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.instructions.clone();
        lines.push(self.active.clone());
        lines.extend(
            [&self.goal_status, &self.partner_hint, &self.platform_hint, &self.tip, &self.banner]
                .into_iter()
                .flatten()
                .cloned(),
        );
        lines
    }
}

fn active_line(active: CharacterId) -> String {
    format!("Active: {}", active.name())
}

fn goal_line(sam: bool, sadie: bool) -> Option<String> {
    let marks: Vec<_> = [(sam, CharacterId::Sam), (sadie, CharacterId::Sadie)]
        .into_iter()
        .filter(|(at_goal, _)| *at_goal)
        .map(|(_, id)| format!("{} ✓", id.name()))
        .collect();

    (!marks.is_empty()).then(|| format!("Goal: {}", marks.join(" ")))
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hud() -> Hud {
        Hud::new([Ability::PhaseThrough, Ability::None], CharacterId::Sam)
    }

    #[test]
    fn initial_lines() {
        assert_eq!(
            hud().lines(),
            vec![
                "Press SPACE to switch characters",
                "Press SHIFT for Sam to phase through obstacles",
                "Active: Sam",
                "Tip: Get Sadie to the red button on the left!",
            ]
        );
    }

    #[test]
    fn double_jump_instruction_names_its_owner() {
        let hud = Hud::new([Ability::None, Ability::DoubleJump], CharacterId::Sam);
        assert!(hud.lines()[1].contains("Sadie to double jump"));
    }

    #[test]
    fn switch_updates_active_label() {
        let mut hud = hud();
        assert!(hud.apply(&LevelEvent::Switched { active: CharacterId::Sadie }));
        assert!(hud.lines().contains(&"Active: Sadie".to_string()));
    }

    #[test]
    fn button_replaces_tip_with_platform_hint() {
        let mut hud = hud();
        hud.apply(&LevelEvent::ButtonPressed);
        let lines = hud.lines();
        assert!(lines.contains(&"↑ Platform moving! ↑".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Tip:")));
    }

    #[test]
    fn goal_status_lists_arrived_characters() {
        assert_eq!(goal_line(true, true).as_deref(), Some("Goal: Sam ✓ Sadie ✓"));
        assert_eq!(goal_line(false, true).as_deref(), Some("Goal: Sadie ✓"));
        assert_eq!(goal_line(false, false), None);
    }

    #[test]
    fn win_shows_banner_and_drops_partner_hint() {
        let mut hud = hud();
        hud.apply(&LevelEvent::PartnerNeeded { missing: CharacterId::Sam });
        assert!(hud.lines().contains(&"Now bring Sam to the goal!".to_string()));

        hud.apply(&LevelEvent::Won);
        let lines = hud.lines();
        assert!(!lines.iter().any(|l| l.starts_with("Now bring")));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("You Win! Both Sam and Sadie reached the goal together!")
        );
    }

    #[test]
    fn motion_events_leave_text_alone() {
        let mut hud = hud();
        assert!(!hud.apply(&LevelEvent::Jumped { character: CharacterId::Sam, velocity: -350.0 }));
        assert_eq!(hud.lines(), self::hud().lines());
    }
}
