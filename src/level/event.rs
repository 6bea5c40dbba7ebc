//=========================================================================
// Level Events
//=========================================================================
//
// Side effects of one `Session::update`, returned to the caller in the
// order they happened. The HUD and the orchestrator react to these; the
// level logic never calls out.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::CharacterId;

//=== LevelEvent ==========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelEvent {
    Switched { active: CharacterId },
    Jumped { character: CharacterId, velocity: f32 },
    DoubleJumped { character: CharacterId },
    PhaseChanged { character: CharacterId, phasing: bool },
    ButtonPressed,
    PlatformArrived,
    GoalStatusChanged { sam: bool, sadie: bool },
    PartnerNeeded { missing: CharacterId },
    Won,
    RestartRequested,
}

impl LevelEvent {
    /// Events worth a line in the log at `info`.
    pub fn is_milestone(&self) -> bool {
        !matches!(
            self,
            LevelEvent::Jumped { .. } | LevelEvent::DoubleJumped { .. } | LevelEvent::PhaseChanged { .. }
        )
    }
}
