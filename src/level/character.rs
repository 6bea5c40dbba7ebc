//=========================================================================
// Characters
//=========================================================================

//=== External Dependencies ===============================================

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::physics::{BodyId, ColliderId};

//=== CharacterId =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterId {
    Sam,
    Sadie,
}

impl CharacterId {
    pub const ALL: [CharacterId; 2] = [CharacterId::Sam, CharacterId::Sadie];

    pub fn other(self) -> Self {
        match self {
            CharacterId::Sam => CharacterId::Sadie,
            CharacterId::Sadie => CharacterId::Sam,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterId::Sam => "Sam",
            CharacterId::Sadie => "Sadie",
        }
    }

    /// Vertical launch velocity (negative is up).
    pub fn jump_power(self) -> f32 {
        match self {
            CharacterId::Sam => -350.0,
            CharacterId::Sadie => -450.0,
        }
    }

    /// Slot in per-character arrays.
    pub fn index(self) -> usize {
        match self {
            CharacterId::Sam => 0,
            CharacterId::Sadie => 1,
        }
    }
}

//=== Ability =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    #[default]
    None,
    /// Obstacle collision suspended while the phase input is held.
    PhaseThrough,
    /// One extra airborne jump per flight.
    DoubleJump,
}

//=== Character ===========================================================

/// Per-run state of one character. Motion lives in its physics body.
#[derive(Debug, Clone)]
pub struct Character {
    pub id: CharacterId,
    pub body: BodyId,
    pub ability: Ability,
    pub(crate) phasing: bool,
    pub(crate) has_double_jumped: bool,
    /// Collision relation against obstacles, if the layout has any.
    pub(crate) obstacle_collider: Option<ColliderId>,
}

impl Character {
    pub fn new(id: CharacterId, body: BodyId, ability: Ability) -> Self {
        Self {
            id,
            body,
            ability,
            phasing: false,
            has_double_jumped: false,
            obstacle_collider: None,
        }
    }

    pub fn is_phasing(&self) -> bool {
        self.phasing
    }

    pub fn has_double_jumped(&self) -> bool {
        self.has_double_jumped
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
