//=========================================================================
// Character Controller
//=========================================================================
//
// Translates one frame of input into velocity commands and ability state.
//
// Per update, in order:
//   1. Switch       edge-triggered flip of the active character
//   2. Horizontal   both characters stop; the active one moves
//   3. Jump         grounded active character takes its jump power
//   4. Abilities    phase-through (held) / double jump (edge, once per flight)
//
// Only the active character receives movement, jump and ability input.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Ability, Character, CharacterId, FrameInput, LevelEvent};
use crate::core::physics::PhysicsWorld;

//=== Constants ===========================================================

pub const MOVE_SPEED: f32 = 160.0;

/// Per-update horizontal velocity change while airborne.
pub const AIR_CONTROL_STEP: f32 = 5.0;

//=== CharacterController =================================================

#[derive(Debug, Clone)]
pub struct CharacterController {
    active: CharacterId,
}

impl CharacterController {
    /// Sam starts active.
    pub fn new() -> Self {
        Self {
            active: CharacterId::Sam,
        }
    }

    pub fn active(&self) -> CharacterId {
        self.active
    }

    pub fn update(
        &mut self,
        input: &FrameInput,
        characters: &mut [Character; 2],
        world: &mut PhysicsWorld,
        events: &mut Vec<LevelEvent>,
    ) {
        //--- 1. Switch ----------------------------------------------------
        if input.switch_pressed {
            self.active = self.active.other();
            debug!(target: "level", "Switched to {}", self.active.name());
            events.push(LevelEvent::Switched { active: self.active });
        }

        //--- 2. Horizontal movement ---------------------------------------
        for character in characters.iter() {
            let body = world.body_mut(character.body);
            let previous = body.velocity.x;
            body.velocity.x = if character.id == self.active {
                horizontal_velocity(input.direction(), previous, body.on_ground())
            } else {
                0.0
            };
        }

        //--- 3. Jump ------------------------------------------------------
        let active = &characters[self.active.index()];
        let body = world.body_mut(active.body);
        // A tap released within the tick only shows up as a press
        if (input.jump_held || input.jump_pressed) && body.on_ground() {
            body.velocity.y = active.id.jump_power();
            events.push(LevelEvent::Jumped {
                character: active.id,
                velocity: body.velocity.y,
            });
        }

        //--- 4. Abilities -------------------------------------------------
        for character in characters.iter_mut() {
            let is_active = character.id == self.active;
            match character.ability {
                Ability::PhaseThrough => {
                    update_phase(character, is_active && input.phase_held, world, events)
                }
                Ability::DoubleJump => {
                    update_double_jump(character, is_active && input.jump_pressed, world, events)
                }
                Ability::None => {}
            }
        }
    }
}

impl Default for CharacterController {
    fn default() -> Self {
        Self::new()
    }
}

//=== Rules ===============================================================

/// Grounded movement snaps to full speed; airborne movement eases toward it.
fn horizontal_velocity(direction: f32, previous: f32, grounded: bool) -> f32 {
    if direction == 0.0 {
        0.0
    } else if grounded {
        direction * MOVE_SPEED
    } else {
        (previous + direction * AIR_CONTROL_STEP).clamp(-MOVE_SPEED, MOVE_SPEED)
    }
}

fn update_phase(
    character: &mut Character,
    phasing: bool,
    world: &mut PhysicsWorld,
    events: &mut Vec<LevelEvent>,
) {
    if character.phasing == phasing {
        return;
    }

    character.phasing = phasing;
    if let Some(collider) = character.obstacle_collider {
        world.set_collider_active(collider, !phasing);
    }
    events.push(LevelEvent::PhaseChanged {
        character: character.id,
        phasing,
    });
}

fn update_double_jump(
    character: &mut Character,
    jump_pressed: bool,
    world: &mut PhysicsWorld,
    events: &mut Vec<LevelEvent>,
) {
    let body = world.body_mut(character.body);

    if body.on_ground() {
        character.has_double_jumped = false;
        return;
    }

    if jump_pressed && !character.has_double_jumped {
        character.has_double_jumped = true;
        body.velocity.y = character.id.jump_power();
        events.push(LevelEvent::DoubleJumped { character: character.id });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
