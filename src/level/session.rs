//=========================================================================
// Session
//=========================================================================
//
// Explicit state for one run of the level. Built from a `LevelConfig`,
// advanced once per tick by `update()`, and replaced wholesale on restart.
//
// Update order:
//   won?  → restart check only
//   else  → controller → physics step → platform tween → button latch
//           → goal evaluation → (win sequence | goal pulse)
//
// Everything observable leaves through the returned `LevelEvent`s and
// `snapshot()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{
    AssetRegistry, ButtonTrigger, Character, CharacterController, CharacterId, FrameInput, Hud,
    LevelError, LevelEvent, LevelLayout, Placement, WinTracker,
};
use crate::config::LevelConfig;
use crate::core::frame::{FrameSnapshot, SpriteView};
use crate::core::physics::{Aabb, Body, BodyId, BodyKind, PhysicsWorld};
use crate::core::tween::{Ease, Repeat, Tween};

//=== Constants ===========================================================

const RESTART_BUTTON_SIZE: Vec2 = Vec2::new(160.0, 48.0);
const PRESSED_BUTTON_COLOR: u32 = 0xff0000;
const PHASED_OBSTACLE_ALPHA: f32 = 0.3;
const CHARACTER_BOUNCE: f32 = 0.1;

//=== Prop ================================================================

/// A drawn body with a flat color.
#[derive(Debug, Clone, Copy)]
struct Prop {
    body: BodyId,
    color: u32,
}

impl Prop {
    fn spawn(
        world: &mut PhysicsWorld,
        assets: &AssetRegistry,
        placement: &Placement,
        kind: BodyKind,
    ) -> Result<Self, LevelError> {
        let (size, color) = placement.resolve(assets)?;
        let body = world.add_body(Body::new(kind, placement.position, size));
        Ok(Self { body, color })
    }
}

//=== Session =============================================================

pub struct Session {
    world: PhysicsWorld,
    characters: [Character; 2],
    character_colors: [u32; 2],
    controller: CharacterController,

    scenery: Vec<Prop>,
    obstacle: Option<Prop>,
    owned_platform: Option<(CharacterId, Prop)>,

    moving_platform: Prop,
    platform_end_y: f32,
    platform_duration: f32,
    platform_tween: Option<Tween>,

    button: Prop,
    button_trigger: ButtonTrigger,

    goal: Prop,
    goal_pulse: Tween,
    goal_alpha: f32,

    win: WinTracker,
    hud: Hud,
    restart_button: Option<Aabb>,
}

impl Session {
    //--- Construction -----------------------------------------------------

    pub fn new(config: &LevelConfig) -> Result<Self, LevelError> {
        Self::with_assets(config, &AssetRegistry::with_defaults())
    }

    pub fn with_assets(config: &LevelConfig, assets: &AssetRegistry) -> Result<Self, LevelError> {
        let layout = LevelLayout::for_revision(config.layout);
        let mut world = PhysicsWorld::new(
            config.physics.gravity,
            Vec2::new(config.physics.world_width, config.physics.world_height),
        );

        let scenery = layout
            .platforms
            .iter()
            .map(|p| Prop::spawn(&mut world, assets, p, BodyKind::Static))
            .collect::<Result<Vec<_>, _>>()?;
        let moving_platform = Prop::spawn(
            &mut world,
            assets,
            &layout.moving_platform.placement,
            BodyKind::Kinematic,
        )?;
        let button = Prop::spawn(&mut world, assets, &layout.button, BodyKind::Static)?;
        let goal = Prop::spawn(&mut world, assets, &layout.goal, BodyKind::Static)?;
        let obstacle = layout
            .obstacle
            .map(|p| Prop::spawn(&mut world, assets, &p, BodyKind::Static))
            .transpose()?;
        let owned_platform = layout
            .owned_platform
            .map(|owned| {
                Prop::spawn(&mut world, assets, &owned.placement, BodyKind::Static)
                    .map(|prop| (owned.owner, prop))
            })
            .transpose()?;

        let solids: Vec<BodyId> = scenery
            .iter()
            .chain(std::iter::once(&moving_platform))
            .map(|p| p.body)
            .collect();

        let spawn = |world: &mut PhysicsWorld, id: CharacterId| -> Result<(Character, u32), LevelError> {
            let placement = &layout.spawns[id.index()];
            let (size, color) = placement.resolve(assets)?;
            let body = world.add_body(
                Body::dynamic(placement.position, size)
                    .with_bounce(CHARACTER_BOUNCE)
                    .with_world_bounds(),
            );
            world.add_collider(body, solids.iter().copied());

            let mut character = Character::new(id, body, config.ability(id));
            if let Some(obstacle) = obstacle {
                character.obstacle_collider = Some(world.add_collider(body, [obstacle.body]));
            }
            if let Some((owner, platform)) = owned_platform {
                if owner == id {
                    world.add_collider(body, [platform.body]);
                }
            }
            Ok((character, color))
        };
        let (sam, sam_color) = spawn(&mut world, CharacterId::Sam)?;
        let (sadie, sadie_color) = spawn(&mut world, CharacterId::Sadie)?;
        let characters = [sam, sadie];
        let character_colors = [sam_color, sadie_color];

        let controller = CharacterController::new();
        let abilities = [characters[0].ability, characters[1].ability];

        info!(
            target: "level",
            "Session ready ({:?} layout, {:?} win rule, abilities {:?})",
            config.layout, config.win_rule, abilities
        );

        Ok(Self {
            world,
            characters,
            character_colors,
            hud: Hud::new(abilities, controller.active()),
            controller,
            scenery,
            obstacle,
            owned_platform,
            moving_platform,
            platform_end_y: layout.moving_platform.end_y,
            platform_duration: layout.moving_platform.duration,
            platform_tween: None,
            button,
            button_trigger: ButtonTrigger::new(),
            goal,
            goal_pulse: Tween::new(0.5, 1.0, 0.5)
                .ease(Ease::Linear)
                .yoyo()
                .repeat(Repeat::Forever),
            goal_alpha: 0.5,
            win: WinTracker::new(config.win_rule),
            restart_button: None,
        })
    }

    //--- update() ---------------------------------------------------------

    /// Advances the level by `dt` seconds.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<LevelEvent> {
        let mut events = Vec::new();

        if self.win.is_won() {
            if self.restart_activated(input) {
                events.push(LevelEvent::RestartRequested);
            }
            self.publish(&events);
            return events;
        }

        self.controller
            .update(input, &mut self.characters, &mut self.world, &mut events);
        self.world.step(dt);
        self.advance_platform(dt, &mut events);
        self.check_button(&mut events);
        self.check_goal(&mut events);

        if self.win.is_won() {
            self.run_win_sequence();
        } else {
            self.goal_alpha = self.goal_pulse.advance(dt).value;
        }

        self.publish(&events);
        events
    }

    fn advance_platform(&mut self, dt: f32, events: &mut Vec<LevelEvent>) {
        let Some(tween) = self.platform_tween.as_mut() else {
            return;
        };
        if tween.is_finished() {
            return;
        }

        let step = tween.advance(dt);
        let x = self.world.body(self.moving_platform.body).position.x;
        self.world
            .move_kinematic(self.moving_platform.body, Vec2::new(x, step.value));

        if step.completed {
            events.push(LevelEvent::PlatformArrived);
        }
    }

    fn check_button(&mut self, events: &mut Vec<LevelEvent>) {
        let sadie = self.characters[CharacterId::Sadie.index()].body;
        let overlapping = self.world.overlaps(sadie, self.button.body);

        if self.button_trigger.check(overlapping) {
            let start = self.world.body(self.moving_platform.body).position.y;
            self.platform_tween = Some(
                Tween::new(start, self.platform_end_y, self.platform_duration).ease(Ease::Linear),
            );
            events.push(LevelEvent::ButtonPressed);
        }
    }

    fn check_goal(&mut self, events: &mut Vec<LevelEvent>) {
        let overlapping =
            CharacterId::ALL.map(|id| self.world.overlaps(self.characters[id.index()].body, self.goal.body));
        self.win.evaluate(overlapping, events);
    }

    /// Freezes both characters, removes the goal and shows "Play Again".
    fn run_win_sequence(&mut self) {
        for character in &self.characters {
            self.world.body_mut(character.body).freeze();
        }
        self.world.remove_body(self.goal.body);

        let center = self.world.bounds().center();
        self.restart_button = Some(Aabb::from_center(center, RESTART_BUTTON_SIZE));
    }

    fn restart_activated(&self, input: &FrameInput) -> bool {
        let clicked = input.click_pressed
            && self
                .restart_button
                .is_some_and(|rect| rect.contains(input.pointer));
        input.restart_pressed || clicked
    }

    fn publish(&mut self, events: &[LevelEvent]) {
        for event in events {
            if event.is_milestone() {
                info!(target: "level", "{:?}", event);
            } else {
                debug!(target: "level", "{:?}", event);
            }
            if self.hud.apply(event) {
                debug!(target: "level", "HUD: {}", self.hud.lines().join(" | "));
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn active(&self) -> CharacterId {
        self.controller.active()
    }

    pub fn character(&self, id: CharacterId) -> &Character {
        &self.characters[id.index()]
    }

    pub fn body(&self, id: CharacterId) -> &Body {
        self.world.body(self.characters[id.index()].body)
    }

    pub fn is_won(&self) -> bool {
        self.win.is_won()
    }

    pub fn button_pressed(&self) -> bool {
        self.button_trigger.is_pressed()
    }

    pub fn goal_present(&self) -> bool {
        self.world.body(self.goal.body).enabled
    }

    pub fn moving_platform_y(&self) -> f32 {
        self.world.body(self.moving_platform.body).position.y
    }

    pub fn restart_button(&self) -> Option<Aabb> {
        self.restart_button
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    //--- snapshot() -------------------------------------------------------

    /// Render view of the current state.
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut sprites = Vec::with_capacity(self.scenery.len() + 8);
        let mut push = |prop: &Prop, color: u32, alpha: f32| {
            sprites.push(SpriteView {
                rect: self.world.body(prop.body).aabb(),
                color,
                alpha,
            });
        };

        for prop in &self.scenery {
            push(prop, prop.color, 1.0);
        }
        if let Some((owner, prop)) = &self.owned_platform {
            let color = if *owner == self.active() { prop.color } else { dim(prop.color) };
            push(prop, color, 1.0);
        }
        if let Some(obstacle) = &self.obstacle {
            let phasing = self.characters.iter().any(Character::is_phasing);
            let alpha = if phasing { PHASED_OBSTACLE_ALPHA } else { 1.0 };
            push(obstacle, obstacle.color, alpha);
        }
        push(&self.moving_platform, self.moving_platform.color, 1.0);

        let button_color = if self.button_pressed() {
            PRESSED_BUTTON_COLOR
        } else {
            self.button.color
        };
        push(&self.button, button_color, 1.0);

        if self.goal_present() {
            push(&self.goal, self.goal.color, self.goal_alpha);
        }
        for character in &self.characters {
            let prop = Prop {
                body: character.body,
                color: self.character_colors[character.id.index()],
            };
            push(&prop, prop.color, 1.0);
        }

        FrameSnapshot {
            sprites,
            hud: self.hud.lines(),
            restart_button: self.restart_button,
        }
    }
}

//=== Helpers =============================================================

fn dim(color: u32) -> u32 {
    (color >> 1) & 0x7f7f7f
}

//=========================================================================
// Unit Tests
//=========================================================================

//--- Test Hooks -----------------------------------------------------------

#[cfg(test)]
impl Session {
    /// Teleports a character and clears its velocity.
    pub(crate) fn place_character(&mut self, id: CharacterId, position: Vec2) {
        let body = self.world.body_mut(self.characters[id.index()].body);
        body.position = position;
        body.velocity = Vec2::ZERO;
    }

    /// Feet on the goal ledge at (400, 80), overlapping the goal.
    pub(crate) fn place_at_goal(&mut self, id: CharacterId) {
        const LEDGE_TOP: f32 = 80.0 - 1.28;
        let (x, half_height) = match id {
            CharacterId::Sam => (392.0, 16.0),
            CharacterId::Sadie => (410.0, 20.0),
        };
        self.place_character(id, Vec2::new(x, LEDGE_TOP - half_height));
    }
}
