//=========================================================================
// Level Layout
//=========================================================================
//
// Static scene description plus the texture registry it is built from.
//
// All coordinates are sprite centers in an 800x600 world, y down. Sizes
// are the registered texture size times the placement scale.
//
// Revisions:
//   PhaseObstacle  obstacle block on the main path, Sam phases through it
//   DoubleJump     Sam-only platform instead, Sadie double jumps
//
//=========================================================================

//=== Standard Library ====================================================

use std::collections::HashMap;

//=== External Dependencies ===============================================

use glam::Vec2;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::{Ability, CharacterId, LevelError};

//=== Texture =============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    pub size: Vec2,
    /// 0xRRGGBB
    pub color: u32,
}

//=== AssetRegistry =======================================================

/// Textures addressed by logical name.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    textures: HashMap<String, Texture>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven textures the level uses.
    pub fn with_defaults() -> Self {
        let mut assets = Self::new();
        assets.register("ground", Vec2::new(400.0, 32.0), 0x4a7a3a);
        assets.register("platform", Vec2::new(400.0, 32.0), 0x8a6a3a);
        assets.register("obstacle", Vec2::new(320.0, 320.0), 0x7a3a8a);
        assets.register("player1", Vec2::new(24.0, 32.0), 0x3a8ae0);
        assets.register("player2", Vec2::new(28.0, 40.0), 0xe05a8a);
        assets.register("goal", Vec2::new(640.0, 640.0), 0xffd700);
        assets.register("button", Vec2::new(128.0, 64.0), 0x40c040);
        assets
    }

    pub fn register(&mut self, name: &str, size: Vec2, color: u32) {
        self.textures.insert(name.to_string(), Texture { size, color });
    }

    pub fn texture(&self, name: &str) -> Result<&Texture, LevelError> {
        self.textures
            .get(name)
            .ok_or_else(|| LevelError::MissingAsset(name.to_string()))
    }
}

//=== LayoutRevision ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutRevision {
    #[default]
    PhaseObstacle,
    DoubleJump,
}

impl LayoutRevision {
    pub fn default_ability(self, id: CharacterId) -> Ability {
        match (self, id) {
            (LayoutRevision::PhaseObstacle, CharacterId::Sam) => Ability::PhaseThrough,
            (LayoutRevision::DoubleJump, CharacterId::Sadie) => Ability::DoubleJump,
            _ => Ability::None,
        }
    }
}

//=== Placement ===========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub texture: &'static str,
    pub position: Vec2,
    pub scale: Vec2,
}

impl Placement {
    pub fn new(texture: &'static str, x: f32, y: f32, scale: f32) -> Self {
        Self::scaled(texture, x, y, scale, scale)
    }

    pub fn scaled(texture: &'static str, x: f32, y: f32, sx: f32, sy: f32) -> Self {
        Self {
            texture,
            position: Vec2::new(x, y),
            scale: Vec2::new(sx, sy),
        }
    }

    /// Resolved (size, color) of this placement.
    pub fn resolve(&self, assets: &AssetRegistry) -> Result<(Vec2, u32), LevelError> {
        let texture = assets.texture(self.texture)?;
        Ok((texture.size * self.scale, texture.color))
    }
}

//=== Layout parts ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingPlatform {
    pub placement: Placement,
    pub end_y: f32,
    /// Seconds.
    pub duration: f32,
}

/// Platform that only collides with its owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OwnedPlatform {
    pub owner: CharacterId,
    pub placement: Placement,
}

//=== LevelLayout =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    /// Static platforms; the first one is the ground.
    pub platforms: Vec<Placement>,
    pub moving_platform: MovingPlatform,
    pub button: Placement,
    pub goal: Placement,
    pub obstacle: Option<Placement>,
    pub owned_platform: Option<OwnedPlatform>,
    /// Indexed by `CharacterId::index()`.
    pub spawns: [Placement; 2],
}

impl LevelLayout {
    pub fn for_revision(revision: LayoutRevision) -> Self {
        let (obstacle, owned_platform) = match revision {
            LayoutRevision::PhaseObstacle => (Some(Placement::new("obstacle", 300.0, 410.0, 0.1)), None),
            LayoutRevision::DoubleJump => (
                None,
                Some(OwnedPlatform {
                    owner: CharacterId::Sam,
                    placement: Placement::new("platform", 150.0, 360.0, 0.08),
                }),
            ),
        };

        Self {
            platforms: vec![
                Placement::new("ground", 400.0, 570.0, 0.25),
                // left path to the button
                Placement::new("ground", 150.0, 480.0, 0.08),
                Placement::new("ground", 50.0, 430.0, 0.06),
                // main path
                Placement::new("ground", 300.0, 440.0, 0.08),
                Placement::new("ground", 450.0, 360.0, 0.08),
                Placement::new("ground", 600.0, 280.0, 0.08),
                Placement::new("ground", 450.0, 200.0, 0.08),
                Placement::new("ground", 300.0, 120.0, 0.08),
                // goal ledge
                Placement::new("ground", 400.0, 80.0, 0.08),
            ],
            moving_platform: MovingPlatform {
                placement: Placement::scaled("platform", 230.0, 370.0, 0.15, 0.08),
                end_y: 180.0,
                duration: 3.0,
            },
            button: Placement::new("button", 50.0, 410.0, 0.15),
            goal: Placement::new("goal", 400.0, 40.0, 0.07),
            obstacle,
            owned_platform,
            spawns: [
                Placement::new("player1", 350.0, 548.0, 1.0),
                Placement::new("player2", 450.0, 544.0, 1.0),
            ],
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_texture_is_reported_by_name() {
        let assets = AssetRegistry::new();
        assert_eq!(
            assets.texture("goal").unwrap_err(),
            LevelError::MissingAsset("goal".to_string())
        );
    }

    #[test]
    fn every_placement_resolves_against_default_assets() {
        let assets = AssetRegistry::with_defaults();
        for revision in [LayoutRevision::PhaseObstacle, LayoutRevision::DoubleJump] {
            let layout = LevelLayout::for_revision(revision);
            let mut placements = layout.platforms.clone();
            placements.extend([layout.moving_platform.placement, layout.button, layout.goal]);
            placements.extend(layout.spawns);
            placements.extend(layout.obstacle);
            placements.extend(layout.owned_platform.map(|p| p.placement));

            for placement in placements {
                assert!(placement.resolve(&assets).is_ok(), "{:?}", placement);
            }
        }
    }

    #[test]
    fn revisions_swap_obstacle_for_owned_platform() {
        let a = LevelLayout::for_revision(LayoutRevision::PhaseObstacle);
        assert!(a.obstacle.is_some() && a.owned_platform.is_none());

        let b = LevelLayout::for_revision(LayoutRevision::DoubleJump);
        assert!(b.obstacle.is_none());
        assert_eq!(b.owned_platform.map(|p| p.owner), Some(CharacterId::Sam));
    }

    #[test]
    fn default_abilities_follow_revision() {
        use CharacterId::*;
        assert_eq!(LayoutRevision::PhaseObstacle.default_ability(Sam), Ability::PhaseThrough);
        assert_eq!(LayoutRevision::PhaseObstacle.default_ability(Sadie), Ability::None);
        assert_eq!(LayoutRevision::DoubleJump.default_ability(Sam), Ability::None);
        assert_eq!(LayoutRevision::DoubleJump.default_ability(Sadie), Ability::DoubleJump);
    }

    #[test]
    fn scaled_sizes_match_texture_times_scale() {
        let assets = AssetRegistry::with_defaults();
        let (size, _) = Placement::scaled("platform", 0.0, 0.0, 0.15, 0.08)
            .resolve(&assets)
            .unwrap();
        assert!((size - Vec2::new(60.0, 2.56)).length() < 1e-4);
    }
}
