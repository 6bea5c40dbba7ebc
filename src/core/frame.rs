//=========================================================================
// Frame Snapshot
//=========================================================================
//
// Everything the platform thread needs to draw one frame, produced by the
// logic thread each tick.
//
//   Session → FrameSnapshot → Sender<FrameSnapshot> → renderer
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::physics::Aabb;

//=== SpriteView ==========================================================

/// A solid rectangle with a tint and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteView {
    pub rect: Aabb,
    /// 0xRRGGBB
    pub color: u32,
    pub alpha: f32,
}

//=== FrameSnapshot =======================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSnapshot {
    /// Draw order: first to last.
    pub sprites: Vec<SpriteView>,
    /// HUD lines, top to bottom.
    pub hud: Vec<String>,
    /// Clickable restart region, present only after a win.
    pub restart_button: Option<Aabb>,
}

impl FrameSnapshot {
    /// HUD lines joined for single-line surfaces such as a window title.
    pub fn hud_line(&self) -> String {
        self.hud.join(" | ")
    }
}
