//=========================================================================
// Renderer
//=========================================================================
//
// Software rasterizer for `FrameSnapshot`s: flat, alpha-blended
// rectangles into an RGBA8 buffer the size of the world.
//
// Draw order: background → sprites (in snapshot order) → restart button.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::frame::FrameSnapshot;
use crate::core::physics::Aabb;

//=== Constants ===========================================================

const BACKGROUND: u32 = 0x1a1a2e;
const RESTART_BORDER: u32 = 0x202020;
const RESTART_FILL: u32 = 0xf0f0f0;
const RESTART_BORDER_WIDTH: f32 = 3.0;

//=== draw() ==============================================================

/// Rasterizes `frame` into `buffer` (`width * height * 4` bytes).
pub(crate) fn draw(frame: &FrameSnapshot, buffer: &mut [u8], width: u32, height: u32) {
    let mut target = Target { buffer, width, height };

    target.fill(BACKGROUND);
    for sprite in &frame.sprites {
        target.blend_rect(&sprite.rect, sprite.color, sprite.alpha);
    }

    if let Some(button) = frame.restart_button {
        target.blend_rect(&button, RESTART_BORDER, 1.0);
        let inset = Aabb::new(
            button.min + RESTART_BORDER_WIDTH,
            button.max - RESTART_BORDER_WIDTH,
        );
        target.blend_rect(&inset, RESTART_FILL, 1.0);
    }
}

//=== Target ==============================================================

struct Target<'a> {
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
}

impl Target<'_> {
    fn fill(&mut self, color: u32) {
        let [r, g, b] = rgb(color);
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[r, g, b, 0xff]);
        }
    }

    /// Blends a rectangle, clipped to the buffer. Pixel centers decide
    /// coverage.
    fn blend_rect(&mut self, rect: &Aabb, color: u32, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }

        let x0 = (rect.min.x - 0.5).ceil().max(0.0) as u32;
        let y0 = (rect.min.y - 0.5).ceil().max(0.0) as u32;
        let x1 = ((rect.max.x - 0.5).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((rect.max.y - 0.5).ceil().max(0.0) as u32).min(self.height);

        let src = rgb(color);
        for y in y0..y1 {
            let row = (y * self.width) as usize * 4;
            for x in x0..x1 {
                let i = row + x as usize * 4;
                for c in 0..3 {
                    let dst = self.buffer[i + c] as f32;
                    self.buffer[i + c] = (src[c] as f32 * alpha + dst * (1.0 - alpha)).round() as u8;
                }
                self.buffer[i + 3] = 0xff;
            }
        }
    }
}

fn rgb(color: u32) -> [u8; 3] {
    [(color >> 16) as u8, (color >> 8) as u8, color as u8]
}

//=========================================================================
// Unit Tests
//=========================================================================
