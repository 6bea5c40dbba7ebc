//=========================================================================
// Platform Subsystem
//
// Bridges Winit (window, OS input, presentation) with the logic thread.
//
// Architecture:
// ```text
//  Main Thread:                      Logic Thread:
//  ┌───────────────────────────┐    ┌─────────────────────┐
//  │  Winit Event Loop         │    │  CoreSystems        │
//  │   ↓                       │    │   InputSystem       │
//  │  InputProcessor           │    │   Session           │
//  │   ↓                       │    │                     │
//  │  InputBuffer              │    │                     │
//  │   ↓ RedrawRequested       │    │                     │
//  │  Sender<PlatformEvent> ───┼───►│                     │
//  │                           │    │                     │
//  │  renderer::draw ◄─────────┼────┤ Sender<FrameSnapshot>│
//  │   ↓                       │    └─────────────────────┘
//  │  pixels frame buffer      │
//  └───────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: buffered input is flushed and
//   the newest snapshot is drawn on every redraw
// - **Stale frames are skipped**: only the most recent snapshot received
//   since the last redraw is presented
// - **World-space cursor**: cursor positions are mapped through the
//   frame buffer so the level sees world coordinates
// - **Graceful channel disconnect**: if the logic thread is gone the
//   platform logs and keeps the window responsive until it is closed
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod renderer;

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::frame::FrameSnapshot;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Constants ===========================================================

const WINDOW_TITLE: &str = "Sam and Sadie";

//=== Surface =============================================================

/// Window plus the frame buffer drawn into it.
struct Surface {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

//=== Platform ============================================================

/// Window manager, input aggregator and frame presenter.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). Input goes
/// out over `event_sender`; frames come back over `frame_receiver`.
pub(crate) struct Platform {
    surface: Option<Surface>,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    frame_receiver: Receiver<FrameSnapshot>,
    latest_frame: FrameSnapshot,
    input_processor: InputProcessor,
    world_size: (u32, u32),
    fatal: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens in `resumed()`.
    pub fn new(
        event_sender: Sender<PlatformEvent>,
        frame_receiver: Receiver<FrameSnapshot>,
        world_size: (u32, u32),
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            surface: None,
            buffer: InputBuffer::new(),
            event_sender,
            frame_receiver,
            latest_frame: FrameSnapshot::default(),
            input_processor: InputProcessor::new(),
            world_size,
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Fails if the event loop cannot be created or run, or if window or
    /// frame buffer creation failed during startup.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;
        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.fatal.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_surface(&self, event_loop: &ActiveEventLoop) -> Result<Surface, PlatformError> {
        let (width, height) = self.world_size;
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(width / 2, height / 2));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| PlatformError::WindowCreation(e.to_string()))?,
        );

        let size = window.inner_size();
        let texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, texture)?;

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI, frame buffer {}x{}",
            size.width,
            size.height,
            window.scale_factor(),
            width,
            height
        );
        Ok(Surface { window, pixels })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        self.fatal = Some(error);
        event_loop.exit();
    }

    /// Sends buffered input to the logic thread.
    ///
    /// If the channel is disconnected the events are dropped with a warning
    /// so the window stays closable.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self
                .event_sender
                .send(PlatformEvent::Inputs { discrete, continuous })
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    /// Keeps only the newest snapshot. Returns `true` if one arrived.
    fn receive_frames(&mut self) -> bool {
        match self.frame_receiver.try_iter().last() {
            Some(frame) => {
                self.latest_frame = frame;
                true
            }
            None => false,
        }
    }

    fn present(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let (width, height) = self.world_size;
        renderer::draw(&self.latest_frame, surface.pixels.frame_mut(), width, height);
        if let Err(e) = surface.pixels.render() {
            error!(target: "platform", "Render failed: {}", e);
        }
    }

    fn update_title(&self) {
        if let Some(surface) = &self.surface {
            let hud = self.latest_frame.hud_line();
            let title = if hud.is_empty() {
                WINDOW_TITLE.to_string()
            } else {
                format!("{} | {}", WINDOW_TITLE, hud)
            };
            surface.window.set_title(&title);
        }
    }

    /// Maps a physical cursor position into world coordinates.
    fn cursor_to_world(&self, x: f64, y: f64) -> Option<(f32, f32)> {
        let surface = self.surface.as_ref()?;
        let (px, py) = surface
            .pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .unwrap_or_else(|pos| surface.pixels.clamp_pixel_pos(pos));
        Some((px as f32, py as f32))
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match self.create_surface(event_loop) {
            Ok(surface) => {
                surface.window.request_redraw();
                self.surface = Some(surface);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(surface) = self.surface.as_mut() {
                    if let Err(e) = surface.pixels.resize_surface(size.width, size.height) {
                        error!(target: "platform", "Surface resize failed: {}", e);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some((x, y)) = self.cursor_to_world(position.x, position.y) {
                    let event = self.input_processor.process_mouse_move(x, y);
                    self.buffer.push_continuous(event);
                }
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, present newest frame
                self.flush_input_buffer();
                if self.receive_frames() {
                    self.update_title();
                }
                self.present();

                if let Some(surface) = &self.surface {
                    surface.window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{InputEvent, KeyCode};
    use crossbeam_channel::{bounded, unbounded};

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<FrameSnapshot>) {
        let (event_tx, event_rx) = unbounded();
        let (frame_tx, frame_rx) = bounded(4);
        (Platform::new(event_tx, frame_rx, (800, 600)), event_rx, frame_tx)
    }

    #[test]
    fn platform_creation_is_lazy() {
        let (platform, _rx, _tx) = platform();
        assert!(platform.surface.is_none(), "Window should be created lazily");
        assert!(platform.cursor_to_world(10.0, 10.0).is_none());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _tx) = platform();
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_buffered_events_once() {
        let (mut platform, rx, _tx) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown { key: KeyCode::Space });

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete.len(), 1);
                assert!(continuous.is_empty());
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn flush_survives_disconnected_channel() {
        let (mut platform, rx, _tx) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown { key: KeyCode::Space });
        drop(rx);

        platform.flush_input_buffer();
    }

    #[test]
    fn only_newest_frame_is_kept() {
        let (mut platform, _rx, tx) = platform();
        assert!(!platform.receive_frames());

        for line in ["first", "second", "third"] {
            tx.send(FrameSnapshot {
                hud: vec![line.to_string()],
                ..Default::default()
            })
            .unwrap();
        }

        assert!(platform.receive_frames());
        assert_eq!(platform.latest_frame.hud, vec!["third".to_string()]);
        assert!(!platform.receive_frames());
    }
}
