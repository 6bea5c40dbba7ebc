//=========================================================================
// Core Systems Orchestrator
//
// Coordinator for everything that runs on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Receive platform events and turn them into per-tick action state
// - Step the level session at a fixed tick rate (TPS)
// - Rebuild the session when a restart is requested
// - Publish a render snapshot to the platform after every tick
//
// Notes:
// The orchestrator runs independently from the platform layer and owns
// its systems directly. Communication happens only through bounded
// crossbeam channels.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod frame;
pub mod input;
pub mod physics;
pub(crate) mod platform_bridge;
pub mod tween;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, error, info, log_enabled, trace, Level};

//=== Internal Modules ====================================================

use crate::config::LevelConfig;
use crate::level::{bind_default_controls, FrameInput, LevelAction, LevelError, LevelEvent, Session, GAMEPLAY, WIN_SCREEN};
use frame::FrameSnapshot;
use input::{InputSystem, StateTracker};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Owns the logic-thread systems and steps them once per tick.
pub(crate) struct CoreSystemsOrchestrator {
    collector: EventCollector,
    input: InputSystem<LevelAction>,
    state: StateTracker,
    config: LevelConfig,
    session: Session,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    /// Builds the first session but does not start the logic thread.
    pub fn new(receiver: Receiver<PlatformEvent>, config: LevelConfig) -> Result<Self, LevelError> {
        let session = Session::new(&config)?;

        let mut input = InputSystem::new();
        bind_default_controls(&mut input);

        Ok(Self {
            collector: EventCollector::new(receiver),
            input,
            state: StateTracker::new(),
            config,
            session,
        })
    }

    //--- spawn_core_thread() ---------------------------------------------

    /// Spawns the logic thread, ticking at `tps` until the platform closes.
    ///
    /// Each tick:
    ///  1. Collects platform events (exits on close or disconnect)
    ///  2. Updates input and the session
    ///  3. Offers a snapshot to the platform, dropping it if the channel is full
    ///  4. Sleeps to maintain fixed pacing
    pub fn spawn_core_thread(
        mut self,
        frame_sender: Sender<FrameSnapshot>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let tick_duration = Duration::from_secs_f64(1.0 / tps);
        let dt = tick_duration.as_secs_f32();

        thread::spawn(move || {
            info!(target: "core", "Core thread started at {} TPS", tps);

            loop {
                let tick_start = Instant::now();

                if self.tick(dt) == TickControl::Exit {
                    info!(target: "core", "Core thread exiting");
                    break;
                }

                match frame_sender.try_send(self.session.snapshot()) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        trace!(target: "core", "Frame channel full, snapshot dropped");
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        info!(target: "core", "Frame channel closed, core thread exiting");
                        break;
                    }
                }

                let elapsed = tick_start.elapsed();
                if elapsed < tick_duration {
                    thread::sleep(tick_duration - elapsed);
                }
            }
        })
    }

    //--- tick() -----------------------------------------------------------

    /// Runs one logic tick of `dt` seconds.
    fn tick(&mut self, dt: f32) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        let context = if self.session.is_won() { WIN_SCREEN } else { GAMEPLAY };
        if self.input.context() != context {
            debug!(target: "core", "Input context -> {:?}", context);
            self.input.set_context(context);
        }

        self.input.process_frame(&mut self.state, self.collector.batches());
        if log_enabled!(target: "core::input", Level::Trace) {
            let pressed: Vec<_> = self.input.actions_pressed().collect();
            if !pressed.is_empty() {
                trace!(target: "core::input", "Actions pressed: {:?}", pressed);
            }
        }
        let frame_input = FrameInput::from_input(&self.input, &self.state);

        let events = self.session.update(&frame_input, dt);
        if events.contains(&LevelEvent::RestartRequested) {
            self.restart();
        }

        TickControl::Continue
    }

    /// Replaces the session with a fresh one. The old session is kept if
    /// the rebuild fails.
    fn restart(&mut self) {
        match Session::new(&self.config) {
            Ok(session) => {
                info!(target: "core", "Level restarted");
                self.session = session;
                self.input.set_context(GAMEPLAY);
            }
            Err(e) => error!(target: "core", "Restart failed: {}", e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
