//=========================================================================
// Engine
//
// Entry point that wires the platform and logic threads together.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_config()           └─ spawns logic thread
//         ├─ with_tps()                 runs platform
//         └─ with_channel_capacity()    blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::LevelConfig;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::CoreSystemsOrchestrator;
use crate::level::LevelError;
use crate::platform::Platform;

//=== Constants ===========================================================

/// Snapshots buffered between the logic thread and the renderer.
const FRAME_CHANNEL_CAPACITY: usize = 2;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// TPS and channel capacity default to the values in the level
/// configuration (60.0 and 128 unless overridden).
///
/// # Examples
///
/// ```no_run
/// use sam_and_sadie::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .build()
///     .expect("level assets are registered")
///     .run()
///     .expect("platform runs");
/// ```
pub struct EngineBuilder {
    config: LevelConfig,
    tps: f64,
    channel_capacity: usize,
}

impl EngineBuilder {
    /// Creates a builder with the default level configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `config` for the level and takes its engine settings.
    pub fn with_config(mut self, config: LevelConfig) -> Self {
        self.tps = config.engine.tps;
        self.channel_capacity = config.engine.channel_capacity;
        self.config = config;
        self
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the engine. The level is validated here by building its
    /// first session, so missing assets fail before any window opens.
    pub fn build(self) -> Result<Engine, LevelError> {
        info!(
            target: "engine",
            "Building engine (TPS: {}, channel: {}, win rule: {:?}, layout: {:?})",
            self.tps,
            self.channel_capacity,
            self.config.win_rule,
            self.config.layout
        );

        let (event_tx, event_rx) = bounded(self.channel_capacity);
        let world_size = (
            frame_dimension(self.config.physics.world_width),
            frame_dimension(self.config.physics.world_height),
        );
        let orchestrator = CoreSystemsOrchestrator::new(event_rx, self.config)?;

        Ok(Engine {
            orchestrator,
            event_tx,
            world_size,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        let config = LevelConfig::default();
        Self {
            tps: config.engine.tps,
            channel_capacity: config.engine.channel_capacity,
            config,
        }
    }
}

/// Frame buffer extent for a world dimension. Configs that skipped
/// `LevelConfig::validate` still get a buffer of at least one pixel.
fn frame_dimension(extent: f32) -> u32 {
    if extent.is_finite() && extent >= 1.0 {
        extent as u32
    } else {
        1
    }
}

//=== Engine ==============================================================

/// Game runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, Session
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input, Renderer
///
/// Platform → Core: PlatformEvent   (bounded)
/// Core → Platform: FrameSnapshot   (bounded, newest wins)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    event_tx: crossbeam_channel::Sender<PlatformEvent>,
    world_size: (u32, u32),
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// 1. Spawns the logic thread at the configured TPS
    /// 2. Runs the platform event loop (blocks here)
    /// 3. On close the platform signals the logic thread, then joins it
    ///
    /// # Errors
    ///
    /// Returns the platform error if the window or frame buffer could not
    /// be created, or [`PlatformError::CoreThreadPanicked`] if the logic
    /// thread panicked.
    pub fn run(self) -> Result<(), PlatformError> {
        info!(target: "engine", "Starting engine runtime (TPS: {})", self.tps);

        let (frame_tx, frame_rx) = bounded(FRAME_CHANNEL_CAPACITY);
        let core_handle = self.orchestrator.spawn_core_thread(frame_tx, self.tps);
        info!(
            target: "engine",
            "Core logic thread spawned (input channel capacity: {})",
            self.channel_capacity
        );

        let platform = Platform::new(self.event_tx, frame_rx, self.world_size);
        let platform_result = platform.run();
        if let Err(e) = &platform_result {
            error!(target: "engine", "Platform error: {}", e);
        }
        info!(target: "engine", "Platform event loop exited");

        // Platform is dropped by now, so the core thread sees a disconnect
        let core_result = core_handle.join().map_err(|_| PlatformError::CoreThreadPanicked);
        match &core_result {
            Ok(()) => info!(target: "engine", "Core thread terminated cleanly"),
            Err(e) => error!(target: "engine", "{}", e),
        }

        info!(target: "engine", "Engine shutdown complete");
        platform_result.and(core_result)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
