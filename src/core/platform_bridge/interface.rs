//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core contract: the events the window thread sends and the
// errors it can fail with.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core over the input channel.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for a redraw.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Window and event loop failures.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(String),

    #[error("Event loop error: {0}")]
    EventLoopExecution(String),

    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    #[error("Frame buffer error: {0}")]
    Surface(#[from] pixels::Error),

    #[error("Core thread panicked")]
    CoreThreadPanicked,
}
