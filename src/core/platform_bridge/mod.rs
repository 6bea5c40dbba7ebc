//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the window thread and the logic thread.
//
// Components:
// - `interface`: event and error types crossing the thread boundary
// - `event_collector`: core-side draining of platform events
//
// Frames travel the other way as `core::frame::FrameSnapshot`.
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
