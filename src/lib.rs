//=========================================================================
// Sam and Sadie - Library Root
//
// A two-character co-op platformer level: switch between Sam and Sadie,
// use each one's jump and ability, trigger the moving platform and get
// both characters to the goal.
//
// Module map:
// - `core`: input, physics, tweening, render snapshots and the logic
//   thread orchestrator
// - `level`: characters, controls, layout, triggers, win rules, HUD and
//   the per-run `Session`
// - `config`: TOML level configuration
// - `platform` (private): Winit window, OS input and pixel rendering
//
// Typical usage:
// ```no_run
// use sam_and_sadie::EngineBuilder;
//
// fn main() -> anyhow::Result<()> {
//     EngineBuilder::new().build()?.run()?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod config;
pub mod core;
pub mod level;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` holds OS-specific logic (window, Winit integration, frame
// buffer) and is not part of the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
