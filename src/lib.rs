// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app;
pub mod error;
pub mod format;
pub mod runtime;
pub mod sentences;
pub mod session;
pub mod text;
pub mod ui;

/// Fixed poll interval of the session loop, in milliseconds.
pub const TICK_RATE_MS: u64 = 100;

/// How far the session clock advances per tick, in hundredths of a second.
/// Timing resolution is one tick; the clock accumulates once per tick
/// whether or not a key arrived.
pub const TICK_HUNDREDTHS: u32 = 10;
