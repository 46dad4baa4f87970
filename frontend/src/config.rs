use log::Level;

/// Wall-clock length of a stat reveal.
pub const REVEAL_DURATION_MS: u32 = 2000;
/// Number of discrete updates in a reveal.
pub const REVEAL_STEPS: u32 = 60;
/// Fraction of a region that has to be on screen before it counts as seen.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Radius of the progress ring in SVG user units (viewBox is 100x100).
pub const RING_RADIUS: f64 = 40.0;

pub const FLOATING_PARTICLES: usize = 15;
pub const BURST_PARTICLES: usize = 6;
pub const BURST_RADIUS_PX: f64 = 25.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Tick-level tracing while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
