use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose reveal/accordion tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Viewport observation
pub const REVEAL_ROOT_MARGIN: &str = "-100px";
pub const REVEAL_THRESHOLD: f64 = 0.0;

// Animation timings, in seconds
pub const SECTION_REVEAL_DURATION: f64 = 0.8;
pub const JOURNEY_STEP_DURATION: f64 = 0.6;
pub const JOURNEY_STEP_STAGGER: f64 = 0.2;
pub const JOURNEY_CONNECTOR_DELAY: f64 = 0.3;
pub const FAQ_ROW_DURATION: f64 = 0.5;
pub const FAQ_ROW_STAGGER: f64 = 0.1;
pub const SECONDARY_REVEAL_DELAY: f64 = 0.2;
