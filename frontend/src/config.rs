use log::Level;

/// Height of the fixed navigation bar; hero text starts fading once it reaches it.
pub const NAVBAR_HEIGHT: f64 = 80.0;

/// Scroll distance over which hero text fades from opaque to invisible.
pub const FADE_DISTANCE: f64 = 300.0;

/// Past this scroll offset the navigation bar switches to its solid style.
pub const NAV_SOLID_AFTER: f64 = 600.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
