//! Disc Golf - a top-down disc golf game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (disc physics, throws, collisions, course)
//! - `camera`: World to screen viewport transform
//! - `hud`: Aim dial, power meter, hit messages and off-screen pointers
//! - `renderer`: Backend-agnostic draw list built from the game state
//! - `scorecard`: Per-hole strokes versus par
//! - `settings`: Data-driven tuning loaded from JSON

pub mod camera;
pub mod hud;
pub mod renderer;
pub mod scorecard;
pub mod settings;
pub mod sim;

pub use camera::Camera;
pub use scorecard::Scorecard;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Per-tick velocity multiplier from air drag
    pub const AIR_DRAG: f32 = 0.996;
    /// Throws end once the disc drops below this speed (m/s)
    pub const STOP_VELOCITY: f32 = 0.5;
    /// Launch speed at full power, about 60 mph (m/s)
    pub const MAX_THROW_SPEED: f32 = 27.0;

    /// Disc defaults
    pub const DISC_RADIUS: f32 = 0.12;
    pub const DISC_SPEED: f32 = 7.0;
    pub const DISC_GLIDE: f32 = 5.0;
    pub const DISC_TURN: f32 = -2.0;
    pub const DISC_FADE: f32 = 1.0;

    /// Regulation basket opening radius (m)
    pub const BASKET_RADIUS: f32 = 0.27051;
    /// Tee pad footprint (m)
    pub const TEE_PAD_WIDTH: f32 = 1.5;
    pub const TEE_PAD_LENGTH: f32 = 3.0;

    pub const TREE_MIN_RADIUS: f32 = 0.25;
    pub const TREE_MAX_RADIUS: f32 = 5.0;

    /// Tree deflection: velocity multiplier upper bound
    pub const TREE_MAX_VELOCITY_KEEP: f32 = 0.9;
    /// Tree deflection: invincibility window bounds (seconds)
    pub const TREE_GUARD_MIN_SECS: f32 = 0.1;
    pub const TREE_GUARD_MAX_SECS: f32 = 1.0;

    /// Aim dial step per key press and limit (radians)
    pub const AIM_STEP: f32 = PI / 64.0;
    pub const AIM_LIMIT: f32 = PI / 2.0;

    /// Power meter range (percent)
    pub const POWER_MAX: f32 = 100.0;

    /// Camera zoom in meters per pixel
    pub const ZOOM_MIN: f32 = 0.001;
    pub const ZOOM_MAX: f32 = 1.0;
    pub const ZOOM_DEFAULT: f32 = 0.1;
    pub const ZOOM_FACTOR: f32 = 1.1;

    pub const VIEWPORT_WIDTH: f32 = 1024.0;
    pub const VIEWPORT_HEIGHT: f32 = 768.0;

    pub const METERS_TO_FEET: f32 = 3.28084;

    /// How long a HUD message stays on screen (seconds)
    pub const MESSAGE_SECS: f32 = 2.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of the direction from `from` to `to`
#[inline]
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
