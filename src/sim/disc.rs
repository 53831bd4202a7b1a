//! Disc flight model
//!
//! Arcade physics only: the disc travels in a straight line along its
//! velocity angle, drifts left at low speed (fade) and right at high speed
//! (turn), and loses a fixed fraction of its speed every tick.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fade only acts inside this speed band (m/s)
pub const FADE_MIN_VELOCITY: f32 = 0.1;
pub const FADE_MAX_VELOCITY: f32 = 10.0;
/// Turn only acts above this speed (m/s)
pub const TURN_MIN_VELOCITY: f32 = 20.0;

/// How drag is applied per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragMode {
    /// `v *= AIR_DRAG` once per tick regardless of `dt` (frame-rate dependent)
    #[default]
    PerFrame,
    /// `v *= AIR_DRAG^(dt / SIM_DT)`
    TimeScaled,
}

impl DragMode {
    /// Drag multiplier for a tick of `dt` seconds
    pub fn factor(self, dt: f32) -> f32 {
        match self {
            DragMode::PerFrame => AIR_DRAG,
            DragMode::TimeScaled => AIR_DRAG.powf(dt / SIM_DT),
        }
    }
}

/// Physics parameters shared by every throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub drag_mode: DragMode,
    /// A flying disc below this speed comes to rest
    pub stop_velocity: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            drag_mode: DragMode::PerFrame,
            stop_velocity: STOP_VELOCITY,
        }
    }
}

/// The four flight numbers printed on a disc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightNumbers {
    pub speed: f32,
    pub glide: f32,
    pub turn: f32,
    pub fade: f32,
}

impl Default for FlightNumbers {
    fn default() -> Self {
        Self {
            speed: DISC_SPEED,
            glide: DISC_GLIDE,
            turn: DISC_TURN,
            fade: DISC_FADE,
        }
    }
}

impl FlightNumbers {
    /// Angular drift rate at low speed (rad/s, counter-clockwise)
    pub fn fade_rate(&self) -> f32 {
        FRAC_PI_4 * 0.25 * ((self.fade + 1.0) / 6.0)
    }

    /// Angular drift rate at high speed (rad/s, clockwise)
    pub fn turn_rate(&self) -> f32 {
        FRAC_PI_4 * 0.25 * ((-self.turn + 2.0) / 7.0)
    }
}

/// A disc in flight or at rest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disc {
    pub pos: Vec2,
    pub radius: f32,
    /// Speed (m/s), never negative
    pub velocity: f32,
    /// Direction of travel (radians, not normalized)
    pub velocity_angle: f32,
    pub flight: FlightNumbers,
}

impl Disc {
    pub fn new(pos: Vec2, flight: FlightNumbers) -> Self {
        Self {
            pos,
            radius: DISC_RADIUS,
            velocity: 0.0,
            velocity_angle: 0.0,
            flight,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.velocity > 0.0
    }

    /// Put the disc down at `pos`, at rest
    pub fn place_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.velocity = 0.0;
        self.velocity_angle = 0.0;
    }

    /// Integrate one tick of `dt` seconds
    pub fn advance(&mut self, dt: f32, drag: DragMode) {
        let dir = Vec2::new(self.velocity_angle.cos(), self.velocity_angle.sin());
        self.pos += dir * self.velocity * dt;

        if self.velocity > FADE_MIN_VELOCITY && self.velocity < FADE_MAX_VELOCITY {
            self.velocity_angle += self.flight.fade_rate() * dt;
        }

        if self.velocity > TURN_MIN_VELOCITY {
            self.velocity_angle -= self.flight.turn_rate() * dt;
        }

        self.velocity *= drag.factor(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn disc() -> Disc {
        Disc::new(Vec2::ZERO, FlightNumbers::default())
    }

    #[test]
    fn test_straight_line_at_mid_speed() {
        // 15 m/s is outside both the fade and turn bands
        let mut d = disc();
        d.velocity = 15.0;
        d.velocity_angle = std::f32::consts::FRAC_PI_2;
        d.advance(SIM_DT, DragMode::PerFrame);
        assert!(d.pos.x.abs() < 1e-5);
        assert!((d.pos.y - 15.0 * SIM_DT).abs() < 1e-5);
        assert_eq!(d.velocity_angle, std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_fade_turns_left_at_low_speed() {
        let mut d = disc();
        d.velocity = 5.0;
        d.advance(1.0, DragMode::PerFrame);
        assert!((d.velocity_angle - d.flight.fade_rate()).abs() < 1e-6);
        assert!(d.velocity_angle > 0.0);
    }

    #[test]
    fn test_turn_at_high_speed() {
        let mut d = disc();
        d.velocity = 25.0;
        d.advance(1.0, DragMode::PerFrame);
        // turn -2 gives (2 + 2) / 7 of the base rate, clockwise
        let expected = -FRAC_PI_4 * 0.25 * (4.0 / 7.0);
        assert!((d.velocity_angle - expected).abs() < 1e-6);
    }

    #[test]
    fn test_stable_disc_has_no_turn() {
        let mut d = Disc::new(
            Vec2::ZERO,
            FlightNumbers {
                turn: 2.0,
                ..Default::default()
            },
        );
        d.velocity = 27.0;
        d.advance(SIM_DT, DragMode::PerFrame);
        assert_eq!(d.velocity_angle, 0.0);
    }

    #[test]
    fn test_geometric_drag_decay() {
        let mut d = disc();
        let v0 = 15.0_f32;
        d.velocity = v0;
        let n = 200;
        for _ in 0..n {
            d.advance(SIM_DT, DragMode::PerFrame);
        }
        let expected = v0 * AIR_DRAG.powi(n);
        assert!((d.velocity - expected).abs() / expected < 1e-4);
    }

    #[test]
    fn test_per_frame_drag_ignores_dt() {
        let mut a = disc();
        let mut b = disc();
        a.velocity = 15.0;
        b.velocity = 15.0;
        a.advance(SIM_DT, DragMode::PerFrame);
        b.advance(SIM_DT * 4.0, DragMode::PerFrame);
        assert_eq!(a.velocity, b.velocity);
    }

    #[test]
    fn test_time_scaled_drag() {
        let mut d = disc();
        d.velocity = 15.0;
        d.advance(SIM_DT * 2.0, DragMode::TimeScaled);
        let expected = 15.0 * AIR_DRAG * AIR_DRAG;
        assert!((d.velocity - expected).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_disc_at_rest_never_moves(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            angle in -10.0f32..10.0,
            dt in 0.0f32..1.0,
        ) {
            let mut d = disc();
            d.pos = Vec2::new(x, y);
            d.velocity_angle = angle;
            d.advance(dt, DragMode::PerFrame);
            prop_assert_eq!(d.pos, Vec2::new(x, y));
            prop_assert_eq!(d.velocity, 0.0);
        }

        #[test]
        fn prop_velocity_never_increases(v in 0.0f32..40.0, dt in 0.0f32..0.1) {
            let mut d = disc();
            d.velocity = v;
            d.advance(dt, DragMode::TimeScaled);
            prop_assert!(d.velocity <= v);
            prop_assert!(d.velocity >= 0.0);
        }
    }
}
