//! Heads-up display state
//!
//! The widgets here only hold values; drawing them is the renderer's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::bearing;
use crate::camera::Camera;
use crate::consts::*;

/// Pixels between an off-screen pointer and the screen edge
pub const POINTER_MARGIN: f32 = 24.0;

/// Aim offset from the lie's facing direction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AimDial {
    /// Radians, positive is left (counter-clockwise)
    pub angle: f32,
}

impl AimDial {
    pub fn nudge_left(&mut self) {
        self.angle = (self.angle + AIM_STEP).min(AIM_LIMIT);
    }

    pub fn nudge_right(&mut self) {
        self.angle = (self.angle - AIM_STEP).max(-AIM_LIMIT);
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }
}

/// Charge bar: fills while held, wraps to empty past full
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerMeter {
    /// Percent, 0 to 100
    pub power: f32,
    pub charging: bool,
}

impl PowerMeter {
    /// One frame of charging
    pub fn update(&mut self) {
        if !self.charging {
            return;
        }
        self.power += 1.0;
        if self.power > POWER_MAX {
            self.power = 0.0;
        }
    }

    /// Power as 0..=1
    pub fn fraction(&self) -> f32 {
        (self.power / POWER_MAX).clamp(0.0, 1.0)
    }

    pub fn set_fraction(&mut self, fraction: f32) {
        self.power = fraction.clamp(0.0, 1.0) * POWER_MAX;
    }

    pub fn reset(&mut self) {
        self.power = 0.0;
        self.charging = false;
    }
}

/// Transient text shown over the course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudMessage {
    pub text: String,
    /// Seconds left on screen
    pub remaining: f32,
}

impl HudMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            remaining: MESSAGE_SECS,
        }
    }

    /// Count down; returns false once expired
    pub fn update(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    Basket,
    TeePad,
    Disc,
}

/// Arrow at the screen edge toward something outside the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffscreenPointer {
    pub target: PointerTarget,
    /// Screen position of the arrow (pixels)
    pub screen_pos: Vec2,
    /// World bearing from the view center to the target
    pub angle: f32,
    /// World distance from the view center (m)
    pub distance: f32,
}

/// Pointer toward `pos`, or `None` if it is already visible
pub fn offscreen_pointer(camera: &Camera, target: PointerTarget, pos: Vec2) -> Option<OffscreenPointer> {
    if camera.contains(pos) {
        return None;
    }

    let world_dir = pos - camera.center;
    let screen_dir = Vec2::new(world_dir.x, -world_dir.y);
    let half = (camera.viewport_size() * 0.5 - Vec2::splat(POINTER_MARGIN)).max(Vec2::ZERO);

    let tx = if screen_dir.x != 0.0 { half.x / screen_dir.x.abs() } else { f32::INFINITY };
    let ty = if screen_dir.y != 0.0 { half.y / screen_dir.y.abs() } else { f32::INFINITY };
    let t = tx.min(ty);

    Some(OffscreenPointer {
        target,
        screen_pos: camera.viewport_size() * 0.5 + screen_dir * t,
        angle: bearing(camera.center, pos),
        distance: world_dir.length(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_aim_clamped() {
        let mut aim = AimDial::default();
        for _ in 0..100 {
            aim.nudge_left();
        }
        assert_eq!(aim.angle, AIM_LIMIT);
        for _ in 0..200 {
            aim.nudge_right();
        }
        assert_eq!(aim.angle, -AIM_LIMIT);
        aim.reset();
        assert_eq!(aim.angle, 0.0);
    }

    #[test]
    fn test_power_charges_and_wraps() {
        let mut meter = PowerMeter::default();
        meter.update();
        assert_eq!(meter.power, 0.0);

        meter.charging = true;
        for _ in 0..100 {
            meter.update();
        }
        assert_eq!(meter.power, 100.0);
        assert_eq!(meter.fraction(), 1.0);
        meter.update();
        assert_eq!(meter.power, 0.0);
    }

    #[test]
    fn test_message_expires() {
        let mut msg = HudMessage::new("You hit a tree!");
        assert!(msg.update(1.0));
        assert!(!msg.update(1.5));
    }

    #[test]
    fn test_visible_target_has_no_pointer() {
        let cam = Camera::default();
        assert!(offscreen_pointer(&cam, PointerTarget::Disc, Vec2::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_pointer_above_screen() {
        let cam = Camera::default();
        let p = offscreen_pointer(&cam, PointerTarget::Basket, Vec2::new(0.0, 500.0)).unwrap();
        assert_eq!(p.target, PointerTarget::Basket);
        assert!((p.screen_pos.x - VIEWPORT_WIDTH / 2.0).abs() < 1e-3);
        assert!((p.screen_pos.y - POINTER_MARGIN).abs() < 1e-3);
        assert!((p.angle - FRAC_PI_2).abs() < 1e-6);
        assert!((p.distance - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_pointer_stays_on_screen() {
        let cam = Camera::default();
        let p = offscreen_pointer(&cam, PointerTarget::TeePad, Vec2::new(-900.0, -300.0)).unwrap();
        assert!(p.screen_pos.x >= POINTER_MARGIN - 1e-3);
        assert!(p.screen_pos.x <= VIEWPORT_WIDTH - POINTER_MARGIN + 1e-3);
        assert!(p.screen_pos.y >= POINTER_MARGIN - 1e-3);
        assert!(p.screen_pos.y <= VIEWPORT_HEIGHT - POINTER_MARGIN + 1e-3);
    }
}
