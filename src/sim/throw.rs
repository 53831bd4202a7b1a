//! Throw lifecycle
//!
//! A throw is one attempt at a hole: it sits in `Planning` while the player
//! aims, flies once launched and ends in `Complete`. Completed throws are
//! never reused; the next attempt is a fresh `Throw` built by [`Throw::next`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::disc::{Disc, PhysicsParams};
use crate::bearing;

/// Lifecycle of a single throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowStatus {
    /// Disc at rest, player aiming and charging power
    Planning,
    /// Disc in the air
    Flying,
    /// Disc came to rest or found the basket
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Throw {
    /// Stroke number within the current hole (1-based)
    pub count: u32,
    pub disc: Disc,
    pub status: ThrowStatus,
    /// Disc positions sampled every tick while moving
    pub flight_path: Vec<Vec2>,
    /// Distance covered in flight (m)
    pub distance: f32,
    /// Default throwing direction for this lie
    pub facing_angle: f32,
    /// Where the disc was when the throw began
    pub start: Vec2,
}

impl Throw {
    pub fn new(count: u32, disc: Disc, facing_angle: f32) -> Self {
        let start = disc.pos;
        Self {
            count,
            disc,
            status: ThrowStatus::Planning,
            flight_path: Vec::new(),
            distance: 0.0,
            facing_angle,
            start,
        }
    }

    /// Release the disc. Only valid while planning; ignored otherwise.
    pub fn launch(&mut self, aim_offset: f32, power: f32, max_speed: f32) -> bool {
        if self.status != ThrowStatus::Planning {
            return false;
        }
        self.disc.velocity_angle = self.facing_angle + aim_offset;
        self.disc.velocity = max_speed * power.clamp(0.0, 1.0);
        self.status = ThrowStatus::Flying;
        true
    }

    /// Advance a flying throw by `dt` seconds. No-op in any other status.
    pub fn update(&mut self, dt: f32, physics: &PhysicsParams) {
        if self.status != ThrowStatus::Flying {
            return;
        }

        self.distance += self.disc.velocity * dt;

        if self.disc.velocity < physics.stop_velocity {
            self.status = ThrowStatus::Complete;
            self.disc.velocity = 0.0;
        }

        if self.disc.is_moving() {
            self.flight_path.push(self.disc.pos);
        }

        self.disc.advance(dt, physics.drag_mode);
    }

    /// Stop the disc where it is (basket hit)
    pub fn complete(&mut self) {
        self.status = ThrowStatus::Complete;
        self.disc.velocity = 0.0;
    }

    pub fn is_flying(&self) -> bool {
        self.status == ThrowStatus::Flying
    }

    /// Build the follow-up throw from the disc's lie, facing `target`.
    /// Returns `None` unless this throw is complete.
    pub fn next(&self, target: Vec2) -> Option<Throw> {
        if self.status != ThrowStatus::Complete {
            return None;
        }
        let facing = bearing(self.disc.pos, target);
        Some(Throw::new(self.count + 1, self.disc.clone(), facing))
    }
}
