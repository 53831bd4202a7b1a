//! Circle collision and hit response
//!
//! Everything on the course collides as a circle: the disc, trees and baskets.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::disc::Disc;
use crate::consts::*;

/// A collision circle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Anything that occupies a circle on the course
pub trait Collider {
    fn circle(&self) -> Circle;
}

impl Collider for Circle {
    fn circle(&self) -> Circle {
        *self
    }
}

impl Collider for Disc {
    fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// True when the two circles overlap. Touching edges do not count.
#[inline]
pub fn collide(a: &impl Collider, b: &impl Collider) -> bool {
    let a = a.circle();
    let b = b.circle();
    a.center.distance(b.center) < a.radius + b.radius
}

/// Randomly knock the disc off course after clipping a tree
pub fn deflect<R: Rng>(disc: &mut Disc, rng: &mut R) {
    disc.velocity_angle += rng.random_range(0.0..TAU);
    disc.velocity *= rng.random_range(0.0..TREE_MAX_VELOCITY_KEEP);
}

/// Short invincibility after a tree hit so a disc lodged in the canopy
/// is not deflected again on every tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeHitGuard {
    active: bool,
    elapsed: f32,
    limit: f32,
}

impl TreeHitGuard {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a window of `limit` seconds
    pub fn arm(&mut self, limit: f32) {
        self.active = true;
        self.elapsed = 0.0;
        self.limit = limit;
    }

    /// Start a window of random length
    pub fn arm_random<R: Rng>(&mut self, rng: &mut R) {
        self.arm(rng.random_range(TREE_GUARD_MIN_SECS..=TREE_GUARD_MAX_SECS));
    }

    /// Count down the window
    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        if self.elapsed < self.limit {
            self.elapsed += dt;
        } else {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Deflect the disc off the first tree it overlaps unless the guard is up.
/// Returns the index of the tree that was hit.
pub fn resolve_tree_hits<'a, C, R>(
    disc: &mut Disc,
    trees: impl IntoIterator<Item = &'a C>,
    guard: &mut TreeHitGuard,
    rng: &mut R,
) -> Option<usize>
where
    C: Collider + 'a,
    R: Rng,
{
    if guard.is_active() {
        return None;
    }
    let hit = trees.into_iter().position(|tree| collide(&*disc, tree))?;
    deflect(disc, rng);
    guard.arm_random(rng);
    Some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::disc::FlightNumbers;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_overlap_hits() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(1.5, 0.0), 1.0);
        assert!(collide(&a, &b));
    }

    #[test]
    fn test_tangent_circles_miss() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(3.0, 0.0), 2.0);
        assert!(!collide(&a, &b));
        assert!(!collide(&b, &a));
    }

    #[test]
    fn test_disc_hits_basket() {
        let mut disc = Disc::new(Vec2::new(0.0, 49.7), FlightNumbers::default());
        let basket = Circle::new(Vec2::new(0.0, 50.0), BASKET_RADIUS);
        assert!(collide(&disc, &basket));
        disc.pos.y = 49.5;
        assert!(!collide(&disc, &basket));
    }

    #[test]
    fn test_deflect_only_slows() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let mut disc = Disc::new(Vec2::ZERO, FlightNumbers::default());
            disc.velocity = 20.0;
            deflect(&mut disc, &mut rng);
            assert!(disc.velocity >= 0.0 && disc.velocity <= 20.0 * TREE_MAX_VELOCITY_KEEP);
            assert!(disc.velocity_angle >= 0.0 && disc.velocity_angle < TAU);
        }
    }

    #[test]
    fn test_guard_expires() {
        let mut guard = TreeHitGuard::default();
        guard.arm(0.1);
        assert!(guard.is_active());
        for _ in 0..6 {
            guard.tick(SIM_DT);
        }
        assert!(guard.is_active());
        // elapsed reaches the limit, then the next tick disarms
        guard.tick(SIM_DT);
        guard.tick(SIM_DT);
        assert!(!guard.is_active());
    }

    #[test]
    fn test_guard_blocks_second_hit() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut guard = TreeHitGuard::default();
        let trees = [
            Circle::new(Vec2::new(0.5, 0.0), 1.0),
            Circle::new(Vec2::new(-0.5, 0.0), 1.0),
        ];
        let mut disc = Disc::new(Vec2::ZERO, FlightNumbers::default());
        disc.velocity = 20.0;

        assert_eq!(resolve_tree_hits(&mut disc, &trees, &mut guard, &mut rng), Some(0));
        let (v, angle) = (disc.velocity, disc.velocity_angle);

        guard.tick(SIM_DT);
        assert_eq!(resolve_tree_hits(&mut disc, &trees, &mut guard, &mut rng), None);
        assert_eq!(disc.velocity, v);
        assert_eq!(disc.velocity_angle, angle);
    }

    proptest! {
        #[test]
        fn prop_collide_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0, ar in 0.0f32..10.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0, br in 0.0f32..10.0,
        ) {
            let a = Circle::new(Vec2::new(ax, ay), ar);
            let b = Circle::new(Vec2::new(bx, by), br);
            prop_assert_eq!(collide(&a, &b), collide(&b, &a));
        }
    }
}
