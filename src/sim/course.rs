//! Course geometry and hole sequencing

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Circle, Collider};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Smallest rectangle containing both points
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center(center: Vec2, half_size: Vec2) -> Self {
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    pub fn padded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    pub fn union(&self, other: &Rect) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Interiors intersect (shared edges are not an overlap)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub pos: Vec2,
    pub radius: f32,
}

impl Collider for Tree {
    fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    pub pos: Vec2,
    pub radius: f32,
}

impl Basket {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: BASKET_RADIUS,
        }
    }
}

impl Collider for Basket {
    fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// Launch area for a hole
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeePad {
    pub pos: Vec2,
    /// Default throwing direction (radians)
    pub facing: f32,
}

impl TeePad {
    pub fn new(pos: Vec2, facing: f32) -> Self {
        Self { pos, facing }
    }

    /// Footprint as (width, length); the long side points along `facing`
    pub fn size(&self) -> Vec2 {
        Vec2::new(TEE_PAD_WIDTH, TEE_PAD_LENGTH)
    }

    /// Circle enclosing the pad
    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.pos, self.size().length() * 0.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleStatus {
    Upcoming,
    Current,
    Complete,
}

/// Par for a hole of the given length in meters
pub fn par_for_distance(meters: f32) -> u32 {
    if meters < 75.0 {
        2
    } else if meters < 175.0 {
        3
    } else if meters < 320.0 {
        4
    } else if meters < 400.0 {
        5
    } else {
        6
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hole {
    /// 1-based hole number
    pub number: u32,
    pub tee_pad: TeePad,
    pub basket: Basket,
    pub status: HoleStatus,
    /// Strokes taken, set on completion
    pub score: Option<u32>,
}

impl Hole {
    pub fn new(number: u32, tee_pad: TeePad, basket: Basket) -> Self {
        Self {
            number,
            tee_pad,
            basket,
            status: HoleStatus::Upcoming,
            score: None,
        }
    }

    /// Build a hole whose basket lies `distance` meters from the tee at `angle`
    pub fn from_tee(number: u32, tee_pad: TeePad, distance: f32, angle: f32) -> Self {
        let basket = Basket::new(tee_pad.pos + polar_to_cartesian(distance, angle));
        Self::new(number, tee_pad, basket)
    }

    /// Straight-line length from tee to basket (m)
    pub fn distance(&self) -> f32 {
        self.tee_pad.pos.distance(self.basket.pos)
    }

    pub fn distance_feet(&self) -> f32 {
        self.distance() * METERS_TO_FEET
    }

    pub fn par(&self) -> u32 {
        par_for_distance(self.distance())
    }

    /// Rectangle spanning tee pad and basket
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.tee_pad.pos, self.basket.pos)
    }
}

/// An ordered set of holes sharing one pool of trees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub holes: Vec<Hole>,
    pub trees: Vec<Tree>,
    current: usize,
    finished: bool,
}

impl Course {
    /// Holes must be in play order; the first one becomes current
    pub fn new(holes: Vec<Hole>, trees: Vec<Tree>) -> Self {
        let mut course = Self {
            holes,
            trees,
            current: 0,
            finished: false,
        };
        course.restart();
        course
    }

    /// Clear all scores and start again from the first hole
    pub fn restart(&mut self) {
        for hole in &mut self.holes {
            hole.status = HoleStatus::Upcoming;
            hole.score = None;
        }
        self.current = 0;
        self.finished = self.holes.is_empty();
        if let Some(first) = self.holes.first_mut() {
            first.status = HoleStatus::Current;
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The hole in play, `None` once every hole is done
    pub fn current_hole(&self) -> Option<&Hole> {
        if self.finished {
            None
        } else {
            self.holes.get(self.current)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Record `score` on the current hole and move to the next one.
    /// Returns the new current hole, or `None` when the course is over.
    pub fn advance(&mut self, score: u32) -> Option<&Hole> {
        if self.finished {
            return None;
        }
        if let Some(hole) = self.holes.get_mut(self.current) {
            hole.status = HoleStatus::Complete;
            hole.score = Some(score);
        }
        if self.current + 1 >= self.holes.len() {
            self.finished = true;
            return None;
        }
        self.current += 1;
        self.holes[self.current].status = HoleStatus::Current;
        self.holes.get(self.current)
    }

    /// Union of all hole rectangles
    pub fn bounds(&self) -> Option<Rect> {
        self.holes
            .iter()
            .map(Hole::bounds)
            .reduce(|acc, r| acc.union(&r))
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(Hole::par).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn straight_hole(number: u32, x: f32, length: f32) -> Hole {
        Hole::from_tee(number, TeePad::new(Vec2::new(x, 0.0), FRAC_PI_2), length, FRAC_PI_2)
    }

    #[test]
    fn test_par_bands() {
        assert_eq!(par_for_distance(50.0), 2);
        assert_eq!(par_for_distance(100.0), 3);
        assert_eq!(par_for_distance(300.0), 4);
        assert_eq!(par_for_distance(390.0), 5);
        assert_eq!(par_for_distance(450.0), 6);
    }

    #[test]
    fn test_par_band_edges_belong_to_upper_band() {
        assert_eq!(par_for_distance(74.99), 2);
        assert_eq!(par_for_distance(75.0), 3);
        assert_eq!(par_for_distance(175.0), 4);
        assert_eq!(par_for_distance(320.0), 5);
        assert_eq!(par_for_distance(400.0), 6);
    }

    #[test]
    fn test_hole_distance_and_feet() {
        let hole = straight_hole(1, 0.0, 100.0);
        assert!((hole.distance() - 100.0).abs() < 1e-3);
        assert!((hole.distance_feet() - 328.084).abs() < 0.01);
        assert_eq!(hole.par(), 3);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::from_points(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::from_points(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        let c = Rect::from_points(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_first_hole_is_current() {
        let course = Course::new(vec![straight_hole(1, 0.0, 60.0), straight_hole(2, 100.0, 60.0)], vec![]);
        assert_eq!(course.holes[0].status, HoleStatus::Current);
        assert_eq!(course.holes[1].status, HoleStatus::Upcoming);
        assert_eq!(course.current_hole().map(|h| h.number), Some(1));
    }

    #[test]
    fn test_advance_through_course() {
        let mut course = Course::new(vec![straight_hole(1, 0.0, 60.0), straight_hole(2, 100.0, 60.0)], vec![]);

        let next = course.advance(3).map(|h| h.number);
        assert_eq!(next, Some(2));
        assert_eq!(course.holes[0].status, HoleStatus::Complete);
        assert_eq!(course.holes[0].score, Some(3));
        assert_eq!(course.holes[1].status, HoleStatus::Current);

        assert!(course.advance(2).is_none());
        assert!(course.is_finished());
        assert!(course.current_hole().is_none());
        assert_eq!(course.holes[1].score, Some(2));

        // Past the end nothing changes
        assert!(course.advance(9).is_none());
        assert_eq!(course.holes[1].score, Some(2));
    }

    #[test]
    fn test_restart_clears_scores() {
        let mut course = Course::new(vec![straight_hole(1, 0.0, 60.0), straight_hole(2, 100.0, 60.0)], vec![]);
        course.advance(4);
        course.restart();
        assert_eq!(course.current_index(), 0);
        assert!(course.holes.iter().all(|h| h.score.is_none()));
        assert_eq!(course.holes[0].status, HoleStatus::Current);
    }

    #[test]
    fn test_course_bounds() {
        let course = Course::new(vec![straight_hole(1, 0.0, 60.0), straight_hole(2, 100.0, 80.0)], vec![]);
        let bounds = course.bounds().unwrap();
        assert!((bounds.min.x - 0.0).abs() < 1e-3);
        assert!((bounds.max.x - 100.0).abs() < 1e-3);
        assert!((bounds.max.y - 80.0).abs() < 1e-3);
    }
}
