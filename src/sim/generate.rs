//! Procedural course generation
//!
//! Holes are laid out one after another: each tee pad sits a short walk from
//! the previous basket, and each basket is thrown roughly in the direction the
//! tee faces. A candidate hole is rejected if its (padded) bounding rectangle
//! overlaps an earlier hole. Trees are scattered over the whole course area
//! afterwards.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Circle, collide};
use super::course::{Course, Hole, Rect, TeePad, Tree};
use crate::consts::*;
use crate::{bearing, polar_to_cartesian};

/// Placement attempts per hole before generation gives up
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Tunables for [`generate_course`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseParams {
    pub hole_count: u32,
    /// Tee to basket distance range (m)
    pub min_hole_length: f32,
    pub max_hole_length: f32,
    /// Basket may sit this far either side of the tee facing (radians)
    pub max_basket_deviation: f32,
    /// Walk from one basket to the next tee (m)
    pub min_tee_offset: f32,
    pub max_tee_offset: f32,
    /// Next tee faces within this angle of the previous hole's line (radians)
    pub max_tee_turn: f32,
    /// Padding around each hole's rectangle when testing for overlap (m)
    pub hole_margin: f32,
    /// Trees per square meter of course area
    pub tree_density: f32,
    pub max_trees: usize,
    pub min_tree_radius: f32,
    pub max_tree_radius: f32,
    /// Keep trees at least this far from tee pads and baskets (m)
    pub tree_clearance: f32,
}

impl Default for CourseParams {
    fn default() -> Self {
        Self {
            hole_count: 9,
            min_hole_length: 30.0,
            max_hole_length: 427.0,
            max_basket_deviation: FRAC_PI_4,
            min_tee_offset: 10.0,
            max_tee_offset: 40.0,
            max_tee_turn: FRAC_PI_2,
            hole_margin: 10.0,
            tree_density: 0.002,
            max_trees: 4000,
            min_tree_radius: TREE_MIN_RADIUS,
            max_tree_radius: TREE_MAX_RADIUS,
            tree_clearance: 3.0,
        }
    }
}

impl CourseParams {
    /// Copy with every sampled range in order and every angle or margin
    /// non-negative. Non-finite values fall back to the defaults.
    pub fn normalized(&self) -> Self {
        let d = Self::default();
        let (min_hole_length, max_hole_length) = ordered(
            self.min_hole_length,
            self.max_hole_length,
            (d.min_hole_length, d.max_hole_length),
        );
        let (min_tee_offset, max_tee_offset) = ordered(
            self.min_tee_offset,
            self.max_tee_offset,
            (d.min_tee_offset, d.max_tee_offset),
        );
        let (min_tree_radius, max_tree_radius) = ordered(
            self.min_tree_radius.max(0.0),
            self.max_tree_radius.max(0.0),
            (d.min_tree_radius, d.max_tree_radius),
        );
        Self {
            min_hole_length,
            max_hole_length,
            min_tee_offset,
            max_tee_offset,
            min_tree_radius,
            max_tree_radius,
            max_basket_deviation: non_negative(self.max_basket_deviation, d.max_basket_deviation),
            max_tee_turn: non_negative(self.max_tee_turn, d.max_tee_turn),
            hole_margin: non_negative(self.hole_margin, d.hole_margin),
            tree_density: non_negative(self.tree_density, d.tree_density),
            ..self.clone()
        }
    }
}

fn ordered(a: f32, b: f32, fallback: (f32, f32)) -> (f32, f32) {
    if a.is_finite() && b.is_finite() {
        (a.min(b), a.max(b))
    } else {
        fallback
    }
}

fn non_negative(v: f32, fallback: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { fallback }
}

/// Generate a complete course. The first tee sits at the origin facing +y.
///
/// If a hole cannot be placed within [`MAX_PLACEMENT_ATTEMPTS`] the course
/// ends early with the holes placed so far.
pub fn generate_course<R: Rng>(rng: &mut R, params: &CourseParams) -> Course {
    let normalized = params.normalized();
    if normalized != *params {
        log::warn!("Course parameters out of range, using {:?}", normalized);
    }
    let params = &normalized;
    let holes = place_holes(rng, params);
    let trees = scatter_trees(rng, params, &holes);
    log::info!(
        "Generated course: {} holes, {} trees, par {}",
        holes.len(),
        trees.len(),
        holes.iter().map(Hole::par).sum::<u32>()
    );
    Course::new(holes, trees)
}

fn place_holes<R: Rng>(rng: &mut R, params: &CourseParams) -> Vec<Hole> {
    let mut holes: Vec<Hole> = Vec::with_capacity(params.hole_count as usize);
    let mut placed: Vec<Rect> = Vec::with_capacity(params.hole_count as usize);

    for number in 1..=params.hole_count {
        let mut accepted = None;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let tee_pad = match holes.last() {
                None => TeePad::new(Vec2::ZERO, FRAC_PI_2),
                Some(prev) => next_tee(rng, params, prev),
            };
            let candidate = random_hole(rng, params, number, tee_pad);
            let rect = candidate.bounds().padded(params.hole_margin);
            if placed.iter().all(|other| !other.overlaps(&rect)) {
                accepted = Some((candidate, rect));
                break;
            }
        }

        match accepted {
            Some((hole, rect)) => {
                log::debug!(
                    "Hole {}: {:.0} m, par {}",
                    hole.number,
                    hole.distance(),
                    hole.par()
                );
                holes.push(hole);
                placed.push(rect);
            }
            None => {
                log::warn!(
                    "Could not place hole {} after {} attempts, course ends at {} holes",
                    number,
                    MAX_PLACEMENT_ATTEMPTS,
                    holes.len()
                );
                break;
            }
        }
    }

    holes
}

/// Tee pad a short walk from the previous basket
fn next_tee<R: Rng>(rng: &mut R, params: &CourseParams, prev: &Hole) -> TeePad {
    let walk = rng.random_range(params.min_tee_offset..=params.max_tee_offset);
    let pos = prev.basket.pos + polar_to_cartesian(walk, rng.random_range(0.0..TAU));
    let line = bearing(prev.tee_pad.pos, prev.basket.pos);
    let facing = line + rng.random_range(-params.max_tee_turn..=params.max_tee_turn);
    TeePad::new(pos, facing)
}

fn random_hole<R: Rng>(rng: &mut R, params: &CourseParams, number: u32, tee_pad: TeePad) -> Hole {
    let length = rng.random_range(params.min_hole_length..=params.max_hole_length);
    let deviation = rng.random_range(-params.max_basket_deviation..=params.max_basket_deviation);
    Hole::from_tee(number, tee_pad, length, tee_pad.facing + deviation)
}

fn scatter_trees<R: Rng>(rng: &mut R, params: &CourseParams, holes: &[Hole]) -> Vec<Tree> {
    let Some(area) = holes
        .iter()
        .map(|h| h.bounds().padded(params.hole_margin))
        .reduce(|acc, r| acc.union(&r))
    else {
        return Vec::new();
    };

    let size = area.size();
    let count = ((size.x * size.y * params.tree_density).round() as usize).min(params.max_trees);

    let keep_clear: Vec<Circle> = holes
        .iter()
        .flat_map(|h| {
            let tee = h.tee_pad.bounding_circle();
            [
                Circle::new(tee.center, tee.radius + params.tree_clearance),
                Circle::new(h.basket.pos, h.basket.radius + params.tree_clearance),
            ]
        })
        .collect();

    let mut trees = Vec::with_capacity(count);
    for _ in 0..count {
        let tree = Tree {
            pos: Vec2::new(
                rng.random_range(area.min.x..=area.max.x),
                rng.random_range(area.min.y..=area.max.y),
            ),
            radius: rng.random_range(params.min_tree_radius..=params.max_tree_radius),
        };
        if keep_clear.iter().all(|zone| !collide(zone, &tree)) {
            trees.push(tree);
        }
    }
    trees
}
