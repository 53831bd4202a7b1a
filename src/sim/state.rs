//! Game state and core simulation types
//!
//! Everything the tick loop reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::TreeHitGuard;
use super::course::Course;
use super::disc::Disc;
use super::generate::generate_course;
use super::throw::Throw;
use crate::camera::Camera;
use crate::hud::{AimDial, HudMessage, PowerMeter};
use crate::settings::Settings;

/// Phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// A hole is in play
    Playing,
    /// Every hole has been holed out
    CourseComplete,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CourseGenerated { holes: usize, trees: usize },
    CourseReset,
    ThrowLaunched { hole: u32, count: u32, velocity: f32 },
    TreeHit { tree: usize },
    ThrowCompleted { hole: u32, count: u32, distance: f32 },
    HoleCompleted { hole: u32, score: u32, par: u32, distance: f32 },
    CourseCompleted { strokes: u32, par: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the run started from
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: Settings,
    pub phase: GamePhase,
    pub course: Course,
    /// The throw being planned or flown
    pub throw: Throw,
    pub camera: Camera,
    pub aim: AimDial,
    pub power: PowerMeter,
    pub tree_guard: TreeHitGuard,
    pub message: Option<HudMessage>,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub quit_requested: bool,
}

impl GameState {
    /// Generate a course from `seed` and stand on the first tee
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let course = generate_course(&mut rng, &settings.course);
        let mut state = Self::with_course(course, settings);
        state.seed = seed;
        state.rng = rng;
        state.events.push(GameEvent::CourseGenerated {
            holes: state.course.holes.len(),
            trees: state.course.trees.len(),
        });
        state
    }

    /// Play a prebuilt course (seeded with 0 for tree deflections)
    pub fn with_course(course: Course, settings: Settings) -> Self {
        let camera = Camera::new(
            settings.viewport_width,
            settings.viewport_height,
            settings.zoom,
            settings.zoom_min,
            settings.zoom_max,
        );
        let throw = Throw::new(1, Disc::new(Vec2::ZERO, settings.disc), 0.0);
        let mut state = Self {
            seed: 0,
            rng: Pcg32::seed_from_u64(0),
            settings,
            phase: GamePhase::Playing,
            course,
            throw,
            camera,
            aim: AimDial::default(),
            power: PowerMeter::default(),
            tree_guard: TreeHitGuard::default(),
            message: None,
            events: Vec::new(),
            time_ticks: 0,
            quit_requested: false,
        };
        state.start_current_hole();
        state
    }

    /// Stand on the current hole's tee with a fresh first throw.
    /// Ends the round if there is no hole left.
    pub fn start_current_hole(&mut self) {
        let Some(tee) = self.course.current_hole().map(|h| h.tee_pad) else {
            self.phase = GamePhase::CourseComplete;
            return;
        };
        let mut disc = self.throw.disc.clone();
        disc.place_at(tee.pos);
        self.throw = Throw::new(1, disc, tee.facing);
        self.phase = GamePhase::Playing;
        self.aim.reset();
        self.power.reset();
        self.tree_guard.clear();
        self.camera.look_at(tee.pos);
    }

    /// Start the same course over from hole 1
    pub fn reset_course(&mut self) {
        log::info!("Resetting course");
        self.course.restart();
        self.message = None;
        self.start_current_hole();
        self.events.push(GameEvent::CourseReset);
    }

    /// Replace the course with a freshly generated one
    pub fn new_course(&mut self) {
        self.course = generate_course(&mut self.rng, &self.settings.course);
        self.message = None;
        self.start_current_hole();
        self.events.push(GameEvent::CourseGenerated {
            holes: self.course.holes.len(),
            trees: self.course.trees.len(),
        });
    }

    pub fn current_hole_number(&self) -> Option<u32> {
        self.course.current_hole().map(|h| h.number)
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.message = Some(HudMessage::new(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::throw::ThrowStatus;

    #[test]
    fn test_new_state_on_first_tee() {
        let state = GameState::new(12345, Settings::default());
        let tee = state.course.holes[0].tee_pad;
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.throw.count, 1);
        assert_eq!(state.throw.status, ThrowStatus::Planning);
        assert_eq!(state.throw.disc.pos, tee.pos);
        assert_eq!(state.throw.facing_angle, tee.facing);
        assert_eq!(state.camera.center, tee.pos);
        assert!(matches!(state.events[0], GameEvent::CourseGenerated { .. }));
    }

    #[test]
    fn test_empty_course_is_complete() {
        let state = GameState::with_course(Course::new(vec![], vec![]), Settings::default());
        assert_eq!(state.phase, GamePhase::CourseComplete);
    }

    #[test]
    fn test_reversed_zoom_settings_still_start() {
        let settings = Settings::from_json(r#"{"zoom_min":2.0,"zoom_max":1.0}"#).unwrap();
        let state = GameState::new(1, settings);
        assert_eq!(state.camera.zoom_min, 1.0);
        assert_eq!(state.camera.zoom_max, 2.0);
        assert!(state.camera.zoom >= 1.0 && state.camera.zoom <= 2.0);
    }

    #[test]
    fn test_reversed_hole_length_settings_still_start() {
        let settings =
            Settings::from_json(r#"{"course":{"min_hole_length":500.0,"max_hole_length":30.0}}"#)
                .unwrap();
        let state = GameState::new(1, settings);
        assert!(!state.course.holes.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_snapshot_restores_state_and_rng() {
        use rand::Rng;

        let mut state = GameState::new(77, Settings::default());
        state.time_ticks = 42;
        state.aim.nudge_left();
        let json = serde_json::to_string(&state).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.seed, 77);
        assert_eq!(restored.time_ticks, 42);
        assert_eq!(restored.phase, state.phase);
        assert_eq!(restored.course.holes.len(), state.course.holes.len());
        assert_eq!(restored.course.trees.len(), state.course.trees.len());
        assert_eq!(restored.throw.count, state.throw.count);
        assert!(restored.events.is_empty());
        assert_eq!(restored.rng.random::<u64>(), state.rng.random::<u64>());
    }

    #[test]
    fn test_new_course_differs() {
        let mut state = GameState::new(1, Settings::default());
        let first = state.course.holes[0].basket;
        state.new_course();
        assert_ne!(state.course.holes[0].basket, first);
        assert_eq!(state.throw.count, 1);
    }
}
