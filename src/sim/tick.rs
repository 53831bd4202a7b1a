//! Per-frame simulation tick
//!
//! Input events are applied in arrival order, then the throw is advanced and
//! the disc is checked against the current basket and every tree.

use super::collision::{collide, resolve_tree_hits};
use super::state::{GameEvent, GamePhase, GameState};
use super::throw::ThrowStatus;
use crate::consts::*;
use crate::{bearing, normalize_angle};

/// Extra distance the autoplayer throws past the basket (m)
const AUTOPLAY_OVERSHOOT: f32 = 2.0;

/// A discrete input from the window layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    /// One scroll notch
    Zoom { up: bool },
    /// Mouse drag in pixels
    Pan { dx: f32, dy: f32 },
    /// Replay the current course from hole 1
    ResetCourse,
    /// Generate a new course
    NewCourse,
    /// Start filling the power meter
    ChargeStart,
    /// Release the disc with the current aim and power
    Throw,
    AimLeft,
    AimRight,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
    /// Demo mode - the game aims and throws by itself
    pub autoplay: bool,
}

impl TickInput {
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    let expired = state.message.as_mut().is_some_and(|m| !m.update(dt));
    if expired {
        state.message = None;
    }

    for event in &input.events {
        apply_event(state, *event);
    }

    if state.phase == GamePhase::CourseComplete {
        return;
    }

    state.time_ticks += 1;

    if state.throw.status == ThrowStatus::Complete {
        next_throw(state);
    }

    if input.autoplay {
        autoplay(state, dt);
    }

    state.camera.track(state.throw.disc.pos);

    let was_flying = state.throw.is_flying();
    let physics = state.settings.physics;
    state.throw.update(dt, &physics);

    if was_flying && !resolve_collisions(state) && state.throw.status == ThrowStatus::Complete {
        state.camera.follow = false;
        log::debug!(
            "Throw {} came to rest after {:.1} m",
            state.throw.count,
            state.throw.distance
        );
        state.events.push(GameEvent::ThrowCompleted {
            hole: state.current_hole_number().unwrap_or_default(),
            count: state.throw.count,
            distance: state.throw.distance,
        });
    }

    state.tree_guard.tick(dt);
    state.power.update();
}

fn apply_event(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Quit => state.quit_requested = true,
        InputEvent::Zoom { up } => state.camera.zoom_step(up),
        InputEvent::Pan { dx, dy } => state.camera.pan(dx, dy),
        InputEvent::ResetCourse => state.reset_course(),
        InputEvent::NewCourse => state.new_course(),
        InputEvent::ChargeStart => {
            if state.throw.status == ThrowStatus::Planning {
                state.power.charging = true;
            }
        }
        InputEvent::Throw => launch(state),
        InputEvent::AimLeft => state.aim.nudge_left(),
        InputEvent::AimRight => state.aim.nudge_right(),
    }
}

/// Release the planned throw with the HUD's aim and power
fn launch(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.power.charging = false;
    let launched = state.throw.launch(
        state.aim.angle,
        state.power.fraction(),
        state.settings.max_throw_speed,
    );
    if !launched {
        return;
    }
    state.camera.follow = true;
    log::debug!(
        "Throw {} launched at {:.1} m/s",
        state.throw.count,
        state.throw.disc.velocity
    );
    state.events.push(GameEvent::ThrowLaunched {
        hole: state.current_hole_number().unwrap_or_default(),
        count: state.throw.count,
        velocity: state.throw.disc.velocity,
    });
}

/// Replace a finished throw with the next stroke from the disc's lie
fn next_throw(state: &mut GameState) {
    let Some(target) = state.course.current_hole().map(|h| h.basket.pos) else {
        return;
    };
    if let Some(next) = state.throw.next(target) {
        state.throw = next;
        state.aim.reset();
        state.power.reset();
        state.camera.follow = false;
    }
}

/// Check the disc against the basket and trees. Returns true if holed out.
fn resolve_collisions(state: &mut GameState) -> bool {
    let Some(basket) = state.course.current_hole().map(|h| h.basket) else {
        return false;
    };

    if collide(&state.throw.disc, &basket) {
        hole_out(state);
        return true;
    }

    if !state.throw.is_flying() {
        return false;
    }

    if let Some(tree) = resolve_tree_hits(
        &mut state.throw.disc,
        &state.course.trees,
        &mut state.tree_guard,
        &mut state.rng,
    ) {
        log::debug!("Tree {} hit, speed now {:.1} m/s", tree, state.throw.disc.velocity);
        state.events.push(GameEvent::TreeHit { tree });
        state.show_message("You hit a tree!");
    }

    false
}

/// Record the hole and move on to the next tee
fn hole_out(state: &mut GameState) {
    state.throw.complete();
    let score = state.throw.count;
    let distance = state.throw.distance;
    let (number, par) = match state.course.current_hole() {
        Some(hole) => (hole.number, hole.par()),
        None => return,
    };

    log::info!("Hole {} complete: {} strokes (par {})", number, score, par);
    state.events.push(GameEvent::HoleCompleted {
        hole: number,
        score,
        par,
        distance,
    });
    state.show_message("You hit the basket!!");

    if state.course.advance(score).is_some() {
        state.start_current_hole();
        return;
    }

    state.phase = GamePhase::CourseComplete;
    state.camera.follow = false;
    let strokes: u32 = state.course.holes.iter().filter_map(|h| h.score).sum();
    let par = state.course.total_par();
    log::info!("Course complete: {} strokes (par {})", strokes, par);
    state.events.push(GameEvent::CourseCompleted { strokes, par });
    state.show_message("Course complete!");
}

/// Aim straight at the basket and throw just far enough to reach it
fn autoplay(state: &mut GameState, dt: f32) {
    if state.throw.status != ThrowStatus::Planning || dt <= 0.0 {
        return;
    }
    let Some(basket) = state.course.current_hole().map(|h| h.basket.pos) else {
        return;
    };

    let disc = state.throw.disc.pos;
    let offset = normalize_angle(bearing(disc, basket) - state.throw.facing_angle);
    state.aim.angle = offset.clamp(-AIM_LIMIT, AIM_LIMIT);

    // A throw at v0 covers about (v0 - stop) * dt / (1 - drag)
    let physics = state.settings.physics;
    let decay = 1.0 - physics.drag_mode.factor(dt);
    let wanted = disc.distance(basket) + AUTOPLAY_OVERSHOOT;
    let v0 = wanted * decay / dt + physics.stop_velocity;
    state.power.set_fraction(v0 / state.settings.max_throw_speed);

    launch(state);
}
