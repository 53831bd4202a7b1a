//! Frame building
//!
//! Turns a [`GameState`] into an ordered list of screen-space primitives.
//! The list is back to front; a backend only has to rasterize each entry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::hud::{OffscreenPointer, PointerTarget, offscreen_pointer};
use crate::scorecard::Scorecard;
use crate::sim::course::{HoleStatus, Rect};
use crate::sim::state::{GamePhase, GameState};
use crate::sim::throw::ThrowStatus;

/// RGBA, 0..=1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TREE: Color = [0.0, 1.0, 0.0, 1.0];
    pub const TEE_PAD: Color = [0.45, 0.35, 0.25, 1.0];
    pub const BASKET: Color = [0.57, 0.57, 0.57, 1.0];
    pub const BASKET_CURRENT: Color = [1.0, 0.75, 0.0, 1.0];
    pub const FLIGHT_PATH: Color = [0.0, 0.0, 1.0, 1.0];
    pub const PLAYER: Color = [0.5, 0.5, 0.5, 1.0];
    pub const DISC: Color = [1.0, 0.0, 0.0, 1.0];
    pub const HUD_PANEL: Color = [0.5, 0.5, 0.5, 1.0];
    pub const HUD_INK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const POWER: Color = [1.0, 0.0, 0.0, 1.0];
    pub const MESSAGE: Color = [0.8, 0.1, 0.1, 1.0];
}

/// Player marker footprint (m)
const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 0.2);

/// HUD layout (pixels from the bottom-left of the screen)
const HUD_MARGIN: f32 = 10.0;
const HUD_HEIGHT: f32 = 100.0;
const POWER_BAR_X: f32 = 150.0;
const POWER_BAR_WIDTH: f32 = 600.0;
const TEXT_LINE_HEIGHT: f32 = 18.0;

/// A screen-space draw command (pixels, y down)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Rectangle rotated about its center; `angle` is the direction of the
    /// long (y) side in screen space
    OrientedRect {
        center: Vec2,
        size: Vec2,
        angle: f32,
        color: Color,
    },
    /// Axis-aligned rectangle
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Arc of the ellipse inscribed in the rectangle, angles in radians
    Arc {
        min: Vec2,
        size: Vec2,
        start: f32,
        end: f32,
        width: f32,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        color: Color,
    },
    /// Edge-of-screen arrow toward something out of view
    Pointer(OffscreenPointer),
}

/// Everything a backend needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub camera: Camera,
    pub background: Color,
    pub primitives: Vec<Primitive>,
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState) -> Frame {
    let camera = &state.camera;
    let view = camera.visible_rect();
    let mut out = Vec::new();

    for tree in &state.course.trees {
        world_circle(&mut out, camera, &view, tree.pos, tree.radius, colors::TREE);
    }

    for hole in &state.course.holes {
        let tee = hole.tee_pad;
        if circle_visible(&view, tee.pos, tee.bounding_circle().radius) {
            out.push(Primitive::OrientedRect {
                center: camera.world_to_screen(tee.pos),
                size: tee.size() / camera.zoom,
                angle: -tee.facing,
                color: colors::TEE_PAD,
            });
        }
        let color = if hole.status == HoleStatus::Current {
            colors::BASKET_CURRENT
        } else {
            colors::BASKET
        };
        world_circle(&mut out, camera, &view, hole.basket.pos, hole.basket.radius, color);
    }

    let throw = &state.throw;
    for &p in &throw.flight_path {
        world_circle(&mut out, camera, &view, p, throw.disc.radius, colors::FLIGHT_PATH);
    }

    let aim = if throw.status == ThrowStatus::Planning {
        state.aim.angle
    } else {
        0.0
    };
    if circle_visible(&view, throw.start, PLAYER_SIZE.x) {
        out.push(Primitive::OrientedRect {
            center: camera.world_to_screen(throw.start),
            size: PLAYER_SIZE / camera.zoom,
            angle: -(throw.facing_angle + aim),
            color: colors::PLAYER,
        });
    }

    world_circle(&mut out, camera, &view, throw.disc.pos, throw.disc.radius, colors::DISC);

    hud(&mut out, state);

    Frame {
        camera: camera.clone(),
        background: colors::BACKGROUND,
        primitives: out,
    }
}

fn circle_visible(view: &Rect, center: Vec2, radius: f32) -> bool {
    view.padded(radius).contains(center)
}

fn world_circle(out: &mut Vec<Primitive>, camera: &Camera, view: &Rect, center: Vec2, radius: f32, color: Color) {
    if circle_visible(view, center, radius) {
        out.push(Primitive::Circle {
            center: camera.world_to_screen(center),
            radius: camera.to_screen_len(radius),
            color,
        });
    }
}

fn hud(out: &mut Vec<Primitive>, state: &GameState) {
    let height = state.camera.height;
    let top = height - HUD_HEIGHT - HUD_MARGIN * 2.0;
    let panel = Vec2::splat(HUD_HEIGHT);

    // Aim dial: half circle with a needle, straight up is no offset
    let dial_min = Vec2::new(HUD_MARGIN, top);
    out.push(Primitive::Rect {
        min: dial_min,
        size: panel,
        color: colors::HUD_PANEL,
    });
    out.push(Primitive::Arc {
        min: dial_min,
        size: panel,
        start: 0.0,
        end: std::f32::consts::PI,
        width: 2.0,
        color: colors::HUD_INK,
    });
    let center = dial_min + panel * 0.5;
    let needle = Vec2::new(-state.aim.angle.sin(), -state.aim.angle.cos()) * (HUD_HEIGHT * 0.5);
    out.push(Primitive::Line {
        from: center,
        to: center + needle,
        width: 2.0,
        color: colors::HUD_INK,
    });

    // Power bar
    let bar_min = Vec2::new(POWER_BAR_X, top);
    out.push(Primitive::Rect {
        min: bar_min,
        size: Vec2::new(POWER_BAR_WIDTH, HUD_HEIGHT),
        color: colors::HUD_PANEL,
    });
    out.push(Primitive::Rect {
        min: bar_min,
        size: Vec2::new(POWER_BAR_WIDTH * state.power.fraction(), HUD_HEIGHT),
        color: colors::POWER,
    });

    // Scorecard
    let card = Scorecard::from_course(&state.course);
    let mut y = HUD_MARGIN;
    if let Some(hole) = state.current_hole_number() {
        out.push(Primitive::Text {
            pos: Vec2::new(HUD_MARGIN, y),
            text: format!("Hole {}  Throw {}  {:.1} m", hole, state.throw.count, state.throw.distance),
            color: colors::HUD_INK,
        });
        y += TEXT_LINE_HEIGHT;
    }
    for line in card.lines() {
        out.push(Primitive::Text {
            pos: Vec2::new(HUD_MARGIN, y),
            text: line,
            color: colors::HUD_INK,
        });
        y += TEXT_LINE_HEIGHT;
    }

    if let Some(message) = &state.message {
        out.push(Primitive::Text {
            pos: Vec2::new(state.camera.width * 0.5, HUD_MARGIN),
            text: message.text.clone(),
            color: colors::MESSAGE,
        });
    }

    // Pointers toward the current basket, its tee and the disc
    if state.phase == GamePhase::Playing {
        if let Some(hole) = state.course.current_hole() {
            let targets = [
                (PointerTarget::Basket, hole.basket.pos),
                (PointerTarget::TeePad, hole.tee_pad.pos),
                (PointerTarget::Disc, state.throw.disc.pos),
            ];
            for (target, pos) in targets {
                if let Some(pointer) = offscreen_pointer(&state.camera, target, pos) {
                    out.push(Primitive::Pointer(pointer));
                }
            }
        }
    }
}
