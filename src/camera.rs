//! World to screen viewport
//!
//! World space is meters with +y up. Screen space is pixels with the origin in
//! the top-left corner and +y down, so the y axis flips here and nowhere else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::course::Rect;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// World position shown at the middle of the screen
    pub center: Vec2,
    /// Meters per pixel (larger is further out)
    pub zoom: f32,
    /// Viewport size in pixels
    pub width: f32,
    pub height: f32,
    /// Track the disc every tick
    pub follow: bool,
    pub zoom_min: f32,
    pub zoom_max: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            zoom: ZOOM_DEFAULT,
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            follow: false,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
        }
    }
}

impl Camera {
    /// Zoom bounds are put in order; non-finite bounds fall back to the defaults
    pub fn new(width: f32, height: f32, zoom: f32, zoom_min: f32, zoom_max: f32) -> Self {
        let (zoom_min, zoom_max) = if zoom_min.is_finite() && zoom_max.is_finite() {
            (zoom_min.min(zoom_max), zoom_min.max(zoom_max))
        } else {
            (ZOOM_MIN, ZOOM_MAX)
        };
        let zoom = if zoom.is_finite() { zoom } else { ZOOM_DEFAULT };
        Self {
            width,
            height,
            zoom: zoom.clamp(zoom_min, zoom_max),
            zoom_min,
            zoom_max,
            ..Default::default()
        }
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        let rel = (p - self.center) / self.zoom;
        Vec2::new(rel.x + self.width / 2.0, -rel.y + self.height / 2.0)
    }

    pub fn screen_to_world(&self, s: Vec2) -> Vec2 {
        let rel = Vec2::new(s.x - self.width / 2.0, -(s.y - self.height / 2.0));
        self.center + rel * self.zoom
    }

    /// World length in pixels
    pub fn to_screen_len(&self, meters: f32) -> f32 {
        meters / self.zoom
    }

    /// Part of the world currently on screen
    pub fn visible_rect(&self) -> Rect {
        Rect::from_center(self.center, self.viewport_size() * 0.5 * self.zoom)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.visible_rect().contains(p)
    }

    /// One scroll notch: up multiplies zoom by 1.1, down divides
    pub fn zoom_step(&mut self, up: bool) {
        if up {
            self.zoom *= ZOOM_FACTOR;
        } else {
            self.zoom /= ZOOM_FACTOR;
        }
        self.zoom = self.zoom.clamp(self.zoom_min, self.zoom_max);
    }

    /// Drag the view by a mouse delta in pixels. Stops following the disc.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.follow = false;
        self.center.x -= dx * self.zoom;
        self.center.y += dy * self.zoom;
    }

    /// Jump to `pos` and stop following
    pub fn look_at(&mut self, pos: Vec2) {
        self.follow = false;
        self.center = pos;
    }

    /// Recenter on `pos` if following
    pub fn track(&mut self, pos: Vec2) {
        if self.follow {
            self.center = pos;
        }
    }
}
