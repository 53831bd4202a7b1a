//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (holes by number, trees by index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod course;
pub mod disc;
pub mod generate;
pub mod state;
pub mod throw;
pub mod tick;

pub use collision::{Circle, Collider, TreeHitGuard, collide, deflect, resolve_tree_hits};
pub use course::{Basket, Course, Hole, HoleStatus, Rect, TeePad, Tree, par_for_distance};
pub use disc::{Disc, DragMode, FlightNumbers, PhysicsParams};
pub use generate::{CourseParams, MAX_PLACEMENT_ATTEMPTS, generate_course};
pub use state::{GameEvent, GamePhase, GameState};
pub use throw::{Throw, ThrowStatus};
pub use tick::{InputEvent, TickInput, tick};
