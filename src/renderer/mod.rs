//! Rendering module
//!
//! Backend-agnostic: produces a screen-space draw list per frame.

pub mod frame;

pub use frame::{Color, Frame, Primitive, build_frame, colors};
