//! Camera framing
//!
//! This module provides:
//! - Bounding boxes over object geometry
//! - The framing engine that turns those bounds into a camera
//! - The camera specification handed to the renderer

pub mod bounds;
pub mod camera;

pub use bounds::BoundingBox;
pub use camera::{CameraSpec, FramingEngine};
