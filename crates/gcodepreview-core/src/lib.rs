//! # gcodepreview Core
//!
//! Core types and errors shared by the gcodepreview crates.
//! Provides the motion segment data model handed over by an external
//! G-code parser, the render categories segments are sorted into, and
//! the error taxonomy of a preview run.

pub mod data;
pub mod error;

pub use data::{Category, Layer, Point3, RoleRule, Segment, StyleTag};

pub use error::{Error, FramingError, RenderError, Result};
