//! gcodepreview Settings Crate
//!
//! Handles preview configuration, its validation and persistence, and the
//! explicit render style handed to the renderer boundary.

pub mod config;
pub mod error;
pub mod render;

pub use config::{ClassifierSettings, FramingSettings, PipelineSettings, PreviewConfig};
pub use error::{SettingsError, SettingsResult};
pub use render::{BedSpec, PathStyle, RenderStyle, Rgb};
