//! # gcodepreview
//!
//! Toolpath preview core for 3D-printer G-code:
//! - Classifies parsed motion segments into object, support and travel geometry
//! - Trims purge/priming lines from the object geometry
//! - Frames the object with a camera at the usual slicer preview angle
//! - Replays the result into an external renderer
//!
//! ## Architecture
//!
//! gcodepreview is organized as a workspace with multiple crates:
//!
//! 1. **gcodepreview-core** - Points, segments, categories, errors
//! 2. **gcodepreview-settings** - Preview configuration and render style
//! 3. **gcodepreview-visualizer** - Classifier, accumulator, framing, pipeline, renderer boundary
//! 4. **gcodepreview** - This facade crate
//!
//! G-code parsing and the actual drawing are done by external collaborators:
//! a parser produces [`Segment`]s, a [`PreviewRenderer`] draws the result.

pub use gcodepreview_core::{
    Category, Error, FramingError, Layer, Point3, RenderError, Result, RoleRule, Segment,
    StyleTag,
};

pub use gcodepreview_settings::{
    BedSpec, ClassifierSettings, FramingSettings, PathStyle, PipelineSettings, PreviewConfig,
    RenderStyle, Rgb, SettingsError,
};

pub use gcodepreview_visualizer::{
    Accumulator, BoundingBox, CameraSpec, Classification, Classifier, FramingEngine,
    PipelineStats, PointSeries, PreviewOutput, PreviewPipeline, PreviewRenderer, RuleTable,
    SceneRecorder,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a full preview with `config` and replay it into `renderer`
///
/// Returns the preview so callers can inspect the series and camera.
pub fn render_preview<'a, I, R>(
    config: &PreviewConfig,
    segments: I,
    renderer: &mut R,
) -> Result<PreviewOutput>
where
    I: IntoIterator<Item = &'a Segment>,
    R: PreviewRenderer + ?Sized,
{
    let pipeline = PreviewPipeline::from_config(config)?;
    let output = pipeline.run(segments)?;
    output.render_to(renderer, &config.render)?;
    Ok(output)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize JSON logging for hosts that ship logs to a collector
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
