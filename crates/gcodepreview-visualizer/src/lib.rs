//! # gcodepreview Visualizer
//!
//! Turns parsed 3D-printer motion segments into categorized point series and
//! a camera framing for an external renderer.
//! Includes the segment classifier, the per-category accumulator, the framing
//! engine, the preview pipeline and the renderer boundary.

pub mod accumulator;
pub mod classifier;
pub mod pipeline;
pub mod renderer;
pub mod visualizer;

pub use accumulator::{AccumulatedSeries, Accumulator, CategoryCounts, PointSeries};
pub use classifier::{Classification, Classifier, RuleTable, ShadowedPattern};
pub use pipeline::{PipelineStats, PreviewOutput, PreviewPipeline};
pub use renderer::{PreviewRenderer, SceneRecorder, ScenePath};
pub use visualizer::{BoundingBox, CameraSpec, FramingEngine};
