//! Preview pipeline
//!
//! Single pass over the parsed segments: classify, accumulate, trim the
//! object series, then frame it. Classification and accumulation always
//! cover all three categories; the include flags only decide which series
//! are handed to the renderer.

use crate::accumulator::{Accumulator, CategoryCounts, PointSeries};
use crate::classifier::Classifier;
use crate::visualizer::{CameraSpec, FramingEngine};
use gcodepreview_core::{Category, Error, Layer, Result, Segment};
use gcodepreview_settings::{PipelineSettings, PreviewConfig};
use serde::Serialize;
use tracing::{debug, info, trace, warn};

/// Counters collected during one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PipelineStats {
    /// Segments classified
    pub segments: usize,
    /// Segments ingested per category
    pub counts: CategoryCounts,
    /// Object-role segments moved to travel by the style override
    pub overridden: usize,
    /// Object segments whose extrusion flag was not set
    pub object_without_extrusion: usize,
    /// Points dropped from the front of the object series
    pub trimmed: usize,
}

/// Everything the renderer needs from one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewOutput {
    pub object: PointSeries,
    /// Present when support output is enabled
    pub support: Option<PointSeries>,
    /// Present when travel output is enabled
    pub moves: Option<PointSeries>,
    pub camera: CameraSpec,
    pub stats: PipelineStats,
}

impl PreviewOutput {
    /// Retained series in draw order: object, moves, support
    pub fn series(&self) -> impl Iterator<Item = (Category, &PointSeries)> {
        std::iter::once((Category::Object, &self.object))
            .chain(self.moves.as_ref().map(|s| (Category::Travel, s)))
            .chain(self.support.as_ref().map(|s| (Category::Support, s)))
    }

    /// Retained series for `category`, if any
    pub fn get(&self, category: Category) -> Option<&PointSeries> {
        match category {
            Category::Object => Some(&self.object),
            Category::Support => self.support.as_ref(),
            Category::Travel => self.moves.as_ref(),
        }
    }
}

/// Orchestrates classifier, accumulator and framing for one preview
#[derive(Debug, Clone)]
pub struct PreviewPipeline {
    classifier: Classifier,
    framing: FramingEngine,
    options: PipelineSettings,
}

impl Default for PreviewPipeline {
    fn default() -> Self {
        Self::new(
            Classifier::standard(),
            FramingEngine::default(),
            PipelineSettings::default(),
        )
    }
}

impl PreviewPipeline {
    pub fn new(classifier: Classifier, framing: FramingEngine, options: PipelineSettings) -> Self {
        Self {
            classifier,
            framing,
            options,
        }
    }

    /// Validate `config` and build the pipeline it describes
    pub fn from_config(config: &PreviewConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self::new(
            Classifier::from_settings(&config.classifier),
            FramingEngine::from_settings(&config.framing)?,
            config.pipeline.clone(),
        ))
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn options(&self) -> &PipelineSettings {
        &self.options
    }

    /// Run over segments in print order
    pub fn run<'a, I>(&self, segments: I) -> Result<PreviewOutput>
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        let mut accumulator = Accumulator::new();
        let mut stats = PipelineStats::default();

        for segment in segments {
            let classification = self.classifier.classify_detailed(segment);
            trace!(
                "Segment role='{}' style={} -> {}",
                segment.role,
                segment.style,
                classification.category
            );

            if classification.is_overridden() {
                stats.overridden += 1;
            }
            if classification.category == Category::Object && !segment.extrudes {
                stats.object_without_extrusion += 1;
            }
            stats.segments += 1;

            accumulator.ingest(segment, classification.category);
        }

        stats.counts = accumulator.counts();
        debug!(
            "Classified {} segments: object={} support={} travel={} (overridden={})",
            stats.segments,
            stats.counts.object,
            stats.counts.support,
            stats.counts.travel,
            stats.overridden
        );

        let series = accumulator.finish(self.options.purge_trim_count);
        stats.trimmed = series.trimmed;

        let camera = match self.framing.compute(series.object.points()) {
            Ok(camera) => camera,
            Err(err) => {
                warn!(
                    "Cannot frame preview: {} ({} object segments, {} points trimmed)",
                    err, stats.counts.object, stats.trimmed
                );
                return Err(err.into());
            }
        };

        info!(
            "Preview ready: {} object points, camera focal={} distance={:.2}",
            series.object.len(),
            camera.focal_point,
            camera.distance
        );

        Ok(PreviewOutput {
            object: series.object,
            support: self.options.include_support.then_some(series.support),
            moves: self.options.include_travel.then_some(series.travel),
            camera,
            stats,
        })
    }

    /// Run over layers, keeping layer order and segment order within layers
    pub fn run_layers(&self, layers: &[Layer]) -> Result<PreviewOutput> {
        debug!("Running preview over {} layers", layers.len());
        self.run(layers.iter().flat_map(|layer| layer.iter()))
    }
}
