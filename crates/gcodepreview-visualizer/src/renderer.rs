//! Renderer boundary
//!
//! The drawing itself happens in an external scene-graph library. This module
//! defines the calls that library has to accept and the order a preview is
//! replayed into it. [`SceneRecorder`] captures those calls as a serializable
//! scene for back ends that run out of process.

use crate::pipeline::PreviewOutput;
use crate::visualizer::CameraSpec;
use gcodepreview_core::{Point3, RenderError, Result};
use gcodepreview_settings::{BedSpec, PathStyle, RenderStyle, Rgb};
use serde::Serialize;
use tracing::{debug, info};

/// Calls a rendering back end must accept
pub trait PreviewRenderer {
    /// Prepare an empty scene of the given size and background
    fn begin_scene(
        &mut self,
        width: u32,
        height: u32,
        background: Rgb,
    ) -> std::result::Result<(), RenderError>;

    /// Draw the print bed plane
    fn draw_bed(&mut self, bed: &BedSpec) -> std::result::Result<(), RenderError>;

    /// Draw one point series as a connected path
    fn draw_path(
        &mut self,
        name: &str,
        points: &[Point3],
        style: &PathStyle,
    ) -> std::result::Result<(), RenderError>;

    /// Point the view at the framed object
    fn set_camera(&mut self, camera: &CameraSpec) -> std::result::Result<(), RenderError>;
}

impl PreviewOutput {
    /// Replay this preview into a renderer
    ///
    /// Order: scene, bed (if enabled), object, moves, support, camera.
    /// Empty series are skipped.
    pub fn render_to<R>(&self, renderer: &mut R, style: &RenderStyle) -> Result<()>
    where
        R: PreviewRenderer + ?Sized,
    {
        renderer.begin_scene(style.image_width, style.image_height, style.background)?;

        if style.show_bed {
            renderer.draw_bed(&style.bed)?;
        }

        for (category, series) in self.series() {
            if series.is_empty() {
                debug!("Skipping empty {} series", category.series_name());
                continue;
            }
            debug!(
                "Drawing {} series with {} points",
                category.series_name(),
                series.len()
            );
            renderer.draw_path(
                category.series_name(),
                series.points(),
                style.path_style(category),
            )?;
        }

        renderer.set_camera(&self.camera)?;
        info!("Preview handed to renderer");
        Ok(())
    }
}

/// A path captured by [`SceneRecorder`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePath {
    pub name: String,
    pub points: Vec<Point3>,
    pub style: PathStyle,
}

/// Renderer that records the scene instead of drawing it
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SceneRecorder {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub bed: Option<BedSpec>,
    pub paths: Vec<ScenePath>,
    pub camera: Option<CameraSpec>,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self, name: &str) -> Option<&ScenePath> {
        self.paths.iter().find(|p| p.name == name)
    }

    /// Scene as pretty-printed JSON
    pub fn to_json(&self) -> std::result::Result<String, RenderError> {
        serde_json::to_string_pretty(self).map_err(|e| RenderError::Backend {
            reason: format!("scene serialization failed: {}", e),
        })
    }
}

impl PreviewRenderer for SceneRecorder {
    fn begin_scene(
        &mut self,
        width: u32,
        height: u32,
        background: Rgb,
    ) -> std::result::Result<(), RenderError> {
        *self = Self {
            width,
            height,
            background,
            ..Self::default()
        };
        Ok(())
    }

    fn draw_bed(&mut self, bed: &BedSpec) -> std::result::Result<(), RenderError> {
        self.bed = Some(*bed);
        Ok(())
    }

    fn draw_path(
        &mut self,
        name: &str,
        points: &[Point3],
        style: &PathStyle,
    ) -> std::result::Result<(), RenderError> {
        self.paths.push(ScenePath {
            name: name.to_string(),
            points: points.to_vec(),
            style: *style,
        });
        Ok(())
    }

    fn set_camera(&mut self, camera: &CameraSpec) -> std::result::Result<(), RenderError> {
        self.camera = Some(*camera);
        Ok(())
    }
}
