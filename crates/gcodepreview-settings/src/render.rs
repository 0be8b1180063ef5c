//! Render style handed to the renderer boundary
//!
//! Colors, bed geometry and image size used when the categorized point
//! series are drawn. None of this affects classification or framing.

use gcodepreview_core::{Category, Point3};
use serde::{Deserialize, Serialize};

/// Linear RGB color, each channel in `0.0..=1.0`
pub type Rgb = [f32; 3];

pub const WHITE: Rgb = [1.0, 1.0, 1.0];
pub const RED: Rgb = [1.0, 0.0, 0.0];
pub const LIGHT_GREY: Rgb = [0.7529, 0.7529, 0.7529];
pub const MEDIUM_GREY: Rgb = [0.7, 0.7, 0.7];
pub const BLUE: Rgb = [0.0, 0.498, 0.996];

/// How one point series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub color: Rgb,
    /// Wireframe line width; `None` lets the back end pick
    #[serde(default)]
    pub line_width: Option<f32>,
    /// Draw as a tube of this radius (mm) instead of a line
    #[serde(default)]
    pub tube_radius: Option<f32>,
}

impl PathStyle {
    /// A wireframe path
    pub fn line(color: Rgb, width: f32) -> Self {
        Self {
            color,
            line_width: Some(width),
            tube_radius: None,
        }
    }

    /// A tube path
    pub fn tube(color: Rgb, radius: f32) -> Self {
        Self {
            color,
            line_width: None,
            tube_radius: Some(radius),
        }
    }
}

/// Print bed drawn under the model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BedSpec {
    /// Bed size along X in mm
    pub width: f64,
    /// Bed size along Y in mm
    pub depth: f64,
    /// Plane height, slightly above zero so the first layer is not hidden
    pub height: f64,
    pub color: Rgb,
}

impl Default for BedSpec {
    fn default() -> Self {
        Self {
            width: 210.0,
            depth: 210.0,
            height: 0.1,
            color: MEDIUM_GREY,
        }
    }
}

impl BedSpec {
    /// Bed corners as a 2x2 grid: back-left, back-right, front-left, front-right
    pub fn corners(&self) -> [Point3; 4] {
        [
            Point3::new(0.0, self.depth, self.height),
            Point3::new(self.width, self.depth, self.height),
            Point3::new(0.0, 0.0, self.height),
            Point3::new(self.width, 0.0, self.height),
        ]
    }

    /// Center of the bed plane
    pub fn center(&self) -> Point3 {
        Point3::new(self.width / 2.0, self.depth / 2.0, self.height)
    }
}

/// Explicit render configuration passed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Output image width in pixels
    pub image_width: u32,
    /// Output image height in pixels
    pub image_height: u32,
    pub background: Rgb,
    /// Draw the print bed
    pub show_bed: bool,
    pub bed: BedSpec,
    pub object: PathStyle,
    pub support: PathStyle,
    pub moves: PathStyle,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            image_width: 1600,
            image_height: 1200,
            background: WHITE,
            show_bed: true,
            bed: BedSpec::default(),
            object: PathStyle::line(RED, 2.0),
            support: PathStyle::tube(LIGHT_GREY, 0.5),
            moves: PathStyle::line(BLUE, 2.0),
        }
    }
}

impl RenderStyle {
    /// Style for the series of the given category
    pub fn path_style(&self, category: Category) -> &PathStyle {
        match category {
            Category::Object => &self.object,
            Category::Support => &self.support,
            Category::Travel => &self.moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_corners() {
        let bed = BedSpec::default();
        let corners = bed.corners();
        assert_eq!(corners[0], Point3::new(0.0, 210.0, 0.1));
        assert_eq!(corners[3], Point3::new(210.0, 0.0, 0.1));
        assert_eq!(bed.center(), Point3::new(105.0, 105.0, 0.1));
    }

    #[test]
    fn test_path_style_per_category() {
        let style = RenderStyle::default();
        assert_eq!(style.path_style(Category::Object).color, RED);
        assert_eq!(style.path_style(Category::Travel).color, BLUE);
        assert_eq!(style.path_style(Category::Support).tube_radius, Some(0.5));
        assert_eq!(style.path_style(Category::Object).tube_radius, None);
    }
}
