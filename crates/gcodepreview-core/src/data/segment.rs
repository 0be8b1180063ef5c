//! Motion segments as produced by the external G-code parser

use super::{Point3, StyleTag};
use serde::{Deserialize, Serialize};

/// One motion event: a destination plus print-feature metadata
///
/// Segments are read and routed, never mutated, once the parser has
/// produced them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Endpoint of the motion
    pub position: Point3,
    /// Print-feature role as reported by the slicer (e.g. "perimeter")
    #[serde(default)]
    pub role: String,
    /// Motion subtype, parsed from the raw style string
    #[serde(default)]
    pub style: StyleTag,
    /// Whether material is deposited on this motion
    #[serde(default)]
    pub extrudes: bool,
}

impl Segment {
    /// Create a segment, parsing the raw style string
    pub fn new(position: Point3, role: impl Into<String>, style: &str, extrudes: bool) -> Self {
        Self {
            position,
            role: role.into(),
            style: StyleTag::parse(style),
            extrudes,
        }
    }

    /// Create a segment from an already parsed style tag
    pub fn with_style(
        position: Point3,
        role: impl Into<String>,
        style: StyleTag,
        extrudes: bool,
    ) -> Self {
        Self {
            position,
            role: role.into(),
            style,
            extrudes,
        }
    }

    /// A non-depositing move with no role or style metadata
    pub fn travel(position: Point3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Ordered segments of one print layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layer {
    /// Layer number as reported by the parser, if known
    #[serde(default)]
    pub index: Option<usize>,
    /// Segments in print order
    pub segments: Vec<Segment>,
}

impl Layer {
    /// Create a layer from segments in print order
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            index: None,
            segments,
        }
    }

    /// Create a numbered layer
    pub fn with_index(index: usize, segments: Vec<Segment>) -> Self {
        Self {
            index: Some(index),
            segments,
        }
    }

    /// Number of segments in the layer
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the layer has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate segments in print order
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a Layer {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
