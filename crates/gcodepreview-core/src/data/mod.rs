//! Data models for motion segments and render categories
//!
//! This module provides:
//! - 3D points in millimeters
//! - Motion segments and the layers that group them
//! - Motion style tags parsed once at the parser boundary
//! - The three render categories and the role rules that select them

pub mod segment;

pub use segment::{Layer, Segment};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in machine space, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Point3 {
    /// The origin every point series is seeded with
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && z.is_finite(),
            "Point3 coordinates must be finite: x={x}, y={y}, z={z}"
        );
        Self { x, y, z }
    }

    /// Coordinates as an array
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// Motion subtype of a segment
///
/// Parsed from the raw style string by exact, case-sensitive comparison.
/// Anything the previewer does not know about becomes [`StyleTag::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum StyleTag {
    /// Depositing move
    Extrude,
    /// Filament retraction
    Retract,
    /// Non-printing travel move
    Fly,
    /// Un-retract after a travel
    Restore,
    /// Support material move
    Support,
    /// Empty or unrecognized style
    #[default]
    Unknown,
}

impl StyleTag {
    /// Parse a raw style string from the parser
    pub fn parse(raw: &str) -> Self {
        match raw {
            "extrude" => Self::Extrude,
            "retract" => Self::Retract,
            "fly" => Self::Fly,
            "restore" => Self::Restore,
            "support" => Self::Support,
            _ => Self::Unknown,
        }
    }

    /// The canonical tag string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extrude => "extrude",
            Self::Retract => "retract",
            Self::Fly => "fly",
            Self::Restore => "restore",
            Self::Support => "support",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for StyleTag {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for StyleTag {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render bucket a segment is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Deposited model geometry
    Object,
    /// Support, skirt and other helper structures
    Support,
    /// Non-printing motion
    Travel,
}

impl Category {
    /// All categories in draw order
    pub const ALL: [Category; 3] = [Category::Object, Category::Travel, Category::Support];

    /// Name of the point series handed to the renderer
    pub fn series_name(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Support => "support",
            Self::Travel => "moves",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "Object"),
            Self::Support => write!(f, "Support"),
            Self::Travel => write!(f, "Travel"),
        }
    }
}

/// One entry of the ordered role table
///
/// A role matches when it contains any of `patterns` as a substring
/// (case-sensitive). Roles stay open-ended strings rather than an enum so
/// that rule order, which decides roles matching several patterns, remains
/// configuration data; `RuleTable::shadowed_patterns` reports rules an
/// earlier one makes unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRule {
    /// Substrings that select this rule
    pub patterns: Vec<String>,
    /// Category assigned on a match
    pub category: Category,
}

impl RoleRule {
    /// Create a rule from string patterns
    pub fn new<I, S>(patterns: I, category: Category) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            category,
        }
    }

    /// Whether `role` contains one of this rule's patterns
    pub fn matches(&self, role: &str) -> bool {
        self.patterns.iter().any(|p| role.contains(p.as_str()))
    }

    /// The stock role table, in precedence order
    ///
    /// Helper motions first, then support structures, then model features.
    /// Roles matching none of these fall back to travel.
    pub fn standard_table() -> Vec<RoleRule> {
        vec![
            RoleRule::new(["custom", "wipe"], Category::Travel),
            RoleRule::new(["intern", "skirt", "support"], Category::Support),
            RoleRule::new(
                [
                    "bridge", "external", "fill", "infill", "overhang", "perimeter", "skin",
                    "solid", "top", "wall",
                ],
                Category::Object,
            ),
        ]
    }
}
