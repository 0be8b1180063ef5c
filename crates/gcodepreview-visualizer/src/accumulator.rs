//! Per-category point accumulation
//!
//! Every series starts out seeded with the origin. After ingestion the object
//! series loses that seed together with its leading purge/priming points;
//! the support and travel series are handed over as accumulated.

use crate::visualizer::BoundingBox;
use gcodepreview_core::{Category, Point3, Segment};
use serde::Serialize;
use tracing::debug;

/// Ordered points of one render category
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PointSeries {
    points: Vec<Point3>,
}

impl PointSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// A series holding only the origin
    pub fn seeded() -> Self {
        Self {
            points: vec![Point3::ORIGIN],
        }
    }

    pub fn push(&mut self, point: Point3) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }

    /// Drop up to `count` leading points, returning how many were removed
    pub fn trim_front(&mut self, count: usize) -> usize {
        let removed = count.min(self.points.len());
        self.points.drain(..removed);
        removed
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

impl From<Vec<Point3>> for PointSeries {
    fn from(points: Vec<Point3>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a PointSeries {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Segments ingested per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryCounts {
    pub object: usize,
    pub support: usize,
    pub travel: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Object => self.object,
            Category::Support => self.support,
            Category::Travel => self.travel,
        }
    }

    fn increment(&mut self, category: Category) {
        match category {
            Category::Object => self.object += 1,
            Category::Support => self.support += 1,
            Category::Travel => self.travel += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.object + self.support + self.travel
    }
}

/// Series after the purge trim, ready for framing and rendering
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatedSeries {
    pub object: PointSeries,
    pub support: PointSeries,
    pub travel: PointSeries,
    /// Points removed from the front of the object series
    pub trimmed: usize,
}

/// Groups classified segment positions into per-category series
#[derive(Debug, Clone)]
pub struct Accumulator {
    object: PointSeries,
    support: PointSeries,
    travel: PointSeries,
    counts: CategoryCounts,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Fresh accumulator with all three series seeded with the origin
    pub fn new() -> Self {
        Self {
            object: PointSeries::seeded(),
            support: PointSeries::seeded(),
            travel: PointSeries::seeded(),
            counts: CategoryCounts::default(),
        }
    }

    /// Append the segment's position to the series of `category`
    pub fn ingest(&mut self, segment: &Segment, category: Category) {
        self.series_mut(category).push(segment.position);
        self.counts.increment(category);
    }

    pub fn series(&self, category: Category) -> &PointSeries {
        match category {
            Category::Object => &self.object,
            Category::Support => &self.support,
            Category::Travel => &self.travel,
        }
    }

    fn series_mut(&mut self, category: Category) -> &mut PointSeries {
        match category {
            Category::Object => &mut self.object,
            Category::Support => &mut self.support,
            Category::Travel => &mut self.travel,
        }
    }

    pub fn counts(&self) -> CategoryCounts {
        self.counts
    }

    /// Apply the purge trim and hand the series over
    ///
    /// The object series loses its seeded origin plus the first
    /// `purge_trim_count` ingested points. A shorter series ends up empty.
    pub fn finish(mut self, purge_trim_count: usize) -> AccumulatedSeries {
        let trimmed = self
            .object
            .trim_front(purge_trim_count.saturating_add(1));
        debug!(
            "Purge trim removed {} object points, {} remain",
            trimmed,
            self.object.len()
        );
        AccumulatedSeries {
            object: self.object,
            support: self.support,
            travel: self.travel,
            trimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64) -> Segment {
        Segment::travel(Point3::new(x, 0.0, 0.0))
    }

    #[test]
    fn test_series_start_seeded() {
        let acc = Accumulator::new();
        for category in Category::ALL {
            assert_eq!(acc.series(category).points(), &[Point3::ORIGIN]);
        }
        assert_eq!(acc.counts().total(), 0);
    }

    #[test]
    fn test_ingest_touches_one_series() {
        let mut acc = Accumulator::new();
        acc.ingest(&at(1.0), Category::Support);

        assert_eq!(acc.series(Category::Support).len(), 2);
        assert_eq!(acc.series(Category::Object).len(), 1);
        assert_eq!(acc.series(Category::Travel).len(), 1);
        assert_eq!(acc.counts().support, 1);
    }

    #[test]
    fn test_trim_three_points_leaves_nothing() {
        let mut acc = Accumulator::new();
        for x in 1..=3 {
            acc.ingest(&at(x as f64), Category::Object);
        }
        assert_eq!(acc.series(Category::Object).len(), 4);

        let series = acc.finish(5);
        assert!(series.object.is_empty());
        assert_eq!(series.trimmed, 4);
    }

    #[test]
    fn test_trim_seven_points_leaves_last_two() {
        let mut acc = Accumulator::new();
        for x in 1..=7 {
            acc.ingest(&at(x as f64), Category::Object);
        }

        let series = acc.finish(5);
        let xs: Vec<f64> = series.object.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![6.0, 7.0]);
        assert_eq!(series.trimmed, 6);
    }

    #[test]
    fn test_zero_trim_only_drops_seed() {
        let mut acc = Accumulator::new();
        acc.ingest(&at(1.0), Category::Object);

        let series = acc.finish(0);
        assert_eq!(series.object.points(), &[Point3::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_trim_leaves_other_series_untouched() {
        let mut acc = Accumulator::new();
        acc.ingest(&at(1.0), Category::Travel);
        acc.ingest(&at(2.0), Category::Support);

        let series = acc.finish(5);
        assert_eq!(series.travel.len(), 2);
        assert_eq!(series.support.len(), 2);
        assert_eq!(series.travel.points()[0], Point3::ORIGIN);
    }

    #[test]
    fn test_trim_front_saturates() {
        let mut series = PointSeries::from(vec![Point3::ORIGIN; 2]);
        assert_eq!(series.trim_front(10), 2);
        assert!(series.is_empty());
        assert_eq!(series.trim_front(usize::MAX), 0);
    }
}
