//! Axis-aligned bounds over a point series.

use gcodepreview_core::Point3;
use glam::DVec3;
use serde::Serialize;

/// Bounding box accumulated over object geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: Point3,
    pub max: Point3,
}

impl BoundingBox {
    /// Box containing a single point
    pub fn from_point(point: Point3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Bounds of `points`, or `None` when there are none
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::from_point(*first);
        for point in rest {
            bounds.update(*point);
        }
        Some(bounds)
    }

    pub fn update(&mut self, point: Point3) {
        self.min.x = self.min.x.min(point.x);
        self.max.x = self.max.x.max(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.y = self.max.y.max(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.z = self.max.z.max(point.z);
    }

    /// Extent along each axis (`max - min`)
    pub fn dimensions(&self) -> Point3 {
        to_point(to_dvec(self.max) - to_dvec(self.min))
    }

    /// Geometric center
    pub fn center(&self) -> Point3 {
        to_point((to_dvec(self.min) + to_dvec(self.max)) * 0.5)
    }

    /// Length of the box diagonal
    pub fn diagonal(&self) -> f64 {
        (to_dvec(self.max) - to_dvec(self.min)).length()
    }

    pub fn contains(&self, point: Point3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }
}

pub(crate) fn to_dvec(point: Point3) -> DVec3 {
    DVec3::new(point.x, point.y, point.z)
}

pub(crate) fn to_point(v: DVec3) -> Point3 {
    Point3 {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_points_have_no_bounds() {
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let p = Point3::new(3.0, 4.0, 5.0);
        let bounds = BoundingBox::from_points(&[p]).unwrap();
        assert_eq!(bounds.dimensions(), Point3::ORIGIN);
        assert_eq!(bounds.center(), p);
        assert_eq!(bounds.diagonal(), 0.0);
    }

    #[test]
    fn test_bounds_span_all_points() {
        let bounds = BoundingBox::from_points(&[
            Point3::new(0.0, 20.0, 1.0),
            Point3::new(10.0, 0.0, 5.0),
            Point3::new(4.0, 7.0, 0.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(10.0, 20.0, 5.0));
        assert_eq!(bounds.center(), Point3::new(5.0, 10.0, 2.5));
        assert!((bounds.diagonal() - 525f64.sqrt()).abs() < 1e-12);
        assert!(bounds.contains(Point3::new(4.0, 7.0, 0.0)));
        assert!(!bounds.contains(Point3::new(11.0, 7.0, 0.0)));
    }

    #[test]
    fn test_negative_coordinates() {
        let bounds =
            BoundingBox::from_points(&[Point3::new(-5.0, -5.0, 0.2), Point3::new(5.0, 5.0, 0.2)])
                .unwrap();
        assert_eq!(bounds.center(), Point3::new(0.0, 0.0, 0.2));
        assert_eq!(bounds.dimensions(), Point3::new(10.0, 10.0, 0.0));
    }
}
