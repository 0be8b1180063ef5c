use super::bounds::{to_dvec, to_point, BoundingBox};
use gcodepreview_core::{FramingError, Point3};
use gcodepreview_settings::FramingSettings;
use glam::DVec3;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_SCALE_K: f64 = 2.0;
pub const DEFAULT_AZIMUTH_DEG: f64 = 225.0;
pub const DEFAULT_ELEVATION_DEG: f64 = 45.0;

/// Camera handed to the renderer
///
/// Angles are in degrees. Azimuth is measured in the XY plane from +X,
/// elevation from the +Z axis (Z-up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraSpec {
    pub focal_point: Point3,
    pub distance: f64,
    pub azimuth: f64,
    pub elevation: f64,
}

impl CameraSpec {
    pub fn get_eye_position(&self) -> Point3 {
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();

        let offset = DVec3::new(sin_el * cos_az, sin_el * sin_az, cos_el) * self.distance;

        to_point(to_dvec(self.focal_point) + offset)
    }
}

/// Derives the camera from the trimmed object geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingEngine {
    scale_k: f64,
    azimuth: f64,
    elevation: f64,
}

impl Default for FramingEngine {
    fn default() -> Self {
        Self {
            scale_k: DEFAULT_SCALE_K,
            azimuth: DEFAULT_AZIMUTH_DEG,
            elevation: DEFAULT_ELEVATION_DEG,
        }
    }
}

impl FramingEngine {
    /// Engine with the standard preview angle and the given distance scale
    pub fn new(scale_k: f64) -> Result<Self, FramingError> {
        if !scale_k.is_finite() || scale_k <= 0.0 {
            return Err(FramingError::InvalidParameter {
                param: "scale_k".to_string(),
                reason: format!("must be a positive number, got {}", scale_k),
            });
        }
        Ok(Self {
            scale_k,
            ..Default::default()
        })
    }

    pub fn from_settings(settings: &FramingSettings) -> Result<Self, FramingError> {
        let mut engine = Self::new(settings.scale_k)?;
        engine.set_view(settings.azimuth_deg, settings.elevation_deg)?;
        Ok(engine)
    }

    pub fn set_view(&mut self, azimuth_deg: f64, elevation_deg: f64) -> Result<(), FramingError> {
        if !azimuth_deg.is_finite() || !elevation_deg.is_finite() {
            return Err(FramingError::InvalidParameter {
                param: "view".to_string(),
                reason: "azimuth and elevation must be finite".to_string(),
            });
        }
        self.azimuth = azimuth_deg;
        self.elevation = elevation_deg;
        Ok(())
    }

    pub fn scale_k(&self) -> f64 {
        self.scale_k
    }

    /// Frame `object` points: focus on the bounding-box center, back off by
    /// `scale_k` times the box diagonal.
    pub fn compute(&self, object: &[Point3]) -> Result<CameraSpec, FramingError> {
        let bounds = BoundingBox::from_points(object).ok_or(FramingError::EmptyObjectGeometry)?;
        Ok(self.frame_bounds(&bounds))
    }

    pub fn frame_bounds(&self, bounds: &BoundingBox) -> CameraSpec {
        let camera = CameraSpec {
            focal_point: bounds.center(),
            distance: self.scale_k * bounds.diagonal(),
            azimuth: self.azimuth,
            elevation: self.elevation,
        };
        debug!(
            "Framed bounds {} .. {}: focal={} distance={:.3}",
            bounds.min, bounds.max, camera.focal_point, camera.distance
        );
        camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_points() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 20.0, 5.0),
            Point3::new(3.0, 12.0, 2.0),
        ]
    }

    #[test]
    fn test_framing_scale_example() {
        let engine = FramingEngine::new(1.5).unwrap();
        let camera = engine.compute(&box_points()).unwrap();

        assert!((camera.distance - 1.5 * 525f64.sqrt()).abs() < 1e-9);
        assert!((camera.distance - 34.37).abs() < 0.01);
        assert_eq!(camera.focal_point, Point3::new(5.0, 10.0, 2.5));
        assert_eq!(camera.azimuth, 225.0);
        assert_eq!(camera.elevation, 45.0);
    }

    #[test]
    fn test_default_scale() {
        let camera = FramingEngine::default().compute(&box_points()).unwrap();
        assert!((camera.distance - 2.0 * 525f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_object_is_an_error() {
        let err = FramingEngine::default().compute(&[]).unwrap_err();
        assert_eq!(err, FramingError::EmptyObjectGeometry);
    }

    #[test]
    fn test_single_point_has_zero_distance() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let camera = FramingEngine::default().compute(&[p]).unwrap();
        assert_eq!(camera.focal_point, p);
        assert_eq!(camera.distance, 0.0);
    }

    #[test]
    fn test_invalid_scale_rejected() {
        assert!(FramingEngine::new(0.0).is_err());
        assert!(FramingEngine::new(-1.0).is_err());
        assert!(FramingEngine::new(f64::INFINITY).is_err());
        assert!(FramingEngine::new(1.5).is_ok());
    }

    #[test]
    fn test_from_settings_applies_view() {
        let settings = FramingSettings {
            scale_k: 1.5,
            azimuth_deg: 45.0,
            elevation_deg: 70.0,
        };
        let camera = FramingEngine::from_settings(&settings)
            .unwrap()
            .compute(&box_points())
            .unwrap();
        assert_eq!(camera.azimuth, 45.0);
        assert_eq!(camera.elevation, 70.0);
    }

    #[test]
    fn test_eye_position_three_quarter_view() {
        let camera = CameraSpec {
            focal_point: Point3::new(0.0, 0.0, 0.0),
            distance: 2.0,
            azimuth: 225.0,
            elevation: 45.0,
        };
        let eye = camera.get_eye_position();
        assert!((eye.x + 1.0).abs() < 1e-9);
        assert!((eye.y + 1.0).abs() < 1e-9);
        assert!((eye.z - 2f64.sqrt()).abs() < 1e-9);
    }
}
