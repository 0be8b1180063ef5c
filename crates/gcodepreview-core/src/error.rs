//! Error handling for gcodepreview
//!
//! Provides the error types of a preview run:
//! - Framing errors (camera computation over the object geometry)
//! - Render errors (reported back by the external rendering collaborator)
//! - Configuration rejected before a run
//!
//! Classification never fails: every segment maps to a category, so there
//! is no error variant for it. All error types use `thiserror`.

use thiserror::Error;

/// Framing error type
///
/// Raised while deriving the camera from the object point series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FramingError {
    /// The object series was empty after purge-line trimming, so there is no
    /// bounding box to frame.
    #[error("No object geometry to frame after purge trimming")]
    EmptyObjectGeometry,

    /// A framing parameter was not usable.
    #[error("Invalid framing parameter '{param}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        param: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Render error type
///
/// Failures reported back by the external renderer at the renderer boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The rendering back end failed.
    #[error("Renderer back end failed: {reason}")]
    Backend {
        /// The back end's description of the failure.
        reason: String,
    },

    /// The back end refused a point series.
    #[error("Renderer rejected series '{series}': {reason}")]
    Rejected {
        /// The series name (`object`, `support` or `moves`).
        series: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Main error type for gcodepreview
///
/// A unified error type that can represent any error from a preview run.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Framing error
    #[error(transparent)]
    Framing(#[from] FramingError),

    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The preview configuration was rejected before the run started
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Check if the run failed because there was nothing to frame
    pub fn is_empty_geometry(&self) -> bool {
        matches!(self, Error::Framing(FramingError::EmptyObjectGeometry))
    }

    /// Check if this is a framing error
    pub fn is_framing_error(&self) -> bool {
        matches!(self, Error::Framing(_))
    }

    /// Check if this is a render error
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Render(_))
    }

    /// Check if the configuration was rejected
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing_error_display() {
        let err = FramingError::EmptyObjectGeometry;
        assert_eq!(
            err.to_string(),
            "No object geometry to frame after purge trimming"
        );

        let err = FramingError::InvalidParameter {
            param: "scale_k".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid framing parameter 'scale_k': must be positive"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = FramingError::EmptyObjectGeometry.into();
        assert!(err.is_empty_geometry());
        assert!(err.is_framing_error());
        assert!(!err.is_render_error());

        let err: Error = RenderError::Backend {
            reason: "offscreen context lost".to_string(),
        }
        .into();
        assert!(err.is_render_error());
        assert_eq!(
            err.to_string(),
            "Renderer back end failed: offscreen context lost"
        );

        let err = Error::Config("bad rule".to_string());
        assert!(err.is_config_error());
        assert!(!err.is_framing_error());
        assert_eq!(err.to_string(), "Invalid configuration: bad rule");
    }
}
