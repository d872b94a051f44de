//! extrema-core: minimum/maximum extraction over signal frames
//!
//! The core of this library is the [`ExtremumFinder`], which returns the
//! position and value of the first minimum or maximum of a sequence of
//! samples. Around it sit the pieces needed to run it once per analysis
//! frame of an audio signal.
//!
//! # Core Types
//!
//! - [`ExtremumFinder`] - Configured min/max search over a slice
//! - [`Extremum`] - Index and value of a found extremum
//! - [`FinderConfig`] - Deserializable finder configuration
//! - [`Sound`] - Mono audio samples with sample rate
//! - [`FrameCutter`] - Fixed-size, hop-spaced frame segmentation
//! - [`ExtremumTrack`] - Per-frame extremum contour
//!
//! # Example
//! ```
//! use extrema_core::ExtremumFinder;
//!
//! let finder = ExtremumFinder::from_name("max").unwrap();
//! let found = finder.find(&[2.0, -5.0, 9.0, 9.0, 0.0]).unwrap();
//! assert_eq!((found.index, found.value), (2, 9.0));
//! ```

pub mod config;
pub mod extremum;
pub mod frame;
pub mod sound;
pub mod track;

// Re-export main types at crate root
pub use config::FinderConfig;
pub use extremum::{argmax, argmin, Extremum, ExtremumFinder, ExtremumMode};
pub use frame::{Frame, FrameCutter, Frames};
pub use sound::Sound;
pub use track::ExtremumTrack;

use thiserror::Error;

/// Errors that can occur in extrema-core operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtremaError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("trying to get {mode} of empty array")]
    EmptyInput { mode: ExtremumMode },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, ExtremaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ExtremaError::EmptyInput {
            mode: ExtremumMode::Min,
        };
        assert_eq!(err.to_string(), "trying to get min of empty array");

        let err = ExtremaError::EmptyInput {
            mode: ExtremumMode::Max,
        };
        assert_eq!(err.to_string(), "trying to get max of empty array");

        let err = ExtremaError::InvalidParameter("hop_size must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: hop_size must be positive");
    }
}
