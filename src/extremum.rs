//! Minimum/maximum search over sample sequences
//!
//! An [`ExtremumFinder`] is configured once with an [`ExtremumMode`] and can
//! then be applied to any number of sequences, e.g. once per analysis frame.
//! The search is a single linear pass; ties resolve to the first occurrence.
//!
//! NaN samples never win a comparison and are skipped. A sequence made only
//! of NaN reports index 0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ExtremaError, Result};

/// Direction of the extremum search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremumMode {
    /// Smallest value
    #[default]
    Min,
    /// Largest value
    Max,
}

impl ExtremumMode {
    /// The configuration name of this mode (`"min"` or `"max"`)
    pub fn name(self) -> &'static str {
        match self {
            ExtremumMode::Min => "min",
            ExtremumMode::Max => "max",
        }
    }

    /// Whether `candidate` strictly beats `best` in this mode
    fn beats(self, candidate: f64, best: f64) -> bool {
        match self {
            ExtremumMode::Min => candidate < best,
            ExtremumMode::Max => candidate > best,
        }
    }
}

impl fmt::Display for ExtremumMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtremumMode {
    type Err = ExtremaError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "min" => Ok(ExtremumMode::Min),
            "max" => Ok(ExtremumMode::Max),
            other => Err(ExtremaError::InvalidConfiguration(format!(
                "unknown operation: {}",
                other
            ))),
        }
    }
}

/// Position and value of an extremum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extremum {
    /// Index of the first element attaining the extremum
    pub index: usize,
    /// The extremal value itself
    pub value: f64,
}

/// Min/max search configured with a fixed mode
///
/// # Example
/// ```
/// use extrema_core::{ExtremumFinder, ExtremumMode};
///
/// let finder = ExtremumFinder::new(ExtremumMode::Min);
/// let found = finder.find(&[3.0, 1.0, 3.0, 1.0]).unwrap();
/// assert_eq!(found.index, 1);
/// assert_eq!(found.value, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtremumFinder {
    mode: ExtremumMode,
}

impl ExtremumFinder {
    /// Create a finder for the given mode
    pub fn new(mode: ExtremumMode) -> Self {
        Self { mode }
    }

    /// Create a finder from a mode name (`"min"` or `"max"`)
    ///
    /// # Errors
    /// Returns [`ExtremaError::InvalidConfiguration`] for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Get the configured mode
    pub fn mode(&self) -> ExtremumMode {
        self.mode
    }

    /// Return a new finder with a different mode; `self` is left unchanged
    pub fn with_mode(&self, mode: ExtremumMode) -> Self {
        Self { mode }
    }

    /// Find the first extremum of `samples`
    ///
    /// # Errors
    /// Returns [`ExtremaError::EmptyInput`] if `samples` is empty. The finder
    /// stays usable for later calls.
    pub fn find(&self, samples: &[f64]) -> Result<Extremum> {
        let index =
            scan(samples, self.mode).ok_or(ExtremaError::EmptyInput { mode: self.mode })?;
        Ok(Extremum {
            index,
            value: samples[index],
        })
    }
}

/// Index of the first minimum, or None for an empty slice
pub fn argmin(samples: &[f64]) -> Option<usize> {
    scan(samples, ExtremumMode::Min)
}

/// Index of the first maximum, or None for an empty slice
pub fn argmax(samples: &[f64]) -> Option<usize> {
    scan(samples, ExtremumMode::Max)
}

fn scan(samples: &[f64], mode: ExtremumMode) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in samples.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if !mode.beats(v, b) => {}
            _ => best = Some((i, v)),
        }
    }

    // All-NaN input
    Some(best.map_or(0, |(i, _)| i))
}
