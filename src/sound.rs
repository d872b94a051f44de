//! Sound type for audio data representation
//!
//! The Sound type holds mono samples with their sample rate and the time of
//! the first sample. Decoding audio files is left to the caller; a Sound is
//! built from samples that are already in memory.

use crate::extremum::{Extremum, ExtremumFinder, ExtremumMode};
use crate::frame::FrameCutter;
use crate::track::ExtremumTrack;
use crate::Result;

/// Audio samples with associated sample rate and timing information
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    /// Audio samples (mono)
    samples: Vec<f64>,
    /// Sample rate in Hz
    sample_rate: f64,
    /// Start time of the first sample (usually 0.0)
    start_time: f64,
}

impl Sound {
    /// Create a Sound from raw samples
    ///
    /// # Arguments
    /// * `samples` - Audio samples (will be cloned)
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Example
    /// ```
    /// use extrema_core::Sound;
    ///
    /// let samples = vec![0.0, 0.5, 1.0, 0.5, 0.0, -0.5, -1.0, -0.5];
    /// let sound = Sound::from_samples(&samples, 44100.0);
    /// assert_eq!(sound.sample_rate(), 44100.0);
    /// ```
    pub fn from_samples(samples: &[f64], sample_rate: f64) -> Self {
        Self::from_samples_owned(samples.to_vec(), sample_rate)
    }

    /// Create a Sound from owned samples (avoids cloning)
    pub fn from_samples_owned(samples: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
            start_time: 0.0,
        }
    }

    /// Return the same samples shifted to start at `start_time` seconds
    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Get the sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Get a reference to the audio samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Get the number of samples
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Get the total duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Get the start time (time of first sample)
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Get the end time (time just after last sample)
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration()
    }

    /// Get the sample period (time step between samples)
    pub fn dx(&self) -> f64 {
        1.0 / self.sample_rate
    }

    /// Get the time corresponding to a sample index
    ///
    /// The time is at the center of the sample. Negative indices and
    /// indices past the end are allowed (they address zero padding).
    pub fn index_to_time(&self, index: isize) -> f64 {
        self.start_time + (index as f64 + 0.5) / self.sample_rate
    }

    /// Find the first minimum or maximum over the whole signal
    ///
    /// # Errors
    /// Fails with [`crate::ExtremaError::EmptyInput`] when the sound has
    /// no samples.
    pub fn extremum(&self, mode: ExtremumMode) -> Result<Extremum> {
        ExtremumFinder::new(mode).find(&self.samples)
    }

    /// Compute the per-frame extremum contour of this sound
    pub fn to_extremum_track(&self, cutter: &FrameCutter, mode: ExtremumMode) -> Result<ExtremumTrack> {
        ExtremumTrack::from_sound(self, cutter, &ExtremumFinder::new(mode))
    }

    /// Create a pure tone (sine wave)
    ///
    /// # Arguments
    /// * `frequency` - Frequency in Hz
    /// * `duration` - Duration in seconds
    /// * `sample_rate` - Sample rate in Hz
    /// * `amplitude` - Peak amplitude (0.0 to 1.0)
    /// * `phase` - Initial phase in radians
    pub fn create_tone(
        frequency: f64,
        duration: f64,
        sample_rate: f64,
        amplitude: f64,
        phase: f64,
    ) -> Sound {
        let n_samples = (duration * sample_rate).round() as usize;
        let omega = 2.0 * std::f64::consts::PI * frequency / sample_rate;

        let samples: Vec<f64> = (0..n_samples)
            .map(|i| amplitude * (omega * i as f64 + phase).sin())
            .collect();

        Self::from_samples_owned(samples, sample_rate)
    }

    /// Create silence
    pub fn create_silence(duration: f64, sample_rate: f64) -> Sound {
        let n_samples = (duration * sample_rate).round() as usize;
        Self::from_samples_owned(vec![0.0; n_samples], sample_rate)
    }
}
