//! Per-frame extremum contour
//!
//! An [`ExtremumTrack`] runs an [`ExtremumFinder`] once per analysis frame of
//! a [`Sound`] and keeps the per-frame results together with the frame
//! timing, much like any other analysis contour.

use log::{debug, warn};
use serde::Serialize;

use crate::extremum::{Extremum, ExtremumFinder, ExtremumMode};
use crate::frame::FrameCutter;
use crate::{Result, Sound};

/// Extremum positions and values over time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremumTrack {
    /// Mode the track was computed with
    mode: ExtremumMode,
    /// Per-frame extremum index, relative to the frame start
    indices: Vec<usize>,
    /// Per-frame extremum value
    values: Vec<f64>,
    /// Time of first frame center
    start_time: f64,
    /// Time step between frames
    time_step: f64,
    /// Samples per frame
    frame_size: usize,
    /// Samples between frame starts
    hop_size: usize,
    /// Signal index of the first sample of frame 0
    first_frame_start: isize,
}

impl ExtremumTrack {
    /// Compute the track of `sound`, one finder call per frame
    ///
    /// # Errors
    /// Returns [`crate::ExtremaError::InvalidParameter`] if the cutter
    /// parameters are invalid. A sound too short for any frame gives an
    /// empty track.
    pub fn from_sound(sound: &Sound, cutter: &FrameCutter, finder: &ExtremumFinder) -> Result<Self> {
        let mut indices = Vec::new();
        let mut values = Vec::new();
        let mut nan_frames = 0;

        for frame in cutter.frames(sound)? {
            let found = finder.find(&frame.samples)?;
            if found.value.is_nan() {
                nan_frames += 1;
            }
            indices.push(found.index);
            values.push(found.value);
        }

        if nan_frames > 0 {
            warn!(
                "{} of {} frames contain only NaN samples",
                nan_frames,
                values.len()
            );
        }
        debug!(
            "{} track: {} frames (frame_size {}, hop_size {}, start_from_zero {})",
            finder.mode(),
            values.len(),
            cutter.frame_size(),
            cutter.hop_size(),
            cutter.is_start_from_zero()
        );

        Ok(Self {
            mode: finder.mode(),
            indices,
            values,
            start_time: cutter.frame_center_time(sound, 0),
            time_step: cutter.hop_size() as f64 / sound.sample_rate(),
            frame_size: cutter.frame_size(),
            hop_size: cutter.hop_size(),
            first_frame_start: cutter.frame_start(0),
        })
    }

    /// Get the mode the track was computed with
    pub fn mode(&self) -> ExtremumMode {
        self.mode
    }

    /// Get all per-frame extremum indices (relative to each frame)
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Get all per-frame extremum values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of frames
    pub fn num_frames(&self) -> usize {
        self.values.len()
    }

    /// Whether the track has no frames
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the time step between frames
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Get the start time (time of first frame center)
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Get the end time (time of last frame center)
    pub fn end_time(&self) -> f64 {
        if self.values.is_empty() {
            self.start_time
        } else {
            self.start_time + (self.values.len() - 1) as f64 * self.time_step
        }
    }

    /// Get the number of samples per frame
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Get the time of a specific frame
    pub fn get_time_from_frame(&self, frame: usize) -> f64 {
        self.start_time + frame as f64 * self.time_step
    }

    /// Get the frame nearest to a specific time, or None for an empty track
    pub fn get_frame_from_time(&self, time: f64) -> Option<usize> {
        if self.values.is_empty() {
            return None;
        }
        let position = ((time - self.start_time) / self.time_step).round();
        let last = (self.values.len() - 1) as f64;
        Some(position.clamp(0.0, last) as usize)
    }

    /// Get the extremum value of a frame
    pub fn get_value_at_frame(&self, frame: usize) -> Option<f64> {
        self.values.get(frame).copied()
    }

    /// Get the extremum index of a frame, relative to the frame start
    pub fn get_index_at_frame(&self, frame: usize) -> Option<usize> {
        self.indices.get(frame).copied()
    }

    /// Get the signal sample index of a frame's extremum
    ///
    /// The result lies outside `0..num_samples` only when the extremum
    /// was found in a frame's zero padding.
    pub fn get_sample_at_frame(&self, frame: usize) -> Option<isize> {
        let index = *self.indices.get(frame)?;
        Some(self.first_frame_start + (frame * self.hop_size + index) as isize)
    }

    /// Get the smallest per-frame value and the frame holding it
    pub fn min(&self) -> Option<Extremum> {
        ExtremumFinder::new(ExtremumMode::Min).find(&self.values).ok()
    }

    /// Get the largest per-frame value and the frame holding it
    pub fn max(&self) -> Option<Extremum> {
        ExtremumFinder::new(ExtremumMode::Max).find(&self.values).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_track_values_match_frames() {
        let sound = Sound::create_tone(220.0, 0.25, 16000.0, 0.8, 0.3);
        let cutter = FrameCutter::new(256, 128);
        let finder = ExtremumFinder::new(ExtremumMode::Max);

        let track = ExtremumTrack::from_sound(&sound, &cutter, &finder).unwrap();
        assert_eq!(track.num_frames(), cutter.num_frames(sound.num_samples()).unwrap());

        for (k, frame) in cutter.frames(&sound).unwrap().enumerate() {
            let expected = finder.find(&frame.samples).unwrap();
            assert_eq!(track.get_index_at_frame(k), Some(expected.index));
            assert_eq!(track.get_value_at_frame(k), Some(expected.value));
        }
    }

    #[test]
    fn test_sample_positions() {
        // Single impulse at sample 300
        let mut samples = vec![0.0; 1000];
        samples[300] = 1.0;
        let sound = Sound::from_samples_owned(samples, 1000.0);
        let cutter = FrameCutter::new(100, 50).start_from_zero(true);

        let track = sound.to_extremum_track(&cutter, ExtremumMode::Max).unwrap();

        // Frames starting at 250 and 300 both contain the impulse
        assert_eq!(track.get_value_at_frame(5), Some(1.0));
        assert_eq!(track.get_sample_at_frame(5), Some(300));
        assert_eq!(track.get_index_at_frame(6), Some(0));
        assert_eq!(track.get_sample_at_frame(6), Some(300));

        // Frames without the impulse report their first sample
        assert_eq!(track.get_sample_at_frame(0), Some(0));
        assert_eq!(track.get_sample_at_frame(100), None);

        let max = track.max().unwrap();
        assert_eq!(max.index, 5);
        assert_eq!(max.value, 1.0);
    }

    #[test]
    fn test_timing() {
        let sound = Sound::create_silence(1.0, 1000.0).with_start_time(0.5);
        let cutter = FrameCutter::new(100, 10);
        let track = sound.to_extremum_track(&cutter, ExtremumMode::Min).unwrap();

        assert_relative_eq!(track.start_time(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(track.time_step(), 0.01, epsilon = 1e-12);
        assert_relative_eq!(track.get_time_from_frame(10), 0.6, epsilon = 1e-12);
        assert_eq!(track.get_frame_from_time(0.6), Some(10));
        assert_eq!(track.get_frame_from_time(-3.0), Some(0));
        assert_eq!(track.get_frame_from_time(99.0), Some(track.num_frames() - 1));
        assert_relative_eq!(
            track.end_time(),
            track.get_time_from_frame(track.num_frames() - 1),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_empty_track() {
        let sound = Sound::from_samples(&[0.1, 0.2], 1000.0);
        let cutter = FrameCutter::new(4, 2).start_from_zero(true);
        let track = sound.to_extremum_track(&cutter, ExtremumMode::Max).unwrap();

        assert!(track.is_empty());
        assert_eq!(track.min(), None);
        assert_eq!(track.max(), None);
        assert_eq!(track.get_frame_from_time(0.0), None);
        assert_eq!(track.end_time(), track.start_time());
    }

    #[test]
    fn test_invalid_cutter() {
        let sound = Sound::create_silence(0.1, 1000.0);
        let cutter = FrameCutter::new(16, 0);
        assert!(sound.to_extremum_track(&cutter, ExtremumMode::Min).is_err());
    }

    #[test]
    fn test_min_track_of_tone() {
        let sound = Sound::create_tone(50.0, 1.0, 8000.0, 0.5, 0.0);
        // Frames span a full period, so each holds the trough
        let cutter = FrameCutter::new(160, 80).start_from_zero(true);
        let track = sound.to_extremum_track(&cutter, ExtremumMode::Min).unwrap();

        assert_eq!(track.mode(), ExtremumMode::Min);
        for &v in track.values() {
            assert_relative_eq!(v, -0.5, epsilon = 1e-3);
        }
        let min = track.min().unwrap();
        assert_relative_eq!(min.value, -0.5, epsilon = 1e-3);
        assert_relative_eq!(track.max().unwrap().value, -0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_all_nan_frames() {
        let sound = Sound::from_samples(&[f64::NAN; 8], 8.0);
        let cutter = FrameCutter::new(4, 4).start_from_zero(true);
        let track = sound.to_extremum_track(&cutter, ExtremumMode::Max).unwrap();

        assert_eq!(track.num_frames(), 2);
        assert_eq!(track.indices(), &[0, 0]);
        assert!(track.values().iter().all(|v| v.is_nan()));
        assert_eq!(track.get_sample_at_frame(1), Some(4));

        let max = track.max().unwrap();
        assert_eq!(max.index, 0);
        assert!(max.value.is_nan());
        let min = track.min().unwrap();
        assert_eq!(min.index, 0);
        assert!(min.value.is_nan());
    }
}
