//! Fixed-size frame segmentation
//!
//! A [`FrameCutter`] slices a signal into frames of `frame_size` samples whose
//! starts are `hop_size` samples apart. Frames that reach outside the signal
//! are zero-filled there, so every frame has exactly `frame_size` samples.
//!
//! Placement for a signal of `n` samples:
//! - centered (default): frame `k` starts at `k * hop_size - frame_size / 2`,
//!   so the first frame is centered on sample 0. Frames are produced while
//!   their center sample lies inside the signal.
//! - `start_from_zero`: frame `k` starts at `k * hop_size`. Only frames lying
//!   entirely inside the signal are produced, unless
//!   `last_frame_to_end_of_file` is set, in which case frames are produced
//!   while their start lies inside the signal.
//!
//! A frame with fewer than `valid_frame_threshold_ratio * frame_size`
//! in-signal samples ends the sequence.

use log::trace;

use crate::{ExtremaError, Result, Sound};

/// One analysis frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Position of this frame in the frame sequence
    pub index: usize,
    /// Signal index of the first sample; negative when the frame starts in
    /// the leading zero padding
    pub start_sample: isize,
    /// Frame samples, always `frame_size` long
    pub samples: Vec<f64>,
}

impl Frame {
    /// Signal index of sample `offset` within this frame
    pub fn sample_index(&self, offset: usize) -> isize {
        self.start_sample + offset as isize
    }
}

/// Frame segmentation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCutter {
    frame_size: usize,
    hop_size: usize,
    start_from_zero: bool,
    last_frame_to_end_of_file: bool,
    valid_frame_threshold_ratio: f64,
}

impl FrameCutter {
    /// Create a cutter with centered frames and no validity threshold
    ///
    /// Parameters are checked by [`FrameCutter::validate`], which every
    /// frame-producing method calls.
    pub fn new(frame_size: usize, hop_size: usize) -> Self {
        Self {
            frame_size,
            hop_size,
            start_from_zero: false,
            last_frame_to_end_of_file: false,
            valid_frame_threshold_ratio: 0.0,
        }
    }

    /// Start the first frame at sample 0 instead of centering it there
    pub fn start_from_zero(mut self, start_from_zero: bool) -> Self {
        self.start_from_zero = start_from_zero;
        self
    }

    /// With `start_from_zero`, keep zero-padded frames up to the end of the signal
    pub fn last_frame_to_end_of_file(mut self, last_frame_to_end_of_file: bool) -> Self {
        self.last_frame_to_end_of_file = last_frame_to_end_of_file;
        self
    }

    /// Minimum fraction of in-signal samples a frame needs (0.0 to 0.5)
    pub fn valid_frame_threshold_ratio(mut self, ratio: f64) -> Self {
        self.valid_frame_threshold_ratio = ratio;
        self
    }

    /// Get the number of samples per frame
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Get the number of samples between frame starts
    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    /// Whether the first frame starts at sample 0 (rather than centered on it)
    pub fn is_start_from_zero(&self) -> bool {
        self.start_from_zero
    }

    /// Check the parameters
    ///
    /// # Errors
    /// Returns [`ExtremaError::InvalidParameter`] for a zero frame or hop
    /// size, a frame or hop size above `isize::MAX`, or a threshold ratio
    /// outside `[0.0, 0.5]`.
    pub fn validate(&self) -> Result<()> {
        if self.frame_size == 0 {
            return Err(ExtremaError::InvalidParameter(
                "frame_size must be positive".to_string(),
            ));
        }
        if self.hop_size == 0 {
            return Err(ExtremaError::InvalidParameter(
                "hop_size must be positive".to_string(),
            ));
        }
        if self.frame_size > isize::MAX as usize || self.hop_size > isize::MAX as usize {
            return Err(ExtremaError::InvalidParameter(format!(
                "frame_size and hop_size must not exceed {}",
                isize::MAX
            )));
        }
        if !(0.0..=0.5).contains(&self.valid_frame_threshold_ratio) {
            return Err(ExtremaError::InvalidParameter(format!(
                "valid_frame_threshold_ratio must be in [0, 0.5], got {}",
                self.valid_frame_threshold_ratio
            )));
        }
        Ok(())
    }

    /// Iterate over the frames of a sound
    pub fn frames<'a>(&self, sound: &'a Sound) -> Result<Frames<'a>> {
        self.frames_from_samples(sound.samples())
    }

    /// Iterate over the frames of a raw sample slice
    pub fn frames_from_samples<'a>(&self, samples: &'a [f64]) -> Result<Frames<'a>> {
        self.validate()?;
        Ok(Frames {
            cutter: *self,
            samples,
            next: 0,
            done: false,
        })
    }

    /// Count the frames a signal of `num_samples` samples produces
    pub fn num_frames(&self, num_samples: usize) -> Result<usize> {
        self.validate()?;
        let mut count = 0;
        while self.accepts(count, num_samples) {
            count += 1;
        }
        Ok(count)
    }

    /// Signal index of the first sample of frame `k`
    ///
    /// Saturates at `isize::MAX` for frames too far out to be addressed,
    /// which no signal ever reaches.
    pub fn frame_start(&self, k: usize) -> isize {
        let offset = k.saturating_mul(self.hop_size).min(isize::MAX as usize) as isize;
        if self.start_from_zero {
            offset
        } else {
            offset.saturating_sub(self.half_frame())
        }
    }

    fn half_frame(&self) -> isize {
        (self.frame_size / 2).min(isize::MAX as usize) as isize
    }

    fn frame_len(&self) -> isize {
        self.frame_size.min(isize::MAX as usize) as isize
    }

    /// Time of the center of frame `k` in `sound`
    pub fn frame_center_time(&self, sound: &Sound, k: usize) -> f64 {
        let center = self.frame_start(k) as f64 + self.frame_size as f64 / 2.0;
        sound.start_time() + center / sound.sample_rate()
    }

    /// Whether frame `k` is placed inside a signal of `n` samples
    fn is_placed(&self, k: usize, n: usize) -> bool {
        let start = self.frame_start(k);
        let n = n as isize;
        if !self.start_from_zero {
            start.saturating_add(self.half_frame()) < n
        } else if self.last_frame_to_end_of_file {
            start < n
        } else {
            start.saturating_add(self.frame_len()) <= n
        }
    }

    /// Number of samples of frame `k` that lie inside the signal
    fn valid_samples(&self, k: usize, n: usize) -> usize {
        let start = self.frame_start(k);
        let first = start.max(0);
        let last = start.saturating_add(self.frame_len()).min(n as isize);
        (last - first).max(0) as usize
    }

    fn accepts(&self, k: usize, n: usize) -> bool {
        if !self.is_placed(k, n) {
            return false;
        }
        let valid = self.valid_samples(k, n);
        if (valid as f64) < self.valid_frame_threshold_ratio * self.frame_size as f64 {
            trace!(
                "dropping frame {}: {} of {} samples inside the signal",
                k,
                valid,
                self.frame_size
            );
            return false;
        }
        true
    }
}

/// Lazy iterator over the frames of a signal
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    cutter: FrameCutter,
    samples: &'a [f64],
    next: usize,
    done: bool,
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        let k = self.next;
        if !self.cutter.accepts(k, self.samples.len()) {
            self.done = true;
            return None;
        }

        let start = self.cutter.frame_start(k);
        let samples = (0..self.cutter.frame_size)
            .map(|offset| {
                let index = start.saturating_add(offset as isize);
                if index < 0 {
                    0.0
                } else {
                    self.samples.get(index as usize).copied().unwrap_or(0.0)
                }
            })
            .collect();

        self.next += 1;
        Some(Frame {
            index: k,
            start_sample: start,
            samples,
        })
    }
}
