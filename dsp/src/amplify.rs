use tracing::{debug, trace};

use crate::error::{check_threshold, ParameterError, Result};
use crate::math::{clamp, quantize, Real};
use crate::Sample;

/// Peak-relative gain.
///
/// Scales a buffer so that its largest excursion lands on one of the
/// configured bounds without the other bound being exceeded. Buffers that
/// never reach the silence threshold are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplify {
    threshold: Real,
    min: Real,
    max: Real,
    rounding: bool,
}

struct Peaks {
    min: Sample,
    max: Sample,
    silent: bool,
}

impl Peaks {
    /// Note that the first sample seeds the extremes but is never tested
    /// against the threshold.
    fn scan(input: &[Sample], threshold: Real) -> Option<Self> {
        let (&first, rest) = input.split_first()?;
        let mut peaks = Self {
            min: first,
            max: first,
            silent: true,
        };
        for &sample in rest {
            if peaks.silent && sample.abs() >= threshold {
                peaks.silent = false;
            }
            if sample < peaks.min {
                peaks.min = sample;
            } else if sample > peaks.max {
                peaks.max = sample;
            }
        }
        Some(peaks)
    }

    fn ratio(&self, min: Real, max: Real) -> Real {
        let positive = (self.max > 0.0).then(|| max / self.max);
        let negative = (self.min < 0.0).then(|| min / self.min);
        match (positive, negative) {
            (Some(p), Some(n)) => p.min(n),
            (Some(r), None) | (None, Some(r)) => r,
            (None, None) => 1.0,
        }
    }
}

impl Amplify {
    /// `min` must be negative, `max` positive and `threshold` non-negative.
    pub fn new(threshold: Real, min: Real, max: Real) -> Result<Self> {
        let threshold = check_threshold(threshold)?;
        if min >= 0.0 || min.is_nan() {
            return Err(ParameterError::InvalidAmpMin(min).into());
        }
        if max <= 0.0 || max.is_nan() {
            return Err(ParameterError::InvalidAmpMax(max).into());
        }
        Ok(Self {
            threshold,
            min,
            max,
            rounding: false,
        })
    }

    /// Round each scaled sample to an integer before clamping.
    pub fn with_rounding(self, rounding: bool) -> Self {
        Self { rounding, ..self }
    }

    /// The gain [`process`](Self::process) would apply to `input`.
    ///
    /// `None` if `input` is empty or silent.
    pub fn ratio(&self, input: &[Sample]) -> Option<Real> {
        let peaks = Peaks::scan(input, self.threshold)?;
        if peaks.silent {
            None
        } else {
            Some(peaks.ratio(self.min, self.max))
        }
    }

    pub fn process(&self, input: &[Sample]) -> Vec<Sample> {
        let Some(ratio) = self.ratio(input) else {
            trace!(len = input.len(), "silent input, not amplified");
            return input.to_vec();
        };
        debug!(
            len = input.len(),
            ratio,
            min = self.min,
            max = self.max,
            "amplify"
        );
        input
            .iter()
            .map(|&sample| clamp(quantize(sample * ratio, self.rounding), self.min, self.max))
            .collect()
    }
}

/// Amplify `input` so its peaks reach `[amp_min, amp_max]`.
pub fn amplify(
    input: &[Sample],
    threshold: Real,
    amp_min: Real,
    amp_max: Real,
    rounding: bool,
) -> Result<Vec<Sample>> {
    Ok(Amplify::new(threshold, amp_min, amp_max)?
        .with_rounding(rounding)
        .process(input))
}
