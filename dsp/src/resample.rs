//! Sample rate conversion by piecewise-linear interpolation.
//!
//! Input and output samples are placed on a common time axis (in
//! microseconds) and every output sample is read off the straight line
//! between the two input samples that bracket it. Conversion stops at the
//! first output time that lies beyond the last input sample, so the output
//! never extrapolates.

use tracing::{debug, trace};

use crate::error::{ParameterError, Result};
use crate::math::{quantize, Real, MICROS_PER_SECOND};
use crate::Sample;

/// Linear resampler between two fixed rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resampler {
    from_rate: u32,
    to_rate: u32,
    rounding: bool,
}

/// The span between input samples `index` and `index + 1`.
struct Segment {
    index: usize,
    begin: Real,
    end: Real,
    slope: Real,
}

impl Segment {
    fn first(input: &[Sample], width: Real) -> Self {
        Self {
            index: 0,
            begin: 0.0,
            end: width,
            slope: (input[1] - input[0]) / width,
        }
    }

    fn contains(&self, time: Real) -> bool {
        time >= self.begin && time <= self.end
    }

    /// Step to the following segment, or return `false` if this is the last.
    fn advance(&mut self, input: &[Sample], width: Real) -> bool {
        let next = self.index + 1;
        if next + 1 >= input.len() {
            return false;
        }
        self.index = next;
        self.begin += width;
        self.end += width;
        self.slope = (input[next + 1] - input[next]) / width;
        true
    }

    fn value_at(&self, input: &[Sample], time: Real) -> Sample {
        input[self.index] + self.slope * (time - self.begin)
    }
}

impl Resampler {
    /// Both rates are in Hz and must be at least 1.
    pub fn new(from_rate: u32, to_rate: u32) -> Result<Self> {
        if from_rate < 1 {
            return Err(ParameterError::InvalidSourceRate(from_rate).into());
        }
        if to_rate < 1 {
            return Err(ParameterError::InvalidTargetRate(to_rate).into());
        }
        Ok(Self {
            from_rate,
            to_rate,
            rounding: false,
        })
    }

    /// Round each output sample to an integer.
    pub fn with_rounding(self, rounding: bool) -> Self {
        Self { rounding, ..self }
    }

    pub fn from_rate(&self) -> u32 {
        self.from_rate
    }

    pub fn to_rate(&self) -> u32 {
        self.to_rate
    }

    /// Upper bound on the output length for `input_len` input samples.
    ///
    /// Accumulated rounding in the time axis can make the actual output one
    /// sample shorter.
    pub fn output_len_hint(&self, input_len: usize) -> usize {
        if input_len < 2 {
            return input_len;
        }
        let span =
            (input_len - 1) as Real * Real::from(self.to_rate) / Real::from(self.from_rate);
        span.floor() as usize + 1
    }

    pub fn process(&self, input: &[Sample]) -> Vec<Sample> {
        if input.len() < 2 {
            trace!(len = input.len(), "too short to interpolate, copying");
            return input.to_vec();
        }

        // Time per sample, in microseconds.
        let tps_from = MICROS_PER_SECOND / Real::from(self.from_rate);
        let tps_to = MICROS_PER_SECOND / Real::from(self.to_rate);

        let mut output = Vec::with_capacity(self.output_len_hint(input.len()));
        let mut segment = Segment::first(input, tps_from);
        let mut time = 0.0;
        'outer: loop {
            while !segment.contains(time) {
                if !segment.advance(input, tps_from) {
                    break 'outer;
                }
            }
            output.push(quantize(segment.value_at(input, time), self.rounding));
            time += tps_to;
        }

        debug!(
            from_rate = self.from_rate,
            to_rate = self.to_rate,
            input_len = input.len(),
            output_len = output.len(),
            "resample"
        );
        output
    }
}

/// Convert `input` from `from_rate` Hz to `to_rate` Hz.
pub fn resample(
    input: &[Sample],
    from_rate: u32,
    to_rate: u32,
    rounding: bool,
) -> Result<Vec<Sample>> {
    Ok(Resampler::new(from_rate, to_rate)?
        .with_rounding(rounding)
        .process(input))
}
