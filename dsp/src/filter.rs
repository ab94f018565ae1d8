use tracing::debug;

use crate::error::{ParameterError, Result};
use crate::math::{quantize, Real, TAU};
use crate::Sample;

/// The response of a [`OnePole`] filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Passband {
    LowPass { cutoff: Real },
    HighPass { cutoff: Real },
}

impl Passband {
    pub fn cutoff(&self) -> Real {
        match *self {
            Self::LowPass { cutoff } | Self::HighPass { cutoff } => cutoff,
        }
    }
}

/// First-order recursive filter derived from an RC network.
///
/// With `dt = 1 / rate` and `RC = 1 / (2π·fc)` the discrete smoothing factor
/// of the low-pass is `a = dt / (RC + dt)`, which reduces to
///
/// ```text
///          2π·fc
/// a = --------------
///      2π·fc + rate
/// ```
///
/// and that of the high-pass is `a = RC / (RC + dt)`, i.e.
///
/// ```text
///           rate
/// a = --------------
///      2π·fc + rate
/// ```
///
/// Recursion state never sees rounding; only emitted samples are rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePole {
    passband: Passband,
    a: Real,
    rounding: bool,
}

impl OnePole {
    pub fn new(sample_rate: u32, passband: Passband) -> Result<Self> {
        if sample_rate == 0 {
            return Err(ParameterError::InvalidSampleRate(sample_rate).into());
        }
        let cutoff = passband.cutoff();
        if cutoff <= 0.0 || cutoff.is_nan() {
            return Err(ParameterError::InvalidCutoff(cutoff).into());
        }

        let rate = Real::from(sample_rate);
        let omega = TAU * cutoff;
        let a = match passband {
            Passband::LowPass { .. } => omega / (omega + rate),
            Passband::HighPass { .. } => rate / (omega + rate),
        };
        Ok(Self {
            passband,
            a,
            rounding: false,
        })
    }

    pub fn low_pass(sample_rate: u32, cutoff: Real) -> Result<Self> {
        Self::new(sample_rate, Passband::LowPass { cutoff })
    }

    pub fn high_pass(sample_rate: u32, cutoff: Real) -> Result<Self> {
        Self::new(sample_rate, Passband::HighPass { cutoff })
    }

    /// Round each emitted sample to an integer.
    pub fn with_rounding(self, rounding: bool) -> Self {
        Self { rounding, ..self }
    }

    pub fn passband(&self) -> Passband {
        self.passband
    }

    /// The smoothing factor `a`.
    pub fn coefficient(&self) -> Real {
        self.a
    }

    /// Filter a whole buffer, starting from `y[0] = x[0]`.
    pub fn process(&self, input: &[Sample]) -> Vec<Sample> {
        let Some(&first) = input.first() else {
            return Vec::new();
        };
        debug!(
            len = input.len(),
            passband = ?self.passband,
            a = self.a,
            "one-pole filter"
        );

        let a = self.a;
        let mut output = Vec::with_capacity(input.len());
        output.push(first);

        let mut pre = first;
        match self.passband {
            Passband::LowPass { .. } => {
                let b = 1.0 - a;
                for &sample in &input[1..] {
                    pre = a * sample + b * pre;
                    output.push(quantize(pre, self.rounding));
                }
            }
            Passband::HighPass { .. } => {
                for pair in input.windows(2) {
                    pre = a * (pre + pair[1] - pair[0]);
                    output.push(quantize(pre, self.rounding));
                }
            }
        }
        output
    }
}

/// Low-pass `input`, sampled at `rate` Hz, at `frequency` Hz.
pub fn low_pass(
    input: &[Sample],
    rate: u32,
    frequency: Real,
    rounding: bool,
) -> Result<Vec<Sample>> {
    Ok(OnePole::low_pass(rate, frequency)?
        .with_rounding(rounding)
        .process(input))
}

/// High-pass `input`, sampled at `rate` Hz, at `frequency` Hz.
pub fn high_pass(
    input: &[Sample],
    rate: u32,
    frequency: Real,
    rounding: bool,
) -> Result<Vec<Sample>> {
    Ok(OnePole::high_pass(rate, frequency)?
        .with_rounding(rounding)
        .process(input))
}
