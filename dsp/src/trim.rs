//! Removal of silent leading and trailing samples.

use std::ops::Range;

use tracing::debug;

use crate::error::{check_threshold, Result};
use crate::math::Real;
use crate::Sample;

/// Samples whose magnitude is at or below this are silent by default.
pub const DEFAULT_TRIM_THRESHOLD: Real = 8.0;

/// Silence trimmer.
///
/// The default trims both edges with [`DEFAULT_TRIM_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trim {
    left: bool,
    right: bool,
    threshold: Real,
}

impl Default for Trim {
    fn default() -> Self {
        Self {
            left: true,
            right: true,
            threshold: DEFAULT_TRIM_THRESHOLD,
        }
    }
}

impl Trim {
    /// Whether silence at the start of the buffer is removed.
    pub fn left(self, left: bool) -> Self {
        Self { left, ..self }
    }

    /// Whether silence at the end of the buffer is removed.
    pub fn right(self, right: bool) -> Self {
        Self { right, ..self }
    }

    /// The largest magnitude still considered silent.
    ///
    /// Not validated until the trimmer is applied.
    pub fn threshold(self, threshold: Real) -> Self {
        Self { threshold, ..self }
    }

    /// The index range of `input` that survives trimming.
    ///
    /// The range is empty when the edges meet, e.g. for an empty or entirely
    /// silent buffer.
    pub fn edges(&self, input: &[Sample]) -> Result<Range<usize>> {
        let threshold = check_threshold(self.threshold)?;
        let silent = |sample: Sample| sample.abs() <= threshold;

        let start = if self.left {
            input.iter().take_while(|&&s| silent(s)).count()
        } else {
            0
        };
        let end = if self.right {
            input.len() - input.iter().rev().take_while(|&&s| silent(s)).count()
        } else {
            input.len()
        };

        // The edges are scanned independently and cross on all-silent input.
        Ok(start..end.max(start))
    }

    /// Copy out the non-silent part of `input`.
    pub fn process(&self, input: &[Sample]) -> Result<Vec<Sample>> {
        let edges = self.edges(input)?;
        debug!(
            len = input.len(),
            start = edges.start,
            end = edges.end,
            threshold = self.threshold,
            "trim"
        );
        Ok(input[edges].to_vec())
    }
}

/// Trim silence from one or both edges of `input`.
///
/// `Trim::default()` trims both edges at [`DEFAULT_TRIM_THRESHOLD`].
pub fn trim(
    input: &[Sample],
    trim_left: bool,
    trim_right: bool,
    threshold: Real,
) -> Result<Vec<Sample>> {
    Trim::default()
        .left(trim_left)
        .right(trim_right)
        .threshold(threshold)
        .process(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ParameterError};

    #[test]
    fn trims_both_edges_by_default() {
        let input = [0.0, 3.0, -8.0, 9.0, 0.0, -20.0, 8.0, 1.0];
        assert_eq!(Trim::default().process(&input), Ok(vec![9.0, 0.0, -20.0]));
    }

    #[test]
    fn single_edge() {
        let input = [0.0, 50.0, 0.0];
        assert_eq!(trim(&input, true, false, 8.0), Ok(vec![50.0, 0.0]));
        assert_eq!(trim(&input, false, true, 8.0), Ok(vec![0.0, 50.0]));
    }

    #[test]
    fn no_edges_is_identity() {
        let input = [0.0, 1.0, 2.0, 0.0];
        for threshold in [0.0, 1.0, 100.0] {
            assert_eq!(trim(&input, false, false, threshold), Ok(input.to_vec()));
        }
    }

    #[test]
    fn all_silent_is_empty() {
        let input = [1.0, -2.0, 8.0, -8.0];
        assert_eq!(Trim::default().process(&input), Ok(vec![]));
        assert_eq!(Trim::default().edges(&input), Ok(4..4));
        assert_eq!(Trim::default().process(&[]), Ok(vec![]));
    }

    #[test]
    fn zero_threshold_keeps_nonzero_samples() {
        let input = [0.0, 0.0, 0.5, 0.0];
        assert_eq!(trim(&input, true, true, 0.0), Ok(vec![0.5]));
    }

    #[test]
    fn idempotent() {
        let input = [0.0, 2.0, 30.0, 4.0, -50.0, 1.0, 0.0];
        let once = Trim::default().process(&input).unwrap();
        let twice = Trim::default().process(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_negative_threshold() {
        assert_eq!(
            trim(&[1.0], true, true, -1.0),
            Err(Error::Parameter(ParameterError::NegativeThreshold(-1.0)))
        );
        // Rejected even when no edge is trimmed.
        assert!(trim(&[1.0], false, false, -1.0).is_err());
    }
}
