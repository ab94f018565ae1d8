pub type Real = f64;

#[doc(inline)]
pub use std::f64::consts::*;

/// Microseconds per second; the time unit the resampler works in.
pub const MICROS_PER_SECOND: Real = 1_000_000.0;

/// Round to the nearest integer, halves away from zero.
///
/// Thin wrapper around `Real::round` so that every transform quantizes the
/// same way, e.g. `round(-2.5) == -3.0`.
pub fn round(x: Real) -> Real {
    x.round()
}

/// Apply [`round`] only when `rounding` is set.
pub(crate) fn quantize(x: Real, rounding: bool) -> Real {
    if rounding {
        round(x)
    } else {
        x
    }
}

/// Clamp `x` into `[min, max]`.
///
/// Unlike `Real::clamp` this never panics on a malformed range; callers have
/// already validated `min < max`.
pub(crate) fn clamp(x: Real, min: Real, max: Real) -> Real {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_halves_away_from_zero() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(round(0.49), 0.0);
        assert_eq!(round(-0.51), -1.0);
    }

    #[test]
    fn quantize_is_identity_without_rounding() {
        assert_eq!(quantize(1.25, false), 1.25);
        assert_eq!(quantize(1.75, true), 2.0);
    }

    #[test]
    fn clamp_saturates_both_ends() {
        assert_eq!(clamp(-7.0, -5.0, 5.0), -5.0);
        assert_eq!(clamp(7.0, -5.0, 5.0), 5.0);
        assert_eq!(clamp(1.0, -5.0, 5.0), 1.0);
    }
}
