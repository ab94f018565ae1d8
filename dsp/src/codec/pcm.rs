//! Headerless signed 16-bit little-endian PCM.
//!
//! The sample rate is not part of the encoding; callers carry it alongside
//! the buffer.

use tracing::warn;

use crate::math::{clamp, round, Real};
use crate::Sample;

/// Bytes occupied by one encoded sample.
pub const BYTES_PER_SAMPLE: usize = 2;

const MIN: Real = i16::MIN as Real;
const MAX: Real = i16::MAX as Real;

/// Decode a buffer of packed `i16` little-endian samples.
///
/// One sample is produced per complete 2-byte group. A trailing odd byte is
/// ignored.
pub fn decode_s16le(bytes: &[u8]) -> Vec<Sample> {
    let chunks = bytes.chunks_exact(BYTES_PER_SAMPLE);
    if !chunks.remainder().is_empty() {
        warn!(
            len = bytes.len(),
            "odd-length PCM buffer, dropping trailing byte"
        );
    }
    chunks
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as Sample)
        .collect()
}

/// Encode samples as packed `i16` little-endian.
///
/// Each sample is rounded (halves away from zero) and clamped into the `i16`
/// range. The output is always exactly `2 * samples.len()` bytes long.
pub fn encode_s16le(samples: &[Sample]) -> Vec<u8> {
    let mut output = Vec::with_capacity(samples.len() * BYTES_PER_SAMPLE);
    encode_s16le_into(samples, &mut output);
    output
}

/// Append the encoding of `samples` to `output`.
pub fn encode_s16le_into(samples: &[Sample], output: &mut Vec<u8>) {
    output.reserve(samples.len() * BYTES_PER_SAMPLE);
    for &sample in samples {
        output.extend_from_slice(&to_i16(sample).to_le_bytes());
    }
}

fn to_i16(sample: Sample) -> i16 {
    // `as` saturates and maps NaN to 0; the clamp keeps that explicit.
    clamp(round(sample), MIN, MAX) as i16
}
