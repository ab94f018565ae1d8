//! Offline transforms over single-channel sample buffers.
//!
//! Every transform borrows a complete input buffer and returns a freshly
//! allocated output; nothing is streamed and nothing is mutated in place.
//! Transforms compose by plain sequential application:
//!
//! ```
//! use voxbuf_dsp::{amplify, codec::pcm, filter, resample, trim};
//!
//! # fn main() -> voxbuf_dsp::Result<()> {
//! let input = pcm::decode_s16le(&[0, 0, 100, 0, 200, 0, 44, 1, 0, 0]);
//! let samples = trim::trim(&input, true, true, 8.0)?;
//! let samples = resample::resample(&samples, 8000, 16000, false)?;
//! let samples = filter::low_pass(&samples, 16000, 3000.0, false)?;
//! let samples = amplify::amplify(&samples, 8.0, -32768.0, 32767.0, true)?;
//! let output = pcm::encode_s16le(&samples);
//! assert_eq!(output.len(), samples.len() * 2);
//! # Ok(())
//! # }
//! ```

pub mod amplify;
pub mod codec;
pub mod error;
pub mod filter;
pub mod math;
pub mod resample;
pub mod trim;

pub use error::{Error, ParameterError, Result};

pub type Sample = math::Real;
