//! Conversions between sample buffers and raw byte encodings.

pub mod pcm;
