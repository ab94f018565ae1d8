#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use tracing_subscriber::EnvFilter;
use voxbuf_dsp::math::{Real, TAU};
use voxbuf_dsp::Sample;

/// Route library events to the test harness. Set `RUST_LOG=voxbuf_dsp=debug`
/// to see them.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `len` samples of a sine at `frequency` Hz, sampled at `rate` Hz.
pub fn sine(len: usize, rate: u32, frequency: Real, amplitude: Real) -> Vec<Sample> {
    (0..len)
        .map(|i| amplitude * (TAU * frequency * i as Real / Real::from(rate)).sin())
        .collect()
}

/// Gaussian noise around `offset`.
pub fn noise(rng: &mut impl Rng, len: usize, offset: Real, std_dev: Real) -> Vec<Sample> {
    let distr = Normal::new(offset, std_dev).unwrap();
    (0..len).map(|_| rng.sample(distr)).collect()
}

/// Random buffer with a silent lead-in and tail.
pub fn padded_burst(rng: &mut impl Rng, threshold: Real) -> Vec<Sample> {
    let lead = rng.gen_range(0..20);
    let body = rng.gen_range(0..50);
    let tail = rng.gen_range(0..20);
    let mut samples = Vec::with_capacity(lead + body + tail);
    samples.extend((0..lead).map(|_| rng.gen_range(-threshold..=threshold)));
    samples.extend((0..body).map(|_| rng.gen_range(-2000.0..2000.0)));
    samples.extend((0..tail).map(|_| rng.gen_range(-threshold..=threshold)));
    samples
}

pub fn mean(samples: &[Sample]) -> Real {
    samples.iter().sum::<Real>() / samples.len() as Real
}

pub fn variance(samples: &[Sample]) -> Real {
    let mean = mean(samples);
    samples.iter().map(|s| (s - mean).powi(2)).sum::<Real>() / samples.len() as Real
}
