//! Sources of uniform randomness for particle and keyframe draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Yields uniform samples in `[0, 1)`.
pub trait RandomSource {
	/// Next uniform sample in `[0, 1)`.
	fn next_unit(&mut self) -> f64;
}

/// The browser's `Math.random`. Only usable on the wasm32 target.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
	fn next_unit(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Deterministic source for reproducible fields and tests.
#[derive(Clone, Debug)]
pub struct SeededRandom {
	rng: SmallRng,
}

impl SeededRandom {
	/// Source that yields the same sequence for the same seed.
	pub fn new(seed: u64) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
		}
	}
}

impl RandomSource for SeededRandom {
	fn next_unit(&mut self) -> f64 {
		self.rng.random::<f64>()
	}
}

/// Pick the seeded source when a seed is configured, the browser's otherwise.
pub fn source_for(seed: Option<u64>) -> Box<dyn RandomSource> {
	match seed {
		Some(seed) => Box::new(SeededRandom::new(seed)),
		None => Box::new(BrowserRandom),
	}
}
