//! The shared `@keyframes` rule that drives every particle.
//!
//! Motion is declared once and run by the browser. Displacements for the 25%,
//! 50% and 75% stops are drawn when the rule is built, so all particles share
//! one drift pattern; the per-particle duration and delay keep them apart.

use std::fmt;

use super::random::RandomSource;

/// Animation name referenced by each particle's `animation` property.
pub const KEYFRAMES_NAME: &str = "particleFloat";

/// Id of the `<style>` element holding the rule; presence means installed.
pub const KEYFRAMES_STYLE_ID: &str = "particleKeyframes";

/// Fixed scale and opacity per stop; the rest state is `0%, 100%`.
const STOPS: [(&str, f64, f64); 4] = [
	("0%, 100%", 1.0, 0.3),
	("25%", 1.5, 0.6),
	("50%", 0.8, 0.2),
	("75%", 1.2, 0.5),
];

/// Randomized translation for the 25/50/75% stops.
#[derive(Clone, Debug, PartialEq)]
pub struct DriftPattern {
	/// `(x, y)` pixel offsets for the 25%, 50% and 75% stops
	pub offsets: [(f64, f64); 3],
}

impl DriftPattern {
	/// Draw six displacements in `[-drift / 2, drift / 2)`.
	pub fn sample<R: RandomSource + ?Sized>(drift: f64, rng: &mut R) -> Self {
		let mut offset = || (rng.next_unit() - 0.5) * drift;
		Self {
			offsets: [
				(offset(), offset()),
				(offset(), offset()),
				(offset(), offset()),
			],
		}
	}

	/// Full `@keyframes` block.
	pub fn to_css(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for DriftPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "@keyframes {KEYFRAMES_NAME} {{")?;
		let translations = std::iter::once((0.0, 0.0)).chain(self.offsets);
		for ((selector, scale, opacity), (dx, dy)) in STOPS.into_iter().zip(translations) {
			writeln!(
				f,
				"\t{selector} {{ transform: translate({dx}px, {dy}px) scale({scale}); \
				 opacity: {opacity}; }}"
			)?;
		}
		write!(f, "}}")
	}
}
