//! Visual style configuration for the particle field.
//!
//! [`FieldStyle`] holds the particle count, tint, and every randomization
//! range. Its `Default` is the stock violet field; any subset of fields can be
//! overridden from JSON.

use serde::Deserialize;

use super::error::{FieldError, FieldResult};
use super::random::RandomSource;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "(u8, u8, u8)")]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
	/// Alpha in `[0, 1]`
	pub a: f64,
}

impl Color {
	/// Opaque color from 8-bit channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same channels with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color: hex when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl From<(u8, u8, u8)> for Color {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Self::rgb(r, g, b)
	}
}

/// Half-open interval `[min, max)` sampled uniformly.
///
/// Deserializes from a two-element array, e.g. `[10, 25]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct Span {
	/// Inclusive lower bound
	pub min: f64,
	/// Exclusive upper bound
	pub max: f64,
}

impl Span {
	/// Interval `[min, max)`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Draw a value in `[min, max)`.
	pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
		let value = self.min + rng.next_unit() * (self.max - self.min);
		// Unit draws just below 1 can round up onto the excluded bound.
		if value >= self.max {
			self.max.next_down()
		} else {
			value
		}
	}

	/// Whether `value` lies in `[min, max)`.
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value < self.max
	}

	fn is_valid(&self) -> bool {
		self.min.is_finite() && self.max.is_finite() && self.min < self.max
	}
}

impl From<(f64, f64)> for Span {
	fn from((min, max): (f64, f64)) -> Self {
		Self::new(min, max)
	}
}

/// Particle field configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldStyle {
	/// Number of particles appended per initialization
	pub count: usize,
	/// Particle tint; alpha is drawn per particle
	pub color: Color,
	/// Width and height in pixels (drawn independently)
	pub size: Span,
	/// Background alpha
	pub alpha: Span,
	/// Left/top offset as a percentage of the container
	pub position: Span,
	/// Animation cycle length in seconds
	pub duration: Span,
	/// Animation start offset in seconds (negative to start mid-cycle)
	pub delay: Span,
	/// Total width of the keyframe displacement range in pixels, centered on 0
	pub drift: f64,
	/// Fixed seed for reproducible output; `None` uses the browser's RNG
	pub seed: Option<u64>,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			count: 30,
			color: Color::rgb(124, 58, 237),
			size: Span::new(1.0, 5.0),
			alpha: Span::new(0.1, 0.4),
			position: Span::new(0.0, 100.0),
			duration: Span::new(10.0, 25.0),
			delay: Span::new(-20.0, 0.0),
			drift: 100.0,
			seed: None,
		}
	}
}

impl FieldStyle {
	/// Parse a JSON override on top of the defaults and validate the result.
	pub fn from_json(text: &str) -> FieldResult<Self> {
		let style: Self =
			serde_json::from_str(text).map_err(|e| FieldError::config(e.to_string()))?;
		style.validate()?;
		Ok(style)
	}

	/// Reject configurations that cannot produce a visible field.
	pub fn validate(&self) -> FieldResult<()> {
		if self.count == 0 {
			return Err(FieldError::config("count must be at least 1"));
		}
		let spans = [
			("size", self.size),
			("alpha", self.alpha),
			("position", self.position),
			("duration", self.duration),
			("delay", self.delay),
		];
		for (name, span) in spans {
			if !span.is_valid() {
				return Err(FieldError::config(format!(
					"{name} range [{}, {}) is empty or not finite",
					span.min, span.max
				)));
			}
		}
		if self.size.min < 0.0 {
			return Err(FieldError::config("size must not be negative"));
		}
		if self.alpha.min < 0.0 || self.alpha.max > 1.0 {
			return Err(FieldError::config("alpha must lie within [0, 1]"));
		}
		if self.duration.min <= 0.0 {
			return Err(FieldError::config("duration must be positive"));
		}
		if !self.drift.is_finite() || self.drift < 0.0 {
			return Err(FieldError::config("drift must be a non-negative number"));
		}
		Ok(())
	}
}
