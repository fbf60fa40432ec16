//! Ambient particle records and their inline style.

use super::keyframes::KEYFRAMES_NAME;
use super::random::RandomSource;
use super::theme::{Color, FieldStyle};

/// A single floating particle. Never mutated once drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Pixels
	pub width: f64,
	/// Pixels
	pub height: f64,
	/// Background opacity
	pub alpha: f64,
	/// Percent of container width
	pub left: f64,
	/// Percent of container height
	pub top: f64,
	/// Seconds per animation cycle
	pub duration: f64,
	/// Negative start offset in seconds, desynchronizes the field
	pub delay: f64,
}

impl Particle {
	/// Draw every attribute independently from the style's ranges.
	pub fn sample<R: RandomSource + ?Sized>(style: &FieldStyle, rng: &mut R) -> Self {
		Self {
			width: style.size.sample(rng),
			height: style.size.sample(rng),
			alpha: style.alpha.sample(rng),
			left: style.position.sample(rng),
			top: style.position.sample(rng),
			duration: style.duration.sample(rng),
			delay: style.delay.sample(rng),
		}
	}

	/// Inline `style` attribute for the particle's node.
	pub fn to_css(&self, color: Color) -> String {
		format!(
			"position: absolute; width: {}px; height: {}px; background: {}; border-radius: 50%; \
			 left: {}%; top: {}%; animation: {KEYFRAMES_NAME} {}s ease-in-out infinite; \
			 animation-delay: {}s;",
			self.width,
			self.height,
			color.with_alpha(self.alpha).to_css(),
			self.left,
			self.top,
			self.duration,
			self.delay,
		)
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::components::particle_field::random::SeededRandom;
	use crate::components::particle_field::random::tests::TopOfUnit;

	/// Split an inline style into `property -> value`.
	pub(crate) fn declarations(css: &str) -> HashMap<&str, &str> {
		css.split(';')
			.filter_map(|decl| decl.split_once(':'))
			.map(|(k, v)| (k.trim(), v.trim()))
			.collect()
	}

	fn number(value: &str, unit: &str) -> f64 {
		value
			.strip_suffix(unit)
			.unwrap_or_else(|| panic!("{value:?} lacks unit {unit:?}"))
			.parse()
			.unwrap()
	}

	/// Check an emitted inline style against the default ranges.
	pub(crate) fn assert_conforms(css: &str) {
		let decls = declarations(css);
		assert_eq!(decls.len(), 9, "unexpected declarations in {css}");
		assert_eq!(decls["position"], "absolute");
		assert_eq!(decls["border-radius"], "50%");

		for key in ["width", "height"] {
			let v = number(decls[key], "px");
			assert!((1.0..5.0).contains(&v), "{key} = {v}");
		}
		for key in ["left", "top"] {
			let v = number(decls[key], "%");
			assert!((0.0..100.0).contains(&v), "{key} = {v}");
		}

		let alpha: f64 = decls["background"]
			.strip_prefix("rgba(124, 58, 237, ")
			.and_then(|rest| rest.strip_suffix(')'))
			.unwrap()
			.parse()
			.unwrap();
		assert!((0.1..0.4).contains(&alpha), "alpha = {alpha}");

		let parts: Vec<&str> = decls["animation"].split_whitespace().collect();
		assert_eq!(parts.len(), 4);
		assert_eq!(parts[0], "particleFloat");
		assert_eq!(&parts[2..], ["ease-in-out", "infinite"]);
		let duration = number(parts[1], "s");
		assert!((10.0..25.0).contains(&duration), "duration = {duration}");

		let delay = number(decls["animation-delay"], "s");
		assert!((-20.0..0.0).contains(&delay), "delay = {delay}");
	}

	#[test]
	fn sampled_particles_stay_in_range() {
		let style = FieldStyle::default();
		let mut rng = SeededRandom::new(42);
		for _ in 0..500 {
			let p = Particle::sample(&style, &mut rng);
			assert!(style.size.contains(p.width));
			assert!(style.size.contains(p.height));
			assert!(style.alpha.contains(p.alpha));
			assert!(style.position.contains(p.left));
			assert!(style.position.contains(p.top));
			assert!(style.duration.contains(p.duration));
			assert!(style.delay.contains(p.delay));
			assert_conforms(&p.to_css(style.color));
		}
	}

	#[test]
	fn largest_unit_draw_stays_in_range() {
		let style = FieldStyle::default();
		let p = Particle::sample(&style, &mut TopOfUnit);
		assert!(p.width < 5.0 && p.height < 5.0, "size {} x {}", p.width, p.height);
		assert!(p.alpha < 0.4, "alpha {}", p.alpha);
		assert!(p.duration < 25.0, "duration {}", p.duration);
		assert_conforms(&p.to_css(style.color));
	}

	#[test]
	fn css_carries_exact_values() {
		let p = Particle {
			width: 2.5,
			height: 4.0,
			alpha: 0.2,
			left: 10.0,
			top: 99.5,
			duration: 12.0,
			delay: -3.25,
		};
		assert_eq!(
			p.to_css(Color::rgb(124, 58, 237)),
			"position: absolute; width: 2.5px; height: 4px; background: rgba(124, 58, 237, 0.2); \
			 border-radius: 50%; left: 10%; top: 99.5%; animation: particleFloat 12s ease-in-out \
			 infinite; animation-delay: -3.25s;"
		);
	}

	#[test]
	fn attributes_are_drawn_independently() {
		let style = FieldStyle::default();
		let mut rng = SeededRandom::new(3);
		let particles: Vec<Particle> =
			(0..50).map(|_| Particle::sample(&style, &mut rng)).collect();
		assert!(particles.iter().any(|p| p.width != p.height));
		assert!(particles.iter().any(|p| p.left != p.top));
	}
}
