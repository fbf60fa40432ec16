//! Particle field initialization.
//!
//! [`populate`] is the whole behavior: install the shared keyframe rule unless
//! it already exists, then append `count` particles to the container.
//! The DOM entry points below only resolve the page seams and hand off.

use log::{debug, info};
use web_sys::{Document, Element};

use super::error::{FieldError, FieldResult};
use super::host::{DomContainer, DomStyleScope, ParticleContainer, StyleScope};
use super::keyframes::{DriftPattern, KEYFRAMES_STYLE_ID};
use super::particles::Particle;
use super::random::{self, RandomSource};
use super::theme::FieldStyle;

/// What a single initialization did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldReport {
	/// Particles appended by this run
	pub particles: usize,
	/// `false` when the keyframe rule was already present
	pub keyframes_installed: bool,
}

/// Populate `container` and make sure the keyframe rule exists.
///
/// A missing container is not an error: nothing is touched and `Ok(None)` is
/// returned. The rule goes in first, so a failed append leaves at most an
/// unused rule and the particles appended before the failure.
pub fn populate<C, S, R>(
	container: Option<&mut C>,
	scope: &mut S,
	rng: &mut R,
	style: &FieldStyle,
) -> FieldResult<Option<FieldReport>>
where
	C: ParticleContainer + ?Sized,
	S: StyleScope + ?Sized,
	R: RandomSource + ?Sized,
{
	let Some(container) = container else {
		return Ok(None);
	};
	style.validate()?;

	let keyframes_installed = if scope.contains(KEYFRAMES_STYLE_ID) {
		debug!("particle-field: keyframes already present");
		false
	} else {
		let pattern = DriftPattern::sample(style.drift, rng);
		scope.install(KEYFRAMES_STYLE_ID, &pattern.to_css())?;
		debug!("particle-field: installed keyframes {:?}", pattern.offsets);
		true
	};

	for _ in 0..style.count {
		let particle = Particle::sample(style, rng);
		container.append_particle(&particle.to_css(style.color))?;
	}
	info!("particle-field: created {} particles", style.count);

	Ok(Some(FieldReport {
		particles: style.count,
		keyframes_installed,
	}))
}

/// Populate the document's `#particles` element, if it has one.
pub fn populate_document(
	document: &Document,
	style: &FieldStyle,
) -> FieldResult<Option<FieldReport>> {
	let mut container = DomContainer::find(document);
	let mut scope = DomStyleScope::new(document.clone());
	let mut rng = random::source_for(style.seed);
	populate(container.as_mut(), &mut scope, rng.as_mut(), style)
}

/// Populate an element supplied by the caller, e.g. a mounted component.
pub fn populate_element(element: Element, style: &FieldStyle) -> FieldResult<FieldReport> {
	let document = element
		.owner_document()
		.ok_or_else(|| FieldError::dom("container is not attached to a document"))?;
	let mut container = DomContainer::new(document.clone(), element);
	let mut scope = DomStyleScope::new(document);
	let mut rng = random::source_for(style.seed);
	populate(Some(&mut container), &mut scope, rng.as_mut(), style)?
		.ok_or_else(|| FieldError::dom("container vanished during setup"))
}
