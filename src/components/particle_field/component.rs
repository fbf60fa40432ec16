//! Leptos component that renders the particle container.
//!
//! The component emits the `#particles` element itself and fills it once the
//! element is mounted.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use web_sys::Element;

use super::field;
use super::host::CONTAINER_ID;
use super::theme::FieldStyle;

/// Renders a full-size, non-interactive layer of floating particles.
///
/// The layer is absolutely positioned, so its parent should establish a
/// containing block. Pass `config` to override the default field.
#[component]
pub fn ParticleField(#[prop(optional)] config: Option<FieldStyle>) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let populated = Rc::new(Cell::new(false));
	let style = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		// The effect re-runs if the node is replaced; particles are appended once.
		if populated.replace(true) {
			return;
		}
		let element: Element = container.into();
		if let Err(e) = field::populate_element(element, &style) {
			warn!("particle-field: {}", e);
		}
	});

	view! {
		<div
			node_ref=container_ref
			id=CONTAINER_ID
			class="particle-field"
			aria-hidden="true"
			style="position: absolute; inset: 0; overflow: hidden; pointer-events: none;"
		/>
	}
}
