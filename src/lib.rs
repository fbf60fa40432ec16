//! particle-field: decorative floating particle background for web pages.
//!
//! This crate provides a WASM entry point that fills a page's `#particles`
//! element with randomized, CSS-animated dots, and a Leptos component that
//! renders the same field inside a Leptos app.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldError, FieldResult, FieldStyle, ParticleField};

/// Id of the optional JSON element overriding the default [`FieldStyle`].
pub const CONFIG_ELEMENT_ID: &str = "particle-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

fn current_document() -> Option<Document> {
	let window: Window = web_sys::window()?;
	window.document()
}

/// Load field configuration from a script element with id="particle-config".
/// Falls back to the defaults when the element is absent or invalid.
fn load_field_style(document: &Document) -> FieldStyle {
	let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
		return FieldStyle::default();
	};
	let json_text = element
		.dyn_into::<HtmlScriptElement>()
		.ok()
		.and_then(|script| script.text().ok());
	style_from_config(json_text)
}

/// Resolve the text of a present config element; `None` means the element
/// could not be read as a script.
fn style_from_config(json_text: Option<String>) -> FieldStyle {
	let Some(json_text) = json_text else {
		warn!("particle-field: #{} is not a readable script element", CONFIG_ELEMENT_ID);
		return FieldStyle::default();
	};

	match FieldStyle::from_json(&json_text) {
		Ok(style) => {
			info!("particle-field: loaded config ({} particles)", style.count);
			style
		}
		Err(e) => {
			warn!("particle-field: ignoring config: {}", e);
			FieldStyle::default()
		}
	}
}

/// Fill `#particles` in the current document right away.
///
/// Does nothing when the page has no such element. Safe to call more than
/// once: the keyframe rule is only installed the first time.
#[wasm_bindgen]
pub fn create_particles() {
	let Some(document) = current_document() else {
		return;
	};
	let style = load_field_style(&document);
	if let Err(e) = components::particle_field::field::populate_document(&document, &style) {
		warn!("particle-field: {}", e);
	}
}

/// Module entry point for plain pages: sets up logging and runs
/// [`create_particles`] once the document's content has loaded.
#[wasm_bindgen]
pub fn start() {
	init_logging();
	let Some(document) = current_document() else {
		return;
	};

	if document.ready_state() != "loading" {
		create_particles();
		return;
	}

	let callback = Closure::once_into_js(create_particles);
	if let Err(e) =
		document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
	{
		warn!("particle-field: {}", FieldError::from(e));
	}
}

/// Demo application: a full-viewport backdrop with the particle field.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="particle-field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div
			class="particle-backdrop"
			style="position: fixed; inset: 0; background: #0f0a1e; color: #e4e0f5;"
		>
			<ParticleField />
			<div class="backdrop-overlay" style="position: relative; padding: 2rem;">
				<h1>"particle-field"</h1>
				<p class="subtitle">"Thirty drifting particles, animated entirely by CSS."</p>
			</div>
		</div>
	}
}
