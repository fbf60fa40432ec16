//! Error type for particle field setup.

use wasm_bindgen::JsValue;

/// Result alias used throughout the particle field.
pub type FieldResult<T> = Result<T, FieldError>;

/// Failures while building the field. A missing container is not one of them.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FieldError {
	/// A DOM call threw.
	#[error("dom error: {0}")]
	Dom(String),

	/// The configuration could not be parsed or is out of range.
	#[error("config error: {0}")]
	Config(String),
}

impl FieldError {
	/// Wrap a DOM failure message.
	pub fn dom(msg: impl Into<String>) -> Self {
		Self::Dom(msg.into())
	}

	/// Wrap a configuration failure message.
	pub fn config(msg: impl Into<String>) -> Self {
		Self::Config(msg.into())
	}
}

impl From<JsValue> for FieldError {
	fn from(value: JsValue) -> Self {
		Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
