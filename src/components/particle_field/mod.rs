//! Decorative floating particle background.
//!
//! Fills a container with small translucent dots, each with its own size,
//! position, and animation timing, and installs one shared CSS `@keyframes`
//! rule that makes them drift. All motion after setup is run by the browser.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldStyle, ParticleField};
//!
//! view! { <ParticleField config=FieldStyle { count: 50, ..FieldStyle::default() } /> }
//! ```
//!
//! Pages without Leptos place `<div id="particles"></div>` in their markup and
//! call the exported `start()` once the module has loaded.

mod component;
mod error;
pub mod field;
pub mod host;
pub mod keyframes;
mod particles;
pub mod random;
pub mod theme;

pub use component::ParticleField;
pub use error::{FieldError, FieldResult};
pub use field::{FieldReport, populate};
pub use particles::Particle;
pub use theme::{Color, FieldStyle, Span};
