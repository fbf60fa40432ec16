//! Page seams the initializer writes to.
//!
//! The container and the global style scope are passed in explicitly rather
//! than looked up from ambient page state. The DOM implementations wrap
//! `web_sys` nodes; the in-memory ones back headless rendering and tests.

use web_sys::{Document, Element};

use super::error::{FieldError, FieldResult};

/// Id of the element that hosts the particles.
pub const CONTAINER_ID: &str = "particles";

/// Something particles can be appended to.
pub trait ParticleContainer {
	/// Append one child node carrying `css` as its inline style.
	fn append_particle(&mut self, css: &str) -> FieldResult<()>;
}

/// The page-wide style scope.
pub trait StyleScope {
	/// Whether an element with this id already exists.
	fn contains(&self, id: &str) -> bool;

	/// Attach a style rule under the given id.
	fn install(&mut self, id: &str, css: &str) -> FieldResult<()>;
}

/// A live container element.
pub struct DomContainer {
	document: Document,
	element: Element,
}

impl DomContainer {
	/// Look up the container by [`CONTAINER_ID`].
	pub fn find(document: &Document) -> Option<Self> {
		let element = document.get_element_by_id(CONTAINER_ID)?;
		Some(Self {
			document: document.clone(),
			element,
		})
	}

	/// Wrap an element supplied by the caller.
	pub fn new(document: Document, element: Element) -> Self {
		Self { document, element }
	}
}

impl ParticleContainer for DomContainer {
	fn append_particle(&mut self, css: &str) -> FieldResult<()> {
		let node = self.document.create_element("div")?;
		node.set_attribute("style", css)?;
		self.element.append_child(&node)?;
		Ok(())
	}
}

/// `<style>` elements in the document head.
pub struct DomStyleScope {
	document: Document,
}

impl DomStyleScope {
	/// Style scope of `document`.
	pub fn new(document: Document) -> Self {
		Self { document }
	}
}

impl StyleScope for DomStyleScope {
	fn contains(&self, id: &str) -> bool {
		self.document.get_element_by_id(id).is_some()
	}

	fn install(&mut self, id: &str, css: &str) -> FieldResult<()> {
		let style = self.document.create_element("style")?;
		style.set_id(id);
		style.set_text_content(Some(css));

		let parent: Element = match self.document.head() {
			Some(head) => head.into(),
			None => self
				.document
				.document_element()
				.ok_or_else(|| FieldError::dom("document has no root element"))?,
		};
		parent.append_child(&style)?;
		Ok(())
	}
}

/// Container that records inline styles instead of creating nodes.
#[derive(Clone, Debug, Default)]
pub struct MemoryContainer {
	/// Inline style of each appended child, in order
	pub children: Vec<String>,
}

impl ParticleContainer for MemoryContainer {
	fn append_particle(&mut self, css: &str) -> FieldResult<()> {
		self.children.push(css.to_string());
		Ok(())
	}
}

/// Style scope that records `(id, css)` pairs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStyleScope {
	/// Installed rules, in order
	pub rules: Vec<(String, String)>,
}

impl StyleScope for MemoryStyleScope {
	fn contains(&self, id: &str) -> bool {
		self.rules.iter().any(|(rule_id, _)| rule_id == id)
	}

	fn install(&mut self, id: &str, css: &str) -> FieldResult<()> {
		self.rules.push((id.to_string(), css.to_string()));
		Ok(())
	}
}
