use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use super::tracker::{AnchorRect, TooltipAnchor, TooltipChannel};

impl TooltipAnchor for Element {
	fn has_attribute(&self, name: &str) -> bool {
		Element::has_attribute(self, name)
	}

	fn has_class(&self, class: &str) -> bool {
		self.class_name().split_whitespace().any(|c| c == class)
	}

	fn bounding_rect(&self) -> AnchorRect {
		let rect = self.get_bounding_client_rect();
		AnchorRect {
			left: rect.left(),
			right: rect.right(),
			bottom: rect.bottom(),
		}
	}

	fn key(&self, attribute: &str) -> Option<String> {
		self.get_attribute(attribute)
	}

	fn set_key(&self, attribute: &str, key: &str) {
		let _ = self.set_attribute(attribute, key);
	}

	fn on_pointer_enter(&self, handler: Box<dyn Fn()>) {
		let callback = Closure::<dyn Fn()>::wrap(handler);
		let _ = self.add_event_listener_with_callback("mouseenter", callback.as_ref().unchecked_ref());
		// Lives as long as the element does.
		callback.forget();
	}
}

/// Publishes coordinates as `px` custom properties on the document root.
pub struct CssVarChannel {
	root: HtmlElement,
}

impl CssVarChannel {
	/// Channel on `<html>`, if there is a document.
	pub fn document_root() -> Option<Self> {
		let root = web_sys::window()?.document()?.document_element()?;
		root.dyn_into::<HtmlElement>().ok().map(|root| Self { root })
	}
}

impl TooltipChannel for CssVarChannel {
	fn publish(&self, key: &str, value: f64) {
		let _ = self.root.style().set_property(key, &format!("{value}px"));
	}
}

/// Every element currently in the document carrying `marker_attribute`.
pub fn document_anchors(marker_attribute: &str) -> Vec<Element> {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return Vec::new();
	};
	let Ok(nodes) = document.query_selector_all(&format!("[{marker_attribute}]")) else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}
