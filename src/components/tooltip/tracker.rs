use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use serde::Deserialize;

/// Markers and channel keys used by the tooltip tracker.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
	/// Attribute marking an element as a tooltip anchor.
	pub marker_attribute: String,
	/// Class making the tooltip hang from the anchor's right edge.
	pub right_aligned_class: String,
	/// Attribute holding the key of an already instrumented anchor.
	pub key_attribute: String,
	/// Channel key of the horizontal anchor.
	pub x_key: String,
	/// Channel key of the vertical anchor.
	pub y_key: String,
}

impl Default for TooltipConfig {
	fn default() -> Self {
		Self {
			marker_attribute: "data-tooltip".into(),
			right_aligned_class: "info-right".into(),
			key_attribute: "data-tooltip-key".into(),
			x_key: "--tooltip-x".into(),
			y_key: "--tooltip-y".into(),
		}
	}
}

/// Screen-space box of an anchor, as reported on hover.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[allow(missing_docs)]
pub struct AnchorRect {
	pub left: f64,
	pub right: f64,
	pub bottom: f64,
}

/// Where the tooltip overlay is placed.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPosition {
	pub x: f64,
	pub y: f64,
}

/// Right edge for right-aligned anchors, left edge otherwise; always the bottom.
pub fn position_for(rect: AnchorRect, right_aligned: bool) -> TooltipPosition {
	TooltipPosition {
		x: if right_aligned { rect.right } else { rect.left },
		y: rect.bottom,
	}
}

/// Key/value surface the tooltip overlay reads its coordinates from.
/// Every write replaces the previous value for that key.
pub trait TooltipChannel {
	#[allow(missing_docs)]
	fn publish(&self, key: &str, value: f64);
}

/// Element that may carry a tooltip.
#[allow(missing_docs)]
pub trait TooltipAnchor: Clone + 'static {
	fn has_attribute(&self, name: &str) -> bool;
	fn has_class(&self, class: &str) -> bool;
	fn bounding_rect(&self) -> AnchorRect;
	fn key(&self, attribute: &str) -> Option<String>;
	fn set_key(&self, attribute: &str, key: &str);
	fn on_pointer_enter(&self, handler: Box<dyn Fn()>);
}

/// Keys are unique across trackers so two elements never share one.
static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

fn next_key() -> String {
	format!("tt-{}", NEXT_KEY.fetch_add(1, Ordering::Relaxed))
}

/// Instruments tooltip anchors so hovering one publishes where its tooltip goes.
///
/// The key attribute on the element is the only record of instrumentation:
/// a keyed anchor is skipped by this and every other tracker.
pub struct TooltipTracker {
	config: Rc<TooltipConfig>,
	channel: Rc<dyn TooltipChannel>,
	attached: usize,
}

impl TooltipTracker {
	#[allow(missing_docs)]
	pub fn new(config: TooltipConfig, channel: Rc<dyn TooltipChannel>) -> Self {
		Self {
			config: Rc::new(config),
			channel,
			attached: 0,
		}
	}

	/// Returns how many anchors were newly instrumented.
	pub fn attach<A: TooltipAnchor>(&mut self, anchors: impl IntoIterator<Item = A>) -> usize {
		let mut attached = 0;
		for anchor in anchors {
			if !anchor.has_attribute(&self.config.marker_attribute) {
				continue;
			}
			if anchor.key(&self.config.key_attribute).is_some() {
				continue;
			}
			anchor.set_key(&self.config.key_attribute, &next_key());

			let (config, channel, target) = (self.config.clone(), self.channel.clone(), anchor.clone());
			anchor.on_pointer_enter(Box::new(move || {
				let right_aligned = target.has_class(&config.right_aligned_class);
				let position = position_for(target.bounding_rect(), right_aligned);
				channel.publish(&config.x_key, position.x);
				channel.publish(&config.y_key, position.y);
			}));
			attached += 1;
		}
		self.attached += attached;
		debug!("tooltip anchors: {attached} attached, {} total", self.attached);
		attached
	}

	/// Anchors this tracker has instrumented so far.
	pub fn attached(&self) -> usize {
		self.attached
	}
}
