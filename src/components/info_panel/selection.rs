use log::debug;
use serde::Serialize;

use super::builder::{build_edge_panel, build_node_panel};
use super::config::PanelConfig;
use super::content::ContentNode;
use super::error::PanelError;
use super::types::{EdgeEvent, Entity, NodeEvent, PmidTitleIndex, SelectionSet};

/// The two panel containers.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PanelKind {
	Node,
	Edge,
}

impl PanelKind {
	#[allow(missing_docs)]
	pub fn other(self) -> Self {
		match self {
			Self::Node => Self::Edge,
			Self::Edge => Self::Node,
		}
	}
}

/// Which of the two detail panels is on screen. At most one ever is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub enum PanelState {
	#[default]
	Hidden,
	ShowingNode,
	ShowingEdge,
}

impl PanelState {
	/// State with `kind`'s panel up.
	pub fn showing(kind: PanelKind) -> Self {
		match kind {
			PanelKind::Node => Self::ShowingNode,
			PanelKind::Edge => Self::ShowingEdge,
		}
	}

	#[allow(missing_docs)]
	pub fn is_visible(self, kind: PanelKind) -> bool {
		self == Self::showing(kind)
	}

	/// Container style for `kind`'s panel in this state.
	pub fn style(self, kind: PanelKind, config: &PanelConfig) -> VisibilityStyle {
		if self.is_visible(kind) {
			VisibilityStyle::visible(config)
		} else {
			VisibilityStyle::hidden(config)
		}
	}

	/// State after a pass over `kind`'s panel decided `show`.
	fn after(self, kind: PanelKind, show: bool) -> Self {
		if show {
			Self::showing(kind)
		} else if self.is_visible(kind) {
			Self::Hidden
		} else {
			self
		}
	}
}

/// CSS `display` of a panel container.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
	Block,
	None,
}

/// Visibility and stacking of a panel container.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VisibilityStyle {
	pub display: Display,
	pub z_index: i32,
}

impl VisibilityStyle {
	#[allow(missing_docs)]
	pub fn visible(config: &PanelConfig) -> Self {
		Self {
			display: Display::Block,
			z_index: config.z_visible,
		}
	}

	/// Hidden panels sit below everything so they never catch pointer events.
	pub fn hidden(config: &PanelConfig) -> Self {
		Self {
			display: Display::None,
			z_index: config.z_hidden,
		}
	}

	/// Inline `style` attribute value.
	pub fn to_css(self) -> String {
		let display = match self.display {
			Display::Block => "block",
			Display::None => "none",
		};
		format!("display: {display}; z-index: {};", self.z_index)
	}
}

/// What the host applies to one panel container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct RenderDirective {
	pub style: VisibilityStyle,
	pub content: Vec<ContentNode>,
}

impl RenderDirective {
	/// Hidden container with no content.
	pub fn hidden(config: &PanelConfig) -> Self {
		Self {
			style: VisibilityStyle::hidden(config),
			content: Vec::new(),
		}
	}
}

/// Outcome of [`PanelController::decide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
	#[allow(missing_docs)]
	pub should_show: bool,
	/// Stacking order for the tapped kind's panel.
	pub z_order: i32,
	/// The other kind's panel must be forced hidden.
	pub hide_other: bool,
}

/// Result of one tap pass: the new shared state and the directive for the tapped kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct PanelUpdate {
	pub state: PanelState,
	pub directive: RenderDirective,
}

/// Decides panel visibility for tap events. Holds configuration only; the
/// current [`PanelState`] is passed in and a fresh one handed back every time.
#[derive(Clone, Debug, Default)]
pub struct PanelController {
	config: PanelConfig,
}

impl PanelController {
	#[allow(missing_docs)]
	pub fn new(config: PanelConfig) -> Self {
		Self { config }
	}

	#[allow(missing_docs)]
	pub fn config(&self) -> &PanelConfig {
		&self.config
	}

	/// Only an entity that is still part of the selection gets a panel.
	pub fn decide<E: Entity>(&self, selection: &SelectionSet, tapped: Option<&E>, other_open: bool) -> Decision {
		let should_show = tapped.is_some_and(|entity| selection.contains(entity.id()));
		Decision {
			should_show,
			z_order: if should_show {
				self.config.z_visible
			} else {
				self.config.z_hidden
			},
			hide_other: should_show && other_open,
		}
	}

	/// Node-tap pass. Never fails.
	pub fn node_tapped(
		&self,
		state: PanelState,
		selection: &SelectionSet,
		tapped: Option<&NodeEvent>,
		titles: &PmidTitleIndex,
	) -> PanelUpdate {
		let decision = self.decide(selection, tapped, state.is_visible(PanelKind::Edge));
		let content = match tapped {
			Some(node) if decision.should_show => build_node_panel(&self.config, node, titles),
			_ => Vec::new(),
		};
		self.finish(state, PanelKind::Node, decision, content)
	}

	/// Edge-tap pass. Fails only when a selected edge has a malformed label.
	pub fn edge_tapped(
		&self,
		state: PanelState,
		selection: &SelectionSet,
		tapped: Option<&EdgeEvent>,
		titles: &PmidTitleIndex,
	) -> Result<PanelUpdate, PanelError> {
		let decision = self.decide(selection, tapped, state.is_visible(PanelKind::Node));
		let content = match tapped {
			Some(edge) if decision.should_show => build_edge_panel(&self.config, edge, titles)?,
			_ => Vec::new(),
		};
		Ok(self.finish(state, PanelKind::Edge, decision, content))
	}

	/// Takes `kind`'s panel down, e.g. after its content failed to build.
	pub fn hide(&self, state: PanelState, kind: PanelKind) -> PanelUpdate {
		PanelUpdate {
			state: state.after(kind, false),
			directive: RenderDirective::hidden(&self.config),
		}
	}

	fn finish(&self, state: PanelState, kind: PanelKind, decision: Decision, content: Vec<ContentNode>) -> PanelUpdate {
		if decision.hide_other {
			debug!("{:?} panel replaces {:?} panel", kind, kind.other());
		}
		let state = state.after(kind, decision.should_show);
		debug!("{kind:?} tap: show={} -> {state:?}", decision.should_show);
		PanelUpdate {
			state,
			directive: RenderDirective {
				style: state.style(kind, &self.config),
				content,
			},
		}
	}
}
