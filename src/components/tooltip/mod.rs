mod component;
mod dom;
mod tracker;

pub use component::{TooltipOverlay, use_tooltip_anchors};
pub use dom::{CssVarChannel, document_anchors};
pub use tracker::{
	AnchorRect, TooltipAnchor, TooltipChannel, TooltipConfig, TooltipPosition, TooltipTracker,
	position_for,
};
