use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::Style;
use log::warn;

use super::dom::{CssVarChannel, document_anchors};
use super::tracker::{TooltipConfig, TooltipTracker};

const TOOLTIP_CSS: &str = r#"
[data-tooltip] { cursor: help; }
[data-tooltip]:hover::after {
	content: attr(data-tooltip);
	position: fixed;
	left: var(--tooltip-x, 0);
	top: var(--tooltip-y, 0);
	z-index: 1000;
	max-width: 20rem;
	padding: 0.25rem 0.5rem;
	border-radius: 4px;
	background: #222;
	color: #fff;
	font-size: 0.8rem;
	pointer-events: none;
}
[data-tooltip].info-right:hover::after { transform: translateX(-100%); }
"#;

/// Styles for the overlay that hangs off `--tooltip-x` / `--tooltip-y`.
#[component]
pub fn TooltipOverlay() -> impl IntoView {
	view! { <Style>{TOOLTIP_CSS}</Style> }
}

/// Instruments `[data-tooltip]` anchors now and again whenever `refresh` changes.
pub fn use_tooltip_anchors<T>(refresh: Signal<T>)
where
	T: Send + Sync + 'static,
{
	let config = use_context::<TooltipConfig>().unwrap_or_default();
	let Some(channel) = CssVarChannel::document_root() else {
		warn!("tooltip tracking disabled: no document root");
		return;
	};
	let marker = config.marker_attribute.clone();
	let tracker = StoredValue::new_local(TooltipTracker::new(config, Rc::new(channel)));

	Effect::new(move |_| {
		refresh.track();
		tracker.update_value(|t| {
			t.attach(document_anchors(&marker));
		});
	});
}
