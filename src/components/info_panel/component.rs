use leptos::prelude::*;
use log::{error, warn};
use web_sys::MouseEvent;

use super::builder::evidence_file_name;
use super::config::PanelConfig;
use super::content::ContentNode;
use super::evidence::evidence_csv;
use super::export::download_text;
use super::selection::{PanelController, PanelKind, PanelState};
use super::types::{EdgeEvent, NodeEvent, PmidTitleIndex, SelectionSet};
use super::view::ContentView;

/// Node and edge detail panels driven by the graph widget's selection.
///
/// Each panel recomputes when the selection set of its kind changes; the tap
/// payload is read as it stands at that moment. Visibility of both panels is
/// derived from one shared [`PanelState`], so they can never both be shown.
/// Reads an optional [`PanelConfig`] from context.
#[component]
pub fn InfoPanels(
	/// Currently selected nodes.
	#[prop(into)]
	selected_nodes: Signal<SelectionSet>,
	/// Last tapped node.
	#[prop(into)]
	tap_node: Signal<Option<NodeEvent>>,
	/// Currently selected edges.
	#[prop(into)]
	selected_edges: Signal<SelectionSet>,
	/// Last tapped edge.
	#[prop(into)]
	tap_edge: Signal<Option<EdgeEvent>>,
	/// PMID titles for the session.
	#[prop(into)]
	titles: Signal<PmidTitleIndex>,
) -> impl IntoView {
	let controller = StoredValue::new(PanelController::new(
		use_context::<PanelConfig>().unwrap_or_default(),
	));
	let panels = RwSignal::new(PanelState::Hidden);
	let node_content = RwSignal::new(Vec::<ContentNode>::new());
	let edge_content = RwSignal::new(Vec::<ContentNode>::new());

	Effect::new(move |_| {
		let selection = selected_nodes.get();
		let update = controller.with_value(|c| {
			tap_node.with_untracked(|tapped| {
				titles.with_untracked(|t| c.node_tapped(panels.get_untracked(), &selection, tapped.as_ref(), t))
			})
		});
		panels.set(update.state);
		node_content.set(update.directive.content);
	});

	Effect::new(move |_| {
		let selection = selected_edges.get();
		let update = controller.with_value(|c| {
			let state = panels.get_untracked();
			let built = tap_edge.with_untracked(|tapped| {
				titles.with_untracked(|t| c.edge_tapped(state, &selection, tapped.as_ref(), t))
			});
			built.unwrap_or_else(|e| {
				error!("edge panel: {e}");
				c.hide(state, PanelKind::Edge)
			})
		});
		panels.set(update.state);
		edge_content.set(update.directive.content);
	});

	let style = move |kind: PanelKind| controller.with_value(|c| panels.get().style(kind, c.config()).to_css());

	let export_edge = move |_: MouseEvent| {
		let Some(edge) = tap_edge.get_untracked() else {
			return;
		};
		let file = match evidence_file_name(&edge) {
			Ok(name) => name,
			Err(e) => {
				warn!("evidence export: {e}");
				return;
			}
		};
		let csv = titles.with_untracked(|t| evidence_csv(&edge.pmids, t));
		match csv {
			Ok(csv) => {
				if let Err(e) = download_text(&file, &csv, "text/csv") {
					error!("evidence export failed: {e:?}");
				}
			}
			Err(e) => error!("evidence export failed: {e}"),
		}
	};

	view! {
		<div id="bottom-container" class="d-flex">
			<div id="edge-info-container" class="flex-grow-1" style=move || style(PanelKind::Edge)>
				<h5 class="text-center">"Edge Info"</h5>
				<button class="export-btn" on:click=export_edge>"CSV"</button>
				<div id="edge-info">
					<ContentView content=edge_content />
				</div>
			</div>
			<div id="node-info-container" class="flex-grow-1" style=move || style(PanelKind::Node)>
				<h5 class="text-center">"Node Info"</h5>
				<div id="node-info">
					<ContentView content=node_content />
				</div>
			</div>
		</div>
	}
}
