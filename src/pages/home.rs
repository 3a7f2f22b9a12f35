use leptos::prelude::*;
use log::error;
use serde::Deserialize;
use web_sys::MouseEvent;

use crate::components::info_panel::{EdgeEvent, InfoPanels, NodeEvent, PmidTitleIndex, SelectionSet};
use crate::components::tooltip::{TooltipOverlay, use_tooltip_anchors};

/// Tap payloads as the graph widget would deliver them.
const SAMPLE_GRAPH: &str = r#"{
	"nodes": [
		{"id": "n1", "label": " TP53 ", "node_type": "Gene", "standardized_id": "7157", "pmids": ["31091453", "30554233"]},
		{"id": "n2", "label": "MDM2", "node_type": "Gene", "standardized_id": "4193", "pmids": ["31091453"]},
		{"id": "n3", "label": "aspirin", "node_type": "Chemical", "standardized_id": "MESH:D001241", "pmids": ["29100000"]},
		{"id": "n4", "label": "breast neoplasms", "node_type": "Disease", "standardized_id": "MESH:D001943", "pmids": ["30554233", "29100000"]},
		{"id": "n5", "label": "human", "node_type": "Species", "standardized_id": "9606", "pmids": []},
		{"id": "n6", "label": "HeLa", "node_type": "CellLine", "standardized_id": "-", "pmids": []}
	],
	"edges": [
		{"id": "e1", "label": "TP53 (interacts with) MDM2", "edge_type": "node", "pmids": ["31091453", "30554233"]},
		{"id": "e2", "label": "aspirin (interacts with) breast neoplasms", "edge_type": "node", "pmids": ["29100000", "12345678"]},
		{"id": "e3", "label": "Community 1 (interacts with) Community 2", "edge_type": "community", "pmids": ["31091453"]}
	],
	"pmid_title": {
		"31091453": "MDM2 inhibitors and p53 reactivation in cancer therapy",
		"30554233": "TP53 mutations in breast cancer",
		"29100000": "Aspirin use and breast cancer risk"
	}
}"#;

#[derive(Clone, Debug, Default, Deserialize)]
struct SampleGraph {
	nodes: Vec<NodeEvent>,
	edges: Vec<EdgeEvent>,
	pmid_title: PmidTitleIndex,
}

fn load_sample() -> SampleGraph {
	serde_json::from_str(SAMPLE_GRAPH).unwrap_or_else(|e| {
		error!("sample graph: {e}");
		SampleGraph::default()
	})
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let SampleGraph {
		nodes,
		edges,
		pmid_title,
	} = load_sample();

	let selected_nodes = RwSignal::new(SelectionSet::default());
	let selected_edges = RwSignal::new(SelectionSet::default());
	let tap_node = RwSignal::new(None::<NodeEvent>);
	let tap_edge = RwSignal::new(None::<EdgeEvent>);
	let titles = Signal::stored(pmid_title);

	use_tooltip_anchors::<SelectionSet>(selected_nodes.into());

	// Tapping selects the entity alone, as the canvas does.
	let node_buttons = nodes
		.into_iter()
		.map(|node| {
			let name = node.label.trim().to_string();
			let kind = node.node_type.to_string();
			view! {
				<button
					class="entity-btn"
					data-tooltip=kind
					on:click=move |_: MouseEvent| {
						tap_node.set(Some(node.clone()));
						selected_edges.set(SelectionSet::default());
						selected_nodes.set([node.id.clone()].into_iter().collect());
					}
				>
					{name}
				</button>
			}
		})
		.collect_view();

	let edge_buttons = edges
		.into_iter()
		.map(|edge| {
			let name = edge.label.clone();
			view! {
				<button
					class="entity-btn"
					on:click=move |_: MouseEvent| {
						tap_edge.set(Some(edge.clone()));
						selected_nodes.set(SelectionSet::default());
						selected_edges.set([edge.id.clone()].into_iter().collect());
					}
				>
					{name}
				</button>
			}
		})
		.collect_view();

	let clear = move |_: MouseEvent| {
		selected_nodes.set(SelectionSet::default());
		selected_edges.set(SelectionSet::default());
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<TooltipOverlay />
			<div class="graph-overlay">
				<h1>"Network Info"</h1>
				<p class="subtitle">
					"Tap a node or edge to show its details."
					<span class="info-right" data-tooltip="Only entities that are still selected get a panel.">
						" (?)"
					</span>
				</p>
			</div>
			<div class="entity-list">
				<h5>"Nodes"</h5>
				{node_buttons}
				<h5>"Edges"</h5>
				{edge_buttons}
				<button class="entity-btn" on:click=clear>"Clear selection"</button>
			</div>
			<InfoPanels
				selected_nodes=selected_nodes
				tap_node=tap_node
				selected_edges=selected_edges
				tap_edge=tap_edge
				titles=titles
			/>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_graph_loads() {
		let sample = load_sample();
		assert_eq!(sample.nodes.len(), 6);
		assert_eq!(sample.edges.len(), 3);
		assert_eq!(sample.pmid_title.len(), 3);
	}
}
