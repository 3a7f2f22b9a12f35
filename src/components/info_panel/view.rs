use leptos::prelude::*;

use super::content::{ContentNode, Table, TableRow};

const TABLE_CLASS: &str = "table table-bordered table-striped table-sm";

/// Renders a panel's content tree.
#[component]
pub fn ContentView(
	/// Tree to render, top-level nodes in order.
	#[prop(into)]
	content: Signal<Vec<ContentNode>>,
) -> impl IntoView {
	move || content.with(|nodes| nodes.iter().map(render_node).collect_view())
}

fn render_node(node: &ContentNode) -> AnyView {
	match node {
		ContentNode::Text { text } => text.clone().into_any(),
		ContentNode::Paragraph { children } => {
			view! { <p>{children.iter().map(render_node).collect_view()}</p> }.into_any()
		}
		ContentNode::Link(link) => {
			let target = link.new_tab.then_some("_blank");
			view! {
				<a href=link.href.clone() target=target rel=target.map(|_| "noopener")>
					{link.label.clone()}
				</a>
			}
			.into_any()
		}
		ContentNode::Table(table) => render_table(table),
	}
}

fn render_table(table: &Table) -> AnyView {
	view! {
		<table class=TABLE_CLASS>
			<thead>{render_row(&table.header)}</thead>
			<tbody>{table.body.iter().map(render_row).collect_view()}</tbody>
		</table>
	}
	.into_any()
}

fn render_row(row: &TableRow) -> AnyView {
	let cells = row
		.cells
		.iter()
		.map(|cell| {
			let children = cell.children.iter().map(render_node).collect_view();
			if cell.header {
				view! { <th>{children}</th> }.into_any()
			} else {
				view! { <td>{children}</td> }.into_any()
			}
		})
		.collect_view();
	view! { <tr>{cells}</tr> }.into_any()
}
