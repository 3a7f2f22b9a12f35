use super::config::PanelConfig;
use super::content::{ContentNode, Link};
use super::error::PanelError;
use super::evidence::build_table;
use super::identifier::resolve;
use super::types::{EdgeEvent, NodeEvent, PmidTitleIndex};

/// Joins the two operands of an edge label.
pub const INTERACTION_SEPARATOR: &str = " (interacts with) ";

/// Splits `"<A> (interacts with) <B>"` into its two operands.
pub fn split_edge_label(label: &str) -> Result<(&str, &str), PanelError> {
	let parts: Vec<&str> = label.split(INTERACTION_SEPARATOR).collect();
	match parts.as_slice() {
		[a, b] => Ok((a, b)),
		_ => Err(PanelError::MalformedEdgeLabel {
			label: label.to_string(),
			parts: parts.len(),
		}),
	}
}

/// `<Kind> 1`/`<Kind> 2` paragraphs followed by the evidence table.
pub fn build_edge_panel(
	config: &PanelConfig,
	edge: &EdgeEvent,
	titles: &PmidTitleIndex,
) -> Result<Vec<ContentNode>, PanelError> {
	let (a, b) = split_edge_label(&edge.label)?;
	let kind = edge.edge_type.operand_kind();
	Ok(vec![
		ContentNode::paragraph(format!("{kind} 1: {a}")),
		ContentNode::paragraph(format!("{kind} 2: {b}")),
		build_table(config, &edge.pmids, titles),
	])
}

/// Name, identifier (linked when resolvable) and evidence table.
pub fn build_node_panel(config: &PanelConfig, node: &NodeEvent, titles: &PmidTitleIndex) -> Vec<ContentNode> {
	let resolved = resolve(&config.urls, &node.node_type, &node.standardized_id);
	let identifier = match resolved.href {
		Some(href) => ContentNode::paragraph_of(vec![
			ContentNode::text("Identifier: "),
			Link::external(href, resolved.display_label).into(),
		]),
		None => ContentNode::paragraph(format!("Identifier: {}", resolved.display_label)),
	};

	vec![
		ContentNode::paragraph(format!("Name: {}", node.label.trim())),
		identifier,
		build_table(config, &node.pmids, titles),
	]
}

/// File name for an edge's evidence export: `<A>_<B>.csv`.
pub fn evidence_file_name(edge: &EdgeEvent) -> Result<String, PanelError> {
	let (a, b) = split_edge_label(&edge.label)?;
	Ok(format!("{a}_{b}.csv"))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::components::info_panel::content::Table;
	use crate::components::info_panel::types::{EdgeType, NodeType};

	fn node(node_type: NodeType, id: &str, label: &str) -> NodeEvent {
		NodeEvent {
			id: "n1".into(),
			label: label.into(),
			node_type,
			standardized_id: id.into(),
			pmids: vec![],
		}
	}

	fn edge(label: &str, edge_type: EdgeType, pmids: &[&str]) -> EdgeEvent {
		EdgeEvent {
			id: "e1".into(),
			label: label.into(),
			edge_type,
			pmids: pmids.iter().map(|s| s.to_string()).collect(),
		}
	}

	fn table(node: &ContentNode) -> &Table {
		match node {
			ContentNode::Table(t) => t,
			other => panic!("expected table, got {other:?}"),
		}
	}

	#[test]
	fn gene_node_links_identifier() {
		let content = build_node_panel(
			&PanelConfig::default(),
			&node(NodeType::Gene, "7157", " TP53 "),
			&PmidTitleIndex::default(),
		);
		assert_eq!(content[0], ContentNode::paragraph("Name: TP53"));
		assert_eq!(
			content[1],
			ContentNode::paragraph_of(vec![
				ContentNode::text("Identifier: "),
				Link::external("https://www.ncbi.nlm.nih.gov/gene/7157", "7157").into(),
			])
		);
		assert!(table(&content[2]).body.is_empty());
	}

	#[test]
	fn unprefixed_chemical_is_plain_identifier() {
		let content = build_node_panel(
			&PanelConfig::default(),
			&node(NodeType::Chemical, "D000068877", "aspirin"),
			&PmidTitleIndex::default(),
		);
		assert_eq!(content[1], ContentNode::paragraph("Identifier: D000068877"));
	}

	#[test]
	fn placeholder_identifier_is_plain() {
		let content = build_node_panel(
			&PanelConfig::default(),
			&node(NodeType::Species, "-", "mouse"),
			&PmidTitleIndex::default(),
		);
		assert_eq!(content[1], ContentNode::paragraph("Identifier: -"));
	}

	#[test]
	fn node_edge_panel() {
		let titles: PmidTitleIndex = [("111", "Study One")].into_iter().collect();
		let content = build_edge_panel(
			&PanelConfig::default(),
			&edge("GeneA (interacts with) GeneB", EdgeType::Node, &["111", "222"]),
			&titles,
		)
		.unwrap();
		assert_eq!(content[0], ContentNode::paragraph("Node 1: GeneA"));
		assert_eq!(content[1], ContentNode::paragraph("Node 2: GeneB"));
		let rows = &table(&content[2]).body;
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0].cells[0].children[0].plain_text(), "1");
		assert_eq!(rows[0].cells[2].children[0].plain_text(), "Study One");
		assert_eq!(rows[1].cells[1].children[0].plain_text(), "222");
		assert_eq!(rows[1].cells[2].children[0].plain_text(), "-");
	}

	#[test]
	fn community_edge_panel() {
		let content = build_edge_panel(
			&PanelConfig::default(),
			&edge("C1 (interacts with) C2", EdgeType::Community, &[]),
			&PmidTitleIndex::default(),
		)
		.unwrap();
		assert_eq!(content[0], ContentNode::paragraph("Community 1: C1"));
		assert_eq!(content[1], ContentNode::paragraph("Community 2: C2"));
	}

	#[test]
	fn malformed_labels_fail() {
		for (label, parts) in [
			("GeneA and GeneB", 1),
			("A (interacts with) B (interacts with) C", 3),
		] {
			let err = build_edge_panel(
				&PanelConfig::default(),
				&edge(label, EdgeType::Node, &["1"]),
				&PmidTitleIndex::default(),
			)
			.unwrap_err();
			assert_eq!(
				err,
				PanelError::MalformedEdgeLabel {
					label: label.into(),
					parts
				}
			);
		}
	}

	#[test]
	fn evidence_file_name_uses_operands() {
		let e = edge("TP53 (interacts with) MDM2", EdgeType::Node, &[]);
		assert_eq!(evidence_file_name(&e).unwrap(), "TP53_MDM2.csv");
	}

	proptest! {
		#[test]
		fn edge_label_round_trips(a in "[A-Za-z0-9 _-]{0,16}", b in "[A-Za-z0-9 _-]{0,16}") {
			prop_assume!(!format!("{a}{b}").contains("(interacts with)"));
			let label = format!("{a}{INTERACTION_SEPARATOR}{b}");
			prop_assert_eq!(split_edge_label(&label).unwrap(), (a.as_str(), b.as_str()));
		}
	}
}
