use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Biomedical concept type carried by a graph node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
	/// Organism, linked to NCBI Taxonomy.
	Species,
	/// Linked to NCBI Gene.
	Gene,
	/// Linked to MeSH when the id carries an ontology prefix.
	Chemical,
	/// Linked to MeSH when the id carries an ontology prefix.
	Disease,
	#[allow(missing_docs)]
	CellLine,
	#[allow(missing_docs)]
	DnaMutation,
	#[allow(missing_docs)]
	ProteinMutation,
	#[allow(missing_docs)]
	Snp,
	/// Any type name not listed above, kept verbatim.
	Other(String),
}

impl Default for NodeType {
	/// Untyped nodes never link anywhere.
	fn default() -> Self {
		Self::Other(String::new())
	}
}

impl From<&str> for NodeType {
	fn from(value: &str) -> Self {
		match value {
			"Species" => Self::Species,
			"Gene" => Self::Gene,
			"Chemical" => Self::Chemical,
			"Disease" => Self::Disease,
			"CellLine" => Self::CellLine,
			"DNAMutation" => Self::DnaMutation,
			"ProteinMutation" => Self::ProteinMutation,
			"SNP" => Self::Snp,
			other => Self::Other(other.to_string()),
		}
	}
}

impl From<String> for NodeType {
	fn from(value: String) -> Self {
		Self::from(value.as_str())
	}
}

impl fmt::Display for NodeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Species => "Species",
			Self::Gene => "Gene",
			Self::Chemical => "Chemical",
			Self::Disease => "Disease",
			Self::CellLine => "CellLine",
			Self::DnaMutation => "DNAMutation",
			Self::ProteinMutation => "ProteinMutation",
			Self::Snp => "SNP",
			Self::Other(name) => name,
		};
		f.write_str(name)
	}
}

impl<'de> Deserialize<'de> for NodeType {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		String::deserialize(deserializer).map(Self::from)
	}
}

/// Whether an edge joins two nodes or two collapsed communities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EdgeType {
	/// `node-edge` or `node`.
	#[default]
	Node,
	/// `community-edge` or `community`.
	Community,
	/// Unrecognized type name.
	Other(String),
}

impl EdgeType {
	/// Word used in the "<Kind> 1: ..." paragraphs of the edge panel.
	pub fn operand_kind(&self) -> &'static str {
		match self {
			Self::Node => "Node",
			Self::Community => "Community",
			Self::Other(_) => "Entity",
		}
	}
}

impl From<&str> for EdgeType {
	fn from(value: &str) -> Self {
		match value {
			"node-edge" | "node" => Self::Node,
			"community-edge" | "community" => Self::Community,
			other => Self::Other(other.to_string()),
		}
	}
}

impl<'de> Deserialize<'de> for EdgeType {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		String::deserialize(deserializer).map(|s| Self::from(s.as_str()))
	}
}

/// Anything the graph widget can report as tapped.
pub trait Entity {
	/// Id unique among entities of its kind.
	fn id(&self) -> &str;
}

/// Tap payload for a node.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct NodeEvent {
	pub id: String,
	#[serde(default)]
	pub label: String,
	#[serde(default, alias = "nodeType")]
	pub node_type: NodeType,
	#[serde(default, alias = "standardizedId")]
	pub standardized_id: String,
	#[serde(default)]
	pub pmids: Vec<String>,
}

impl Entity for NodeEvent {
	fn id(&self) -> &str {
		&self.id
	}
}

/// Tap payload for an edge. `label` reads `"<A> (interacts with) <B>"`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct EdgeEvent {
	pub id: String,
	pub label: String,
	#[serde(default, alias = "edgeType")]
	pub edge_type: EdgeType,
	#[serde(default)]
	pub pmids: Vec<String>,
}

impl Entity for EdgeEvent {
	fn id(&self) -> &str {
		&self.id
	}
}

/// One entry of the widget's multi-selection; only the id matters here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SelectedEntity {
	#[allow(missing_docs)]
	pub id: String,
}

impl Entity for SelectedEntity {
	fn id(&self) -> &str {
		&self.id
	}
}

/// Currently selected entities of one kind. Order is irrelevant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(#[allow(missing_docs)] pub Vec<SelectedEntity>);

impl SelectionSet {
	/// Exact id match against every entry.
	pub fn contains(&self, id: &str) -> bool {
		self.0.iter().any(|entry| entry.id == id)
	}

	/// Nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(|id| SelectedEntity { id: id.into() }).collect())
	}
}

/// PMID to publication title, loaded once per session and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PmidTitleIndex(HashMap<String, String>);

impl PmidTitleIndex {
	/// Title of `pmid`, if the index has one.
	pub fn title(&self, pmid: &str) -> Option<&str> {
		self.0.get(pmid).map(String::as_str)
	}

	/// Number of indexed publications.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// No titles loaded.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PmidTitleIndex {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_event_from_widget_json() {
		let node: NodeEvent = serde_json::from_str(
			r##"{"id":"n1","label":" TP53 ","node_type":"Gene","standardized_id":"7157","pmids":["1","2"],"color":"#fff"}"##,
		)
		.unwrap();
		assert_eq!(node.node_type, NodeType::Gene);
		assert_eq!(node.standardized_id, "7157");
		assert_eq!(node.pmids, vec!["1", "2"]);
	}

	#[test]
	fn node_event_accepts_camel_case_and_defaults() {
		let node: NodeEvent =
			serde_json::from_str(r#"{"id":"n2","nodeType":"Mystery"}"#).unwrap();
		assert_eq!(node.node_type, NodeType::Other("Mystery".into()));
		assert_eq!(node.standardized_id, "");
		assert!(node.pmids.is_empty());
	}

	#[test]
	fn node_event_without_type_is_untyped() {
		let node: NodeEvent =
			serde_json::from_str(r#"{"id":"n3","label":"x","standardized_id":"7157"}"#).unwrap();
		assert_eq!(node.node_type, NodeType::Other(String::new()));
	}

	#[test]
	fn edge_type_accepts_short_and_long_names() {
		for (raw, expected) in [
			("node-edge", EdgeType::Node),
			("node", EdgeType::Node),
			("community-edge", EdgeType::Community),
			("community", EdgeType::Community),
		] {
			assert_eq!(EdgeType::from(raw), expected);
		}
		assert_eq!(EdgeType::from("weird").operand_kind(), "Entity");
	}

	#[test]
	fn selection_set_membership_is_exact() {
		let set: SelectionSet = ["e1", "e22"].into_iter().collect();
		assert!(set.contains("e1"));
		assert!(!set.contains("e2"));
		assert!(!SelectionSet::default().contains(""));
	}

	#[test]
	fn title_index_from_json() {
		let index: PmidTitleIndex = serde_json::from_str(r#"{"111":"Study One"}"#).unwrap();
		assert_eq!(index.title("111"), Some("Study One"));
		assert_eq!(index.title("222"), None);
	}

	#[test]
	fn node_type_display_round_trips_known_names() {
		for name in ["Species", "Gene", "DNAMutation", "SNP", "Plasmid"] {
			assert_eq!(NodeType::from(name).to_string(), name);
		}
	}
}
