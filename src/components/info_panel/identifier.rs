use super::config::ReferenceUrls;
use super::types::NodeType;

/// Placeholder the data pipeline writes for nodes without a normalized id.
pub const NO_IDENTIFIER: &str = "-";

/// How a node's identifier is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedIdentifier {
	/// Reference page, when one exists.
	pub href: Option<String>,
	/// Always the raw identifier.
	pub display_label: String,
}

/// Maps a node's standardized id to an external reference link, if one exists.
///
/// Total: unknown types, unprefixed ontology ids and placeholders all fall back
/// to plain text.
pub fn resolve(urls: &ReferenceUrls, node_type: &NodeType, identifier: &str) -> ResolvedIdentifier {
	let href = if identifier.is_empty() || identifier == NO_IDENTIFIER {
		None
	} else {
		match node_type {
			NodeType::Species => Some(format!("{}{}", urls.taxonomy, identifier)),
			NodeType::Gene => Some(format!("{}{}", urls.gene, identifier)),
			NodeType::Chemical | NodeType::Disease => urls
				.ontology_prefixes
				.iter()
				.find_map(|prefix| identifier.strip_prefix(prefix.as_str()))
				.filter(|record| !record.is_empty())
				.map(|record| format!("{}{}", urls.ontology, record)),
			_ => None,
		}
	};

	ResolvedIdentifier {
		href,
		display_label: identifier.to_string(),
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn href(node_type: NodeType, id: &str) -> Option<String> {
		resolve(&ReferenceUrls::default(), &node_type, id).href
	}

	#[test]
	fn species_and_gene_link_verbatim() {
		assert_eq!(
			href(NodeType::Species, "9606").as_deref(),
			Some("https://www.ncbi.nlm.nih.gov/Taxonomy/Browser/wwwtax.cgi?id=9606")
		);
		assert_eq!(
			href(NodeType::Gene, "7157").as_deref(),
			Some("https://www.ncbi.nlm.nih.gov/gene/7157")
		);
	}

	#[test]
	fn mesh_prefix_is_stripped() {
		let resolved = resolve(&ReferenceUrls::default(), &NodeType::Disease, "MESH:D009369");
		assert_eq!(
			resolved.href.as_deref(),
			Some("https://meshb.nlm.nih.gov/record/ui?ui=D009369")
		);
		assert_eq!(resolved.display_label, "MESH:D009369");
	}

	#[test]
	fn unprefixed_chemical_is_plain_text() {
		assert_eq!(href(NodeType::Chemical, "D000068877"), None);
		assert_eq!(href(NodeType::Chemical, "CHEBI:1234"), None);
		assert_eq!(href(NodeType::Chemical, "MESH:"), None);
	}

	#[test]
	fn other_types_never_link() {
		assert_eq!(href(NodeType::CellLine, "CVCL_0030"), None);
		assert_eq!(href(NodeType::Snp, "rs123"), None);
		assert_eq!(href(NodeType::Other("Plasmid".into()), "42"), None);
	}

	#[test]
	fn custom_ontology_prefixes() {
		let urls = ReferenceUrls {
			ontology_prefixes: vec!["MESH:".into(), "OMIM:".into()],
			..ReferenceUrls::default()
		};
		let resolved = resolve(&urls, &NodeType::Disease, "OMIM:151623");
		assert_eq!(
			resolved.href.as_deref(),
			Some("https://meshb.nlm.nih.gov/record/ui?ui=151623")
		);
	}

	fn any_node_type() -> impl Strategy<Value = NodeType> {
		prop_oneof![
			Just(NodeType::Species),
			Just(NodeType::Gene),
			Just(NodeType::Chemical),
			Just(NodeType::Disease),
			Just(NodeType::CellLine),
			Just(NodeType::DnaMutation),
			Just(NodeType::ProteinMutation),
			Just(NodeType::Snp),
			"[A-Za-z]{1,12}".prop_map(NodeType::from),
		]
	}

	proptest! {
		#[test]
		fn placeholders_never_link(node_type in any_node_type(), id in prop_oneof![Just(""), Just("-")]) {
			let resolved = resolve(&ReferenceUrls::default(), &node_type, id);
			prop_assert_eq!(resolved.href, None);
			prop_assert_eq!(resolved.display_label, id);
		}

		#[test]
		fn label_is_always_the_raw_identifier(node_type in any_node_type(), id in "\\PC{0,24}") {
			let resolved = resolve(&ReferenceUrls::default(), &node_type, &id);
			prop_assert_eq!(resolved.display_label, id);
		}
	}
}
