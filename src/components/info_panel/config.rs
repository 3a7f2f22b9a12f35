use serde::Deserialize;

/// NCBI Taxonomy record base URL.
pub const NCBI_TAXONOMY: &str = "https://www.ncbi.nlm.nih.gov/Taxonomy/Browser/wwwtax.cgi?id=";
/// NCBI Gene record base URL.
pub const NCBI_GENE: &str = "https://www.ncbi.nlm.nih.gov/gene/";
/// MeSH record base URL.
pub const NCBI_MESH: &str = "https://meshb.nlm.nih.gov/record/ui?ui=";
/// PubTator3 publication page base URL.
pub const PUBTATOR_PUBLICATION: &str = "https://www.ncbi.nlm.nih.gov/research/pubtator3/publication/";

/// Stacking order of a visible panel.
pub const Z_VISIBLE: i32 = 100;
/// Stacking order of a hidden panel.
pub const Z_HIDDEN: i32 = -100;

/// Shown in the title column when the index has no entry for a PMID.
pub const MISSING_TITLE: &str = "-";

/// Base URLs of the external reference services that identifiers link to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReferenceUrls {
	#[allow(missing_docs)]
	pub taxonomy: String,
	#[allow(missing_docs)]
	pub gene: String,
	#[allow(missing_docs)]
	pub ontology: String,
	/// Literature record base; the PMID is appended.
	pub literature: String,
	/// Prefixes marking a Chemical/Disease id as an ontology record, stripped before linking.
	pub ontology_prefixes: Vec<String>,
}

impl Default for ReferenceUrls {
	fn default() -> Self {
		Self {
			taxonomy: NCBI_TAXONOMY.into(),
			gene: NCBI_GENE.into(),
			ontology: NCBI_MESH.into(),
			literature: PUBTATOR_PUBLICATION.into(),
			ontology_prefixes: vec!["MESH:".into()],
		}
	}
}

impl ReferenceUrls {
	/// Literature record URL of `pmid`.
	pub fn literature_record(&self, pmid: &str) -> String {
		format!("{}{}", self.literature, pmid)
	}
}

/// Panel settings, provided through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
	/// Where identifiers and PMIDs link to.
	pub urls: ReferenceUrls,
	/// Stacking order of a visible panel.
	pub z_visible: i32,
	/// Stacking order of a hidden panel.
	pub z_hidden: i32,
	/// Title column text for PMIDs missing from the index.
	pub missing_title: String,
}

impl Default for PanelConfig {
	fn default() -> Self {
		Self {
			urls: ReferenceUrls::default(),
			z_visible: Z_VISIBLE,
			z_hidden: Z_HIDDEN,
			missing_title: MISSING_TITLE.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_config_keeps_defaults() {
		let config: PanelConfig =
			serde_json::from_str(r#"{"urls":{"gene":"https://genes.example/"},"z_visible":5}"#)
				.unwrap();
		assert_eq!(config.urls.gene, "https://genes.example/");
		assert_eq!(config.urls.taxonomy, NCBI_TAXONOMY);
		assert_eq!(config.urls.ontology_prefixes, vec!["MESH:"]);
		assert_eq!(config.z_visible, 5);
		assert_eq!(config.z_hidden, Z_HIDDEN);
	}

	#[test]
	fn literature_record_appends_pmid() {
		assert_eq!(
			ReferenceUrls::default().literature_record("123"),
			"https://www.ncbi.nlm.nih.gov/research/pubtator3/publication/123"
		);
	}
}
