use super::config::PanelConfig;
use super::content::{ContentNode, Link, Table, TableCell};
use super::types::PmidTitleIndex;

/// Evidence table column titles.
pub const HEADER: [&str; 3] = ["No.", "PMID", "Title"];

/// Literature table for a node or edge, one row per PMID in the given order.
///
/// Duplicates are kept. A PMID missing from the index still gets a row, with
/// the configured placeholder in the title column.
pub fn build_table(config: &PanelConfig, pmids: &[String], titles: &PmidTitleIndex) -> ContentNode {
	let mut table = Table::with_header(HEADER);
	for (i, pmid) in pmids.iter().enumerate() {
		let title = titles.title(pmid).unwrap_or(config.missing_title.as_str());
		table.push_row(vec![
			TableCell::text((i + 1).to_string()),
			TableCell::node(Link::external(config.urls.literature_record(pmid), pmid.as_str())),
			TableCell::text(title),
		]);
	}
	table.into()
}

/// `PMID,Title` CSV of the evidence behind an edge. Unknown titles export empty.
pub fn evidence_csv(pmids: &[String], titles: &PmidTitleIndex) -> Result<String, csv::Error> {
	let mut writer = csv::Writer::from_writer(Vec::new());
	writer.write_record(["PMID", "Title"])?;
	for pmid in pmids {
		writer.write_record([pmid.as_str(), titles.title(pmid).unwrap_or_default()])?;
	}
	let bytes = writer.into_inner().map_err(|e| e.into_error())?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}
