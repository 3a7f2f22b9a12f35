//! Renderer-agnostic description of panel contents.
//!
//! Rows only live inside tables and cells only inside rows, so a tree built
//! through these types cannot put a cell at the top level.

use serde::Serialize;

/// One node of a panel's content tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
	/// Literal text.
	Text {
		#[allow(missing_docs)]
		text: String,
	},
	/// Block of inline children.
	Paragraph {
		#[allow(missing_docs)]
		children: Vec<ContentNode>,
	},
	#[allow(missing_docs)]
	Link(Link),
	#[allow(missing_docs)]
	Table(Table),
}

impl ContentNode {
	#[allow(missing_docs)]
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text { text: text.into() }
	}

	/// Paragraph holding a single run of text.
	pub fn paragraph(text: impl Into<String>) -> Self {
		Self::Paragraph {
			children: vec![Self::text(text)],
		}
	}

	/// Paragraph with mixed inline children.
	pub fn paragraph_of(children: Vec<ContentNode>) -> Self {
		Self::Paragraph { children }
	}

	/// Concatenated text of this node and its descendants.
	pub fn plain_text(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Self::Text { text } => out.push_str(text),
			Self::Paragraph { children } => children.iter().for_each(|c| c.collect_text(out)),
			Self::Link(link) => out.push_str(&link.label),
			Self::Table(table) => {
				for row in std::iter::once(&table.header).chain(&table.body) {
					for cell in &row.cells {
						cell.children.iter().for_each(|c| c.collect_text(out));
					}
				}
			}
		}
	}
}

/// Anchor to an external page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
	#[allow(missing_docs)]
	pub href: String,
	/// Visible text.
	pub label: String,
	/// Open in a new browsing context.
	pub new_tab: bool,
}

impl Link {
	/// Link opening in a new browsing context.
	pub fn external(href: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			label: label.into(),
			new_tab: true,
		}
	}
}

impl From<Link> for ContentNode {
	fn from(link: Link) -> Self {
		Self::Link(link)
	}
}

/// Table with one header row and any number of body rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Table {
	#[allow(missing_docs)]
	pub header: TableRow,
	#[allow(missing_docs)]
	pub body: Vec<TableRow>,
}

impl Table {
	/// Empty-bodied table whose header cells read `columns`.
	pub fn with_header<'a>(columns: impl IntoIterator<Item = &'a str>) -> Self {
		Self {
			header: TableRow {
				cells: columns.into_iter().map(TableCell::header).collect(),
			},
			body: Vec::new(),
		}
	}

	/// Appends a body row.
	pub fn push_row(&mut self, cells: Vec<TableCell>) {
		self.body.push(TableRow { cells });
	}
}

impl From<Table> for ContentNode {
	fn from(table: Table) -> Self {
		Self::Table(table)
	}
}

#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
	pub cells: Vec<TableCell>,
}

#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableCell {
	/// Rendered as `<th>`.
	pub header: bool,
	pub children: Vec<ContentNode>,
}

impl TableCell {
	/// Header cell holding `text`.
	pub fn header(text: &str) -> Self {
		Self {
			header: true,
			children: vec![ContentNode::text(text)],
		}
	}

	/// Body cell holding `text`.
	pub fn text(text: impl Into<String>) -> Self {
		Self {
			header: false,
			children: vec![ContentNode::text(text)],
		}
	}

	/// Body cell holding a single node.
	pub fn node(node: impl Into<ContentNode>) -> Self {
		Self {
			header: false,
			children: vec![node.into()],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_with_type_tag() {
		let para = ContentNode::paragraph_of(vec![
			ContentNode::text("Identifier: "),
			Link::external("https://x/1", "1").into(),
		]);
		let json = serde_json::to_value(&para).unwrap();
		assert_eq!(json["type"], "paragraph");
		assert_eq!(json["children"][0]["type"], "text");
		assert_eq!(json["children"][1]["type"], "link");
		assert_eq!(json["children"][1]["new_tab"], true);
	}

	#[test]
	fn plain_text_walks_tables() {
		let mut table = Table::with_header(["A", "B"]);
		table.push_row(vec![TableCell::text("1"), TableCell::node(Link::external("h", "2"))]);
		assert_eq!(ContentNode::from(table).plain_text(), "AB12");
	}
}
