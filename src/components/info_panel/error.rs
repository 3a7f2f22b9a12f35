/// Upstream data that breaks the panel's input contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
	/// The label did not split into exactly two operands.
	#[error("malformed edge label {label:?}: expected two operands, found {parts}")]
	MalformedEdgeLabel {
		#[allow(missing_docs)]
		label: String,
		/// Number of pieces the split produced.
		parts: usize,
	},
}
