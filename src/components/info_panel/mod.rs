mod builder;
mod component;
mod config;
mod content;
mod error;
mod evidence;
mod export;
mod identifier;
mod selection;
mod types;
mod view;

pub use builder::{INTERACTION_SEPARATOR, build_edge_panel, build_node_panel, evidence_file_name, split_edge_label};
pub use component::InfoPanels;
pub use config::{PanelConfig, ReferenceUrls};
pub use content::{ContentNode, Link, Table, TableCell, TableRow};
pub use error::PanelError;
pub use evidence::{build_table, evidence_csv};
pub use identifier::{ResolvedIdentifier, resolve};
pub use selection::{
	Decision, Display, PanelController, PanelKind, PanelState, RenderDirective, VisibilityStyle,
};
pub use types::{
	EdgeEvent, EdgeType, Entity, NodeEvent, NodeType, PmidTitleIndex, SelectedEntity, SelectionSet,
};
pub use view::ContentView;
