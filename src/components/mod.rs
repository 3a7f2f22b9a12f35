/// Node/edge detail panels: selection handling, content building and rendering.
pub mod info_panel;
/// Tooltip anchor tracking.
pub mod tooltip;
