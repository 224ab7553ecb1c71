mod tab_workspace;
mod types;

pub use tab_workspace::TabWorkspace;
pub use types::{QueryTab, TabId, WorkspaceEvent};
