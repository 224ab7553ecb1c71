//! Headless state for the key editor and the query tab workspace.
//!
//! Each widget is a plain state struct; what a toolkit would show is a
//! projection of that state (see [`value_editor::EditorMode`]).

pub mod value_editor;
pub mod workspace;

pub use value_editor::{EditorEvent, EditorMode, TypeEntry, TypedValueEditor};
pub use workspace::{QueryTab, TabId, TabWorkspace, WorkspaceEvent};
