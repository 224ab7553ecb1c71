mod boolean;
mod events;
mod json;
mod kv_table;
mod list_editor;
mod mode;
mod scalar;
mod state;
mod stream_table;

pub use boolean::BooleanChoice;
pub use events::EditorEvent;
pub use json::JsonEditor;
pub use kv_table::KeyValueTableEditor;
pub use list_editor::ListEditor;
pub use mode::EditorMode;
pub use scalar::{InputFilter, ScalarEditor};
pub use state::{TypeEntry, TypedValueEditor};
pub use stream_table::StreamTableEditor;
