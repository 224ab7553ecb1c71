mod app_config;
mod connection;
mod error;
mod key;
mod render;
mod session;
mod value;

pub use app_config::{AppConfig, AppConfigStore, DEFAULT_DELIMITER, EditorConfig, WorkspaceConfig};
pub use connection::{Connection, ConnectionHandle, ConnectionType};
pub use error::CoreError;
pub use key::{KeyName, KeyedValue};
pub use render::convert_value;
pub use session::{QuerySession, SessionFactory};
pub use value::{StreamEntry, TypeIcon, TypedValue, ValueType};
