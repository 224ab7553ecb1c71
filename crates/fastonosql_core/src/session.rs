use crate::{ConnectionHandle, ConnectionType};

/// A query session hosted by a workspace tab.
///
/// Query execution and result display live behind this trait.
pub trait QuerySession {
    fn connection(&self) -> &ConnectionHandle;

    /// Creates a sibling session on the same connection with `initial_text` as input.
    fn clone_session(&self, initial_text: &str) -> Box<dyn QuerySession>;

    fn input_text(&self) -> String;

    fn set_input_text(&mut self, text: &str);

    /// Re-fetches and redisplays the session's own state.
    fn reload(&mut self);

    fn execute(&mut self, text: &str);

    fn connection_type(&self) -> ConnectionType {
        self.connection().connection_type()
    }

    /// Releases the session's resources. Called once, right before the tab is dropped.
    fn close(&mut self) {}
}

/// Builds sessions for newly opened tabs.
pub trait SessionFactory {
    fn create(&self, connection: ConnectionHandle) -> Box<dyn QuerySession>;
}
