use fastonosql_core::{ConnectionHandle, SessionFactory, WorkspaceConfig};
use log::{debug, warn};

use super::types::{QueryTab, TabId, WorkspaceEvent};

/// Tabs of query sessions, each bound to one server connection.
///
/// Responsibilities:
/// - Track open tabs in visual order (left to right in the tab strip)
/// - Track the active tab
/// - Release a session before its tab is dropped
pub struct TabWorkspace {
    /// Tabs in visual order.
    tabs: Vec<QueryTab>,

    /// Index of the active tab (in `tabs`), `None` when there are no tabs.
    active_index: Option<usize>,

    factory: Box<dyn SessionFactory>,
    config: WorkspaceConfig,

    pending_events: Vec<WorkspaceEvent>,
}

impl TabWorkspace {
    pub fn new(factory: Box<dyn SessionFactory>) -> Self {
        Self::with_config(factory, WorkspaceConfig::default())
    }

    pub fn with_config(factory: Box<dyn SessionFactory>, config: WorkspaceConfig) -> Self {
        Self {
            tabs: Vec::new(),
            active_index: None,
            factory,
            config,
            pending_events: Vec::new(),
        }
    }

    // --- Opening ---

    /// Opens a session on `connection` with `text` as its input and activates it.
    ///
    /// A missing connection is ignored.
    pub fn open_session(
        &mut self,
        connection: Option<ConnectionHandle>,
        text: &str,
    ) -> Option<TabId> {
        let Some(connection) = connection else {
            warn!("Ignoring request to open a session without a connection");
            return None;
        };

        let title = connection.display_name();
        let mut session = self.factory.create(connection);
        session.set_input_text(text);

        Some(self.push_tab(QueryTab::new(title, session)))
    }

    /// Like [`Self::open_session`], then runs `text` in the new session.
    pub fn open_session_and_execute(
        &mut self,
        connection: Option<ConnectionHandle>,
        text: &str,
    ) -> Option<TabId> {
        let id = self.open_session(connection, text)?;
        if let Some(tab) = self.active_tab_mut() {
            tab.session_mut().execute(text);
        }
        Some(id)
    }

    /// Opens an empty tab on the active tab's connection.
    pub fn create_new_tab(&mut self) -> Option<TabId> {
        self.clone_active(String::new())
    }

    /// Opens a tab on the active tab's connection with a copy of its input.
    pub fn duplicate_current_tab(&mut self) -> Option<TabId> {
        let text = match self.active_tab() {
            Some(tab) if self.config.duplicate_copies_text => tab.session().input_text(),
            Some(_) => String::new(),
            None => return None,
        };
        self.clone_active(text)
    }

    fn clone_active(&mut self, text: String) -> Option<TabId> {
        let tab = self.active_tab()?;
        let title = tab.title().to_string();
        let session = tab.session().clone_session(&text);

        Some(self.push_tab(QueryTab::new(title, session)))
    }

    fn push_tab(&mut self, tab: QueryTab) -> TabId {
        let id = tab.id();
        debug!("Opening tab '{}'", tab.title());

        self.tabs.push(tab);
        self.active_index = Some(self.tabs.len() - 1);

        self.pending_events.push(WorkspaceEvent::Opened(id));
        self.pending_events.push(WorkspaceEvent::Activated(id));
        id
    }

    // --- Navigation ---

    /// Activates the tab at `index`. Returns `false` if there is none.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(tab) = self.tabs.get(index) else {
            return false;
        };

        if self.active_index != Some(index) {
            self.active_index = Some(index);
            self.pending_events.push(WorkspaceEvent::Activated(tab.id()));
        }
        true
    }

    /// Activates the next tab in visual order, wrapping to the first.
    pub fn next_tab(&mut self) {
        if self.tabs.is_empty() {
            return;
        }

        let next = match self.active_index {
            Some(active) => (active + 1) % self.tabs.len(),
            None => 0,
        };
        self.activate(next);
    }

    /// Activates the previous tab in visual order, wrapping to the last.
    pub fn previous_tab(&mut self) {
        if self.tabs.is_empty() {
            return;
        }

        let prev = match self.active_index {
            Some(0) | None => self.tabs.len() - 1,
            Some(active) => active - 1,
        };
        self.activate(prev);
    }

    /// Switches to tab by 1-based number (Ctrl+1 through Ctrl+9).
    pub fn switch_to_tab(&mut self, n: usize) {
        if n == 0 || n > self.tabs.len() {
            return;
        }
        self.activate(n - 1);
    }

    pub fn reload_current_tab(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            tab.session_mut().reload();
        }
    }

    // --- Closing ---

    /// Closes the tab at `index`, releasing its session first.
    ///
    /// When the active tab is closed, the tab that takes its position (or
    /// the new last tab) becomes active.
    pub fn close_tab(&mut self, index: usize) -> bool {
        let Some(tab) = self.tabs.get_mut(index) else {
            return false;
        };

        tab.session_mut().close();
        let closed = self.tabs.remove(index);
        let closed_id = closed.id();
        drop(closed);

        let previous_active = self.active_index;
        self.active_index = match previous_active {
            _ if self.tabs.is_empty() => None,
            Some(active) if active > index => Some(active - 1),
            Some(active) if active == index => Some(index.min(self.tabs.len() - 1)),
            other => other,
        };

        self.pending_events.push(WorkspaceEvent::Closed(closed_id));
        if previous_active == Some(index)
            && let Some(id) = self.active_id()
        {
            self.pending_events.push(WorkspaceEvent::Activated(id));
        }
        true
    }

    pub fn close_current_tab(&mut self) {
        if let Some(index) = self.active_index {
            self.close_tab(index);
        }
    }

    /// Moves the active tab to the front and closes every other tab.
    pub fn close_other_tabs(&mut self) {
        let Some(active) = self.active_index else {
            return;
        };

        self.move_tab(active, 0);
        while self.tabs.len() > 1 {
            self.close_tab(1);
        }
    }

    // --- Reordering ---

    /// Moves a tab from one position to another (for drag & drop).
    pub fn move_tab(&mut self, from: usize, to: usize) {
        if from == to || from >= self.tabs.len() || to >= self.tabs.len() {
            return;
        }

        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);

        // Adjust active_index if needed
        if let Some(active) = self.active_index {
            self.active_index = Some(if active == from {
                to
            } else if from < active && active <= to {
                active - 1
            } else if to <= active && active < from {
                active + 1
            } else {
                active
            });
        }

        self.pending_events.push(WorkspaceEvent::Reordered);
    }

    // --- Queries ---

    pub fn tabs(&self) -> &[QueryTab] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&QueryTab> {
        self.tabs.get(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_tab(&self) -> Option<&QueryTab> {
        self.active_index.and_then(|i| self.tabs.get(i))
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut QueryTab> {
        self.active_index.and_then(|i| self.tabs.get_mut(i))
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.active_tab().map(|t| t.id())
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<WorkspaceEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastonosql_test_support::{FakeConnection, FakeSessionFactory};

    fn workspace_with(n: usize) -> (TabWorkspace, FakeSessionFactory) {
        let factory = FakeSessionFactory::new();
        let mut workspace = TabWorkspace::new(factory.boxed());
        for i in 0..n {
            let connection = FakeConnection::redis(format!("server-{}", i)).into_handle();
            workspace.open_session(Some(connection), &format!("GET key{}", i));
        }
        (workspace, factory)
    }

    #[test]
    fn move_tab_tracks_active() {
        let (mut workspace, _) = workspace_with(4);
        workspace.activate(1);
        let active = workspace.active_id();

        workspace.move_tab(1, 3);
        assert_eq!(workspace.active_index(), Some(3));
        assert_eq!(workspace.active_id(), active);

        workspace.move_tab(0, 2);
        assert_eq!(workspace.active_index(), Some(3));

        workspace.move_tab(3, 0);
        assert_eq!(workspace.active_index(), Some(0));
        assert_eq!(workspace.active_id(), active);
    }

    #[test]
    fn move_tab_ignores_out_of_range() {
        let (mut workspace, _) = workspace_with(2);
        workspace.drain_events();
        workspace.move_tab(0, 5);
        assert!(workspace.drain_events().is_empty());
    }

    #[test]
    fn switch_to_tab_is_one_based() {
        let (mut workspace, _) = workspace_with(3);
        workspace.switch_to_tab(1);
        assert_eq!(workspace.active_index(), Some(0));
        workspace.switch_to_tab(0);
        workspace.switch_to_tab(9);
        assert_eq!(workspace.active_index(), Some(0));
    }

    #[test]
    fn closing_before_active_shifts_index() {
        let (mut workspace, _) = workspace_with(3);
        let active = workspace.active_id();
        assert!(workspace.close_tab(0));
        assert_eq!(workspace.active_index(), Some(1));
        assert_eq!(workspace.active_id(), active);
    }

    #[test]
    fn closing_last_active_tab_selects_new_last() {
        let (mut workspace, _) = workspace_with(3);
        workspace.close_current_tab();
        assert_eq!(workspace.len(), 2);
        assert_eq!(workspace.active_index(), Some(1));
        assert_eq!(workspace.tab(1).unwrap().title(), "server-1");
    }
}
