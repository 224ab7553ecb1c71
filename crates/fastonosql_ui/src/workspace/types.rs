use fastonosql_core::QuerySession;
use uuid::Uuid;

/// Unique identifier for a tab.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TabId(pub Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

/// An open tab hosting one query session.
pub struct QueryTab {
    id: TabId,
    title: String,
    icon: &'static str,
    session: Box<dyn QuerySession>,
}

impl QueryTab {
    pub(super) fn new(title: String, session: Box<dyn QuerySession>) -> Self {
        let icon = session.connection_type().icon_name();
        Self {
            id: TabId::new(),
            title,
            icon,
            session,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon_name(&self) -> &'static str {
        self.icon
    }

    pub fn session(&self) -> &dyn QuerySession {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> &mut dyn QuerySession {
        self.session.as_mut()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkspaceEvent {
    Opened(TabId),
    Closed(TabId),
    Activated(TabId),
    Reordered,
}
