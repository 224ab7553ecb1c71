use fastonosql_core::{Connection, ConnectionHandle, ConnectionType, QuerySession, SessionFactory};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct FakeConnection {
    name: String,
    kind: ConnectionType,
}

impl FakeConnection {
    pub fn new(name: impl Into<String>, kind: ConnectionType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn redis(name: impl Into<String>) -> Self {
        Self::new(name, ConnectionType::Redis)
    }

    pub fn into_handle(self) -> ConnectionHandle {
        Arc::new(self)
    }
}

impl Connection for FakeConnection {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn connection_type(&self) -> ConnectionType {
        self.kind
    }
}

/// Calls recorded across every session built by one factory.
///
/// Sessions are identified by creation order, starting at 0.
#[derive(Debug, Clone, Default)]
pub struct FakeSessionStats {
    pub created: usize,
    pub executed: Vec<(usize, String)>,
    pub reloads: Vec<usize>,
    pub closed: Vec<usize>,
}

pub struct FakeSession {
    serial: usize,
    connection: ConnectionHandle,
    input: String,
    stats: Arc<Mutex<FakeSessionStats>>,
}

impl FakeSession {
    fn spawn(connection: ConnectionHandle, stats: Arc<Mutex<FakeSessionStats>>) -> Self {
        let serial = {
            let mut guard = mutex_lock(&stats);
            let serial = guard.created;
            guard.created += 1;
            serial
        };

        Self {
            serial,
            connection,
            input: String::new(),
            stats,
        }
    }
}

impl QuerySession for FakeSession {
    fn connection(&self) -> &ConnectionHandle {
        &self.connection
    }

    fn clone_session(&self, initial_text: &str) -> Box<dyn QuerySession> {
        let mut session = FakeSession::spawn(self.connection.clone(), self.stats.clone());
        session.input = initial_text.to_string();
        Box::new(session)
    }

    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn reload(&mut self) {
        mutex_lock(&self.stats).reloads.push(self.serial);
    }

    fn execute(&mut self, text: &str) {
        mutex_lock(&self.stats)
            .executed
            .push((self.serial, text.to_string()));
    }

    fn close(&mut self) {
        mutex_lock(&self.stats).closed.push(self.serial);
    }
}

#[derive(Clone, Default)]
pub struct FakeSessionFactory {
    stats: Arc<Mutex<FakeSessionStats>>,
}

impl FakeSessionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> FakeSessionStats {
        mutex_lock(&self.stats).clone()
    }

    pub fn boxed(&self) -> Box<dyn SessionFactory> {
        Box::new(self.clone())
    }
}

impl SessionFactory for FakeSessionFactory {
    fn create(&self, connection: ConnectionHandle) -> Box<dyn QuerySession> {
        Box::new(FakeSession::spawn(connection, self.stats.clone()))
    }
}

fn mutex_lock<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    match lock.lock() {
        Ok(guard) => guard,
        Err(poison_error) => poison_error.into_inner(),
    }
}
