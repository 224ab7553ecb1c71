use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Kind of server a connection points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    Redis,
    Memcached,
    Ssdb,
    LevelDb,
    RocksDb,
    Unqlite,
    Lmdb,
    ForestDb,
    Pika,
    Dynomite,
    KeyDb,
}

impl ConnectionType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Redis => "Redis",
            Self::Memcached => "Memcached",
            Self::Ssdb => "SSDB",
            Self::LevelDb => "LevelDB",
            Self::RocksDb => "RocksDB",
            Self::Unqlite => "UnQLite",
            Self::Lmdb => "LMDB",
            Self::ForestDb => "ForestDB",
            Self::Pika => "Pika",
            Self::Dynomite => "Dynomite",
            Self::KeyDb => "KeyDB",
        }
    }

    /// Icon shown on tabs bound to this kind of server.
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Redis | Self::Pika | Self::Dynomite | Self::KeyDb => "redis",
            Self::Memcached => "memcached",
            Self::Ssdb => "ssdb",
            Self::LevelDb | Self::RocksDb | Self::ForestDb => "leveldb",
            Self::Unqlite | Self::Lmdb => "database",
        }
    }
}

/// A server connection owned by the application shell.
///
/// Sessions only read it and keep a shared handle to it.
pub trait Connection: Send + Sync {
    /// Name shown on tabs, e.g. `"localhost:6379"`.
    fn display_name(&self) -> String;

    fn connection_type(&self) -> ConnectionType;
}

/// Shared handle to a connection.
pub type ConnectionHandle = Arc<dyn Connection>;
