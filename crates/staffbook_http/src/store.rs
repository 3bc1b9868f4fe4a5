//! Shared record store handle for request handlers.
//!
//! # Invariants
//! - One SQLite connection per process, serialized by a mutex.
//! - Schema readiness is checked once, when the store is built; handlers
//!   construct repositories without re-checking.
//! - Store work runs on tokio's blocking pool, never on async workers.

use crate::error::ApiError;
use rusqlite::Connection;
use staffbook_core::{RepoResult, SqliteEmployeeRepository, SqliteSkilledEmployeeRepository};
use std::sync::{Arc, Mutex};

/// Cloneable handle over the process-wide SQLite connection.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Wraps a connection returned by `staffbook_core::db::open_*` after
    /// checking it serves both variants.
    pub fn new(conn: Connection) -> RepoResult<Self> {
        SqliteEmployeeRepository::ensure_ready(&conn)?;
        SqliteSkilledEmployeeRepository::ensure_ready(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `op` with exclusive access to the connection.
    pub async fn run<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| ApiError::Internal("record store lock poisoned".to_string()))?;
            op(&mut guard)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("record store task failed: {err}")))?
    }
}
