//! Durable ordered record store behind the session log.
//!
//! The engine never caches sessions: every operation goes through
//! [`SessionStore::load`] and every mutation ends with [`SessionStore::save`]
//! of the complete sequence.

mod csv_store;
mod memory;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::Session;

pub trait SessionStore {
    /// Read the whole log, oldest session first.
    fn load(&self) -> AppResult<Vec<Session>>;

    /// Replace the whole log with `sessions`.
    fn save(&self, sessions: &[Session]) -> AppResult<()>;

    /// Human readable location, used in messages and diagnostics.
    fn location(&self) -> String;
}
