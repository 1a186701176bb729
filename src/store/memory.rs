use super::SessionStore;
use crate::errors::AppResult;
use crate::models::Session;
use std::cell::RefCell;

/// In-process store. Nothing survives the value being dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: RefCell<Vec<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sessions(sessions: Vec<Session>) -> Self {
        Self {
            sessions: RefCell::new(sessions),
        }
    }

    /// Snapshot of what is currently stored.
    pub fn sessions(&self) -> Vec<Session> {
        self.sessions.borrow().clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> AppResult<Vec<Session>> {
        Ok(self.sessions.borrow().clone())
    }

    fn save(&self, sessions: &[Session]) -> AppResult<()> {
        *self.sessions.borrow_mut() = sessions.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
