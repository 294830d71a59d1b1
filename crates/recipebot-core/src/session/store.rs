//! In-memory per-user session store.
//!
//! One `Session` per chat id, each behind its own `tokio::sync::Mutex`.
//! The dispatcher holds a session's lock for the whole
//! read-validate-mutate-write cycle, so a fast double-send from one
//! user cannot interleave, while different users proceed fully
//! concurrently. Sessions are ephemeral: a restart loses them all.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::fsm::ChatState;
use crate::types::{RecipeDraft, RecipeSummary};

/// Conversational state of one user.
#[derive(Debug, Clone)]
pub struct Session {
    pub state: ChatState,
    /// Present exactly while `state` is in the recipe form flow.
    pub draft: Option<RecipeDraft>,
    /// Present exactly while `state` is `ChoosingFromIngredientResults`.
    pub pending_results: Vec<RecipeSummary>,
    pub last_event_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: ChatState::Idle,
            draft: None,
            pending_results: Vec::new(),
            last_event_at: Utc::now(),
        }
    }

    /// Global reset: back to `Idle`, any in-progress draft or result
    /// set is discarded without committing.
    pub fn reset(&mut self) {
        self.state = ChatState::Idle;
        self.draft = None;
        self.pending_results.clear();
    }

    /// Enter the recipe form flow with a fresh draft.
    pub fn begin_draft(&mut self) {
        self.reset();
        self.state = ChatState::CreatingTitle;
        self.draft = Some(RecipeDraft::default());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyed store of session cells. The outer lock only guards the map;
/// per-session work happens under the inner per-key lock.
pub struct SessionStore {
    sessions: Mutex<HashMap<i64, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the cell for `chat_id`, creating an `Idle` session on
    /// first contact.
    pub async fn entry(&self, chat_id: i64) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(chat_id)
            .or_insert_with(|| Arc::new(Mutex::new(Session::new())))
            .clone()
    }

    /// Reset a session in place. No-op for unknown ids.
    pub async fn clear(&self, chat_id: i64) {
        let cell = {
            let sessions = self.sessions.lock().await;
            sessions.get(&chat_id).cloned()
        };
        if let Some(cell) = cell {
            cell.lock().await.reset();
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_entry_creates_idle_session() {
        let store = SessionStore::new();
        let cell = store.entry(1).await;
        let session = cell.lock().await;
        assert_eq!(session.state, ChatState::Idle);
        assert!(session.draft.is_none());
        assert!(session.pending_results.is_empty());
    }

    #[tokio::test]
    async fn test_entry_returns_same_cell() {
        let store = SessionStore::new();
        let a = store.entry(7).await;
        a.lock().await.begin_draft();
        let b = store.entry(7).await;
        assert_eq!(b.lock().await.state, ChatState::CreatingTitle);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn test_clear_resets_in_place() {
        let store = SessionStore::new();
        let cell = store.entry(7).await;
        cell.lock().await.begin_draft();
        store.clear(7).await;
        let session = cell.lock().await;
        assert_eq!(session.state, ChatState::Idle);
        assert!(session.draft.is_none());
    }

    #[tokio::test]
    async fn test_begin_draft_discards_pending_results() {
        let mut session = Session::new();
        session.pending_results.push(RecipeSummary {
            title: "Суп".into(),
        });
        session.begin_draft();
        assert!(session.pending_results.is_empty());
        assert_eq!(session.draft, Some(RecipeDraft::default()));
    }

    #[tokio::test]
    async fn test_per_key_mutual_exclusion() {
        let store = Arc::new(SessionStore::new());
        let cell = store.entry(1).await;

        // Two tasks append to the same draft; the per-key lock makes
        // the read-modify-write cycles atomic.
        cell.lock().await.begin_draft();
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let cell = store.entry(1).await;
                let mut session = cell.lock().await;
                let draft = session.draft.as_mut().unwrap();
                draft.ingredients.push(crate::types::Ingredient {
                    name: format!("ing{i}"),
                    quantity: "1".into(),
                });
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(cell.lock().await.draft.as_ref().unwrap().ingredients.len(), 16);
    }
}
