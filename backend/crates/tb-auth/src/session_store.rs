use crate::generate_token;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// A logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    expires_at: Instant,
}

impl Session {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory session table; sessions expire `ttl` after login.
/// Cloning shares the same table.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session and return its id
    pub async fn create(&self, user_id: i64, username: &str) -> String {
        let id = generate_token();
        let session = Session {
            user_id,
            username: username.to_string(),
            expires_at: Instant::now() + self.ttl,
        };

        self.sessions.write().await.insert(id.clone(), session);
        id
    }

    /// The live session for `id`. Expired sessions are removed.
    pub async fn get(&self, id: &str) -> Option<Session> {
        let now = Instant::now();

        {
            let sessions = self.sessions.read().await;
            match sessions.get(id) {
                Some(session) if !session.is_expired(now) => return Some(session.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        self.sessions.write().await.remove(id);
        None
    }

    pub async fn remove(&self, id: &str) {
        self.sessions.write().await.remove(id);
    }

    /// Drop every expired session, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
