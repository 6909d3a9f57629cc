//! In-memory signup session store.
//!
//! Step 1 and step 2 of the flow arrive as separate requests, so the
//! [`SignupSession`] state lives here between them, keyed by a UUID the
//! client carries. Sessions are purged lazily after [`SESSION_TTL`];
//! this is per-process state, acceptable for a single-instance
//! pre-launch page (leads themselves live in Postgres).

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use turnio_core::signup::SignupSession;
use uuid::Uuid;

/// How long an unfinished signup session is kept.
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

struct Entry {
    session: SignupSession,
    created_at: Instant,
}

/// Uuid-keyed store for in-flight signup sessions.
#[derive(Default)]
pub struct SignupSessions {
    inner: Mutex<HashMap<Uuid, Entry>>,
}

impl SignupSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session and return its new ID. Also purges expired
    /// entries.
    pub fn insert(&self, session: SignupSession) -> Uuid {
        let id = Uuid::new_v4();
        let mut inner = self.inner.lock().expect("session store poisoned");
        inner.retain(|_, entry| entry.created_at.elapsed() < SESSION_TTL);
        inner.insert(
            id,
            Entry {
                session,
                created_at: Instant::now(),
            },
        );
        id
    }

    /// Fetch a copy of a live session, or `None` if unknown or expired.
    pub fn get(&self, id: &Uuid) -> Option<SignupSession> {
        let inner = self.inner.lock().expect("session store poisoned");
        inner
            .get(id)
            .filter(|entry| entry.created_at.elapsed() < SESSION_TTL)
            .map(|entry| entry.session.clone())
    }

    /// Write back a session after a workflow step. No-op if the entry
    /// was purged in the meantime.
    pub fn update(&self, id: &Uuid, session: SignupSession) {
        let mut inner = self.inner.lock().expect("session store poisoned");
        if let Some(entry) = inner.get_mut(id) {
            entry.session = session;
        }
    }

    /// Number of live sessions (test helper).
    pub fn len(&self) -> usize {
        self.inner.lock().expect("session store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
