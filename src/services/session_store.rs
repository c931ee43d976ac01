use std::{collections::HashMap, fmt};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::domain::{Flashcard, QuizQuestion};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(SessionId)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Flip flag key. Flags belong to the deck that was current when they were
/// first toggled, so a newly stored deck starts with every card unflipped
/// while the old flags are simply left behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct FlipKey {
    deck: u64,
    index: usize,
}

impl fmt::Display for FlipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flip_{}", self.index)
    }
}

/// Everything one interactive session remembers between requests.
#[derive(Clone, Debug)]
pub struct SessionState {
    flip_flags: HashMap<FlipKey, bool>,
    deck: u64,
    flashcards_data: Vec<Flashcard>,
    flashcards_source: String,
    quiz_data: Vec<QuizQuestion>,
    quiz_source: String,
    last_active: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            flip_flags: HashMap::new(),
            deck: 0,
            flashcards_data: Vec::new(),
            flashcards_source: String::new(),
            quiz_data: Vec::new(),
            quiz_source: String::new(),
            last_active: Utc::now(),
        }
    }
}

impl SessionState {
    fn flip_key(&self, index: usize) -> FlipKey {
        FlipKey {
            deck: self.deck,
            index,
        }
    }

    /// Flip flag of card `index` in the current deck; false until toggled.
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flip_flags
            .get(&self.flip_key(index))
            .copied()
            .unwrap_or(false)
    }

    pub fn set_flipped(&mut self, index: usize, flipped: bool) {
        let key = self.flip_key(index);
        log::debug!("Setting {} = {}", key, flipped);
        self.flip_flags.insert(key, flipped);
    }

    /// Inverts card `index`'s flag and returns the new value.
    pub fn toggle_flip(&mut self, index: usize) -> bool {
        let flipped = !self.is_flipped(index);
        self.set_flipped(index, flipped);
        flipped
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards_data
    }

    pub fn flashcards_source(&self) -> &str {
        &self.flashcards_source
    }

    /// Replaces the stored deck wholesale. Only called after a successful
    /// generation; a failed attempt leaves the previous deck in place.
    pub fn store_flashcards(&mut self, cards: Vec<Flashcard>, source: &str) {
        self.flashcards_data = cards;
        self.flashcards_source = source.to_string();
        self.deck += 1;
    }

    pub fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz_data
    }

    pub fn quiz_source(&self) -> &str {
        &self.quiz_source
    }

    pub fn store_quiz(&mut self, questions: Vec<QuizQuestion>, source: &str) {
        self.quiz_data = questions;
        self.quiz_source = source.to_string();
    }

    pub fn has_flashcards(&self) -> bool {
        !self.flashcards_data.is_empty()
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    fn is_idle(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        now - self.last_active >= idle_timeout
    }
}

/// Sessions untouched for this long are dropped on the next write.
pub const DEFAULT_SESSION_IDLE_MINUTES: i64 = 120;

/// In-process registry of live sessions keyed by session id.
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionState>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(Duration::minutes(DEFAULT_SESSION_IDLE_MINUTES))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Copy of the session's state, or a fresh empty state if the session
    /// has not stored anything yet. Never registers the session.
    pub async fn snapshot(&self, id: SessionId) -> SessionState {
        let sessions = self.sessions.read().await;
        sessions.get(&id).cloned().unwrap_or_default()
    }

    /// Runs `f` against the session's state, creating it on first use.
    /// Idle sessions are evicted first.
    pub async fn update<F, R>(&self, id: SessionId, f: F) -> R
    where
        F: FnOnce(&mut SessionState) -> R,
    {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);

        let state = sessions.entry(id).or_default();
        state.last_active = now;
        f(state)
    }

    /// Like `update`, but returns `None` without registering anything when
    /// the session holds no state.
    pub async fn update_existing<F, R>(&self, id: SessionId, f: F) -> Option<R>
    where
        F: FnOnce(&mut SessionState) -> R,
    {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);

        let state = sessions.get_mut(&id)?;
        state.last_active = now;
        Some(f(state))
    }

    fn evict_idle(&self, sessions: &mut HashMap<SessionId, SessionState>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, state| !state.is_idle(now, self.idle_timeout));
        let evicted = before - sessions.len();
        if evicted > 0 {
            log::info!("Evicted {} idle session(s)", evicted);
        }
    }

    /// Discards the session's state. Returns whether anything was held.
    pub async fn end_session(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            log::info!("Ended session {}", id);
        }
        removed
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
