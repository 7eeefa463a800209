use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Message;

/// Placeholder title given to a thread at creation.
pub const DEFAULT_THREAD_TITLE: &str = "New Chat";

/// Database-agnostic chat thread.
///
/// Messages are embedded in the thread document and ordered by insertion.
/// The owning user id never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}
