use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Database-agnostic user record.
///
/// Only created at registration; the password hash is the Argon2id
/// encoded form, never the raw password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
