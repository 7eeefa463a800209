use async_trait::async_trait;
use chrono::Duration;

use crate::error::Result;
use crate::models::{Session, Thread, User};

/// User records keyed by unique email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Create a user. Fails with `PersistError::DuplicateEmail` if the
    /// email is already registered.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User>;

    /// Look up a user by email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Bearer-token sessions issued at login.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Issue a fresh session for a user.
    async fn create_session(&self, user_id: &str, ttl: Duration) -> Result<Session>;

    /// Resolve a token. Expired sessions are reported as absent.
    async fn find_session(&self, token: &str) -> Result<Option<Session>>;

    /// Drop a session (logout). Unknown tokens are not an error.
    async fn delete_session(&self, token: &str) -> Result<()>;
}

/// Chat threads owned by users.
///
/// Every read filters by the owner id: a foreign or malformed thread id
/// behaves exactly like a missing one, so callers can never learn whether
/// another user's thread exists.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Find a thread owned by the given user.
    async fn find_thread(&self, user_id: &str, thread_id: &str) -> Result<Option<Thread>>;

    /// Create an empty thread with the placeholder title.
    async fn create_thread(&self, user_id: &str) -> Result<Thread>;

    /// List a user's threads, newest first.
    async fn list_threads(&self, user_id: &str) -> Result<Vec<Thread>>;

    /// Persist the thread's full message sequence in one write.
    async fn save_thread(&self, thread: &Thread) -> Result<()>;
}
