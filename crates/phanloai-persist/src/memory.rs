//! In-memory store used by tests and local development.
//!
//! Implements the same trait surface as [`crate::MongoStore`], including
//! the ownership filtering and expired-session semantics.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{PersistError, Result};
use crate::models::{Session, Thread, User, DEFAULT_THREAD_TITLE};
use crate::store::{ConversationStore, CredentialStore, SessionStore};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    sessions: RwLock<HashMap<String, Session>>,
    threads: RwLock<Vec<Thread>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == email) {
            return Err(PersistError::DuplicateEmail(email.to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn create_session(&self, user_id: &str, ttl: Duration) -> Result<Session> {
        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            expires_at: now + ttl,
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    async fn find_session(&self, token: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(token).cloned();
        Ok(session.filter(|s| !s.is_expired(Utc::now())))
    }

    async fn delete_session(&self, token: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
        Ok(())
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn find_thread(&self, user_id: &str, thread_id: &str) -> Result<Option<Thread>> {
        let threads = self.threads.read().await;
        Ok(threads
            .iter()
            .find(|t| t.id == thread_id && t.user_id == user_id)
            .cloned())
    }

    async fn create_thread(&self, user_id: &str) -> Result<Thread> {
        let thread = Thread {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: DEFAULT_THREAD_TITLE.to_string(),
            messages: Vec::new(),
            created_at: Utc::now(),
        };

        let mut threads = self.threads.write().await;
        threads.push(thread.clone());
        Ok(thread)
    }

    async fn list_threads(&self, user_id: &str) -> Result<Vec<Thread>> {
        let threads = self.threads.read().await;
        let mut owned: Vec<Thread> = threads
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn save_thread(&self, thread: &Thread) -> Result<()> {
        let mut threads = self.threads.write().await;
        match threads.iter_mut().find(|t| t.id == thread.id) {
            Some(stored) => {
                *stored = thread.clone();
                Ok(())
            }
            None => Err(PersistError::Internal(format!(
                "thread {} was never created",
                thread.id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryStore::new();
        store.create_user("a@example.com", "hash").await.unwrap();

        let result = store.create_user("a@example.com", "other").await;
        assert!(matches!(result, Err(PersistError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_find_thread_filters_by_owner() {
        let store = MemoryStore::new();
        let thread = store.create_thread("user-a").await.unwrap();

        let as_owner = store.find_thread("user-a", &thread.id).await.unwrap();
        assert!(as_owner.is_some());

        // Another user addressing the same id sees nothing
        let as_stranger = store.find_thread("user-b", &thread.id).await.unwrap();
        assert!(as_stranger.is_none());
    }

    #[tokio::test]
    async fn test_list_threads_newest_first() {
        let store = MemoryStore::new();
        let first = store.create_thread("user-a").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store.create_thread("user-a").await.unwrap();
        store.create_thread("user-b").await.unwrap();

        let threads = store.list_threads("user-a").await.unwrap();
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].id, second.id);
        assert_eq!(threads[1].id, first.id);
    }

    #[tokio::test]
    async fn test_save_thread_replaces_messages() {
        let store = MemoryStore::new();
        let mut thread = store.create_thread("user-a").await.unwrap();

        thread.messages.push(Message::user("hello"));
        store.save_thread(&thread).await.unwrap();

        let reloaded = store
            .find_thread("user-a", &thread.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.messages.len(), 1);
        assert_eq!(reloaded.messages[0].content(), "hello");
    }

    #[tokio::test]
    async fn test_expired_session_is_absent() {
        let store = MemoryStore::new();
        let session = store
            .create_session("user-a", Duration::seconds(-1))
            .await
            .unwrap();

        let found = store.find_session(&session.token).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_session() {
        let store = MemoryStore::new();
        let session = store
            .create_session("user-a", Duration::hours(1))
            .await
            .unwrap();

        store.delete_session(&session.token).await.unwrap();
        let found = store.find_session(&session.token).await.unwrap();
        assert!(found.is_none());
    }
}
