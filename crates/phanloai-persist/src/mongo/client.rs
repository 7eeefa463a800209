use async_trait::async_trait;
use chrono::{Duration, Utc};
use mongodb::{bson::oid::ObjectId, Client};

use crate::error::{PersistError, Result};
use crate::models::{Session, Thread, User};
use crate::mongo::models::MongoThread;
use crate::mongo::repositories::{
    MongoSessionRepository, MongoThreadRepository, MongoUserRepository,
};
use crate::store::{ConversationStore, CredentialStore, SessionStore};

/// MongoDB-backed implementation of all three store traits.
pub struct MongoStore {
    user_repo: MongoUserRepository,
    session_repo: MongoSessionRepository,
    thread_repo: MongoThreadRepository,
}

impl MongoStore {
    /// Connect to MongoDB and prepare the collections.
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let user_repo = MongoUserRepository::new(&client, database);
        user_repo.ensure_indexes().await?;

        tracing::debug!(database, "MongoDB store initialized");

        Ok(Self {
            user_repo,
            session_repo: MongoSessionRepository::new(&client, database),
            thread_repo: MongoThreadRepository::new(&client, database),
        })
    }
}

#[async_trait]
impl CredentialStore for MongoStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User> {
        let user = self.user_repo.create_user(email, password_hash).await?;
        Ok(user.into())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = self.user_repo.find_by_email(email).await?;
        Ok(user.map(|u| u.into()))
    }
}

#[async_trait]
impl SessionStore for MongoStore {
    async fn create_session(&self, user_id: &str, ttl: Duration) -> Result<Session> {
        let user_object_id = ObjectId::parse_str(user_id)
            .map_err(|e| PersistError::InvalidObjectId(e.to_string()))?;

        let session = self.session_repo.create_session(user_object_id, ttl).await?;
        Ok(session.into())
    }

    async fn find_session(&self, token: &str) -> Result<Option<Session>> {
        let session = self.session_repo.find_session(token).await?;
        let session: Option<Session> = session.map(|s| s.into());

        // Expired sessions are indistinguishable from missing ones
        match session {
            Some(s) if s.is_expired(Utc::now()) => {
                self.session_repo.delete_session(&s.token).await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn delete_session(&self, token: &str) -> Result<()> {
        self.session_repo.delete_session(token).await
    }
}

#[async_trait]
impl ConversationStore for MongoStore {
    async fn find_thread(&self, user_id: &str, thread_id: &str) -> Result<Option<Thread>> {
        // A malformed id behaves like a missing thread, never an error
        let thread_object_id = match ObjectId::parse_str(thread_id) {
            Ok(id) => id,
            Err(_) => return Ok(None),
        };
        let user_object_id = ObjectId::parse_str(user_id)
            .map_err(|e| PersistError::InvalidObjectId(e.to_string()))?;

        let thread = self
            .thread_repo
            .get_thread(thread_object_id, user_object_id)
            .await?;
        Ok(thread.map(|t| t.into()))
    }

    async fn create_thread(&self, user_id: &str) -> Result<Thread> {
        let user_object_id = ObjectId::parse_str(user_id)
            .map_err(|e| PersistError::InvalidObjectId(e.to_string()))?;

        let thread = self.thread_repo.create_thread(user_object_id).await?;
        Ok(thread.into())
    }

    async fn list_threads(&self, user_id: &str) -> Result<Vec<Thread>> {
        let user_object_id = ObjectId::parse_str(user_id)
            .map_err(|e| PersistError::InvalidObjectId(e.to_string()))?;

        let threads = self.thread_repo.list_threads(user_object_id).await?;
        Ok(threads.into_iter().map(|t| t.into()).collect())
    }

    async fn save_thread(&self, thread: &Thread) -> Result<()> {
        let mongo_thread = MongoThread {
            id: ObjectId::parse_str(&thread.id)
                .map_err(|e| PersistError::InvalidObjectId(e.to_string()))?,
            user_id: ObjectId::parse_str(&thread.user_id)
                .map_err(|e| PersistError::InvalidObjectId(e.to_string()))?,
            title: thread.title.clone(),
            messages: thread.messages.clone(),
            created_at: thread.created_at,
        };

        self.thread_repo.save_thread(&mongo_thread).await
    }
}
