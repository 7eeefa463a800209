use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{Message, Session, Thread, User};

/// MongoDB-specific user model (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoUser {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// MongoDB-specific thread model (uses ObjectId, embedded messages)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoThread {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}

/// MongoDB-specific session model (token is the document id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoSession {
    #[serde(rename = "_id")]
    pub token: String,
    pub user_id: ObjectId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

// Conversions between database-agnostic and MongoDB-specific models

impl From<MongoUser> for User {
    fn from(user: MongoUser) -> Self {
        Self {
            id: user.id.to_hex(),
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
        }
    }
}

impl From<MongoThread> for Thread {
    fn from(thread: MongoThread) -> Self {
        Self {
            id: thread.id.to_hex(),
            user_id: thread.user_id.to_hex(),
            title: thread.title,
            messages: thread.messages,
            created_at: thread.created_at,
        }
    }
}

impl From<MongoSession> for Session {
    fn from(session: MongoSession) -> Self {
        Self {
            token: session.token,
            user_id: session.user_id.to_hex(),
            created_at: session.created_at,
            expires_at: session.expires_at,
        }
    }
}
