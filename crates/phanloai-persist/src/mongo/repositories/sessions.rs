use chrono::{Duration, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::{bson::doc, Client, Collection};
use uuid::Uuid;

use crate::error::Result;
use crate::mongo::models::MongoSession;

#[derive(Clone)]
pub struct MongoSessionRepository {
    collection: Collection<MongoSession>,
}

impl MongoSessionRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("sessions");
        Self { collection }
    }

    /// Issue a fresh session token for a user.
    pub async fn create_session(&self, user_id: ObjectId, ttl: Duration) -> Result<MongoSession> {
        let now = Utc::now();
        let session = MongoSession {
            token: Uuid::new_v4().to_string(),
            user_id,
            created_at: now,
            expires_at: now + ttl,
        };

        self.collection.insert_one(&session).await?;
        Ok(session)
    }

    pub async fn find_session(&self, token: &str) -> Result<Option<MongoSession>> {
        let filter = doc! { "_id": token };
        Ok(self.collection.find_one(filter).await?)
    }

    pub async fn delete_session(&self, token: &str) -> Result<()> {
        let filter = doc! { "_id": token };
        self.collection.delete_one(filter).await?;
        Ok(())
    }
}
