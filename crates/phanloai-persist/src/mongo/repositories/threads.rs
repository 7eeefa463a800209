use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::{bson::doc, bson::to_bson, Client, Collection};

use crate::error::Result;
use crate::models::DEFAULT_THREAD_TITLE;
use crate::mongo::models::MongoThread;

#[derive(Clone)]
pub struct MongoThreadRepository {
    collection: Collection<MongoThread>,
}

impl MongoThreadRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("threads");
        Self { collection }
    }

    /// Create an empty thread with the placeholder title.
    pub async fn create_thread(&self, user_id: ObjectId) -> Result<MongoThread> {
        let thread = MongoThread {
            id: ObjectId::new(),
            user_id,
            title: DEFAULT_THREAD_TITLE.to_string(),
            messages: Vec::new(),
            created_at: Utc::now(),
        };

        self.collection.insert_one(&thread).await?;
        Ok(thread)
    }

    /// Get a thread by id, filtered by owner.
    pub async fn get_thread(
        &self,
        thread_id: ObjectId,
        user_id: ObjectId,
    ) -> Result<Option<MongoThread>> {
        let filter = doc! { "_id": thread_id, "user_id": user_id };
        Ok(self.collection.find_one(filter).await?)
    }

    /// List threads for a user, newest first.
    pub async fn list_threads(&self, user_id: ObjectId) -> Result<Vec<MongoThread>> {
        let filter = doc! { "user_id": user_id };
        let threads = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(threads)
    }

    /// Replace the thread's message sequence in a single write.
    ///
    /// Title is written too; owner and creation time are never touched.
    pub async fn save_thread(&self, thread: &MongoThread) -> Result<()> {
        let filter = doc! { "_id": thread.id, "user_id": thread.user_id };
        let update = doc! {
            "$set": {
                "title": &thread.title,
                "messages": to_bson(&thread.messages)?,
            }
        };

        self.collection.update_one(filter, update).await?;
        Ok(())
    }
}
