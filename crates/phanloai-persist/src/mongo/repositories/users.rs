use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{bson::doc, Client, Collection, IndexModel};

use crate::error::{PersistError, Result};
use crate::mongo::models::MongoUser;

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<MongoUser>,
}

impl MongoUserRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("users");
        Self { collection }
    }

    /// Create the unique email index. Idempotent.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Insert a new user; the unique index rejects duplicate emails.
    pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<MongoUser> {
        let user = MongoUser {
            id: ObjectId::new(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };

        self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                PersistError::DuplicateEmail(email.to_string())
            } else {
                PersistError::Database(e)
            }
        })?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<MongoUser>> {
        let filter = doc! { "email": email };
        Ok(self.collection.find_one(filter).await?)
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        *error.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
