pub mod error;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod store;

pub use error::PersistError;
pub use memory::MemoryStore;
pub use models::{ClassificationOutcome, Message, Session, Thread, User, DEFAULT_THREAD_TITLE};
pub use mongo::MongoStore;
pub use store::{ConversationStore, CredentialStore, SessionStore};
