pub mod sessions;
pub mod threads;
pub mod users;

pub use sessions::MongoSessionRepository;
pub use threads::MongoThreadRepository;
pub use users::MongoUserRepository;
