pub mod message;
pub mod session;
pub mod thread;
pub mod user;

pub use message::{ClassificationOutcome, Message};
pub use session::Session;
pub use thread::{Thread, DEFAULT_THREAD_TITLE};
pub use user::User;
