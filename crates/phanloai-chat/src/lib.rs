pub mod engine;
pub mod error;
pub mod reply;

pub use engine::ChatEngine;
pub use error::ChatError;
pub use reply::{format_reply, DEGRADED_REPLY};
