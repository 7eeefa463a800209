use thiserror::Error;

use phanloai_persist::PersistError;

/// Failures a chat turn can actually surface.
///
/// Classification failures never appear here; the engine converts them
/// into the degraded reply and the turn still completes.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistError),
}

pub type Result<T> = std::result::Result<T, ChatError>;
