pub mod client;
pub mod error;
pub mod labels;
pub mod traits;
pub mod types;

pub use client::HttpClassifier;
pub use error::ClassifyError;
pub use labels::Category;
pub use traits::Classifier;
pub use types::{Classification, ModelKind};
