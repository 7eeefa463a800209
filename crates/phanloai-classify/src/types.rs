use serde::{Deserialize, Serialize};

/// Which remote model handles a turn.
///
/// The wire form is the integer the service expects in `model_type`:
/// 1 for ViT5, 2 for PhoBERT. Selection is purely a routing parameter,
/// the client behaves identically for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ModelKind {
    ViT5,
    PhoBert,
}

impl ModelKind {
    /// Human-readable model name, used in assistant replies.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::ViT5 => "ViT5",
            ModelKind::PhoBert => "PhoBERT",
        }
    }
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::ViT5
    }
}

impl From<ModelKind> for u8 {
    fn from(model: ModelKind) -> Self {
        match model {
            ModelKind::ViT5 => 1,
            ModelKind::PhoBert => 2,
        }
    }
}

impl TryFrom<u8> for ModelKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ModelKind::ViT5),
            2 => Ok(ModelKind::PhoBert),
            other => Err(format!("unknown model selector: {}", other)),
        }
    }
}

/// Verdict returned by the classification service.
///
/// The label is in the diacritic-stripped API form; resolve it to a
/// display form through [`crate::labels::Category`]. Confidence is
/// absent in the currently deployed response shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub confidence: Option<f64>,
}
