use chrono::{DateTime, Utc};
use phanloai_classify::{Classification, ModelKind};
use serde::{Deserialize, Serialize};

/// One entry in a thread's append-only message sequence.
///
/// Tagged by sender role; the model selector and classification verdict
/// exist only on assistant messages. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "from")]
pub enum Message {
    #[serde(rename = "USER")]
    User {
        content: String,
        timestamp: DateTime<Utc>,
    },
    #[serde(rename = "ASSISTANT")]
    Assistant {
        content: String,
        timestamp: DateTime<Utc>,
        #[serde(skip_serializing_if = "Option::is_none")]
        model: Option<ModelKind>,
        #[serde(skip_serializing_if = "Option::is_none")]
        classification: Option<ClassificationOutcome>,
    },
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message::User {
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        model: Option<ModelKind>,
        classification: Option<ClassificationOutcome>,
    ) -> Self {
        Message::Assistant {
            content: content.into(),
            timestamp: Utc::now(),
            model,
            classification,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Message::User { content, .. } => content,
            Message::Assistant { content, .. } => content,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Message::User { timestamp, .. } => *timestamp,
            Message::Assistant { timestamp, .. } => *timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Message::User { .. })
    }

    pub fn is_assistant(&self) -> bool {
        matches!(self, Message::Assistant { .. })
    }
}

/// The external service's verdict, embedded in an assistant message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl From<Classification> for ClassificationOutcome {
    fn from(classification: Classification) -> Self {
        Self {
            result: classification.label,
            confidence: classification.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_wire_shape() {
        let message = Message::user("hello");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["from"], "USER");
        assert_eq!(json["content"], "hello");
        assert!(json.get("model").is_none());
        assert!(json.get("classification").is_none());
    }

    #[test]
    fn test_assistant_message_carries_classification() {
        let outcome = ClassificationOutcome {
            result: "Kinh doanh".to_string(),
            confidence: None,
        };
        let message = Message::assistant("reply", Some(ModelKind::PhoBert), Some(outcome));
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["from"], "ASSISTANT");
        assert_eq!(json["model"], 2);
        assert_eq!(json["classification"]["result"], "Kinh doanh");
        assert!(json["classification"].get("confidence").is_none());
    }

    #[test]
    fn test_message_round_trip() {
        let message = Message::assistant("reply", Some(ModelKind::ViT5), None);
        let json = serde_json::to_string(&message).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();

        assert!(parsed.is_assistant());
        assert_eq!(parsed.content(), "reply");
    }
}
