use std::sync::Arc;

use phanloai_classify::{Classifier, ModelKind};
use phanloai_persist::{ConversationStore, Message, Thread};

use crate::error::Result;
use crate::reply::{format_reply, DEGRADED_REPLY};

/// Orchestrates one chat turn: resolve the thread, append the utterance,
/// classify it, append the reply, persist.
///
/// Both dependencies are injected; the engine holds no ambient state.
pub struct ChatEngine {
    store: Arc<dyn ConversationStore>,
    classifier: Arc<dyn Classifier>,
}

impl ChatEngine {
    pub fn new(store: Arc<dyn ConversationStore>, classifier: Arc<dyn Classifier>) -> Self {
        Self { store, classifier }
    }

    /// Handle a single turn for an authenticated user.
    ///
    /// A thread id that is missing, malformed, or owned by someone else
    /// falls back to a fresh thread. A blank utterance appends nothing
    /// and skips the classifier. A classifier failure becomes the fixed
    /// degraded reply; once a thread exists the turn only fails if the
    /// final persistence write does.
    pub async fn handle_turn(
        &self,
        user_id: &str,
        thread_id: Option<&str>,
        utterance: &str,
        model: ModelKind,
    ) -> Result<Thread> {
        let existing = match thread_id {
            Some(id) => self.store.find_thread(user_id, id).await?,
            None => None,
        };

        let mut thread = match existing {
            Some(thread) => thread,
            None => self.store.create_thread(user_id).await?,
        };

        if !utterance.trim().is_empty() {
            thread.messages.push(Message::user(utterance));

            let reply = match self.classifier.classify(utterance, model).await {
                Ok(classification) => Message::assistant(
                    format_reply(model, &classification.label),
                    Some(model),
                    Some(classification.into()),
                ),
                Err(e) => {
                    tracing::warn!(
                        thread_id = %thread.id,
                        error = %e,
                        "classification unavailable, sending degraded reply"
                    );
                    Message::assistant(DEGRADED_REPLY, Some(model), None)
                }
            };
            thread.messages.push(reply);
        }

        self.store.save_thread(&thread).await?;

        Ok(thread)
    }
}
