use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use phanloai_chat::{ChatEngine, DEGRADED_REPLY};
use phanloai_classify::{Classification, Classifier, ClassifyError, ModelKind};
use phanloai_persist::{ConversationStore, MemoryStore, Message};

/// Classifier double: a canned label, or a canned failure when `label`
/// is `None`. Counts invocations.
struct StubClassifier {
    label: Option<String>,
    calls: AtomicUsize,
}

impl StubClassifier {
    fn returning(label: &str) -> Arc<Self> {
        Arc::new(Self {
            label: Some(label.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            label: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for StubClassifier {
    async fn classify(
        &self,
        _text: &str,
        _model: ModelKind,
    ) -> Result<Classification, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.label {
            Some(label) => Ok(Classification {
                label: label.clone(),
                confidence: None,
            }),
            None => Err(ClassifyError::Status(500)),
        }
    }
}

fn engine_with(
    classifier: Arc<StubClassifier>,
) -> (ChatEngine, Arc<MemoryStore>, Arc<StubClassifier>) {
    let store = Arc::new(MemoryStore::new());
    let engine = ChatEngine::new(store.clone(), classifier.clone());
    (engine, store, classifier)
}

#[tokio::test]
async fn test_turn_appends_user_and_assistant_messages() {
    let (engine, _store, classifier) = engine_with(StubClassifier::returning("Kinh doanh"));

    let thread = engine
        .handle_turn("user-a", None, "How good is this product", ModelKind::PhoBert)
        .await
        .unwrap();

    assert_eq!(thread.messages.len(), 2);
    assert!(thread.messages[0].is_user());
    assert!(thread.messages[1].is_assistant());
    assert_eq!(thread.messages[0].content(), "How good is this product");
    assert_eq!(classifier.call_count(), 1);

    let reply = thread.messages[1].content();
    assert!(reply.contains("PhoBERT"));
    assert!(reply.contains("Kinh doanh"));
    assert!(reply.contains("Business"));

    match &thread.messages[1] {
        Message::Assistant {
            model,
            classification,
            ..
        } => {
            assert_eq!(*model, Some(ModelKind::PhoBert));
            assert_eq!(classification.as_ref().unwrap().result, "Kinh doanh");
        }
        Message::User { .. } => panic!("expected assistant message"),
    }
}

#[tokio::test]
async fn test_turn_persists_the_updated_thread() {
    let (engine, store, _) = engine_with(StubClassifier::returning("The thao"));

    let thread = engine
        .handle_turn("user-a", None, "bóng đá hôm nay", ModelKind::ViT5)
        .await
        .unwrap();

    let persisted = store
        .find_thread("user-a", &thread.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(persisted.messages.len(), 2);
}

#[tokio::test]
async fn test_classifier_failure_yields_degraded_reply() {
    let (engine, store, classifier) = engine_with(StubClassifier::failing());

    let thread = engine
        .handle_turn("user-a", None, "xin chào", ModelKind::ViT5)
        .await
        .unwrap();

    // Turn still completes and persists with exactly two new messages
    assert_eq!(thread.messages.len(), 2);
    assert_eq!(thread.messages[1].content(), DEGRADED_REPLY);
    assert_eq!(classifier.call_count(), 1);

    match &thread.messages[1] {
        Message::Assistant { classification, .. } => assert!(classification.is_none()),
        Message::User { .. } => panic!("expected assistant message"),
    }

    let persisted = store
        .find_thread("user-a", &thread.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(persisted.messages.len(), 2);
}

#[tokio::test]
async fn test_blank_utterance_appends_nothing() {
    let (engine, _store, classifier) = engine_with(StubClassifier::returning("Khoa hoc"));

    let thread = engine
        .handle_turn("user-a", None, "   \t ", ModelKind::ViT5)
        .await
        .unwrap();

    assert!(thread.messages.is_empty());
    assert_eq!(classifier.call_count(), 0);
}

#[tokio::test]
async fn test_blank_utterance_leaves_existing_thread_unchanged() {
    let (engine, _store, classifier) = engine_with(StubClassifier::returning("Doi song"));

    let thread = engine
        .handle_turn("user-a", None, "mẹo nấu ăn", ModelKind::ViT5)
        .await
        .unwrap();
    assert_eq!(classifier.call_count(), 1);

    let unchanged = engine
        .handle_turn("user-a", Some(&thread.id), "", ModelKind::ViT5)
        .await
        .unwrap();

    assert_eq!(unchanged.id, thread.id);
    assert_eq!(unchanged.messages.len(), 2);
    assert_eq!(classifier.call_count(), 1);
}

#[tokio::test]
async fn test_second_turn_extends_existing_thread() {
    let (engine, _store, _) = engine_with(StubClassifier::returning("Suc khoe"));

    let first = engine
        .handle_turn("user-a", None, "ăn gì tốt cho tim", ModelKind::ViT5)
        .await
        .unwrap();
    let second = engine
        .handle_turn("user-a", Some(&first.id), "ngủ bao nhiêu là đủ", ModelKind::ViT5)
        .await
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.messages.len(), 4);
}

#[tokio::test]
async fn test_foreign_thread_id_falls_back_to_new_thread() {
    let (engine, store, _) = engine_with(StubClassifier::returning("Kinh doanh"));

    let owned = engine
        .handle_turn("user-a", None, "giá vàng", ModelKind::ViT5)
        .await
        .unwrap();

    // Another user addressing that id gets a fresh thread, not an error
    let foreign = engine
        .handle_turn("user-b", Some(&owned.id), "giá vàng", ModelKind::ViT5)
        .await
        .unwrap();

    assert_ne!(foreign.id, owned.id);
    assert_eq!(foreign.user_id, "user-b");

    // The original thread is untouched
    let untouched = store
        .find_thread("user-a", &owned.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.messages.len(), 2);
}

#[tokio::test]
async fn test_unknown_thread_id_falls_back_to_new_thread() {
    let (engine, _store, _) = engine_with(StubClassifier::returning("Vi tinh"));

    let thread = engine
        .handle_turn("user-a", Some("no-such-thread"), "máy tính mới", ModelKind::ViT5)
        .await
        .unwrap();

    assert_eq!(thread.messages.len(), 2);
}

#[tokio::test]
async fn test_unmapped_label_passes_through_verbatim() {
    let (engine, _store, _) = engine_with(StubClassifier::returning("Am nhac"));

    let thread = engine
        .handle_turn("user-a", None, "bài hát hay", ModelKind::ViT5)
        .await
        .unwrap();

    let reply = thread.messages[1].content();
    assert!(reply.contains("\"Am nhac\""));
}
