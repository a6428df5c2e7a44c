//! Integration tests for [`tgkit_dispatch::HandlerChain`].
//!
//! Covers: handlers executed in registration order, first error aborting the
//! remaining handlers, chain state resetting between updates, and the empty
//! chain accepting everything.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tgkit_core::{BotApi, BotError, Handler, HandlerError, Message, Result, Update, UpdateKind};
use tgkit_dispatch::HandlerChain;

/// BotApi stand-in; these tests never send anything.
struct StubApi;

#[async_trait]
impl BotApi for StubApi {
    async fn send_message(&self, _chat_id: i64, _text: &str) -> Result<Message> {
        Err(BotError::Api("not wired in tests".to_string()))
    }

    async fn reply_to(&self, _message: &Message, _text: &str) -> Result<Message> {
        Err(BotError::Api("not wired in tests".to_string()))
    }

    async fn forward_message(
        &self,
        _chat_id: i64,
        _from_chat_id: i64,
        _message_id: i64,
    ) -> Result<Message> {
        Err(BotError::Api("not wired in tests".to_string()))
    }

    async fn send_sticker(&self, _chat_id: i64, _sticker: &str) -> Result<Message> {
        Err(BotError::Api("not wired in tests".to_string()))
    }
}

fn update(id: i64) -> Update {
    Update {
        id,
        kind: UpdateKind::Unknown,
    }
}

struct CountingHandler {
    count: Arc<AtomicUsize>,
}

#[async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, _bot: &dyn BotApi, _update: &Update) -> std::result::Result<(), HandlerError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingHandler {
    count: Arc<AtomicUsize>,
}

#[async_trait]
impl Handler for FailingHandler {
    async fn handle(&self, _bot: &dyn BotApi, _update: &Update) -> std::result::Result<(), HandlerError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Err(HandlerError::Message("boom".to_string()))
    }
}

/// **Test: handlers run in registration order.**
///
/// **Setup:** Two handlers that push their name to a shared vec.
/// **Action:** `chain.handle(&bot, &update)`.
/// **Expected:** Order is first, second; result is Ok.
#[tokio::test]
async fn test_handlers_run_in_registration_order() {
    let order = Arc::new(Mutex::new(Vec::new()));

    struct OrderHandler {
        name: &'static str,
        order: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl Handler for OrderHandler {
        async fn handle(
            &self,
            _bot: &dyn BotApi,
            _update: &Update,
        ) -> std::result::Result<(), HandlerError> {
            self.order.lock().unwrap().push(self.name);
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first",
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second",
            order: order.clone(),
        }));

    chain.handle(&StubApi, &update(1)).await.unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

/// **Test: the first failing handler aborts the rest of the chain.**
///
/// **Setup:** Chain [h1 ok, h2 fails, h3 ok].
/// **Action:** `chain.handle(&bot, &update)`.
/// **Expected:** h1 and h2 invoked once each, h3 never; the error is returned.
#[tokio::test]
async fn test_first_error_short_circuits() {
    let h1_count = Arc::new(AtomicUsize::new(0));
    let h2_count = Arc::new(AtomicUsize::new(0));
    let h3_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler {
            count: h1_count.clone(),
        }))
        .add_handler(Arc::new(FailingHandler {
            count: h2_count.clone(),
        }))
        .add_handler(Arc::new(CountingHandler {
            count: h3_count.clone(),
        }));

    let err = chain.handle(&StubApi, &update(1)).await.unwrap_err();

    assert_eq!(err.to_string(), "boom");
    assert_eq!(h1_count.load(Ordering::SeqCst), 1);
    assert_eq!(h2_count.load(Ordering::SeqCst), 1);
    assert_eq!(h3_count.load(Ordering::SeqCst), 0);
}

/// **Test: chain state resets between updates.**
///
/// **Setup:** Chain [h1 ok, h2 fails]; two updates handled back to back.
/// **Action:** `chain.handle` twice.
/// **Expected:** h1 invoked for both updates despite h2's failures.
#[tokio::test]
async fn test_chain_resets_per_update() {
    let h1_count = Arc::new(AtomicUsize::new(0));
    let h2_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler {
            count: h1_count.clone(),
        }))
        .add_handler(Arc::new(FailingHandler {
            count: h2_count.clone(),
        }));

    assert!(chain.handle(&StubApi, &update(1)).await.is_err());
    assert!(chain.handle(&StubApi, &update(2)).await.is_err());

    assert_eq!(h1_count.load(Ordering::SeqCst), 2);
    assert_eq!(h2_count.load(Ordering::SeqCst), 2);
}

/// **Test: an empty chain accepts every update.**
///
/// **Setup:** `HandlerChain::new()` with nothing registered.
/// **Action:** `chain.handle(&bot, &update)`.
/// **Expected:** Ok; the chain reports empty.
#[tokio::test]
async fn test_empty_chain_is_a_valid_no_op() {
    let chain = HandlerChain::new();

    assert!(chain.is_empty());
    assert_eq!(chain.len(), 0);
    assert!(chain.handle(&StubApi, &update(1)).await.is_ok());
}

/// **Test: anyhow errors bubble through the handler escape hatch.**
///
/// **Setup:** Handler returning `HandlerError::Other(anyhow!(...))`.
/// **Action:** `chain.handle(&bot, &update)`.
/// **Expected:** The error message survives the conversion.
#[tokio::test]
async fn test_anyhow_handler_error_is_preserved() {
    struct AnyhowHandler;

    #[async_trait]
    impl Handler for AnyhowHandler {
        async fn handle(
            &self,
            _bot: &dyn BotApi,
            _update: &Update,
        ) -> std::result::Result<(), HandlerError> {
            Err(anyhow::anyhow!("storage offline").into())
        }
    }

    let chain = HandlerChain::new().add_handler(Arc::new(AnyhowHandler));

    let err = chain.handle(&StubApi, &update(1)).await.unwrap_err();

    assert_eq!(err.to_string(), "storage offline");
}
