//! Command contract integration tests
//! Run with: cargo test --test command_test

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use saku_bot::application::errors::BotError;
use saku_bot::application::services::{CommandService, Dispatch};
use saku_bot::domain::entities::{PluginDescriptor, SentMessage};
use saku_bot::domain::traits::{AdapterInfo, ChatAdapter};
use saku_bot::infrastructure::storage::StorageHandle;
use saku_bot::plugins;

/// Nothing listens on port 9; remote calls fail immediately.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

/// Records everything the bot tries to send or edit.
struct MockAdapter {
    sent: Mutex<Vec<String>>,
    edits: Mutex<Vec<String>>,
    editable: bool,
}

impl MockAdapter {
    fn new(editable: bool) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
            editable,
        })
    }

    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    fn edits(&self) -> Vec<String> {
        self.edits.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatAdapter for MockAdapter {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<SentMessage, BotError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(SentMessage {
            id: format!("msg-{}", self.sent.lock().unwrap().len()),
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        })
    }

    fn supports_edit(&self) -> bool {
        self.editable
    }

    async fn edit_message(
        &self,
        chat_id: &str,
        message_id: &str,
        text: &str,
    ) -> Result<SentMessage, BotError> {
        self.edits.lock().unwrap().push(text.to_string());
        Ok(SentMessage {
            id: message_id.to_string(),
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        })
    }

    fn adapter_info(&self) -> AdapterInfo {
        AdapterInfo {
            id: "mock".to_string(),
            name: "mock".to_string(),
        }
    }
}

fn temp_storage_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("saku-bot-test-{}", uuid::Uuid::new_v4()))
        .join("storage.json")
}

fn service_with(plugins: Vec<PluginDescriptor>) -> CommandService {
    let mut service = CommandService::new(".");
    for plugin in plugins {
        service.register_plugin(plugin).unwrap();
    }
    service
}

async fn dispatch(
    service: &CommandService,
    adapter: &Arc<MockAdapter>,
    text: &str,
) -> Result<Dispatch, BotError> {
    let transport: Arc<dyn ChatAdapter> = adapter.clone();
    let storage = StorageHandle::spawn(temp_storage_path());
    service.dispatch("chat-1", text, transport, storage).await
}

#[tokio::test]
async fn weather_without_args_asks_for_a_city() {
    let service = service_with(vec![plugins::weather::plugin_with_base(DEAD_ENDPOINT)]);
    let adapter = MockAdapter::new(false);

    let result = dispatch(&service, &adapter, ".weather").await.unwrap();

    assert_eq!(result, Dispatch::Handled);
    // Exactly one instructional reply; had a remote call been attempted
    // against the dead endpoint, the reply would be the API-error fallback.
    assert_eq!(adapter.sent(), vec!["Please provide a city name.".to_string()]);
}

#[tokio::test]
async fn weather_remote_failure_resolves_with_fallback_reply() {
    let service = service_with(vec![plugins::weather::plugin_with_base(DEAD_ENDPOINT)]);
    let adapter = MockAdapter::new(false);

    let result = dispatch(&service, &adapter, ".weather Lagos").await;

    // The dispatch result resolves; the failure is the reply text.
    assert_eq!(result.unwrap(), Dispatch::Handled);
    assert_eq!(
        adapter.sent(),
        vec!["\u{274c} City not found or API error.".to_string()]
    );
}

#[tokio::test]
async fn weather_alias_routes_to_the_same_command() {
    let service = service_with(vec![plugins::weather::plugin_with_base(DEAD_ENDPOINT)]);
    let adapter = MockAdapter::new(false);

    let result = dispatch(&service, &adapter, ".w").await.unwrap();

    assert_eq!(result, Dispatch::Handled);
    assert_eq!(adapter.sent(), vec!["Please provide a city name.".to_string()]);
}

#[tokio::test]
async fn lyrics_without_args_asks_for_a_song() {
    let service = service_with(vec![plugins::lyrics::plugin_with_base(DEAD_ENDPOINT)]);
    let adapter = MockAdapter::new(false);

    let result = dispatch(&service, &adapter, ".lyrics").await.unwrap();

    assert_eq!(result, Dispatch::Handled);
    assert_eq!(adapter.sent(), vec!["Please provide a song name.".to_string()]);
}

#[tokio::test]
async fn lyrics_remote_failure_resolves_with_fallback_reply() {
    let service = service_with(vec![plugins::lyrics::plugin_with_base(DEAD_ENDPOINT)]);
    let adapter = MockAdapter::new(false);

    let result = dispatch(&service, &adapter, ".lyrics Bohemian Rhapsody")
        .await
        .unwrap();

    assert_eq!(result, Dispatch::Handled);
    assert_eq!(
        adapter.sent(),
        vec!["\u{274c} Lyrics not found or API error.".to_string()]
    );
}

fn latency_from(text: &str) -> u128 {
    let rest = text
        .strip_prefix("\u{1f3d3} Pong! ")
        .unwrap_or_else(|| panic!("unexpected pong text: {}", text));
    rest.strip_suffix(" ms")
        .unwrap_or_else(|| panic!("unexpected pong text: {}", text))
        .parse()
        .unwrap()
}

#[tokio::test]
async fn ping_edits_its_reply_when_the_transport_allows() {
    let service = service_with(vec![plugins::ping::plugin()]);
    let adapter = MockAdapter::new(true);

    let result = dispatch(&service, &adapter, ".ping").await.unwrap();

    assert_eq!(result, Dispatch::Handled);
    let sent = adapter.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("Pong"));

    let edits = adapter.edits();
    assert_eq!(edits.len(), 1);
    let _latency_ms = latency_from(&edits[0]);
}

#[tokio::test]
async fn ping_falls_back_to_a_second_message_without_edit_support() {
    let service = service_with(vec![plugins::ping::plugin()]);
    let adapter = MockAdapter::new(false);

    let result = dispatch(&service, &adapter, ".ping").await.unwrap();

    assert_eq!(result, Dispatch::Handled);
    let sent = adapter.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].contains("Pong"));
    let _latency_ms = latency_from(&sent[1]);
    assert!(adapter.edits().is_empty());
}

#[tokio::test]
async fn unknown_commands_are_reported_not_run() {
    let service = service_with(vec![plugins::ping::plugin()]);
    let adapter = MockAdapter::new(false);

    let result = dispatch(&service, &adapter, ".nosuch").await.unwrap();

    assert_eq!(result, Dispatch::Unknown("nosuch".to_string()));
    assert!(adapter.sent().is_empty());
}

#[tokio::test]
async fn plain_text_is_ignored() {
    let service = service_with(vec![plugins::ping::plugin()]);
    let adapter = MockAdapter::new(false);

    let result = dispatch(&service, &adapter, "hello there").await.unwrap();

    assert_eq!(result, Dispatch::Ignored);
    assert!(adapter.sent().is_empty());
}

#[tokio::test]
async fn duplicate_command_names_are_rejected_at_registration() {
    let mut service = CommandService::new(".");
    service.register_plugin(plugins::ping::plugin()).unwrap();

    let clash = PluginDescriptor::new("other")
        .with_command(saku_bot::domain::entities::CommandSpec::new("ping"));
    assert!(service.register_plugin(clash).is_err());
}

#[tokio::test]
async fn sticker_commands_persist_across_invocations() {
    let service = service_with(vec![plugins::sticker::plugin()]);
    let adapter = MockAdapter::new(false);
    let storage = StorageHandle::spawn(temp_storage_path());

    let transport: Arc<dyn ChatAdapter> = adapter.clone();
    service
        .dispatch("chat-1", ".setsticker hi sticker-1", transport, storage.clone())
        .await
        .unwrap();

    let commands = storage.get_sticker_commands().await;
    assert_eq!(commands.get("hi").map(String::as_str), Some("sticker-1"));

    let transport: Arc<dyn ChatAdapter> = adapter.clone();
    service
        .dispatch("chat-1", ".stickers", transport, storage.clone())
        .await
        .unwrap();
    let sent = adapter.sent();
    assert!(sent.last().unwrap().contains("hi"));

    let transport: Arc<dyn ChatAdapter> = adapter.clone();
    service
        .dispatch("chat-1", ".delsticker hi", transport, storage.clone())
        .await
        .unwrap();
    assert!(storage.get_sticker_commands().await.is_empty());
}
