//! File-based configuration storage
//!
//! A single JSON document (`storage/storage.json` by default) backs all
//! cross-restart configuration. The file is owned by one worker task;
//! callers talk to it through a cloneable [`StorageHandle`], so every
//! read-modify-write runs to completion before the next request starts.
//! There is no in-memory cache: each request re-reads the file, so hand
//! edits between requests are picked up.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::sync::{mpsc, oneshot};
use tracing::info;

use crate::application::errors::StorageError;

/// Default document location, relative to the working directory
pub const DEFAULT_STORAGE_PATH: &str = "storage/storage.json";

/// Top-level namespace for sticker command mappings
const STICKER_COMMANDS_KEY: &str = "stickerCommands";

/// The persisted JSON document
pub type Document = Map<String, Value>;

type UpdateFn = Box<dyn FnOnce(&mut Document) + Send>;

enum Request {
    Read {
        respond: oneshot::Sender<Document>,
    },
    Write {
        doc: Document,
        respond: oneshot::Sender<Result<(), StorageError>>,
    },
    Update {
        apply: UpdateFn,
        respond: oneshot::Sender<Result<(), StorageError>>,
    },
}

/// Handle to the storage worker task.
///
/// Cheap to clone; every clone talks to the same worker.
#[derive(Clone)]
pub struct StorageHandle {
    tx: mpsc::Sender<Request>,
}

impl StorageHandle {
    /// Spawn the worker task that owns the document at `path`.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel(32);
        info!("Storage document at {}", path.display());
        tokio::spawn(run_worker(path, rx));
        Self { tx }
    }

    /// Load the full document.
    ///
    /// Missing or unreadable files come back as an empty document; callers
    /// never see a read failure.
    pub async fn read_document(&self) -> Document {
        let (respond, rx) = oneshot::channel();
        if self.tx.send(Request::Read { respond }).await.is_err() {
            return Document::new();
        }
        rx.await.unwrap_or_default()
    }

    /// Overwrite the full document. Write failures propagate.
    pub async fn write_document(&self, doc: Document) -> Result<(), StorageError> {
        let (respond, rx) = oneshot::channel();
        self.tx
            .send(Request::Write { doc, respond })
            .await
            .map_err(|_| StorageError::Closed)?;
        rx.await.map_err(|_| StorageError::Closed)?
    }

    /// Read-modify-write the document as one uninterrupted step.
    ///
    /// `apply` runs inside the worker against the freshly loaded document;
    /// no other storage request interleaves with it.
    pub async fn update<F>(&self, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Document) + Send + 'static,
    {
        let (respond, rx) = oneshot::channel();
        self.tx
            .send(Request::Update {
                apply: Box::new(apply),
                respond,
            })
            .await
            .map_err(|_| StorageError::Closed)?;
        rx.await.map_err(|_| StorageError::Closed)?
    }

    /// The `stickerCommands` namespace: trigger string to sticker reference.
    ///
    /// Values are opaque strings; their interpretation belongs to the
    /// consuming feature, not this layer.
    pub async fn get_sticker_commands(&self) -> HashMap<String, String> {
        let doc = self.read_document().await;
        match doc.get(STICKER_COMMANDS_KEY) {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect(),
            _ => HashMap::new(),
        }
    }

    /// Replace the `stickerCommands` namespace wholesale.
    ///
    /// Every other top-level key in the document survives unchanged.
    pub async fn set_sticker_commands(
        &self,
        commands: HashMap<String, String>,
    ) -> Result<(), StorageError> {
        self.update(move |doc| {
            let map: Map<String, Value> = commands
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            doc.insert(STICKER_COMMANDS_KEY.to_string(), Value::Object(map));
        })
        .await
    }
}

async fn run_worker(path: PathBuf, mut rx: mpsc::Receiver<Request>) {
    while let Some(request) = rx.recv().await {
        match request {
            Request::Read { respond } => {
                let _ = respond.send(load_document(&path).await);
            }
            Request::Write { doc, respond } => {
                let _ = respond.send(persist_document(&path, &doc).await);
            }
            Request::Update { apply, respond } => {
                let mut doc = load_document(&path).await;
                apply(&mut doc);
                let _ = respond.send(persist_document(&path, &doc).await);
            }
        }
    }
}

/// Load and parse the document, recovering every failure to `{}`.
///
/// Lines starting with `//` are stripped first, so a hand-edited file may
/// carry comments. A file that still fails to parse is treated as absent;
/// its content is at risk of being overwritten by the next write.
async fn load_document(path: &Path) -> Document {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(_) => return Document::new(),
    };
    match serde_json::from_str::<Value>(&strip_line_comments(&raw)) {
        Ok(Value::Object(doc)) => doc,
        _ => Document::new(),
    }
}

async fn persist_document(path: &Path, doc: &Document) -> Result<(), StorageError> {
    let pretty = serde_json::to_string_pretty(&Value::Object(doc.clone()))
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, pretty).await?;
    Ok(())
}

fn strip_line_comments(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_full_line_comments_only() {
        let raw = "// note\n{\"stickerCommands\":{\"hi\":\"s1\"}}";
        let stripped = strip_line_comments(raw);
        assert_eq!(stripped, "{\"stickerCommands\":{\"hi\":\"s1\"}}");
    }

    #[test]
    fn keeps_urls_inside_values() {
        // "//" inside a JSON string is not a comment line
        let raw = "{\"url\":\"https://example.com\"}";
        assert_eq!(strip_line_comments(raw), raw);
    }
}
