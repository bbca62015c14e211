//! JSONL transcript of agent traffic.
//!
//! Every [`ConversationEvent`] becomes one JSON line carrying `type`,
//! `timestamp` and `session`, appended to a file shared across runs.

use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use taskdesk_application::{ConversationEvent, ConversationLogger};
use tracing::warn;

/// Append-only JSONL conversation logger.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and on `Drop`.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    session_id: String,
}

impl JsonlConversationLogger {
    /// Open (or create) the transcript at `path`.
    ///
    /// Creates parent directories as needed. Returns `None` if the file
    /// cannot be opened; the caller then runs without a transcript.
    pub fn new(path: impl AsRef<Path>, session_id: impl Into<String>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create conversation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open conversation log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            session_id: session_id.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(&self, event: ConversationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::String(event.event_type.to_string()));
        map.insert("timestamp".to_string(), Value::String(timestamp));
        map.insert("session".to_string(), Value::String(self.session_id.clone()));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(line) = serde_json::to_string(&self.record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
