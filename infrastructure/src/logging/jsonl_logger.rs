//! Append-only JSONL transcript of question-answering turns.
//!
//! Every [`ConversationEvent`] becomes one line: the payload's fields plus
//! `type`, `timestamp` and the `session` id of the process that wrote it.

use lorekeeper_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// File name used when no explicit transcript path is configured
pub const DEFAULT_TRANSCRIPT_FILE: &str = "turns.jsonl";

/// Transcript writer shared by every session of one process.
///
/// Lines from earlier runs are kept; each run tags its records with its own
/// session id.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    session: String,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating parent directories as needed.
    ///
    /// Returns `None` (after a warning) when the file cannot be opened, so
    /// callers fall back to not logging.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            session: chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ").to_string(),
        })
    }

    /// `$XDG_DATA_HOME/lorekeeper/turns.jsonl`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("lorekeeper").join(DEFAULT_TRANSCRIPT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    fn record(&self, event: ConversationEvent) -> Value {
        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert(
            "timestamp".to_string(),
            Value::from(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
        );
        map.insert("session".to_string(), Value::from(self.session.as_str()));
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

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_turn_events_written_as_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("turns.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "turn_completed",
            serde_json::json!({
                "query": "Кто такой Танис?",
                "candidates": [{"query": "Кто такой Танис?", "confidence": 1.5}],
                "best_index": 0,
            }),
        ));
        logger.log(ConversationEvent::new(
            "turn_failed",
            serde_json::json!({"query": "?", "attempts": 3}),
        ));
        let session = logger.session().to_string();
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "turn_completed");
        assert_eq!(lines[0]["best_index"], 0);
        assert_eq!(lines[0]["session"], session.as_str());
        assert!(lines[0]["timestamp"].is_string());
        assert_eq!(lines[1]["type"], "turn_failed");
        assert_eq!(lines[1]["attempts"], 3);
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turns.jsonl");

        for _ in 0..2 {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new("turn_failed", serde_json::json!({})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_non_object_payload_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turns.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new("note", serde_json::json!("plain")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "plain");
    }

    #[test]
    fn test_default_path_names_app() {
        if let Some(path) = JsonlConversationLogger::default_path() {
            assert!(path.ends_with("lorekeeper/turns.jsonl"));
        }
    }
}
