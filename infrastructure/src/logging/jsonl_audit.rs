//! JSONL audit writer for computed results.
//!
//! Each record is serialized as a single JSON line with a `type` field and
//! `timestamp`, appended via a buffered writer. The collaborators that
//! own persistence consume these files for debugging and replay.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use taste_application::{AssignPersonaOutput, CategorizePlaceOutput};
use taste_domain::Place;
use tracing::warn;

/// JSONL audit logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAuditLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAuditLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create audit log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create audit log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a persona assignment
    pub fn log_assignment(&self, output: &AssignPersonaOutput) {
        self.record(
            "persona_assignment",
            serde_json::json!({
                "tags": &output.tags,
                "scores": &output.scores,
                "primary": &output.assignment.primary.id,
                "secondary": output.assignment.secondary.as_ref().map(|p| &p.id),
            }),
        );
    }

    /// Record a place categorization
    pub fn log_categorization(&self, place: &Place, output: &CategorizePlaceOutput) {
        self.record(
            "place_categorization",
            serde_json::json!({
                "name": &place.name,
                "provider_types": &place.provider_types,
                "main_category": output.categorization.main_category,
                "subtype": &output.categorization.subtype,
                "source": output.source,
            }),
        );
    }

    fn record(&self, event_type: &str, payload: serde_json::Value) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = if let serde_json::Value::Object(mut map) = payload {
            map.insert("type".to_string(), serde_json::Value::String(event_type.to_string()));
            map.insert("timestamp".to_string(), serde_json::Value::String(timestamp));
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event_type,
                "timestamp": timestamp,
                "data": payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush per record for crash safety — JSONL is append-only
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAuditLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
