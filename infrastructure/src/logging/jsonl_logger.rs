//! JSONL file writer for interview events.
//!
//! Each [`InterviewEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended via a buffered writer.

use insight_application::{InterviewEvent, InterviewLogger};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Interview transcript logger writing one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`; simulation units all share
/// one logger. Flushes after every event — the transcript is the product,
/// losing lines to a crash would defeat it.
pub struct JsonlInterviewLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlInterviewLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create transcript log file {}: {}", path.display(), e);
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
}

impl InterviewLogger for JsonlInterviewLogger {
    fn log(&self, event: InterviewEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlInterviewLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_domain::{Business, Employee, Interview, Question};

    #[test]
    fn events_land_as_parseable_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlInterviewLogger::new(&path).unwrap();

        let business = Business::new("Acme");
        let employee = Employee::new(business.id, "a@acme.test", None);
        let interview = Interview::new(business.id, employee.id);
        let question = Question::base(business.id, "What do you do?", 0);

        logger.log(InterviewEvent::interview_started(&interview, &employee));
        logger.log(InterviewEvent::question_asked(&interview, &question));
        logger.log(InterviewEvent::answer_recorded(&interview, &question, "I build things."));
        logger.log(InterviewEvent::interview_finished(&interview, true, 1));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "interview_started");
        assert_eq!(first["employee"], "a@acme.test");
        assert!(first["timestamp"].is_string());

        let last: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
        assert_eq!(last["type"], "interview_finished");
        assert_eq!(last["completed"], true);
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/transcript.jsonl");
        assert!(JsonlInterviewLogger::new(&path).is_some());
        assert!(path.exists());
    }
}
