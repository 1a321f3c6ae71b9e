use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::config::Config;
use crate::model::task::TaskList;

pub const TODOS_FILE: &str = "todos.json";
pub const CONFIG_FILE: &str = "config.json";

/// Error type for storage writes. Reads never fail: they fall back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Error saving {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode {document}: {source}")]
    EncodeError {
        document: &'static str,
        source: serde_json::Error,
    },
}

/// Load/save of the two documents. Every save replaces the whole document.
pub trait Store {
    /// The task collection, or an empty one if missing or unreadable
    fn load_tasks(&self) -> TaskList;
    fn save_tasks(&self, tasks: &TaskList) -> Result<(), StoreError>;
    /// The configuration, default-filled and repaired
    fn load_config(&self) -> Config;
    fn save_config(&self, config: &Config) -> Result<(), StoreError>;
}

/// Parse a configuration document and restore its invariants
fn finish_config(config: Option<Config>) -> Config {
    let mut config = config.unwrap_or_default();
    config.repair();
    config
}

fn encode<T: Serialize>(document: &'static str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string_pretty(value).map_err(|source| StoreError::EncodeError { document, source })
}

// ---------------------------------------------------------------------------
// JSON files in a data directory
// ---------------------------------------------------------------------------

/// `todos.json` and `config.json` in one directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.join(TODOS_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Copy a damaged document to `<name>.json.bak` and note it in the
    /// recovery log. Returns the backup path, or a note on why there is none.
    fn back_up(&self, path: &Path, description: &str, error: &str) -> String {
        let bak = path.with_extension("json.bak");
        let backup = match fs::copy(path, &bak) {
            Ok(_) => bak.display().to_string(),
            Err(e) => {
                log::error!("event=backup_failed path={} error={}", bak.display(), e);
                format!("none ({} could not be written: {})", bak.display(), e)
            }
        };
        recovery::log_recovery(
            &self.dir,
            RecoveryEntry {
                timestamp: chrono::Utc::now(),
                category: RecoveryCategory::Corrupt,
                description: description.to_string(),
                fields: vec![
                    ("Source".to_string(), path.display().to_string()),
                    ("Backup".to_string(), backup.clone()),
                    ("Error".to_string(), error.to_string()),
                ],
                body: String::new(),
            },
        );
        backup
    }

    /// Read a document. Missing or unreadable → None. Unparseable → backed up
    /// as `<name>.bak`, noted in the recovery log, then None.
    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Option<T> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                let backup = self.back_up(path, "document replaced by defaults", &e.to_string());
                log::warn!(
                    "event=document_corrupt path={} backup={} error={}",
                    path.display(),
                    backup,
                    e
                );
                None
            }
        }
    }

    fn write_document(&self, file: &str, content: String) -> Result<(), StoreError> {
        let path = self.dir.join(file);
        let result = fs::create_dir_all(&self.dir)
            .and_then(|_| recovery::atomic_write(&path, content.as_bytes()));
        if let Err(e) = result {
            log::error!("event=save_failed path={} error={}", path.display(), e);
            recovery::log_recovery(
                &self.dir,
                RecoveryEntry {
                    timestamp: chrono::Utc::now(),
                    category: RecoveryCategory::Write,
                    description: format!("{} write failed", file),
                    fields: vec![
                        ("Target".to_string(), file.to_string()),
                        ("Error".to_string(), e.to_string()),
                    ],
                    body: content,
                },
            );
            return Err(StoreError::WriteError { path, source: e });
        }
        log::debug!("event=saved path={}", path.display());
        Ok(())
    }
}

impl Store for JsonStore {
    fn load_tasks(&self) -> TaskList {
        let path = self.tasks_path();
        let tasks: TaskList = self.read_document(&path).unwrap_or_default();
        if tasks.dropped() > 0 {
            // The next save rewrites the document without them
            let backup = self.back_up(
                &path,
                "unreadable records skipped",
                &format!("{} record(s) could not be read", tasks.dropped()),
            );
            log::warn!(
                "event=records_skipped path={} count={} backup={}",
                path.display(),
                tasks.dropped(),
                backup
            );
        }
        tasks
    }

    fn save_tasks(&self, tasks: &TaskList) -> Result<(), StoreError> {
        self.write_document(TODOS_FILE, encode("todos", tasks)?)
    }

    fn load_config(&self) -> Config {
        finish_config(self.read_document(&self.config_path()))
    }

    fn save_config(&self, config: &Config) -> Result<(), StoreError> {
        self.write_document(CONFIG_FILE, encode("config", config)?)
    }
}

// ---------------------------------------------------------------------------
// In-memory documents
// ---------------------------------------------------------------------------

/// Holds both documents as JSON text in memory. Loads re-parse the text, so
/// a load after a save behaves exactly like the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks_doc: RefCell<Option<String>>,
    config_doc: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the raw document text
    pub fn with_documents(tasks: Option<&str>, config: Option<&str>) -> Self {
        MemoryStore {
            tasks_doc: RefCell::new(tasks.map(str::to_string)),
            config_doc: RefCell::new(config.map(str::to_string)),
            fail_writes: Cell::new(false),
        }
    }

    /// Make every subsequent save fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn tasks_document(&self) -> Option<String> {
        self.tasks_doc.borrow().clone()
    }

    pub fn config_document(&self) -> Option<String> {
        self.config_doc.borrow().clone()
    }

    fn write(&self, slot: &RefCell<Option<String>>, file: &str, content: String) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::WriteError {
                path: PathBuf::from(file),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        *slot.borrow_mut() = Some(content);
        Ok(())
    }
}

impl Store for MemoryStore {
    fn load_tasks(&self) -> TaskList {
        self.tasks_doc
            .borrow()
            .as_deref()
            .and_then(|doc| serde_json::from_str(doc).ok())
            .unwrap_or_default()
    }

    fn save_tasks(&self, tasks: &TaskList) -> Result<(), StoreError> {
        self.write(&self.tasks_doc, TODOS_FILE, encode("todos", tasks)?)
    }

    fn load_config(&self) -> Config {
        finish_config(
            self.config_doc
                .borrow()
                .as_deref()
                .and_then(|doc| serde_json::from_str(doc).ok()),
        )
    }

    fn save_config(&self, config: &Config) -> Result<(), StoreError> {
        self.write(&self.config_doc, CONFIG_FILE, encode("config", config)?)
    }
}
