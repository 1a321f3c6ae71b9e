use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of the focus that always exists and cannot be removed
pub const DEFAULT_FOCUS: &str = "default";

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
    OnHold,
}

impl TaskStatus {
    /// The string stored in the task document
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Done => "done",
            TaskStatus::OnHold => "on-hold",
        }
    }

    /// Parse a stored status string
    pub fn parse_status(s: &str) -> Option<TaskStatus> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "done" => Some(TaskStatus::Done),
            "on-hold" => Some(TaskStatus::OnHold),
            _ => None,
        }
    }

    /// The glyph shown in front of the task text
    pub fn symbol(self) -> char {
        match self {
            TaskStatus::Pending => '☐',
            TaskStatus::Done => '✔',
            TaskStatus::OnHold => '●',
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Unknown status strings, `null` and non-string values all load as `pending`.
impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw
            .as_str()
            .and_then(TaskStatus::parse_status)
            .unwrap_or_default())
    }
}

/// Run-scoped surrogate identity of a task.
///
/// Assigned when the collection is loaded (in document order) or when a task
/// is added. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip)]
    pub id: TaskId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default = "default_focus")]
    pub focus: String,
    /// ISO-8601 creation timestamp, kept verbatim from the document
    #[serde(default)]
    pub created: String,
}

fn default_focus() -> String {
    DEFAULT_FOCUS.to_string()
}

impl Task {
    /// Create a pending task. The id is assigned when it joins a `TaskList`.
    pub fn new(text: impl Into<String>, focus: impl Into<String>, created: impl Into<String>) -> Self {
        Task {
            id: TaskId::default(),
            text: text.into(),
            status: TaskStatus::Pending,
            focus: focus.into(),
            created: created.into(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    pub fn is_on_hold(&self) -> bool {
        self.status == TaskStatus::OnHold
    }
}

/// The full task collection across all focuses, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
    /// Stored records that could not be read as tasks
    dropped: usize,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from stored records, assigning fresh ids in order.
    pub fn from_records(records: Vec<Task>) -> Self {
        let mut list = TaskList::new();
        for task in records {
            list.push(task);
        }
        list
    }

    /// Append a task, assigning it the next id. Returns the id.
    pub fn push(&mut self, mut task: Task) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        task.id = id;
        self.tasks.push(task);
        id
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// How many stored records were skipped on load
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove a task by id, returning it
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Keep only the tasks matching the predicate. Returns how many were dropped.
    pub fn retain(&mut self, f: impl FnMut(&Task) -> bool) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(f);
        before - self.tasks.len()
    }
}

impl Serialize for TaskList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tasks.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // One bad record must not cost the rest of the document
        let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
        let mut list = TaskList::new();
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<Task>(value) {
                Ok(task) => {
                    list.push(task);
                }
                Err(e) => {
                    log::warn!("event=record_skipped index={} error={}", index, e);
                    list.dropped += 1;
                }
            }
        }
        Ok(list)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [TaskStatus::Pending, TaskStatus::Done, TaskStatus::OnHold] {
            assert_eq!(TaskStatus::parse_status(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse_status("later"), None);
    }

    #[test]
    fn unknown_status_loads_as_pending() {
        let task: Task =
            serde_json::from_str(r#"{"text":"x","status":"someday","focus":"default","created":""}"#)
                .unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn missing_fields_get_defaults() {
        let task: Task = serde_json::from_str(r#"{"text":"bare"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.focus, "default");
        assert_eq!(task.created, "");

        let task: Task = serde_json::from_str(r#"{"status":"done"}"#).unwrap();
        assert_eq!(task.text, "");
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn null_or_odd_status_loads_as_pending() {
        for status in ["null", "3", "[\"done\"]", "{}"] {
            let json = format!(r#"{{"text":"x","status":{}}}"#, status);
            let task: Task = serde_json::from_str(&json).unwrap();
            assert_eq!(task.status, TaskStatus::Pending, "status {}", status);
        }
    }

    #[test]
    fn unreadable_records_are_skipped_not_fatal() {
        let list: TaskList = serde_json::from_str(
            r#"[{"text":"keep me","status":"done"},
                "not a record",
                {"text":42},
                {"text":"also kept","status":null}]"#,
        )
        .unwrap();
        let texts: Vec<&str> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["keep me", "also kept"]);
        assert_eq!(list.dropped(), 2);
        let ids: Vec<TaskId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(2)]);
    }

    #[test]
    fn ids_are_assigned_in_order_and_not_serialized() {
        let list: TaskList = serde_json::from_str(
            r#"[{"text":"a","status":"done","focus":"default","created":"t"},
                {"text":"a","status":"done","focus":"default","created":"t"}]"#,
        )
        .unwrap();
        let ids: Vec<TaskId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(2)]);

        let json = serde_json::to_string(&list).unwrap();
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn push_keeps_ids_unique_after_remove() {
        let mut list = TaskList::new();
        let a = list.push(Task::new("a", "default", ""));
        let b = list.push(Task::new("b", "default", ""));
        list.remove(b);
        let c = list.push(Task::new("c", "default", ""));
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn retain_reports_dropped_count() {
        let mut list = TaskList::from_records(vec![
            Task::new("a", "work", ""),
            Task::new("b", "home", ""),
            Task::new("c", "work", ""),
        ]);
        assert_eq!(list.retain(|t| t.focus != "work"), 2);
        assert_eq!(list.tasks()[0].text, "b");
    }
}
