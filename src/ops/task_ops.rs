use crate::model::task::{Task, TaskId, TaskList, TaskStatus};

/// Error type for task operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Todo text cannot be empty")]
    EmptyText,
}

/// Result of a status toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Checked,
    Unchecked,
    Held,
    Unheld,
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Done → pending, anything else → done
pub fn toggle_done(task: &mut Task) -> Transition {
    if task.status == TaskStatus::Done {
        task.status = TaskStatus::Pending;
        Transition::Unchecked
    } else {
        task.status = TaskStatus::Done;
        Transition::Checked
    }
}

/// On-hold → pending, anything else → on-hold
pub fn toggle_hold(task: &mut Task) -> Transition {
    if task.status == TaskStatus::OnHold {
        task.status = TaskStatus::Pending;
        Transition::Unheld
    } else {
        task.status = TaskStatus::OnHold;
        Transition::Held
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Append a new pending task to `focus`. Text is trimmed and must not be empty.
pub fn add_task(
    tasks: &mut TaskList,
    text: &str,
    focus: &str,
    created: String,
) -> Result<TaskId, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }
    Ok(tasks.push(Task::new(text, focus, created)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_done_cycles() {
        let mut task = Task::new("x", "default", "");
        assert_eq!(toggle_done(&mut task), Transition::Checked);
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(toggle_done(&mut task), Transition::Unchecked);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn toggle_done_from_hold_checks() {
        let mut task = Task::new("x", "default", "");
        task.status = TaskStatus::OnHold;
        assert_eq!(toggle_done(&mut task), Transition::Checked);
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn toggle_hold_cycles() {
        let mut task = Task::new("x", "default", "");
        task.status = TaskStatus::Done;
        assert_eq!(toggle_hold(&mut task), Transition::Held);
        assert_eq!(task.status, TaskStatus::OnHold);
        assert_eq!(toggle_hold(&mut task), Transition::Unheld);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn add_task_appends_trimmed_pending() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "  Buy milk ", "home", "2025-01-01T10:00:00".into()).unwrap();
        let task = list.get(id).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.focus, "home");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created, "2025-01-01T10:00:00");
    }

    #[test]
    fn add_task_rejects_blank_text() {
        let mut list = TaskList::new();
        assert_eq!(
            add_task(&mut list, "   ", "default", String::new()),
            Err(TaskError::EmptyText)
        );
        assert!(list.is_empty());
    }
}
