use serde::Serialize;

use crate::model::task::{Task, TaskId, TaskStatus};

/// The ordered subset of `tasks` that belongs to `focus`.
///
/// Stable filter: document order is preserved. Re-derive after every change
/// to the collection.
pub fn resolve_view<'a>(tasks: &'a [Task], focus: &str) -> Vec<&'a Task> {
    tasks.iter().filter(|t| t.focus == focus).collect()
}

/// Ids of the view, in display order
pub fn view_ids(tasks: &[Task], focus: &str) -> Vec<TaskId> {
    tasks
        .iter()
        .filter(|t| t.focus == focus)
        .map(|t| t.id)
        .collect()
}

/// Status counts for a view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewStats {
    pub total: usize,
    pub done: usize,
    pub on_hold: usize,
    pub pending: usize,
}

impl ViewStats {
    pub fn of(view: &[&Task]) -> Self {
        let mut stats = ViewStats {
            total: view.len(),
            ..Default::default()
        };
        for task in view {
            match task.status {
                TaskStatus::Done => stats.done += 1,
                TaskStatus::OnHold => stats.on_hold += 1,
                TaskStatus::Pending => stats.pending += 1,
            }
        }
        stats
    }

    /// Whole-number completion percentage, rounded down
    pub fn percent_complete(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.done * 100 / self.total
        }
    }
}
