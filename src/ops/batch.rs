use serde::Serialize;

use crate::io::store::{Store, StoreError};
use crate::model::task::TaskList;
use crate::ops::task_ops::{Transition, toggle_done, toggle_hold};
use crate::ops::view::view_ids;
use crate::parse::selection::Selection;

/// Mutation applied to every position of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchAction {
    ToggleDone,
    ToggleHold,
    Remove,
}

impl BatchAction {
    pub fn as_str(self) -> &'static str {
        match self {
            BatchAction::ToggleDone => "toggle_done",
            BatchAction::ToggleHold => "toggle_hold",
            BatchAction::Remove => "remove",
        }
    }
}

/// What happened to one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Checked,
    Unchecked,
    Held,
    Unheld,
    Removed,
    /// Position outside `1..=len(view)`
    Invalid,
}

impl From<Transition> for Outcome {
    fn from(t: Transition) -> Self {
        match t {
            Transition::Checked => Outcome::Checked,
            Transition::Unchecked => Outcome::Unchecked,
            Transition::Held => Outcome::Held,
            Transition::Unheld => Outcome::Unheld,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    pub position: usize,
    pub outcome: Outcome,
    /// Task text, absent for invalid positions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchCounts {
    pub checked: usize,
    pub unchecked: usize,
    pub held: usize,
    pub unheld: usize,
    pub removed: usize,
    pub invalid: usize,
}

impl BatchCounts {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Checked => self.checked += 1,
            Outcome::Unchecked => self.unchecked += 1,
            Outcome::Held => self.held += 1,
            Outcome::Unheld => self.unheld += 1,
            Outcome::Removed => self.removed += 1,
            Outcome::Invalid => self.invalid += 1,
        }
    }
}

/// Per-item outcomes in processing (descending) order plus aggregate counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub action: BatchAction,
    pub items: Vec<ItemOutcome>,
    pub counts: BatchCounts,
}

impl BatchReport {
    /// Number of positions that changed something
    pub fn applied(&self) -> usize {
        self.items.len() - self.counts.invalid
    }

    /// One-line summary, e.g. "2 checked, 1 unchecked". None when nothing applied.
    pub fn summary(&self) -> Option<String> {
        if self.applied() == 0 {
            return None;
        }
        let c = &self.counts;
        let parts: Vec<String> = match self.action {
            BatchAction::ToggleDone => [(c.checked, "checked"), (c.unchecked, "unchecked")]
                .into_iter()
                .filter(|(n, _)| *n > 0)
                .map(|(n, label)| format!("{} {}", n, label))
                .collect(),
            BatchAction::ToggleHold => [(c.held, "on hold"), (c.unheld, "unheld")]
                .into_iter()
                .filter(|(n, _)| *n > 0)
                .map(|(n, label)| format!("{} {}", n, label))
                .collect(),
            BatchAction::Remove => vec![format!("Removed {} todo(s)", c.removed)],
        };
        Some(parts.join(", "))
    }
}

/// Apply `action` to every selected position of `focus`'s view.
///
/// Positions are processed highest first. Each one is resolved to its task
/// by id through the current view; after a removal the view is re-derived
/// from the shrunken collection before the next position is resolved.
pub fn apply_batch(
    tasks: &mut TaskList,
    focus: &str,
    selection: &Selection,
    action: BatchAction,
) -> BatchReport {
    let mut view = view_ids(tasks.tasks(), focus);
    let mut items = Vec::with_capacity(selection.len());
    let mut counts = BatchCounts::default();

    for position in selection.descending() {
        let Some(&id) = position.checked_sub(1).and_then(|i| view.get(i)) else {
            counts.record(Outcome::Invalid);
            items.push(ItemOutcome {
                position,
                outcome: Outcome::Invalid,
                text: None,
            });
            continue;
        };

        let (outcome, text) = match action {
            BatchAction::Remove => match tasks.remove(id) {
                Some(task) => {
                    view = view_ids(tasks.tasks(), focus);
                    (Outcome::Removed, task.text)
                }
                None => (Outcome::Invalid, String::new()),
            },
            BatchAction::ToggleDone | BatchAction::ToggleHold => match tasks.get_mut(id) {
                Some(task) => {
                    let transition = if action == BatchAction::ToggleDone {
                        toggle_done(task)
                    } else {
                        toggle_hold(task)
                    };
                    (transition.into(), task.text.clone())
                }
                None => (Outcome::Invalid, String::new()),
            },
        };

        counts.record(outcome);
        items.push(ItemOutcome {
            position,
            outcome,
            text: (outcome != Outcome::Invalid).then_some(text),
        });
    }

    BatchReport {
        action,
        items,
        counts,
    }
}

/// Load the collection, apply the batch, and save it in one replace.
///
/// Nothing is written when no position applied.
pub fn run_batch<S: Store + ?Sized>(
    store: &S,
    focus: &str,
    selection: &Selection,
    action: BatchAction,
) -> Result<BatchReport, StoreError> {
    let mut tasks = store.load_tasks();
    let report = apply_batch(&mut tasks, focus, selection, action);
    if report.applied() > 0 {
        store.save_tasks(&tasks)?;
    }
    let c = &report.counts;
    log::info!(
        "event=batch_applied action={} focus={} checked={} unchecked={} held={} unheld={} removed={} invalid={}",
        action.as_str(),
        focus,
        c.checked,
        c.unchecked,
        c.held,
        c.unheld,
        c.removed,
        c.invalid
    );
    Ok(report)
}
