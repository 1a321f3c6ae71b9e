use chrono::NaiveDateTime;
use crossterm::style::Stylize;
use serde::Serialize;

use crate::model::config::Config;
use crate::model::task::{Task, TaskList, TaskStatus};
use crate::ops::batch::{BatchReport, ItemOutcome, Outcome};
use crate::ops::view::ViewStats;
use crate::tui::theme::{Rgb, Theme};
use crate::util::time::time_ago;

/// Indent of task lines and the stats footer
const INDENT: &str = "   ";

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub position: usize,
    pub text: String,
    pub status: TaskStatus,
    pub created: String,
}

#[derive(Serialize)]
pub struct ListJson {
    pub focus: String,
    pub tasks: Vec<TaskJson>,
    pub stats: ViewStats,
    pub percent_complete: usize,
}

#[derive(Serialize)]
pub struct BatchJson<'a> {
    pub focus: &'a str,
    #[serde(flatten)]
    pub report: &'a BatchReport,
}

#[derive(Serialize)]
pub struct AddJson {
    pub focus: String,
    pub position: usize,
    pub text: String,
    pub created: String,
}

#[derive(Serialize)]
pub struct FocusJson {
    pub position: usize,
    pub name: String,
    pub current: bool,
    pub tasks: usize,
}

#[derive(Serialize)]
pub struct ErrorJson {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn list_to_json(focus: &str, view: &[&Task]) -> ListJson {
    let stats = ViewStats::of(view);
    ListJson {
        focus: focus.to_string(),
        tasks: view
            .iter()
            .enumerate()
            .map(|(i, t)| TaskJson {
                position: i + 1,
                text: t.text.clone(),
                status: t.status,
                created: t.created.clone(),
            })
            .collect(),
        stats,
        percent_complete: stats.percent_complete(),
    }
}

pub fn focuses_to_json(config: &Config, tasks: &TaskList) -> Vec<FocusJson> {
    config
        .focuses
        .iter()
        .enumerate()
        .map(|(i, name)| FocusJson {
            position: i + 1,
            name: name.clone(),
            current: *name == config.current_focus,
            tasks: tasks.iter().filter(|t| t.focus == *name).count(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Applies theme colors to text, or leaves it plain (piped output)
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    theme: Option<&'a Theme>,
}

impl<'a> Painter<'a> {
    pub fn plain() -> Self {
        Painter { theme: None }
    }

    pub fn themed(theme: &'a Theme) -> Self {
        Painter { theme: Some(theme) }
    }

    pub fn paint(&self, text: &str, pick: fn(&Theme) -> Rgb) -> String {
        match self.theme {
            Some(theme) => text.with(pick(theme).to_term()).to_string(),
            None => text.to_string(),
        }
    }

    pub fn bold(&self, text: &str, pick: fn(&Theme) -> Rgb) -> String {
        match self.theme {
            Some(theme) => text.with(pick(theme).to_term()).bold().to_string(),
            None => text.to_string(),
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.haunted_green)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red)
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn status_color(status: TaskStatus) -> fn(&Theme) -> Rgb {
    match status {
        TaskStatus::Done => |t: &Theme| t.haunted_green,
        TaskStatus::OnHold => |t: &Theme| t.yellow,
        TaskStatus::Pending => |t: &Theme| t.white,
    }
}

/// Format one task line: `   3. ☐ Buy milk 5m`
pub fn format_task_line(position: usize, task: &Task, age: &str, p: Painter<'_>) -> String {
    let body = format!("{} {}", task.status.symbol(), task.text);
    let age = if age.is_empty() {
        String::new()
    } else {
        format!(" {}", p.paint(age, |t| t.dark_grey))
    };
    format!(
        "{}{} {}{}",
        INDENT,
        p.paint(&format!("{}.", position), |t| t.cyan_faint),
        p.paint(&body, status_color(task.status)),
        age
    )
}

/// Format the focus view: header, task lines, and the stats footer
pub fn format_list_view(
    focus: &str,
    view: &[&Task],
    now: NaiveDateTime,
    p: Painter<'_>,
) -> Vec<String> {
    let stats = ViewStats::of(view);
    let mut lines = vec![format!(
        "{} {}",
        p.paint(&format!("@{}", focus), |t| t.white),
        p.paint(&format!("[{}/{}]", stats.done, stats.total), |t| t.dark_grey)
    )];

    if view.is_empty() {
        lines.push(format!("{}{}", INDENT, p.paint("(no todos yet)", |t| t.light_grey)));
    } else {
        for (i, task) in view.iter().enumerate() {
            lines.push(format_task_line(i + 1, task, &time_ago(&task.created, now), p));
        }
    }

    lines.push(String::new());
    if stats.total > 0 {
        let dot = p.paint("•", |t| t.light_grey);
        lines.push(format!(
            "{}{}",
            INDENT,
            p.paint(
                &format!("{}% of all tasks complete.", stats.percent_complete()),
                |t| t.light_grey
            )
        ));
        lines.push(format!(
            "{}{} {} {} {} {}",
            INDENT,
            p.paint(&format!("{} done", stats.done), |t| t.haunted_green),
            dot,
            p.paint(&format!("{} on-hold", stats.on_hold), |t| t.yellow),
            dot,
            p.paint(&format!("{} pending", stats.pending), |t| t.white),
        ));
    }
    lines
}

/// Label of a per-item batch line
fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Checked => "✔ Checked:",
        Outcome::Unchecked => "✖ Unchecked:",
        Outcome::Held => "✔ On hold:",
        Outcome::Unheld => "✔ Unhold:",
        Outcome::Removed => "✖ Removed:",
        Outcome::Invalid => "Invalid todo number:",
    }
}

fn outcome_color(outcome: Outcome) -> fn(&Theme) -> Rgb {
    match outcome {
        Outcome::Checked => |t: &Theme| t.haunted_green,
        Outcome::Unchecked | Outcome::Held | Outcome::Unheld => |t: &Theme| t.yellow,
        Outcome::Removed | Outcome::Invalid => |t: &Theme| t.red,
    }
}

/// One line per processed position, e.g. `✔ Checked: Buy milk`
pub fn format_item_line(item: &ItemOutcome, p: Painter<'_>) -> String {
    let label = outcome_label(item.outcome);
    let color = outcome_color(item.outcome);
    match &item.text {
        Some(text) => format!("{} {}", p.paint(label, color), text),
        None => p.paint(&format!("{} {}", label, item.position), color),
    }
}

/// Per-item lines followed by the summary line, if anything applied
pub fn format_batch_lines(report: &BatchReport, p: Painter<'_>) -> Vec<String> {
    let mut lines: Vec<String> = report
        .items
        .iter()
        .map(|item| format_item_line(item, p))
        .collect();
    if let Some(summary) = report.summary() {
        lines.push(p.success(&format!("✔ {}", summary)));
    }
    lines
}

/// The focus list with a star on the current one
pub fn format_focus_list(config: &Config, tasks: &TaskList, p: Painter<'_>) -> Vec<String> {
    focuses_to_json(config, tasks)
        .into_iter()
        .map(|f| {
            let star = if f.current {
                format!(" {}", p.paint("★", |t| t.yellow))
            } else {
                String::new()
            };
            format!(
                "{} {}{} {}",
                p.paint(&format!("{}.", f.position), |t| t.cyan_faint),
                p.paint(&f.name, |t| t.white),
                star,
                p.paint(&format!("({})", f.tasks), |t| t.dark_grey)
            )
        })
        .collect()
}
