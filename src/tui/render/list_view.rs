use ratatui::text::{Line, Span};

use crate::model::task::{Task, TaskStatus};
use crate::ops::view::ViewStats;
use crate::tui::app::App;
use crate::tui::theme::{Rgb, Theme};
use crate::util::time::time_ago_now;

use super::{fg, key_hints};

const INDENT: &str = "   ";

fn status_color(theme: &Theme, status: TaskStatus) -> Rgb {
    match status {
        TaskStatus::Done => theme.haunted_green,
        TaskStatus::OnHold => theme.yellow,
        TaskStatus::Pending => theme.white,
    }
}

fn task_line(theme: &Theme, position: usize, task: &Task) -> Line<'static> {
    let mut spans = vec![
        Span::raw(INDENT),
        Span::styled(format!("{}.", position), fg(theme.cyan_faint)),
        Span::raw(" "),
        Span::styled(
            format!("{} {}", task.status.symbol(), task.text),
            fg(status_color(theme, task.status)),
        ),
    ];
    let age = time_ago_now(&task.created);
    if !age.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(age, fg(theme.dark_grey)));
    }
    Line::from(spans)
}

/// The current focus view with its stats footer and the list commands
pub fn todo_list_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme;
    let view = app.view();
    let stats = ViewStats::of(&view);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("@{}", app.config.current_focus), fg(theme.white)),
        Span::raw(" "),
        Span::styled(format!("[{}/{}]", stats.done, stats.total), fg(theme.dark_grey)),
    ])];

    if view.is_empty() {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("(no todos yet)", fg(theme.light_grey)),
        ]));
    }
    lines.extend(
        view.iter()
            .enumerate()
            .map(|(i, task)| task_line(theme, i + 1, task)),
    );

    lines.push(Line::default());
    if stats.total > 0 {
        let dot = || Span::styled(" • ", fg(theme.light_grey));
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("{}% of all tasks complete.", stats.percent_complete()),
                fg(theme.light_grey),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("{} done", stats.done), fg(theme.haunted_green)),
            dot(),
            Span::styled(format!("{} on-hold", stats.on_hold), fg(theme.yellow)),
            dot(),
            Span::styled(format!("{} pending", stats.pending), fg(theme.white)),
        ]));
    }

    lines.push(Line::default());
    lines.push(key_hints(
        theme,
        &[
            ("a", "add"),
            ("c", "check/uncheck"),
            ("h", "hold"),
            ("r", "remove"),
            ("b", "back"),
        ],
    ));
    lines
}
