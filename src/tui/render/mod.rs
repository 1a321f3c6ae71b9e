pub mod banner;
pub mod list_view;
pub mod menus;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::app::{App, Screen};
use super::theme::{Rgb, Theme};

/// Foreground-only style from a theme color
pub(super) fn fg(color: Rgb) -> Style {
    Style::default().fg(color.to_tui())
}

/// `[a] add • [b] back` command hint line
pub(super) fn key_hints(theme: &Theme, keys: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", fg(theme.light_grey)));
        }
        spans.push(Span::styled(format!("[{}]", key), fg(theme.cyan_faint)));
        spans.push(Span::raw(format!(" {}", desc)));
    }
    Line::from(spans)
}

/// Screen title and body
fn screen_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    if app.screen != Screen::Main {
        lines.push(Line::from(Span::styled(
            app.screen.title(),
            fg(app.theme.ghost_purple).add_modifier(Modifier::BOLD),
        )));
    }
    lines.extend(match app.screen {
        Screen::Main => menus::main_menu_lines(app),
        Screen::TodoList => list_view::todo_list_lines(app),
        Screen::Focuses => menus::focus_lines(app),
        Screen::Settings => menus::settings_lines(app),
        Screen::Themes => menus::theme_lines(app),
        Screen::Appearance => menus::appearance_lines(app),
        Screen::Preferences => menus::preference_lines(app),
        Screen::Help => menus::help_lines(app),
    });
    lines
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let banner = banner::banner_lines(app);

    // Layout: banner | screen | status messages | input row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner.len() as u16),
            Constraint::Min(1),
            Constraint::Length(app.messages.len() as u16),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(banner), chunks[0]);
    frame.render_widget(Paragraph::new(screen_lines(app)), chunks[1]);
    status_row::render_messages(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
}
