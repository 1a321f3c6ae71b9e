use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Screen, Tone};
use crate::util::unicode::{display_width, tail_to_width, truncate_to_width};

use super::fg;

/// Transient status messages, one per line
pub fn render_messages(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let width = area.width as usize;
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|m| {
            let color = match m.tone {
                Tone::Success => theme.haunted_green,
                Tone::Warning => theme.yellow,
                Tone::Error => theme.red,
            };
            Line::from(Span::styled(truncate_to_width(&m.text, width), fg(color)))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn menu_prompt(screen: Screen) -> &'static str {
    match screen {
        Screen::Main => "ghosty>",
        Screen::Settings => "settings>",
        _ => "choose:",
    }
}

/// Render the input row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let width = area.width as usize;

    let (mut spans, hint) = match &app.prompt {
        Some(prompt) => {
            let label = format!("{} ", prompt.kind.label());
            // Keep the cursor visible when the input outgrows the row
            let room = width.saturating_sub(display_width(&label) + 1);
            let input = tail_to_width(&prompt.input, room).to_string();
            (
                vec![
                    Span::styled(label, fg(theme.cyan_faint)),
                    Span::styled(input, fg(theme.white)),
                    Span::styled("\u{258C}", fg(theme.ghost_purple)), // ▌ cursor
                ],
                "Enter submit  Esc cancel",
            )
        }
        None => (
            vec![Span::styled(
                menu_prompt(app.screen),
                fg(theme.cyan_faint).add_modifier(Modifier::BOLD),
            )],
            "Ctrl-C quit",
        ),
    };

    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(hint, fg(theme.dark_grey)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::tui::app::{Prompt, PromptKind};
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn app_with_prompt(input: &str) -> App {
        let mut app = App::new(Box::new(MemoryStore::new()));
        app.screen = Screen::TodoList;
        app.prompt = Some(Prompt {
            kind: PromptKind::NewTodo,
            input: input.into(),
        });
        app
    }

    #[test]
    fn prompt_with_cursor_and_hint() {
        let app = app_with_prompt("Buy milk");
        let output = render_to_string(50, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(
            output,
            format!("New todo: Buy milk▌{}Enter submit  Esc cancel", " ".repeat(7))
        );
    }

    #[test]
    fn long_input_keeps_its_tail() {
        let app = app_with_prompt("abcdefghijklmnopqrstuvwxyz");
        let output = render_to_string(20, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, "New todo: rstuvwxyz▌");
    }

    #[test]
    fn long_messages_are_cut() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        app.messages.push(crate::tui::app::Message {
            tone: crate::tui::app::Tone::Success,
            text: "✔ Added: \"a very long todo\"".into(),
        });
        let output = render_to_string(16, 1, |frame, area| {
            render_messages(frame, &app, area);
        });
        assert_eq!(output, "✔ Added: \"a ver…");
    }

    #[test]
    fn menu_prompts() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        app.screen = Screen::Settings;
        let output = render_to_string(30, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, format!("settings>{}Ctrl-C quit", " ".repeat(10)));
    }
}
