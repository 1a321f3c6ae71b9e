use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::tui::app::{App, on_off};
use crate::tui::theme::{Theme, THEMES};

use super::{fg, key_hints};

const RULE: &str = "═══════════════════════════════════════════════════════";

/// `[1]  To-Do List` style menu entry
fn entry(theme: &Theme, key: &str, label: &str, exit: bool) -> Line<'static> {
    let key_color = if exit { theme.red } else { theme.haunted_green };
    Line::from(vec![
        Span::styled(format!("[{}]", key), fg(key_color)),
        Span::raw(format!("  {}", label)),
    ])
}

/// `1. name ★` style list row
fn numbered(theme: &Theme, position: usize, name: &str, current: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{}.", position), fg(theme.cyan_faint)),
        Span::raw(" "),
        Span::styled(name.to_string(), fg(theme.white)),
    ];
    if current {
        spans.push(Span::styled(" ★", fg(theme.yellow)));
    }
    Line::from(spans)
}

/// `1. Label: ON` toggle row
fn toggle(theme: &Theme, position: usize, label: &str, value: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}.", position), fg(theme.cyan_faint)),
        Span::raw(format!(" {}: ", label)),
        Span::styled(
            on_off(value),
            fg(if value { theme.haunted_green } else { theme.red }),
        ),
    ])
}

pub fn main_menu_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme;
    let rule = || {
        Line::from(Span::styled(
            RULE,
            fg(theme.cyan_faint).add_modifier(Modifier::BOLD),
        ))
    };
    vec![
        rule(),
        entry(theme, "1", "To-Do List", false),
        entry(theme, "2", "Edit Focuses", false),
        entry(theme, "3", "Settings", false),
        entry(theme, "0", "Exit", true),
        rule(),
    ]
}

pub fn focus_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme;
    let mut lines: Vec<Line> = app
        .config
        .focuses
        .iter()
        .enumerate()
        .map(|(i, name)| numbered(theme, i + 1, name, *name == app.config.current_focus))
        .collect();
    lines.push(Line::default());
    lines.push(key_hints(
        theme,
        &[("a", "add"), ("r", "remove"), ("s", "select"), ("b", "back")],
    ));
    lines
}

pub fn settings_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme;
    vec![
        entry(theme, "1", "Themes", false),
        entry(theme, "2", "Appearance", false),
        entry(theme, "3", "Preferences", false),
        entry(theme, "4", "Help", false),
        entry(theme, "b", "Back to Main Menu", true),
    ]
}

pub fn theme_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme;
    let mut lines: Vec<Line> = THEMES
        .iter()
        .enumerate()
        .map(|(i, t)| numbered(theme, i + 1, t.name, t.name == theme.name))
        .collect();
    lines.push(Line::default());
    lines.push(key_hints(theme, &[("s", "select"), ("b", "back")]));
    lines
}

pub fn appearance_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme;
    vec![
        toggle(theme, 1, "Alternate Banner", app.config.alternate_banner),
        toggle(theme, 2, "Hide Banner in Menus", app.config.hide_banner),
        Line::default(),
        key_hints(theme, &[("s", "select"), ("b", "back")]),
    ]
}

pub fn preference_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme;
    vec![
        toggle(theme, 1, "Reprint list after CLI commands", app.config.reprint_list),
        toggle(theme, 2, "Show success responses", app.config.show_responses),
        Line::default(),
        key_hints(theme, &[("s", "select"), ("b", "back")]),
    ]
}

pub fn help_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme;
    let header = |text: &'static str| {
        Line::from(Span::styled(
            text,
            fg(theme.white).add_modifier(Modifier::BOLD),
        ))
    };
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(k, fg(theme.cyan_faint)),
            Span::raw(desc),
        ])
    };
    let accent = |text: &'static str| Line::from(Span::styled(text, fg(theme.light_grey)));

    vec![
        header("Interactive Mode:"),
        key("[1]", " To-Do List"),
        key("[2]", " Edit Focuses"),
        key("[3]", " Settings"),
        key("[0]", " Exit"),
        Line::default(),
        header("To-Do List Commands:"),
        key("[a]", " Add new todo"),
        key("[c]", " Check/uncheck todo(s)"),
        key("[h]", " Hold/unhold todo(s)"),
        key("[r]", " Remove todo(s)"),
        key("[b]", " Back to main menu"),
        Line::default(),
        header("CLI Commands:"),
        key("ghosty list", " (or ls)"),
        key("ghosty add <text>", " (or a)"),
        key("ghosty check <numbers>", " (or c)"),
        key("ghosty hold <numbers>", " (or h)"),
        key("ghosty remove <numbers>", " (or r/rm)"),
        key("ghosty focus [use|add|rm] <name>", ""),
        Line::default(),
        header("Number Formats:"),
        accent("  Single: 1"),
        accent("  Multiple: 1 3 5"),
        accent("  Ranges: 1-5 or 3-5 7 9-11"),
        Line::default(),
        key_hints(theme, &[("b", "back")]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    fn render(lines: Vec<Line<'static>>) -> String {
        render_to_string(TERM_W, 40, |frame, area| {
            frame.render_widget(Paragraph::new(lines), area);
        })
    }

    fn app() -> App {
        App::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn main_menu() {
        let output = render(main_menu_lines(&app()));
        assert_eq!(
            output,
            format!(
                "{RULE}\n[1]  To-Do List\n[2]  Edit Focuses\n[3]  Settings\n[0]  Exit\n{RULE}"
            )
        );
    }

    #[test]
    fn focus_list_stars_current() {
        let mut app = app();
        app.config.focuses.push("work".into());
        app.config.current_focus = "work".into();
        assert_eq!(
            render(focus_lines(&app)),
            "1. default\n2. work ★\n\n[a] add • [r] remove • [s] select • [b] back"
        );
    }

    #[test]
    fn themes_star_active_theme() {
        let output = render(theme_lines(&app()));
        assert!(output.starts_with("1. Ghosty Classic ★\n2. Dracula\n3. Tokyo Dark"));
    }

    #[test]
    fn toggles_show_state() {
        let mut app = app();
        app.config.hide_banner = true;
        let output = render(appearance_lines(&app));
        assert!(output.starts_with("1. Alternate Banner: OFF\n2. Hide Banner in Menus: ON"));

        let output = render(preference_lines(&app));
        assert!(output.starts_with(
            "1. Reprint list after CLI commands: ON\n2. Show success responses: ON"
        ));
    }

    #[test]
    fn help_lists_number_formats() {
        let output = render(help_lines(&app()));
        assert!(output.contains("  [c] Check/uncheck todo(s)"));
        assert!(output.contains("  ghosty remove <numbers> (or r/rm)"));
        assert!(output.contains("  Ranges: 1-5 or 3-5 7 9-11"));
    }
}
