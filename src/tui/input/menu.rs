use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::batch::BatchAction;
use crate::tui::app::{App, PromptKind, Screen};

/// Menu keys for the screen on display
pub(super) fn handle_menu(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('b')) && app.screen != Screen::Main {
        app.back();
        return;
    }
    let KeyCode::Char(c) = key.code else {
        return;
    };

    let handled = match app.screen {
        Screen::Main => main_menu(app, c),
        Screen::TodoList => todo_menu(app, c),
        Screen::Focuses => focus_menu(app, c),
        Screen::Settings => settings_menu(app, c),
        Screen::Themes => option_menu(app, c, PromptKind::SelectTheme),
        Screen::Appearance => option_menu(app, c, PromptKind::AppearanceOption),
        Screen::Preferences => option_menu(app, c, PromptKind::PreferenceOption),
        Screen::Help => false,
    };
    if !handled {
        app.error("✖ Invalid choice");
    }
}

fn main_menu(app: &mut App, c: char) -> bool {
    match c {
        '1' => app.navigate(Screen::TodoList),
        '2' => app.navigate(Screen::Focuses),
        '3' => app.navigate(Screen::Settings),
        '0' | 'q' => app.should_quit = true,
        _ => return false,
    }
    true
}

fn todo_menu(app: &mut App, c: char) -> bool {
    let kind = match c {
        'a' => PromptKind::NewTodo,
        'c' => PromptKind::Numbers(BatchAction::ToggleDone),
        'h' => PromptKind::Numbers(BatchAction::ToggleHold),
        'r' => PromptKind::Numbers(BatchAction::Remove),
        _ => return false,
    };
    app.open_prompt(kind);
    true
}

fn focus_menu(app: &mut App, c: char) -> bool {
    let kind = match c {
        'a' => PromptKind::FocusName,
        'r' => PromptKind::RemoveFocus,
        's' => PromptKind::SelectFocus,
        _ => return false,
    };
    app.open_prompt(kind);
    true
}

fn settings_menu(app: &mut App, c: char) -> bool {
    let screen = match c {
        '1' => Screen::Themes,
        '2' => Screen::Appearance,
        '3' => Screen::Preferences,
        '4' => Screen::Help,
        _ => return false,
    };
    app.navigate(screen);
    true
}

/// `s` opens the number prompt; a digit picks the option directly
fn option_menu(app: &mut App, c: char, kind: PromptKind) -> bool {
    if c == 's' {
        app.open_prompt(kind);
        return true;
    }
    if !c.is_ascii_digit() {
        return false;
    }
    let input = c.to_string();
    match kind {
        PromptKind::SelectTheme => app.select_theme_at(&input),
        PromptKind::AppearanceOption => app.toggle_appearance(&input),
        PromptKind::PreferenceOption => app.toggle_preference(&input),
        _ => return false,
    }
    true
}
