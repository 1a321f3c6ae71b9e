mod menu;
mod prompt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

use menu::handle_menu;
use prompt::handle_prompt;

/// Handle a key event on the current screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.should_quit = true;
        return;
    }

    // Status messages last until the next keystroke
    app.clear_messages();

    if app.prompt.is_some() {
        handle_prompt(app, key);
    } else {
        handle_menu(app, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::ops::batch::BatchAction;
    use crate::tui::app::{PromptKind, Screen};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        App::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('a'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn zero_exits_from_main_menu() {
        let mut app = app();
        press(&mut app, KeyCode::Char('0'));
        assert!(app.should_quit);
    }

    #[test]
    fn add_todo_through_prompt() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::TodoList);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.prompt.as_ref().map(|p| p.kind), Some(PromptKind::NewTodo));

        type_str(&mut app, "Buy milkk");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert!(app.prompt.is_none());
        assert_eq!(app.tasks.tasks()[0].text, "Buy milk");
        assert_eq!(app.messages[0].text, "✔ Added: \"Buy milk\"");

        // The next keystroke clears the message
        press(&mut app, KeyCode::Char('b'));
        assert!(app.messages.is_empty());
        assert_eq!(app.screen, Screen::Main);
    }

    #[test]
    fn check_prompt_takes_ranges() {
        let mut app = app();
        for text in ["a", "b", "c"] {
            app.add_todo(text);
        }
        app.clear_messages();
        app.navigate(Screen::TodoList);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(
            app.prompt.as_ref().map(|p| p.kind),
            Some(PromptKind::Numbers(BatchAction::ToggleDone))
        );
        type_str(&mut app, "1-2");
        press(&mut app, KeyCode::Enter);

        let done: Vec<bool> = app.tasks.iter().map(|t| t.is_done()).collect();
        assert_eq!(done, vec![true, true, false]);
    }

    #[test]
    fn escape_cancels_prompt_without_changes() {
        let mut app = app();
        app.navigate(Screen::TodoList);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "draft");
        press(&mut app, KeyCode::Esc);
        assert!(app.prompt.is_none());
        assert!(app.tasks.is_empty());
        assert_eq!(app.screen, Screen::TodoList);
    }

    #[test]
    fn unknown_menu_key_is_reported() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.messages[0].text, "✖ Invalid choice");
        assert_eq!(app.screen, Screen::Main);
    }

    #[test]
    fn settings_submenus_and_back() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::Appearance);
        press(&mut app, KeyCode::Char('1'));
        assert!(app.config.alternate_banner);
        assert_eq!(app.messages[0].text, "✔ Alternate Banner: ON");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Settings);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "3");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.config.theme, "Tokyo Dark");
    }

    #[test]
    fn focus_prompts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "work");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "2");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.config.current_focus, "work");
        assert_eq!(app.config.focuses, vec!["default", "work"]);
    }
}
