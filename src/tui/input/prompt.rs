use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

/// Line editing while a prompt is open
pub(super) fn handle_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.prompt = None;
            return;
        }
        KeyCode::Enter => {
            app.submit_prompt();
            return;
        }
        _ => {}
    }

    let Some(prompt) = app.prompt.as_mut() else {
        return;
    };
    match (key.modifiers, key.code) {
        (_, KeyCode::Backspace) => {
            unicode::pop_grapheme(&mut prompt.input);
        }
        // Kill the whole line
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => prompt.input.clear(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => prompt.input.push(c),
        _ => {}
    }
}
