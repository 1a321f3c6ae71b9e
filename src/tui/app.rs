use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::output::{Painter, format_item_line};
use crate::io::store::Store;
use crate::model::config::Config;
use crate::model::task::{Task, TaskList};
use crate::ops::batch::{BatchAction, Outcome, run_batch};
use crate::ops::focus_ops::{self, FocusError};
use crate::ops::task_ops;
use crate::ops::view::resolve_view;
use crate::parse::selection::parse_selection;
use crate::util::time::now_timestamp;

use super::input;
use super::render;
use super::theme::Theme;

pub const TERMINAL_TITLE: &str = "Ghosty Todo";
pub const GOODBYE: &str = "Thanks for using Ghosty - By AK! Stay spooky! 👻";

/// Which menu is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    TodoList,
    Focuses,
    Settings,
    Themes,
    Appearance,
    Preferences,
    Help,
}

impl Screen {
    /// Screen reached with `b`/Esc, None on the main menu
    pub fn parent(self) -> Option<Screen> {
        match self {
            Screen::Main => None,
            Screen::TodoList | Screen::Focuses | Screen::Settings => Some(Screen::Main),
            Screen::Themes | Screen::Appearance | Screen::Preferences | Screen::Help => {
                Some(Screen::Settings)
            }
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Main => "",
            Screen::TodoList => "[ TO-DO LIST ]",
            Screen::Focuses => "[ FOCUSES ]",
            Screen::Settings => "[ SETTINGS ]",
            Screen::Themes => "[ THEMES ]",
            Screen::Appearance => "[ APPEARANCE ]",
            Screen::Preferences => "[ PREFERENCES ]",
            Screen::Help => "[ HELP ]",
        }
    }
}

/// What the input line is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    NewTodo,
    Numbers(BatchAction),
    FocusName,
    RemoveFocus,
    SelectFocus,
    SelectTheme,
    AppearanceOption,
    PreferenceOption,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::NewTodo => "New todo:",
            PromptKind::Numbers(_) => "Todo number(s):",
            PromptKind::FocusName => "Focus name:",
            PromptKind::RemoveFocus => "Focus number:",
            PromptKind::SelectFocus => "Select focus number:",
            PromptKind::SelectTheme => "Select theme number:",
            PromptKind::AppearanceOption | PromptKind::PreferenceOption => "Select option number:",
        }
    }
}

/// The input line while a prompt is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// Color class of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

/// A transient status line, cleared by the next keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tone: Tone,
    pub text: String,
}

/// Main application state
pub struct App {
    store: Box<dyn Store>,
    pub config: Config,
    pub tasks: TaskList,
    pub theme: &'static Theme,
    pub screen: Screen,
    pub prompt: Option<Prompt>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Box<dyn Store>) -> Self {
        let config = store.load_config();
        let tasks = store.load_tasks();
        App {
            store,
            theme: Theme::by_name(&config.theme),
            config,
            tasks,
            screen: Screen::Main,
            prompt: None,
            messages: Vec::new(),
            should_quit: false,
        }
    }

    /// Re-read both documents so every action starts from what is on disk
    pub fn reload(&mut self) {
        self.config = self.store.load_config();
        self.theme = Theme::by_name(&self.config.theme);
        self.tasks = self.store.load_tasks();
    }

    /// The current focus view
    pub fn view(&self) -> Vec<&Task> {
        resolve_view(self.tasks.tasks(), &self.config.current_focus)
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.prompt = None;
        self.reload();
    }

    pub fn back(&mut self) {
        if let Some(parent) = self.screen.parent() {
            self.navigate(parent);
        }
    }

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt {
            kind,
            input: String::new(),
        });
    }

    // -----------------------------------------------------------------------
    // Messages
    // -----------------------------------------------------------------------

    /// Success message, shown only when responses are enabled
    pub fn success(&mut self, text: impl Into<String>) {
        if self.config.show_responses {
            self.push_message(Tone::Success, text);
        }
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push_message(Tone::Error, text);
    }

    fn push_message(&mut self, tone: Tone, text: impl Into<String>) {
        self.messages.push(Message {
            tone,
            text: text.into(),
        });
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    fn save_tasks(&mut self) -> bool {
        match self.store.save_tasks(&self.tasks) {
            Ok(()) => true,
            Err(e) => {
                self.error(format!("✖ {}", e));
                false
            }
        }
    }

    fn save_config(&mut self) -> bool {
        match self.store.save_config(&self.config) {
            Ok(()) => {
                self.theme = Theme::by_name(&self.config.theme);
                true
            }
            Err(e) => {
                self.error(format!("✖ {}", e));
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Run the open prompt's action with what was typed
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let input = prompt.input.trim().to_string();
        match prompt.kind {
            PromptKind::NewTodo => self.add_todo(&input),
            PromptKind::Numbers(action) => self.apply_numbers(&input, action),
            PromptKind::FocusName => self.add_focus(&input),
            PromptKind::RemoveFocus => self.remove_focus_at(&input),
            PromptKind::SelectFocus => self.select_focus_at(&input),
            PromptKind::SelectTheme => self.select_theme_at(&input),
            PromptKind::AppearanceOption => self.toggle_appearance(&input),
            PromptKind::PreferenceOption => self.toggle_preference(&input),
        }
    }

    pub fn add_todo(&mut self, text: &str) {
        self.reload();
        let focus = self.config.current_focus.clone();
        match task_ops::add_task(&mut self.tasks, text, &focus, now_timestamp()) {
            Ok(_) => {
                if self.save_tasks() {
                    log::info!("event=task_added focus={}", focus);
                    self.success(format!("✔ Added: \"{}\"", text.trim()));
                }
            }
            Err(e) => self.error(format!("✖ {}", e)),
        }
    }

    /// Parse a number/range expression and apply a batch to the current view
    pub fn apply_numbers(&mut self, input: &str, action: BatchAction) {
        let selection = parse_selection(input);
        if selection.is_empty() {
            self.error("✖ No valid numbers provided");
            return;
        }
        self.reload();
        let focus = self.config.current_focus.clone();
        let report = match run_batch(self.store.as_ref(), &focus, &selection, action) {
            Ok(report) => report,
            Err(e) => {
                self.error(format!("✖ {}", e));
                return;
            }
        };
        self.tasks = self.store.load_tasks();

        for item in &report.items {
            let tone = match item.outcome {
                Outcome::Checked => Tone::Success,
                Outcome::Unchecked | Outcome::Held | Outcome::Unheld => Tone::Warning,
                Outcome::Removed | Outcome::Invalid => Tone::Error,
            };
            let text = format_item_line(item, Painter::plain());
            let text = if item.outcome == Outcome::Invalid {
                format!("✖ {}", text)
            } else {
                text
            };
            self.push_message(tone, text);
        }
        if let Some(summary) = report.summary() {
            self.success(format!("✔ {}", summary));
        }
    }

    pub fn add_focus(&mut self, name: &str) {
        self.reload();
        match focus_ops::add_focus(&mut self.config, name) {
            Ok(name) => {
                if self.save_config() {
                    log::info!("event=focus_added");
                    self.success(format!("✔ Added focus: {}", name));
                }
            }
            Err(e) => self.error(format!("✖ {}", e)),
        }
    }

    /// Look up the focus at a typed menu number
    fn focus_from_input(&mut self, input: &str) -> Option<String> {
        let Ok(position) = input.parse::<usize>() else {
            self.error("✖ Invalid input");
            return None;
        };
        match focus_ops::focus_at(&self.config, position).map(str::to_string) {
            Ok(name) => Some(name),
            Err(e) => {
                self.error(format!("✖ {}", e));
                None
            }
        }
    }

    pub fn remove_focus_at(&mut self, input: &str) {
        self.reload();
        let Some(name) = self.focus_from_input(input) else {
            return;
        };
        match focus_ops::remove_focus(&mut self.config, &mut self.tasks, &name) {
            Ok(deleted) => {
                if self.save_tasks() && self.save_config() {
                    log::info!("event=focus_removed tasks_deleted={}", deleted);
                    self.success(format!("✔ Removed focus: {}", name));
                }
            }
            Err(FocusError::ProtectedDefault) => self.error("✖ Cannot remove default focus"),
            Err(e) => self.error(format!("✖ {}", e)),
        }
    }

    pub fn select_focus_at(&mut self, input: &str) {
        self.reload();
        let Some(name) = self.focus_from_input(input) else {
            return;
        };
        match focus_ops::select_focus(&mut self.config, &name) {
            Ok(()) => {
                if self.save_config() {
                    log::info!("event=focus_selected");
                    self.success(format!("✔ Selected focus: @{}", name));
                }
            }
            Err(e) => self.error(format!("✖ {}", e)),
        }
    }

    pub fn select_theme_at(&mut self, input: &str) {
        let Ok(position) = input.parse::<usize>() else {
            self.error("✖ Invalid input");
            return;
        };
        let Some(name) = Theme::name_at(position) else {
            self.error("✖ Invalid theme number");
            return;
        };
        self.reload();
        self.config.theme = name.to_string();
        if self.save_config() {
            self.success(format!("✔ Theme set to: {}", name));
        }
    }

    pub fn toggle_appearance(&mut self, input: &str) {
        let Ok(option) = input.parse::<usize>() else {
            self.error("✖ Invalid input");
            return;
        };
        self.reload();
        let (label, value) = match option {
            1 => {
                self.config.alternate_banner = !self.config.alternate_banner;
                ("Alternate Banner", self.config.alternate_banner)
            }
            2 => {
                self.config.hide_banner = !self.config.hide_banner;
                ("Hide Banner", self.config.hide_banner)
            }
            _ => {
                self.error("✖ Invalid option");
                return;
            }
        };
        if self.save_config() {
            self.success(format!("✔ {}: {}", label, on_off(value)));
        }
    }

    pub fn toggle_preference(&mut self, input: &str) {
        let Ok(option) = input.parse::<usize>() else {
            self.error("✖ Invalid input");
            return;
        };
        self.reload();
        match option {
            1 => {
                self.config.reprint_list = !self.config.reprint_list;
                if self.save_config() {
                    let value = self.config.reprint_list;
                    self.success(format!("✔ Reprint list: {}", on_off(value)));
                }
            }
            2 => {
                self.config.show_responses = !self.config.show_responses;
                if self.save_config() {
                    // Always reported, even when responses were just turned off
                    let value = self.config.show_responses;
                    self.push_message(Tone::Success, format!("✔ Show responses: {}", on_off(value)));
                }
            }
            _ => self.error("✖ Invalid option"),
        }
    }
}

pub fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

// ---------------------------------------------------------------------------
// Terminal lifecycle
// ---------------------------------------------------------------------------

/// Run the interactive session until the user exits
pub fn run(store: Box<dyn Store>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(store);
    log::info!("event=session_start focus={}", app.config.current_focus);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(TERMINAL_TITLE))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("\n{}\n", GOODBYE.with(app.theme.ghost_purple.to_term()));
    log::info!("event=session_end");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
