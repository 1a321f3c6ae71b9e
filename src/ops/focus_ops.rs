use crate::model::config::Config;
use crate::model::task::{DEFAULT_FOCUS, TaskList};

/// Error type for focus operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FocusError {
    #[error("Focus name cannot be empty")]
    EmptyName,
    #[error("Focus '{0}' already exists")]
    AlreadyExists(String),
    #[error("Cannot remove default focus")]
    ProtectedDefault,
    #[error("Focus '{0}' not found")]
    NotFound(String),
    #[error("Invalid focus number")]
    InvalidNumber,
}

/// Add a focus to the end of the list. Returns the trimmed name.
pub fn add_focus(config: &mut Config, name: &str) -> Result<String, FocusError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FocusError::EmptyName);
    }
    if config.has_focus(name) {
        return Err(FocusError::AlreadyExists(name.to_string()));
    }
    config.focuses.push(name.to_string());
    Ok(name.to_string())
}

/// Remove a focus and every task in it. Returns how many tasks were deleted.
///
/// If the removed focus was current, the current focus falls back to `default`.
pub fn remove_focus(
    config: &mut Config,
    tasks: &mut TaskList,
    name: &str,
) -> Result<usize, FocusError> {
    if name == DEFAULT_FOCUS {
        return Err(FocusError::ProtectedDefault);
    }
    if !config.has_focus(name) {
        return Err(FocusError::NotFound(name.to_string()));
    }
    config.focuses.retain(|f| f != name);
    if config.current_focus == name {
        config.current_focus = DEFAULT_FOCUS.to_string();
    }
    Ok(tasks.retain(|t| t.focus != name))
}

/// Make `name` the current focus
pub fn select_focus(config: &mut Config, name: &str) -> Result<(), FocusError> {
    if !config.has_focus(name) {
        return Err(FocusError::NotFound(name.to_string()));
    }
    config.current_focus = name.to_string();
    Ok(())
}

/// The focus at a 1-based menu position
pub fn focus_at(config: &Config, position: usize) -> Result<&str, FocusError> {
    position
        .checked_sub(1)
        .and_then(|i| config.focuses.get(i))
        .map(String::as_str)
        .ok_or(FocusError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use pretty_assertions::assert_eq;

    fn config_with(focuses: &[&str], current: &str) -> Config {
        Config {
            focuses: focuses.iter().map(|f| f.to_string()).collect(),
            current_focus: current.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn add_focus_trims_and_appends() {
        let mut config = Config::default();
        assert_eq!(add_focus(&mut config, "  work "), Ok("work".to_string()));
        assert_eq!(config.focuses, vec!["default", "work"]);
    }

    #[test]
    fn add_focus_rejects_empty_and_duplicate() {
        let mut config = config_with(&["default", "work"], "default");
        assert_eq!(add_focus(&mut config, "   "), Err(FocusError::EmptyName));
        assert_eq!(
            add_focus(&mut config, "work"),
            Err(FocusError::AlreadyExists("work".into()))
        );
        assert_eq!(
            FocusError::AlreadyExists("work".into()).to_string(),
            "Focus 'work' already exists"
        );
        assert_eq!(config.focuses.len(), 2);
    }

    #[test]
    fn removing_active_focus_cascades() {
        let mut config = config_with(&["default", "work", "home"], "work");
        let mut tasks = TaskList::from_records(vec![
            Task::new("w1", "work", ""),
            Task::new("h1", "home", ""),
            Task::new("d1", "default", ""),
            Task::new("w2", "work", ""),
        ]);

        assert_eq!(remove_focus(&mut config, &mut tasks, "work"), Ok(2));
        assert_eq!(config.current_focus, "default");
        assert_eq!(config.focuses, vec!["default", "home"]);
        let left: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(left, vec!["h1", "d1"]);
    }

    #[test]
    fn removing_inactive_focus_keeps_current() {
        let mut config = config_with(&["default", "work", "home"], "home");
        let mut tasks = TaskList::new();
        assert_eq!(remove_focus(&mut config, &mut tasks, "work"), Ok(0));
        assert_eq!(config.current_focus, "home");
    }

    #[test]
    fn default_focus_is_protected() {
        let mut config = Config::default();
        let mut tasks = TaskList::from_records(vec![Task::new("d", "default", "")]);
        assert_eq!(
            remove_focus(&mut config, &mut tasks, "default"),
            Err(FocusError::ProtectedDefault)
        );
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn unknown_focus_errors() {
        let mut config = Config::default();
        let mut tasks = TaskList::new();
        assert_eq!(
            remove_focus(&mut config, &mut tasks, "ghost"),
            Err(FocusError::NotFound("ghost".into()))
        );
        assert_eq!(
            select_focus(&mut config, "ghost"),
            Err(FocusError::NotFound("ghost".into()))
        );
    }

    #[test]
    fn select_and_lookup_by_position() {
        let mut config = config_with(&["default", "work"], "default");
        assert_eq!(focus_at(&config, 2), Ok("work"));
        assert_eq!(focus_at(&config, 0), Err(FocusError::InvalidNumber));
        assert_eq!(focus_at(&config, 3), Err(FocusError::InvalidNumber));

        select_focus(&mut config, "work").unwrap();
        assert_eq!(config.current_focus, "work");
    }
}
