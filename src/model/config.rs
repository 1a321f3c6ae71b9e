use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::task::DEFAULT_FOCUS;

/// Name of the theme used when none is configured or the configured one is unknown
pub const DEFAULT_THEME: &str = "Ghosty Classic";

/// User configuration from config.json.
///
/// Every recognized key is default-filled on read. Keys this version does not
/// know about are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_focus")]
    pub current_focus: String,
    #[serde(default = "default_focuses")]
    pub focuses: Vec<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub alternate_banner: bool,
    #[serde(default)]
    pub hide_banner: bool,
    /// Reprint the list after CLI commands
    #[serde(default = "default_true")]
    pub reprint_list: bool,
    /// Show success messages
    #[serde(default = "default_true")]
    pub show_responses: bool,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

fn default_focus() -> String {
    DEFAULT_FOCUS.to_string()
}

fn default_focuses() -> Vec<String> {
    vec![DEFAULT_FOCUS.to_string()]
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            current_focus: default_focus(),
            focuses: default_focuses(),
            theme: default_theme(),
            alternate_banner: false,
            hide_banner: false,
            reprint_list: true,
            show_responses: true,
            extra: IndexMap::new(),
        }
    }
}

impl Config {
    /// Restore the focus invariants after a load:
    /// `default` is always present and the current focus is always listed.
    /// Returns true if anything changed.
    pub fn repair(&mut self) -> bool {
        let mut changed = false;
        if !self.has_focus(DEFAULT_FOCUS) {
            self.focuses.insert(0, DEFAULT_FOCUS.to_string());
            changed = true;
        }
        if !self.has_focus(&self.current_focus) {
            self.focuses.push(self.current_focus.clone());
            changed = true;
        }
        changed
    }

    pub fn has_focus(&self, name: &str) -> bool {
        self.focuses.iter().any(|f| f == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_all_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_document_keeps_its_values() {
        let config: Config =
            serde_json::from_str(r#"{"theme":"Dracula","reprint_list":false}"#).unwrap();
        assert_eq!(config.theme, "Dracula");
        assert!(!config.reprint_list);
        assert!(config.show_responses);
        assert_eq!(config.focuses, vec!["default"]);
    }

    #[test]
    fn repair_appends_current_focus() {
        let mut config: Config =
            serde_json::from_str(r#"{"current_focus":"work","focuses":["default"]}"#).unwrap();
        assert!(config.repair());
        assert_eq!(config.focuses, vec!["default", "work"]);
        assert!(!config.repair());
    }

    #[test]
    fn repair_restores_default_focus_first() {
        let mut config: Config =
            serde_json::from_str(r#"{"current_focus":"work","focuses":["work"]}"#).unwrap();
        config.repair();
        assert_eq!(config.focuses, vec!["default", "work"]);
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let raw = r#"{"current_focus":"default","zeta":1,"alpha":{"nested":true}}"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        let keys: Vec<&String> = config.extra.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);

        let written = serde_json::to_string(&config).unwrap();
        let reread: Config = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, config);
    }
}
