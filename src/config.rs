// Configuration module
// Internal representation of user configuration

use std::collections::HashMap;

pub const DEFAULT_TAB_WIDTH: usize = 4;
pub const DEFAULT_SCROLL_LINES: usize = 9;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Normal mode: key sequence -> command name
    pub normal_bindings: HashMap<String, String>,
    /// Command mode: the key pressed after the command prefix
    pub command_bindings: HashMap<String, String>,
    /// Insert mode: keys that do something other than type themselves
    pub insert_bindings: HashMap<String, String>,
    /// Numeric settings such as `tab-width`
    pub settings: HashMap<String, i64>,
}

impl Config {
    /// Bind a Normal mode key sequence to a command
    pub fn bind_normal(&mut self, key: &str, command: &str) {
        self.normal_bindings
            .insert(key.to_string(), command.to_string());
    }

    /// Bind a Command mode key to a command
    pub fn bind_command(&mut self, key: &str, command: &str) {
        self.command_bindings
            .insert(key.to_string(), command.to_string());
    }

    /// Bind an Insert mode key sequence to a command
    pub fn bind_insert(&mut self, key: &str, command: &str) {
        self.insert_bindings
            .insert(key.to_string(), command.to_string());
    }

    /// Set a configuration value
    pub fn set(&mut self, key: &str, value: i64) {
        self.settings.insert(key.to_string(), value);
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.settings.get(key).copied()
    }

    /// Columns per tab stop, at least 1
    pub fn tab_width(&self) -> usize {
        self.positive("tab-width").unwrap_or(DEFAULT_TAB_WIDTH)
    }

    /// Lines moved by the page up/down commands, at least 1
    pub fn scroll_lines(&self) -> usize {
        self.positive("scroll-lines").unwrap_or(DEFAULT_SCROLL_LINES)
    }

    fn positive(&self, key: &str) -> Option<usize> {
        self.get_int(key)
            .and_then(|i| usize::try_from(i).ok())
            .map(|n| n.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.normal_bindings.is_empty());
        assert!(config.settings.is_empty());
        assert_eq!(config.tab_width(), 4);
        assert_eq!(config.scroll_lines(), 9);
    }

    #[test]
    fn test_bind_per_mode() {
        let mut config = Config::default();
        config.bind_normal("x", "delete-selection");
        config.bind_command("q", "quit");
        config.bind_insert("C-w", "backspace-word");
        assert_eq!(
            config.normal_bindings.get("x"),
            Some(&"delete-selection".to_string())
        );
        assert_eq!(config.command_bindings.get("q"), Some(&"quit".to_string()));
        assert_eq!(
            config.insert_bindings.get("C-w"),
            Some(&"backspace-word".to_string())
        );
    }

    #[test]
    fn test_set_get_settings() {
        let mut config = Config::default();
        assert_eq!(config.get_int("int_setting"), None);
        config.set("int_setting", 42);
        assert_eq!(config.get_int("int_setting"), Some(42));
        config.set("int_setting", 7);
        assert_eq!(config.get_int("int_setting"), Some(7));
    }

    #[test]
    fn test_tab_width_is_at_least_one() {
        let mut config = Config::default();
        config.set("tab-width", 0);
        assert_eq!(config.tab_width(), 1);
        config.set("tab-width", -3);
        assert_eq!(config.tab_width(), 4);
        config.set("tab-width", 8);
        assert_eq!(config.tab_width(), 8);
    }

    #[test]
    fn test_scroll_lines_setting() {
        let mut config = Config::default();
        config.set("scroll-lines", 20);
        assert_eq!(config.scroll_lines(), 20);
        config.set("scroll-lines", -1);
        assert_eq!(config.scroll_lines(), 9);
    }
}
