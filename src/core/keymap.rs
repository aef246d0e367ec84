use tracing::warn;

use crate::config::Config;
use crate::core::input::{InputEvent, KeyTrie, LookupResult};
use crate::core::mode::Mode;

/// Per-mode key tables
/// Each mode has its own KeyTrie so multi-key sequences stay mode-local
#[derive(Debug, Default)]
pub struct Keymap {
    normal: KeyTrie,
    command: KeyTrie,
    insert: KeyTrie,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the tables from configured bindings. Bindings that do not
    /// parse are logged and skipped.
    pub fn from_config(config: &Config) -> Self {
        let mut keymap = Self::new();
        let tables = [
            (Mode::Normal, &config.normal_bindings),
            (Mode::Command, &config.command_bindings),
            (Mode::Insert, &config.insert_bindings),
        ];
        for (mode, bindings) in tables {
            for (sequence, command) in bindings {
                if let Err(e) = keymap.bind(mode, sequence, command) {
                    warn!(%mode, sequence = %sequence, error = %e, "ignoring key binding");
                }
            }
        }
        keymap
    }

    /// Add a key binding from a sequence string like "SPC q"
    pub fn bind(&mut self, mode: Mode, sequence: &str, command: &str) -> Result<(), String> {
        let keys = parse_sequence(sequence);
        self.trie_mut(mode).insert(&keys, command.to_string())
    }

    /// Look a key up in the table for `mode`
    pub fn process_key(&mut self, mode: Mode, input_event: &InputEvent) -> LookupResult {
        self.trie_mut(mode).process_key(input_event)
    }

    /// Get the current partial key sequence for display
    pub fn current_sequence(&self, mode: Mode) -> String {
        match mode {
            Mode::Normal => self.normal.current_sequence(),
            Mode::Command => self.command.current_sequence(),
            Mode::Insert => self.insert.current_sequence(),
        }
    }

    fn trie_mut(&mut self, mode: Mode) -> &mut KeyTrie {
        match mode {
            Mode::Normal => &mut self.normal,
            Mode::Command => &mut self.command,
            Mode::Insert => &mut self.insert,
        }
    }
}

/// Split a sequence string into key names; keys are separated by spaces
fn parse_sequence(sequence: &str) -> Vec<&str> {
    sequence.split_whitespace().collect()
}
