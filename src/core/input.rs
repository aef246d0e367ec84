use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Native key representation for vee
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Alt(char),
    F(u8),
    Esc,
    Enter,
    Backspace,
    Tab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    Insert,
    Null,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => write!(f, "SPC"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Ctrl(c) => write!(f, "C-{}", c),
            Key::Alt(c) => write!(f, "M-{}", c),
            Key::F(n) => write!(f, "F{}", n),
            Key::Esc => write!(f, "Esc"),
            Key::Enter => write!(f, "Enter"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Tab => write!(f, "Tab"),
            Key::Delete => write!(f, "Delete"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::PageUp => write!(f, "PageUp"),
            Key::PageDown => write!(f, "PageDown"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Insert => write!(f, "Insert"),
            Key::Null => write!(f, "NUL"),
        }
    }
}

/// Single character following a modifier prefix such as `C-` or `M-`
fn modified_char(rest: &str) -> Option<char> {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Handle Ctrl notation: ^X or C-x
        if let Some(c) = s.strip_prefix('^').and_then(modified_char) {
            return Ok(Key::Ctrl(c.to_ascii_lowercase()));
        }
        if let Some(c) = s.strip_prefix("C-").and_then(modified_char) {
            return Ok(Key::Ctrl(c.to_ascii_lowercase()));
        }

        // Handle Alt/Meta notation: M-x
        if let Some(c) = s.strip_prefix("M-").and_then(modified_char) {
            return Ok(Key::Alt(c));
        }

        // Handle special keys
        match s.to_ascii_uppercase().as_str() {
            "ENTER" | "RET" => Ok(Key::Enter),
            "TAB" => Ok(Key::Tab),
            "BACKSPACE" | "BS" => Ok(Key::Backspace),
            "ESC" => Ok(Key::Esc),
            "DELETE" | "DEL" => Ok(Key::Delete),
            "SPC" | "SPACE" => Ok(Key::Char(' ')),
            "HOME" => Ok(Key::Home),
            "END" => Ok(Key::End),
            "PAGEUP" | "PGUP" => Ok(Key::PageUp),
            "PAGEDOWN" | "PGDN" => Ok(Key::PageDown),
            "UP" => Ok(Key::Up),
            "DOWN" => Ok(Key::Down),
            "LEFT" => Ok(Key::Left),
            "RIGHT" => Ok(Key::Right),
            "INSERT" | "INS" => Ok(Key::Insert),
            "NUL" | "NULL" => Ok(Key::Null),
            _ => {
                // Handle Function keys F1-F24
                if let Some(n) = s.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                    if (1..=24).contains(&n) {
                        return Ok(Key::F(n));
                    }
                }

                // Single raw character, case preserved
                modified_char(s)
                    .map(Key::Char)
                    .ok_or_else(|| format!("Unknown key: {}", s))
            }
        }
    }
}

/// Native input event representation for vee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

impl InputEvent {
    /// An unmodified key press
    pub fn plain(key: Key) -> Self {
        let ctrl = matches!(key, Key::Ctrl(_));
        let alt = matches!(key, Key::Alt(_));
        Self {
            key,
            shift: false,
            alt,
            ctrl,
        }
    }
}

/// Result of a key lookup in the trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// Found a complete command binding
    Command(String),
    /// Found a prefix, more keys needed
    Prefix,
    /// No matching binding found (dead end)
    DeadEnd,
    /// Key should be inserted as a character
    InsertChar(char),
}

/// A node in the key binding trie
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// The command bound to this sequence (if any)
    command: Option<String>,
    /// Child nodes for multi-key sequences
    children: HashMap<KeyInput, TrieNode>,
}

/// Normalized key input for trie lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyInput {
    pub fn from_event(event: &InputEvent) -> Self {
        // Shift is already part of a character ('H' vs 'h'); only named keys
        // like S-Up carry it as a separate modifier.
        let shift = match event.key {
            Key::Char(_) => false,
            _ => event.shift,
        };
        let key = match &event.key {
            Key::Ctrl(c) => Key::Ctrl(c.to_ascii_lowercase()),
            other => other.clone(),
        };
        Self {
            key,
            shift,
            ctrl: event.ctrl,
            alt: event.alt,
        }
    }
}

impl FromStr for KeyInput {
    type Err = String;

    /// Parse a binding string like "C-w" or "S-Up"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (shift, key_str) = match s.strip_prefix("S-") {
            Some(rest) if !rest.is_empty() => (true, rest),
            _ => (false, s),
        };
        let key = Key::from_str(key_str)?;
        let ctrl = matches!(key, Key::Ctrl(_));
        let alt = matches!(key, Key::Alt(_));
        let shift = shift && !matches!(key, Key::Char(_));
        Ok(Self {
            key,
            shift,
            ctrl,
            alt,
        })
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            write!(f, "S-")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Trie structure for multi-key binding lookups
#[derive(Debug, Default)]
pub struct KeyTrie {
    root: TrieNode,
    /// Current position in the trie (for stateful navigation)
    current: Vec<KeyInput>,
}

impl KeyTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a binding sequence into the trie
    /// sequence: e.g., "SPC q" -> ["SPC", "q"]
    pub fn insert(&mut self, sequence: &[&str], command: String) -> Result<(), String> {
        let keys = sequence
            .iter()
            .map(|s| KeyInput::from_str(s))
            .collect::<Result<Vec<_>, _>>()?;
        if keys.is_empty() {
            return Err("empty key sequence".to_string());
        }

        let mut node = &mut self.root;
        for key in keys {
            node = node.children.entry(key).or_default();
        }
        node.command = Some(command);
        Ok(())
    }

    /// Process a key event and return the lookup result
    pub fn process_key(&mut self, input_event: &InputEvent) -> LookupResult {
        self.current.push(KeyInput::from_event(input_event));

        let mut node = Some(&self.root);
        for k in &self.current {
            node = node.and_then(|n| n.children.get(k));
        }

        if let Some(node) = node {
            if let Some(cmd) = &node.command {
                let result = LookupResult::Command(cmd.clone());
                self.current.clear();
                return result;
            }
            if !node.children.is_empty() {
                return LookupResult::Prefix;
            }
        }

        // Unbound plain characters self-insert, with the original case
        let was_prefix = self.current.len() > 1;
        self.current.clear();
        if let Key::Char(c) = input_event.key {
            if !input_event.ctrl && !input_event.alt && !was_prefix {
                return LookupResult::InsertChar(c);
            }
        }
        LookupResult::DeadEnd
    }

    /// Get the current partial key sequence as a display string
    pub fn current_sequence(&self) -> String {
        if self.current.is_empty() {
            return String::new();
        }
        self.current
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(" ")
            + " -"
    }
}
