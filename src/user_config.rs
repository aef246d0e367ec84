// vee Configuration
// Edit this file to customize your editor, then rebuild.

use crate::config::Config;

/// User configuration function
pub fn configure(config: &mut Config) {
    // =========================================================================
    // NORMAL MODE
    // =========================================================================
    // Lowercase moves the cursor and collapses the selection onto it,
    // uppercase extends the selection.
    config.bind_normal("h", "move-left");
    config.bind_normal("H", "extend-left");
    config.bind_normal("l", "move-right");
    config.bind_normal("L", "extend-right");
    config.bind_normal("k", "move-up");
    config.bind_normal("K", "extend-up");
    config.bind_normal("j", "move-down");
    config.bind_normal("J", "extend-down");

    // Arrow keys jump by scroll-lines
    config.bind_normal("Up", "move-page-up");
    config.bind_normal("S-Up", "extend-page-up");
    config.bind_normal("Down", "move-page-down");
    config.bind_normal("S-Down", "extend-page-down");

    config.bind_normal("y", "move-start-of-line");
    config.bind_normal("Y", "extend-start-of-line");
    config.bind_normal("o", "move-end-of-line");
    config.bind_normal("O", "extend-end-of-line");
    config.bind_normal("u", "move-start-of-word");
    config.bind_normal("U", "extend-start-of-word");
    config.bind_normal("i", "move-end-of-word");
    config.bind_normal("I", "extend-end-of-word");
    config.bind_normal("Esc", "collapse-selection");

    // Into Insert mode
    config.bind_normal("a", "insert-before");
    config.bind_normal("d", "insert-after");
    config.bind_normal("A", "open-line-above");
    config.bind_normal("D", "open-line-below");
    config.bind_normal("f", "change-selection");
    config.bind_normal("F", "change-lines");

    // Edits
    config.bind_normal("x", "delete-selection");
    config.bind_normal("X", "delete-lines");
    config.bind_normal("z", "undo");
    config.bind_normal("Z", "redo");
    config.bind_normal("c", "copy");
    config.bind_normal("v", "paste");

    config.bind_normal("SPC", "command-mode");

    // =========================================================================
    // COMMAND MODE (after SPC)
    // =========================================================================
    config.bind_command("q", "quit");
    config.bind_command("w", "save");

    // =========================================================================
    // INSERT MODE
    // =========================================================================
    // Unbound printable keys insert themselves.
    config.bind_insert("Enter", "insert-newline");
    config.bind_insert("Tab", "insert-tab");
    config.bind_insert("Backspace", "backspace");
    config.bind_insert("C-w", "backspace-word");
    config.bind_insert("Delete", "delete-forward");
    config.bind_insert("Esc", "normal-mode");

    // =========================================================================
    // EDITOR SETTINGS
    // =========================================================================
    config.set("tab-width", 4); // Columns per tab stop
    config.set("scroll-lines", 9); // Lines moved by Up/Down
}
