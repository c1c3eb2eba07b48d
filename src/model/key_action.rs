//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`]. Character keys never appear here:
/// printable input always goes to the search field, so only control and
/// navigation keys are bindable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the result list up by one row. Default: ↑
    ScrollUp,
    /// Scroll the result list down by one row. Default: ↓
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first result. Default: Home
    ScrollToTop,
    /// Jump to the last loaded result. Default: End
    ScrollToBottom,

    // Search input
    /// Clear the query text and reset the result list. Default: Esc
    ClearSearch,

    // Application
    /// Show or hide the help overlay. Default: F1
    Help,
    /// Exit the application. Default: Ctrl+q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_action_is_hashable_and_comparable() {
        let mut set = HashSet::new();
        set.insert(KeyAction::ScrollDown);
        set.insert(KeyAction::ScrollDown);
        set.insert(KeyAction::Quit);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&KeyAction::ScrollDown));
    }

    #[test]
    fn key_action_is_copy() {
        let action = KeyAction::PageDown;
        let copied = action;
        assert_eq!(action, copied);
    }
}
