//! TUI interaction modes

/// The current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and filter shortcuts (default)
    #[default]
    Normal,
    /// Typing into the SKU search box (activated with /)
    Search,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "NORMAL"),
            Mode::Search => write!(f, "SEARCH"),
        }
    }
}

impl Mode {
    /// Returns a short code for compact display.
    pub fn short_code(&self) -> &'static str {
        match self {
            Mode::Normal => "NOR",
            Mode::Search => "SRCH",
        }
    }

    /// Whether keystrokes go to the search box.
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Mode::Search)
    }
}
