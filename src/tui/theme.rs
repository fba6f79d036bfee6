use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the board
pub struct BoardColors;

impl BoardColors {
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;

    // UI chrome
    pub const HEADER: Color = Color::White;
    pub const DIMMED: Color = Color::DarkGray;
    pub const BORDER: Color = Color::Gray;
    pub const TARGET: Color = Color::Blue;

    pub const SCORE_FILLED: Color = Color::Green;
}

/// Theme provides pre-built styles
pub struct Theme;

impl Theme {
    pub fn header() -> Style {
        Style::default()
            .fg(BoardColors::HEADER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(BoardColors::DIMMED)
    }

    pub fn success() -> Style {
        Style::default().fg(BoardColors::SUCCESS)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(BoardColors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(BoardColors::BORDER)
    }

    /// Column border while it is the drop target for a held card.
    pub fn target_border() -> Style {
        Style::default()
            .fg(BoardColors::TARGET)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_card() -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// The card currently held by the drag session.
    pub fn held_card() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn score() -> Style {
        Style::default().fg(BoardColors::SCORE_FILLED)
    }
}
