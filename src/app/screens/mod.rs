//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub mod chat;
pub mod dashboard;
pub mod game;
pub mod history;
pub mod lessons;
pub mod planner;
pub mod profile;
pub mod resources;
pub mod start;
pub mod summary;

pub use chat::ChatScreen;
pub use dashboard::{DashboardEntry, DashboardScreen};
pub use game::GameScreen;
pub use history::HistoryScreen;
pub use lessons::LessonsScreen;
pub use planner::{PlannerPane, PlannerScreen};
pub use profile::{ProfileAction, ProfileScreen};
pub use resources::ResourcesScreen;
pub use start::StartScreen;
pub use summary::{SummaryAction, SummaryScreen};

/// Index after `current` in a list of `len`, wrapping to the top
pub(crate) fn next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Index before `current` in a list of `len`, wrapping to the bottom
pub(crate) fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

/// Bordered, centered, bold title
pub(crate) fn title_bar(title: impl Into<String>, color: Color) -> Paragraph<'static> {
    Paragraph::new(title.into())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
}

/// Key hints in the footer: highlighted key followed by its action
pub(crate) fn help_bar(hints: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, key_style));
        let separator = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::raw(format!(" {}{}", action, separator)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_wrapping() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(previous_index(0, 3), 2);
        assert_eq!(previous_index(2, 3), 1);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(previous_index(0, 0), 0);
    }
}
