//! History screen implementation
//!
//! Lists recent game records, newest first, next to the best score reached
//! in each game.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{help_bar, next_index, previous_index, title_bar};
use crate::games::GameKind;
use crate::models::{GameRecord, Outcome};

/// History screen component
#[derive(Debug)]
pub struct HistoryScreen {
    records: Vec<GameRecord>,
    best_scores: Vec<(GameKind, u32)>,
    selected_index: usize,
    list_state: ListState,
    error: Option<String>,
    /// `c` was pressed once; a second press wipes the history
    confirm_clear: bool,
}

impl HistoryScreen {
    /// Create a new history screen from a list of records
    pub fn new(records: Vec<GameRecord>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            records,
            best_scores: Vec::new(),
            selected_index: 0,
            list_state,
            error: None,
            confirm_clear: false,
        }
    }

    /// Replace the records and best scores on display
    pub fn set_records(&mut self, records: Vec<GameRecord>, best_scores: Vec<(GameKind, u32)>) {
        self.records = records;
        self.best_scores = best_scores;
        self.error = None;
        self.confirm_clear = false;
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    /// The history could not be read
    pub fn set_error(&mut self, error: String) {
        self.records.clear();
        self.best_scores.clear();
        self.error = Some(error);
    }

    /// Arm the clear on the first press; returns true on the confirming press
    pub fn request_clear(&mut self) -> bool {
        if self.records.is_empty() {
            return false;
        }
        if self.confirm_clear {
            self.confirm_clear = false;
            true
        } else {
            self.confirm_clear = true;
            false
        }
    }

    pub fn cancel_clear(&mut self) {
        self.confirm_clear = false;
    }

    pub fn is_confirming_clear(&self) -> bool {
        self.confirm_clear
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn selected_record(&self) -> Option<&GameRecord> {
        self.records.get(self.selected_index)
    }

    pub fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected_index = previous_index(self.selected_index, self.records.len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected_index = next_index(self.selected_index, self.records.len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        f.render_widget(title_bar("Score History", Color::Cyan), chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);
        self.render_list(f, body[0]);
        self.render_best(f, body[1]);

        if self.confirm_clear {
            f.render_widget(
                Paragraph::new("Press c again to delete all records, any other key to keep them")
                    .style(Style::default().fg(Color::Red))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::Yellow)),
                    ),
                chunks[2],
            );
        } else {
            f.render_widget(
                help_bar(&[("↑↓", "Scroll"), ("c", "Clear"), ("Esc", "Back")]),
                chunks[2],
            );
        }
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(error.as_str())
                    .style(Style::default().fg(Color::Red))
                    .block(Block::default().borders(Borders::ALL).title("Records")),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = if self.records.is_empty() {
            vec![ListItem::new("No games played yet")]
        } else {
            self.records
                .iter()
                .map(|record| {
                    let color = match record.outcome {
                        Outcome::Complete => Color::Green,
                        Outcome::Failed => Color::Red,
                        Outcome::Abandoned => Color::DarkGray,
                    };
                    ListItem::new(Line::from(Span::styled(
                        record.summary(),
                        Style::default().fg(color),
                    )))
                })
                .collect()
        };

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Records"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_best(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = if self.best_scores.is_empty() {
            vec![Line::from("-")]
        } else {
            self.best_scores
                .iter()
                .map(|(game, score)| Line::from(format!("{} {}: {}", game.icon(), game.title(), score)))
                .collect()
        };
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Best")),
            area,
        );
    }
}

impl Default for HistoryScreen {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: u32) -> GameRecord {
        GameRecord::new(GameKind::EmotionMatch, None, score, score, 10, Outcome::Failed)
    }

    #[test]
    fn test_history_navigation() {
        let mut screen = HistoryScreen::new(vec![record(1), record(2), record(3)]);
        assert_eq!(screen.selected_record().unwrap().score, 1);
        screen.select_next();
        assert_eq!(screen.selected_record().unwrap().score, 2);
        screen.select_previous();
        screen.select_previous();
        assert_eq!(screen.selected_record().unwrap().score, 3);
    }

    #[test]
    fn test_empty_history_does_not_move() {
        let mut screen = HistoryScreen::default();
        screen.select_next();
        screen.select_previous();
        assert!(screen.selected_record().is_none());
    }

    #[test]
    fn test_clear_needs_confirmation() {
        let mut screen = HistoryScreen::new(vec![record(1)]);
        assert!(!screen.request_clear());
        assert!(screen.is_confirming_clear());
        assert!(screen.request_clear());
        assert!(!screen.is_confirming_clear());

        assert!(!screen.request_clear());
        screen.cancel_clear();
        assert!(!screen.request_clear());
    }

    #[test]
    fn test_clear_ignored_without_records() {
        let mut screen = HistoryScreen::default();
        assert!(!screen.request_clear());
        assert!(!screen.is_confirming_clear());
    }

    #[test]
    fn test_error_clears_records() {
        let mut screen = HistoryScreen::new(vec![record(4)]);
        screen.set_error("unreadable".to_string());
        assert!(screen.records().is_empty());

        screen.set_records(vec![record(5)], vec![(GameKind::EmotionMatch, 5)]);
        assert!(screen.error.is_none());
        assert_eq!(screen.selected_record().unwrap().score, 5);
    }
}
