//! Start screen implementation
//!
//! Quest group selection with navigation highlighting and a short blurb for
//! the highlighted group.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, next_index, previous_index};
use crate::content::QuestGroup;

/// Start screen component with quest group selection
#[derive(Debug)]
pub struct StartScreen {
    groups: [QuestGroup; 5],
    selected_index: usize,
    list_state: ListState,
    greeting: String,
}

impl StartScreen {
    /// Create a new start screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            groups: QuestGroup::all(),
            selected_index: 0,
            list_state,
            greeting: "Welcome, Explorer!".to_string(),
        }
    }

    /// Greet the user by name and preselect their last group
    pub fn set_profile(&mut self, name: &str, group: Option<QuestGroup>) {
        self.greeting = format!("Welcome, {}!", name);
        if let Some(index) = group.and_then(|g| self.groups.iter().position(|&x| x == g)) {
            self.selected_index = index;
            self.list_state.select(Some(index));
        }
    }

    /// Get the currently selected group
    pub fn selected_group(&self) -> QuestGroup {
        self.groups[self.selected_index.min(self.groups.len() - 1)]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        self.selected_index = previous_index(self.selected_index, self.groups.len());
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected_index = next_index(self.selected_index, self.groups.len());
        self.list_state.select(Some(self.selected_index));
    }

    /// Jump straight to a group
    pub fn select(&mut self, index: usize) {
        if index < self.groups.len() {
            self.selected_index = index;
            self.list_state.select(Some(index));
        }
    }

    /// Render the start screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and greeting
                Constraint::Min(8),    // Group list
                Constraint::Length(4), // Group blurb
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_menu(f, chunks[1]);
        self.render_blurb(f, chunks[2]);
        f.render_widget(
            help_bar(&[("↑↓", "Navigate"), ("Enter", "Start quest"), ("Q", "Quit")]),
            chunks[3],
        );
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Main title
                Constraint::Length(2), // Greeting
            ])
            .split(area);

        let title = Paragraph::new("MHapa")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new(format!("{} Choose your quest", self.greeting))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .groups
            .iter()
            .enumerate()
            .map(|(i, group)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::raw(group.label()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Quest Groups"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_blurb(&self, f: &mut Frame, area: Rect) {
        let group = self.selected_group();
        let content = group.content();
        let text = vec![
            Line::from(Span::styled(
                content.title,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(group.focus()),
        ];
        let blurb = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(blurb, area);
    }
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new()
    }
}
