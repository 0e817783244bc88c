//! Wellness companion screen
//!
//! The conversation scrolls on the left; the feelings the user can pick sit
//! on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, next_index, previous_index, title_bar};
use crate::games::{ChatBot, Sender};

#[derive(Debug)]
pub struct ChatScreen {
    bot: ChatBot,
    selected_index: usize,
    list_state: ListState,
}

impl ChatScreen {
    pub fn new() -> Self {
        Self::with_bot(ChatBot::new())
    }

    pub fn with_bot(bot: ChatBot) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            bot,
            selected_index: 0,
            list_state,
        }
    }

    pub fn bot(&self) -> &ChatBot {
        &self.bot
    }

    pub fn select_previous(&mut self) {
        self.selected_index = previous_index(self.selected_index, self.bot.options().len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_next(&mut self) {
        self.selected_index = next_index(self.selected_index, self.bot.options().len());
        self.list_state.select(Some(self.selected_index));
    }

    /// Send the highlighted feeling
    pub fn send_selected(&mut self) {
        self.bot.select(self.selected_index);
    }

    /// Send a feeling by position
    pub fn send(&mut self, index: usize) {
        if index < self.bot.options().len() {
            self.selected_index = index;
            self.list_state.select(Some(index));
            self.bot.select(index);
        }
    }

    /// Start the conversation over
    pub fn reset(&mut self) {
        self.bot.reset();
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(size);

        f.render_widget(title_bar("💬 Wellness Companion", Color::Cyan), chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);
        self.render_conversation(f, body[0]);

        let items: Vec<ListItem> = self
            .bot
            .options()
            .iter()
            .map(|option| ListItem::new(option.label))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("I feel..."))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, body[1], &mut self.list_state);

        f.render_widget(
            help_bar(&[("↑↓", "Choose"), ("Enter", "Send"), ("Tab", "New chat"), ("Esc", "Back")]),
            chunks[2],
        );
    }

    fn render_conversation(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for message in self.bot.messages() {
            let (who, color) = match message.sender {
                Sender::Bot => ("Companion", Color::Green),
                Sender::User => ("You", Color::Cyan),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", who), Style::default().fg(color)),
                Span::styled(
                    message.timestamp.format("%H:%M").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(message.text.clone()));
            lines.push(Line::from(""));
        }

        // Keep the newest messages in view
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = lines.len().saturating_sub(visible) as u16;

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .scroll((scroll, 0))
                .block(Block::default().borders(Borders::ALL).title("Conversation")),
            area,
        );
    }
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new()
    }
}
