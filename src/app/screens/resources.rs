//! Local mental-health services directory

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, next_index, previous_index, title_bar};
use crate::content::{LocalService, LOCAL_SERVICES};

#[derive(Debug)]
pub struct ResourcesScreen {
    services: &'static [LocalService],
    selected_index: usize,
    list_state: ListState,
}

impl ResourcesScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            services: &LOCAL_SERVICES,
            selected_index: 0,
            list_state,
        }
    }

    pub fn selected_service(&self) -> Option<&'static LocalService> {
        self.services.get(self.selected_index)
    }

    pub fn select_previous(&mut self) {
        self.selected_index = previous_index(self.selected_index, self.services.len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_next(&mut self) {
        self.selected_index = next_index(self.selected_index, self.services.len());
        self.list_state.select(Some(self.selected_index));
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

        f.render_widget(title_bar("Local Services", Color::Cyan), chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        let items: Vec<ListItem> = self
            .services
            .iter()
            .map(|service| {
                ListItem::new(vec![
                    Line::from(service.name),
                    Line::from(Span::styled(
                        format!("  {}", service.kind),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Directory"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, body[0], &mut self.list_state);

        self.render_detail(f, body[1]);
        f.render_widget(help_bar(&[("↑↓", "Browse"), ("Esc", "Back")]), chunks[2]);
    }

    fn render_detail(&self, f: &mut Frame, area: Rect) {
        let Some(service) = self.selected_service() else {
            return;
        };
        let label = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(service.name, label)),
            Line::from(service.description),
            Line::from(""),
            Line::from(vec![Span::styled("Address: ", label), Span::raw(service.address)]),
            Line::from(vec![Span::styled("Phone: ", label), Span::raw(service.phone)]),
            Line::from(vec![Span::styled("Hours: ", label), Span::raw(service.hours)]),
            Line::from(""),
            Line::from(Span::styled("Services", label)),
        ];
        lines.extend(service.services.iter().map(|s| Line::from(format!("  • {}", s))));

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(service.kind)),
            area,
        );
    }
}

impl Default for ResourcesScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_navigation() {
        let mut screen = ResourcesScreen::new();
        assert_eq!(screen.selected_service().unwrap().name, LOCAL_SERVICES[0].name);
        screen.select_previous();
        assert_eq!(
            screen.selected_service().unwrap().name,
            LOCAL_SERVICES[LOCAL_SERVICES.len() - 1].name
        );
    }
}
