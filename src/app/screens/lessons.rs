//! Lesson shelf for the active quest group

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, next_index, previous_index, title_bar};
use crate::content::{lessons_for, Lesson, QuestGroup};

#[derive(Debug)]
pub struct LessonsScreen {
    group: QuestGroup,
    lessons: &'static [Lesson],
    selected_index: usize,
    list_state: ListState,
}

impl LessonsScreen {
    pub fn new(group: QuestGroup) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            group,
            lessons: lessons_for(group),
            selected_index: 0,
            list_state,
        }
    }

    pub fn set_group(&mut self, group: QuestGroup) {
        *self = Self::new(group);
    }

    pub fn lessons(&self) -> &'static [Lesson] {
        self.lessons
    }

    pub fn selected_lesson(&self) -> Option<&'static Lesson> {
        self.lessons.get(self.selected_index)
    }

    pub fn select_previous(&mut self) {
        self.selected_index = previous_index(self.selected_index, self.lessons.len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_next(&mut self) {
        self.selected_index = next_index(self.selected_index, self.lessons.len());
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

        f.render_widget(
            title_bar(format!("Lessons - {}", self.group.label()), Color::Cyan),
            chunks[0],
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);
        self.render_list(f, body[0]);
        self.render_detail(f, body[1]);

        f.render_widget(help_bar(&[("↑↓", "Browse"), ("Esc", "Back")]), chunks[2]);
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.lessons.is_empty() {
            vec![ListItem::new("No lessons for this quest")]
        } else {
            self.lessons.iter().map(|l| ListItem::new(l.title)).collect()
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Shelf"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_detail(&self, f: &mut Frame, area: Rect) {
        let lines = match self.selected_lesson() {
            Some(lesson) => vec![
                Line::from(Span::styled(
                    lesson.title,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(lesson.subtitle, Style::default().fg(Color::Gray))),
                Line::from(""),
                Line::from(
                    lesson
                        .tags
                        .iter()
                        .map(|tag| Span::styled(format!("[{}] ", tag), Style::default().fg(Color::Cyan)))
                        .collect::<Vec<_>>(),
                ),
                Line::from(""),
                Line::from(lesson.summary),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Read: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(lesson.document),
                ]),
            ],
            None => vec![Line::from("Pick a quest with lessons to see them here.")],
        };
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Lesson")),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_follows_group() {
        let mut screen = LessonsScreen::new(QuestGroup::MindfulSage);
        assert!(!screen.lessons().is_empty());
        assert_eq!(
            screen.selected_lesson().map(|l| l.slug),
            lessons_for(QuestGroup::MindfulSage).first().map(|l| l.slug)
        );

        screen.set_group(QuestGroup::QuizCove);
        assert!(screen.lessons().is_empty());
        screen.select_next();
        assert!(screen.selected_lesson().is_none());
    }
}
