//! Dashboard screen implementation
//!
//! Shows the chosen quest group's title, description and achievements, with
//! a menu of its activities followed by the shortcuts every group shares.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, next_index, previous_index, title_bar};
use crate::content::{ActivityKind, QuestActivity, QuestGroup};
use crate::games::GameKind;

/// Something the dashboard can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEntry {
    Activity(&'static QuestActivity),
    Breathing,
    Chat,
    Resources,
    History,
    Profile,
    ChangeQuest,
}

impl DashboardEntry {
    fn label(&self) -> String {
        match self {
            DashboardEntry::Activity(activity) => format!("{} {}", activity.icon, activity.name),
            DashboardEntry::Breathing => format!(
                "{} {}",
                GameKind::Breathing.icon(),
                GameKind::Breathing.title()
            ),
            DashboardEntry::Chat => "💬 Wellness Companion".to_string(),
            DashboardEntry::Resources => "📍 Local Services".to_string(),
            DashboardEntry::History => "📜 Score History".to_string(),
            DashboardEntry::Profile => "👤 Profile".to_string(),
            DashboardEntry::ChangeQuest => "↩ Change quest".to_string(),
        }
    }
}

/// Dashboard for one quest group
#[derive(Debug)]
pub struct DashboardScreen {
    group: QuestGroup,
    entries: Vec<DashboardEntry>,
    selected_index: usize,
    list_state: ListState,
    completed_sessions: usize,
    player_name: String,
    status: Option<String>,
}

impl DashboardScreen {
    pub fn new(group: QuestGroup) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            group,
            entries: Self::entries_for(group),
            selected_index: 0,
            list_state,
            completed_sessions: 0,
            player_name: "Explorer".to_string(),
            status: None,
        }
    }

    fn entries_for(group: QuestGroup) -> Vec<DashboardEntry> {
        let mut entries: Vec<DashboardEntry> = group
            .content()
            .activities
            .iter()
            .map(DashboardEntry::Activity)
            .collect();
        entries.extend([
            DashboardEntry::Breathing,
            DashboardEntry::Chat,
            DashboardEntry::Resources,
            DashboardEntry::History,
            DashboardEntry::Profile,
            DashboardEntry::ChangeQuest,
        ]);
        entries
    }

    /// Switch to another group and reset the menu
    pub fn set_group(&mut self, group: QuestGroup) {
        self.group = group;
        self.entries = Self::entries_for(group);
        self.selected_index = 0;
        self.list_state.select(Some(0));
        self.status = None;
    }

    pub fn group(&self) -> QuestGroup {
        self.group
    }

    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = name.to_string();
    }

    /// Sessions of this group's games finished so far
    pub fn set_completed_sessions(&mut self, count: usize) {
        self.completed_sessions = count;
    }

    pub fn completed_sessions(&self) -> usize {
        self.completed_sessions
    }

    /// One-line message shown under the menu
    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    /// Games this group's activities launch
    pub fn group_games(&self) -> Vec<GameKind> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                DashboardEntry::Activity(activity) => match activity.kind {
                    ActivityKind::Game(kind) => Some(kind),
                    ActivityKind::Lessons => None,
                },
                _ => None,
            })
            .collect()
    }

    pub fn entries(&self) -> &[DashboardEntry] {
        &self.entries
    }

    pub fn selected_entry(&self) -> Option<DashboardEntry> {
        self.entries.get(self.selected_index).copied()
    }

    pub fn select_previous(&mut self) {
        self.selected_index = previous_index(self.selected_index, self.entries.len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select_next(&mut self) {
        self.selected_index = next_index(self.selected_index, self.entries.len());
        self.list_state.select(Some(self.selected_index));
    }

    pub fn select(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected_index = index;
            self.list_state.select(Some(index));
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Menu and overview
                Constraint::Length(1), // Status line
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let content = self.group.content();
        f.render_widget(
            title_bar(format!("{} - {}", content.title, self.player_name), Color::Cyan),
            chunks[0],
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_menu(f, body[0]);
        self.render_overview(f, body[1]);

        if let Some(status) = &self.status {
            f.render_widget(
                Paragraph::new(status.as_str()).style(Style::default().fg(Color::Yellow)),
                chunks[2],
            );
        }

        f.render_widget(
            help_bar(&[
                ("↑↓", "Navigate"),
                ("Enter", "Open"),
                ("Esc", "Quests"),
                ("Q", "Quit"),
            ]),
            chunks[3],
        );
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let number = if i < 9 {
                    format!("{} ", i + 1)
                } else {
                    "  ".to_string()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(number, Style::default().fg(Color::DarkGray)),
                    Span::raw(entry.label()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Activities"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_overview(&self, f: &mut Frame, area: Rect) {
        let content = self.group.content();
        let heading = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(content.description),
            Line::from(""),
            Line::from(vec![
                Span::styled("Completed sessions: ", heading),
                Span::raw(self.completed_sessions.to_string()),
            ]),
            Line::from(""),
            Line::from(Span::styled("Achievements", heading)),
        ];
        lines.extend(
            content
                .achievements
                .iter()
                .map(|achievement| Line::from(format!("  🏆 {}", achievement))),
        );

        let overview = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(self.group.label()))
            .wrap(Wrap { trim: true });
        f.render_widget(overview, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_end_with_shared_shortcuts() {
        let screen = DashboardScreen::new(QuestGroup::EmotionExplorer);
        let activities = QuestGroup::EmotionExplorer.content().activities.len();
        assert_eq!(screen.entries().len(), activities + 6);
        assert_eq!(screen.entries()[activities], DashboardEntry::Breathing);
        assert_eq!(screen.entries().last(), Some(&DashboardEntry::ChangeQuest));
    }

    #[test]
    fn test_group_games_include_default_game() {
        for group in QuestGroup::all() {
            let screen = DashboardScreen::new(group);
            assert!(
                screen.group_games().contains(&group.default_game()),
                "{:?} does not offer its default game",
                group
            );
        }
    }

    #[test]
    fn test_navigation_wraps() {
        let mut screen = DashboardScreen::new(QuestGroup::MindMaster);
        screen.select_previous();
        assert_eq!(screen.selected_entry(), Some(DashboardEntry::ChangeQuest));
        screen.select_next();
        match screen.selected_entry() {
            Some(DashboardEntry::Activity(activity)) => {
                assert!(matches!(activity.kind, ActivityKind::Game(_) | ActivityKind::Lessons))
            }
            other => panic!("expected an activity, got {:?}", other),
        }
    }

    #[test]
    fn test_set_group_resets_selection() {
        let mut screen = DashboardScreen::new(QuestGroup::MindMaster);
        screen.select(2);
        screen.set_status(Some("saved".to_string()));
        screen.set_group(QuestGroup::QuizCove);
        assert_eq!(screen.group(), QuestGroup::QuizCove);
        assert_eq!(screen.selected_index, 0);
        assert!(screen.status.is_none());
    }
}
