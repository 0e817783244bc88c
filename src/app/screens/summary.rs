//! Summary screen implementation
//!
//! Shows how the last game ended, whether it reached the score history, and
//! offers to play again or return to the dashboard.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use super::{help_bar, title_bar};
use crate::games::PlanSummary;
use crate::models::{GameRecord, Outcome};

/// Summary screen for a finished or abandoned game
#[derive(Debug)]
pub struct SummaryScreen {
    record: Option<GameRecord>,
    plan: Option<PlanSummary>,
    /// Outcome of writing the record to the history
    save_message: Option<(bool, String)>,
    selected_action: SummaryAction,
}

/// Available actions on the summary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryAction {
    PlayAgain,
    Dashboard,
}

impl SummaryAction {
    pub fn all() -> [Self; 2] {
        [Self::PlayAgain, Self::Dashboard]
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Self::PlayAgain => "Play Again",
            Self::Dashboard => "Back to Dashboard",
        }
    }
}

impl SummaryScreen {
    pub fn new() -> Self {
        Self {
            record: None,
            plan: None,
            save_message: None,
            selected_action: SummaryAction::PlayAgain,
        }
    }

    /// Show a new record, with the planner tally when the day planner produced it
    pub fn set_record(&mut self, record: GameRecord, plan: Option<PlanSummary>) {
        self.record = Some(record);
        self.plan = plan;
        self.save_message = None;
        self.selected_action = SummaryAction::PlayAgain;
    }

    pub fn record(&self) -> Option<&GameRecord> {
        self.record.as_ref()
    }

    pub fn plan(&self) -> Option<&PlanSummary> {
        self.plan.as_ref()
    }

    pub fn complete_save(&mut self, success: bool, message: String) {
        self.save_message = Some((success, message));
    }

    pub fn save_message(&self) -> Option<&str> {
        self.save_message.as_ref().map(|(_, msg)| msg.as_str())
    }

    pub fn selected_action(&self) -> SummaryAction {
        self.selected_action
    }

    pub fn select_next_action(&mut self) {
        let actions = SummaryAction::all();
        let current = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        self.selected_action = actions[(current + 1) % actions.len()];
    }

    pub fn select_previous_action(&mut self) {
        let actions = SummaryAction::all();
        let current = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        self.selected_action = actions[(current + actions.len() - 1) % actions.len()];
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Result table
                Constraint::Length(1), // Save message
                Constraint::Length(3), // Actions
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let Some(record) = self.record.as_ref() else {
            f.render_widget(title_bar("No results yet", Color::Yellow), chunks[0]);
            f.render_widget(help_bar(&[("Esc", "Dashboard")]), chunks[4]);
            return;
        };

        let (heading, color) = match record.outcome {
            Outcome::Complete => ("Well done!", Color::Green),
            Outcome::Failed => ("Nice try!", Color::Red),
            Outcome::Abandoned => ("Game stopped", Color::Yellow),
        };
        f.render_widget(
            title_bar(
                format!("{} {} - {}", record.game.icon(), record.game.title(), heading),
                color,
            ),
            chunks[0],
        );

        self.render_table(f, chunks[1], record);

        if let Some((success, message)) = &self.save_message {
            let style = if *success {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            f.render_widget(
                Paragraph::new(message.as_str())
                    .style(style)
                    .alignment(Alignment::Center),
                chunks[2],
            );
        }

        self.render_actions(f, chunks[3]);
        f.render_widget(
            help_bar(&[("←→", "Choose"), ("Enter", "Confirm"), ("Esc", "Dashboard")]),
            chunks[4],
        );
    }

    fn render_table(&self, f: &mut Frame, area: Rect, record: &GameRecord) {
        let mut rows = vec![
            Row::new(vec!["Score".to_string(), record.score.to_string()]),
            Row::new(vec![
                "Rounds".to_string(),
                format!("{}/{}", record.rounds_completed, record.rounds_total),
            ]),
            Row::new(vec![
                "Outcome".to_string(),
                record.outcome.description().to_string(),
            ]),
        ];
        if let Some(plan) = &self.plan {
            rows.extend([
                Row::new(vec!["Activity points".to_string(), plan.base_score.to_string()]),
                Row::new(vec![
                    "Balance bonus".to_string(),
                    format!(
                        "+{} (categories {}, priorities {})",
                        plan.bonus(),
                        plan.category_bonus,
                        plan.priority_bonus
                    ),
                ]),
                Row::new(vec![
                    "Time planned".to_string(),
                    crate::util::format_minutes(plan.minutes_used),
                ]),
            ]);
        }

        let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(20)])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Results")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .column_spacing(2);
        f.render_widget(table, area);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect) {
        let actions_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(44),
                Constraint::Min(0),
            ])
            .split(area)[1];

        let action_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(actions_area);

        for (action, chunk) in SummaryAction::all().iter().zip(action_chunks.iter()) {
            let selected = *action == self.selected_action;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let button = Paragraph::new(action.display_text())
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(if selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                }));
            f.render_widget(button, *chunk);
        }
    }
}

impl Default for SummaryScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::GameKind;

    #[test]
    fn test_set_record_resets_state() {
        let mut screen = SummaryScreen::new();
        screen.select_next_action();
        screen.complete_save(false, "disk full".to_string());

        let record = GameRecord::new(GameKind::StressQuiz, None, 2, 2, 3, Outcome::Complete);
        screen.set_record(record, None);
        assert_eq!(screen.record().unwrap().score, 2);
        assert!(screen.save_message().is_none());
        assert_eq!(screen.selected_action(), SummaryAction::PlayAgain);
    }

    #[test]
    fn test_action_navigation_wraps() {
        let mut screen = SummaryScreen::new();
        screen.select_previous_action();
        assert_eq!(screen.selected_action(), SummaryAction::Dashboard);
        screen.select_next_action();
        assert_eq!(screen.selected_action(), SummaryAction::PlayAgain);
    }

    #[test]
    fn test_plan_summary_is_kept() {
        let mut screen = SummaryScreen::new();
        let plan = PlanSummary {
            base_score: 60,
            category_bonus: 0,
            priority_bonus: 30,
            activities: 3,
            minutes_used: 75,
        };
        let record = GameRecord::new(GameKind::TimePlanner, None, plan.total(), 3, 3, Outcome::Complete);
        screen.set_record(record, Some(plan));
        assert_eq!(screen.plan().unwrap().total(), 90);
        assert_eq!(screen.record().unwrap().score, 90);
    }
}
