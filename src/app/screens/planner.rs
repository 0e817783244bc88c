//! Day planner screen implementation
//!
//! Two panes: the activity catalog on the left and the scheduled plan on
//! the right. Enter adds from the catalog or removes from the plan.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, next_index, previous_index, title_bar};
use crate::content::Priority;
use crate::games::planner::DAY_BUDGET_MINUTES;
use crate::games::{DayPlan, GameKind, PlanSummary};
use crate::util::format_minutes;

/// Pane holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlannerPane {
    #[default]
    Catalog,
    Plan,
}

#[derive(Debug)]
pub struct PlannerScreen {
    plan: DayPlan,
    pane: PlannerPane,
    catalog_index: usize,
    catalog_state: ListState,
    plan_index: usize,
    plan_state: ListState,
    message: Option<String>,
}

impl PlannerScreen {
    pub fn new() -> Self {
        let mut catalog_state = ListState::default();
        catalog_state.select(Some(0));

        Self {
            plan: DayPlan::new(),
            pane: PlannerPane::Catalog,
            catalog_index: 0,
            catalog_state,
            plan_index: 0,
            plan_state: ListState::default(),
            message: None,
        }
    }

    /// Start a fresh day
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn plan(&self) -> &DayPlan {
        &self.plan
    }

    pub fn pane(&self) -> PlannerPane {
        self.pane
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn focus(&mut self, pane: PlannerPane) {
        self.pane = pane;
        if pane == PlannerPane::Plan && self.plan.selected_len() > 0 {
            self.plan_state.select(Some(self.plan_index));
        }
    }

    pub fn select_next(&mut self) {
        match self.pane {
            PlannerPane::Catalog => {
                self.catalog_index = next_index(self.catalog_index, self.plan.activities().len());
                self.catalog_state.select(Some(self.catalog_index));
            }
            PlannerPane::Plan => {
                self.plan_index = next_index(self.plan_index, self.plan.selected_len());
                self.sync_plan_state();
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.pane {
            PlannerPane::Catalog => {
                self.catalog_index =
                    previous_index(self.catalog_index, self.plan.activities().len());
                self.catalog_state.select(Some(self.catalog_index));
            }
            PlannerPane::Plan => {
                self.plan_index = previous_index(self.plan_index, self.plan.selected_len());
                self.sync_plan_state();
            }
        }
    }

    fn sync_plan_state(&mut self) {
        let len = self.plan.selected_len();
        if len == 0 {
            self.plan_index = 0;
            self.plan_state.select(None);
        } else {
            self.plan_index = self.plan_index.min(len - 1);
            self.plan_state.select(Some(self.plan_index));
        }
    }

    /// Add the highlighted catalog entry, or remove the highlighted plan entry
    pub fn activate(&mut self) {
        match self.pane {
            PlannerPane::Catalog => {
                let activity = self.plan.activities()[self.catalog_index];
                self.message = Some(match self.plan.add(self.catalog_index) {
                    Some(points) => format!("Added {} (+{})", activity.name, points),
                    None if self.plan.is_finished() => "The day is already planned.".to_string(),
                    None => format!(
                        "Not enough time for {} ({} left)",
                        activity.name,
                        format_minutes(self.plan.minutes_left())
                    ),
                });
            }
            PlannerPane::Plan => {
                let name = self.plan.selected().nth(self.plan_index).map(|a| a.name);
                if let (Some(name), Some(points)) = (name, self.plan.remove(self.plan_index)) {
                    self.message = Some(format!("Removed {} (-{})", name, points));
                }
                self.sync_plan_state();
            }
        }
    }

    /// Close the day. `None` while nothing is scheduled.
    pub fn finish(&mut self) -> Option<PlanSummary> {
        let summary = self.plan.finish();
        if summary.is_none() {
            self.message = Some("Schedule at least one activity first.".to_string());
        }
        summary
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Time used
                Constraint::Min(10),   // Panes
                Constraint::Length(3), // Benefit / message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        f.render_widget(
            title_bar(
                format!("{} {}", GameKind::TimePlanner.icon(), GameKind::TimePlanner.title()),
                Color::Cyan,
            ),
            chunks[0],
        );

        let used = self.plan.minutes_used();
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!("Time used  |  Score {}", self.plan.score()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(used as f64 / DAY_BUDGET_MINUTES as f64)
            .label(format!(
                "{} / {}",
                format_minutes(used),
                format_minutes(DAY_BUDGET_MINUTES)
            ));
        f.render_widget(gauge, chunks[1]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);
        self.render_catalog(f, panes[0]);
        self.render_plan(f, panes[1]);

        let footer = match &self.message {
            Some(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(
                self.plan.activities()[self.catalog_index].benefit,
            ),
        };
        f.render_widget(
            Paragraph::new(footer)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL)),
            chunks[3],
        );

        f.render_widget(
            help_bar(&[
                ("↑↓", "Navigate"),
                ("←→", "Switch pane"),
                ("Enter", "Add/Remove"),
                ("Tab", "Finish day"),
                ("Esc", "Back"),
            ]),
            chunks[4],
        );
    }

    fn pane_block(&self, pane: PlannerPane, title: &'static str) -> Block<'static> {
        let color = if self.pane == pane {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color))
    }

    fn render_catalog(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .plan
            .activities()
            .iter()
            .enumerate()
            .map(|(i, activity)| {
                let style = if self.plan.fits(i) {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<20}", activity.name), style),
                    Span::styled(
                        format!("{:>5} ", format_minutes(activity.minutes)),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(activity.priority.as_str(), priority_style(activity.priority)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(self.pane_block(PlannerPane::Catalog, "Activities"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.catalog_state);
    }

    fn render_plan(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .plan
            .selected()
            .map(|activity| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<20}", activity.name)),
                    Span::styled(
                        activity.category.description(),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();

        let title = if self.plan.selected_len() == 0 {
            "Your day (empty)"
        } else {
            "Your day"
        };
        let list = List::new(items)
            .block(self.pane_block(PlannerPane::Plan, title))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        if self.pane == PlannerPane::Plan {
            f.render_stateful_widget(list, area, &mut self.plan_state);
        } else {
            f.render_widget(list, area);
        }
    }
}

impl Default for PlannerScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn priority_style(priority: Priority) -> Style {
    let color = match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
