//! Game screen implementation
//!
//! Hosts one round-based game at a time. The screen owns the `ActiveGame`,
//! so leaving it or replacing the game always stops the previous clock.

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tracing::info;

use super::{help_bar, next_index, previous_index, title_bar};
use crate::config::AppConfig;
use crate::content::{BREATHING_PHASES, EMOTIONS, EXERCISES, MEMORY_EMOJIS, QUIZ_QUESTIONS};
use crate::engine::{ActiveGame, Evaluation, Phase, SessionConfig, SessionSnapshot};
use crate::games::{mindfulness_config, GameKind};
use crate::util::format_clock;
use crate::{MhapaError, Result};

/// Screen hosting a round-based game
#[derive(Debug)]
pub struct GameScreen {
    kind: GameKind,
    game: Option<ActiveGame>,
    /// Mindful Moments asks for an exercise before the clock starts
    choosing_exercise: bool,
    cursor: usize,
    list_state: ListState,
    feedback: Option<String>,
    timer_period: Duration,
}

impl GameScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            kind: GameKind::EmotionMatch,
            game: None,
            choosing_exercise: false,
            cursor: 0,
            list_state,
            feedback: None,
            timer_period: Duration::from_secs(1),
        }
    }

    /// Open a game, dropping any game still held
    pub fn open(&mut self, kind: GameKind, config: &AppConfig) -> Result<()> {
        if !kind.is_round_based() {
            return Err(MhapaError::InvalidSession(format!(
                "{} is not a round-based game",
                kind.title()
            )));
        }

        self.game = None;
        self.kind = kind;
        self.feedback = None;
        self.timer_period = Duration::from_millis(config.timer_period_ms);
        self.reset_cursor();

        if kind == GameKind::MindfulMoments {
            self.choosing_exercise = true;
            return Ok(());
        }

        self.choosing_exercise = false;
        let session = kind.session_config(config).ok_or_else(|| {
            MhapaError::InvalidSession(format!("{} has no session settings", kind.title()))
        })?;
        self.launch(session)
    }

    /// Start the exercise under the cursor
    pub fn start_exercise(&mut self) -> Result<()> {
        if !self.choosing_exercise {
            return Ok(());
        }
        let exercise = self.cursor.min(EXERCISES.len() - 1);
        self.choosing_exercise = false;
        self.reset_cursor();
        self.launch(mindfulness_config(exercise))
    }

    fn launch(&mut self, session: SessionConfig) -> Result<()> {
        let table = self.kind.table().ok_or_else(|| {
            MhapaError::InvalidSession(format!("{} has no content", self.kind.title()))
        })?;
        let game = ActiveGame::launch(table, session, self.timer_period)?;
        info!("Started {}", self.kind.title());
        self.game = Some(game);
        Ok(())
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn is_choosing_exercise(&self) -> bool {
        self.choosing_exercise
    }

    pub fn phase(&self) -> Phase {
        self.game.as_ref().map_or(Phase::Idle, ActiveGame::phase)
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.game.as_ref().map(ActiveGame::snapshot)
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Feed pending clock ticks into the session
    pub fn pump(&mut self) -> Vec<Evaluation> {
        let evaluations = self.game.as_mut().map(ActiveGame::pump).unwrap_or_default();
        if let Some(last) = evaluations.last() {
            self.feedback = Some(last.message());
        }
        evaluations
    }

    /// The finished session, released along with its timer
    pub fn take_finished(&mut self) -> Option<SessionSnapshot> {
        if !self.phase().is_terminal() {
            return None;
        }
        self.game.take().map(|game| game.snapshot())
    }

    /// Abort the running session. Returns the state it was left in.
    pub fn abort(&mut self) -> Option<SessionSnapshot> {
        self.choosing_exercise = false;
        let mut game = self.game.take()?;
        let snapshot = game.snapshot();
        game.abort();
        info!("Abandoned {} in round {}", self.kind.title(), snapshot.round_index);
        Some(snapshot)
    }

    /// Skip the rest of a reveal
    pub fn begin_input(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.begin_input();
        }
    }

    /// Submit the option under the cursor
    pub fn submit_selected(&mut self) -> Option<Evaluation> {
        self.submit(self.cursor)
    }

    /// Submit an option by position
    pub fn submit(&mut self, option: usize) -> Option<Evaluation> {
        if option >= self.option_count() {
            return None;
        }
        let evaluation = self.game.as_mut()?.submit(option)?;
        self.feedback = Some(evaluation.message());
        if matches!(
            evaluation,
            Evaluation::RoundCleared { .. } | Evaluation::RoundMissed
        ) {
            self.reset_cursor();
        }
        Some(evaluation)
    }

    /// Answerable options for the current round
    pub fn option_count(&self) -> usize {
        if self.choosing_exercise {
            return EXERCISES.len();
        }
        match self.kind {
            GameKind::EmotionMatch => EMOTIONS.len(),
            GameKind::MemorySequence => MEMORY_EMOJIS.len(),
            GameKind::StressQuiz => self
                .current_item()
                .and_then(|i| QUIZ_QUESTIONS.get(i))
                .map_or(0, |q| q.options.len()),
            GameKind::Breathing | GameKind::MindfulMoments | GameKind::TimePlanner => 0,
        }
    }

    fn current_item(&self) -> Option<usize> {
        self.game
            .as_ref()
            .and_then(|game| game.session().current_round())
            .and_then(|round| round.content.first().copied())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        self.cursor = next_index(self.cursor, self.option_count());
        self.list_state.select(Some(self.cursor));
    }

    pub fn select_previous(&mut self) {
        self.cursor = previous_index(self.cursor, self.option_count());
        self.list_state.select(Some(self.cursor));
    }

    /// Move the cursor to an option without submitting it
    pub fn select(&mut self, option: usize) {
        if option < self.option_count() {
            self.cursor = option;
            self.list_state.select(Some(option));
        }
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.list_state.select(Some(0));
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Round and score
                Constraint::Min(8),    // Prompt and options
                Constraint::Length(3), // Countdown
                Constraint::Length(3), // Help text
            ])
            .split(size);

        f.render_widget(
            title_bar(
                format!("{} {}", self.kind.icon(), self.kind.title()),
                self.title_color(),
            ),
            chunks[0],
        );

        if self.choosing_exercise {
            self.render_exercise_picker(f, chunks[2]);
            f.render_widget(
                help_bar(&[("↑↓", "Choose"), ("Enter", "Begin"), ("Esc", "Back")]),
                chunks[4],
            );
            return;
        }

        let snapshot = self.snapshot();
        self.render_status(f, chunks[1], snapshot.as_ref());
        if let Some(snapshot) = snapshot.as_ref() {
            self.render_body(f, chunks[2], snapshot);
            self.render_countdown(f, chunks[3], snapshot);
        }

        let hints: &[(&'static str, &'static str)] = match self.phase() {
            Phase::Showing => &[("Enter", "Ready"), ("Esc", "Quit game")],
            Phase::AwaitingInput if self.option_count() > 0 => &[
                ("↑↓", "Choose"),
                ("1-9", "Answer"),
                ("Enter", "Submit"),
                ("Esc", "Quit game"),
            ],
            _ => &[("Esc", "Stop")],
        };
        f.render_widget(help_bar(hints), chunks[4]);
    }

    fn title_color(&self) -> Color {
        match self.phase() {
            Phase::Complete => Color::Green,
            Phase::Failed => Color::Red,
            _ => Color::Cyan,
        }
    }

    fn render_status(&self, f: &mut Frame, area: Rect, snapshot: Option<&SessionSnapshot>) {
        let label = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let line = match snapshot {
            Some(s) => Line::from(vec![
                Span::styled("Round ", label),
                Span::raw(format!("{}/{}", s.round_index, s.round_total)),
                Span::styled("   Score ", label),
                Span::raw(s.score.to_string()),
                Span::styled("   ", label),
                Span::raw(s.phase.description()),
                Span::raw(
                    self.feedback
                        .as_ref()
                        .map(|msg| format!("   {}", msg))
                        .unwrap_or_default(),
                ),
            ]),
            None => Line::from("Getting ready..."),
        };
        f.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(area);

        let prompt = self.prompt_lines(snapshot);
        f.render_widget(
            Paragraph::new(prompt)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(self.kind.instructions()),
                ),
            parts[0],
        );

        if snapshot.phase == Phase::AwaitingInput && self.option_count() > 0 {
            let labels = self.option_labels(snapshot);
            let items: Vec<ListItem> = labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                        Span::raw(label),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Options"))
                .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, parts[1], &mut self.list_state);
        }
    }

    fn prompt_lines(&self, snapshot: &SessionSnapshot) -> Vec<Line<'static>> {
        let big = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let first = snapshot.content.first().copied().unwrap_or(0);

        match (self.kind, snapshot.phase) {
            (_, Phase::Complete) => vec![Line::from(Span::styled("Well done!", big))],
            (_, Phase::Failed) => vec![Line::from(Span::styled("Game over", big))],
            (GameKind::EmotionMatch, _) => vec![
                Line::from(Span::styled(
                    EMOTIONS.get(first).map_or("", |e| e.emoji).to_string(),
                    big,
                )),
                Line::from("How is this face feeling?"),
            ],
            (GameKind::MemorySequence, Phase::Showing) => vec![
                Line::from(Span::styled(
                    snapshot
                        .revealing()
                        .and_then(|i| MEMORY_EMOJIS.get(i))
                        .map_or("", |e| e.glyph)
                        .to_string(),
                    big,
                )),
                Line::from(format!(
                    "Remember the sequence ({}/{})",
                    snapshot.revealed,
                    snapshot.content.len()
                )),
            ],
            (GameKind::MemorySequence, _) => vec![
                Line::from(Span::styled(
                    "❓ ".repeat(snapshot.content.len() - snapshot.input_progress.min(snapshot.content.len())),
                    big,
                )),
                Line::from(format!(
                    "Repeat the sequence: {}/{}",
                    snapshot.input_progress,
                    snapshot.content.len()
                )),
            ],
            (GameKind::Breathing, _) => {
                let phase = BREATHING_PHASES.get(first);
                vec![
                    Line::from(Span::styled(phase.map_or("", |p| p.name).to_string(), big)),
                    Line::from(phase.map_or("", |p| p.prompt).to_string()),
                ]
            }
            (GameKind::MindfulMoments, _) => {
                let exercise = EXERCISES.get(first);
                vec![
                    Line::from(Span::styled(
                        exercise
                            .map(|e| format!("{} {}", e.icon, e.name))
                            .unwrap_or_default(),
                        big,
                    )),
                    Line::from(exercise.map_or("", |e| e.description).to_string()),
                ]
            }
            (GameKind::StressQuiz, _) => vec![Line::from(Span::styled(
                QUIZ_QUESTIONS.get(first).map_or("", |q| q.question).to_string(),
                big,
            ))],
            (GameKind::TimePlanner, _) => Vec::new(),
        }
    }

    fn option_labels(&self, snapshot: &SessionSnapshot) -> Vec<String> {
        match self.kind {
            GameKind::EmotionMatch => EMOTIONS.iter().map(|e| e.name.to_string()).collect(),
            GameKind::MemorySequence => MEMORY_EMOJIS
                .iter()
                .map(|e| format!("{} {}", e.glyph, e.name))
                .collect(),
            GameKind::StressQuiz => snapshot
                .content
                .first()
                .and_then(|&i| QUIZ_QUESTIONS.get(i))
                .map(|q| q.options.iter().map(|o| o.to_string()).collect())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn render_countdown(&self, f: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
        let ratio = snapshot.time_ratio().clamp(0.0, 1.0);
        let color = if ratio > 0.5 {
            Color::Green
        } else if ratio > 0.2 {
            Color::Yellow
        } else {
            Color::Red
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Time")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(ratio)
            .label(format_clock(snapshot.time_remaining));

        f.render_widget(gauge, area);
    }

    fn render_exercise_picker(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = EXERCISES
            .iter()
            .map(|exercise| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} {} ", exercise.icon, exercise.name)),
                        Span::styled(
                            format!("({})", format_clock(exercise.duration_secs)),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("   {}", exercise.description),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Choose an exercise"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AppConfig {
        AppConfig::default().with_seed(Some(11))
    }

    #[tokio::test(start_paused = true)]
    async fn test_emotion_game_accepts_answers() {
        let mut screen = GameScreen::new();
        screen.open(GameKind::EmotionMatch, &seeded()).unwrap();
        assert_eq!(screen.phase(), Phase::Showing);
        assert_eq!(screen.option_count(), 6);

        screen.begin_input();
        assert_eq!(screen.phase(), Phase::AwaitingInput);

        let answer = screen.current_item().unwrap();
        let evaluation = screen.submit(answer).unwrap();
        assert_eq!(evaluation, Evaluation::RoundCleared { awarded: 1 });
        assert_eq!(screen.snapshot().unwrap().score, 1);
        assert_eq!(screen.cursor(), 0);
        assert!(screen.feedback().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_option_is_ignored() {
        let mut screen = GameScreen::new();
        screen.open(GameKind::StressQuiz, &seeded()).unwrap();
        screen.begin_input();
        assert_eq!(screen.option_count(), 4);
        assert!(screen.submit(4).is_none());
        assert_eq!(screen.snapshot().unwrap().mistakes, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mindfulness_waits_for_exercise() {
        let mut screen = GameScreen::new();
        screen.open(GameKind::MindfulMoments, &seeded()).unwrap();
        assert!(screen.is_choosing_exercise());
        assert_eq!(screen.phase(), Phase::Idle);
        assert_eq!(screen.option_count(), EXERCISES.len());

        screen.select(1);
        screen.start_exercise().unwrap();
        let snapshot = screen.snapshot().unwrap();
        assert_eq!(snapshot.content, vec![1]);
        assert_eq!(snapshot.time_budget, 300);
        assert_eq!(screen.option_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_releases_game() {
        let mut screen = GameScreen::new();
        screen.open(GameKind::MemorySequence, &seeded()).unwrap();
        let snapshot = screen.abort().unwrap();
        assert_eq!(snapshot.round_index, 1);
        assert_eq!(screen.phase(), Phase::Idle);
        assert!(screen.abort().is_none());
        assert!(screen.take_finished().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_finished_session_is_taken_once() {
        let config = seeded().with_quiz(crate::config::GameTuning::new(1, 30));
        let mut screen = GameScreen::new();
        screen.open(GameKind::StressQuiz, &config).unwrap();
        screen.begin_input();
        let correct = QUIZ_QUESTIONS[screen.current_item().unwrap()].correct_index;
        let evaluation = screen.submit(correct).unwrap();
        assert!(evaluation.ends_session());

        let finished = screen.take_finished().unwrap();
        assert_eq!(finished.phase, Phase::Complete);
        assert_eq!(finished.score, 1);
        assert!(screen.take_finished().is_none());
    }

    #[test]
    fn test_planner_is_not_opened_here() {
        let mut screen = GameScreen::new();
        assert!(screen.open(GameKind::TimePlanner, &AppConfig::default()).is_err());
    }
}
