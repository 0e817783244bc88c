//! Main application controller
//!
//! Manages the TUI, application state, and screen rendering loop. The app
//! owns the profile store, the score history and, through the game screen,
//! the one game that may be running.

use crate::{
    app::{
        screens::{
            ChatScreen, DashboardEntry, DashboardScreen, GameScreen, HistoryScreen,
            LessonsScreen, PlannerPane, PlannerScreen, ProfileAction, ProfileScreen,
            ResourcesScreen, StartScreen, SummaryAction, SummaryScreen,
        },
        state::{AppState, NavigationAction, StateManager},
        tui::Tui,
    },
    config::{AppConfig, ProfileStore, ProfileUpdate, ScoreHistory, UserProfile},
    content::{ActivityKind, QuestGroup},
    engine::Phase,
    error::user_friendly_message,
    games::{GameKind, PlanSummary},
    models::{GameRecord, Outcome},
    MhapaError, Result, MAX_SCORE_HISTORY,
};
use crossterm::event::{KeyCode, KeyEvent};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application state manager
    state_manager: StateManager,
    config: AppConfig,
    profile_store: ProfileStore,
    profile: Option<UserProfile>,
    score_history: ScoreHistory,
    /// Game offered again from the summary
    last_game: Option<GameKind>,
    /// Screen components
    start_screen: StartScreen,
    dashboard_screen: DashboardScreen,
    game_screen: GameScreen,
    planner_screen: PlannerScreen,
    summary_screen: SummaryScreen,
    lessons_screen: LessonsScreen,
    resources_screen: ResourcesScreen,
    chat_screen: ChatScreen,
    history_screen: HistoryScreen,
    profile_screen: ProfileScreen,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        let profile_store = ProfileStore::new()?;
        let score_history = ScoreHistory::new()?;

        let profile = match profile_store.load() {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Ignoring unreadable profile: {}", e);
                None
            }
        };

        let group = profile
            .as_ref()
            .and_then(|p| p.quest_group)
            .unwrap_or(QuestGroup::EmotionExplorer);

        let mut app = Self {
            tui: Tui::new(Duration::from_millis(config.ui_tick_ms))?,
            state_manager: StateManager::new(),
            config,
            profile_store,
            profile,
            score_history,
            last_game: None,
            start_screen: StartScreen::new(),
            dashboard_screen: DashboardScreen::new(group),
            game_screen: GameScreen::new(),
            planner_screen: PlannerScreen::new(),
            summary_screen: SummaryScreen::new(),
            lessons_screen: LessonsScreen::new(group),
            resources_screen: ResourcesScreen::new(),
            chat_screen: ChatScreen::new(),
            history_screen: HistoryScreen::default(),
            profile_screen: ProfileScreen::new(None),
        };
        app.refresh_profile_views();
        Ok(app)
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.pump_game();
            self.draw()?;
            self.handle_events()?;
        }
        // Leaving mid-game still counts as an abandoned session
        self.abandon_game();
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        self.tui.draw(|f| match self.state_manager.current_state() {
            AppState::QuestSelect => self.start_screen.render(f),
            AppState::Dashboard => self.dashboard_screen.render(f),
            AppState::Game => self.game_screen.render(f),
            AppState::Planner => self.planner_screen.render(f),
            AppState::Summary => self.summary_screen.render(f),
            AppState::Lessons => self.lessons_screen.render(f),
            AppState::Resources => self.resources_screen.render(f),
            AppState::Chat => self.chat_screen.render(f),
            AppState::History => self.history_screen.render(f),
            AppState::Profile => self.profile_screen.render(f),
        })
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        let Some(key) = self.tui.handle_events()? else {
            return Ok(());
        };
        let state = self.state_manager.current_state();
        let nav_action = StateManager::key_to_navigation(key);

        // Global key handling, except while the player is typing
        let typing = state.captures_text() && self.profile_screen.is_editing();
        if nav_action == NavigationAction::Quit && !typing {
            self.state_manager.quit();
            return Ok(());
        }

        if state.captures_text() {
            self.handle_profile_screen_events(key);
            return Ok(());
        }

        match state {
            AppState::QuestSelect => self.handle_start_screen_events(nav_action),
            AppState::Dashboard => self.handle_dashboard_events(nav_action),
            AppState::Game => self.handle_game_screen_events(nav_action),
            AppState::Planner => self.handle_planner_events(nav_action),
            AppState::Summary => self.handle_summary_events(nav_action),
            AppState::Lessons => match nav_action {
                NavigationAction::Up => self.lessons_screen.select_previous(),
                NavigationAction::Down => self.lessons_screen.select_next(),
                other => self.state_manager.handle_navigation(other),
            },
            AppState::Resources => match nav_action {
                NavigationAction::Up => self.resources_screen.select_previous(),
                NavigationAction::Down => self.resources_screen.select_next(),
                other => self.state_manager.handle_navigation(other),
            },
            AppState::Chat => self.handle_chat_events(nav_action),
            AppState::History => self.handle_history_events(key, nav_action),
            AppState::Profile => {}
        }
        Ok(())
    }

    fn handle_start_screen_events(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.start_screen.select_previous(),
            NavigationAction::Down => self.start_screen.select_next(),
            NavigationAction::Choose(index) if index < QuestGroup::all().len() => {
                self.start_screen.select(index);
                self.choose_group(self.start_screen.selected_group());
            }
            NavigationAction::Select => self.choose_group(self.start_screen.selected_group()),
            other => self.state_manager.handle_navigation(other),
        }
    }

    fn handle_dashboard_events(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.dashboard_screen.select_previous(),
            NavigationAction::Down => self.dashboard_screen.select_next(),
            NavigationAction::Choose(index) => {
                if index < self.dashboard_screen.entries().len() {
                    self.dashboard_screen.select(index);
                    self.open_selected_entry();
                }
            }
            NavigationAction::Select => self.open_selected_entry(),
            NavigationAction::Back => self.state_manager.transition_to(AppState::QuestSelect),
            other => self.state_manager.handle_navigation(other),
        }
    }

    fn handle_game_screen_events(&mut self, action: NavigationAction) {
        if action == NavigationAction::Back {
            self.abandon_game();
            if self.state_manager.current_state() == AppState::Game {
                self.state_manager.transition_to(AppState::Dashboard);
            }
            return;
        }

        if self.game_screen.is_choosing_exercise() {
            match action {
                NavigationAction::Up => self.game_screen.select_previous(),
                NavigationAction::Down => self.game_screen.select_next(),
                NavigationAction::Choose(index) => self.game_screen.select(index),
                NavigationAction::Select => {
                    if let Err(e) = self.game_screen.start_exercise() {
                        self.report_launch_error(GameKind::MindfulMoments, &e);
                    }
                }
                _ => {}
            }
            return;
        }

        match (self.game_screen.phase(), action) {
            (Phase::Showing, NavigationAction::Select) => self.game_screen.begin_input(),
            (Phase::AwaitingInput, NavigationAction::Up) => self.game_screen.select_previous(),
            (Phase::AwaitingInput, NavigationAction::Down) => self.game_screen.select_next(),
            (Phase::AwaitingInput, NavigationAction::Choose(index)) => {
                self.game_screen.submit(index);
            }
            (Phase::AwaitingInput, NavigationAction::Select) => {
                self.game_screen.submit_selected();
            }
            _ => {}
        }
        self.record_finished_game();
    }

    fn handle_planner_events(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.planner_screen.select_previous(),
            NavigationAction::Down => self.planner_screen.select_next(),
            NavigationAction::Left => self.planner_screen.focus(PlannerPane::Catalog),
            NavigationAction::Right => self.planner_screen.focus(PlannerPane::Plan),
            NavigationAction::Select => self.planner_screen.activate(),
            NavigationAction::Next => {
                if let Some(summary) = self.planner_screen.finish() {
                    self.record_plan(summary);
                }
            }
            NavigationAction::Back => self.state_manager.transition_to(AppState::Dashboard),
            other => self.state_manager.handle_navigation(other),
        }
    }

    fn handle_summary_events(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Left => self.summary_screen.select_previous_action(),
            NavigationAction::Right => self.summary_screen.select_next_action(),
            NavigationAction::Select => match self.summary_screen.selected_action() {
                SummaryAction::PlayAgain => match self.last_game {
                    Some(kind) => self.launch_game(kind),
                    None => self.state_manager.transition_to(AppState::Dashboard),
                },
                SummaryAction::Dashboard => self.state_manager.transition_to(AppState::Dashboard),
            },
            other => self.state_manager.handle_navigation(other),
        }
    }

    fn handle_chat_events(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.chat_screen.select_previous(),
            NavigationAction::Down => self.chat_screen.select_next(),
            NavigationAction::Select => self.chat_screen.send_selected(),
            NavigationAction::Choose(index) => self.chat_screen.send(index),
            NavigationAction::Next => self.chat_screen.reset(),
            NavigationAction::Back => self.state_manager.transition_to(AppState::Dashboard),
            other => self.state_manager.handle_navigation(other),
        }
    }

    fn handle_history_events(&mut self, key: KeyEvent, action: NavigationAction) {
        if key.code == KeyCode::Char('c') {
            if self.history_screen.request_clear() {
                self.clear_history();
            }
            return;
        }

        self.history_screen.cancel_clear();
        match action {
            NavigationAction::Up => self.history_screen.select_previous(),
            NavigationAction::Down => self.history_screen.select_next(),
            other => self.state_manager.handle_navigation(other),
        }
    }

    fn clear_history(&mut self) {
        match self.score_history.clear_records() {
            Ok(()) => {
                info!("Score history cleared");
                self.refresh_history();
                self.refresh_completed_count();
            }
            Err(e) => {
                warn!("Failed to clear score history: {}", e);
                self.history_screen.set_error(user_friendly_message(&e));
            }
        }
    }

    fn handle_profile_screen_events(&mut self, key: KeyEvent) {
        let Some(action) = self.profile_screen.handle_key_event(key) else {
            return;
        };
        match action {
            ProfileAction::Save(update) => {
                let update = update.with_quest_group(self.dashboard_screen.group());
                match self.profile_store.update(update) {
                    Ok(profile) => {
                        info!("Profile saved for {}", profile.display_name());
                        self.profile = Some(profile);
                        self.refresh_profile_views();
                        self.profile_screen
                            .set_status(true, "Profile saved!".to_string());
                    }
                    Err(e) => {
                        warn!("Failed to save profile: {}", e);
                        self.profile_screen
                            .set_status(false, user_friendly_message(&e));
                    }
                }
            }
            ProfileAction::Logout => {
                if let Err(e) = self.profile_store.clear() {
                    warn!("Failed to clear profile: {}", e);
                    self.profile_screen
                        .set_status(false, user_friendly_message(&e));
                    return;
                }
                info!("Logged out");
                self.profile = None;
                self.refresh_profile_views();
                self.state_manager.transition_to(AppState::QuestSelect);
            }
            ProfileAction::Back => self.state_manager.transition_to(AppState::Dashboard),
        }
    }

    /// Switch to a quest group and open its dashboard
    fn choose_group(&mut self, group: QuestGroup) {
        info!("Quest group chosen: {}", group.id());
        self.dashboard_screen.set_group(group);
        self.lessons_screen.set_group(group);
        self.refresh_completed_count();

        if self.profile.is_some() {
            match self
                .profile_store
                .update(ProfileUpdate::new().with_quest_group(group))
            {
                Ok(profile) => self.profile = Some(profile),
                Err(e) => warn!("Failed to remember quest group: {}", e),
            }
        }
        self.state_manager.transition_to(AppState::Dashboard);
    }

    fn open_selected_entry(&mut self) {
        let Some(entry) = self.dashboard_screen.selected_entry() else {
            return;
        };
        self.dashboard_screen.set_status(None);
        match entry {
            DashboardEntry::Activity(activity) => match activity.kind {
                ActivityKind::Game(kind) => self.launch_game(kind),
                ActivityKind::Lessons => self.state_manager.transition_to(AppState::Lessons),
            },
            DashboardEntry::Breathing => self.launch_game(GameKind::Breathing),
            DashboardEntry::Chat => self.state_manager.transition_to(AppState::Chat),
            DashboardEntry::Resources => self.state_manager.transition_to(AppState::Resources),
            DashboardEntry::History => {
                self.refresh_history();
                self.state_manager.transition_to(AppState::History);
            }
            DashboardEntry::Profile => {
                self.profile_screen.set_profile(self.profile.as_ref());
                self.state_manager.transition_to(AppState::Profile);
            }
            DashboardEntry::ChangeQuest => self.state_manager.transition_to(AppState::QuestSelect),
        }
    }

    /// Open a game. Any game still held by the game screen is dropped
    /// first, which stops its timer.
    fn launch_game(&mut self, kind: GameKind) {
        self.last_game = Some(kind);
        if kind == GameKind::TimePlanner {
            self.planner_screen.reset();
            self.state_manager.transition_to(AppState::Planner);
            return;
        }

        match self.game_screen.open(kind, &self.config) {
            Ok(()) => self.state_manager.transition_to(AppState::Game),
            Err(e) => self.report_launch_error(kind, &e),
        }
    }

    fn report_launch_error(&mut self, kind: GameKind, error: &MhapaError) {
        warn!("Could not start {}: {}", kind.title(), error);
        self.dashboard_screen
            .set_status(Some(user_friendly_message(error)));
        self.state_manager.transition_to(AppState::Dashboard);
    }

    /// Feed clock ticks to the running game
    fn pump_game(&mut self) {
        self.game_screen.pump();
        self.record_finished_game();
    }

    fn record_finished_game(&mut self) {
        if let Some(snapshot) = self.game_screen.take_finished() {
            let record = GameRecord::from_snapshot(
                self.game_screen.kind(),
                Some(self.dashboard_screen.group()),
                &snapshot,
            );
            self.finish_with(record, None);
        }
    }

    /// Abort the running game, if any, and record it as abandoned
    fn abandon_game(&mut self) {
        if let Some(snapshot) = self.game_screen.abort() {
            if snapshot.phase.is_live() {
                let mut record = GameRecord::from_snapshot(
                    self.game_screen.kind(),
                    Some(self.dashboard_screen.group()),
                    &snapshot,
                );
                record.outcome = Outcome::Abandoned;
                self.finish_with(record, None);
            }
        }
    }

    fn record_plan(&mut self, summary: PlanSummary) {
        let activities = summary.activities as u32;
        let record = GameRecord::new(
            GameKind::TimePlanner,
            Some(self.dashboard_screen.group()),
            summary.total(),
            activities,
            activities,
            Outcome::Complete,
        );
        self.finish_with(record, Some(summary));
    }

    /// Save a record and show it on the summary screen
    fn finish_with(&mut self, record: GameRecord, plan: Option<PlanSummary>) {
        info!("{}", record.summary());
        self.summary_screen.set_record(record.clone(), plan);
        match self.score_history.append_record(record) {
            Ok(()) => self
                .summary_screen
                .complete_save(true, "Saved to your history".to_string()),
            Err(e) => {
                warn!("Failed to save game record: {}", e);
                self.summary_screen
                    .complete_save(false, user_friendly_message(&e));
            }
        }
        self.refresh_completed_count();
        self.state_manager.transition_to(AppState::Summary);
    }

    fn refresh_completed_count(&mut self) {
        let games = self.dashboard_screen.group_games();
        let count = match self.score_history.completed_count(&games) {
            Ok(count) => count,
            Err(e) => {
                warn!("Failed to read score history: {}", e);
                0
            }
        };
        self.dashboard_screen.set_completed_sessions(count);
    }

    fn refresh_history(&mut self) {
        let records = match self.score_history.recent_records(MAX_SCORE_HISTORY) {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to read score history: {}", e);
                self.history_screen.set_error(user_friendly_message(&e));
                return;
            }
        };
        let best = GameKind::all()
            .into_iter()
            .filter_map(|game| match self.score_history.best_score(game) {
                Ok(score) => score.map(|s| (game, s)),
                Err(_) => None,
            })
            .collect();
        self.history_screen.set_records(records, best);
    }

    fn refresh_profile_views(&mut self) {
        let name = self
            .profile
            .as_ref()
            .map_or("Explorer", UserProfile::display_name)
            .to_string();
        let group = self.profile.as_ref().and_then(|p| p.quest_group);
        self.start_screen.set_profile(&name, group);
        self.dashboard_screen.set_player_name(&name);
        self.profile_screen.set_profile(self.profile.as_ref());
        self.refresh_completed_count();
    }
}
