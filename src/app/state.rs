//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event processing
//! for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Quest group selection
    #[default]
    QuestSelect,
    /// Activities, achievements and shortcuts for the chosen group
    Dashboard,
    /// A round-based game in progress
    Game,
    /// Day planner
    Planner,
    /// Result of the last game
    Summary,
    /// Lesson shelf for the chosen group
    Lessons,
    /// Local mental-health services
    Resources,
    /// Wellness companion chat
    Chat,
    /// Score history
    History,
    /// Profile editing
    Profile,
}

impl AppState {
    /// Screens that take raw text input instead of navigation keys
    pub fn captures_text(&self) -> bool {
        matches!(self, AppState::Profile)
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Pick a numbered option directly (1-9), zero-based
    Choose(usize),
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at quest selection
    pub fn new() -> Self {
        Self::starting_at(AppState::QuestSelect)
    }

    /// Create a state manager starting at a given screen
    pub fn starting_at(state: AppState) -> Self {
        Self {
            current_state: state,
            previous_state: None,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    /// Get the previous state if available
    pub fn previous_state(&self) -> Option<AppState> {
        self.previous_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            self.previous_state = Some(self.current_state);
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise to the dashboard
    pub fn go_back(&mut self) {
        self.current_state = match self.previous_state.take() {
            Some(prev_state) => prev_state,
            None => AppState::Dashboard,
        };
    }

    /// Handle the transitions every screen shares
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        match (self.current_state, action) {
            (_, NavigationAction::Quit) => self.should_quit = true,
            (AppState::QuestSelect, NavigationAction::Back) => self.should_quit = true,
            // Leaving a summary or a sub-screen always lands on the dashboard
            (AppState::Summary, NavigationAction::Back)
            | (AppState::History, NavigationAction::Back)
            | (AppState::Lessons, NavigationAction::Back)
            | (AppState::Resources, NavigationAction::Back) => {
                self.transition_to(AppState::Dashboard)
            }
            (_, NavigationAction::Back) => self.go_back(),
            _ => {
                // Other actions are handled by individual screen components
            }
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Numbered choices
            KeyCode::Char(c @ '1'..='9') => NavigationAction::Choose(c as usize - '1' as usize),

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Tab navigation
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }
            KeyCode::BackTab => NavigationAction::Previous,

            _ => NavigationAction::None,
        }
    }

    /// Handle a keyboard event and update state accordingly
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let action = Self::key_to_navigation(key);
        self.handle_navigation(action);
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
