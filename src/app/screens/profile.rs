//! Profile screen implementation
//!
//! Edits the player's name and e-mail with raw key input, saves the
//! profile, or logs out by clearing it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::{help_bar, next_index, previous_index, title_bar};
use crate::config::{ProfileUpdate, UserProfile};

const MAX_FIELD_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileField {
    Name,
    Email,
    Save,
    Logout,
}

impl ProfileField {
    fn all() -> [Self; 4] {
        [Self::Name, Self::Email, Self::Save, Self::Logout]
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "E-mail",
            Self::Save => "Save profile",
            Self::Logout => "Log out",
        }
    }

    fn is_text(&self) -> bool {
        matches!(self, Self::Name | Self::Email)
    }
}

/// What the app should do after a key press on this screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    Save(ProfileUpdate),
    Logout,
    Back,
}

#[derive(Debug)]
pub struct ProfileScreen {
    name: String,
    email: String,
    selected_field: usize,
    /// Text being typed into the selected field
    editing: Option<String>,
    status: Option<(bool, String)>,
}

impl ProfileScreen {
    pub fn new(profile: Option<&UserProfile>) -> Self {
        let mut screen = Self {
            name: String::new(),
            email: String::new(),
            selected_field: 0,
            editing: None,
            status: None,
        };
        screen.set_profile(profile);
        screen
    }

    /// Reload the fields from a stored profile
    pub fn set_profile(&mut self, profile: Option<&UserProfile>) {
        self.name = profile.map(|p| p.name.clone()).unwrap_or_default();
        self.email = profile.map(|p| p.email.clone()).unwrap_or_default();
        self.editing = None;
    }

    pub fn set_status(&mut self, success: bool, message: String) {
        self.status = Some((success, message));
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(_, msg)| msg.as_str())
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    fn field(&self) -> ProfileField {
        ProfileField::all()[self.selected_field]
    }

    /// Handle a raw key press
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<ProfileAction> {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return None;
        }

        let fields = ProfileField::all().len();
        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.selected_field = previous_index(self.selected_field, fields)
            }
            KeyCode::Down | KeyCode::Tab => {
                self.selected_field = next_index(self.selected_field, fields)
            }
            KeyCode::Enter => return self.activate(),
            KeyCode::Esc => return Some(ProfileAction::Back),
            _ => {}
        }
        None
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let field = self.field();
        let Some(buffer) = self.editing.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if buffer.chars().count() < MAX_FIELD_LEN => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let value = buffer.trim().to_string();
                match field {
                    ProfileField::Name => self.name = value,
                    ProfileField::Email => self.email = value,
                    _ => {}
                }
                self.editing = None;
            }
            KeyCode::Esc => self.editing = None,
            _ => {}
        }
    }

    fn activate(&mut self) -> Option<ProfileAction> {
        match self.field() {
            ProfileField::Name => self.editing = Some(self.name.clone()),
            ProfileField::Email => self.editing = Some(self.email.clone()),
            ProfileField::Save => {
                if self.name.is_empty() {
                    self.set_status(false, "Enter a name first.".to_string());
                    return None;
                }
                return Some(ProfileAction::Save(
                    ProfileUpdate::new()
                        .with_name(self.name.clone())
                        .with_email(self.email.clone()),
                ));
            }
            ProfileField::Logout => return Some(ProfileAction::Logout),
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(size);

        f.render_widget(title_bar("👤 Profile", Color::Cyan), chunks[0]);
        self.render_fields(f, chunks[1]);

        if let Some((success, message)) = &self.status {
            let color = if *success { Color::Green } else { Color::Red };
            f.render_widget(
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(color))
                    .alignment(Alignment::Center),
                chunks[2],
            );
        }

        let hints: &[(&'static str, &'static str)] = if self.is_editing() {
            &[("Type", "Edit"), ("Enter", "Keep"), ("Esc", "Discard")]
        } else {
            &[("↑↓", "Navigate"), ("Enter", "Edit/Confirm"), ("Esc", "Back")]
        };
        f.render_widget(help_bar(hints), chunks[3]);

        if let Some(buffer) = &self.editing {
            let area = centered_rect(60, 3, size);
            f.render_widget(Clear, area);
            f.render_widget(
                Paragraph::new(format!("{}_", buffer)).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(self.field().title())
                        .border_style(Style::default().fg(Color::Yellow)),
                ),
                area,
            );
        }
    }

    fn render_fields(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = ProfileField::all()
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let style = if i == self.selected_field {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default()
                };
                let line = if field.is_text() {
                    let value = match field {
                        ProfileField::Name => &self.name,
                        _ => &self.email,
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("{:<8}", field.title()),
                            style.add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            if value.is_empty() { "-".to_string() } else { value.clone() },
                            style,
                        ),
                    ])
                } else {
                    Line::from(Span::styled(format!("[ {} ]", field.title()), style))
                };
                ListItem::new(line)
            })
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title("Details")),
            area,
        );
    }
}

/// Helper function to create a centered rect of a fixed height
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut ProfileScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key_event(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_edit_and_save() {
        let mut screen = ProfileScreen::new(None);
        assert!(screen.handle_key_event(press(KeyCode::Enter)).is_none());
        assert!(screen.is_editing());
        type_text(&mut screen, "Sam");
        screen.handle_key_event(press(KeyCode::Enter));
        assert!(!screen.is_editing());

        screen.handle_key_event(press(KeyCode::Down));
        screen.handle_key_event(press(KeyCode::Enter));
        type_text(&mut screen, "sam@example.com");
        screen.handle_key_event(press(KeyCode::Enter));

        screen.handle_key_event(press(KeyCode::Down));
        let action = screen.handle_key_event(press(KeyCode::Enter));
        assert_eq!(
            action,
            Some(ProfileAction::Save(
                ProfileUpdate::new().with_name("Sam").with_email("sam@example.com")
            ))
        );
    }

    #[test]
    fn test_q_is_text_while_editing() {
        let mut screen = ProfileScreen::new(None);
        screen.handle_key_event(press(KeyCode::Enter));
        type_text(&mut screen, "qq");
        screen.handle_key_event(press(KeyCode::Backspace));
        screen.handle_key_event(press(KeyCode::Enter));
        assert_eq!(screen.name, "q");
    }

    #[test]
    fn test_escape_discards_edit() {
        let profile = UserProfile::new("Ana", "ana@example.com");
        let mut screen = ProfileScreen::new(Some(&profile));
        screen.handle_key_event(press(KeyCode::Enter));
        type_text(&mut screen, "bel");
        screen.handle_key_event(press(KeyCode::Esc));
        assert_eq!(screen.name, "Ana");
        assert_eq!(screen.handle_key_event(press(KeyCode::Esc)), Some(ProfileAction::Back));
    }

    #[test]
    fn test_save_needs_name() {
        let mut screen = ProfileScreen::new(None);
        screen.handle_key_event(press(KeyCode::Down));
        screen.handle_key_event(press(KeyCode::Down));
        assert!(screen.handle_key_event(press(KeyCode::Enter)).is_none());
        assert!(screen.status().is_some());

        screen.handle_key_event(press(KeyCode::Down));
        assert_eq!(screen.handle_key_event(press(KeyCode::Enter)), Some(ProfileAction::Logout));
    }
}
