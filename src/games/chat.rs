//! Wellness companion chatbot
//!
//! Canned replies only: the user picks a feeling and the bot answers with
//! one of that feeling's replies.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{ChatOption, CHAT_GREETING, CHAT_OPTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Conversation state
#[derive(Debug)]
pub struct ChatBot {
    options: &'static [ChatOption],
    messages: Vec<ChatMessage>,
    /// Reply index last given for each option
    last_reply: HashMap<usize, usize>,
    rng: SmallRng,
}

impl Default for ChatBot {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatBot {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Reproducible replies
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            options: &CHAT_OPTIONS,
            messages: vec![ChatMessage::new(CHAT_GREETING, Sender::Bot)],
            last_reply: HashMap::new(),
            rng,
        }
    }

    pub fn options(&self) -> &'static [ChatOption] {
        self.options
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send the feeling at `index` and return the bot's reply
    pub fn select(&mut self, index: usize) -> Option<&ChatMessage> {
        let option = self.options.get(index)?;
        if option.responses.is_empty() {
            return None;
        }

        let reply = self.pick_reply(index, option.responses.len());
        debug!(option = option.label, reply, "Chat reply");
        self.messages.push(ChatMessage::new(option.label, Sender::User));
        self.messages.push(ChatMessage::new(option.responses[reply], Sender::Bot));
        self.messages.last()
    }

    /// Clear the conversation back to the greeting
    pub fn reset(&mut self) {
        self.messages.truncate(1);
        self.last_reply.clear();
    }

    fn pick_reply(&mut self, option: usize, count: usize) -> usize {
        let reply = match self.last_reply.get(&option) {
            Some(&last) if count > 1 => {
                let pick = self.rng.gen_range(0..count - 1);
                if pick >= last {
                    pick + 1
                } else {
                    pick
                }
            }
            _ => self.rng.gen_range(0..count),
        };
        self.last_reply.insert(option, reply);
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let bot = ChatBot::with_seed(1);
        assert_eq!(bot.messages().len(), 1);
        assert_eq!(bot.messages()[0].sender, Sender::Bot);
        assert_eq!(bot.messages()[0].text, CHAT_GREETING);
    }

    #[test]
    fn test_select_appends_user_and_bot() {
        let mut bot = ChatBot::with_seed(1);
        let reply = bot.select(0).unwrap().text.clone();
        assert!(CHAT_OPTIONS[0].responses.contains(&reply.as_str()));

        let messages = bot.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, CHAT_OPTIONS[0].label);
        assert_eq!(messages[2].sender, Sender::Bot);
    }

    #[test]
    fn test_reply_not_repeated_for_same_feeling() {
        let mut bot = ChatBot::with_seed(7);
        let mut previous = bot.select(3).unwrap().text.clone();
        for _ in 0..50 {
            let reply = bot.select(3).unwrap().text.clone();
            assert_ne!(reply, previous);
            previous = reply;
        }
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let mut bot = ChatBot::with_seed(1);
        assert!(bot.select(CHAT_OPTIONS.len()).is_none());
        assert_eq!(bot.messages().len(), 1);
    }

    #[test]
    fn test_reset_keeps_only_greeting() {
        let mut bot = ChatBot::with_seed(1);
        bot.select(0);
        bot.select(1);
        bot.reset();
        assert_eq!(bot.messages().len(), 1);
        assert_eq!(bot.messages()[0].text, CHAT_GREETING);
    }
}
