//! User profile persistence
//!
//! A single JSON object, last write wins. There is no schema versioning and
//! no integrity check; a corrupt file reads as an error and can be cleared.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::content::QuestGroup;
use crate::{MhapaError, Result, PROFILE_FILE};
use super::AppConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub quest_group: Option<QuestGroup>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            quest_group: None,
        }
    }

    /// Apply an update; fields absent from it keep their value
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(group) = update.quest_group {
            self.quest_group = Some(group);
        }
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Explorer"
        } else {
            self.name.trim()
        }
    }
}

/// Partial profile change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub quest_group: Option<QuestGroup>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_quest_group(mut self, group: QuestGroup) -> Self {
        self.quest_group = Some(group);
        self
    }
}

/// Profile storage manager
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile_path: PathBuf,
}

impl ProfileStore {
    /// Create a profile store at the standard location
    pub fn new() -> Result<Self> {
        Ok(Self {
            profile_path: Self::profile_file_path()?,
        })
    }

    /// Create a profile store backed by an explicit file
    pub fn with_path(profile_path: impl Into<PathBuf>) -> Self {
        Self { profile_path: profile_path.into() }
    }

    /// Get the standard profile file path
    /// Uses $DATA_HOME/mhapa/profile.json
    pub fn profile_file_path() -> Result<PathBuf> {
        Ok(AppConfig::data_dir()?.join(PROFILE_FILE))
    }

    /// Load the stored profile, if any
    pub fn load(&self) -> Result<Option<UserProfile>> {
        if !self.profile_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.profile_path)
            .map_err(|e| MhapaError::Persistence(
                format!("Failed to read profile {}: {}", self.profile_path.display(), e)
            ))?;

        let profile = serde_json::from_str(&content)
            .map_err(|e| MhapaError::Persistence(
                format!("Failed to parse profile {}: {}", self.profile_path.display(), e)
            ))?;

        Ok(Some(profile))
    }

    /// Overwrite the stored profile
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        if let Some(parent) = self.profile_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| MhapaError::Persistence(
                    format!("Failed to create data directory {}: {}", parent.display(), e)
                ))?;
        }

        let content = serde_json::to_string_pretty(profile)?;
        fs::write(&self.profile_path, content)
            .map_err(|e| MhapaError::Persistence(
                format!("Failed to write profile {}: {}", self.profile_path.display(), e)
            ))?;

        info!("Profile saved");
        Ok(())
    }

    /// Merge an update into the stored profile and save it
    pub fn update(&self, update: ProfileUpdate) -> Result<UserProfile> {
        let mut profile = self.load()?.unwrap_or_default();
        profile.merge(update);
        self.save(&profile)?;
        Ok(profile)
    }

    /// Forget the user (logout)
    pub fn clear(&self) -> Result<()> {
        if self.profile_path.exists() {
            fs::remove_file(&self.profile_path)
                .map_err(|e| MhapaError::Persistence(
                    format!("Failed to remove profile {}: {}", self.profile_path.display(), e)
                ))?;
            info!("Profile cleared");
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.profile_path
    }
}
