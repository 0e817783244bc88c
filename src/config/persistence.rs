//! Score history persistence
//!
//! Handles saving, loading, and rotation of game records.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::{MhapaError, Result, MAX_SCORE_HISTORY, SCORES_FILE};
use crate::models::GameRecord;
use crate::games::GameKind;
use super::AppConfig;

/// Score history storage manager
#[derive(Debug, Clone)]
pub struct ScoreHistory {
    scores_path: PathBuf,
}

/// Score file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct ScoresFile {
    version: u32,
    records: Vec<GameRecord>,
}

impl ScoreHistory {
    /// Create a score history at the standard location
    pub fn new() -> Result<Self> {
        let scores_path = Self::scores_file_path()?;
        Ok(Self { scores_path })
    }

    /// Create a score history backed by an explicit file
    pub fn with_path(scores_path: impl Into<PathBuf>) -> Self {
        Self { scores_path: scores_path.into() }
    }

    /// Get the standard score file path
    /// Uses $DATA_HOME/mhapa/scores.json
    pub fn scores_file_path() -> Result<PathBuf> {
        Ok(AppConfig::data_dir()?.join(SCORES_FILE))
    }

    /// Load all records, oldest first
    pub fn load_records(&self) -> Result<Vec<GameRecord>> {
        if !self.scores_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.scores_path)
            .map_err(|e| MhapaError::Persistence(
                format!("Failed to read score file {}: {}", self.scores_path.display(), e)
            ))?;

        let scores_file: ScoresFile = serde_json::from_str(&content)
            .map_err(|e| MhapaError::Persistence(
                format!("Failed to parse score file {}: {}", self.scores_path.display(), e)
            ))?;

        Ok(scores_file.records)
    }

    /// Append a record, rotating out the oldest beyond MAX_SCORE_HISTORY
    pub fn append_record(&self, record: GameRecord) -> Result<()> {
        let mut records = self.load_records()?;
        records.push(record);

        if records.len() > MAX_SCORE_HISTORY {
            let skip_count = records.len() - MAX_SCORE_HISTORY;
            records.drain(..skip_count);
        }

        self.save_records(records)?;
        info!(path = %self.scores_path.display(), "Score recorded");
        Ok(())
    }

    fn save_records(&self, records: Vec<GameRecord>) -> Result<()> {
        if let Some(parent) = self.scores_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| MhapaError::Persistence(
                    format!("Failed to create data directory {}: {}", parent.display(), e)
                ))?;
        }

        let scores_file = ScoresFile {
            version: 1,
            records,
        };

        let content = serde_json::to_string_pretty(&scores_file)?;

        fs::write(&self.scores_path, content)
            .map_err(|e| MhapaError::Persistence(
                format!("Failed to write score file {}: {}", self.scores_path.display(), e)
            ))?;

        Ok(())
    }

    /// Completed sessions of the given games
    pub fn completed_count(&self, games: &[GameKind]) -> Result<usize> {
        Ok(self
            .load_records()?
            .iter()
            .filter(|record| record.is_complete() && games.contains(&record.game))
            .count())
    }

    /// Best score ever recorded for a game
    pub fn best_score(&self, game: GameKind) -> Result<Option<u32>> {
        Ok(self
            .load_records()?
            .iter()
            .filter(|record| record.game == game)
            .map(|record| record.score)
            .max())
    }

    /// Most recent records, newest first
    pub fn recent_records(&self, count: usize) -> Result<Vec<GameRecord>> {
        let mut records = self.load_records()?;
        records.reverse();
        records.truncate(count);
        Ok(records)
    }

    /// Clear all stored records
    pub fn clear_records(&self) -> Result<()> {
        if self.scores_path.exists() {
            fs::remove_file(&self.scores_path)
                .map_err(|e| MhapaError::Persistence(
                    format!("Failed to remove score file {}: {}", self.scores_path.display(), e)
                ))?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.scores_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use tempfile::TempDir;

    fn create_test_record(score: u32) -> GameRecord {
        GameRecord::new(GameKind::EmotionMatch, None, score, score, 10, Outcome::Complete)
    }

    fn storage(temp_dir: &TempDir) -> ScoreHistory {
        ScoreHistory::with_path(temp_dir.path().join("scores.json"))
    }

    #[test]
    fn test_load_empty_history() {
        let temp_dir = TempDir::new().unwrap();
        assert!(storage(&temp_dir).load_records().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_load_record() {
        let temp_dir = TempDir::new().unwrap();
        let history = storage(&temp_dir);

        history.append_record(create_test_record(4)).unwrap();

        let records = history.load_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].score, 4);
    }

    #[test]
    fn test_history_rotation() {
        let temp_dir = TempDir::new().unwrap();
        let history = storage(&temp_dir);

        for i in 0..MAX_SCORE_HISTORY + 10 {
            history.append_record(create_test_record(i as u32)).unwrap();
        }

        let records = history.load_records().unwrap();
        assert_eq!(records.len(), MAX_SCORE_HISTORY);
        assert_eq!(records[0].score, 10);
        assert_eq!(records[records.len() - 1].score, (MAX_SCORE_HISTORY + 10 - 1) as u32);
    }

    #[test]
    fn test_completed_count_and_best_score() {
        let temp_dir = TempDir::new().unwrap();
        let history = storage(&temp_dir);

        history.append_record(create_test_record(3)).unwrap();
        history.append_record(create_test_record(8)).unwrap();
        history
            .append_record(GameRecord::new(GameKind::EmotionMatch, None, 1, 1, 10, Outcome::Failed))
            .unwrap();
        history
            .append_record(GameRecord::new(GameKind::Breathing, None, 12, 12, 12, Outcome::Complete))
            .unwrap();

        assert_eq!(history.completed_count(&[GameKind::EmotionMatch]).unwrap(), 2);
        assert_eq!(
            history.completed_count(&[GameKind::EmotionMatch, GameKind::Breathing]).unwrap(),
            3
        );
        assert_eq!(history.best_score(GameKind::EmotionMatch).unwrap(), Some(8));
        assert_eq!(history.best_score(GameKind::StressQuiz).unwrap(), None);
    }

    #[test]
    fn test_recent_records_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let history = storage(&temp_dir);

        for i in 0..10 {
            history.append_record(create_test_record(i)).unwrap();
        }

        let recent = history.recent_records(3).unwrap();
        assert_eq!(recent.iter().map(|r| r.score).collect::<Vec<_>>(), vec![9, 8, 7]);
        assert_eq!(history.recent_records(20).unwrap().len(), 10);
    }

    #[test]
    fn test_clear_records() {
        let temp_dir = TempDir::new().unwrap();
        let history = storage(&temp_dir);

        history.append_record(create_test_record(1)).unwrap();
        history.clear_records().unwrap();
        assert!(history.recent_records(10).unwrap().is_empty());
        assert!(!history.path().exists());
    }

    #[test]
    fn test_scores_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let history = storage(&temp_dir);

        history.append_record(create_test_record(1)).unwrap();

        let content = fs::read_to_string(history.path()).unwrap();
        let scores_file: ScoresFile = serde_json::from_str(&content).unwrap();
        assert_eq!(scores_file.version, 1);
        assert_eq!(scores_file.records.len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let history = storage(&temp_dir);
        fs::write(history.path(), "not json").unwrap();
        assert!(matches!(history.load_records(), Err(MhapaError::Persistence(_))));
    }
}
