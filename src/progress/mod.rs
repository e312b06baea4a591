//! Study progress persistence
//!
//! One JSON record holds everything the app remembers between runs: which
//! items are known, which need practice, quiz results, and the daily study
//! streak. A missing or corrupt file never blocks startup; the record just
//! starts fresh.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Chapter, ChapterId};
use crate::config::Config;

/// Stable key identifying one catalog item in the persisted sets.
///
/// Format: `{chapter_id}-{category}-{identity}`, e.g. `3-kanji-人`.
pub fn item_key(chapter: ChapterId, category: Category, identity: &str) -> String {
    format!("{}-{}-{}", chapter, category, identity)
}

/// One finished quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizScoreEntry {
    /// Chapter the quiz drew from
    pub chapter: ChapterId,
    /// Category the quiz drew from
    pub category: Category,
    /// Rounded percentage score (0-100)
    pub score: u8,
    /// When the quiz finished
    pub recorded_at: DateTime<Utc>,
}

/// Everything persisted about the user's studying
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Item keys the user marked as known
    #[serde(default)]
    pub known: HashSet<String>,

    /// Item keys the user marked as needing practice
    #[serde(default)]
    pub needs_practice: HashSet<String>,

    /// Completed quizzes, oldest first
    #[serde(default)]
    pub quiz_scores: Vec<QuizScoreEntry>,

    /// Consecutive study days, counting today once it has activity
    #[serde(default)]
    pub streak: u32,

    /// Calendar day of the most recent study activity
    #[serde(default)]
    pub last_study_date: Option<NaiveDate>,
}

impl ProgressRecord {
    /// Load the record from the default location. Never fails: an absent
    /// file, an unreadable file, and unparseable contents all yield a fresh
    /// record (with a warning for the latter two).
    pub fn load() -> Self {
        match Self::progress_path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => {
                tracing::warn!("no data directory for progress: {err:#}");
                Self::default()
            }
        }
    }

    /// Load the record from a specific path, tolerating damage
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!("failed to read progress from {path:?}, starting fresh: {err}");
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("progress file {path:?} is corrupt, starting fresh: {err}");
                Self::default()
            }
        }
    }

    /// Save the record to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::progress_path()?;
        self.save_to(&path)
    }

    /// Save the record to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize progress")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write progress to {:?}", path))?;

        Ok(())
    }

    /// Get progress path
    fn progress_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("progress.json"))
    }

    /// Mark an item as known. The two sets are mutually exclusive, so any
    /// needs-practice marking is dropped.
    pub fn mark_known(&mut self, key: String) {
        self.needs_practice.remove(&key);
        self.known.insert(key);
    }

    /// Mark an item as needing practice, dropping any known marking
    pub fn mark_needs_practice(&mut self, key: String) {
        self.known.remove(&key);
        self.needs_practice.insert(key);
    }

    /// Count today as a study day.
    ///
    /// The first ever activity starts the streak at 1. Activity on the day
    /// after the last recorded one extends it; a longer gap resets it to 1.
    /// Repeat calls on the same day change nothing.
    pub fn record_study_day(&mut self, today: NaiveDate) {
        let yesterday = today.pred_opt();
        match self.last_study_date {
            Some(last) if last == today => {}
            Some(last) if Some(last) == yesterday => self.streak += 1,
            _ => self.streak = 1,
        }
        self.last_study_date = Some(today);
    }

    /// Append a finished quiz to the history
    pub fn push_quiz_score(
        &mut self,
        chapter: ChapterId,
        category: Category,
        score: u8,
        recorded_at: DateTime<Utc>,
    ) {
        self.quiz_scores.push(QuizScoreEntry { chapter, category, score, recorded_at });
    }

    /// Forget everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of items marked known
    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    /// Number of items marked as needing practice
    pub fn practice_count(&self) -> usize {
        self.needs_practice.len()
    }

    /// Number of quizzes taken
    pub fn quizzes_taken(&self) -> usize {
        self.quiz_scores.len()
    }

    /// Mean quiz score, rounded; 0 with no quizzes taken
    pub fn average_quiz_score(&self) -> u8 {
        if self.quiz_scores.is_empty() {
            return 0;
        }
        let sum: u32 = self.quiz_scores.iter().map(|entry| u32::from(entry.score)).sum();
        (f64::from(sum) / self.quiz_scores.len() as f64).round() as u8
    }

    /// Percentage of a chapter's items marked known; 0 for an empty chapter
    pub fn chapter_completion(&self, chapter: &Chapter) -> u8 {
        let total = chapter.item_count();
        let known = Category::ALL
            .iter()
            .flat_map(|&category| {
                chapter.items(category).into_iter().map(move |item| (category, item))
            })
            .filter(|(category, item)| {
                self.known.contains(&item_key(chapter.id, *category, item.identity()))
            })
            .count();
        percent(known, total)
    }
}

/// Rounded percentage, 0 when the denominator is 0
fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::catalog::{KanjiItem, VocabItem};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_record_is_empty() {
        let record = ProgressRecord::default();
        assert!(record.known.is_empty());
        assert!(record.needs_practice.is_empty());
        assert!(record.quiz_scores.is_empty());
        assert_eq!(record.streak, 0);
        assert_eq!(record.last_study_date, None);
    }

    #[test]
    fn item_key_format() {
        assert_eq!(item_key(3, Category::Kanji, "人"), "3-kanji-人");
        assert_eq!(item_key(1, Category::Vocabulary, "学生"), "1-vocabulary-学生");
        assert_eq!(item_key(2, Category::Phrases, "いくらですか"), "2-phrases-いくらですか");
    }

    #[test]
    fn known_and_practice_are_mutually_exclusive() {
        let mut record = ProgressRecord::default();
        let key = item_key(1, Category::Vocabulary, "学生");

        record.mark_needs_practice(key.clone());
        assert!(record.needs_practice.contains(&key));

        record.mark_known(key.clone());
        assert!(record.known.contains(&key));
        assert!(!record.needs_practice.contains(&key));

        record.mark_needs_practice(key.clone());
        assert!(!record.known.contains(&key));
        assert!(record.needs_practice.contains(&key));
    }

    #[test]
    fn first_study_day_starts_streak() {
        let mut record = ProgressRecord::default();
        record.record_study_day(day(2026, 8, 25));
        assert_eq!(record.streak, 1);
        assert_eq!(record.last_study_date, Some(day(2026, 8, 25)));
    }

    #[test]
    fn same_day_study_is_idempotent() {
        let mut record = ProgressRecord::default();
        record.record_study_day(day(2026, 8, 25));
        record.record_study_day(day(2026, 8, 25));
        record.record_study_day(day(2026, 8, 25));
        assert_eq!(record.streak, 1);
    }

    #[test]
    fn consecutive_days_extend_streak() {
        let mut record = ProgressRecord::default();
        record.record_study_day(day(2026, 8, 23));
        record.record_study_day(day(2026, 8, 24));
        record.record_study_day(day(2026, 8, 25));
        assert_eq!(record.streak, 3);
    }

    #[test]
    fn gap_resets_streak() {
        let mut record = ProgressRecord::default();
        record.record_study_day(day(2026, 8, 20));
        record.record_study_day(day(2026, 8, 21));
        record.record_study_day(day(2026, 8, 25));
        assert_eq!(record.streak, 1);
        assert_eq!(record.last_study_date, Some(day(2026, 8, 25)));
    }

    #[test]
    fn streak_extends_across_month_boundary() {
        let mut record = ProgressRecord::default();
        record.record_study_day(day(2026, 8, 31));
        record.record_study_day(day(2026, 9, 1));
        assert_eq!(record.streak, 2);
    }

    #[test]
    fn average_quiz_score_rounds_mean() {
        let mut record = ProgressRecord::default();
        assert_eq!(record.average_quiz_score(), 0);

        let at = Utc::now();
        record.push_quiz_score(1, Category::Vocabulary, 90, at);
        record.push_quiz_score(1, Category::Kanji, 81, at);
        assert_eq!(record.average_quiz_score(), 86); // 85.5 rounds up
        assert_eq!(record.quizzes_taken(), 2);
    }

    #[test]
    fn chapter_completion_counts_known_items() {
        let chapter = Chapter {
            id: 1,
            title: "Test".into(),
            title_jp: String::new(),
            vocabulary: vec![
                VocabItem {
                    japanese: "学生".into(),
                    reading: "がくせい".into(),
                    english: "student".into(),
                    word_type: None,
                },
                VocabItem {
                    japanese: "先生".into(),
                    reading: "せんせい".into(),
                    english: "teacher".into(),
                    word_type: None,
                },
                VocabItem {
                    japanese: "大学".into(),
                    reading: "だいがく".into(),
                    english: "college".into(),
                    word_type: None,
                },
            ],
            kanji: vec![KanjiItem {
                character: "人".into(),
                onyomi: "ジン".into(),
                kunyomi: "ひと".into(),
                meaning: "person".into(),
                examples: vec![],
            }],
            phrases: vec![],
        };

        let mut record = ProgressRecord::default();
        assert_eq!(record.chapter_completion(&chapter), 0);

        record.mark_known(item_key(1, Category::Vocabulary, "学生"));
        assert_eq!(record.chapter_completion(&chapter), 25);

        record.mark_known(item_key(1, Category::Kanji, "人"));
        assert_eq!(record.chapter_completion(&chapter), 50);

        // Keys from other chapters never count.
        record.mark_known(item_key(2, Category::Vocabulary, "先生"));
        assert_eq!(record.chapter_completion(&chapter), 50);
    }

    #[test]
    fn empty_chapter_completion_is_zero() {
        let chapter = Chapter {
            id: 9,
            title: "Empty".into(),
            title_jp: String::new(),
            vocabulary: vec![],
            kanji: vec![],
            phrases: vec![],
        };
        let record = ProgressRecord::default();
        assert_eq!(record.chapter_completion(&chapter), 0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");

        let mut record = ProgressRecord::default();
        record.mark_known(item_key(1, Category::Vocabulary, "学生"));
        record.mark_needs_practice(item_key(1, Category::Kanji, "人"));
        record.record_study_day(day(2026, 8, 25));
        record.push_quiz_score(1, Category::Vocabulary, 80, Utc::now());

        record.save_to(&path).unwrap();
        let loaded = ProgressRecord::load_from(&path);
        assert_eq!(loaded, record);
    }

    #[test]
    fn missing_file_loads_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");
        assert_eq!(ProgressRecord::load_from(&path), ProgressRecord::default());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");
        fs::write(&path, "{definitely not json").unwrap();
        assert_eq!(ProgressRecord::load_from(&path), ProgressRecord::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");
        fs::write(&path, r#"{"known": ["1-kanji-人"], "streak": 4}"#).unwrap();

        let record = ProgressRecord::load_from(&path);
        assert!(record.known.contains("1-kanji-人"));
        assert_eq!(record.streak, 4);
        assert!(record.needs_practice.is_empty());
        assert_eq!(record.last_study_date, None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut record = ProgressRecord::default();
        record.mark_known(item_key(1, Category::Vocabulary, "学生"));
        record.record_study_day(day(2026, 8, 25));
        record.push_quiz_score(1, Category::Vocabulary, 100, Utc::now());

        record.reset();
        assert_eq!(record, ProgressRecord::default());
    }
}
