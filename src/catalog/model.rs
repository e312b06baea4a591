//! Content model for the study catalog
//!
//! This module defines the core data structures for chapters of study
//! material. Each chapter carries three item categories (vocabulary, kanji,
//! phrases) with a unified borrowed view over them for browsing, flashcards,
//! and quizzes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a chapter within a catalog
pub type ChapterId = u32;

/// A vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    /// The word in Japanese script
    pub japanese: String,
    /// Kana reading
    pub reading: String,
    /// English meaning
    pub english: String,
    /// Part of speech or usage tag (e.g., "noun", "u-verb")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub word_type: Option<String>,
}

/// A kanji entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiItem {
    /// The character itself
    pub character: String,
    /// On'yomi (Sino-Japanese reading)
    pub onyomi: String,
    /// Kun'yomi (native reading)
    pub kunyomi: String,
    /// English meaning
    pub meaning: String,
    /// Example compounds using this character
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

/// A phrase entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseItem {
    /// The phrase in Japanese
    pub japanese: String,
    /// English translation
    pub english: String,
    /// Usage notes (politeness level, context)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A chapter of study material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Unique identifier (also the display number)
    pub id: ChapterId,
    /// English title
    pub title: String,
    /// Japanese title
    #[serde(rename = "titleJp", default)]
    pub title_jp: String,
    /// Vocabulary items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vocabulary: Vec<VocabItem>,
    /// Kanji items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kanji: Vec<KanjiItem>,
    /// Phrase items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phrases: Vec<PhraseItem>,
}

impl Chapter {
    /// Number of items in a single category
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Vocabulary => self.vocabulary.len(),
            Category::Kanji => self.kanji.len(),
            Category::Phrases => self.phrases.len(),
        }
    }

    /// Total number of items across all categories
    pub fn item_count(&self) -> usize {
        Category::ALL.iter().map(|&c| self.count(c)).sum()
    }

    /// Borrowed views over every item in a category, in catalog order
    pub fn items(&self, category: Category) -> Vec<ItemRef<'_>> {
        match category {
            Category::Vocabulary => self.vocabulary.iter().map(ItemRef::Vocab).collect(),
            Category::Kanji => self.kanji.iter().map(ItemRef::Kanji).collect(),
            Category::Phrases => self.phrases.iter().map(ItemRef::Phrase).collect(),
        }
    }

    /// A single item by category and position
    pub fn item(&self, category: Category, index: usize) -> Option<ItemRef<'_>> {
        match category {
            Category::Vocabulary => self.vocabulary.get(index).map(ItemRef::Vocab),
            Category::Kanji => self.kanji.get(index).map(ItemRef::Kanji),
            Category::Phrases => self.phrases.get(index).map(ItemRef::Phrase),
        }
    }
}

/// The three item categories within a chapter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The default tab when entering a chapter
    #[default]
    Vocabulary,
    Kanji,
    Phrases,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Vocabulary, Category::Kanji, Category::Phrases];

    /// Stable lowercase name, used in item keys and persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vocabulary => "vocabulary",
            Category::Kanji => "kanji",
            Category::Phrases => "phrases",
        }
    }

    /// Capitalized label for tabs and headings
    pub fn label(&self) -> &'static str {
        match self {
            Category::Vocabulary => "Vocabulary",
            Category::Kanji => "Kanji",
            Category::Phrases => "Phrases",
        }
    }

    /// Parse a stable name back to a category
    pub fn parse(name: &str) -> Option<Category> {
        match name {
            "vocabulary" => Some(Category::Vocabulary),
            "kanji" => Some(Category::Kanji),
            "phrases" => Some(Category::Phrases),
            _ => None,
        }
    }

    /// The next category in display order, wrapping around
    pub fn next(&self) -> Category {
        match self {
            Category::Vocabulary => Category::Kanji,
            Category::Kanji => Category::Phrases,
            Category::Phrases => Category::Vocabulary,
        }
    }

    /// The previous category in display order, wrapping around
    pub fn prev(&self) -> Category {
        match self {
            Category::Vocabulary => Category::Phrases,
            Category::Kanji => Category::Vocabulary,
            Category::Phrases => Category::Kanji,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed view over any item kind
///
/// Sessions and the quiz engine work with positions into a chapter's
/// category list and resolve them through this type, so catalog items are
/// never copied.
#[derive(Debug, Clone, Copy)]
pub enum ItemRef<'a> {
    Vocab(&'a VocabItem),
    Kanji(&'a KanjiItem),
    Phrase(&'a PhraseItem),
}

impl<'a> ItemRef<'a> {
    /// The category this item belongs to
    pub fn category(&self) -> Category {
        match self {
            ItemRef::Vocab(_) => Category::Vocabulary,
            ItemRef::Kanji(_) => Category::Kanji,
            ItemRef::Phrase(_) => Category::Phrases,
        }
    }

    /// The identity field: the Japanese text for vocabulary and phrases,
    /// the character for kanji. Items with equal identities are treated as
    /// the same answer by the quiz engine.
    pub fn identity(&self) -> &'a str {
        match self {
            ItemRef::Vocab(v) => &v.japanese,
            ItemRef::Kanji(k) => &k.character,
            ItemRef::Phrase(p) => &p.japanese,
        }
    }

    /// The Japanese-side display text (same as the identity)
    pub fn japanese_text(&self) -> &'a str {
        self.identity()
    }

    /// The English-side display text
    pub fn english_text(&self) -> &'a str {
        match self {
            ItemRef::Vocab(v) => &v.english,
            ItemRef::Kanji(k) => &k.meaning,
            ItemRef::Phrase(p) => &p.english,
        }
    }

    /// Reading line for cards and option hints: the kana reading for
    /// vocabulary, both readings for kanji, nothing for phrases
    pub fn reading_summary(&self) -> Option<String> {
        match self {
            ItemRef::Vocab(v) => Some(v.reading.clone()),
            ItemRef::Kanji(k) => Some(format!("{} / {}", k.onyomi, k.kunyomi)),
            ItemRef::Phrase(_) => None,
        }
    }

    /// Part-of-speech tag, vocabulary only
    pub fn word_type(&self) -> Option<&'a str> {
        match self {
            ItemRef::Vocab(v) => v.word_type.as_deref(),
            _ => None,
        }
    }

    /// Usage notes, phrases only
    pub fn notes(&self) -> Option<&'a str> {
        match self {
            ItemRef::Phrase(p) => p.notes.as_deref(),
            _ => None,
        }
    }

    /// Example compounds, kanji only
    pub fn examples(&self) -> &'a [String] {
        match self {
            ItemRef::Kanji(k) => &k.examples,
            _ => &[],
        }
    }

    /// Case-insensitive substring match over every textual field.
    /// An empty or whitespace-only query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.search_text().to_lowercase().contains(&query)
    }

    fn search_text(&self) -> String {
        match self {
            ItemRef::Vocab(v) => {
                let mut fields = vec![v.japanese.as_str(), v.reading.as_str(), v.english.as_str()];
                if let Some(word_type) = v.word_type.as_deref() {
                    fields.push(word_type);
                }
                fields.join(" ")
            }
            ItemRef::Kanji(k) => {
                let mut fields = vec![
                    k.character.as_str(),
                    k.onyomi.as_str(),
                    k.kunyomi.as_str(),
                    k.meaning.as_str(),
                ];
                fields.extend(k.examples.iter().map(String::as_str));
                fields.join(" ")
            }
            ItemRef::Phrase(p) => {
                let mut fields = vec![p.japanese.as_str(), p.english.as_str()];
                if let Some(notes) = p.notes.as_deref() {
                    fields.push(notes);
                }
                fields.join(" ")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_chapter() -> Chapter {
        Chapter {
            id: 1,
            title: "New Friends".into(),
            title_jp: "あたらしいともだち".into(),
            vocabulary: vec![
                VocabItem {
                    japanese: "がくせい".into(),
                    reading: "がくせい".into(),
                    english: "student".into(),
                    word_type: Some("noun".into()),
                },
                VocabItem {
                    japanese: "せんせい".into(),
                    reading: "せんせい".into(),
                    english: "teacher".into(),
                    word_type: None,
                },
            ],
            kanji: vec![KanjiItem {
                character: "人".into(),
                onyomi: "ジン、ニン".into(),
                kunyomi: "ひと".into(),
                meaning: "person".into(),
                examples: vec!["日本人 (にほんじん) - Japanese person".into()],
            }],
            phrases: vec![PhraseItem {
                japanese: "はじめまして".into(),
                english: "Nice to meet you".into(),
                notes: Some("Used when meeting someone for the first time".into()),
            }],
        }
    }

    #[test]
    fn chapter_counts() {
        let chapter = sample_chapter();
        assert_eq!(chapter.count(Category::Vocabulary), 2);
        assert_eq!(chapter.count(Category::Kanji), 1);
        assert_eq!(chapter.count(Category::Phrases), 1);
        assert_eq!(chapter.item_count(), 4);
    }

    #[test]
    fn item_lookup_by_position() {
        let chapter = sample_chapter();
        let item = chapter.item(Category::Vocabulary, 1).unwrap();
        assert_eq!(item.identity(), "せんせい");
        assert!(chapter.item(Category::Vocabulary, 2).is_none());
        assert!(chapter.item(Category::Kanji, 5).is_none());
    }

    #[test]
    fn identity_per_category() {
        let chapter = sample_chapter();
        assert_eq!(chapter.item(Category::Vocabulary, 0).unwrap().identity(), "がくせい");
        assert_eq!(chapter.item(Category::Kanji, 0).unwrap().identity(), "人");
        assert_eq!(chapter.item(Category::Phrases, 0).unwrap().identity(), "はじめまして");
    }

    #[test]
    fn reading_summary_per_category() {
        let chapter = sample_chapter();
        let kanji = chapter.item(Category::Kanji, 0).unwrap();
        assert_eq!(kanji.reading_summary().as_deref(), Some("ジン、ニン / ひと"));
        let phrase = chapter.item(Category::Phrases, 0).unwrap();
        assert_eq!(phrase.reading_summary(), None);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let chapter = sample_chapter();
        let vocab = chapter.item(Category::Vocabulary, 0).unwrap();
        assert!(vocab.matches("STUD"));
        assert!(vocab.matches("がく"));
        assert!(!vocab.matches("teacher"));

        let kanji = chapter.item(Category::Kanji, 0).unwrap();
        assert!(kanji.matches("にほんじん"));

        // Empty and whitespace-only queries match everything.
        assert!(vocab.matches(""));
        assert!(vocab.matches("   "));
    }

    #[test]
    fn category_cycle_wraps() {
        assert_eq!(Category::Vocabulary.next(), Category::Kanji);
        assert_eq!(Category::Phrases.next(), Category::Vocabulary);
        assert_eq!(Category::Vocabulary.prev(), Category::Phrases);
        for category in Category::ALL {
            assert_eq!(category.next().prev(), category);
        }
    }

    #[test]
    fn category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("grammar"), None);
    }

    #[test]
    fn chapter_deserializes_original_field_names() {
        let json = r#"{
            "id": 3,
            "title": "Making a Date",
            "titleJp": "デートのやくそく",
            "vocabulary": [
                {"japanese": "えいが", "reading": "えいが", "english": "movie", "type": "noun"}
            ]
        }"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.id, 3);
        assert_eq!(chapter.title_jp, "デートのやくそく");
        assert_eq!(chapter.vocabulary[0].word_type.as_deref(), Some("noun"));
        assert!(chapter.kanji.is_empty());
        assert!(chapter.phrases.is_empty());
    }
}
