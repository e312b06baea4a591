//! Flashcard deck state and face content

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::ItemRef;

/// Which face of the current card is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Face {
    /// The Japanese side
    #[default]
    Front,
    /// Reading for vocabulary and kanji, usage notes for phrases
    Reading,
    /// The English side
    Meaning,
}

impl Face {
    /// The next face in the flip cycle
    pub fn next(&self) -> Face {
        match self {
            Face::Front => Face::Reading,
            Face::Reading => Face::Meaning,
            Face::Meaning => Face::Front,
        }
    }

    /// Position in the cycle, for the face indicator
    pub fn index(&self) -> usize {
        match self {
            Face::Front => 0,
            Face::Reading => 1,
            Face::Meaning => 2,
        }
    }
}

/// One rendered card face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    /// Small caption above the text, absent on the front
    pub label: Option<&'static str>,
    /// The face text
    pub text: String,
}

/// What a card shows for an item on a given face.
///
/// Vocabulary cycles japanese → reading → english; kanji cycles character →
/// readings → meaning; phrases cycle japanese → notes → english, falling
/// back to the English text when a phrase has no notes.
pub fn face_content(item: ItemRef<'_>, face: Face) -> CardFace {
    match face {
        Face::Front => CardFace { label: None, text: item.japanese_text().to_owned() },
        Face::Reading => match item {
            ItemRef::Phrase(phrase) => CardFace {
                label: Some("Notes"),
                text: phrase.notes.clone().unwrap_or_else(|| phrase.english.clone()),
            },
            other => CardFace {
                label: Some("Reading"),
                text: other.reading_summary().unwrap_or_default(),
            },
        },
        Face::Meaning => CardFace { label: Some("Meaning"), text: item.english_text().to_owned() },
    }
}

/// How the user rated the card they just reviewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRating {
    Known,
    NeedsPractice,
}

/// A dealt flashcard deck over one category
#[derive(Debug, Clone, Default)]
pub struct FlashcardState {
    /// Positions into the category's item list, in deal order
    pub order: Vec<usize>,
    /// Which card is showing
    pub cursor: usize,
    /// Which face of that card is showing
    pub face: Face,
}

impl FlashcardState {
    /// Deal a deck over a category of `item_count` items, in catalog order
    pub fn new(item_count: usize) -> Self {
        Self { order: (0..item_count).collect(), cursor: 0, face: Face::Front }
    }

    /// Position of the current card's item in the category list
    pub fn current(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    /// Number of cards in the deck
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Flip to the next face of the current card
    pub fn flip(&mut self) {
        if !self.is_empty() {
            self.face = self.face.next();
        }
    }

    /// Move to the next card, stopping at the end of the deck; the new
    /// card starts on its front face
    pub fn advance(&mut self) {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
            self.face = Face::Front;
        }
    }

    /// Move to the previous card, stopping at the first
    pub fn retreat(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.face = Face::Front;
        }
    }

    /// Reshuffle the deck and start over from the first card
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.order.shuffle(rng);
        self.cursor = 0;
        self.face = Face::Front;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::{KanjiItem, PhraseItem, VocabItem};

    #[test]
    fn face_cycle_wraps() {
        assert_eq!(Face::Front.next(), Face::Reading);
        assert_eq!(Face::Reading.next(), Face::Meaning);
        assert_eq!(Face::Meaning.next(), Face::Front);
    }

    #[test]
    fn vocab_faces() {
        let item = VocabItem {
            japanese: "学生".into(),
            reading: "がくせい".into(),
            english: "student".into(),
            word_type: None,
        };
        let item = ItemRef::Vocab(&item);

        assert_eq!(face_content(item, Face::Front).text, "学生");
        let reading = face_content(item, Face::Reading);
        assert_eq!(reading.label, Some("Reading"));
        assert_eq!(reading.text, "がくせい");
        assert_eq!(face_content(item, Face::Meaning).text, "student");
    }

    #[test]
    fn kanji_reading_face_shows_both_readings() {
        let item = KanjiItem {
            character: "人".into(),
            onyomi: "ジン、ニン".into(),
            kunyomi: "ひと".into(),
            meaning: "person".into(),
            examples: vec![],
        };
        let item = ItemRef::Kanji(&item);

        assert_eq!(face_content(item, Face::Front).text, "人");
        assert_eq!(face_content(item, Face::Reading).text, "ジン、ニン / ひと");
        assert_eq!(face_content(item, Face::Meaning).text, "person");
    }

    #[test]
    fn phrase_middle_face_prefers_notes() {
        let with_notes = PhraseItem {
            japanese: "はじめまして".into(),
            english: "How do you do?".into(),
            notes: Some("First meetings".into()),
        };
        let face = face_content(ItemRef::Phrase(&with_notes), Face::Reading);
        assert_eq!(face.label, Some("Notes"));
        assert_eq!(face.text, "First meetings");

        let without_notes = PhraseItem {
            japanese: "いいですね".into(),
            english: "Sounds good".into(),
            notes: None,
        };
        let face = face_content(ItemRef::Phrase(&without_notes), Face::Reading);
        assert_eq!(face.text, "Sounds good");
    }

    #[test]
    fn navigation_clamps_at_deck_ends() {
        let mut deck = FlashcardState::new(3);
        assert_eq!(deck.current(), Some(0));

        deck.retreat();
        assert_eq!(deck.current(), Some(0)); // already on the first card

        deck.flip();
        deck.advance();
        assert_eq!(deck.current(), Some(1));
        assert_eq!(deck.face, Face::Front);

        deck.advance();
        deck.advance();
        assert_eq!(deck.current(), Some(2)); // the deck ends here

        deck.flip();
        deck.advance();
        assert_eq!(deck.current(), Some(2));
        assert_eq!(deck.face, Face::Reading); // face untouched when nothing moved
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut deck = FlashcardState::new(8);
        deck.advance();
        deck.flip();

        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle(&mut rng);

        assert_eq!(deck.cursor, 0);
        assert_eq!(deck.face, Face::Front);
        let mut order = deck.order.clone();
        order.sort_unstable();
        assert_eq!(order, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn empty_deck_ignores_everything() {
        let mut deck = FlashcardState::new(0);
        assert!(deck.is_empty());
        assert_eq!(deck.current(), None);

        deck.flip();
        deck.advance();
        deck.retreat();
        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle(&mut rng);

        assert_eq!(deck.face, Face::Front);
        assert_eq!(deck.current(), None);
    }
}
