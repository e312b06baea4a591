//! Multiple-choice quiz engine
//!
//! Pure functions over a chapter's category items. Questions and options
//! are positions into the category list; the session resolves them through
//! [`ItemRef`] so nothing is copied out of the catalog. All shuffling goes
//! through a caller-supplied [`Rng`] so tests can pin the seed.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::ItemRef;

/// Upper bound on questions per quiz
pub const MAX_QUESTIONS: usize = 10;

/// Wrong options offered alongside the answer
pub const DISTRACTOR_COUNT: usize = 3;

/// Which side of an item the question shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizDirection {
    /// Question shows the Japanese side, options are English
    JapaneseToEnglish,
    /// Question shows the English side, options are Japanese
    EnglishToJapanese,
}

impl QuizDirection {
    /// Stable short name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizDirection::JapaneseToEnglish => "jp-en",
            QuizDirection::EnglishToJapanese => "en-jp",
        }
    }

    /// Label for menus and headers
    pub fn label(&self) -> &'static str {
        match self {
            QuizDirection::JapaneseToEnglish => "日本語 → English",
            QuizDirection::EnglishToJapanese => "English → 日本語",
        }
    }
}

impl fmt::Display for QuizDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the question order for a category of `item_count` items: a
/// shuffled permutation truncated to [`MAX_QUESTIONS`].
pub fn build_pool(rng: &mut impl Rng, item_count: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..item_count).collect();
    pool.shuffle(rng);
    pool.truncate(MAX_QUESTIONS);
    pool
}

/// Build the option positions for one question.
///
/// Candidates are every item whose identity differs from the answer's,
/// de-duplicated by identity; up to [`DISTRACTOR_COUNT`] of them are drawn
/// at random, the answer is added, and the result is shuffled. With a small
/// category this can legitimately return fewer than four options, but the
/// answer is always among them exactly once.
pub fn generate_options(rng: &mut impl Rng, items: &[ItemRef<'_>], correct: usize) -> Vec<usize> {
    let Some(correct_item) = items.get(correct) else {
        return Vec::new();
    };
    let correct_identity = correct_item.identity();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut distractors: Vec<usize> = (0..items.len())
        .filter(|&index| index != correct)
        .filter(|&index| items[index].identity() != correct_identity)
        .filter(|&index| seen.insert(items[index].identity()))
        .collect();

    distractors.shuffle(rng);
    distractors.truncate(DISTRACTOR_COUNT);

    let mut options = distractors;
    options.push(correct);
    options.shuffle(rng);
    options
}

/// Whether a selected option answers the question, judged by identity
/// equality rather than option position
pub fn is_correct(items: &[ItemRef<'_>], selected: usize, correct: usize) -> bool {
    match (items.get(selected), items.get(correct)) {
        (Some(sel), Some(cor)) => sel.identity() == cor.identity(),
        _ => false,
    }
}

/// Rounded percentage score; 0 for an empty quiz
pub fn score_percent(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u8
}

/// The text a question shows for an item
pub fn prompt_text<'a>(item: ItemRef<'a>, direction: QuizDirection) -> &'a str {
    match direction {
        QuizDirection::JapaneseToEnglish => item.japanese_text(),
        QuizDirection::EnglishToJapanese => item.english_text(),
    }
}

/// The text an option shows for an item (the opposite side of the prompt)
pub fn option_label<'a>(item: ItemRef<'a>, direction: QuizDirection) -> &'a str {
    match direction {
        QuizDirection::JapaneseToEnglish => item.english_text(),
        QuizDirection::EnglishToJapanese => item.japanese_text(),
    }
}

/// Reading hint shown alongside an option. Kanji options carry their
/// readings in both directions; vocabulary options carry the kana reading
/// when the Japanese side is the answer. Phrases never have one.
pub fn option_reading(item: ItemRef<'_>, direction: QuizDirection) -> Option<String> {
    match (item, direction) {
        (ItemRef::Kanji(_), _) => item.reading_summary(),
        (ItemRef::Vocab(_), QuizDirection::EnglishToJapanese) => item.reading_summary(),
        _ => None,
    }
}

/// Result tier for a finished quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Perfect,
    Excellent,
    Good,
    KeepStudying,
}

impl ScoreBand {
    /// Band for a rounded percentage score
    pub fn from_percent(percent: u8) -> ScoreBand {
        match percent {
            100.. => ScoreBand::Perfect,
            80..=99 => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            _ => ScoreBand::KeepStudying,
        }
    }

    /// Encouragement shown on the results screen
    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Perfect => "Perfect score! You're a Japanese master!",
            ScoreBand::Excellent => "Excellent work! Keep it up!",
            ScoreBand::Good => "Good effort! A little more practice will help.",
            ScoreBand::KeepStudying => "Keep studying! You'll get there!",
        }
    }

    /// Whether the results screen celebrates
    pub fn celebrates(&self) -> bool {
        matches!(self, ScoreBand::Perfect | ScoreBand::Excellent)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::{KanjiItem, VocabItem};

    fn vocab(entries: &[(&str, &str)]) -> Vec<VocabItem> {
        entries
            .iter()
            .map(|(japanese, english)| VocabItem {
                japanese: (*japanese).into(),
                reading: (*japanese).into(),
                english: (*english).into(),
                word_type: None,
            })
            .collect()
    }

    #[test]
    fn pool_truncates_to_question_cap() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = build_pool(&mut rng, 25);
        assert_eq!(pool.len(), MAX_QUESTIONS);
        assert!(pool.iter().all(|&i| i < 25));
    }

    #[test]
    fn short_pool_keeps_every_item() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = build_pool(&mut rng, 4);
        pool.sort_unstable();
        assert_eq!(pool, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_pool_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(build_pool(&mut rng, 0).is_empty());
    }

    #[test]
    fn options_include_answer_and_three_distractors() {
        let vocab = vocab(&[
            ("学生", "student"),
            ("先生", "teacher"),
            ("大学", "college"),
            ("電話", "telephone"),
            ("友だち", "friend"),
        ]);
        let items: Vec<ItemRef> = vocab.iter().map(ItemRef::Vocab).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let options = generate_options(&mut rng, &items, 2);
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|&&i| i == 2).count(), 1);
    }

    #[test]
    fn small_category_yields_short_option_list() {
        let vocab = vocab(&[("学生", "student"), ("先生", "teacher")]);
        let items: Vec<ItemRef> = vocab.iter().map(ItemRef::Vocab).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let options = generate_options(&mut rng, &items, 0);
        assert_eq!(options.len(), 2);
        assert!(options.contains(&0));
    }

    #[test]
    fn lone_item_quizzes_against_itself_only() {
        let vocab = vocab(&[("学生", "student")]);
        let items: Vec<ItemRef> = vocab.iter().map(ItemRef::Vocab).collect();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(generate_options(&mut rng, &items, 0), vec![0]);
    }

    #[test]
    fn duplicate_identities_never_appear_twice() {
        // Three entries share an identity; they must collapse to one option
        // and never stand in as distractors for each other.
        let vocab = vocab(&[
            ("学生", "student"),
            ("学生", "pupil"),
            ("学生", "schoolchild"),
            ("先生", "teacher"),
            ("大学", "college"),
        ]);
        let items: Vec<ItemRef> = vocab.iter().map(ItemRef::Vocab).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let options = generate_options(&mut rng, &items, 0);
        let identities: Vec<&str> = options.iter().map(|&i| items[i].identity()).collect();
        assert_eq!(identities.iter().filter(|&&id| id == "学生").count(), 1);
        assert_eq!(options.len(), 3); // 学生 + 先生 + 大学
    }

    #[test]
    fn out_of_bounds_answer_yields_no_options() {
        let vocab = vocab(&[("学生", "student")]);
        let items: Vec<ItemRef> = vocab.iter().map(ItemRef::Vocab).collect();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_options(&mut rng, &items, 5).is_empty());
    }

    #[test]
    fn grading_compares_identities() {
        let vocab = vocab(&[("学生", "student"), ("学生", "pupil"), ("先生", "teacher")]);
        let items: Vec<ItemRef> = vocab.iter().map(ItemRef::Vocab).collect();

        assert!(is_correct(&items, 0, 0));
        // A different entry with the same identity still counts.
        assert!(is_correct(&items, 1, 0));
        assert!(!is_correct(&items, 2, 0));
        assert!(!is_correct(&items, 9, 0));
    }

    #[test]
    fn similar_text_is_not_close_enough() {
        // 大学 contains 大; containment must not be mistaken for equality.
        let vocab = vocab(&[("大", "big"), ("大学", "college")]);
        let items: Vec<ItemRef> = vocab.iter().map(ItemRef::Vocab).collect();
        assert!(!is_correct(&items, 1, 0));
        assert!(!is_correct(&items, 0, 1));
    }

    #[test]
    fn score_percent_rounds() {
        assert_eq!(score_percent(0, 0), 0);
        assert_eq!(score_percent(0, 10), 0);
        assert_eq!(score_percent(7, 10), 70);
        assert_eq!(score_percent(1, 3), 33);
        assert_eq!(score_percent(2, 3), 67);
        assert_eq!(score_percent(10, 10), 100);
    }

    #[test]
    fn score_bands_and_messages() {
        assert_eq!(ScoreBand::from_percent(100), ScoreBand::Perfect);
        assert_eq!(ScoreBand::from_percent(99), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percent(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_percent(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percent(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percent(59), ScoreBand::KeepStudying);
        assert_eq!(ScoreBand::from_percent(0), ScoreBand::KeepStudying);

        assert_eq!(ScoreBand::Perfect.message(), "Perfect score! You're a Japanese master!");
        assert!(ScoreBand::Perfect.celebrates());
        assert!(ScoreBand::Excellent.celebrates());
        assert!(!ScoreBand::Good.celebrates());
        assert!(!ScoreBand::KeepStudying.celebrates());
    }

    #[test]
    fn prompt_and_options_use_opposite_sides() {
        let vocab = vocab(&[("学生", "student")]);
        let item = ItemRef::Vocab(&vocab[0]);

        assert_eq!(prompt_text(item, QuizDirection::JapaneseToEnglish), "学生");
        assert_eq!(option_label(item, QuizDirection::JapaneseToEnglish), "student");
        assert_eq!(prompt_text(item, QuizDirection::EnglishToJapanese), "student");
        assert_eq!(option_label(item, QuizDirection::EnglishToJapanese), "学生");
    }

    #[test]
    fn option_readings_follow_the_direction() {
        let kanji = KanjiItem {
            character: "人".into(),
            onyomi: "ジン".into(),
            kunyomi: "ひと".into(),
            meaning: "person".into(),
            examples: Vec::new(),
        };
        let kanji_ref = ItemRef::Kanji(&kanji);
        assert_eq!(
            option_reading(kanji_ref, QuizDirection::JapaneseToEnglish).as_deref(),
            Some("ジン / ひと")
        );
        assert_eq!(
            option_reading(kanji_ref, QuizDirection::EnglishToJapanese).as_deref(),
            Some("ジン / ひと")
        );

        let vocab = VocabItem {
            japanese: "学生".into(),
            reading: "がくせい".into(),
            english: "student".into(),
            word_type: None,
        };
        let vocab_ref = ItemRef::Vocab(&vocab);
        assert_eq!(option_reading(vocab_ref, QuizDirection::JapaneseToEnglish), None);
        assert_eq!(
            option_reading(vocab_ref, QuizDirection::EnglishToJapanese).as_deref(),
            Some("がくせい")
        );
    }

    proptest! {
        #[test]
        fn options_always_contain_the_answer_once(
            identities in prop::collection::vec("[a-z]{1,3}", 1..20),
            correct in any::<prop::sample::Index>(),
            seed in any::<u64>(),
        ) {
            let vocab: Vec<VocabItem> = identities
                .iter()
                .map(|id| VocabItem {
                    japanese: id.clone(),
                    reading: id.clone(),
                    english: format!("{id}-en"),
                    word_type: None,
                })
                .collect();
            let items: Vec<ItemRef> = vocab.iter().map(ItemRef::Vocab).collect();
            let correct = correct.index(items.len());
            let mut rng = StdRng::seed_from_u64(seed);

            let options = generate_options(&mut rng, &items, correct);

            // 1 + min(3, distinct other identities), answer exactly once,
            // no identity twice.
            let mut others: HashSet<&str> = identities.iter().map(String::as_str).collect();
            others.remove(items[correct].identity());
            prop_assert_eq!(options.len(), 1 + others.len().min(DISTRACTOR_COUNT));
            prop_assert_eq!(options.iter().filter(|&&i| i == correct).count(), 1);

            let distinct: HashSet<&str> = options.iter().map(|&i| items[i].identity()).collect();
            prop_assert_eq!(distinct.len(), options.len());
        }

        #[test]
        fn pool_is_a_bounded_permutation_prefix(count in 0usize..100, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let pool = build_pool(&mut rng, count);

            prop_assert_eq!(pool.len(), count.min(MAX_QUESTIONS));
            prop_assert!(pool.iter().all(|&i| i < count));
            let distinct: HashSet<usize> = pool.iter().copied().collect();
            prop_assert_eq!(distinct.len(), pool.len());
        }
    }
}
