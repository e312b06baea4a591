//! Session state machine
//!
//! A [`Session`] tracks where the user is (view, chapter, category) and the
//! state of whichever study mode is active. Transition methods mutate the
//! session and hand back a [`ViewChange`] when the view moved, so the app
//! shell can notify its hooks and decide what to persist. Rendering only
//! ever reads this state.

pub mod flashcard;
pub mod quiz_state;

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

use crate::catalog::{Catalog, Category, Chapter, ChapterId, ItemRef};
use crate::progress::{self, ProgressRecord};
use crate::quiz::{self, QuizDirection};

// Re-exports
pub use flashcard::{CardFace, CardRating, Face, FlashcardState, face_content};
pub use quiz_state::{AnswerOutcome, QuizState};

/// The screens of the app
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Chapter,
    Browse,
    Flashcards,
    Quiz,
    QuizComplete,
    Progress,
}

impl View {
    /// Stable name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Chapter => "chapter",
            View::Browse => "browse",
            View::Flashcards => "flashcards",
            View::Quiz => "quiz",
            View::QuizComplete => "quiz-complete",
            View::Progress => "progress",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completed view transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewChange {
    pub from: View,
    pub to: View,
}

/// What happened when the session moved past an answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAdvance {
    /// A new question is up
    NextQuestion,
    /// That was the last question; the session moved to the results view
    Completed { percent: u8, change: ViewChange },
}

/// State for the browse list
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    /// Selected row among the filtered items
    pub selected: usize,
    /// Whether the search prompt is capturing keys
    pub search_active: bool,
    /// Current search query
    pub query: String,
}

impl BrowseState {
    /// Open the search prompt, keeping any existing query for editing
    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    /// Keep the query as the active filter and stop capturing keys
    pub fn commit_search(&mut self) {
        self.search_active = false;
    }

    /// Drop the query and stop capturing keys
    pub fn cancel_search(&mut self) {
        self.search_active = false;
        self.query.clear();
        self.selected = 0;
    }

    /// Append to the query; the filtered list changes, so selection restarts
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    /// Delete the last query character
    pub fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    /// Forget the position (used when the underlying list changes)
    pub fn reset_position(&mut self) {
        self.selected = 0;
    }
}

/// Where the user is and what they're doing
#[derive(Debug, Default)]
pub struct Session {
    /// Current view
    pub view: View,

    /// Chapter being studied, once one has been selected
    pub chapter: Option<ChapterId>,

    /// Active category within the chapter
    pub category: Category,

    /// Selected row on the home chapter list
    pub home_selected: usize,

    /// Hide English translations while browsing
    pub translations_hidden: bool,

    /// Browse list state
    pub browse: BrowseState,

    /// Flashcard deck, while the flashcard view is active
    pub flashcards: Option<FlashcardState>,

    /// Quiz state, from the first question through the results view
    pub quiz: Option<QuizState>,

    /// Armed confirmation for wiping progress
    pub reset_armed: bool,
}

impl Session {
    fn go(&mut self, to: View) -> ViewChange {
        let change = ViewChange { from: self.view, to };
        self.view = to;
        change
    }

    /// The chapter currently being studied
    pub fn current_chapter<'a>(&self, catalog: &'a Catalog) -> Option<&'a Chapter> {
        self.chapter.and_then(|id| catalog.chapter(id))
    }

    /// Items of the active category, in catalog order
    pub fn category_items<'a>(&self, catalog: &'a Catalog) -> Vec<ItemRef<'a>> {
        self.current_chapter(catalog)
            .map(|chapter| chapter.items(self.category))
            .unwrap_or_default()
    }

    /// Items of the active category that match the browse query
    pub fn filtered_items<'a>(&self, catalog: &'a Catalog) -> Vec<ItemRef<'a>> {
        self.category_items(catalog)
            .into_iter()
            .filter(|item| item.matches(&self.browse.query))
            .collect()
    }

    // --- home ---

    pub fn home_up(&mut self) {
        self.home_selected = self.home_selected.saturating_sub(1);
    }

    pub fn home_down(&mut self, catalog: &Catalog) {
        if self.home_selected + 1 < catalog.chapter_count() {
            self.home_selected += 1;
        }
    }

    /// Chapter id under the home cursor
    pub fn home_chapter_id(&self, catalog: &Catalog) -> Option<ChapterId> {
        catalog.chapters.get(self.home_selected).map(|chapter| chapter.id)
    }

    /// Select a chapter and enter it. Selecting a chapter counts as study
    /// activity for the streak. Unknown ids are ignored.
    pub fn select_chapter(
        &mut self,
        catalog: &Catalog,
        record: &mut ProgressRecord,
        id: ChapterId,
        today: NaiveDate,
    ) -> Option<ViewChange> {
        if catalog.chapter(id).is_none() {
            tracing::warn!(chapter = id, "ignoring unknown chapter");
            return None;
        }
        self.chapter = Some(id);
        self.category = Category::Vocabulary;
        record.record_study_day(today);
        Some(self.go(View::Chapter))
    }

    // --- category tabs ---

    pub fn next_category(&mut self) {
        self.category = self.category.next();
        self.browse.reset_position();
    }

    pub fn prev_category(&mut self) {
        self.category = self.category.prev();
        self.browse.reset_position();
    }

    // --- browse ---

    /// Enter the browse list for the active category
    pub fn start_browse(&mut self) -> Option<ViewChange> {
        if self.chapter.is_none() {
            return None;
        }
        self.browse = BrowseState::default();
        Some(self.go(View::Browse))
    }

    pub fn browse_up(&mut self) {
        self.browse.selected = self.browse.selected.saturating_sub(1);
    }

    pub fn browse_down(&mut self, catalog: &Catalog) {
        let len = self.filtered_items(catalog).len();
        if len > 0 && self.browse.selected + 1 < len {
            self.browse.selected += 1;
        }
    }

    pub fn browse_top(&mut self) {
        self.browse.selected = 0;
    }

    pub fn browse_bottom(&mut self, catalog: &Catalog) {
        self.browse.selected = self.filtered_items(catalog).len().saturating_sub(1);
    }

    pub fn toggle_translations(&mut self) {
        self.translations_hidden = !self.translations_hidden;
    }

    // --- flashcards ---

    /// Deal the flashcard deck for the active category. An empty category
    /// deals an empty deck; every card action on it is a no-op.
    pub fn start_flashcards(&mut self, catalog: &Catalog) -> Option<ViewChange> {
        let chapter = self.current_chapter(catalog)?;
        self.flashcards = Some(FlashcardState::new(chapter.count(self.category)));
        Some(self.go(View::Flashcards))
    }

    pub fn flip_card(&mut self) {
        if let Some(deck) = self.flashcards.as_mut() {
            deck.flip();
        }
    }

    pub fn next_card(&mut self) {
        if let Some(deck) = self.flashcards.as_mut() {
            deck.advance();
        }
    }

    pub fn prev_card(&mut self) {
        if let Some(deck) = self.flashcards.as_mut() {
            deck.retreat();
        }
    }

    pub fn shuffle_cards(&mut self, rng: &mut impl Rng) {
        if let Some(deck) = self.flashcards.as_mut() {
            deck.shuffle(rng);
        }
    }

    /// Rate the current card and advance the deck. Returns true when
    /// progress changed.
    pub fn rate_card(
        &mut self,
        catalog: &Catalog,
        record: &mut ProgressRecord,
        rating: CardRating,
    ) -> bool {
        let Some(chapter) = self.current_chapter(catalog) else {
            return false;
        };
        let Some(position) = self.flashcards.as_ref().and_then(FlashcardState::current) else {
            return false;
        };
        let Some(item) = chapter.item(self.category, position) else {
            return false;
        };

        let key = progress::item_key(chapter.id, self.category, item.identity());
        match rating {
            CardRating::Known => record.mark_known(key),
            CardRating::NeedsPractice => record.mark_needs_practice(key),
        }

        if let Some(deck) = self.flashcards.as_mut() {
            deck.advance();
        }
        true
    }

    // --- quiz ---

    /// Start a quiz over the active category. An empty category is a
    /// no-op, so a quiz always has at least one question.
    pub fn start_quiz(
        &mut self,
        catalog: &Catalog,
        rng: &mut impl Rng,
        direction: QuizDirection,
    ) -> Option<ViewChange> {
        let chapter = self.current_chapter(catalog)?;
        let order = quiz::build_pool(rng, chapter.count(self.category));
        if order.is_empty() {
            tracing::debug!(category = %self.category, "no items to quiz on");
            return None;
        }

        let items = chapter.items(self.category);
        let mut state = QuizState::new(direction, order);
        if let Some(item) = state.current_item() {
            state.options = quiz::generate_options(rng, &items, item);
        }
        self.quiz = Some(state);
        Some(self.go(View::Quiz))
    }

    pub fn quiz_select_next(&mut self) {
        if let Some(quiz_state) = self.quiz.as_mut() {
            quiz_state.select_next();
        }
    }

    pub fn quiz_select_prev(&mut self) {
        if let Some(quiz_state) = self.quiz.as_mut() {
            quiz_state.select_prev();
        }
    }

    /// Grade the highlighted option against the current question. Returns
    /// true when an answer was recorded; repeat submissions are ignored.
    pub fn submit_answer(&mut self, catalog: &Catalog) -> bool {
        let Some(chapter) = self.current_chapter(catalog) else {
            return false;
        };
        let items = chapter.items(self.category);

        let Some(quiz_state) = self.quiz.as_mut() else {
            return false;
        };
        if quiz_state.outcome.is_some() {
            return false;
        }
        let Some(correct) = quiz_state.current_item() else {
            return false;
        };
        let Some(&picked) = quiz_state.options.get(quiz_state.selected) else {
            return false;
        };

        let correct_pick = quiz::is_correct(&items, picked, correct);
        if correct_pick {
            quiz_state.score += 1;
        }
        quiz_state.outcome = Some(AnswerOutcome {
            chosen: quiz_state.selected,
            correct: correct_pick,
        });
        true
    }

    /// Move past an answered question. After the last one the score is
    /// recorded and the session lands on the results view.
    pub fn advance_question(
        &mut self,
        catalog: &Catalog,
        record: &mut ProgressRecord,
        rng: &mut impl Rng,
        now: DateTime<Utc>,
    ) -> Option<QuizAdvance> {
        let Some(chapter) = self.current_chapter(catalog) else {
            return None;
        };
        let chapter_id = chapter.id;
        let category = self.category;
        let items = chapter.items(category);

        let Some(quiz_state) = self.quiz.as_mut() else {
            return None;
        };
        quiz_state.outcome?;

        quiz_state.cursor += 1;
        if let Some(item) = quiz_state.current_item() {
            quiz_state.options = quiz::generate_options(rng, &items, item);
            quiz_state.selected = 0;
            quiz_state.outcome = None;
            Some(QuizAdvance::NextQuestion)
        } else {
            let percent = quiz::score_percent(quiz_state.score, quiz_state.total());
            record.push_quiz_score(chapter_id, category, percent, now);
            tracing::info!(chapter = chapter_id, category = %category, percent, "quiz finished");
            let change = self.go(View::QuizComplete);
            Some(QuizAdvance::Completed { percent, change })
        }
    }

    /// Start a fresh quiz of the same direction from the results view
    pub fn restart_quiz(&mut self, catalog: &Catalog, rng: &mut impl Rng) -> Option<ViewChange> {
        let direction = self.quiz.as_ref()?.direction;
        self.start_quiz(catalog, rng, direction)
    }

    // --- navigation ---

    /// Step back one level: study modes return to the chapter view, the
    /// chapter and progress views return home.
    pub fn leave_mode(&mut self) -> Option<ViewChange> {
        match self.view {
            View::Browse | View::Flashcards | View::Quiz | View::QuizComplete => {
                self.flashcards = None;
                self.quiz = None;
                Some(self.go(View::Chapter))
            }
            View::Chapter => Some(self.go(View::Home)),
            View::Progress => {
                self.reset_armed = false;
                Some(self.go(View::Home))
            }
            View::Home => None,
        }
    }

    /// Jump home from anywhere, abandoning any active mode
    pub fn go_home(&mut self) -> Option<ViewChange> {
        if self.view == View::Home {
            return None;
        }
        self.flashcards = None;
        self.quiz = None;
        self.reset_armed = false;
        Some(self.go(View::Home))
    }

    /// Jump to the progress view from anywhere
    pub fn go_progress(&mut self) -> Option<ViewChange> {
        if self.view == View::Progress {
            return None;
        }
        self.flashcards = None;
        self.quiz = None;
        self.reset_armed = false;
        Some(self.go(View::Progress))
    }

    // --- reset ---

    /// Arm the reset confirmation (progress view only)
    pub fn arm_reset(&mut self) {
        if self.view == View::Progress {
            self.reset_armed = true;
        }
    }

    pub fn cancel_reset(&mut self) {
        self.reset_armed = false;
    }

    /// Wipe all progress after the user confirmed. Returns true when wiped.
    pub fn apply_reset(&mut self, record: &mut ProgressRecord) -> bool {
        if !self.reset_armed {
            return false;
        }
        record.reset();
        self.reset_armed = false;
        tracing::info!("progress reset");
        true
    }
}
