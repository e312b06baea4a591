//! Key handling
//!
//! Keys mean different things on different views, so the mapping takes the
//! current view. While the browse search prompt is capturing keys the app
//! shell feeds them straight into the query and this mapping never runs.

use crossterm::event::KeyCode;

use crate::session::View;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,
    Select,
    Back,
    GoHome,
    GoProgress,
    Quit,

    // Chapter view
    NextCategory,
    PrevCategory,
    StartBrowse,
    StartFlashcards,
    StartQuizJpEn,
    StartQuizEnJp,

    // Browse
    StartSearch,
    ToggleTranslations,

    // Flashcards
    FlipCard,
    NextCard,
    PrevCard,
    ShuffleCards,
    RateKnown,
    RatePractice,

    // Quiz results
    RestartQuiz,

    // Progress
    ArmReset,
    ConfirmReset,
    CancelReset,
}

/// Map a key press to an action for the current view
pub fn action_for(view: View, reset_armed: bool, key: KeyCode) -> Option<Action> {
    // An armed reset confirmation swallows everything until answered.
    if view == View::Progress && reset_armed {
        return match key {
            KeyCode::Char('y') => Some(Action::ConfirmReset),
            KeyCode::Char('n') | KeyCode::Esc => Some(Action::CancelReset),
            _ => None,
        };
    }

    // View bindings shadow the global ones below.
    let local = match view {
        View::Home => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
            KeyCode::Enter => Some(Action::Select),
            _ => None,
        },
        View::Chapter => match key {
            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextCategory),
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevCategory),
            KeyCode::Char('b') => Some(Action::StartBrowse),
            KeyCode::Char('f') => Some(Action::StartFlashcards),
            KeyCode::Char('1') => Some(Action::StartQuizJpEn),
            KeyCode::Char('2') => Some(Action::StartQuizEnJp),
            _ => None,
        },
        View::Browse => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
            KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
            KeyCode::Char('/') => Some(Action::StartSearch),
            KeyCode::Char('t') => Some(Action::ToggleTranslations),
            KeyCode::Tab => Some(Action::NextCategory),
            KeyCode::BackTab => Some(Action::PrevCategory),
            _ => None,
        },
        View::Flashcards => match key {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::FlipCard),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextCard),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevCard),
            KeyCode::Char('s') => Some(Action::ShuffleCards),
            KeyCode::Char('y') => Some(Action::RateKnown),
            KeyCode::Char('n') => Some(Action::RatePractice),
            _ => None,
        },
        View::Quiz => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
            _ => None,
        },
        View::QuizComplete => match key {
            KeyCode::Char('r') => Some(Action::RestartQuiz),
            KeyCode::Enter => Some(Action::Back),
            _ => None,
        },
        View::Progress => match key {
            KeyCode::Char('r') => Some(Action::ArmReset),
            _ => None,
        },
    };

    local.or(match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('H') => Some(Action::GoHome),
        KeyCode::Char('p') => Some(Action::GoProgress),
        KeyCode::Esc => Some(Action::Back),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_enter_selects() {
        assert_eq!(action_for(View::Home, false, KeyCode::Enter), Some(Action::Select));
        assert_eq!(action_for(View::Home, false, KeyCode::Char('j')), Some(Action::Down));
        assert_eq!(action_for(View::Home, false, KeyCode::Char('k')), Some(Action::Up));
    }

    #[test]
    fn chapter_keys_launch_modes() {
        assert_eq!(action_for(View::Chapter, false, KeyCode::Char('b')), Some(Action::StartBrowse));
        assert_eq!(
            action_for(View::Chapter, false, KeyCode::Char('f')),
            Some(Action::StartFlashcards)
        );
        assert_eq!(
            action_for(View::Chapter, false, KeyCode::Char('1')),
            Some(Action::StartQuizJpEn)
        );
        assert_eq!(
            action_for(View::Chapter, false, KeyCode::Char('2')),
            Some(Action::StartQuizEnJp)
        );
        assert_eq!(action_for(View::Chapter, false, KeyCode::Tab), Some(Action::NextCategory));
        assert_eq!(action_for(View::Chapter, false, KeyCode::BackTab), Some(Action::PrevCategory));
    }

    #[test]
    fn browse_search_and_toggle() {
        assert_eq!(action_for(View::Browse, false, KeyCode::Char('/')), Some(Action::StartSearch));
        assert_eq!(
            action_for(View::Browse, false, KeyCode::Char('t')),
            Some(Action::ToggleTranslations)
        );
        assert_eq!(action_for(View::Browse, false, KeyCode::Char('G')), Some(Action::Bottom));
    }

    #[test]
    fn flashcard_keys() {
        assert_eq!(action_for(View::Flashcards, false, KeyCode::Char(' ')), Some(Action::FlipCard));
        assert_eq!(action_for(View::Flashcards, false, KeyCode::Enter), Some(Action::FlipCard));
        assert_eq!(action_for(View::Flashcards, false, KeyCode::Char('l')), Some(Action::NextCard));
        assert_eq!(action_for(View::Flashcards, false, KeyCode::Char('h')), Some(Action::PrevCard));
        assert_eq!(
            action_for(View::Flashcards, false, KeyCode::Char('y')),
            Some(Action::RateKnown)
        );
        assert_eq!(
            action_for(View::Flashcards, false, KeyCode::Char('n')),
            Some(Action::RatePractice)
        );
    }

    #[test]
    fn quiz_enter_selects() {
        assert_eq!(action_for(View::Quiz, false, KeyCode::Enter), Some(Action::Select));
        assert_eq!(action_for(View::Quiz, false, KeyCode::Char('j')), Some(Action::Down));
    }

    #[test]
    fn results_restart() {
        assert_eq!(
            action_for(View::QuizComplete, false, KeyCode::Char('r')),
            Some(Action::RestartQuiz)
        );
        assert_eq!(action_for(View::QuizComplete, false, KeyCode::Enter), Some(Action::Back));
    }

    #[test]
    fn armed_reset_swallows_other_keys() {
        assert_eq!(
            action_for(View::Progress, true, KeyCode::Char('y')),
            Some(Action::ConfirmReset)
        );
        assert_eq!(action_for(View::Progress, true, KeyCode::Char('n')), Some(Action::CancelReset));
        assert_eq!(action_for(View::Progress, true, KeyCode::Esc), Some(Action::CancelReset));
        assert_eq!(action_for(View::Progress, true, KeyCode::Char('q')), None);
        assert_eq!(action_for(View::Progress, true, KeyCode::Char('r')), None);
    }

    #[test]
    fn globals_apply_when_not_shadowed() {
        assert_eq!(action_for(View::Home, false, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for(View::Browse, false, KeyCode::Char('p')), Some(Action::GoProgress));
        assert_eq!(action_for(View::Quiz, false, KeyCode::Char('H')), Some(Action::GoHome));
        assert_eq!(action_for(View::Quiz, false, KeyCode::Esc), Some(Action::Back));
    }

    #[test]
    fn flashcard_rating_shadows_nothing_global() {
        // 'n' rates the card rather than doing anything global.
        assert_eq!(
            action_for(View::Flashcards, false, KeyCode::Char('n')),
            Some(Action::RatePractice)
        );
        // 'q' still quits from the deck.
        assert_eq!(action_for(View::Flashcards, false, KeyCode::Char('q')), Some(Action::Quit));
    }

    #[test]
    fn unknown_key_maps_to_nothing() {
        assert_eq!(action_for(View::Home, false, KeyCode::Char('x')), None);
        assert_eq!(action_for(View::Quiz, false, KeyCode::F(5)), None);
    }
}
