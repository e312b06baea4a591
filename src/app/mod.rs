//! App shell: terminal lifecycle, event loop, and action dispatch

pub mod hooks;
pub mod input;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, Utc};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::progress::ProgressRecord;
use crate::quiz::QuizDirection;
use crate::session::{CardRating, QuizAdvance, Session, View, ViewChange};
use crate::ui;
use hooks::{TransitionHook, TransitionLog};
use input::Action;

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Loaded study content, immutable for the run
    catalog: Catalog,

    /// Persisted study progress
    progress: ProgressRecord,

    /// Session state: current view and active study mode
    session: Session,

    /// Post-transition hooks, notified in registration order
    hooks: Vec<Box<dyn TransitionHook>>,

    /// Rng for deck and quiz shuffling
    rng: ThreadRng,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, catalog: Catalog) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let progress = ProgressRecord::load();

        let mut app = Self {
            config,
            catalog,
            progress,
            session: Session::default(),
            hooks: Vec::new(),
            rng: rand::rng(),
            terminal,
        };
        app.register_hook(Box::new(TransitionLog));
        Ok(app)
    }

    /// Register a post-transition hook. Hooks run in registration order.
    pub fn register_hook(&mut self, hook: Box<dyn TransitionHook>) {
        self.hooks.push(hook);
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            // Draw UI. Rendering only reads state.
            let theme = self.config.active_theme();
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.session, &self.catalog, &self.progress, &theme);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key.code) {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                            }
                        }
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if the app should exit
    fn handle_key(&mut self, key: KeyCode) -> Result<bool> {
        // The search prompt swallows keys while it is capturing.
        if self.session.view == View::Browse && self.session.browse.search_active {
            match key {
                KeyCode::Esc => self.session.browse.cancel_search(),
                KeyCode::Enter => self.session.browse.commit_search(),
                KeyCode::Backspace => self.session.browse.pop_char(),
                KeyCode::Char(c) => self.session.browse.push_char(c),
                _ => {}
            }
            return Ok(false);
        }

        let Some(action) = input::action_for(self.session.view, self.session.reset_armed, key)
        else {
            return Ok(false);
        };
        self.dispatch(action)
    }

    /// Apply an action to the session, persisting progress when it changed
    fn dispatch(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),

            Action::Back => {
                let change = self.session.leave_mode();
                self.notify(change);
            }
            Action::GoHome => {
                let change = self.session.go_home();
                self.notify(change);
            }
            Action::GoProgress => {
                let change = self.session.go_progress();
                self.notify(change);
            }

            Action::Up => match self.session.view {
                View::Home => self.session.home_up(),
                View::Browse => self.session.browse_up(),
                View::Quiz => self.session.quiz_select_prev(),
                _ => {}
            },
            Action::Down => match self.session.view {
                View::Home => self.session.home_down(&self.catalog),
                View::Browse => self.session.browse_down(&self.catalog),
                View::Quiz => self.session.quiz_select_next(),
                _ => {}
            },
            Action::Top => self.session.browse_top(),
            Action::Bottom => self.session.browse_bottom(&self.catalog),

            Action::Select => match self.session.view {
                View::Home => self.enter_selected_chapter(),
                View::Quiz => self.quiz_select(),
                _ => {}
            },

            Action::NextCategory => self.session.next_category(),
            Action::PrevCategory => self.session.prev_category(),

            Action::StartBrowse => {
                let change = self.session.start_browse();
                self.notify(change);
            }
            Action::StartFlashcards => {
                let change = self.session.start_flashcards(&self.catalog);
                self.notify(change);
            }
            Action::StartQuizJpEn => self.start_quiz(QuizDirection::JapaneseToEnglish),
            Action::StartQuizEnJp => self.start_quiz(QuizDirection::EnglishToJapanese),

            Action::StartSearch => self.session.browse.start_search(),
            Action::ToggleTranslations => self.session.toggle_translations(),

            Action::FlipCard => self.session.flip_card(),
            Action::NextCard => self.session.next_card(),
            Action::PrevCard => self.session.prev_card(),
            Action::ShuffleCards => self.session.shuffle_cards(&mut self.rng),
            Action::RateKnown => self.rate_card(CardRating::Known),
            Action::RatePractice => self.rate_card(CardRating::NeedsPractice),

            Action::RestartQuiz => {
                let change = self.session.restart_quiz(&self.catalog, &mut self.rng);
                self.notify(change);
            }

            Action::ArmReset => self.session.arm_reset(),
            Action::CancelReset => self.session.cancel_reset(),
            Action::ConfirmReset => {
                if self.session.apply_reset(&mut self.progress) {
                    self.save_progress();
                }
            }
        }
        Ok(false)
    }

    fn enter_selected_chapter(&mut self) {
        let Some(id) = self.session.home_chapter_id(&self.catalog) else {
            return;
        };
        let today = Local::now().date_naive();
        let change = self.session.select_chapter(&self.catalog, &mut self.progress, id, today);
        if change.is_some() {
            self.save_progress();
        }
        self.notify(change);
    }

    /// Enter on a quiz: grade the highlighted option, or move on once the
    /// current question has been answered
    fn quiz_select(&mut self) {
        let answered = self.session.quiz.as_ref().is_some_and(|quiz| quiz.outcome.is_some());
        if answered {
            let advance = self.session.advance_question(
                &self.catalog,
                &mut self.progress,
                &mut self.rng,
                Utc::now(),
            );
            if let Some(QuizAdvance::Completed { change, .. }) = advance {
                self.save_progress();
                self.notify(Some(change));
            }
        } else {
            self.session.submit_answer(&self.catalog);
        }
    }

    fn start_quiz(&mut self, direction: QuizDirection) {
        let change = self.session.start_quiz(&self.catalog, &mut self.rng, direction);
        self.notify(change);
    }

    fn rate_card(&mut self, rating: CardRating) {
        if self.session.rate_card(&self.catalog, &mut self.progress, rating) {
            self.save_progress();
        }
    }

    fn notify(&mut self, change: Option<ViewChange>) {
        if let Some(change) = change {
            hooks::notify_all(&mut self.hooks, &change);
        }
    }

    /// Persist progress, logging failures; studying continues regardless
    fn save_progress(&mut self) {
        if let Err(err) = self.progress.save() {
            tracing::error!("failed to save progress: {err:#}");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
