//! UI rendering components
//!
//! Every view draws from shared references only; all state changes happen
//! in the session before the frame is drawn.

pub mod browse;
pub mod chapter;
pub mod flashcard;
pub mod footer;
pub mod home;
pub mod layout;
pub mod progress;
pub mod quiz;
pub mod results;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Paragraph,
};

use crate::catalog::Catalog;
use crate::progress::ProgressRecord;
use crate::session::{Session, View};
use crate::theme::Theme;

/// Main draw function
pub fn draw(
    frame: &mut Frame,
    session: &Session,
    catalog: &Catalog,
    record: &ProgressRecord,
    theme: &Theme,
) {
    let area = frame.area();

    // Fill background
    frame.render_widget(Paragraph::new("").style(Style::default().bg(theme.bg_primary)), area);

    // Split vertically: current view and the key hint line
    let chunks =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    match session.view {
        View::Home => home::draw(frame, chunks[0], session, catalog, record, theme),
        View::Chapter => chapter::draw(frame, chunks[0], session, catalog, record, theme),
        View::Browse => browse::draw(frame, chunks[0], session, catalog, theme),
        View::Flashcards => flashcard::draw(frame, chunks[0], session, catalog, theme),
        View::Quiz => quiz::draw(frame, chunks[0], session, catalog, theme),
        View::QuizComplete => results::draw(frame, chunks[0], session, theme),
        View::Progress => progress::draw(frame, chunks[0], session, catalog, record, theme),
    }

    footer::draw(frame, chunks[1], session, theme);
}
