//! Key hint footer line

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::session::{Session, View};
use crate::theme::Theme;

/// Key hints for the current view as (key, label) pairs
fn hints(session: &Session) -> Vec<(&'static str, &'static str)> {
    if session.view == View::Progress && session.reset_armed {
        return vec![("[y]", "reset"), ("[n]", "keep")];
    }
    if session.view == View::Browse && session.browse.search_active {
        return vec![("[Enter]", "apply"), ("[Esc]", "clear")];
    }

    match session.view {
        View::Home => {
            vec![("[j/k]", "move"), ("[Enter]", "open"), ("[p]", "progress"), ("[q]", "quit")]
        }
        View::Chapter => vec![
            ("[Tab]", "category"),
            ("[b]", "browse"),
            ("[f]", "flashcards"),
            ("[1/2]", "quiz"),
            ("[Esc]", "back"),
        ],
        View::Browse => vec![
            ("[j/k]", "move"),
            ("[/]", "search"),
            ("[t]", "translations"),
            ("[Tab]", "category"),
            ("[Esc]", "back"),
        ],
        View::Flashcards => vec![
            ("[Space]", "flip"),
            ("[h/l]", "prev/next"),
            ("[y]", "know it"),
            ("[n]", "practice"),
            ("[s]", "shuffle"),
            ("[Esc]", "back"),
        ],
        View::Quiz => {
            let answered = session.quiz.as_ref().is_some_and(|quiz| quiz.outcome.is_some());
            if answered {
                vec![("[Enter]", "next"), ("[Esc]", "leave")]
            } else {
                vec![("[j/k]", "select"), ("[Enter]", "answer"), ("[Esc]", "leave")]
            }
        }
        View::QuizComplete => vec![("[r]", "retry"), ("[Enter]", "back to chapter")],
        View::Progress => vec![("[r]", "reset progress"), ("[Esc]", "back"), ("[q]", "quit")],
    }
}

/// Draw the hint line at the bottom of the screen
pub fn draw(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints(session) {
        spans.push(Span::styled(key, Style::default().fg(theme.fg_muted)));
        spans.push(Span::styled(format!(" {}  ", label), Style::default().fg(theme.fg_secondary)));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
