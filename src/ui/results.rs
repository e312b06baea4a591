//! Quiz results view

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::quiz::{self, ScoreBand};
use crate::session::Session;
use crate::theme::Theme;

/// Draw the results screen as a centered overlay
pub fn draw(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let Some(quiz_state) = session.quiz.as_ref() else {
        return;
    };
    let percent = quiz::score_percent(quiz_state.score, quiz_state.total());
    let band = ScoreBand::from_percent(percent);

    let overlay_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Quiz Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Complete",
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", quiz_state.direction.label(), session.category.label()),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {} correct", quiz_state.score, quiz_state.total()),
            Style::default().fg(theme.fg_primary),
        )),
        Line::from(Span::styled(
            format!("{}%", percent),
            Style::default().fg(band_color(band, theme)).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(band.message(), Style::default().fg(band_color(band, theme)))),
    ];

    if band.celebrates() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "\u{2605} \u{2605} \u{2605}", // ★ ★ ★
            Style::default().fg(theme.warning),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[r] Try again    [Enter] Back to chapter",
        Style::default().fg(theme.fg_muted),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

/// Color for a score band
fn band_color(band: ScoreBand, theme: &Theme) -> Color {
    match band {
        ScoreBand::Perfect | ScoreBand::Excellent => theme.success,
        ScoreBand::Good => theme.info,
        ScoreBand::KeepStudying => theme.warning,
    }
}
