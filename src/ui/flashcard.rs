//! Flashcard view with a centered card

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::catalog::Catalog;
use crate::session::{Face, Session, face_content};
use crate::theme::Theme;

/// Draw the flashcard view
pub fn draw(frame: &mut Frame, area: Rect, session: &Session, catalog: &Catalog, theme: &Theme) {
    let Some(chapter) = session.current_chapter(catalog) else {
        return;
    };
    let Some(deck) = session.flashcards.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(format!(" Flashcards · {} · {} ", chapter.title, session.category.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if deck.is_empty() {
        let msg = Paragraph::new("\nNothing to review in this category")
            .style(Style::default().fg(theme.fg_muted))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, inner);
        return;
    }

    let Some(position) = deck.current() else {
        return;
    };
    let Some(item) = chapter.item(session.category, position) else {
        return;
    };
    let face = face_content(item, deck.face);

    // The card itself, centered over the view
    let card_area = centered_rect(60, 50, inner);
    frame.render_widget(Clear, card_area);

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));
    let card_inner = card_block.inner(card_area);
    frame.render_widget(card_block, card_area);

    let text_style = match deck.face {
        Face::Front => Style::default().fg(theme.accent_secondary),
        _ => Style::default().fg(theme.fg_secondary),
    }
    .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("")];
    if let Some(label) = face.label {
        lines.push(Line::from(Span::styled(label, Style::default().fg(theme.fg_muted))));
        lines.push(Line::from(""));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(face.text, text_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(face_dots(deck.face, theme));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} / {}", deck.cursor + 1, deck.len()),
        Style::default().fg(theme.fg_muted),
    )));

    let card = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(card, card_inner);
}

/// The three-dot face indicator under the card text
fn face_dots<'a>(face: Face, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for index in 0..3 {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let (dot, color) = if index == face.index() {
            ("\u{25CF}", theme.accent_primary) // ●
        } else {
            ("\u{25CB}", theme.fg_muted) // ○
        };
        spans.push(Span::styled(dot, Style::default().fg(color)));
    }
    Line::from(spans)
}
