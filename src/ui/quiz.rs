//! Quiz view with the question, options, and answer feedback

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::bar_cells;
use crate::catalog::{Catalog, ItemRef};
use crate::quiz::{self, QuizDirection};
use crate::session::Session;
use crate::theme::Theme;

/// Draw the quiz view
pub fn draw(frame: &mut Frame, area: Rect, session: &Session, catalog: &Catalog, theme: &Theme) {
    let Some(quiz_state) = session.quiz.as_ref() else {
        return;
    };
    let items = session.category_items(catalog);
    let Some(correct) = quiz_state.current_item() else {
        return;
    };
    let Some(question_item) = items.get(correct).copied() else {
        return;
    };

    let block = Block::default()
        .title(format!(" Quiz · {} ", quiz_state.direction.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(4),
    ])
    .split(inner);

    draw_header(frame, chunks[0], session, theme);
    draw_prompt(frame, chunks[1], question_item, quiz_state.direction, theme);
    draw_options(frame, chunks[2], session, &items, correct, theme);
}

/// Question counter, score, and the progress bar
fn draw_header(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let Some(quiz_state) = session.quiz.as_ref() else {
        return;
    };

    let answered = quiz_state.cursor + usize::from(quiz_state.outcome.is_some());
    let percent = quiz::score_percent(answered, quiz_state.total());
    let width = area.width.saturating_sub(2) as usize;
    let (filled, empty) = bar_cells(percent, width);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(
                    " Question {} of {}",
                    quiz_state.question_number(),
                    quiz_state.total()
                ),
                Style::default().fg(theme.fg_muted),
            ),
            Span::styled(
                format!("   Score: {}", quiz_state.score),
                Style::default().fg(theme.success),
            ),
        ]),
        Line::from(vec![
            Span::raw(" "),
            Span::styled("█".repeat(filled), Style::default().fg(theme.accent_primary)),
            Span::styled("░".repeat(empty), Style::default().fg(theme.bg_tertiary)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// The prompt, large and centered
fn draw_prompt(
    frame: &mut Frame,
    area: Rect,
    item: ItemRef<'_>,
    direction: QuizDirection,
    theme: &Theme,
) {
    // The Japanese side gets the accent; the English side stays neutral.
    let style = match direction {
        QuizDirection::JapaneseToEnglish => Style::default().fg(theme.accent_secondary),
        QuizDirection::EnglishToJapanese => Style::default().fg(theme.fg_secondary),
    }
    .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(quiz::prompt_text(item, direction), style)),
    ];
    let prompt =
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(prompt, area);
}

/// The option list, with feedback colors once the question is answered
fn draw_options(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    items: &[ItemRef<'_>],
    correct: usize,
    theme: &Theme,
) {
    let Some(quiz_state) = session.quiz.as_ref() else {
        return;
    };

    let mut lines = Vec::new();
    for (position, &item_position) in quiz_state.options.iter().enumerate() {
        let Some(option_item) = items.get(item_position).copied() else {
            continue;
        };
        let letter = (b'A' + position as u8) as char;
        let label = quiz::option_label(option_item, quiz_state.direction);
        let reading = quiz::option_reading(option_item, quiz_state.direction).map(|reading| {
            Span::styled(format!("  {}", reading), Style::default().fg(theme.fg_muted))
        });

        let line = match quiz_state.outcome {
            None => {
                let selected = position == quiz_state.selected;
                let prefix = if selected { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○
                let style = if selected {
                    Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg_secondary)
                };
                let mut spans =
                    vec![Span::styled(format!("  {} {}) {}", prefix, letter, label), style)];
                spans.extend(reading);
                Line::from(spans)
            }
            Some(outcome) => {
                let is_answer = quiz::is_correct(items, item_position, correct);
                let (marker, style) = if is_answer {
                    (
                        " \u{2713}", // ✓
                        Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
                    )
                } else if position == outcome.chosen {
                    (" \u{2717}", Style::default().fg(theme.error)) // ✗
                } else {
                    ("", Style::default().fg(theme.fg_muted))
                };
                let mut spans = vec![Span::styled(format!("    {}) {}", letter, label), style)];
                spans.extend(reading);
                if !marker.is_empty() {
                    spans.push(Span::styled(marker, style));
                }
                Line::from(spans)
            }
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    if let Some(outcome) = quiz_state.outcome {
        lines.push(Line::from(""));
        if outcome.correct {
            lines.push(Line::from(Span::styled(
                "  正解! Correct!",
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "  Not quite.",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            )));
            if let Some(answer) = items.get(correct).copied() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", reveal_text(answer)),
                    Style::default().fg(theme.info),
                )));
            }
        }
    }

    let options = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(options, area);
}

/// The full answer shown after a wrong pick
fn reveal_text(item: ItemRef<'_>) -> String {
    match item.reading_summary() {
        Some(reading) => {
            format!("{} ({}) = {}", item.japanese_text(), reading, item.english_text())
        }
        None => format!("{} = {}", item.japanese_text(), item.english_text()),
    }
}
