//! Progress dashboard with study stats and per-chapter completion

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::{bar_cells, centered_rect};
use crate::catalog::Catalog;
use crate::progress::ProgressRecord;
use crate::session::Session;
use crate::theme::Theme;

/// Width of the chapter completion bars
const BAR_WIDTH: usize = 20;

/// Quiz history entries shown
const HISTORY_LIMIT: usize = 5;

/// Draw the progress dashboard
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    catalog: &Catalog,
    record: &ProgressRecord,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" Progress ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let completion_height = (catalog.chapter_count() as u16 + 2).min(10);
    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(completion_height),
        Constraint::Min(3),
    ])
    .split(inner);

    draw_stat_cards(frame, chunks[0], record, theme);
    draw_completion(frame, chunks[2], catalog, record, theme);
    draw_history(frame, chunks[3], record, theme);

    if session.reset_armed {
        draw_reset_confirm(frame, area, theme);
    }
}

/// The three stat cards across the top
fn draw_stat_cards(frame: &mut Frame, area: Rect, record: &ProgressRecord, theme: &Theme) {
    let cards = Layout::horizontal([
        Constraint::Percentage(33),
        Constraint::Percentage(34),
        Constraint::Percentage(33),
    ])
    .split(area);

    let streak_lines = vec![
        Line::from(Span::styled(
            streak_text(record.streak),
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            match record.last_study_date {
                Some(date) => format!("last studied {}", date.format("%b %-d")),
                None => "no study days yet".to_string(),
            },
            Style::default().fg(theme.fg_muted),
        )),
    ];
    draw_card(frame, cards[0], " Streak ", streak_lines, theme);

    let item_lines = vec![
        Line::from(Span::styled(
            format!("{} known", record.known_count()),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} to practice", record.practice_count()),
            Style::default().fg(theme.warning),
        )),
    ];
    draw_card(frame, cards[1], " Items ", item_lines, theme);

    let quiz_lines = vec![
        Line::from(Span::styled(
            format!("{} taken", record.quizzes_taken()),
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("average {}%", record.average_quiz_score()),
            Style::default().fg(theme.info),
        )),
    ];
    draw_card(frame, cards[2], " Quizzes ", quiz_lines, theme);
}

fn draw_card(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, theme: &Theme) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Per-chapter completion bars
fn draw_completion(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    record: &ProgressRecord,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Chapter completion",
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for chapter in &catalog.chapters {
        let percent = record.chapter_completion(chapter);
        let (filled, empty) = bar_cells(percent, BAR_WIDTH);
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:>2}. {:<16}", chapter.id, chapter.title),
                Style::default().fg(theme.fg_primary),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(theme.success)),
            Span::styled("░".repeat(empty), Style::default().fg(theme.bg_tertiary)),
            Span::styled(format!(" {:>3}%", percent), Style::default().fg(theme.fg_muted)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// The most recent quiz scores, newest first
fn draw_history(frame: &mut Frame, area: Rect, record: &ProgressRecord, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Recent quizzes",
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if record.quiz_scores.is_empty() {
        lines.push(Line::from(Span::styled(
            " No quizzes yet",
            Style::default().fg(theme.fg_muted),
        )));
    } else {
        for entry in record.quiz_scores.iter().rev().take(HISTORY_LIMIT) {
            let score_color = if entry.score >= 80 {
                theme.success
            } else if entry.score >= 60 {
                theme.info
            } else {
                theme.warning
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {}  ", entry.recorded_at.format("%Y-%m-%d")),
                    Style::default().fg(theme.fg_muted),
                ),
                Span::styled(
                    format!("Chapter {} · {}", entry.chapter, entry.category.label()),
                    Style::default().fg(theme.fg_primary),
                ),
                Span::styled(
                    format!("  {}%", entry.score),
                    Style::default().fg(score_color),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Confirmation overlay for wiping progress
fn draw_reset_confirm(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Reset Progress ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Erase all study progress?",
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Known items, quiz history, and the streak will be lost.",
            Style::default().fg(theme.fg_primary),
        )),
        Line::from(""),
        Line::from(Span::styled("[y] Reset    [n] Keep", Style::default().fg(theme.fg_muted))),
    ];

    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

/// "1 day" or "n days", with a friendly zero
fn streak_text(streak: u32) -> String {
    match streak {
        0 => "no streak yet".to_string(),
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}
