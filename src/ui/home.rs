//! Home screen with the chapter list

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::scroll_window;
use crate::catalog::Catalog;
use crate::progress::ProgressRecord;
use crate::session::Session;
use crate::theme::Theme;

/// Status indicators for chapters
const STATUS_NOT_STARTED: &str = "○";
const STATUS_IN_PROGRESS: &str = "●";
const STATUS_COMPLETED: &str = "✓";

/// Draw the home screen
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    catalog: &Catalog,
    record: &ProgressRecord,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" 言葉 Kotoba ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks =
        Layout::vertical([Constraint::Length(4), Constraint::Min(1)]).split(inner);

    draw_header(frame, chunks[0], record, theme);

    if catalog.is_empty() {
        let msg = Paragraph::new("No chapters in the catalog")
            .style(Style::default().fg(theme.fg_muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, chunks[1]);
        return;
    }

    // Chapter list with the selection highlighted
    let mut lines: Vec<Line> = Vec::new();
    for (index, chapter) in catalog.chapters.iter().enumerate() {
        let completion = record.chapter_completion(chapter);
        let selected = index == session.home_selected;

        let line = if selected {
            let text = format!(
                " {} {}. {}  {} ",
                chapter_status(completion),
                chapter.id,
                chapter.title,
                chapter.title_jp
            );
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(theme.bg_primary)
                    .bg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            let mut spans = vec![
                Span::styled(
                    format!(" {} ", chapter_status(completion)),
                    Style::default().fg(status_color(completion, theme)),
                ),
                Span::styled(
                    format!("{}. {}", chapter.id, chapter.title),
                    Style::default().fg(theme.fg_primary),
                ),
                Span::styled(
                    format!("  {}", chapter.title_jp),
                    Style::default().fg(theme.accent_secondary),
                ),
            ];
            if completion > 0 {
                spans.push(Span::styled(
                    format!("  ({}% known)", completion),
                    Style::default().fg(theme.fg_muted),
                ));
            }
            Line::from(spans)
        };
        lines.push(line);
    }

    let (start, end) =
        scroll_window(session.home_selected, lines.len(), chunks[1].height as usize);
    let visible: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();
    frame.render_widget(Paragraph::new(visible), chunks[1]);
}

/// Draw the title block and the study summary line
fn draw_header(frame: &mut Frame, area: Rect, record: &ProgressRecord, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Japanese Study",
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Vocabulary, kanji, and phrases by chapter",
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
    ];

    let mut summary = vec![Span::raw(" ")];
    if record.streak > 0 {
        summary.push(Span::styled(
            format!("{} day streak  ", record.streak),
            Style::default().fg(theme.warning),
        ));
    }
    if record.known_count() > 0 {
        summary.push(Span::styled(
            format!("{} items known", record.known_count()),
            Style::default().fg(theme.success),
        ));
    }
    if summary.len() > 1 {
        lines.push(Line::from(summary));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Status indicator for a chapter's completion percentage
fn chapter_status(completion: u8) -> &'static str {
    match completion {
        0 => STATUS_NOT_STARTED,
        100 => STATUS_COMPLETED,
        _ => STATUS_IN_PROGRESS,
    }
}

/// Color for a status indicator
fn status_color(completion: u8, theme: &Theme) -> ratatui::style::Color {
    match completion {
        0 => theme.fg_muted,
        100 => theme.success,
        _ => theme.accent_primary,
    }
}
