//! Chapter overview with category tabs and the study mode menu

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::catalog::{Catalog, Category};
use crate::progress::ProgressRecord;
use crate::quiz::QuizDirection;
use crate::session::Session;
use crate::theme::Theme;

/// Draw the chapter overview
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    catalog: &Catalog,
    record: &ProgressRecord,
    theme: &Theme,
) {
    let Some(chapter) = session.current_chapter(catalog) else {
        return;
    };

    let block = Block::default()
        .title(format!(" Chapter {} ", chapter.id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {}", chapter.title),
                Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", chapter.title_jp),
                Style::default().fg(theme.accent_secondary),
            ),
        ]),
        Line::from(""),
        tab_line(session.category, theme),
        Line::from(""),
    ];

    let count = chapter.count(session.category);
    if count == 0 {
        lines.push(Line::from(Span::styled(
            " Nothing in this category yet",
            Style::default().fg(theme.fg_muted),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} items", count), Style::default().fg(theme.fg_primary)),
            Span::styled(
                format!("  {}% of the chapter known", record.chapter_completion(chapter)),
                Style::default().fg(theme.success),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));
    for (key, label) in [
        ("[b]", "Browse the list".to_string()),
        ("[f]", "Flashcards".to_string()),
        ("[1]", format!("Quiz: {}", QuizDirection::JapaneseToEnglish.label())),
        ("[2]", format!("Quiz: {}", QuizDirection::EnglishToJapanese.label())),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}", key), Style::default().fg(theme.accent_primary)),
            Span::styled(format!(" {}", label), Style::default().fg(theme.fg_primary)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Tab line with the active category highlighted
fn tab_line<'a>(active: Category, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (index, category) in Category::ALL.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.border)));
        }
        let style = if *category == active {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };
        spans.push(Span::styled(format!(" {} ", category.label()), style));
    }
    Line::from(spans)
}
