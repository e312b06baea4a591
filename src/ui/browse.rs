//! Scrollable item list with search and a translation toggle

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::scroll_window;
use crate::catalog::{Catalog, ItemRef};
use crate::session::{BrowseState, Session};
use crate::theme::Theme;

/// Shown in place of the English side while translations are hidden
const HIDDEN_TEXT: &str = "· · ·";

/// Most example compounds shown for a kanji
const MAX_EXAMPLES: usize = 3;

/// Draw the browse view
pub fn draw(frame: &mut Frame, area: Rect, session: &Session, catalog: &Catalog, theme: &Theme) {
    let Some(chapter) = session.current_chapter(catalog) else {
        return;
    };
    let items = session.filtered_items(catalog);

    let block = Block::default()
        .title(format!(" {} · {} ", chapter.title, session.category.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The detail box only appears when the selection has extra content to
    // show and translations are visible.
    let selected_item = items.get(session.browse.selected).copied();
    let detail = if session.translations_hidden {
        Vec::new()
    } else {
        selected_item.map(|item| detail_lines(item, theme)).unwrap_or_default()
    };

    let mut constraints = vec![Constraint::Length(2), Constraint::Min(1)];
    if !detail.is_empty() {
        constraints.push(Constraint::Length(detail.len() as u16 + 1));
    }
    let chunks = Layout::vertical(constraints).split(inner);

    frame.render_widget(
        Paragraph::new(search_line(&session.browse, items.len(), theme)),
        chunks[0],
    );

    if items.is_empty() {
        let msg = if session.browse.query.trim().is_empty() {
            "Nothing in this category yet"
        } else {
            "No items match the search"
        };
        let msg = Paragraph::new(msg)
            .style(Style::default().fg(theme.fg_muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, chunks[1]);
        return;
    }

    let (start, end) =
        scroll_window(session.browse.selected, items.len(), chunks[1].height as usize);
    let rows: Vec<Line> = items[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            item_row(
                *item,
                start + offset == session.browse.selected,
                session.translations_hidden,
                theme,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(rows), chunks[1]);

    if let Some(detail_area) = chunks.get(2) {
        draw_detail(frame, *detail_area, detail, theme);
    }
}

/// The line above the list: the search prompt while typing, the active
/// filter once applied, or a plain item count
fn search_line<'a>(browse: &BrowseState, item_count: usize, theme: &Theme) -> Line<'a> {
    if browse.search_active {
        return Line::from(vec![
            Span::styled(format!("/{}", browse.query), Style::default().fg(theme.info)),
            // Block cursor at the end of the input
            Span::styled(" ", Style::default().bg(theme.fg_primary)),
        ]);
    }

    if !browse.query.is_empty() {
        let noun = if item_count == 1 { "match" } else { "matches" };
        return Line::from(Span::styled(
            format!("/{}  {} {}", browse.query, item_count, noun),
            Style::default().fg(theme.fg_muted),
        ));
    }

    Line::from(Span::styled(format!("{} items", item_count), Style::default().fg(theme.fg_muted)))
}

/// Build one list row; `hidden` replaces the English side with dots
fn item_row<'a>(item: ItemRef<'a>, selected: bool, hidden: bool, theme: &Theme) -> Line<'a> {
    let base = if selected {
        Style::default().bg(theme.selection)
    } else {
        Style::default()
    };
    let marker = if selected { "\u{25B8} " } else { "  " }; // ▸

    let mut spans = vec![Span::styled(marker, base.fg(theme.accent_primary))];
    spans.push(Span::styled(
        item.japanese_text(),
        base.fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
    ));
    if let Some(reading) = item.reading_summary() {
        spans.push(Span::styled(format!("  {}", reading), base.fg(theme.info)));
    }

    if hidden {
        spans.push(Span::styled(format!("  {}", HIDDEN_TEXT), base.fg(theme.fg_muted)));
    } else {
        spans.push(Span::styled(format!("  {}", item.english_text()), base.fg(theme.fg_primary)));
        if let Some(word_type) = item.word_type() {
            spans.push(Span::styled(format!("  ({})", word_type), base.fg(theme.fg_muted)));
        }
    }

    Line::from(spans)
}

/// Extra content for the selected item: example compounds for kanji,
/// usage notes for phrases. Empty for everything else.
fn detail_lines<'a>(item: ItemRef<'a>, theme: &Theme) -> Vec<Line<'a>> {
    let examples = item.examples();
    if !examples.is_empty() {
        let mut lines = vec![Line::from(Span::styled(
            "Examples",
            Style::default().fg(theme.fg_muted),
        ))];
        for example in examples.iter().take(MAX_EXAMPLES) {
            lines.push(Line::from(Span::styled(
                format!("  {}", example),
                Style::default().fg(theme.info),
            )));
        }
        return lines;
    }

    if let Some(notes) = item.notes() {
        return vec![Line::from(vec![
            Span::styled("Note  ", Style::default().fg(theme.fg_muted)),
            Span::styled(notes, Style::default().fg(theme.info)),
        ])];
    }

    Vec::new()
}

fn draw_detail(frame: &mut Frame, area: Rect, lines: Vec<Line>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
