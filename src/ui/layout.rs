//! Layout utilities shared by the views

use ratatui::layout::{Constraint, Layout, Rect};

/// Create a centered rectangle with the given percentage of width and height
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Window of list rows to render so the selection stays roughly centered.
/// Returns the half-open row range.
pub(crate) fn scroll_window(selected: usize, len: usize, visible: usize) -> (usize, usize) {
    if visible == 0 {
        return (0, 0);
    }
    if len <= visible {
        return (0, len);
    }
    let start = selected.saturating_sub(visible / 2).min(len - visible);
    (start, start + visible)
}

/// Filled and empty cell counts for a percentage bar of `width` cells
pub(crate) fn bar_cells(percent: u8, width: usize) -> (usize, usize) {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    (filled, width - filled)
}
