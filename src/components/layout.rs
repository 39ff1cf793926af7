//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Main screen layout areas
pub struct MainLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(popup_x, popup_y, width, height)
}

/// Calculate main screen layout: tabs, panel, status line, help bar
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        tabs: chunks[0],
        content: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Split `area` into a `columns` x `rows` grid of equally sized cells, row-major
pub fn grid_cells(area: Rect, columns: u16, rows: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows as usize])
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns as usize])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// First grid row to show so that `cursor_row` is visible
pub fn first_visible_row(cursor_row: usize, visible_rows: usize) -> usize {
    (cursor_row + 1).saturating_sub(visible_rows.max(1))
}

/// Truncate `text` to at most `max_width` terminal columns, marking cuts with `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_stays_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));

        let small = centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(small, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_grid_cells_count() {
        let cells = grid_cells(Rect::new(0, 0, 120, 40), 4, 5);
        assert_eq!(cells.len(), 20);
        assert_eq!(cells[0].x, 0);
        assert_eq!(cells[1].y, 0);
        assert!(cells[4].y > 0);
    }

    #[test]
    fn test_first_visible_row_follows_cursor() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(4, 3), 2);
        assert_eq!(first_visible_row(4, 0), 4);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Peru", 10), "Peru");
        assert_eq!(truncate_to_width("United Kingdom", 8), "United …");
        assert_eq!(truncate_to_width("日本国", 4), "日…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
