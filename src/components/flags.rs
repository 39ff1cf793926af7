//! Flag gallery panel

use crate::components::layout::{first_visible_row, grid_cells, truncate_to_width};
use crate::controller::Controller;
use crate::projection::{FlagGallery, FlagItem, FlagViewMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const TILE_WIDTH: u16 = 24;
const TILE_HEIGHT: u16 = 4;

pub fn draw_flags_panel(
    frame: &mut Frame,
    area: Rect,
    controller: &Controller,
    cursor: usize,
    searching: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let state = controller.gallery_state();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let region = if state.region.is_empty() {
        "All Regions".to_string()
    } else {
        state.region.clone()
    };
    let search = if searching {
        format!("{}_", state.search_text)
    } else if state.search_text.is_empty() {
        "-".to_string()
    } else {
        state.search_text.clone()
    };

    let mut spans = vec![
        Span::styled("Region: ", label),
        Span::styled(region, value),
        Span::styled("  View: ", label),
        Span::styled(state.view_mode.label(), value),
    ];
    if controller.flag_search_enabled() {
        spans.push(Span::styled("  Search: ", label));
        spans.push(Span::styled(search, if searching { Style::default().fg(Color::Cyan) } else { value }));
    }

    let gallery = &controller.views().gallery;
    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Flags ({}) ", gallery.len()))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, chunks[0]);

    match gallery {
        FlagGallery::RegionRequired => render_message(
            frame,
            chunks[1],
            "Please select a region to view flags.",
            "Press r to choose a region.",
        ),
        FlagGallery::NoMatches => render_message(
            frame,
            chunks[1],
            "No flags found for the current selection.",
            "Try another region or clear the search.",
        ),
        FlagGallery::Items {
            view_mode: FlagViewMode::Grid,
            items,
        } => render_grid(frame, chunks[1], items, cursor),
        FlagGallery::Items {
            view_mode: FlagViewMode::List,
            items,
        } => render_list(frame, chunks[1], items, cursor),
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, hint: &str) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// File name of a flag URL (`https://flagcdn.com/pe.svg` -> `pe.svg`)
fn flag_file(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Position line, e.g. ` 21-40 of 60  j/k PgUp/PgDn scroll `
fn position_text(first: usize, shown: usize, total: usize) -> String {
    format!(" {}-{} of {}  j/k PgUp/PgDn scroll ", first + 1, first + shown, total)
}

fn render_grid(frame: &mut Frame, area: Rect, items: &[FlagItem], cursor: usize) {
    let columns = (area.width / TILE_WIDTH).max(1);
    // Last line is kept for the position hint
    let rows = (area.height.saturating_sub(1) / TILE_HEIGHT).max(1);
    let grid_area = Rect::new(area.x, area.y, area.width, (rows * TILE_HEIGHT).min(area.height));
    let cells = grid_cells(grid_area, columns, rows);
    let capacity = cells.len();

    let cursor = cursor.min(items.len().saturating_sub(1));
    let first = first_visible_row(cursor / columns as usize, rows as usize) * columns as usize;
    let visible = &items[first.min(items.len())..];

    for (offset, (item, cell)) in visible.iter().zip(cells).enumerate() {
        let border = if first + offset == cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let width = cell.width.saturating_sub(2) as usize;
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(
                truncate_to_width(&item.name, width),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(flag_file(&item.flag), width),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(tile, cell);
    }

    if items.len() > capacity {
        let shown = visible.len().min(capacity);
        let hint = Paragraph::new(Span::styled(
            position_text(first, shown, items.len()),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right);
        let last_line = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        frame.render_widget(hint, last_line);
    }
}

fn render_list(frame: &mut Frame, area: Rect, items: &[FlagItem], cursor: usize) {
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<36}", item.name), Style::default().fg(Color::White)),
                Span::styled(item.flag.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let selected = cursor.min(items.len().saturating_sub(1));
    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_bottom(Line::from(format!(" {}/{} ", selected + 1, items.len())).right_aligned())
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    // ListState scrolls the list so the selected row stays on screen
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::country::fixtures::country;
    use crate::model::CountryStore;
    use crate::projection::FlagGalleryOptions;
    use ratatui::{backend::TestBackend, Terminal};

    fn gallery_of(n: usize) -> (CountryStore, Controller) {
        let store = CountryStore::new(
            (0..n)
                .map(|i| country(&format!("Land{:03}", i), "Asia", Some(1)))
                .collect(),
        );
        let mut controller = Controller::new(FlagGalleryOptions::default());
        controller.attach(&store);
        (store, controller)
    }

    fn render(controller: &Controller, cursor: usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| draw_flags_panel(frame, frame.area(), controller, cursor, false))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_flag_file() {
        assert_eq!(flag_file("https://flagcdn.com/pe.svg"), "pe.svg");
        assert_eq!(flag_file("pe.svg"), "pe.svg");
    }

    #[test]
    fn test_list_view_scrolls_to_cursor() {
        let (store, mut controller) = gallery_of(60);
        controller.toggle_flag_view(&store);

        let top = render(&controller, 0);
        assert!(top.contains("Land000"));
        assert!(!top.contains("Land059"));

        let bottom = render(&controller, 59);
        assert!(bottom.contains("Land059"));
        assert!(bottom.contains("60/60"));
        assert!(!bottom.contains("Land000"));
    }

    #[test]
    fn test_grid_view_scrolls_by_rows() {
        let (_store, controller) = gallery_of(60);

        let top = render(&controller, 0);
        assert!(top.contains("Land000"));
        assert!(top.contains(" of 60"));

        let bottom = render(&controller, 59);
        assert!(bottom.contains("Land059"));
        assert!(!bottom.contains("Land000"));
    }

    #[test]
    fn test_position_text() {
        assert_eq!(position_text(20, 20, 60), " 21-40 of 60  j/k PgUp/PgDn scroll ");
    }
}
