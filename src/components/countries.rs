//! Countries panel - filter toolbar, card grid and pagination bar

use crate::components::layout::{first_visible_row, grid_cells, truncate_to_width};
use crate::controller::Controller;
use crate::model::PageButton;
use crate::projection::CountryCard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Narrowest card before the grid drops a column
const MIN_CARD_WIDTH: u16 = 30;
const MAX_COLUMNS: u16 = 5;
/// Border plus four value lines
const CARD_HEIGHT: u16 = 6;

pub fn draw_countries_panel(
    frame: &mut Frame,
    area: Rect,
    controller: &Controller,
    cursor: usize,
    searching: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_toolbar(frame, chunks[0], controller, searching);

    let views = controller.views();
    if views.cards.is_empty() {
        render_no_results(frame, chunks[1]);
    } else {
        render_cards(frame, chunks[1], &views.cards, cursor);
    }

    let pagination = Paragraph::new(pagination_line(&views.page.buttons))
        .alignment(Alignment::Center);
    frame.render_widget(pagination, chunks[2]);
}

fn render_toolbar(frame: &mut Frame, area: Rect, controller: &Controller, searching: bool) {
    let query = controller.query();
    let value_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::DarkGray);

    let search = if searching {
        format!("{}_", query.search_text)
    } else if query.search_text.is_empty() {
        "-".to_string()
    } else {
        query.search_text.clone()
    };
    let or_all = |value: &str, all: &'static str| {
        if value.is_empty() {
            all.to_string()
        } else {
            value.to_string()
        }
    };

    let line = Line::from(vec![
        Span::styled("Search: ", label_style),
        Span::styled(
            search,
            if searching {
                Style::default().fg(Color::Cyan)
            } else {
                value_style
            },
        ),
        Span::styled("  Region: ", label_style),
        Span::styled(or_all(&query.region, "All Regions"), value_style),
        Span::styled("  Subregion: ", label_style),
        Span::styled(or_all(&query.subregion, "All Subregions"), value_style),
        Span::styled("  Sort: ", label_style),
        Span::styled(query.sort_key.label(), value_style),
    ]);

    let shown = controller.views().filtered.len();
    let title = if query.is_default() {
        format!(" Countries ({}) ", shown)
    } else {
        format!(" Countries ({}, filtered) ", shown)
    };
    let toolbar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(toolbar, area);
}

fn render_no_results(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No countries found matching your criteria.",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "Press x to reset the filters.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

/// Columns that fit in `width`
fn column_count(width: u16) -> u16 {
    (width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS)
}

fn render_cards(frame: &mut Frame, area: Rect, cards: &[CountryCard], cursor: usize) {
    let columns = column_count(area.width) as usize;
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let first_row = first_visible_row(cursor / columns, visible_rows);

    let cells = grid_cells(
        Rect::new(area.x, area.y, area.width, (visible_rows as u16 * CARD_HEIGHT).min(area.height)),
        columns as u16,
        visible_rows as u16,
    );

    let offset = first_row * columns;
    for (slot, (card, cell)) in cards.iter().skip(offset).zip(cells).enumerate() {
        let selected = offset + slot == cursor;
        render_card(frame, cell, card, selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CountryCard, selected: bool) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let row = |name: &'static str, text: &str| {
        let room = inner_width.saturating_sub(name.len());
        Line::from(vec![
            Span::styled(name, label),
            Span::styled(truncate_to_width(text, room), value),
        ])
    };

    let lines = vec![
        row("Capital: ", &card.capital),
        row("Population: ", &card.population),
        row("Region: ", &card.region),
        row("Area: ", &card.area),
    ];

    let border_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = format!(" {} ", truncate_to_width(&card.name, inner_width.saturating_sub(2)));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

/// Pagination bar; empty when there is at most one page
pub fn pagination_line(buttons: &[PageButton]) -> Line<'static> {
    let enabled = Style::default().fg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);

    let spans: Vec<Span<'static>> = buttons
        .iter()
        .map(|button| match *button {
            PageButton::Previous { disabled: off, .. } => {
                Span::styled(" ‹ Prev ", if off { disabled } else { enabled })
            }
            PageButton::Next { disabled: off, .. } => {
                Span::styled(" Next › ", if off { disabled } else { enabled })
            }
            PageButton::Number { page, active: true } => Span::styled(
                format!("[{}]", page),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            PageButton::Number { page, active: false } => {
                Span::styled(format!(" {} ", page), Style::default().fg(Color::White))
            }
            PageButton::Ellipsis => Span::styled(" … ", disabled),
        })
        .collect();

    Line::from(spans)
}
