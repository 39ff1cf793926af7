//! Country detail dialog
//!
//! Full-screen overlay with everything known about one country.

use crate::action::Action;
use crate::component::Component;
use crate::projection::CountryDetail;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

/// Detail overlay for the selected country
#[derive(Default)]
pub struct CountryDetailDialog {
    detail: Option<CountryDetail>,
    scroll: usize,
}

impl CountryDetailDialog {
    pub fn set_detail(&mut self, detail: Option<CountryDetail>) {
        self.detail = detail;
        self.scroll = 0;
    }

    fn build_lines(detail: &CountryDetail) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("Flag: ", Style::default().fg(Color::DarkGray)),
            Span::styled(detail.flag.clone(), Style::default().fg(Color::Blue)),
        ])];

        for (title, rows) in detail.sections() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "─".repeat(title.chars().count()),
                Style::default().fg(Color::DarkGray),
            )));
            for (label, value) in rows {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<15}", format!("{}:", label)),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(value.to_string(), Style::default().fg(Color::White)),
                ]));
            }
        }
        lines
    }
}

impl Component for CountryDetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 2;
        let overlay_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(overlay_area);

        let (title, content) = match &self.detail {
            Some(detail) => (format!(" {} ", detail.name), Self::build_lines(detail)),
            None => (
                " Country ".to_string(),
                vec![Line::from(Span::styled(
                    "Country not found.",
                    Style::default().fg(Color::Yellow),
                ))],
            ),
        };

        let total = content.len();
        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(title)
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, chunks[0]);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                chunks[0].inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Esc/q ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("Close  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Scroll"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);

        Ok(())
    }
}
