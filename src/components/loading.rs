//! Loading screen component
//!
//! Shown while the dataset is fetched, and as the persistent error screen
//! when the fetch fails.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Headline of the error screen
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load country data. Please try again later.";

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the screen is showing
#[derive(Debug, Clone, PartialEq)]
enum LoadingView {
    Waiting { source: String, elapsed: Duration },
    Failed { reason: String, detail: String },
}

/// Loading / load-failure screen
pub struct LoadingScreen {
    view: LoadingView,
}

impl LoadingScreen {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            view: LoadingView::Waiting {
                source: source.into(),
                elapsed: Duration::ZERO,
            },
        }
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        if let LoadingView::Waiting { elapsed: current, .. } = &mut self.view {
            *current = elapsed;
        }
    }

    /// Switch to the error screen; there is no way back
    pub fn fail(&mut self, reason: &str, detail: &str) {
        self.view = LoadingView::Failed {
            reason: reason.to_string(),
            detail: detail.to_string(),
        };
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.view, LoadingView::Failed { .. })
    }

    fn logo() -> [&'static str; 7] {
        [
            "     _____     ",
            "   /  __  \\   ",
            "  |  /  \\_ |  ",
            "  | |  ___)|  ",
            "  |  \\_/   |  ",
            "   \\______/   ",
            "              ",
        ]
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        match &self.view {
            LoadingView::Waiting { source, elapsed } => {
                let frame = SPINNER[(elapsed.as_millis() / 100) as usize % SPINNER.len()];
                vec![
                    Line::from(vec![
                        Span::styled(format!("{} ", frame), Style::default().fg(Color::Cyan)),
                        Span::styled(
                            "Loading country data...",
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("{} ({:.1}s)", source, elapsed.as_secs_f64()),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(""),
                    Line::from(Span::styled("q to quit", Style::default().fg(Color::DarkGray))),
                ]
            }
            LoadingView::Failed { reason, detail } => vec![
                Line::from(Span::styled(
                    LOAD_FAILED_MESSAGE,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(reason.clone(), Style::default().fg(Color::Yellow))),
                Line::from(Span::styled(detail.clone(), Style::default().fg(Color::DarkGray))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press q to quit",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        }
    }
}

impl Component for LoadingScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::ForceQuit),
            KeyCode::Esc | KeyCode::Enter if self.is_failed() => Some(Action::ForceQuit),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default(), area);

        let logo = Self::logo();
        let body = self.body_lines();
        let content_height = (logo.len() + 2 + body.len()) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(content_height) / 2),
                Constraint::Length(logo.len() as u16),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo_color = if self.is_failed() { Color::Red } else { Color::Cyan };
        let logo_lines: Vec<Line> = logo
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(logo_color))))
            .collect();
        frame.render_widget(Paragraph::new(logo_lines).alignment(Alignment::Center), chunks[1]);

        let title = Line::from(vec![
            Span::styled(
                "countries",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("-tui", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]);
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[2]);

        frame.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[4],
        );
        Ok(())
    }
}
