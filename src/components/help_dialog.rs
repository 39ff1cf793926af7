//! Help dialog
//!
//! Key binding reference, one section per panel plus the dialogs.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

type Shortcut = (&'static str, &'static str);

const SECTIONS: &[(&str, &[Shortcut])] = &[
    (
        "Global",
        &[
            ("Tab", "Next panel"),
            ("Shift+Tab", "Previous panel"),
            ("?", "Show this help"),
            ("q", "Quit / close dialog"),
            ("Ctrl+c", "Quit immediately"),
        ],
    ),
    (
        "Countries",
        &[
            ("/", "Search name or capital"),
            ("r", "Filter by region"),
            ("s", "Filter by subregion"),
            ("o", "Sort order"),
            ("x", "Reset search, filters and sort"),
            ("j / k", "Next / previous card"),
            ("h / l", "Previous / next page"),
            ("1-9", "Go to page"),
            ("Enter", "Country details"),
        ],
    ),
    (
        "Flags",
        &[
            ("r", "Region"),
            ("v", "Grid or list view"),
            ("j / k", "Next / previous flag"),
            ("PgDn / PgUp", "Scroll ten flags"),
            ("g / G", "First / last flag"),
            ("/", "Search flags by name"),
        ],
    ),
    ("Compare", &[("a", "First country"), ("b", "Second country")]),
    ("Statistics", &[("c", "Country to inspect")]),
    (
        "Dialogs",
        &[
            ("j / k", "Move or scroll"),
            ("g / G", "First / last option"),
            ("Enter", "Apply"),
            ("Esc", "Cancel / finish search"),
        ],
    ),
];

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let step = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                return Ok(Some(Action::CloseModal))
            }
            KeyCode::Char('j') | KeyCode::Down => 1,
            KeyCode::Char('k') | KeyCode::Up => -1,
            KeyCode::PageDown => 10,
            KeyCode::PageUp => -10,
            _ => 0,
        };
        self.scroll_offset = self.scroll_offset.saturating_add_signed(step);
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = help_lines();
        let height = (content.len() as u16 + 2).min(area.height.saturating_sub(2));
        let dialog_area = centered_popup(area, 60, height);
        frame.render_widget(Clear, dialog_area);

        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_bottom(Line::from(" q/Esc close ").right_aligned())
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if max_scroll > 0 {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
        Ok(())
    }
}

fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (i, (title, shortcuts)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(format!(" {}", title), heading)));
        for (key, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("   {:<11}", key), key_style),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut HelpDialog, code: KeyCode) -> Option<Action> {
        dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_every_panel_has_a_section() {
        let headings: Vec<String> = help_lines()
            .iter()
            .filter(|l| l.spans.len() == 1)
            .map(|l| l.spans[0].content.trim().to_string())
            .collect();
        for panel in ["Countries", "Flags", "Compare", "Statistics", "Dialogs"] {
            assert!(headings.iter().any(|h| h == panel), "missing {}", panel);
        }
    }

    #[test]
    fn test_scroll_does_not_underflow() {
        let mut dialog = HelpDialog::default();
        press(&mut dialog, KeyCode::Up);
        assert_eq!(dialog.scroll_offset, 0);
        press(&mut dialog, KeyCode::PageDown);
        assert_eq!(dialog.scroll_offset, 10);
        assert_eq!(press(&mut dialog, KeyCode::Char('?')), Some(Action::CloseModal));
    }
}
