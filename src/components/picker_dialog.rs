//! Option picker dialog
//!
//! Single-select list used for every dropdown-style choice: region,
//! subregion, sort key, flag region and the country selectors.

use crate::action::Action;
use crate::component::Component;
use crate::model::modal::PickerKind;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Option picker dialog
pub struct PickerDialog {
    pub kind: PickerKind,
    /// Selectable values, after the optional clear entry
    pub options: Vec<String>,
    /// Highlighted row, counting the clear entry
    pub selected_index: usize,
    pub list_state: ListState,
    /// Value currently in effect (marked in the list)
    pub current: String,
}

impl Default for PickerDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            kind: PickerKind::Region,
            options: Vec::new(),
            selected_index: 0,
            list_state,
            current: String::new(),
        }
    }

    /// Rows before the first option (the clear entry, if any)
    fn offset(&self) -> usize {
        usize::from(self.kind.clear_label().is_some())
    }

    fn row_count(&self) -> usize {
        self.options.len() + self.offset()
    }

    /// Load options and highlight the value in effect
    pub fn open(&mut self, kind: PickerKind, options: Vec<String>, current: &str) {
        self.kind = kind;
        self.options = options;
        self.current = current.to_string();

        self.selected_index = match self.options.iter().position(|o| o == current) {
            Some(idx) => idx + self.offset(),
            None => 0,
        };
        self.list_state.select(Some(self.selected_index));
    }

    /// Value for the highlighted row; the clear entry maps to an empty string
    pub fn selected_value(&self) -> Option<String> {
        let offset = self.offset();
        if self.selected_index < offset {
            return Some(String::new());
        }
        self.options.get(self.selected_index - offset).cloned()
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.row_count() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn jump(&mut self, index: usize) {
        self.selected_index = index;
        self.list_state.select(Some(index));
    }
}

impl Component for PickerDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => self
                .selected_value()
                .map(|value| Action::ApplyPicker(self.kind, value)),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::PageUp => {
                self.jump(self.selected_index.saturating_sub(10));
                None
            }
            KeyCode::PageDown => {
                let last = self.row_count().saturating_sub(1);
                self.jump((self.selected_index + 10).min(last));
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.jump(0);
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.jump(self.row_count().saturating_sub(1));
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 50u16.min(area.width.saturating_sub(4));
        let content_height = self.row_count().max(1) as u16 + 2;
        let popup_height = (content_height + 6).min(area.height.saturating_sub(4)).max(10);

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);
        frame.render_widget(Clear, popup_area);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Options
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header_text = if self.current.is_empty() {
            self.kind.clear_label().unwrap_or("Nothing selected").to_string()
        } else {
            format!("Current: {}", self.current)
        };
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.kind.title()))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        let marker = |active: bool| {
            Span::styled(if active { "● " } else { "  " }, Style::default().fg(Color::Green))
        };

        let mut items: Vec<ListItem> = Vec::with_capacity(self.row_count());
        if let Some(clear) = self.kind.clear_label() {
            items.push(ListItem::new(Line::from(vec![
                marker(self.current.is_empty()),
                Span::styled(clear, Style::default().fg(Color::DarkGray)),
            ])));
        }
        for option in &self.options {
            let is_current = *option == self.current;
            items.push(ListItem::new(Line::from(vec![
                marker(is_current),
                Span::styled(
                    option.clone(),
                    if is_current {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ])));
        }

        if items.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No options available",
                Style::default().fg(Color::Yellow),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(empty, main_chunks[1]);
        } else {
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
            frame.render_stateful_widget(list, main_chunks[1], &mut self.list_state);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn regions() -> Vec<String> {
        vec!["Africa".into(), "Americas".into(), "Europe".into()]
    }

    #[test]
    fn test_open_highlights_current_value() {
        let mut picker = PickerDialog::new();
        picker.open(PickerKind::Region, regions(), "Europe");
        assert_eq!(picker.selected_index, 3);
        assert_eq!(picker.selected_value(), Some("Europe".to_string()));

        picker.open(PickerKind::Region, regions(), "");
        assert_eq!(picker.selected_index, 0);
        assert_eq!(picker.selected_value(), Some(String::new()));
    }

    #[test]
    fn test_sort_picker_has_no_clear_entry() {
        let mut picker = PickerDialog::new();
        picker.open(
            PickerKind::Sort,
            vec!["Name".into(), "Population".into()],
            "Population",
        );
        assert_eq!(picker.selected_index, 1);
        picker.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(picker.selected_value(), Some("Name".to_string()));
    }

    #[test]
    fn test_enter_applies_selection() {
        let mut picker = PickerDialog::new();
        picker.open(PickerKind::Region, regions(), "");
        picker.handle_key_event(key(KeyCode::Down)).unwrap();
        picker.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(
            picker.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::ApplyPicker(PickerKind::Region, "Americas".to_string()))
        );
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut picker = PickerDialog::new();
        picker.open(PickerKind::Region, regions(), "");
        for _ in 0..10 {
            // Moving is local to the dialog
            assert_eq!(picker.handle_key_event(key(KeyCode::Down)).unwrap(), None);
        }
        assert_eq!(picker.selected_index, 3);
        assert_eq!(picker.handle_key_event(key(KeyCode::Char('k'))).unwrap(), None);
        assert_eq!(picker.selected_index, 2);
        picker.handle_key_event(key(KeyCode::Home)).unwrap();
        assert_eq!(picker.selected_index, 0);
        assert_eq!(
            picker.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_empty_country_list_selects_nothing() {
        let mut picker = PickerDialog::new();
        picker.open(PickerKind::StatsCountry, Vec::new(), "");
        assert_eq!(picker.selected_value(), None);
        assert_eq!(picker.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
    }
}
