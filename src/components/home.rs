//! Home component - Main application screen
//!
//! Displays the panel tabs, the active panel, the status line and the help
//! bar. Owns the card cursor and search-mode state; all filter and view
//! state lives in the controller.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, compare, countries, flags, statistics};
use crate::controller::Controller;
use crate::model::modal::PickerKind;
use crate::model::ui::{SearchTarget, Tab};
use crate::model::CountryStore;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Flags moved by PageUp/PageDown in the gallery
const FLAG_PAGE_STEP: isize = 10;

/// Home component for the main application view
pub struct HomeComponent {
    /// Current active tab
    pub active_tab: Tab,

    /// Search box receiving keystrokes, if any
    pub search_mode: Option<SearchTarget>,

    /// Card under the cursor, as a slot on the current page
    pub cursor: usize,

    /// Selected flag, as a position in the gallery
    pub flag_cursor: usize,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Countries,
            search_mode: None,
            cursor: 0,
            flag_cursor: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Switch to the next tab
    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
        self.search_mode = None;
    }

    /// Switch to the previous tab
    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
        self.search_mode = None;
    }

    /// Move the cursor to the next card, wrapping to the first
    pub fn next_card(&mut self, card_count: usize) {
        if card_count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor + 1) % card_count;
    }

    /// Move the cursor to the previous card, wrapping to the last
    pub fn previous_card(&mut self, card_count: usize) {
        if card_count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor + card_count - 1) % card_count;
    }

    /// Back to the first card (after the page contents change)
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn move_flag_cursor(&mut self, step: isize, flag_count: usize) {
        self.flag_cursor = self
            .flag_cursor
            .saturating_add_signed(step)
            .min(flag_count.saturating_sub(1));
    }

    /// Back to the first flag (after the gallery contents change)
    pub fn reset_flag_cursor(&mut self) {
        self.flag_cursor = 0;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self, target: SearchTarget) {
        self.search_mode = Some(target);
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = None;
    }

    fn handle_search_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        }
    }

    fn handle_tab_key_event(&self, key: KeyEvent) -> Option<Action> {
        match (self.active_tab, key.code) {
            (Tab::Countries, KeyCode::Char('/')) => {
                Some(Action::EnterSearchMode(SearchTarget::Countries))
            }
            (Tab::Countries, KeyCode::Char('r')) => Some(Action::OpenPicker(PickerKind::Region)),
            (Tab::Countries, KeyCode::Char('s')) => Some(Action::OpenPicker(PickerKind::Subregion)),
            (Tab::Countries, KeyCode::Char('o')) => Some(Action::OpenPicker(PickerKind::Sort)),
            (Tab::Countries, KeyCode::Char('x')) => Some(Action::ResetFilters),
            (Tab::Countries, KeyCode::Char('j') | KeyCode::Down) => Some(Action::NextItem),
            (Tab::Countries, KeyCode::Char('k') | KeyCode::Up) => Some(Action::PrevItem),
            (Tab::Countries, KeyCode::Char('l') | KeyCode::Right) => Some(Action::NextPage),
            (Tab::Countries, KeyCode::Char('h') | KeyCode::Left) => Some(Action::PrevPage),
            (Tab::Countries, KeyCode::Char(c @ '1'..='9')) => {
                c.to_digit(10).map(|d| Action::GoToPage(d as usize))
            }
            (Tab::Countries, KeyCode::Enter) => Some(Action::OpenCountryDetail),

            (Tab::Flags, KeyCode::Char('/')) => Some(Action::EnterSearchMode(SearchTarget::Flags)),
            (Tab::Flags, KeyCode::Char('r')) => Some(Action::OpenPicker(PickerKind::FlagRegion)),
            (Tab::Flags, KeyCode::Char('v')) => Some(Action::ToggleFlagView),
            (Tab::Flags, KeyCode::Char('j') | KeyCode::Down) => Some(Action::MoveFlagCursor(1)),
            (Tab::Flags, KeyCode::Char('k') | KeyCode::Up) => Some(Action::MoveFlagCursor(-1)),
            (Tab::Flags, KeyCode::PageDown) => Some(Action::MoveFlagCursor(FLAG_PAGE_STEP)),
            (Tab::Flags, KeyCode::PageUp) => Some(Action::MoveFlagCursor(-FLAG_PAGE_STEP)),
            (Tab::Flags, KeyCode::Char('g') | KeyCode::Home) => {
                Some(Action::MoveFlagCursor(isize::MIN))
            }
            (Tab::Flags, KeyCode::Char('G') | KeyCode::End) => {
                Some(Action::MoveFlagCursor(isize::MAX))
            }

            (Tab::Compare, KeyCode::Char('a')) => Some(Action::OpenPicker(PickerKind::CompareA)),
            (Tab::Compare, KeyCode::Char('b')) => Some(Action::OpenPicker(PickerKind::CompareB)),

            (Tab::Statistics, KeyCode::Char('c')) => {
                Some(Action::OpenPicker(PickerKind::StatsCountry))
            }

            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.search_mode.is_some() {
            return Ok(self.handle_search_key_event(key));
        }

        let action = match key.code {
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => self.handle_tab_key_event(key),
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub store: &'a CountryStore,
    pub controller: &'a Controller,
    pub loaded_at: Option<DateTime<Local>>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_tabs(frame, layout.tabs, home);

    let controller = ctx.controller;
    match home.active_tab {
        Tab::Countries => countries::draw_countries_panel(
            frame,
            layout.content,
            controller,
            home.cursor,
            home.search_mode == Some(SearchTarget::Countries),
        ),
        Tab::Flags => flags::draw_flags_panel(
            frame,
            layout.content,
            controller,
            home.flag_cursor,
            home.search_mode == Some(SearchTarget::Flags),
        ),
        Tab::Compare => compare::draw_compare_panel(frame, layout.content, controller),
        Tab::Statistics => statistics::draw_statistics_panel(frame, layout.content, controller),
    }

    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, home);

    Ok(())
}

fn render_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let all_tabs = Tab::all();
    let titles: Vec<&str> = all_tabs.iter().map(|t| t.name()).collect();
    let selected = all_tabs
        .iter()
        .position(|t| *t == home.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Text of the status line
pub fn status_text(store_len: usize, loaded_at: Option<DateTime<Local>>) -> String {
    match loaded_at {
        Some(at) => format!("loaded {} countries at {}", store_len, at.format("%H:%M:%S")),
        None => format!("{} countries", store_len),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let spans = vec![
        Span::styled(
            " countries-tui ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            status_text(ctx.store.len(), ctx.loaded_at),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_span(key: &'static str, color: Color) -> Span<'static> {
    Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let mut help_spans = if home.search_mode.is_some() {
        vec![
            key_span(" Esc/Enter ", Color::Yellow),
            Span::raw("Done  "),
            key_span(" Backspace ", Color::Cyan),
            Span::raw("Delete "),
        ]
    } else {
        vec![
            key_span(" q ", Color::Yellow),
            Span::raw("Quit "),
            key_span(" Tab ", Color::Cyan),
            Span::raw("Panel "),
        ]
    };

    if home.search_mode.is_none() {
        match home.active_tab {
            Tab::Countries => help_spans.extend([
                key_span(" / ", Color::Cyan),
                Span::raw("Search "),
                key_span(" r ", Color::Green),
                Span::raw("Region "),
                key_span(" s ", Color::Green),
                Span::raw("Subregion "),
                key_span(" o ", Color::Green),
                Span::raw("Sort "),
                key_span(" x ", Color::Magenta),
                Span::raw("Reset "),
                key_span(" h/l ", Color::Cyan),
                Span::raw("Page "),
                key_span(" Enter ", Color::Green),
                Span::raw("Details "),
            ]),
            Tab::Flags => help_spans.extend([
                key_span(" r ", Color::Green),
                Span::raw("Region "),
                key_span(" v ", Color::Green),
                Span::raw("Grid/List "),
                key_span(" j/k ", Color::Cyan),
                Span::raw("Scroll "),
                key_span(" / ", Color::Cyan),
                Span::raw("Search "),
            ]),
            Tab::Compare => help_spans.extend([
                key_span(" a ", Color::Green),
                Span::raw("First "),
                key_span(" b ", Color::Green),
                Span::raw("Second "),
            ]),
            Tab::Statistics => help_spans.extend([
                key_span(" c ", Color::Green),
                Span::raw("Country "),
            ]),
        }
        help_spans.extend([key_span(" ? ", Color::White), Span::raw("Help")]);
    }

    let paragraph = Paragraph::new(Line::from(help_spans))
        .alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}
