//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App coordinates between components and the controller but does not
//! filter, sort or project anything itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, CountryDetailDialog, HelpDialog, HomeComponent, HomeRenderContext,
    LoadingScreen, PickerDialog, QuitDialog,
};
use crate::config::Config;
use crate::controller::Controller;
use crate::model::modal::{Modal, ModalStack, PickerKind};
use crate::model::ui::{AppMode, SearchTarget};
use crate::model::{CountryStore, DomainState, SortKey};
use crate::projection::{ComparisonSlot, CountryDetail};
use crate::services::{DataLoader, DataSource, LoadOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Domain state (the dataset and its load lifecycle)
    pub domain: DomainState,

    /// Filter, page and selection state plus every derived view
    pub controller: Controller,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Where the dataset is read from
    pub source: DataSource,

    /// Background dataset loader
    pub loader: DataLoader,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub loading: LoadingScreen,
    pub home: HomeComponent,
    pub picker: PickerDialog,
    pub detail_dialog: CountryDetailDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app; the load starts in `init`
    pub fn new(config: &Config) -> App {
        let source = DataSource::from_config(config);
        App {
            mode: AppMode::Loading,
            domain: DomainState::new(),
            controller: Controller::new(config.gallery_options()),
            modals: ModalStack::new(),
            loading: LoadingScreen::new(source.describe()),
            source,
            loader: DataLoader::new(),
            should_quit: false,
            home: HomeComponent::new(),
            picker: PickerDialog::new(),
            detail_dialog: CountryDetailDialog::default(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    /// Apply the loader's result. Only the first outcome has any effect.
    fn resolve_load(&mut self, outcome: LoadOutcome) {
        match outcome {
            Ok(store) => {
                if !self.domain.finish_load(store) {
                    warn!("ignoring late dataset");
                    return;
                }
                if let Some(store) = self.domain.store() {
                    self.controller.attach(store);
                }
                self.mode = AppMode::Running;
            }
            Err(e) => {
                if !self.domain.fail_load(e.to_string()) {
                    return;
                }
                let detail = self.domain.error().unwrap_or_default();
                self.loading.fail(e.user_message(), detail);
                self.mode = AppMode::Failed;
            }
        }
    }

    /// Options and current value for a picker
    fn picker_options(&self, kind: PickerKind, store: &CountryStore) -> (Vec<String>, String) {
        let query = self.controller.query();
        let views = self.controller.views();
        match kind {
            PickerKind::Region => (views.regions.clone(), query.region.clone()),
            PickerKind::Subregion => (views.subregions.clone(), query.subregion.clone()),
            PickerKind::Sort => (
                SortKey::all().iter().map(|k| k.label().to_string()).collect(),
                query.sort_key.label().to_string(),
            ),
            PickerKind::FlagRegion => (
                views.regions.clone(),
                self.controller.gallery_state().region.clone(),
            ),
            PickerKind::CompareA => (
                store.names_sorted(),
                self.controller.comparison_selection().country_a.clone(),
            ),
            PickerKind::CompareB => (
                store.names_sorted(),
                self.controller.comparison_selection().country_b.clone(),
            ),
            PickerKind::StatsCountry => {
                (store.names_sorted(), self.controller.stats_country().to_string())
            }
        }
    }

    /// Actions that need the loaded dataset
    fn update_with_store(&mut self, action: Action) {
        let Some(store) = self.domain.store() else {
            debug!(%action, "ignored before the dataset is loaded");
            return;
        };

        match action {
            // ─────────────────────────────────────────────────────────────────
            // Card cursor
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => {
                let count = self.controller.views().page.items.len();
                self.home.next_card(count);
            }
            Action::PrevItem => {
                let count = self.controller.views().page.items.len();
                self.home.previous_card(count);
            }
            Action::MoveFlagCursor(step) => {
                let count = self.controller.views().gallery.len();
                self.home.move_flag_cursor(step, count);
            }

            // ─────────────────────────────────────────────────────────────────
            // Pagination
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => {
                self.controller.next_page(store);
                self.home.reset_cursor();
            }
            Action::PrevPage => {
                self.controller.previous_page(store);
                self.home.reset_cursor();
            }
            Action::GoToPage(page) => {
                self.controller.jump_to_page(store, page);
                self.home.reset_cursor();
            }

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode(SearchTarget::Flags) => {
                if self.controller.flag_search_enabled() {
                    self.home.enter_search_mode(SearchTarget::Flags);
                }
            }
            Action::EnterSearchMode(target) => self.home.enter_search_mode(target),
            Action::SearchInput(c) => match self.home.search_mode {
                Some(SearchTarget::Countries) => {
                    self.controller.push_search_char(store, c);
                    self.home.reset_cursor();
                }
                Some(SearchTarget::Flags) => {
                    self.controller.push_flag_search_char(store, c);
                    self.home.reset_flag_cursor();
                }
                None => {}
            },
            Action::SearchBackspace => match self.home.search_mode {
                Some(SearchTarget::Countries) => {
                    self.controller.pop_search_char(store);
                    self.home.reset_cursor();
                }
                Some(SearchTarget::Flags) => {
                    self.controller.pop_flag_search_char(store);
                    self.home.reset_flag_cursor();
                }
                None => {}
            },

            // ─────────────────────────────────────────────────────────────────
            // Filters and pickers
            // ─────────────────────────────────────────────────────────────────
            Action::OpenPicker(kind) => {
                let (options, current) = self.picker_options(kind, store);
                self.picker.open(kind, options, &current);
                self.modals.push(Modal::Picker { kind });
            }
            Action::ApplyPicker(kind, value) => {
                match kind {
                    PickerKind::Region => self.controller.set_region(store, value),
                    PickerKind::Subregion => self.controller.set_subregion(store, value),
                    PickerKind::Sort => match SortKey::from_label(&value) {
                        Some(key) => self.controller.set_sort_key(store, key),
                        None => warn!(label = %value, "unknown sort key"),
                    },
                    PickerKind::FlagRegion => self.controller.set_flag_region(store, value),
                    PickerKind::CompareA => {
                        self.controller.set_comparison(store, ComparisonSlot::A, value)
                    }
                    PickerKind::CompareB => {
                        self.controller.set_comparison(store, ComparisonSlot::B, value)
                    }
                    PickerKind::StatsCountry => self.controller.set_stats_country(store, value),
                }
                match kind {
                    PickerKind::Region | PickerKind::Subregion | PickerKind::Sort => {
                        self.home.reset_cursor()
                    }
                    PickerKind::FlagRegion => self.home.reset_flag_cursor(),
                    _ => {}
                }
                self.modals.pop();
            }
            Action::ResetFilters => {
                self.controller.reset_filters(store);
                self.home.reset_cursor();
            }
            Action::ToggleFlagView => self.controller.toggle_flag_view(store),

            // ─────────────────────────────────────────────────────────────────
            // Country detail
            // ─────────────────────────────────────────────────────────────────
            Action::OpenCountryDetail => {
                if let Some(country) = self.controller.visible_country(store, self.home.cursor) {
                    let detail = CountryDetail::from_country(country);
                    let name = detail.name.clone();
                    self.detail_dialog.set_detail(Some(detail));
                    self.modals.push(Modal::CountryDetail { name });
                }
            }

            other => debug!(action = %other, "unhandled action"),
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Picker { .. } => self.picker.handle_key_event(key),
            Modal::CountryDetail { .. } => self.detail_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Picker { .. } => self.picker.draw(frame, area),
            Modal::CountryDetail { .. } => self.detail_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.loader.spawn(self.source.clone());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Loading | AppMode::Failed => self.loading.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else {
                    self.home.handle_key_event(key)
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Loading {
                    if let Some(outcome) = self.loader.poll() {
                        self.resolve_load(outcome);
                    } else if let Some(elapsed) = self.loader.elapsed() {
                        self.loading.set_elapsed(elapsed);
                    }
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextTab => self.home.next_tab(),
            Action::PrevTab => self.home.previous_tab(),
            Action::ExitSearchMode => self.home.exit_search_mode(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            other => self.update_with_store(other),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let store = match (self.mode, self.domain.store()) {
            (AppMode::Running, Some(store)) => store,
            _ => return self.loading.draw(frame, area),
        };

        let ctx = HomeRenderContext {
            store,
            controller: &self.controller,
            loaded_at: self.domain.loaded_at(),
        };
        draw_home_screen(frame, area, &self.home, &ctx)?;

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::model::country::fixtures::*;
    use crate::model::ui::Tab;
    use ratatui::{backend::TestBackend, Terminal};

    fn sample_store() -> CountryStore {
        CountryStore::new(vec![
            with_subregion(with_capital(country("Peru", "Americas", Some(33_000_000)), "Lima"), "South America"),
            with_subregion(with_capital(country("Germany", "Europe", Some(83_000_000)), "Berlin"), "Western Europe"),
            with_subregion(with_capital(country("Ireland", "Europe", Some(5_000_000)), "Dublin"), "Northern Europe"),
        ])
    }

    fn loaded_app() -> App {
        let mut app = App::new(&Config::default());
        app.resolve_load(Ok(sample_store()));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through handle_key_event and update, as the main loop does
    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app.handle_key_event(key(code)).unwrap() {
            app.update(action).unwrap();
        }
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_keys_reach_last_flag_in_list_view() {
        let mut app = App::new(&Config::default());
        app.resolve_load(Ok(CountryStore::new(
            (0..60)
                .map(|i| country(&format!("Land{:03}", i), "Asia", Some(1)))
                .collect(),
        )));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.home.active_tab, Tab::Flags);
        press(&mut app, KeyCode::Char('v'));

        for _ in 0..3 {
            press(&mut app, KeyCode::PageDown);
        }
        assert_eq!(app.home.flag_cursor, 30);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.home.flag_cursor, 59);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.home.flag_cursor, 59);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f, f.area()).unwrap()).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("Land059"));
        assert!(!text.contains("Land000"));

        // A new flag region starts from the top again
        app.update(Action::ApplyPicker(PickerKind::FlagRegion, "Asia".to_string()))
            .unwrap();
        assert_eq!(app.home.flag_cursor, 0);
    }

    #[test]
    fn test_load_success_enters_running() {
        let app = loaded_app();
        assert_eq!(app.mode, AppMode::Running);
        assert_eq!(app.controller.views().filtered.len(), 3);
        assert_eq!(app.controller.stats_country(), "Peru");
    }

    #[test]
    fn test_load_failure_is_terminal() {
        let mut app = App::new(&Config::default());
        app.resolve_load(Err(LoadError::Status { code: 503 }));
        assert_eq!(app.mode, AppMode::Failed);
        assert!(app.loading.is_failed());
        assert!(app.domain.error().is_some());

        app.resolve_load(Ok(sample_store()));
        assert_eq!(app.mode, AppMode::Failed);
        assert!(app.domain.store().is_none());

        press(&mut app, KeyCode::Char('r'));
        assert!(app.modals.top().is_none());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tick_polls_loader() {
        let mut app = App::new(&Config::default());
        app.loader.spawn_with(|| Ok(sample_store()));

        for _ in 0..500 {
            app.update(Action::Tick).unwrap();
            if app.mode == AppMode::Running {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert_eq!(app.mode, AppMode::Running);
        assert!(!app.loader.is_loading());
    }

    #[test]
    fn test_region_picker_filters_grid() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.modals.top(), Some(&Modal::Picker { kind: PickerKind::Region }));
        assert_eq!(app.picker.options, vec!["Americas".to_string(), "Europe".to_string()]);

        // Clear entry, Americas, Europe
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.top().is_none());
        assert_eq!(app.controller.query().region, "Europe");
        assert_eq!(app.controller.views().filtered.len(), 2);
        assert_eq!(app.controller.views().subregions.len(), 2);
    }

    #[test]
    fn test_search_routes_to_countries() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.home.cursor, 1);

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.controller.query().search_text, "li");
        assert_eq!(app.home.cursor, 0);

        // 'q' is text while searching
        press(&mut app, KeyCode::Char('q'));
        assert!(app.modals.top().is_none());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.home.search_mode, None);
    }

    #[test]
    fn test_flag_search_blocked_until_region_chosen() {
        let config = Config {
            flag_gallery_requires_region_selection: true,
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.resolve_load(Ok(sample_store()));
        app.home.active_tab = Tab::Flags;

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.home.search_mode, None);

        app.update(Action::ApplyPicker(PickerKind::FlagRegion, "Europe".to_string()))
            .unwrap();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.home.search_mode, Some(SearchTarget::Flags));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.controller.gallery_state().search_text, "g");
    }

    #[test]
    fn test_country_detail_and_quit_dialog() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.modals.top(),
            Some(&Modal::CountryDetail {
                name: "Germany".to_string()
            })
        );
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.top().is_none());

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.should_quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key_event(ctrl_c).unwrap(), Some(Action::ForceQuit));
    }

    #[test]
    fn test_compare_pickers_fill_selection() {
        let mut app = loaded_app();
        app.update(Action::ApplyPicker(PickerKind::CompareA, "Peru".to_string()))
            .unwrap();
        assert!(app.controller.views().comparison.is_none());
        app.update(Action::ApplyPicker(PickerKind::CompareB, "Ireland".to_string()))
            .unwrap();
        assert!(app.controller.views().comparison.is_some());
    }

    #[test]
    fn test_draw_every_mode() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut app = App::new(&Config::default());
        terminal.draw(|f| app.draw(f, f.area()).unwrap()).unwrap();

        app.resolve_load(Ok(sample_store()));
        for _ in 0..4 {
            terminal.draw(|f| app.draw(f, f.area()).unwrap()).unwrap();
            app.update(Action::NextTab).unwrap();
        }
        app.update(Action::OpenHelp).unwrap();
        terminal.draw(|f| app.draw(f, f.area()).unwrap()).unwrap();
    }
}
