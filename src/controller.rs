//! Dashboard controller - owns all mutable view state
//!
//! Every input maps to exactly one mutation followed by a full re-derivation
//! of the views that depend on it. The store is passed in on each call; the
//! controller never holds on to it.

use crate::model::{
    filter_and_sort, paginate, subregion_options, Country, CountryStore, Page, PageButton,
    PageState, QueryState, SortKey,
};
use crate::projection::{
    aggregate, project_cards, project_comparison, project_country_stats, project_gallery,
    region_distribution, top_by_population, AggregateStats, Comparison, ComparisonSelection,
    ComparisonSlot, CountryCard, CountryStats, FlagGallery, FlagGalleryOptions, FlagGalleryState,
    PopulationBar, RegionShare,
};
use crate::projection::charts::TOP_POPULATION_LIMIT;
use tracing::debug;

/// Bumped every time a view is re-derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewRevisions {
    pub query: u64,
    pub grid: u64,
    pub gallery: u64,
    pub comparison: u64,
    pub country_stats: u64,
}

/// Everything the components render
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedViews {
    /// Store positions passing the query, in sort order
    pub filtered: Vec<usize>,
    /// Store positions on the current page
    pub page: Page<usize>,
    pub cards: Vec<CountryCard>,
    pub regions: Vec<String>,
    pub subregions: Vec<String>,
    pub gallery: FlagGallery,
    pub comparison: Option<Comparison>,
    pub country_stats: CountryStats,
    pub aggregate: AggregateStats,
    pub region_chart: Vec<RegionShare>,
    pub population_chart: Vec<PopulationBar>,
}

impl DerivedViews {
    fn empty() -> Self {
        Self {
            filtered: Vec::new(),
            page: paginate::<usize>(&[], &PageState::default()),
            cards: Vec::new(),
            regions: Vec::new(),
            subregions: Vec::new(),
            gallery: FlagGallery::NoMatches,
            comparison: None,
            country_stats: CountryStats::Empty,
            aggregate: aggregate(&[]),
            region_chart: Vec::new(),
            population_chart: Vec::new(),
        }
    }
}

pub struct Controller {
    query: QueryState,
    page: PageState,
    comparison: ComparisonSelection,
    stats_country: String,
    gallery: FlagGalleryState,
    gallery_options: FlagGalleryOptions,
    views: DerivedViews,
    revisions: ViewRevisions,
}

impl Controller {
    pub fn new(gallery_options: FlagGalleryOptions) -> Self {
        Self {
            query: QueryState::default(),
            page: PageState::default(),
            comparison: ComparisonSelection::default(),
            stats_country: String::new(),
            gallery: FlagGalleryState::new(&gallery_options),
            gallery_options,
            views: DerivedViews::empty(),
            revisions: ViewRevisions::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    #[cfg(test)]
    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn comparison_selection(&self) -> &ComparisonSelection {
        &self.comparison
    }

    pub fn stats_country(&self) -> &str {
        &self.stats_country
    }

    pub fn gallery_state(&self) -> &FlagGalleryState {
        &self.gallery
    }

    pub fn views(&self) -> &DerivedViews {
        &self.views
    }

    #[cfg(test)]
    pub fn revisions(&self) -> ViewRevisions {
        self.revisions
    }

    /// Record on the current page at `slot`
    pub fn visible_country<'a>(&self, store: &'a CountryStore, slot: usize) -> Option<&'a Country> {
        let idx = *self.views.page.items.get(slot)?;
        store.all().get(idx)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Derive every view for a freshly loaded store
    pub fn attach(&mut self, store: &CountryStore) {
        let all = store.all();
        self.views.regions = store.regions();
        self.views.aggregate = aggregate(all);
        self.views.region_chart = region_distribution(all);
        self.views.population_chart = top_by_population(all, TOP_POPULATION_LIMIT);

        if self.stats_country.is_empty() {
            if let Some(first) = all.first() {
                self.stats_country = first.common_name().to_string();
            }
        }

        self.refresh_subregions(store);
        self.refresh_query(store);
        self.refresh_gallery(store);
        self.refresh_comparison(store);
        self.refresh_country_stats(store);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query inputs (query -> page 1 -> pagination -> grid, sort keeps the page)
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_search_text(&mut self, store: &CountryStore, text: String) {
        debug!(search = %text, "search text changed");
        self.query.search_text = text;
        self.refresh_query(store);
    }

    pub fn push_search_char(&mut self, store: &CountryStore, c: char) {
        let mut text = self.query.search_text.clone();
        text.push(c);
        self.set_search_text(store, text);
    }

    pub fn pop_search_char(&mut self, store: &CountryStore) {
        let mut text = self.query.search_text.clone();
        if text.pop().is_some() {
            self.set_search_text(store, text);
        }
    }

    /// Change the region; a subregion that no longer belongs to it is cleared
    pub fn set_region(&mut self, store: &CountryStore, region: String) {
        debug!(region = %region, "region filter changed");
        self.query.region = region;
        self.refresh_subregions(store);
        if !self.query.subregion.is_empty() && !self.views.subregions.contains(&self.query.subregion) {
            debug!(subregion = %self.query.subregion, "clearing subregion outside region");
            self.query.subregion.clear();
        }
        self.refresh_query(store);
    }

    pub fn set_subregion(&mut self, store: &CountryStore, subregion: String) {
        debug!(subregion = %subregion, "subregion filter changed");
        self.query.subregion = subregion;
        self.refresh_query(store);
    }

    pub fn set_sort_key(&mut self, store: &CountryStore, sort_key: SortKey) {
        debug!(sort = %sort_key, "sort key changed");
        self.query.sort_key = sort_key;
        self.resort(store);
    }

    /// Restore default filters and go back to page 1 in one step
    pub fn reset_filters(&mut self, store: &CountryStore) {
        debug!("filters reset");
        self.query = QueryState::default();
        self.refresh_subregions(store);
        self.refresh_query(store);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Page inputs (pagination -> grid only)
    // ─────────────────────────────────────────────────────────────────────────

    pub fn go_to_page(&mut self, store: &CountryStore, page: usize) {
        self.page.current_page = self.page.clamp(page, self.views.filtered.len());
        self.refresh_page(store);
    }

    /// Follow the Next button; a disabled or missing button does nothing
    pub fn next_page(&mut self, store: &CountryStore) {
        self.follow_button(store, |b| matches!(b, PageButton::Next { .. }));
    }

    pub fn previous_page(&mut self, store: &CountryStore) {
        self.follow_button(store, |b| matches!(b, PageButton::Previous { .. }));
    }

    /// Digit shortcut: the numbered button when it is shown, else the clamped page
    pub fn jump_to_page(&mut self, store: &CountryStore, page: usize) {
        let shown = self
            .views
            .page
            .buttons
            .iter()
            .find(|b| matches!(b, PageButton::Number { page: p, .. } if *p == page))
            .and_then(PageButton::target);
        self.go_to_page(store, shown.unwrap_or(page));
    }

    fn follow_button(&mut self, store: &CountryStore, which: impl Fn(&PageButton) -> bool) {
        let target = self
            .views
            .page
            .buttons
            .iter()
            .find(|b| which(b))
            .and_then(PageButton::target);
        if let Some(page) = target {
            self.go_to_page(store, page);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Independent panels
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_comparison(&mut self, store: &CountryStore, slot: ComparisonSlot, name: String) {
        debug!(?slot, name = %name, "comparison selection changed");
        match slot {
            ComparisonSlot::A => self.comparison.country_a = name,
            ComparisonSlot::B => self.comparison.country_b = name,
        }
        self.refresh_comparison(store);
    }

    pub fn set_stats_country(&mut self, store: &CountryStore, name: String) {
        debug!(name = %name, "statistics country changed");
        self.stats_country = name;
        self.refresh_country_stats(store);
    }

    pub fn set_flag_region(&mut self, store: &CountryStore, region: String) {
        debug!(region = %region, "flag region changed");
        self.gallery.region = region;
        self.gallery.search_text.clear();
        self.refresh_gallery(store);
    }

    pub fn toggle_flag_view(&mut self, store: &CountryStore) {
        self.gallery.view_mode = self.gallery.view_mode.toggled();
        self.refresh_gallery(store);
    }

    /// Name search inside the gallery; ignored while a region is required
    pub fn set_flag_search(&mut self, store: &CountryStore, text: String) {
        if self.flag_search_enabled() {
            self.gallery.search_text = text;
            self.refresh_gallery(store);
        }
    }

    pub fn push_flag_search_char(&mut self, store: &CountryStore, c: char) {
        let mut text = self.gallery.search_text.clone();
        text.push(c);
        self.set_flag_search(store, text);
    }

    pub fn pop_flag_search_char(&mut self, store: &CountryStore) {
        let mut text = self.gallery.search_text.clone();
        if text.pop().is_some() {
            self.set_flag_search(store, text);
        }
    }

    pub fn flag_search_enabled(&self) -> bool {
        !(self.gallery.region.is_empty() && self.gallery_options.requires_region_selection)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Re-derivation
    // ─────────────────────────────────────────────────────────────────────────

    fn refresh_subregions(&mut self, store: &CountryStore) {
        self.views.subregions = subregion_options(store.all(), &self.query.region);
    }

    /// New filtered set, so back to page 1
    fn refresh_query(&mut self, store: &CountryStore) {
        self.refilter(store);
        self.page.reset();
        self.refresh_page(store);
    }

    /// Same filtered set in a new order; the current page is kept
    fn resort(&mut self, store: &CountryStore) {
        self.refilter(store);
        self.refresh_page(store);
    }

    fn refilter(&mut self, store: &CountryStore) {
        self.views.filtered = filter_and_sort(store.entries(), &self.query)
            .into_iter()
            .map(|entry| entry.position)
            .collect();
        self.revisions.query += 1;
        debug!(revision = self.revisions.query, matches = self.views.filtered.len(), "query re-derived");
    }

    fn refresh_page(&mut self, store: &CountryStore) {
        self.views.page = paginate(&self.views.filtered, &self.page);
        self.page.current_page = self.views.page.current_page;
        let visible: Vec<&Country> = self
            .views
            .page
            .items
            .iter()
            .filter_map(|&i| store.all().get(i))
            .collect();
        self.views.cards = project_cards(&visible);
        self.revisions.grid += 1;
        debug!(revision = self.revisions.grid, page = self.page.current_page, "grid re-derived");
    }

    fn refresh_gallery(&mut self, store: &CountryStore) {
        self.views.gallery = project_gallery(store.all(), &self.gallery, &self.gallery_options);
        self.revisions.gallery += 1;
        debug!(revision = self.revisions.gallery, "gallery re-derived");
    }

    fn refresh_comparison(&mut self, store: &CountryStore) {
        self.views.comparison = project_comparison(store, &self.comparison);
        self.revisions.comparison += 1;
        debug!(revision = self.revisions.comparison, "comparison re-derived");
    }

    fn refresh_country_stats(&mut self, store: &CountryStore) {
        self.views.country_stats = project_country_stats(store, &self.stats_country);
        self.revisions.country_stats += 1;
        debug!(revision = self.revisions.country_stats, "country stats re-derived");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::country::fixtures::*;

    fn store_of(n: usize) -> CountryStore {
        let regions = ["Europe", "Asia", "Africa"];
        let subregions = ["Northern", "Southern"];
        CountryStore::new(
            (0..n)
                .map(|i| {
                    let region = regions[i % regions.len()];
                    let sub = format!("{} {}", subregions[i % 2], region);
                    with_subregion(
                        with_capital(country(&format!("Country {:03}", i), region, Some(i as u64 * 10)), &format!("City {:03}", i)),
                        &sub,
                    )
                })
                .collect(),
        )
    }

    fn attached(store: &CountryStore) -> Controller {
        let mut controller = Controller::new(FlagGalleryOptions::default());
        controller.attach(store);
        controller
    }

    #[test]
    fn test_attach_derives_everything() {
        let store = store_of(45);
        let controller = attached(&store);
        let views = controller.views();

        assert_eq!(views.filtered.len(), 45);
        assert_eq!(views.page.total_pages, 3);
        assert_eq!(views.cards.len(), 20);
        assert_eq!(views.regions, vec!["Africa", "Asia", "Europe"]);
        assert_eq!(views.aggregate.country_count, 45);
        assert_eq!(views.gallery.len(), 45);
        assert_eq!(views.comparison, None);
        assert_eq!(controller.stats_country(), "Country 000");
        assert!(matches!(views.country_stats, CountryStats::Found { .. }));
    }

    #[test]
    fn test_filter_change_resets_page() {
        let store = store_of(45);
        let mut controller = attached(&store);

        controller.go_to_page(&store, 2);
        controller.push_search_char(&store, '0');
        assert_eq!(controller.page_state().current_page, 1);

        controller.go_to_page(&store, 2);
        controller.set_region(&store, "Asia".to_string());
        assert_eq!(controller.page_state().current_page, 1);
    }

    #[test]
    fn test_sort_change_keeps_page() {
        let store = store_of(45);
        let mut controller = attached(&store);
        let before = controller.revisions().query;

        controller.go_to_page(&store, 3);
        controller.set_sort_key(&store, SortKey::Population);
        assert_eq!(controller.page_state().current_page, 3);
        assert_eq!(controller.revisions().query, before + 1);
        // Population descending: page 3 holds the five smallest
        assert_eq!(controller.views().cards.len(), 5);
        assert_eq!(controller.views().cards[0].name, "Country 004");
        assert_eq!(controller.views().cards[4].name, "Country 000");
    }

    #[test]
    fn test_page_click_does_not_rerun_query() {
        let store = store_of(45);
        let mut controller = attached(&store);
        let before = controller.revisions();

        controller.go_to_page(&store, 2);
        let after = controller.revisions();
        assert_eq!(after.query, before.query);
        assert_eq!(after.grid, before.grid + 1);
        assert_eq!(controller.views().cards[0].name, "Country 020");
        assert!(controller
            .views()
            .page
            .buttons
            .contains(&PageButton::Number { page: 2, active: true }));
    }

    #[test]
    fn test_page_requests_clamp() {
        let store = store_of(45);
        let mut controller = attached(&store);
        controller.go_to_page(&store, 50);
        assert_eq!(controller.page_state().current_page, 3);
        assert_eq!(controller.views().cards.len(), 5);

        controller.next_page(&store);
        assert_eq!(controller.page_state().current_page, 3);

        controller.go_to_page(&store, 0);
        assert_eq!(controller.page_state().current_page, 1);
        controller.previous_page(&store);
        assert_eq!(controller.page_state().current_page, 1);

        controller.next_page(&store);
        assert_eq!(controller.page_state().current_page, 2);
        controller.jump_to_page(&store, 9);
        assert_eq!(controller.page_state().current_page, 3);
        controller.jump_to_page(&store, 1);
        assert_eq!(controller.page_state().current_page, 1);
    }

    #[test]
    fn test_single_page_has_no_navigation() {
        let store = store_of(5);
        let mut controller = attached(&store);
        assert!(controller.views().page.buttons.is_empty());
        controller.next_page(&store);
        assert_eq!(controller.page_state().current_page, 1);
    }

    #[test]
    fn test_region_change_clears_invalid_subregion() {
        let store = store_of(12);
        let mut controller = attached(&store);

        controller.set_region(&store, "Europe".to_string());
        assert_eq!(controller.views().subregions, vec!["Northern Europe", "Southern Europe"]);

        controller.set_subregion(&store, "Northern Europe".to_string());
        assert!(controller
            .views()
            .filtered
            .iter()
            .all(|&i| store.all()[i].subregion() == Some("Northern Europe")));

        controller.set_region(&store, "Asia".to_string());
        assert_eq!(controller.query().subregion, "");
        assert!(controller.views().subregions.iter().all(|s| s.ends_with("Asia")));

        controller.set_region(&store, String::new());
        assert_eq!(controller.views().subregions.len(), 6);
    }

    #[test]
    fn test_region_change_keeps_still_valid_subregion() {
        let store = store_of(12);
        let mut controller = attached(&store);
        controller.set_subregion(&store, "Northern Asia".to_string());
        controller.set_region(&store, "Asia".to_string());
        assert_eq!(controller.query().subregion, "Northern Asia");
    }

    #[test]
    fn test_reset_restores_defaults_in_one_step() {
        let store = store_of(45);
        let mut controller = attached(&store);
        controller.set_region(&store, "Asia".to_string());
        controller.set_sort_key(&store, SortKey::Area);
        controller.set_search_text(&store, "City".to_string());
        controller.go_to_page(&store, 2);

        let before = controller.revisions().query;
        controller.reset_filters(&store);
        assert!(controller.query().is_default());
        assert_eq!(controller.page_state().current_page, 1);
        assert_eq!(controller.views().filtered.len(), 45);
        assert_eq!(controller.revisions().query, before + 1);
    }

    #[test]
    fn test_panels_update_independently() {
        let store = store_of(10);
        let mut controller = attached(&store);
        let start = controller.revisions();

        controller.set_comparison(&store, ComparisonSlot::A, "Country 001".to_string());
        assert_eq!(controller.views().comparison, None);
        controller.set_comparison(&store, ComparisonSlot::B, "Country 002".to_string());
        assert!(controller.views().comparison.is_some());

        controller.set_stats_country(&store, "Nowhere".to_string());
        assert_eq!(controller.views().country_stats, CountryStats::NotFound("Nowhere".to_string()));

        controller.toggle_flag_view(&store);
        controller.set_flag_region(&store, "Africa".to_string());

        let end = controller.revisions();
        assert_eq!(end.query, start.query);
        assert_eq!(end.grid, start.grid);
        assert_eq!(end.comparison, start.comparison + 2);
        assert_eq!(end.country_stats, start.country_stats + 1);
        assert_eq!(end.gallery, start.gallery + 2);
    }

    #[test]
    fn test_rederiving_same_state_is_identical() {
        let store = store_of(30);
        let mut controller = attached(&store);
        controller.set_region(&store, "Europe".to_string());
        let first = controller.views().clone();

        controller.set_region(&store, "Europe".to_string());
        assert_eq!(controller.views(), &first);
    }

    #[test]
    fn test_flag_search_disabled_until_region_selected() {
        let store = store_of(9);
        let mut controller = Controller::new(FlagGalleryOptions {
            default_region: String::new(),
            requires_region_selection: true,
        });
        controller.attach(&store);
        assert_eq!(controller.views().gallery, FlagGallery::RegionRequired);

        controller.push_flag_search_char(&store, 'x');
        assert_eq!(controller.gallery_state().search_text, "");

        controller.set_flag_region(&store, "Asia".to_string());
        assert_eq!(controller.views().gallery.len(), 3);
        controller.set_flag_search(&store, "Country 004".to_string());
        assert_eq!(controller.views().gallery.len(), 1);

        // New region clears the name search
        controller.set_flag_region(&store, "Europe".to_string());
        assert_eq!(controller.gallery_state().search_text, "");
    }

    #[test]
    fn test_empty_results_have_no_cards_or_buttons() {
        let store = store_of(45);
        let mut controller = attached(&store);
        controller.set_search_text(&store, "no such country".to_string());
        assert!(controller.views().page.items.is_empty());
        assert!(controller.views().cards.is_empty());
        assert!(controller.views().page.buttons.is_empty());
    }

    #[test]
    fn test_visible_country_maps_page_slots() {
        let store = store_of(45);
        let mut controller = attached(&store);
        controller.go_to_page(&store, 3);
        let c = controller.visible_country(&store, 0).unwrap();
        assert_eq!(c.common_name(), "Country 040");
        assert!(controller.visible_country(&store, 5).is_none());
    }
}
