use crate::catalog::Catalog;
use crate::overlay::DetailOverlay;
use crate::page::scroll::{self, NavLink};
use crate::page::{PageLayout, SectionKind};
use crate::query::Filter;
use crate::render::CatalogSurface;
use crate::util::config::{AppConfig, ScrollConfig};

/// The two inputs that decide which books are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: Filter,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub label: String,
    pub token: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nav,
    Filters,
    Catalog,
}

/// Rows taken by the fixed header and the status bar.
pub const CHROME_ROWS: u16 = 2;

#[derive(Debug)]
pub struct AppState {
    // Data
    pub catalog: Catalog,
    pub view: ViewState,

    // Page
    pub layout: PageLayout,
    pub surface: CatalogSurface,
    pub overlay: Option<DetailOverlay>,
    pub filters: Vec<FilterButton>,
    pub nav_links: Vec<NavLink>,

    // Search box contents; only copied into `view.query` once typing settles
    pub search_input: String,
    pub search_active: bool,

    // Scrolling
    pub scroll: ScrollConfig,
    pub scroll_offset: u16,
    pub viewport_height: u16,
    pub header_scrolled: bool,

    // Keyboard focus
    pub focus: Focus,
    pub nav_cursor: usize,
    pub filter_cursor: usize,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_catalog(config, Catalog::default())
    }

    pub fn with_catalog(config: &AppConfig, catalog: Catalog) -> Self {
        let layout = PageLayout::from_ids(&config.page.sections);

        let mut filters: Vec<FilterButton> = config
            .catalog
            .filters
            .iter()
            .map(|f| FilterButton {
                label: f.label.clone(),
                token: f.token.clone(),
                active: false,
            })
            .collect();
        if let Some(first_all) = filters
            .iter_mut()
            .find(|f| Filter::from_token(f.token.as_deref()).is_all())
        {
            first_all.active = true;
        }

        let surface = if layout.has(SectionKind::Catalog) {
            CatalogSurface::mounted()
        } else {
            CatalogSurface::detached()
        };

        let mut state = Self {
            catalog,
            view: ViewState::default(),
            nav_links: layout.nav_links(),
            layout,
            surface,
            overlay: config.page.detail_overlay.then(DetailOverlay::new),
            filters,
            search_input: String::new(),
            search_active: false,
            scroll: config.scroll.clone(),
            scroll_offset: 0,
            viewport_height: 0,
            header_scrolled: false,
            focus: Focus::Catalog,
            nav_cursor: 0,
            filter_cursor: 0,
            should_quit: false,
        };

        state.apply_scroll();
        state
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.height().saturating_sub(self.viewport_height)
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.scroll_offset = offset.min(self.max_scroll());
        self.apply_scroll();
    }

    /// Recompute the header look and the highlighted nav link from the
    /// current offset.
    pub fn apply_scroll(&mut self) {
        self.header_scrolled = scroll::header_scrolled(self.scroll_offset, self.scroll.header_threshold);
        let positions = self.layout.positions();
        let current = scroll::active_section(&positions, self.scroll_offset, self.scroll.spy_offset);
        scroll::mark_active(&mut self.nav_links, current);
    }

    pub fn active_section(&self) -> Option<&str> {
        self.nav_links
            .iter()
            .find(|l| l.active)
            .and_then(|l| l.target())
    }
}
