pub mod animate;
pub mod carousel;
pub mod fragment;

use tracing::debug;

use crate::app::state::ViewState;
use crate::catalog::Catalog;
use crate::query::visible_books;

use animate::{AnimationConfig, Reveal};
use carousel::{Carousel, Slider, SliderConfig};
use fragment::CardFragment;

/// The catalog display container and its "no results" indicator.
///
/// Either part may be missing from the page layout, in which case the
/// renderer leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSurface {
    pub grid: Option<Vec<CardFragment>>,
    /// `Some(true)` while the indicator is shown.
    pub empty_state: Option<bool>,
}

impl CatalogSurface {
    pub fn mounted() -> Self {
        Self {
            grid: Some(Vec::new()),
            empty_state: Some(false),
        }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[CardFragment] {
        self.grid.as_deref().unwrap_or_default()
    }

    pub fn shows_empty_state(&self) -> bool {
        self.empty_state.unwrap_or(false)
    }
}

/// Widget capabilities the renderer drives after every content swap.
pub trait WidgetHost {
    type Carousel: Carousel;

    fn create_carousel(&mut self, config: &SliderConfig, slides: usize) -> Self::Carousel;

    /// Ask the scroll-animation layer to recompute trigger positions.
    fn refresh_animations(&mut self);
}

/// Terminal implementation of the widget capabilities.
#[derive(Debug)]
pub struct TermHost {
    pub reveal: Reveal,
}

impl TermHost {
    pub fn new(animation: AnimationConfig) -> Self {
        Self {
            reveal: Reveal::new(animation),
        }
    }
}

impl WidgetHost for TermHost {
    type Carousel = Slider;

    fn create_carousel(&mut self, config: &SliderConfig, slides: usize) -> Slider {
        Slider::new(config.clone(), slides)
    }

    fn refresh_animations(&mut self) {
        self.reveal.mark_stale();
    }
}

/// Owns the catalog carousel. At most one instance is live; the previous
/// one is destroyed before its replacement is created.
#[derive(Debug)]
pub struct Renderer<C> {
    config: SliderConfig,
    carousel: Option<C>,
}

impl<C: Carousel> Renderer<C> {
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            carousel: None,
        }
    }

    pub fn carousel(&self) -> Option<&C> {
        self.carousel.as_ref()
    }

    pub fn carousel_mut(&mut self) -> Option<&mut C> {
        self.carousel.as_mut()
    }

    pub fn render<H>(
        &mut self,
        catalog: &Catalog,
        view: &ViewState,
        surface: &mut CatalogSurface,
        host: &mut H,
    ) where
        H: WidgetHost<Carousel = C>,
    {
        let Some(grid) = surface.grid.as_mut() else {
            debug!("Catalog container missing, skipping render");
            return;
        };

        let books = visible_books(catalog, view);
        *grid = books.iter().map(|b| CardFragment::from_book(b)).collect();

        if let Some(empty) = surface.empty_state.as_mut() {
            *empty = books.is_empty();
        }

        if let Some(mut old) = self.carousel.take() {
            old.destroy();
        }
        self.carousel = Some(host.create_carousel(&self.config, books.len()));

        host.refresh_animations();

        debug!(
            visible = books.len(),
            filter = ?view.filter,
            query = %view.query,
            "Catalog rendered"
        );
    }
}
