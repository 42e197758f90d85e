use std::cell::RefCell;
use std::rc::Rc;

use arcana::app::state::ViewState;
use arcana::catalog::Catalog;
use arcana::query::Filter;
use arcana::render::animate::AnimationConfig;
use arcana::render::carousel::{Carousel, Slider, SliderConfig};
use arcana::render::{CatalogSurface, Renderer, TermHost, WidgetHost};

type Log = Rc<RefCell<Vec<String>>>;

struct Probe {
    id: usize,
    slides: usize,
    log: Log,
}

impl Carousel for Probe {
    fn destroy(&mut self) {
        self.log.borrow_mut().push(format!("destroy:{}", self.id));
    }
}

#[derive(Default)]
struct ProbeHost {
    created: usize,
    log: Log,
}

impl WidgetHost for ProbeHost {
    type Carousel = Probe;

    fn create_carousel(&mut self, _config: &SliderConfig, slides: usize) -> Probe {
        self.created += 1;
        self.log.borrow_mut().push(format!("create:{}", self.created));
        Probe {
            id: self.created,
            slides,
            log: self.log.clone(),
        }
    }

    fn refresh_animations(&mut self) {
        self.log.borrow_mut().push("refresh".into());
    }
}

fn view(filter: Option<&str>, query: &str) -> ViewState {
    ViewState {
        filter: Filter::from_token(filter),
        query: query.into(),
    }
}

#[test]
fn test_render_fills_grid_in_catalog_order() {
    let catalog = Catalog::default();
    let mut surface = CatalogSurface::mounted();
    let mut host = ProbeHost::default();
    let mut renderer = Renderer::new(SliderConfig::catalog());

    renderer.render(&catalog, &ViewState::default(), &mut surface, &mut host);

    let ids: Vec<&str> = surface.cards().iter().map(|c| c.book_id.as_str()).collect();
    let expected: Vec<&str> = catalog.books().iter().map(|b| b.id).collect();
    assert_eq!(ids, expected);
    assert!(!surface.shows_empty_state());
    assert_eq!(renderer.carousel().map(|c| c.slides), Some(7));
}

#[test]
fn test_render_replaces_previous_fragments() {
    let catalog = Catalog::default();
    let mut surface = CatalogSurface::mounted();
    let mut host = ProbeHost::default();
    let mut renderer = Renderer::new(SliderConfig::catalog());

    renderer.render(&catalog, &ViewState::default(), &mut surface, &mut host);
    renderer.render(&catalog, &view(None, "duna"), &mut surface, &mut host);

    assert_eq!(surface.cards().len(), 1);
    assert_eq!(surface.cards()[0].book_id, "duna");
    assert_eq!(surface.cards()[0].action, "open-modal");
}

#[test]
fn test_old_carousel_destroyed_before_new_one_created() {
    let catalog = Catalog::default();
    let mut surface = CatalogSurface::mounted();
    let mut host = ProbeHost::default();
    let log = host.log.clone();
    let mut renderer = Renderer::new(SliderConfig::catalog());

    renderer.render(&catalog, &ViewState::default(), &mut surface, &mut host);
    renderer.render(&catalog, &view(Some("fantasia"), ""), &mut surface, &mut host);
    renderer.render(&catalog, &view(None, "zzz"), &mut surface, &mut host);

    assert_eq!(
        *log.borrow(),
        vec![
            "create:1",
            "refresh",
            "destroy:1",
            "create:2",
            "refresh",
            "destroy:2",
            "create:3",
            "refresh",
        ]
    );
    assert_eq!(renderer.carousel().map(|c| c.id), Some(3));
}

#[test]
fn test_empty_result_toggles_empty_state() {
    let catalog = Catalog::default();
    let mut surface = CatalogSurface::mounted();
    let mut host = ProbeHost::default();
    let mut renderer = Renderer::new(SliderConfig::catalog());

    renderer.render(&catalog, &view(None, "nada por aqui"), &mut surface, &mut host);
    assert!(surface.cards().is_empty());
    assert!(surface.shows_empty_state());
    // A carousel is still rebuilt for the empty grid
    assert_eq!(renderer.carousel().map(|c| c.slides), Some(0));

    renderer.render(&catalog, &ViewState::default(), &mut surface, &mut host);
    assert!(!surface.shows_empty_state());
}

#[test]
fn test_missing_container_skips_render() {
    let catalog = Catalog::default();
    let mut surface = CatalogSurface::detached();
    let mut host = ProbeHost::default();
    let mut renderer = Renderer::new(SliderConfig::catalog());

    renderer.render(&catalog, &ViewState::default(), &mut surface, &mut host);

    assert!(surface.cards().is_empty());
    assert!(renderer.carousel().is_none());
    assert!(host.log.borrow().is_empty());
}

#[test]
fn test_missing_empty_indicator_still_renders() {
    let catalog = Catalog::default();
    let mut surface = CatalogSurface {
        grid: Some(Vec::new()),
        empty_state: None,
    };
    let mut host = ProbeHost::default();
    let mut renderer = Renderer::new(SliderConfig::catalog());

    renderer.render(&catalog, &view(None, "zzz"), &mut surface, &mut host);
    assert!(!surface.shows_empty_state());
    assert_eq!(host.created, 1);
}

#[test]
fn test_card_fragment_fields() {
    let catalog = Catalog::default();
    let mut surface = CatalogSurface::mounted();
    let mut host = ProbeHost::default();
    let mut renderer = Renderer::new(SliderConfig::catalog());

    renderer.render(&catalog, &view(None, "sapiens"), &mut surface, &mut host);
    let card = &surface.cards()[0];
    assert_eq!(card.title, "Sapiens: Uma Breve História da Humanidade");
    assert_eq!(card.chips.len(), 3);
    assert_eq!(card.chips, vec!["história", "ciência", "humanidade"]);
    assert!(card.byline.contains(" • "));
    assert!(card.cover.is_some());
}

#[test]
fn test_term_host_rebuilds_slider_and_marks_reveal_stale() {
    let catalog = Catalog::default();
    let mut surface = CatalogSurface::mounted();
    let mut host = TermHost::new(AnimationConfig::default());
    let mut renderer: Renderer<Slider> = Renderer::new(SliderConfig::catalog());

    host.reveal.refresh_hard(Vec::new());
    assert!(!host.reveal.is_stale());

    renderer.render(&catalog, &view(Some("classico"), ""), &mut surface, &mut host);

    assert!(host.reveal.is_stale());
    let slider = renderer.carousel().expect("slider is created");
    assert_eq!(slider.len(), 2);
    assert_eq!(slider.index(), 0);
    assert!(!slider.is_destroyed());
}
