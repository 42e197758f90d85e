use tracing::debug;

use crate::app::actions::{SideEffect, SlideInput};
use crate::app::state::AppState;
use crate::overlay::{Dialog, ModalDialog};
use crate::page::SectionKind;
use crate::page::content::CHAPTERS;
use crate::render::carousel::Slider;
use crate::render::{Renderer, TermHost};
use crate::util::config::AppConfig;

/// Widget instances owned by the page for its whole lifetime.
#[derive(Debug)]
pub struct Widgets {
    pub renderer: Renderer<Slider>,
    pub host: TermHost,
    pub modal: ModalDialog,
    pub history: Option<Slider>,
    catalog_width: Option<u16>,
}

impl Widgets {
    pub fn new(config: &AppConfig, state: &AppState) -> Self {
        let history = state
            .layout
            .has(SectionKind::History)
            .then(|| Slider::new(config.history.clone(), CHAPTERS.len()));

        Self {
            renderer: Renderer::new(config.carousel.clone()),
            host: TermHost::new(config.animation.clone()),
            modal: ModalDialog::new(),
            history,
            catalog_width: None,
        }
    }

    /// Run a widget side effect. Effects that need the event loop are handed
    /// back untouched.
    pub fn apply(&mut self, state: &mut AppState, effect: SideEffect) -> Option<SideEffect> {
        match effect {
            SideEffect::Render => {
                self.renderer.render(
                    &state.catalog,
                    &state.view,
                    &mut state.surface,
                    &mut self.host,
                );
                // The rebuilt carousel starts out knowing the strip width
                if let (Some(width), Some(slider)) =
                    (self.catalog_width, self.renderer.carousel_mut())
                {
                    slider.set_view_width(width);
                }
            }
            SideEffect::ShowOverlay => {
                if state.overlay.is_some() {
                    self.modal.show();
                }
            }
            SideEffect::HideOverlay => self.modal.hide(),
            SideEffect::Carousel(input) => {
                if let Some(slider) = self.renderer.carousel_mut() {
                    drive(slider, input);
                }
            }
            SideEffect::History(input) => {
                if let Some(slider) = self.history.as_mut() {
                    drive(slider, input);
                }
            }
            other => return Some(other),
        }
        None
    }

    /// Tell the sliders how wide they were last drawn.
    pub fn set_view_widths(&mut self, catalog: Option<u16>, history: Option<u16>) {
        if let Some(width) = catalog {
            self.catalog_width = Some(width);
            if let Some(slider) = self.renderer.carousel_mut() {
                slider.set_view_width(width);
            }
        }
        if let (Some(width), Some(slider)) = (history, self.history.as_mut()) {
            slider.set_view_width(width);
        }
    }

    pub fn tick(&mut self, dt_ms: u64) {
        if let Some(slider) = self.renderer.carousel_mut() {
            slider.tick(dt_ms);
        }
        if let Some(slider) = self.history.as_mut() {
            slider.tick(dt_ms);
        }
    }

    /// Card at the carousel's current position, the target of Enter.
    pub fn focused_book_id(&self, state: &AppState) -> Option<String> {
        let index = self.renderer.carousel()?.index();
        state.surface.cards().get(index).map(|c| c.book_id.clone())
    }
}

fn drive(slider: &mut Slider, input: SlideInput) {
    debug!(?input, "Carousel input");
    match input {
        SlideInput::Next => slider.next(),
        SlideInput::Prev => slider.prev(),
        SlideInput::GoTo(i) => slider.go_to(i),
        SlideInput::Hover(h) => slider.set_hovered(h),
        SlideInput::DragStart(x) => slider.drag_start(x),
        SlideInput::DragEnd(x) => slider.drag_end(x),
    }
}
