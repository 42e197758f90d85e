use serde::{Deserialize, Serialize};
use tracing::debug;

/// A live carousel instance bound to the slides currently on the surface.
pub trait Carousel {
    /// Release the instance. A destroyed carousel ignores further input.
    fn destroy(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoplayConfig {
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default)]
    pub disable_on_interaction: bool,
    #[serde(default)]
    pub pause_on_hover: bool,
}

/// Responsive override, applied when the surface is at least `min_width`
/// columns wide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u16,
    pub slides_per_view: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default = "default_true")]
    pub looping: bool,
    #[serde(default = "default_true")]
    pub grab_cursor: bool,
    /// Gap between slides, in columns.
    #[serde(default = "default_space")]
    pub space_between: u16,
    #[serde(default = "default_slides_per_view")]
    pub slides_per_view: usize,
    #[serde(default)]
    pub autoplay: Option<AutoplayConfig>,
    /// Transition length; added to the autoplay delay to get the advance period.
    #[serde(default = "default_speed")]
    pub speed_ms: u64,
    #[serde(default = "default_true")]
    pub pagination: bool,
    #[serde(default = "default_true")]
    pub navigation: bool,
    #[serde(default)]
    pub breakpoints: Vec<Breakpoint>,
}

fn default_true() -> bool {
    true
}
fn default_space() -> u16 {
    1
}
fn default_slides_per_view() -> usize {
    1
}
fn default_speed() -> u64 {
    300
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            looping: true,
            grab_cursor: true,
            space_between: default_space(),
            slides_per_view: default_slides_per_view(),
            autoplay: None,
            speed_ms: default_speed(),
            pagination: true,
            navigation: true,
            breakpoints: Vec::new(),
        }
    }
}

impl SliderConfig {
    /// Conveyor-style catalog strip: continuous autoplay that pauses while
    /// the pointer rests on it, more books per view on wider terminals.
    pub fn catalog() -> Self {
        Self {
            space_between: 2,
            autoplay: Some(AutoplayConfig {
                delay_ms: 0,
                disable_on_interaction: false,
                pause_on_hover: true,
            }),
            speed_ms: 6000,
            breakpoints: vec![
                Breakpoint {
                    min_width: 72,
                    slides_per_view: 2,
                },
                Breakpoint {
                    min_width: 124,
                    slides_per_view: 3,
                },
            ],
            ..Self::default()
        }
    }

    /// Chapter slider of the history section.
    pub fn history() -> Self {
        Self {
            autoplay: Some(AutoplayConfig {
                delay_ms: 4200,
                disable_on_interaction: false,
                pause_on_hover: false,
            }),
            breakpoints: vec![
                Breakpoint {
                    min_width: 96,
                    slides_per_view: 1,
                },
                Breakpoint {
                    min_width: 124,
                    slides_per_view: 1,
                },
            ],
            ..Self::default()
        }
    }

    pub fn slides_per_view_at(&self, width: u16) -> usize {
        self.breakpoints
            .iter()
            .filter(|bp| bp.min_width <= width)
            .max_by_key(|bp| bp.min_width)
            .map_or(self.slides_per_view, |bp| bp.slides_per_view)
            .max(1)
    }
}

/// Terminal carousel: an index over `slides` items with autoplay, looping
/// and drag-to-swipe.
#[derive(Debug, Clone)]
pub struct Slider {
    config: SliderConfig,
    slides: usize,
    index: usize,
    elapsed_ms: u64,
    hovered: bool,
    autoplay_stopped: bool,
    drag_origin: Option<u16>,
    /// Width of the last drawn surface, `None` until first drawn.
    view_width: Option<u16>,
    destroyed: bool,
}

/// Minimum horizontal travel, in columns, for a drag to count as a swipe.
const SWIPE_THRESHOLD: u16 = 3;

impl Slider {
    pub fn new(config: SliderConfig, slides: usize) -> Self {
        debug!(slides, "Carousel created");
        Self {
            config,
            slides,
            index: 0,
            elapsed_ms: 0,
            hovered: false,
            autoplay_stopped: false,
            drag_origin: None,
            view_width: None,
            destroyed: false,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.slides
    }

    pub fn is_empty(&self) -> bool {
        self.slides == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Slide indices to draw at the given width, left to right. When every
    /// slide fits there is nothing to scroll and they are shown in order.
    pub fn visible(&self, width: u16) -> Vec<usize> {
        if self.destroyed || self.slides == 0 {
            return Vec::new();
        }
        let per_view = self.config.slides_per_view_at(width);
        if self.slides <= per_view {
            return (0..self.slides).collect();
        }
        (0..per_view)
            .map(|offset| {
                if self.config.looping {
                    (self.index + offset) % self.slides
                } else {
                    (self.index + offset).min(self.slides - 1)
                }
            })
            .collect()
    }

    /// Record the width the slider was last drawn at. Once every slide fits
    /// the slider locks at the first slide.
    pub fn set_view_width(&mut self, width: u16) {
        self.view_width = Some(width);
        if !self.overflows() {
            self.index = 0;
            self.elapsed_ms = 0;
            self.drag_origin = None;
        }
    }

    /// `false` when every slide fits the last drawn width, leaving nothing
    /// to scroll. Unknown width counts as overflowing.
    pub fn overflows(&self) -> bool {
        self.view_width
            .is_none_or(|w| self.slides > self.config.slides_per_view_at(w))
    }

    pub fn next(&mut self) {
        if !self.overflows() {
            return;
        }
        self.interacted();
        self.advance();
    }

    pub fn prev(&mut self) {
        if self.destroyed || self.slides == 0 || !self.overflows() {
            return;
        }
        self.interacted();
        if self.index > 0 {
            self.index -= 1;
        } else if self.config.looping {
            self.index = self.slides - 1;
        }
    }

    /// Jump from a pagination dot.
    pub fn go_to(&mut self, index: usize) {
        if self.destroyed
            || index >= self.slides
            || !self.config.pagination
            || !self.overflows()
        {
            return;
        }
        self.interacted();
        self.index = index;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn drag_start(&mut self, column: u16) {
        if self.config.grab_cursor && !self.destroyed {
            self.drag_origin = Some(column);
        }
    }

    pub fn drag_end(&mut self, column: u16) {
        let Some(origin) = self.drag_origin.take() else {
            return;
        };
        if origin.abs_diff(column) < SWIPE_THRESHOLD {
            return;
        }
        if column < origin {
            self.next();
        } else {
            self.prev();
        }
    }

    /// Advance autoplay by `dt_ms` of wall time.
    pub fn tick(&mut self, dt_ms: u64) {
        let Some(autoplay) = &self.config.autoplay else {
            return;
        };
        if self.destroyed || self.autoplay_stopped || self.slides < 2 || !self.overflows() {
            return;
        }
        if autoplay.pause_on_hover && self.hovered {
            return;
        }
        let period = autoplay.delay_ms.saturating_add(self.config.speed_ms).max(1);
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        while self.elapsed_ms >= period {
            self.elapsed_ms -= period;
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.destroyed || self.slides == 0 {
            return;
        }
        if self.index + 1 < self.slides {
            self.index += 1;
        } else if self.config.looping {
            self.index = 0;
        }
    }

    fn interacted(&mut self) {
        self.elapsed_ms = 0;
        if self
            .config
            .autoplay
            .as_ref()
            .is_some_and(|a| a.disable_on_interaction)
        {
            self.autoplay_stopped = true;
        }
    }
}

impl Carousel for Slider {
    fn destroy(&mut self) {
        debug!(slides = self.slides, "Carousel destroyed");
        self.destroyed = true;
        self.drag_origin = None;
    }
}
