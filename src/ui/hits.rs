use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    NavLink(usize),
    Anchor(&'static str),
    Filter(usize),
    Search,
    /// Anywhere inside the catalog carousel.
    CatalogStrip,
    Card { book_id: String },
    CardAction { book_id: String, action: &'static str },
    CarouselPrev,
    CarouselNext,
    CarouselDot(usize),
    HistoryPrev,
    HistoryNext,
    HistoryDot(usize),
    OverlayBuy,
    OverlayClose,
    Overlay,
}

impl HitTarget {
    pub fn in_catalog_strip(&self) -> bool {
        matches!(
            self,
            HitTarget::CatalogStrip | HitTarget::Card { .. } | HitTarget::CardAction { .. }
        )
    }
}

/// Clickable regions of the last drawn frame. Regions pushed later sit on
/// top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    pub fn target_at(&self, x: u16, y: u16) -> Option<&HitTarget> {
        let pos = Position { x, y };
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| target)
    }

    /// Move regions drawn on the scrolled page onto the screen, dropping
    /// whatever falls outside `viewport`.
    pub fn extend_scrolled(&mut self, page: HitMap, scroll: u16, viewport: Rect) {
        for (area, target) in page.regions {
            let top = i32::from(area.y) - i32::from(scroll) + i32::from(viewport.y);
            let bottom = top + i32::from(area.height);
            let clipped_top = top.max(i32::from(viewport.y));
            let clipped_bottom = bottom.min(i32::from(viewport.bottom()));
            if clipped_bottom <= clipped_top {
                continue;
            }
            self.push(
                Rect {
                    x: area.x + viewport.x,
                    y: clipped_top as u16,
                    width: area.width,
                    height: (clipped_bottom - clipped_top) as u16,
                },
                target,
            );
        }
    }
}
