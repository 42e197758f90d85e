use std::time::Instant;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::state::AppState;
use crate::app::widgets::Widgets;
use crate::overlay::Dialog;
use crate::page::SectionKind;
use crate::ui::hits::HitMap;
use crate::ui::widgets as ui;

/// What the event loop needs to know about the frame just drawn.
#[derive(Debug, Default)]
pub struct FrameInfo {
    pub hits: HitMap,
    /// Animation trigger rows on the page, keyed by element.
    pub triggers: Vec<(String, u16)>,
    /// Widths the sliders were laid out in, when drawn.
    pub catalog_width: Option<u16>,
    pub history_width: Option<u16>,
}

pub fn render(f: &mut Frame, state: &AppState, widgets: &Widgets, now: Instant) -> FrameInfo {
    // Fixed header + scrolled page + status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header_area = vertical[0];
    let body_area = vertical[1];
    let status_area = vertical[2];

    let mut info = FrameInfo::default();

    let page_area = Rect::new(0, 0, body_area.width, state.layout.height().max(body_area.height));
    let mut page = Buffer::empty(page_area);
    let mut page_hits = HitMap::default();
    let progress = |key: &str| widgets.host.reveal.progress(key, now);

    for (kind, pos) in &state.layout.sections {
        let area = Rect::new(0, pos.top, page_area.width, pos.height);
        let key = format!("section:{}", pos.id);
        match kind {
            SectionKind::Hero => {
                ui::draw_hero(
                    &mut page,
                    area,
                    state.layout.has(SectionKind::Catalog),
                    &mut page_hits,
                );
            }
            SectionKind::History => {
                info.history_width =
                    ui::draw_history(&mut page, area, widgets.history.as_ref(), &mut page_hits);
            }
            SectionKind::Catalog => {
                info.catalog_width = ui::draw_catalog(
                    &mut page,
                    area,
                    state,
                    widgets.renderer.carousel(),
                    &mut page_hits,
                    &mut info.triggers,
                    &progress,
                );
            }
            SectionKind::Contact => ui::draw_contact(&mut page, area),
        }
        ui::fade(&mut page, area, progress(&key));
        info.triggers.push((key, pos.top));
    }

    blit(&page, state.scroll_offset, body_area, f.buffer_mut());
    info.hits
        .extend_scrolled(page_hits, state.scroll_offset, body_area);

    ui::render_header(f, header_area, state, &mut info.hits);
    ui::render_status_bar(f, status_area, state);

    if widgets.modal.is_open()
        && let Some(overlay) = &state.overlay
    {
        ui::render_overlay(f, overlay, &mut info.hits);
    }

    info
}

/// Copy the visible window of the page onto the screen.
fn blit(page: &Buffer, scroll: u16, target: Rect, out: &mut Buffer) {
    for dy in 0..target.height {
        let src_y = scroll.saturating_add(dy);
        if src_y >= page.area.height {
            break;
        }
        for dx in 0..target.width {
            if let (Some(src), Some(dst)) = (
                page.cell((dx, src_y)),
                out.cell_mut((target.x + dx, target.y + dy)),
            ) {
                *dst = src.clone();
            }
        }
    }
}
