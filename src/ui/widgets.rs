use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::state::{AppState, Focus};
use crate::overlay::DetailOverlay;
use crate::page::content::{self, CHAPTERS};
use crate::render::carousel::Slider;
use crate::render::fragment::CardFragment;
use crate::ui::hits::{HitMap, HitTarget};
use crate::ui::theme;
use crate::util::text::truncate;

const DETAILS_BUTTON: &str = "[Ver detalhes]";

fn row(area: Rect, offset: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y.saturating_add(offset),
        width: area.width,
        height: u16::from(offset < area.height),
    }
}

fn padded(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        width: area.width.saturating_sub(pad * 2),
        ..area
    }
}

/// Dim an element that is still fading in; blank it until it is triggered.
pub fn fade(buf: &mut Buffer, area: Rect, progress: f32) {
    if progress <= 0.0 {
        Clear.render(area, buf);
    } else if progress < 1.0 {
        buf.set_style(area, theme::DIM);
    }
}

pub fn render_header(f: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let style = if state.header_scrolled {
        theme::HEADER_GLASS
    } else {
        theme::HEADER_CLEAR
    };
    f.buffer_mut().set_style(area, style);

    let brand = Paragraph::new(Span::styled(format!(" {}", content::BRAND), theme::BRAND));
    f.render_widget(brand, area);

    let labels: Vec<String> = state
        .nav_links
        .iter()
        .map(|l| format!(" {} ", l.label))
        .collect();
    let total: u16 = labels.iter().map(|l| l.width() as u16 + 1).sum();
    let mut x = area.right().saturating_sub(total);

    for (i, (link, label)) in state.nav_links.iter().zip(labels).enumerate() {
        let width = label.width() as u16;
        let link_style = if state.focus == Focus::Nav && i == state.nav_cursor {
            theme::HIGHLIGHT
        } else if link.active {
            theme::NAV_ACTIVE
        } else {
            theme::NAV_LINK
        };
        let rect = Rect::new(x, area.y, width, 1).intersection(area);
        f.render_widget(Paragraph::new(Span::styled(label, link_style)), rect);
        hits.push(rect, HitTarget::NavLink(i));
        x = x.saturating_add(width + 1);
    }
}

pub fn draw_hero(buf: &mut Buffer, area: Rect, catalog_anchor: bool, hits: &mut HitMap) {
    let centered = |text: Line<'static>, offset: u16, buf: &mut Buffer| {
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(row(area, offset), buf);
    };

    centered(
        Line::from(Span::styled(content::BRAND.to_uppercase(), theme::BRAND)),
        2,
        buf,
    );
    centered(
        Line::from(Span::styled(content::HERO_TITLE, theme::HEADER)),
        4,
        buf,
    );
    Paragraph::new(Span::styled(content::HERO_TAGLINE, theme::DIM))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(
            Rect {
                height: 2,
                ..row(padded(area, 4), 5)
            },
            buf,
        );

    if catalog_anchor {
        let label = "[ Ver catálogo ↓ ]";
        let width = label.width() as u16;
        let rect = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + 8,
            width.min(area.width),
            1,
        );
        Paragraph::new(Span::styled(label, theme::BUTTON)).render(rect, buf);
        hits.push(rect, HitTarget::Anchor("catalogo"));
    }
}

/// Returns the width the chapter slides were laid out in.
pub fn draw_history(
    buf: &mut Buffer,
    area: Rect,
    slider: Option<&Slider>,
    hits: &mut HitMap,
) -> Option<u16> {
    Paragraph::new(Span::styled("Nossa história", theme::HEADER)).render(row(padded(area, 2), 0), buf);

    let slider = slider?;

    let arrows = if slider.config().navigation { 3 } else { 0 };
    let stage = Rect {
        y: area.y + 1,
        height: 6,
        ..padded(area, 2)
    };
    let inner = padded(stage, arrows);

    if arrows > 0 {
        let prev = Rect::new(stage.x, stage.y + 2, 2, 1);
        let next = Rect::new(stage.right().saturating_sub(2), stage.y + 2, 2, 1);
        Paragraph::new("‹").style(theme::BUTTON).render(prev, buf);
        Paragraph::new("›").style(theme::BUTTON).render(next, buf);
        hits.push(prev, HitTarget::HistoryPrev);
        hits.push(next, HitTarget::HistoryNext);
    }

    let visible = slider.visible(inner.width);
    let count = visible.len() as u16;
    if count > 0 {
        let gap = slider.config().space_between;
        let width = inner.width.saturating_sub(gap * (count - 1)) / count;
        for (slot, index) in visible.iter().enumerate() {
            let Some(chapter) = CHAPTERS.get(*index) else {
                continue;
            };
            let rect = Rect {
                x: inner.x + slot as u16 * (width + gap),
                width,
                ..inner
            };
            Paragraph::new(chapter.body)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(format!(" {} ", chapter.title))
                        .borders(Borders::ALL)
                        .border_style(theme::BORDER_UNFOCUSED),
                )
                .render(rect, buf);
        }
    }

    if slider.config().pagination {
        draw_dots(buf, row(area, 7), slider, hits, HitTarget::HistoryDot);
    }
    Some(inner.width)
}

fn draw_dots(
    buf: &mut Buffer,
    area: Rect,
    slider: &Slider,
    hits: &mut HitMap,
    target: fn(usize) -> HitTarget,
) {
    let width = (slider.len() as u16).saturating_mul(2);
    let mut x = area.x + area.width.saturating_sub(width) / 2;
    for i in 0..slider.len() {
        let (dot, style) = if i == slider.index() {
            ("●", theme::NAV_ACTIVE)
        } else {
            ("○", theme::DIM)
        };
        let rect = Rect::new(x, area.y, 1, 1).intersection(area);
        Paragraph::new(Span::styled(dot, style)).render(rect, buf);
        hits.push(rect, target(i));
        x = x.saturating_add(2);
    }
}

/// Returns the width the carousel slides were laid out in, when a carousel
/// was drawn.
pub fn draw_catalog(
    buf: &mut Buffer,
    area: Rect,
    state: &AppState,
    slider: Option<&Slider>,
    hits: &mut HitMap,
    triggers: &mut Vec<(String, u16)>,
    progress: &dyn Fn(&str) -> f32,
) -> Option<u16> {
    let content = padded(area, 2);
    let title = Line::from(vec![
        Span::styled("Catálogo", theme::HEADER),
        Span::styled(
            format!("  {} de {} livros", state.surface.cards().len(), state.catalog.len()),
            theme::DIM,
        ),
    ]);
    Paragraph::new(title).render(row(content, 0), buf);

    // Filter buttons
    let mut x = content.x;
    for (i, button) in state.filters.iter().enumerate() {
        let label = format!(" {} ", button.label);
        let width = label.width() as u16;
        if x + width > content.right() {
            break;
        }
        let style = if button.active {
            theme::FILTER_ACTIVE
        } else if state.focus == Focus::Filters && i == state.filter_cursor {
            theme::BORDER_FOCUSED
        } else {
            theme::FILTER
        };
        let rect = Rect::new(x, content.y + 2, width, 1);
        Paragraph::new(Span::styled(label, style)).render(rect, buf);
        hits.push(rect, HitTarget::Filter(i));
        x += width + 1;
    }

    // Search box
    let search = Rect {
        y: content.y + 4,
        height: 3,
        width: content.width.min(60),
        ..content
    };
    let border = focus_border(state.search_active);
    let text = if state.search_input.is_empty() && !state.search_active {
        Span::styled("título, autor, tag…", theme::DIM)
    } else if state.search_active {
        Span::raw(format!("{}▏", state.search_input))
    } else {
        Span::raw(state.search_input.clone())
    };
    Paragraph::new(text)
        .block(
            Block::default()
                .title(" Buscar (/) ")
                .borders(Borders::ALL)
                .border_style(border),
        )
        .render(search, buf);
    hits.push(search, HitTarget::Search);

    // Carousel
    let strip = Rect {
        y: area.y + 8,
        height: 13,
        ..area
    };
    hits.push(strip, HitTarget::CatalogStrip);

    // Every card on the surface gets a trigger, shown or not, so cards the
    // carousel brings in later still fade in.
    for card in state.surface.cards() {
        triggers.push((card_key(card), strip.y));
    }

    if state.surface.shows_empty_state() {
        Paragraph::new("Nenhum livro encontrado. Tente outro filtro ou busca.")
            .style(theme::DIM)
            .alignment(Alignment::Center)
            .render(row(strip, 5), buf);
        return None;
    }

    let slider = slider?;

    let arrows = if slider.config().navigation { 2 } else { 0 };
    let inner = padded(strip, arrows);
    if arrows > 0 {
        let prev = Rect::new(strip.x, strip.y + 6, 2, 1);
        let next = Rect::new(strip.right().saturating_sub(2), strip.y + 6, 2, 1);
        Paragraph::new("‹").style(theme::BUTTON).render(prev, buf);
        Paragraph::new("›").style(theme::BUTTON).render(next, buf);
        hits.push(prev, HitTarget::CarouselPrev);
        hits.push(next, HitTarget::CarouselNext);
    }

    let visible = slider.visible(inner.width);
    let count = visible.len() as u16;
    if count > 0 {
        let gap = slider.config().space_between;
        let width = inner.width.saturating_sub(gap * (count - 1)) / count;
        for (slot, index) in visible.iter().enumerate() {
            let Some(card) = state.surface.cards().get(*index) else {
                continue;
            };
            let rect = Rect {
                x: inner.x + slot as u16 * (width + gap),
                width,
                ..inner
            };
            let focused = state.focus == Focus::Catalog && slot == 0;
            draw_card(buf, rect, card, focused, hits);
            fade(buf, rect, progress(&card_key(card)));
        }
    }

    if slider.config().pagination {
        draw_dots(buf, row(area, 21), slider, hits, HitTarget::CarouselDot);
    }
    Some(inner.width)
}

fn card_key(card: &CardFragment) -> String {
    format!("card:{}", card.book_id)
}

fn draw_card(buf: &mut Buffer, area: Rect, card: &CardFragment, focused: bool, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(focused));
    let inner = block.inner(area);
    block.render(area, buf);
    hits.push(
        area,
        HitTarget::Card {
            book_id: card.book_id.clone(),
        },
    );

    if inner.width < 8 || inner.height < 10 {
        return;
    }
    let width = inner.width as usize;

    // Cover
    let cover = Rect { height: 3, ..inner };
    match &card.cover {
        Some(layers) => {
            buf.set_style(cover, theme::COVER);
            Paragraph::new(truncate(&format!("▣ {}", layers.file_name()), width))
                .style(theme::COVER)
                .alignment(Alignment::Center)
                .render(row(cover, 1), buf);
        }
        None => {
            let gradient: String = "░▒▓▒".chars().cycle().take(width).collect();
            let lines: Vec<Line> = (0..3).map(|_| Line::from(gradient.clone())).collect();
            Paragraph::new(lines)
                .style(theme::COVER_FALLBACK)
                .render(cover, buf);
        }
    }

    Paragraph::new(Span::styled(truncate(&card.title, width), theme::HEADER)).render(row(inner, 3), buf);
    Paragraph::new(Span::styled(truncate(&card.byline, width), theme::DIM)).render(row(inner, 4), buf);

    // Description is clipped to three rows, the data stays whole.
    Paragraph::new(card.description.as_str())
        .wrap(Wrap { trim: true })
        .render(
            Rect {
                y: inner.y + 5,
                height: 3,
                ..inner
            },
            buf,
        );

    let footer = row(inner, 8);
    Paragraph::new(Span::styled(card.price.as_str(), theme::PRICE)).render(footer, buf);
    let button_width = (DETAILS_BUTTON.width() as u16).min(footer.width);
    let button = Rect {
        x: footer.right() - button_width,
        width: button_width,
        ..footer
    };
    Paragraph::new(Span::styled(DETAILS_BUTTON, theme::BUTTON)).render(button, buf);
    hits.push(
        button,
        HitTarget::CardAction {
            book_id: card.book_id.clone(),
            action: card.action,
        },
    );

    Paragraph::new(chip_line(&card.chips, width)).render(row(inner, 9), buf);
}

fn chip_line(tags: &[String], width: usize) -> Line<'static> {
    let mut spans = Vec::new();
    let mut used = 0;
    for tag in tags {
        let chip = format!(" {tag} ");
        let w = chip.width();
        if used + w > width {
            break;
        }
        used += w + 1;
        spans.push(Span::styled(chip, theme::CHIP));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

pub fn draw_contact(buf: &mut Buffer, area: Rect) {
    let content = padded(area, 2);
    Paragraph::new(Span::styled("Contato", theme::HEADER)).render(row(content, 1), buf);
    for (i, line) in content::CONTACT_LINES.iter().enumerate() {
        Paragraph::new(Span::styled(*line, theme::DIM)).render(row(content, 3 + i as u16), buf);
    }
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let key_hints = if state.search_active {
        "Esc/Enter: sair da busca | Ctrl-U: limpar"
    } else {
        "Tab: foco | ←/→: mover | Enter: abrir | /: buscar | 1-9: filtro | j/k: rolar | q: sair"
    };

    let filter = state
        .filters
        .iter()
        .find(|b| b.active)
        .map_or("Todos", |b| b.label.as_str());
    let mut right = format!("{} | {}/{}", filter, state.surface.cards().len(), state.catalog.len());
    if !state.view.query.is_empty() {
        right = format!("\"{}\" | {}", state.view.query, right);
    }

    let total_width = area.width as usize;
    let left = truncate(key_hints, total_width.saturating_sub(right.width() + 1));
    let padding = total_width.saturating_sub(left.width() + right.width());

    let line = Line::from(vec![
        Span::styled(left, theme::STATUS_BAR),
        Span::styled(" ".repeat(padding), theme::STATUS_BAR),
        Span::styled(right, theme::STATUS_BAR),
    ]);
    f.render_widget(Paragraph::new(line).style(theme::STATUS_BAR), area);
}

pub fn render_overlay(f: &mut Frame, overlay: &DetailOverlay, hits: &mut HitMap) {
    let full = f.area();
    let width = full.width.saturating_sub(4).min(72);
    let height = full.height.saturating_sub(2).min(20);
    let area = Rect {
        x: full.x + (full.width.saturating_sub(width)) / 2,
        y: full.y + (full.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, area);
    hits.push(area, HitTarget::Overlay);

    let block = Block::default()
        .title(format!(" {} ", overlay.title))
        .borders(Borders::ALL)
        .border_style(theme::BORDER_FOCUSED);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 8 {
        return;
    }

    let cover = Rect { height: 3, ..inner };
    if let Some(c) = &overlay.cover {
        f.buffer_mut().set_style(cover, theme::COVER);
        f.render_widget(
            Paragraph::new(format!("▣ {}", c.layers.file_name()))
                .style(theme::COVER)
                .alignment(Alignment::Center),
            row(cover, 1),
        );
    }

    f.render_widget(
        Paragraph::new(Span::styled(overlay.meta.as_str(), theme::DIM)),
        row(inner, 3),
    );
    f.render_widget(
        Paragraph::new(Span::styled(overlay.price.as_str(), theme::PRICE)),
        row(inner, 4),
    );

    let footer_rows = 4;
    let body = Rect {
        y: inner.y + 6,
        height: inner.height.saturating_sub(6 + footer_rows),
        ..inner
    };
    f.render_widget(
        Paragraph::new(overlay.description.as_str()).wrap(Wrap { trim: true }),
        body,
    );

    let chips: Vec<Span> = overlay
        .tags
        .iter()
        .flat_map(|t| [Span::styled(format!(" {t} "), theme::CHIP), Span::raw(" ")])
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(chips)).wrap(Wrap { trim: false }),
        Rect {
            y: body.bottom(),
            height: 2,
            ..inner
        },
    );

    let buttons = row(inner, inner.height - 1);
    let buy_label = "[ Comprar / Ver detalhes ]";
    let close_label = "[ Fechar ]";
    let buy = Rect {
        width: (buy_label.width() as u16).min(buttons.width),
        ..buttons
    };
    let close_width = close_label.width() as u16;
    let close = Rect {
        x: buttons.right().saturating_sub(close_width),
        width: close_width.min(buttons.width),
        ..buttons
    };
    let buy_style = if overlay.has_buy_target() {
        theme::BUTTON
    } else {
        theme::DIM
    };
    f.render_widget(Paragraph::new(Span::styled(buy_label, buy_style)), buy);
    f.render_widget(Paragraph::new(Span::styled(close_label, theme::BUTTON)), close);
    hits.push(buy, HitTarget::OverlayBuy);
    hits.push(close, HitTarget::OverlayClose);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    }
}
