use tracing::debug;

use crate::app::actions::{Action, DelegatedClick, SideEffect, SlideInput};
use crate::app::state::{AppState, CHROME_ROWS, Focus};
use crate::overlay;
use crate::query::Filter;
use crate::render::fragment::OPEN_MODAL;

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::ScrollBy(delta) => {
            let target = (i32::from(state.scroll_offset) + delta).clamp(0, i32::from(u16::MAX));
            state.scroll_to(target as u16);
            vec![]
        }
        Action::Resize { height } => {
            state.viewport_height = height.saturating_sub(CHROME_ROWS);
            state.scroll_to(state.scroll_offset);
            vec![]
        }
        Action::FocusNext => {
            state.focus = match state.focus {
                Focus::Nav => Focus::Filters,
                Focus::Filters => Focus::Catalog,
                Focus::Catalog => Focus::Nav,
            };
            vec![]
        }
        Action::FocusPrev => {
            state.focus = match state.focus {
                Focus::Nav => Focus::Catalog,
                Focus::Filters => Focus::Nav,
                Focus::Catalog => Focus::Filters,
            };
            vec![]
        }
        Action::MoveLeft => match state.focus {
            Focus::Nav => {
                state.nav_cursor = state.nav_cursor.saturating_sub(1);
                vec![]
            }
            Focus::Filters => {
                state.filter_cursor = state.filter_cursor.saturating_sub(1);
                vec![]
            }
            Focus::Catalog => vec![SideEffect::Carousel(SlideInput::Prev)],
        },
        Action::MoveRight => match state.focus {
            Focus::Nav => {
                if state.nav_cursor + 1 < state.nav_links.len() {
                    state.nav_cursor += 1;
                }
                vec![]
            }
            Focus::Filters => {
                if state.filter_cursor + 1 < state.filters.len() {
                    state.filter_cursor += 1;
                }
                vec![]
            }
            Focus::Catalog => vec![SideEffect::Carousel(SlideInput::Next)],
        },
        Action::Select => match state.focus {
            Focus::Nav => update(state, Action::ActivateNav(state.nav_cursor)),
            Focus::Filters => update(state, Action::ActivateFilter(state.filter_cursor)),
            // Catalog selection arrives as a delegated click
            Focus::Catalog => vec![],
        },
        Action::ActivateNav(index) => {
            let Some(target) = state.nav_links.get(index).and_then(|l| l.target()) else {
                return vec![];
            };
            if let Some(top) = state.layout.top_of(target) {
                state.nav_cursor = index;
                state.scroll_to(top);
            }
            vec![]
        }
        Action::ActivateFilter(index) => {
            if index >= state.filters.len() {
                return vec![];
            }
            for button in state.filters.iter_mut() {
                button.active = false;
            }
            let button = &mut state.filters[index];
            button.active = true;
            state.view.filter = Filter::from_token(button.token.as_deref());
            state.filter_cursor = index;
            vec![SideEffect::Render]
        }
        Action::ToggleSearch => {
            state.search_active = !state.search_active;
            vec![]
        }
        Action::SearchInput(ch) => {
            if !state.search_active {
                return vec![];
            }
            state.search_input.push(ch);
            vec![SideEffect::DebounceSearch(state.search_input.clone())]
        }
        Action::SearchBackspace => {
            if !state.search_active {
                return vec![];
            }
            state.search_input.pop();
            vec![SideEffect::DebounceSearch(state.search_input.clone())]
        }
        Action::SearchClear => {
            state.search_input.clear();
            vec![SideEffect::DebounceSearch(String::new())]
        }
        Action::SearchSettled(text) => {
            state.view.query = text;
            vec![SideEffect::Render]
        }
        Action::ActivateCatalog(click) => activate_catalog(state, click),
        Action::Carousel(input) => vec![SideEffect::Carousel(input)],
        Action::History(input) => vec![SideEffect::History(input)],
        Action::CloseOverlay => vec![SideEffect::HideOverlay],
        Action::Buy => {
            let Some(href) = state
                .overlay
                .as_ref()
                .filter(|o| o.has_buy_target())
                .map(|o| o.buy_href.clone())
            else {
                debug!("No buy target for current overlay");
                return vec![];
            };
            vec![SideEffect::OpenUrl(href)]
        }
    }
}

fn activate_catalog(state: &mut AppState, click: DelegatedClick) -> Vec<SideEffect> {
    if click.action.as_deref() != Some(OPEN_MODAL) {
        return vec![];
    }
    let Some(book_id) = click.book_id else {
        return vec![];
    };
    let Some(book) = state.catalog.find(&book_id) else {
        debug!(book = %book_id, "Clicked card has no catalog record");
        return vec![];
    };

    overlay::bind(state.overlay.as_mut(), book);
    vec![SideEffect::ShowOverlay]
}
