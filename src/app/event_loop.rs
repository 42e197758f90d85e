use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app::actions::{Action, DelegatedClick, SideEffect, SlideInput};
use crate::app::debounce::Debouncer;
use crate::app::state::{AppState, Focus};
use crate::app::update::update;
use crate::app::view::{self, FrameInfo};
use crate::app::widgets::Widgets;
use crate::overlay::Dialog;
use crate::render::fragment::OPEN_MODAL;
use crate::ui::hits::{HitMap, HitTarget};
use crate::util::config::AppConfig;

const SCROLL_STEP: i32 = 3;

pub async fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;

    result
}

/// Everything the loop threads through `dispatch`.
struct Runtime {
    state: AppState,
    widgets: Widgets,
    debouncer: Debouncer,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Runtime {
    fn dispatch(&mut self, action: Action) {
        for effect in update(&mut self.state, action) {
            let Some(effect) = self.widgets.apply(&mut self.state, effect) else {
                continue;
            };
            match effect {
                SideEffect::DebounceSearch(text) => {
                    self.debouncer
                        .schedule(&self.action_tx, Action::SearchSettled(text));
                }
                SideEffect::OpenUrl(url) => {
                    tokio::task::spawn_blocking(move || {
                        if let Err(e) = crate::util::browser::open_link(&url) {
                            error!(error = %e, "Failed to open store link");
                        }
                    });
                }
                other => debug!(effect = ?other, "Unhandled side effect"),
            }
        }
    }
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
) -> Result<()> {
    let state = AppState::new(&config);
    let widgets = Widgets::new(&config, &state);
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut rt = Runtime {
        state,
        widgets,
        debouncer: Debouncer::new(Duration::from_millis(config.catalog.search_debounce_ms)),
        action_tx,
    };

    let size = terminal.size()?;
    rt.dispatch(Action::Resize {
        height: size.height,
    });
    // Initial catalog render
    rt.widgets.apply(&mut rt.state, SideEffect::Render);

    let mut event_stream = crossterm::event::EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(config.ui.tick_ms));
    let mut last_tick = Instant::now();

    loop {
        // Render
        let mut info = FrameInfo::default();
        terminal.draw(|f| info = view::render(f, &rt.state, &rt.widgets, Instant::now()))?;

        let reveal = &mut rt.widgets.host.reveal;
        if reveal.is_stale() {
            reveal.refresh_hard(std::mem::take(&mut info.triggers));
        }
        reveal.on_scroll(rt.state.scroll_offset, rt.state.viewport_height, Instant::now());
        rt.widgets
            .set_view_widths(info.catalog_width, info.history_width);
        let hits = std::mem::take(&mut info.hits);

        if rt.state.should_quit {
            break;
        }

        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    for action in map_event_to_actions(&event, &rt, &hits) {
                        rt.dispatch(action);
                    }
                }
            }
            // Settled search text
            Some(action) = action_rx.recv() => {
                rt.dispatch(action);
            }
            // Autoplay and fade-in
            _ = tick.tick() => {
                let now = Instant::now();
                let elapsed = now.duration_since(last_tick).as_millis() as u64;
                last_tick = now;
                rt.widgets.tick(elapsed);
            }
        }
    }

    Ok(())
}

fn map_event_to_actions(event: &Event, rt: &Runtime, hits: &HitMap) -> Vec<Action> {
    match event {
        Event::Resize(_, height) => vec![Action::Resize { height: *height }],
        Event::Mouse(mouse) => map_mouse(mouse, rt, hits),
        Event::Key(key) => map_key(key, rt).into_iter().collect(),
        _ => vec![],
    }
}

fn map_key(key: &KeyEvent, rt: &Runtime) -> Option<Action> {
    let KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    } = key
    else {
        return None;
    };
    let state = &rt.state;

    if modifiers.contains(KeyModifiers::CONTROL) && *code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Detail overlay swallows input while open
    if rt.widgets.modal.is_open() {
        return match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseOverlay),
            KeyCode::Enter | KeyCode::Char('b') => Some(Action::Buy),
            _ => None,
        };
    }

    if state.search_active {
        return match code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ToggleSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SearchClear)
            }
            KeyCode::Char(c) => Some(Action::SearchInput(*c)),
            _ => None,
        };
    }

    let page = i32::from(state.viewport_height.max(1));
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollBy(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollBy(-1)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::ScrollBy(page)),
        KeyCode::PageUp => Some(Action::ScrollBy(-page)),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollBy(-i32::from(u16::MAX))),
        KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollBy(i32::from(u16::MAX))),
        KeyCode::Char('/') => Some(Action::ToggleSearch),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
            Some(Action::ActivateFilter(index))
        }
        KeyCode::Char('[') => Some(Action::History(SlideInput::Prev)),
        KeyCode::Char(']') => Some(Action::History(SlideInput::Next)),
        KeyCode::Enter if state.focus == Focus::Catalog => {
            Some(Action::ActivateCatalog(DelegatedClick {
                action: Some(OPEN_MODAL.to_string()),
                book_id: rt.widgets.focused_book_id(state),
            }))
        }
        KeyCode::Enter => Some(Action::Select),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, rt: &Runtime, hits: &HitMap) -> Vec<Action> {
    let MouseEvent {
        kind, column, row, ..
    } = *mouse;
    let target = hits.target_at(column, row);

    match kind {
        MouseEventKind::ScrollDown if !rt.widgets.modal.is_open() => {
            vec![Action::ScrollBy(SCROLL_STEP)]
        }
        MouseEventKind::ScrollUp if !rt.widgets.modal.is_open() => {
            vec![Action::ScrollBy(-SCROLL_STEP)]
        }
        MouseEventKind::Moved => {
            let hovering = target.is_some_and(HitTarget::in_catalog_strip);
            vec![Action::Carousel(SlideInput::Hover(hovering))]
        }
        MouseEventKind::Up(MouseButton::Left) => {
            vec![Action::Carousel(SlideInput::DragEnd(column))]
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if rt.widgets.modal.is_open() {
                return match target {
                    Some(HitTarget::OverlayBuy) => vec![Action::Buy],
                    Some(HitTarget::Overlay) => vec![],
                    // Close button and backdrop
                    _ => vec![Action::CloseOverlay],
                };
            }
            map_click(target, column, rt)
        }
        _ => vec![],
    }
}

fn map_click(target: Option<&HitTarget>, column: u16, rt: &Runtime) -> Vec<Action> {
    let Some(target) = target else {
        return vec![];
    };
    match target {
        HitTarget::NavLink(i) => vec![Action::ActivateNav(*i)],
        HitTarget::Anchor(id) => rt
            .state
            .nav_links
            .iter()
            .position(|l| l.target() == Some(*id))
            .map(|i| vec![Action::ActivateNav(i)])
            .unwrap_or_default(),
        HitTarget::Filter(i) => vec![Action::ActivateFilter(*i)],
        HitTarget::Search if !rt.state.search_active => vec![Action::ToggleSearch],
        HitTarget::Search => vec![],
        HitTarget::CatalogStrip => vec![Action::Carousel(SlideInput::DragStart(column))],
        HitTarget::Card { book_id } => vec![
            Action::ActivateCatalog(DelegatedClick {
                action: None,
                book_id: Some(book_id.clone()),
            }),
            Action::Carousel(SlideInput::DragStart(column)),
        ],
        HitTarget::CardAction { book_id, action } => {
            vec![Action::ActivateCatalog(DelegatedClick {
                action: Some(action.to_string()),
                book_id: Some(book_id.clone()),
            })]
        }
        HitTarget::CarouselPrev => vec![Action::Carousel(SlideInput::Prev)],
        HitTarget::CarouselNext => vec![Action::Carousel(SlideInput::Next)],
        HitTarget::CarouselDot(i) => vec![Action::Carousel(SlideInput::GoTo(*i))],
        HitTarget::HistoryPrev => vec![Action::History(SlideInput::Prev)],
        HitTarget::HistoryNext => vec![Action::History(SlideInput::Next)],
        HitTarget::HistoryDot(i) => vec![Action::History(SlideInput::GoTo(*i))],
        HitTarget::OverlayBuy | HitTarget::OverlayClose | HitTarget::Overlay => vec![],
    }
}
