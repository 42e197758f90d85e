/// Input for a carousel instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideInput {
    Next,
    Prev,
    GoTo(usize),
    Hover(bool),
    DragStart(u16),
    DragEnd(u16),
}

/// A click inside the catalog container, resolved to the nearest action
/// control and the nearest card around the click point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DelegatedClick {
    pub action: Option<String>,
    pub book_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollBy(i32),
    Resize { height: u16 },
    FocusNext,
    FocusPrev,
    MoveLeft,
    MoveRight,
    Select,
    ActivateNav(usize),
    ActivateFilter(usize),
    ToggleSearch,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    SearchSettled(String),
    ActivateCatalog(DelegatedClick),
    Carousel(SlideInput),
    History(SlideInput),
    CloseOverlay,
    Buy,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SideEffect {
    Render,
    DebounceSearch(String),
    ShowOverlay,
    HideOverlay,
    Carousel(SlideInput),
    History(SlideInput),
    OpenUrl(String),
}
