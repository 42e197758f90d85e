/// Modal dialog capability. Content is bound separately; the dialog only
/// controls visibility.
pub trait Dialog {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_open(&self) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct ModalDialog {
    open: bool,
    shown: usize,
}

impl ModalDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the dialog has been shown.
    pub fn shown_count(&self) -> usize {
        self.shown
    }
}

impl Dialog for ModalDialog {
    fn show(&mut self) {
        self.open = true;
        self.shown += 1;
    }

    fn hide(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
