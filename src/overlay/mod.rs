pub mod dialog;
pub mod labels;

use tracing::debug;

use crate::catalog::Book;
use crate::render::fragment::CoverLayers;

pub use dialog::{Dialog, ModalDialog};
pub use labels::category_label;

/// Buy target used when a record has no link.
pub const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayCover {
    pub layers: CoverLayers,
    pub size: &'static str,
    pub position: &'static str,
}

/// Fields of the detail overlay. Always reflects the last bound record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailOverlay {
    pub book_id: Option<String>,
    pub title: String,
    pub meta: String,
    pub price: String,
    pub description: String,
    pub tags: Vec<String>,
    pub cover: Option<OverlayCover>,
    pub buy_href: String,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self {
            buy_href: PLACEHOLDER_LINK.to_string(),
            ..Self::default()
        }
    }

    /// `true` when the buy action points somewhere real.
    pub fn has_buy_target(&self) -> bool {
        !self.buy_href.is_empty() && self.buy_href != PLACEHOLDER_LINK
    }
}

/// Copy `book` into the overlay. Does nothing when the page has no overlay.
pub fn bind(overlay: Option<&mut DetailOverlay>, book: &Book) {
    let Some(overlay) = overlay else {
        debug!(book = book.id, "Detail overlay missing, skipping bind");
        return;
    };

    overlay.book_id = Some(book.id.to_string());
    overlay.title = book.title.to_string();
    overlay.meta = format!("{} • {}", book.byline(), category_label(book.category));
    overlay.price = book.price.to_string();
    overlay.description = book.description.to_string();
    overlay.tags = book.tags.iter().map(|t| t.to_string()).collect();

    overlay.cover = None;
    if let Some(layers) = CoverLayers::for_cover(book.cover) {
        overlay.cover = Some(OverlayCover {
            layers,
            size: "cover",
            position: "center",
        });
    }

    overlay.buy_href = book.link.unwrap_or(PLACEHOLDER_LINK).to_string();
}
