use crate::catalog::Book;

/// Action tag carried by the "Ver detalhes" control of every card.
pub const OPEN_MODAL: &str = "open-modal";

/// How many tags a card shows as chips.
pub const CARD_CHIPS: usize = 3;

const GLOW: &str = "radial-gradient(700px 280px at 25% 30%, rgba(201,163,94,.22), transparent 55%)";
const SHEEN: &str = "linear-gradient(135deg, rgba(255,255,255,.08), rgba(255,255,255,.02))";

/// Layered cover background shared by cards and the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverLayers {
    pub glow: &'static str,
    pub sheen: &'static str,
    pub image: String,
}

impl CoverLayers {
    /// `None` when the record has no usable cover; callers then fall back to
    /// the plain decorative gradient.
    pub fn for_cover(cover: Option<&str>) -> Option<Self> {
        let image = cover.map(str::trim).filter(|c| !c.is_empty())?;
        Some(Self {
            glow: GLOW,
            sheen: SHEEN,
            image: image.to_string(),
        })
    }

    pub fn to_css(&self) -> String {
        format!("{}, {}, url('{}')", self.glow, self.sheen, self.image)
    }

    /// File name of the image, used as the caption in the terminal.
    pub fn file_name(&self) -> &str {
        self.image.rsplit('/').next().unwrap_or(&self.image)
    }
}

/// Display fragment for one visible record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFragment {
    pub book_id: String,
    pub title: String,
    pub byline: String,
    /// Full text; clipping happens when drawn.
    pub description: String,
    pub price: String,
    pub cover: Option<CoverLayers>,
    pub action: &'static str,
    pub chips: Vec<String>,
}

impl CardFragment {
    pub fn from_book(book: &Book) -> Self {
        Self {
            book_id: book.id.to_string(),
            title: book.title.to_string(),
            byline: book.byline(),
            description: book.description.to_string(),
            price: book.price.to_string(),
            cover: CoverLayers::for_cover(book.cover),
            action: OPEN_MODAL,
            chips: book
                .tags
                .iter()
                .take(CARD_CHIPS)
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn card_shows_first_three_tags_only() {
        let book = Catalog::default().find("yellowface").unwrap();
        let card = CardFragment::from_book(book);
        assert_eq!(card.chips, vec!["sátira", "mercado editorial", "tensão"]);
        assert_eq!(card.byline, "R. F. Kuang • 2023");
        assert_eq!(card.action, OPEN_MODAL);
        assert_eq!(card.description, book.description);
    }

    #[test]
    fn blank_cover_has_no_layers() {
        assert!(CoverLayers::for_cover(None).is_none());
        assert!(CoverLayers::for_cover(Some("")).is_none());

        let layers = CoverLayers::for_cover(Some("/img/Duna.jpg")).unwrap();
        assert!(layers.to_css().ends_with("url('/img/Duna.jpg')"));
        assert_eq!(layers.file_name(), "Duna.jpg");
    }
}
