//! Filter and search over the catalog.
//!
//! Every comparison goes through [`normalize`] so accented, padded and
//! case-variant input compares equal. Results always keep catalog order;
//! there is no ranking.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::app::state::ViewState;
use crate::catalog::{Book, Catalog};

/// Token carried by the "show everything" filter button.
pub const ALL_TOKEN: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Token(String),
}

impl Filter {
    /// Builds a filter from a button token. A missing or blank token, or the
    /// `todos` sentinel, selects everything.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.trim().is_empty() && normalize(t) != ALL_TOKEN => {
                Filter::Token(t.to_string())
            }
            _ => Filter::All,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

/// Lowercase, strip diacritics, trim.
pub fn normalize(input: &str) -> String {
    let folded: String = input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !is_spacing_diacritic(*c))
        .collect();
    folded.trim().to_string()
}

/// Standalone accent characters that carry no letter of their own.
fn is_spacing_diacritic(c: char) -> bool {
    matches!(
        c,
        '^' | '`' | '¨' | '¯' | '´' | '·' | '¸' | '\u{02B0}'..='\u{02FF}' | '\u{0384}' | '\u{0385}'
    )
}

/// Collapses the known singular/plural spellings of filter tokens. Anything
/// outside the table is returned normalized but otherwise unchanged.
pub fn canonical_token(token: &str) -> String {
    let key = normalize(token);
    let canonical = match key.as_str() {
        "classicos" | "classico" => "classico",
        "conto" | "contos" => "contos",
        _ => return key,
    };
    canonical.to_string()
}

pub fn matches_filter(book: &Book, filter: &Filter) -> bool {
    let Filter::Token(token) = filter else {
        return true;
    };
    let canonical = canonical_token(token);
    book.tags.iter().any(|tag| normalize(tag) == canonical)
}

/// Normalized search text for one record.
pub fn haystack(book: &Book) -> String {
    let tags = book.tags.join(" ");
    let parts: [&str; 5] = [
        book.title,
        book.author,
        book.category,
        &tags,
        book.description,
    ];
    normalize(&parts.join(" "))
}

pub fn matches_query(book: &Book, query: &str) -> bool {
    let needle = normalize(query);
    if needle.is_empty() {
        return true;
    }
    haystack(book).contains(&needle)
}

pub fn visible_books(catalog: &Catalog, view: &ViewState) -> Vec<&'static Book> {
    catalog
        .books()
        .iter()
        .filter(|book| matches_filter(book, &view.filter) && matches_query(book, &view.query))
        .collect()
}
