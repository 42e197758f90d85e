use serde::Serialize;

/// A single catalog record. Records are compiled into the binary and never
/// change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub year: u16,
    pub category: &'static str,
    /// Already formatted for display, e.g. `R$ 59,90`.
    pub price: &'static str,
    pub cover: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub link: Option<&'static str>,
}

impl Book {
    pub fn byline(&self) -> String {
        format!("{} • {}", self.author, self.year)
    }
}

/// Read-only view over the compiled-in records.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    books: &'static [Book],
}

impl Catalog {
    pub const fn new(books: &'static [Book]) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &'static [Book] {
        self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Exact, case-sensitive identifier lookup.
    pub fn find(&self, id: &str) -> Option<&'static Book> {
        self.books.iter().find(|b| b.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(super::data::BOOKS)
    }
}
