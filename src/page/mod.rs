pub mod content;
pub mod scroll;

use tracing::warn;

use scroll::NavLink;

/// Sections the storefront knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    History,
    Catalog,
    Contact,
}

impl SectionKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "inicio" => Some(Self::Hero),
            "historia" => Some(Self::History),
            "catalogo" => Some(Self::Catalog),
            "contato" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "inicio",
            Self::History => "historia",
            Self::Catalog => "catalogo",
            Self::Contact => "contato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Início",
            Self::History => "História",
            Self::Catalog => "Catálogo",
            Self::Contact => "Contato",
        }
    }

    /// Height in rows.
    pub fn height(self) -> u16 {
        match self {
            Self::Hero => 10,
            Self::History => 9,
            Self::Catalog => 24,
            Self::Contact => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPos {
    pub id: String,
    pub top: u16,
    pub height: u16,
}

impl SectionPos {
    pub fn new(id: &str, top: u16, height: u16) -> Self {
        Self {
            id: id.to_string(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Vertical arrangement of the page, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Vec<(SectionKind, SectionPos)>,
}

impl PageLayout {
    /// Stack the configured sections in order. Unknown or repeated ids are
    /// skipped.
    pub fn from_ids(ids: &[String]) -> Self {
        let mut sections: Vec<(SectionKind, SectionPos)> = Vec::new();
        let mut top = 0u16;
        for id in ids {
            let Some(kind) = SectionKind::from_id(id) else {
                warn!(section = %id, "Unknown page section ignored");
                continue;
            };
            if sections.iter().any(|(k, _)| *k == kind) {
                continue;
            }
            sections.push((kind, SectionPos::new(kind.id(), top, kind.height())));
            top = top.saturating_add(kind.height());
        }
        Self { sections }
    }

    pub fn height(&self) -> u16 {
        self.sections.last().map_or(0, |(_, pos)| pos.bottom())
    }

    pub fn has(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|(k, _)| *k == kind)
    }

    pub fn positions(&self) -> Vec<SectionPos> {
        self.sections.iter().map(|(_, pos)| pos.clone()).collect()
    }

    pub fn top_of(&self, id: &str) -> Option<u16> {
        self.sections
            .iter()
            .find(|(_, pos)| pos.id == id)
            .map(|(_, pos)| pos.top)
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        self.sections
            .iter()
            .map(|(kind, _)| NavLink::to_section(kind.label(), kind.id()))
            .collect()
    }
}
