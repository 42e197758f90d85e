//! Scroll-driven header state and navigation highlighting. Both are pure
//! and safe to call on every scroll event.

use super::SectionPos;

/// Whether the header switches to its scrolled look.
pub fn header_scrolled(offset: u16, threshold: u16) -> bool {
    offset > threshold
}

/// Last section, in document order, whose top is at or above the reading
/// line `offset + spy_offset`.
pub fn active_section(sections: &[SectionPos], offset: u16, spy_offset: u16) -> Option<&str> {
    let line = offset.saturating_add(spy_offset);
    sections
        .iter()
        .rev()
        .find(|s| s.top <= line)
        .map(|s| s.id.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

impl NavLink {
    pub fn to_section(label: &str, id: &str) -> Self {
        Self {
            label: label.to_string(),
            href: format!("#{id}"),
            active: false,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// Activate the link pointing at `current`, deactivate every other one.
pub fn mark_active(links: &mut [NavLink], current: Option<&str>) {
    for link in links.iter_mut() {
        link.active = current.is_some() && link.target() == current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionPos> {
        vec![
            SectionPos::new("inicio", 0, 10),
            SectionPos::new("historia", 10, 9),
            SectionPos::new("catalogo", 19, 22),
        ]
    }

    #[test]
    fn header_flips_past_threshold() {
        assert!(!header_scrolled(0, 1));
        assert!(!header_scrolled(1, 1));
        assert!(header_scrolled(2, 1));
    }

    #[test]
    fn picks_last_section_above_reading_line() {
        let s = sections();
        assert_eq!(active_section(&s, 0, 3), Some("inicio"));
        assert_eq!(active_section(&s, 7, 3), Some("historia"));
        assert_eq!(active_section(&s, 40, 3), Some("catalogo"));
    }

    #[test]
    fn no_section_qualifies_when_first_starts_below() {
        let s = vec![SectionPos::new("late", 20, 5)];
        assert_eq!(active_section(&s, 0, 3), None);
    }

    #[test]
    fn mark_active_is_exclusive() {
        let mut links = vec![
            NavLink::to_section("Início", "inicio"),
            NavLink::to_section("Catálogo", "catalogo"),
            NavLink {
                label: "Topo".into(),
                href: "#".into(),
                active: true,
            },
        ];
        mark_active(&mut links, Some("catalogo"));
        assert_eq!(
            links.iter().map(|l| l.active).collect::<Vec<_>>(),
            vec![false, true, false]
        );

        mark_active(&mut links, None);
        assert!(links.iter().all(|l| !l.active));
    }
}
