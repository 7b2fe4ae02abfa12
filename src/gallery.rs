mod view;

pub use view::{catalog_cards, detail_view, render, DetailView, GalleryView, SummaryCard};

use crate::catalog::{Catalog, ProjectId};

/// Which project, if any, the detail overlay is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(ProjectId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    Select(ProjectId),
    Dismiss,
}

impl GalleryEvent {
    /// Keyboard shortcuts understood by the overlay.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Dismiss),
            _ => None,
        }
    }
}

impl Selection {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<ProjectId> {
        match self {
            Self::Closed => None,
            Self::Open(id) => Some(*id),
        }
    }

    /// Next state after `event`. Selecting another project replaces the current one.
    /// Ids the catalog doesn't know leave the state as it was.
    pub fn apply(self, event: GalleryEvent, catalog: &Catalog) -> Self {
        match event {
            GalleryEvent::Select(id) if catalog.contains(id) => Self::Open(id),
            GalleryEvent::Select(_) => self,
            GalleryEvent::Dismiss => Self::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_record;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            test_record(1, &["Rust", "Leptos"], &["a.png", "b.png"]),
            test_record(2, &["Go", "Python", "SQL", "Redis", "Axum"], &["c.png"]),
            test_record(3, &[], &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_starts_closed() {
        let s = Selection::default();
        assert_eq!(s, Selection::Closed);
        assert!(!s.is_open());
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_select_every_record() {
        let catalog = catalog();
        for record in catalog.iter() {
            let s = Selection::Closed.apply(GalleryEvent::Select(record.id), &catalog);
            assert_eq!(s, Selection::Open(record.id));
            assert!(s.is_open());
        }
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let catalog = catalog();
        let open = Selection::Closed.apply(GalleryEvent::Select(ProjectId(2)), &catalog);
        let once = open.apply(GalleryEvent::Dismiss, &catalog);
        let twice = once.apply(GalleryEvent::Dismiss, &catalog);
        assert_eq!(once, Selection::Closed);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_replaces() {
        let catalog = catalog();
        let s = Selection::Closed
            .apply(GalleryEvent::Select(ProjectId(1)), &catalog)
            .apply(GalleryEvent::Select(ProjectId(3)), &catalog);
        assert_eq!(s, Selection::Open(ProjectId(3)));

        // reselecting the open project keeps it open
        let s = s.apply(GalleryEvent::Select(ProjectId(3)), &catalog);
        assert_eq!(s, Selection::Open(ProjectId(3)));
    }

    #[test]
    fn test_unknown_id_ignored() {
        let catalog = catalog();
        assert_eq!(
            Selection::Closed.apply(GalleryEvent::Select(ProjectId(42)), &catalog),
            Selection::Closed
        );
        let open = Selection::Open(ProjectId(1));
        assert_eq!(
            open.apply(GalleryEvent::Select(ProjectId(42)), &catalog),
            open
        );
    }

    #[test]
    fn test_keys() {
        assert_eq!(GalleryEvent::from_key("Escape"), Some(GalleryEvent::Dismiss));
        assert_eq!(GalleryEvent::from_key("Esc"), Some(GalleryEvent::Dismiss));
        assert_eq!(GalleryEvent::from_key("Enter"), None);
        assert_eq!(GalleryEvent::from_key("e"), None);
    }
}
