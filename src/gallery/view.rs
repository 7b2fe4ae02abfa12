use crate::catalog::{Catalog, ProjectId, ProjectRecord};

use super::Selection;

/// Tags shown on a summary card before the rest collapse into a `+n` badge.
pub const SUMMARY_TAG_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub id: ProjectId,
    pub title: String,
    pub short_description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub hidden_tags: usize,
}

impl SummaryCard {
    pub fn from_record(record: &ProjectRecord) -> Self {
        let tags = record
            .technologies
            .iter()
            .take(SUMMARY_TAG_LIMIT)
            .cloned()
            .collect::<Vec<_>>();
        Self {
            id: record.id,
            title: record.title.clone(),
            short_description: record.short_description.clone(),
            image: record.image.clone(),
            hidden_tags: record.technologies.len() - tags.len(),
            tags,
        }
    }

    /// Badge text for the technologies that didn't fit, e.g. `+2`.
    pub fn overflow_badge(&self) -> Option<String> {
        (self.hidden_tags > 0).then(|| format!("+{}", self.hidden_tags))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub screenshots: Vec<String>,
    pub features: Vec<String>,
    pub challenges: String,
    pub solutions: String,
    pub github_url: String,
    pub live_url: String,
}

impl DetailView {
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            description: record.description.clone(),
            technologies: record.technologies.clone(),
            screenshots: record.screenshots.clone(),
            features: record.features.clone(),
            challenges: record.challenges.clone(),
            solutions: record.solutions.clone(),
            github_url: record.github_url.clone(),
            live_url: record.live_url.clone(),
        }
    }

    /// `(src, alt)` for each screenshot slot, in catalog order.
    pub fn screenshot_slots(&self) -> Vec<(String, String)> {
        self.screenshots
            .iter()
            .enumerate()
            .map(|(i, src)| (src.clone(), format!("{} screenshot {}", self.title, i + 1)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub cards: Vec<SummaryCard>,
    pub detail: Option<DetailView>,
}

pub fn catalog_cards(catalog: &Catalog) -> Vec<SummaryCard> {
    catalog.iter().map(SummaryCard::from_record).collect()
}

pub fn detail_view(catalog: &Catalog, selection: &Selection) -> Option<DetailView> {
    let id = selection.selected()?;
    catalog.get(id).map(DetailView::from_record)
}

/// Everything the gallery shows for a given selection.
pub fn render(catalog: &Catalog, selection: &Selection) -> GalleryView {
    GalleryView {
        cards: catalog_cards(catalog),
        detail: detail_view(catalog, selection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::test_record,
        gallery::GalleryEvent,
    };

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            test_record(1, &["Rust", "Leptos"], &["one.png", "two.png"]),
            test_record(2, &["Go", "Python", "SQL", "Redis", "Axum"], &["three.png"]),
            test_record(3, &["A", "B", "C"], &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_cards_in_order() {
        let catalog = catalog();
        let view = render(&catalog, &Selection::Closed);
        let ids = view.cards.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![ProjectId(1), ProjectId(2), ProjectId(3)]);
        assert!(view.detail.is_none());
    }

    #[test]
    fn test_embedded_catalog_cards() {
        let catalog = Catalog::embedded().unwrap();
        let cards = catalog_cards(&catalog);
        assert_eq!(cards.len(), 3);
        let titles = cards.iter().map(|c| c.title.as_str()).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "AI Image Recognition System",
                "Smart Chatbot Assistant",
                "Predictive Analytics Dashboard"
            ]
        );
        // four technologies each, so one hidden
        assert!(cards.iter().all(|c| c.overflow_badge().as_deref() == Some("+1")));
    }

    #[test]
    fn test_tag_overflow() {
        let catalog = catalog();
        let cards = catalog_cards(&catalog);

        assert_eq!(cards[0].tags, vec!["Rust", "Leptos"]);
        assert_eq!(cards[0].overflow_badge(), None);

        assert_eq!(cards[1].tags, vec!["Go", "Python", "SQL"]);
        assert_eq!(cards[1].hidden_tags, 2);
        assert_eq!(cards[1].overflow_badge().as_deref(), Some("+2"));

        // exactly at the limit
        assert_eq!(cards[2].tags.len(), 3);
        assert_eq!(cards[2].overflow_badge(), None);
    }

    #[test]
    fn test_detail_shows_selected_record() {
        let catalog = catalog();
        for record in catalog.iter() {
            let selection = Selection::Closed.apply(GalleryEvent::Select(record.id), &catalog);
            let detail = render(&catalog, &selection)
                .detail
                .expect("detail should be open");
            assert_eq!(detail, DetailView::from_record(record));
            assert_eq!(detail.technologies, record.technologies);
            assert_eq!(detail.features, record.features);
        }
    }

    #[test]
    fn test_replacement_shows_only_latest() {
        let catalog = catalog();
        let selection = Selection::Closed
            .apply(GalleryEvent::Select(ProjectId(1)), &catalog)
            .apply(GalleryEvent::Select(ProjectId(2)), &catalog);
        let detail = detail_view(&catalog, &selection).unwrap();
        assert_eq!(detail.id, ProjectId(2));
        assert_eq!(detail.title, "Project 2");
        assert_eq!(detail.challenges, "Challenges 2");
        // all five tags, no truncation
        assert_eq!(detail.technologies.len(), 5);
    }

    #[test]
    fn test_dismiss_keeps_grid() {
        let catalog = catalog();
        let open = Selection::Open(ProjectId(3));
        let before = render(&catalog, &open);
        let closed = open.apply(GalleryEvent::Dismiss, &catalog);
        let after = render(&catalog, &closed);
        assert_eq!(before.cards, after.cards);
        assert!(after.detail.is_none());
        assert_eq!(after, render(&catalog, &closed.apply(GalleryEvent::Dismiss, &catalog)));
    }

    #[test]
    fn test_screenshot_slots() {
        let catalog = catalog();
        let detail = detail_view(&catalog, &Selection::Open(ProjectId(1))).unwrap();
        let slots = detail.screenshot_slots();
        assert_eq!(
            slots,
            vec![
                ("one.png".to_string(), "Project 1 screenshot 1".to_string()),
                ("two.png".to_string(), "Project 1 screenshot 2".to_string()),
            ]
        );
        let empty = detail_view(&catalog, &Selection::Open(ProjectId(3))).unwrap();
        assert!(empty.screenshot_slots().is_empty());
    }
}
