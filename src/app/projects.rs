use std::sync::Arc;

use leptos::{ev::MouseEvent, prelude::*};

use crate::{
    catalog::{Catalog, ProjectId},
    gallery::{catalog_cards, detail_view, DetailView, GalleryEvent, Selection, SummaryCard},
    profile::stagger_delay,
};

use super::SectionHeading;

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let catalog = StoredValue::new(use_context::<Arc<Catalog>>().unwrap_or_default());
    let (selection, set_selection) = signal(Selection::Closed);

    let dispatch = move |event: GalleryEvent| {
        let prev = selection.get_untracked();
        let next = catalog.with_value(|c| prev.apply(event, c));
        match (prev, next) {
            (_, Selection::Open(id)) if prev != next => log::debug!("selected project {id}"),
            (Selection::Open(id), Selection::Closed) => log::debug!("dismissed project {id}"),
            _ => {}
        }
        set_selection(next);
    };
    let on_select = Callback::new(move |id: ProjectId| dispatch(GalleryEvent::Select(id)));
    let on_dismiss = Callback::new(move |_: ()| dispatch(GalleryEvent::Dismiss));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if !selection.get_untracked().is_open() {
                return;
            }
            if let Some(event) = GalleryEvent::from_key(&ev.key()) {
                dispatch(event);
            }
        });
        on_cleanup(move || handle.remove());
    }

    // the grid never changes, only the overlay follows the selection
    let cards = catalog.with_value(|c| catalog_cards(c));
    let detail = Memo::new(move |_| {
        let selection = selection.get();
        catalog.with_value(|c| detail_view(c, &selection))
    });

    view! {
        <section id="projects" class="section-padding">
            <div class="container mx-auto max-w-7xl">
                <SectionHeading
                    lead="Featured"
                    accent="Projects"
                    subtitle="Explore my latest work in AI/ML and full-stack development"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| view! { <ProjectCard card index on_select /> })
                        .collect_view()}
                </div>
                {move || detail.get().map(|detail| view! { <ProjectDetail detail on_dismiss /> })}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(card: SummaryCard, index: usize, on_select: Callback<ProjectId>) -> impl IntoView {
    let badge = card.overflow_badge();
    let SummaryCard {
        id,
        title,
        short_description,
        image,
        tags,
        ..
    } = card;

    view! {
        <div class="fade-up" style=stagger_delay(index)>
            <article
                class="glass-card overflow-hidden cursor-pointer group h-full flex flex-col hover:border-primary/50 transition-all duration-300"
                on:click=move |_| on_select.run(id)
            >
                <div class="relative h-48 overflow-hidden">
                    <img
                        src=image
                        alt=title.clone()
                        class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-300"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-card to-transparent opacity-60"></div>
                </div>
                <div class="p-6 flex-1 flex flex-col">
                    <h3 class="text-xl font-semibold mb-2 group-hover:text-primary transition-colors">
                        {title}
                    </h3>
                    <p class="text-muted text-sm mb-4 flex-1">{short_description}</p>
                    <div class="flex flex-wrap gap-2">
                        {tags
                            .into_iter()
                            .map(|tag| {
                                view! {
                                    <span class="rounded-md px-2 py-1 bg-brightBlack text-xs">
                                        {tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                        {badge
                            .map(|b| {
                                view! {
                                    <span class="rounded-md px-2 py-1 border border-muted text-xs">
                                        {b}
                                    </span>
                                }
                            })}
                    </div>
                </div>
            </article>
        </div>
    }
}

#[component]
fn ProjectDetail(detail: DetailView, on_dismiss: Callback<()>) -> impl IntoView {
    let slots = detail.screenshot_slots();
    let dialog_label = detail.title.clone();
    let DetailView {
        title,
        description,
        technologies,
        features,
        challenges,
        solutions,
        github_url,
        live_url,
        ..
    } = detail;

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm fade-in"
            on:click=move |_| on_dismiss.run(())
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-label=dialog_label
                class="glass-card border-primary/50 w-full max-w-4xl max-h-[90vh] overflow-y-auto p-6 rounded-lg"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <div class="flex items-start justify-between mb-6">
                    <h2 class="text-2xl font-bold">{title}</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        class="text-muted hover:text-foreground text-xl"
                        on:click=move |_| on_dismiss.run(())
                    >
                        <i class="extra-close"></i>
                    </button>
                </div>
                <div class="space-y-6">
                    <div class="grid md:grid-cols-2 gap-4">
                        {slots
                            .into_iter()
                            .map(|(src, alt)| {
                                view! {
                                    <img src=src alt=alt class="w-full h-48 object-cover rounded-lg" />
                                }
                            })
                            .collect_view()}
                    </div>
                    <DetailBlock heading="Description">
                        <p class="text-muted">{description}</p>
                    </DetailBlock>
                    <DetailBlock heading="Technologies Used">
                        <div class="flex flex-wrap gap-2">
                            {technologies
                                .into_iter()
                                .map(|tech| {
                                    view! {
                                        <span class="rounded-md px-2 py-1 bg-brightBlack text-sm">
                                            {tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </DetailBlock>
                    <DetailBlock heading="Key Features">
                        <ul class="list-disc list-inside space-y-1 text-muted">
                            {features
                                .into_iter()
                                .map(|feature| view! { <li>{feature}</li> })
                                .collect_view()}
                        </ul>
                    </DetailBlock>
                    <DetailBlock heading="Challenges">
                        <p class="text-muted">{challenges}</p>
                    </DetailBlock>
                    <DetailBlock heading="Solutions">
                        <p class="text-muted">{solutions}</p>
                    </DetailBlock>
                    <div class="flex gap-4 pt-4">
                        <a
                            href=github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-4 py-2 rounded-md bg-gradient-to-r from-primary to-secondary text-background"
                        >
                            <i class="devicon-github-plain mr-2"></i>
                            "View on GitHub"
                        </a>
                        <a
                            href=live_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-4 py-2 rounded-md border border-primary/50 hover:bg-primary/10"
                        >
                            <i class="extra-link mr-2"></i>
                            "Live Demo"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailBlock(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-semibold mb-2">{heading}</h4>
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn sample_detail(id: u32) -> DetailView {
        let catalog = Catalog::embedded().expect("embedded catalog should load");
        detail_view(&catalog, &Selection::Open(ProjectId(id))).expect("project should exist")
    }

    #[test]
    fn test_detail_renders_full_record() {
        let owner = Owner::new();
        owner.set();

        let detail = sample_detail(1);
        let on_dismiss = Callback::new(|_: ()| {});
        let html = view! { <ProjectDetail detail on_dismiss /> }.to_html();

        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains(r#"aria-label="AI Image Recognition System""#));
        assert!(html.contains("<h2"));
        assert_eq!(html.matches("<img").count(), 2);
        assert!(html.contains("AI Image Recognition System screenshot 1"));
        assert!(html.contains("AI Image Recognition System screenshot 2"));
        assert_eq!(html.matches("<li").count(), 4);
        for tech in ["Python", "TensorFlow", "OpenCV", "Flask"] {
            assert!(html.contains(tech), "missing technology {tech}");
        }
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        // nothing from the other projects
        assert!(!html.contains("Smart Chatbot Assistant"));
    }

    #[test]
    fn test_card_renders_summary() {
        let owner = Owner::new();
        owner.set();

        let catalog = Catalog::embedded().expect("embedded catalog should load");
        let card = catalog_cards(&catalog).remove(1);
        let on_select = Callback::new(|_: ProjectId| {});
        let html = view! { <ProjectCard card index=1 on_select /> }.to_html();

        assert!(html.contains("Smart Chatbot Assistant"));
        assert!(html.contains("NLP-powered conversational AI for customer support"));
        assert!(html.contains("React"));
        assert!(!html.contains("Node.js"));
        assert!(html.contains("+1"));
        assert!(html.contains("animation-delay: 100ms"));
    }
}
