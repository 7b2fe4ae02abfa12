use leptos::{either::Either, prelude::*};

use crate::profile::{stagger_delay, Detail, HIGHLIGHTS, PERSONAL_DETAILS};

use super::SectionHeading;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section-padding">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading
                    lead="About"
                    accent="Me"
                    subtitle="Get to know more about my journey and expertise"
                />
                <div class="grid md:grid-cols-2 gap-8 mb-12">
                    <div class="glass-card p-8 fade-up" style=stagger_delay(2)>
                        <h3 class="text-2xl font-semibold mb-4">"Professional Summary"</h3>
                        <p class="text-muted mb-6 leading-relaxed">
                            "I'm an AI/ML enthusiast with a passion for creating intelligent solutions that solve real-world problems. With expertise in machine learning, deep learning, and full-stack development, I bridge the gap between cutting-edge AI research and practical applications."
                        </p>
                    </div>
                    <div class="glass-card p-8 fade-up" style=stagger_delay(3)>
                        <h3 class="text-2xl font-semibold mb-4">"Contact Details"</h3>
                        <div class="space-y-4">
                            {PERSONAL_DETAILS.into_iter().map(|d| view! { <DetailRow detail=d /> }).collect_view()}
                        </div>
                    </div>
                </div>
                <div class="grid md:grid-cols-3 gap-6">
                    {HIGHLIGHTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, h)| {
                            view! {
                                <div
                                    class="glass-card p-6 h-full hover:border-primary/50 transition-all duration-300 fade-up"
                                    style=stagger_delay(4 + i)
                                >
                                    <i class=format!("{} text-4xl text-primary mb-4 block", h.icon)></i>
                                    <h4 class="text-xl font-semibold mb-2">{h.title}</h4>
                                    <p class="text-muted">{h.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn DetailRow(detail: Detail) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <i class=format!("{} text-xl text-primary", detail.icon)></i>
            <div>
                <p class="text-sm text-muted">{detail.label}</p>
                {match detail.link {
                    Some(link) => {
                        Either::Left(
                            view! {
                                <a
                                    href=link
                                    class="text-foreground hover:text-primary transition-colors"
                                >
                                    {detail.value}
                                </a>
                            },
                        )
                    }
                    None => Either::Right(view! { <p class="text-foreground">{detail.value}</p> }),
                }}
            </div>
        </div>
    }
}
