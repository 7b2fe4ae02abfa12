use leptos::prelude::*;

use crate::profile::{stagger_delay, SOFT_SKILLS, TECHNICAL_SKILLS};

use super::SectionHeading;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section-padding bg-gradient-to-b from-transparent to-card/20">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading
                    lead="My"
                    accent="Skills"
                    subtitle="A comprehensive overview of my technical and soft skills"
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-semibold mb-6 flex items-center gap-2">
                            <i class="extra-code text-primary"></i>
                            "Technical Skills"
                        </h3>
                        <div class="space-y-6">
                            {TECHNICAL_SKILLS
                                .into_iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <div class="glass-card p-4 fade-up" style=stagger_delay(3 + i)>
                                            <div class="flex items-center justify-between mb-2">
                                                <div class="flex items-center gap-2">
                                                    <i class=format!("{} text-primary", skill.icon)></i>
                                                    <span class="font-medium">{skill.name}</span>
                                                </div>
                                                <span class="text-sm text-muted">
                                                    {format!("{}%", skill.level)}
                                                </span>
                                            </div>
                                            <div class="h-2 bg-muted/30 rounded-full overflow-hidden">
                                                <div
                                                    class="h-full bg-gradient-to-r from-primary to-secondary grow-x"
                                                    style=format!("width: {}%", skill.level)
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class="text-2xl font-semibold mb-6 flex items-center gap-2">
                            <i class="extra-users text-secondary"></i>
                            "Soft Skills"
                        </h3>
                        <div class="grid sm:grid-cols-2 gap-6">
                            {SOFT_SKILLS
                                .into_iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <div
                                            class="glass-card p-6 h-full hover:border-secondary/50 transition-all duration-300 fade-up"
                                            style=stagger_delay(3 + i)
                                        >
                                            <i class=format!("{} text-3xl text-secondary mb-3 block", skill.icon)></i>
                                            <h4 class="text-lg font-semibold mb-1">{skill.name}</h4>
                                            <p class="text-sm text-muted">{skill.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
