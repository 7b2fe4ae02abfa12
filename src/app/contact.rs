use leptos::prelude::*;

use crate::profile::{copyright_line, stagger_delay, CONTACT_DETAILS};

use super::SectionHeading;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section-padding bg-gradient-to-b from-transparent to-card/20">
            <div class="container mx-auto max-w-4xl">
                <SectionHeading
                    lead="Get In"
                    accent="Touch"
                    subtitle="Have a project in mind? Let's work together to bring your ideas to life"
                />
                <div class="grid md:grid-cols-2 gap-6">
                    <div class="glass-card p-8">
                        <h3 class="text-2xl font-semibold mb-6">"Contact Information"</h3>
                        <div class="space-y-4">
                            {CONTACT_DETAILS
                                .into_iter()
                                .enumerate()
                                .map(|(i, d)| {
                                    view! {
                                        <a
                                            href=d.link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-4 p-4 rounded-lg hover:bg-primary/10 transition-colors group fade-up"
                                            style=stagger_delay(4 + i)
                                        >
                                            <div class="w-12 h-12 rounded-full bg-primary/20 flex items-center justify-center group-hover:bg-primary/30 transition-colors">
                                                <i class=format!("{} text-xl text-primary", d.icon)></i>
                                            </div>
                                            <div>
                                                <p class="text-sm text-muted">{d.label}</p>
                                                <p class="font-medium group-hover:text-primary transition-colors">
                                                    {d.value}
                                                </p>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="glass-card p-8 h-fit">
                        <h3 class="text-xl font-semibold mb-4">"Let's Collaborate"</h3>
                        <p class="text-muted">
                            "I'm always interested in hearing about new projects and opportunities. Whether you have a question or just want to say hi, feel free to reach out!"
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-8 mb-8 pt-8 border-t border-muted/30 text-center fade-in">
            <div class="flex justify-center gap-6 mb-4">
                {CONTACT_DETAILS
                    .into_iter()
                    .map(|d| {
                        view! {
                            <a
                                href=d.link
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=d.label
                                class="w-10 h-10 rounded-full bg-muted/30 flex items-center justify-center hover:bg-primary/20 hover:text-primary transition-all"
                            >
                                <i class=d.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="text-muted">{copyright_line()}</p>
        </footer>
    }
}
