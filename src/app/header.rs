use leptos::prelude::*;

use crate::profile::NAME;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 shadow-lg bg-background/80 backdrop-blur-sm">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex flex-wrap items-center justify-between">
                    <a href="#" class="text-xl font-bold gradient-text">
                        {NAME}
                    </a>
                    <nav class="flex gap-6">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-muted hover:text-primary transition-colors duration-200"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
