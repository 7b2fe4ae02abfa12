mod about;
mod contact;
mod header;
mod hero;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profile::NAME;
use about::About;
use contact::{Contact, Footer};
use header::Header;
use hero::Hero;
use projects::ProjectGallery;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <ProjectGallery />
        <Contact />
        <Footer />
    }
}

/// Two-tone section title with a muted subtitle underneath.
#[component]
fn SectionHeading(
    lead: &'static str,
    accent: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="fade-up section-content">
            <h2 class="text-4xl md:text-5xl font-bold text-center mb-4">
                {lead} " " <span class="gradient-text">{accent}</span>
            </h2>
            <p class="text-muted text-center mb-12 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
