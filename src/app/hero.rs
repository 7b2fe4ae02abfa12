use leptos::prelude::*;

use crate::profile::{NAME, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-20 left-10 w-72 h-72 bg-primary/20 rounded-full blur-3xl pulse-slow"></div>
                <div class="absolute bottom-20 right-10 w-96 h-96 bg-secondary/20 rounded-full blur-3xl pulse-slow [animation-delay:1s]"></div>
            </div>
            <div class="container mx-auto px-4 z-10">
                <div class="text-center max-w-4xl mx-auto">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 fade-up" style="animation-delay: 200ms">
                        "Hi, I'm " <span class="gradient-text">{NAME}</span>
                    </h1>
                    <p class="text-xl md:text-2xl text-muted mb-4 fade-up" style="animation-delay: 400ms">
                        {TAGLINE}
                    </p>
                    <p
                        class="text-lg md:text-xl text-muted mb-8 max-w-2xl mx-auto fade-up"
                        style="animation-delay: 600ms"
                    >
                        "Passionate about building intelligent solutions that make a difference. Welcome to my portfolio where innovation meets implementation."
                    </p>
                    <div
                        class="flex flex-col sm:flex-row gap-4 justify-center items-center fade-up"
                        style="animation-delay: 800ms"
                    >
                        <a
                            href="#contact"
                            class="px-6 py-3 rounded-md font-medium bg-gradient-to-r from-primary to-secondary hover:opacity-90 text-background"
                        >
                            "Let's Connect"
                        </a>
                        <a
                            href="#projects"
                            class="px-6 py-3 rounded-md font-medium border border-primary/50 hover:bg-primary/10"
                        >
                            "View My Work"
                        </a>
                    </div>
                    <div class="mt-16 fade-in" style="animation-delay: 1000ms">
                        <a
                            href="#about"
                            class="text-muted hover:text-primary transition-colors float"
                            aria-label="Scroll to About section"
                        >
                            <i class="extra-arrow-down text-3xl"></i>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
