use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"Ensure You're Interview-Ready!"</h1>
            <p class="subtitle">
                "Verify all your system requirements before your online placement interview. "
                "Quick checks for your hardware, software, and connectivity."
            </p>
            <a href="#test-cards" class="hero-cta">"Start Testing"</a>
        </header>
    }
}
