use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"ReadyCheck"</span>
            <a href="https://github.com/nitinmahala" target="_blank" rel="noopener noreferrer">
                "GitHub"
            </a>
        </footer>
    }
}
