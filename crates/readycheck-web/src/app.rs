use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::test_cards::TestCards;
use crate::config::load_config;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());

    view! {
        <div class="app">
            <main class="content">
                <Hero />
                <TestCards />
            </main>
            <Footer />
        </div>
    }
}
