use leptos::*;
use leptos_router::A;

use crate::{components::typing_title::TypingTitle, pages::Page};

/// Sample titles shown in the landing gallery
const SAMPLE_TITLES: [&str; 4] = [
    "Inception",
    "Breaking Bad",
    "Interstellar",
    "Stranger Things",
];

/// Public landing page shown before login
#[component]
pub fn Home(cx: Scope) -> impl IntoView {
    view! { cx,
        <main class="home">
            <h1>"Welcome to " <TypingTitle/></h1>
            <p class="intro">
                "Keep track of your favorite movies, TV shows, and \
                 documentaries all in one place. Add, view, and manage your \
                 media list easily."
            </p>
            <section class="cta">
                <h2>"Start building your media list"</h2>
                <A href=Page::AddMedia.path()>"Add New Media"</A>
            </section>
            <section class="sample-gallery">
                {SAMPLE_TITLES
                    .iter()
                    .map(|title| view! { cx,
                        <div class="sample-card">
                            <h3>{*title}</h3>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </section>
            <footer>
                <p>"© Medialog. All rights reserved."</p>
            </footer>
        </main>
    }
}
