use leptos::*;
use leptos_router::A;

use crate::{pages::Page, session::Session};

/// Top navigation bar
#[component]
pub fn NavBar<F>(cx: Scope, session: Signal<Option<Session>>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Copy,
{
    view! { cx,
        <nav class="navbar">
            <span class="brand">"Medialog"</span>
            {move || match session.get() {
                Some(session) => view! { cx,
                    <div class="nav-links">
                        <A href=Page::Home.path()>"Home"</A>
                        <A href=Page::MyMedia.path()>"My Media"</A>
                        <A href=Page::AddMedia.path()>"Add Media"</A>
                        <span class="nav-user">{session.email}</span>
                        <button on:click=move |_| on_logout()>"Logout"</button>
                    </div>
                }
                .into_view(cx),
                None => view! { cx,
                    <div class="nav-links">
                        <A href=Page::Home.path()>"Home"</A>
                        <A href=Page::Auth.path()>"Login"</A>
                    </div>
                }
                .into_view(cx),
            }}
        </nav>
    }
}
