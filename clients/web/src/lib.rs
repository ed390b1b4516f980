//! Single-page client for the media catalog
//!
//! Holds the session, wires the typed API client into the pages, and routes
//! between the auth page, the media list, and the add/edit forms.

pub mod api;
mod components;
pub mod filter;
pub mod models;
pub mod pages;
pub mod session;

use leptos::*;
use leptos_router::*;

use crate::{
    api::{AuthorizedApi, DEFAULT_API_URL, UnauthorizedApi},
    components::nav::NavBar,
    pages::{Page, auth::AuthPage, home::Home, media_form::MediaForm, media_list::MyMedia},
};

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    let (session, set_session) = create_signal(cx, session::load());

    let authorized_api = Signal::derive(cx, move || {
        session
            .get()
            .map(|s| AuthorizedApi::new(DEFAULT_API_URL, s))
    });

    let unauthorized_api = UnauthorizedApi::new(DEFAULT_API_URL);

    let on_session = move |new_session| {
        session::store(&new_session);
        set_session.set(Some(new_session));
    };

    let on_logout = move || {
        session::clear();
        set_session.set(None);
    };

    view! { cx,
        <Router>
            <NavBar session=session.into() on_logout=on_logout/>
            <Routes>
                <Route
                    path=Page::Home.path()
                    view=move |cx| {
                        view! { cx, <Home/> }
                    }
                />
                <Route
                    path=Page::MyMedia.path()
                    view=move |cx| {
                        view! { cx, <MyMedia api=authorized_api on_unauthorized=on_logout/> }
                    }
                />
                <Route
                    path=Page::AddMedia.path()
                    view=move |cx| {
                        view! { cx, <MediaForm api=authorized_api on_unauthorized=on_logout/> }
                    }
                />
                <Route
                    path=Page::EditMedia.path()
                    view=move |cx| {
                        view! { cx,
                            <MediaForm api=authorized_api on_unauthorized=on_logout editing=true/>
                        }
                    }
                />
                <Route
                    path=Page::Auth.path()
                    view=move |cx| {
                        view! { cx, <AuthPage api=unauthorized_api on_session=on_session/> }
                    }
                />
            </Routes>
        </Router>
    }
}
