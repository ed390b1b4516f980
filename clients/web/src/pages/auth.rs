use leptos::*;
use leptos_router::use_navigate;

use crate::{
    api::UnauthorizedApi,
    models::{Credentials, RegisterPayload},
    pages::Page,
    session::Session,
};

/// Combined login/register page
#[component]
pub fn AuthPage<F>(cx: Scope, api: UnauthorizedApi, on_session: F) -> impl IntoView
where
    F: Fn(Session) + 'static + Clone + Copy,
{
    let (register_mode, set_register_mode) = create_signal(cx, false);
    let (name, set_name) = create_signal(cx, String::new());
    let (email, set_email) = create_signal(cx, String::new());
    let (password, set_password) = create_signal(cx, String::new());
    let (error, set_error) = create_signal(cx, None::<String>);
    let (notice, set_notice) = create_signal(cx, None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(cx, false);

    let submit_action = create_action(cx, move |_: &()| async move {
        set_wait_for_response.update(|w| *w = true);
        set_error.update(|e| *e = None);

        if register_mode.get_untracked() {
            let payload = RegisterPayload {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match api.register(&payload).await {
                Ok(user) => {
                    set_notice.update(|n| {
                        *n = Some(format!("Account created for {}. Log in below.", user.email))
                    });
                    set_register_mode.set(false);
                }
                Err(err) => {
                    log::error!("Registration failed: {err}");
                    set_error.update(|e| *e = Some(err.to_string()));
                }
            }
        } else {
            let credentials = Credentials {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match api.login(&credentials).await {
                Ok(session) => {
                    on_session(session);
                    let navigate = use_navigate(cx);
                    let _ = navigate(Page::MyMedia.path(), Default::default());
                }
                Err(err) => {
                    log::error!("Unable to login with {}: {err}", credentials.email);
                    set_error.update(|e| *e = Some(err.to_string()));
                }
            }
        }

        set_wait_for_response.update(|w| *w = false);
    });

    view! { cx,
        <main class="auth-page">
            <h2>{move || if register_mode.get() { "Create an account" } else { "Log in" }}</h2>
            {move || notice.get().map(|n| view! { cx, <p class="notice">{n}</p> })}
            {move || error.get().map(|e| view! { cx, <p class="error">{e}</p> })}
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit_action.dispatch(());
            }>
                <Show when=move || register_mode.get() fallback=|_| ()>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                </Show>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || wait_for_response.get()>
                    {move || if register_mode.get() { "Register" } else { "Log in" }}
                </button>
            </form>
            <button
                class="link-button"
                on:click=move |_| {
                    set_error.update(|e| *e = None);
                    set_register_mode.update(|m| *m = !*m);
                }
            >
                {move || {
                    if register_mode.get() {
                        "Already have an account? Log in"
                    } else {
                        "New here? Create an account"
                    }
                }}
            </button>
        </main>
    }
}
