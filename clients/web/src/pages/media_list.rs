use std::time::Duration;

use leptos::*;
use leptos_router::use_navigate;

use crate::{
    api::{self, AuthorizedApi},
    filter::{ALL_CATEGORIES, filter_entries},
    models::{CATEGORIES, MediaEntry},
    pages::Page,
};

/// Keystrokes are coalesced for this long before the list is re-filtered
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Media list page with debounced fuzzy search and a category filter
#[component]
pub fn MyMedia<F>(cx: Scope, api: Signal<Option<AuthorizedApi>>, on_unauthorized: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Copy,
{
    let (entries, set_entries) = create_signal(cx, Vec::<MediaEntry>::new());
    let (loading, set_loading) = create_signal(cx, true);
    let (error, set_error) = create_signal(cx, None::<String>);

    let (query, set_query) = create_signal(cx, String::new());
    let (debounced_query, set_debounced_query) = create_signal(cx, String::new());
    let (generation, set_generation) = create_signal(cx, 0u32);
    let (category, set_category) = create_signal(cx, ALL_CATEGORIES.to_string());

    let fetch_action = create_action(cx, move |_: &()| {
        let api = api.get_untracked();
        async move {
            match api {
                Some(api) => api.list_entries().await,
                None => Err(api::Error::Unauthorized),
            }
        }
    });
    fetch_action.dispatch(());

    create_effect(cx, move |_| {
        if let Some(result) = fetch_action.value().get() {
            set_loading.set(false);
            match result {
                Ok(list) => set_entries.set(list),
                Err(api::Error::Unauthorized) => {
                    on_unauthorized();
                    let navigate = use_navigate(cx);
                    let _ = navigate(Page::Auth.path(), Default::default());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let delete_action = create_action(cx, move |id: &String| {
        let id = id.clone();
        let api = api.get_untracked();
        async move {
            match api {
                Some(api) => api.delete_entry(&id).await.map(|_| id),
                None => Err(api::Error::Unauthorized),
            }
        }
    });

    create_effect(cx, move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(id) => set_entries.update(|list| list.retain(|entry| entry.id != id)),
                Err(api::Error::Unauthorized) => {
                    on_unauthorized();
                    let navigate = use_navigate(cx);
                    let _ = navigate(Page::Auth.path(), Default::default());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    // Cancel-and-restart debounce: a late timer fires only if no newer
    // keystroke bumped the generation in the meantime.
    let schedule_search = move |value: String| {
        set_query.set(value);
        let scheduled = generation.get_untracked() + 1;
        set_generation.set(scheduled);
        set_timeout(
            move || {
                if generation.get_untracked() == scheduled {
                    set_debounced_query.set(query.get_untracked());
                }
            },
            SEARCH_DEBOUNCE,
        );
    };

    let filtered = create_memo(cx, move |_| {
        filter_entries(&entries.get(), &debounced_query.get(), &category.get())
    });

    let on_delete = move |id: String| {
        if confirm("Delete this media? This action cannot be undone.") {
            delete_action.dispatch(id);
        }
    };

    let on_edit = move |id: String| {
        if confirm("Edit this media's details?") {
            let navigate = use_navigate(cx);
            let _ = navigate(&format!("/edit/{}", id), Default::default());
        }
    };

    view! { cx,
        <main class="media-list">
            <h2>"My Media"</h2>
            {move || error.get().map(|e| view! { cx, <p class="error">{e}</p> })}
            <div class="list-controls">
                <input
                    type="text"
                    placeholder="Search media..."
                    prop:value=move || query.get()
                    on:input=move |ev| schedule_search(event_target_value(&ev))
                />
                <select on:change=move |ev| set_category.set(event_target_value(&ev))>
                    <option value=ALL_CATEGORIES>{ALL_CATEGORIES}</option>
                    {CATEGORIES
                        .iter()
                        .map(|c| view! { cx, <option value=*c>{*c}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            {move || {
                if loading.get() {
                    view! { cx, <p class="loading">"Loading media..."</p> }.into_view(cx)
                } else if filtered.get().is_empty() {
                    view! { cx, <p class="empty">"No media found."</p> }.into_view(cx)
                } else {
                    view! { cx,
                        <table class="media-table">
                            <thead>
                                <tr>
                                    <th>"Image"</th>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Director"</th>
                                    <th>"Budget"</th>
                                    <th>"Location"</th>
                                    <th>"Duration"</th>
                                    <th>"Year"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || filtered.get()
                                    key=|entry| entry.id.clone()
                                    view=move |cx, entry: MediaEntry| {
                                        let edit_id = entry.id.clone();
                                        let delete_id = entry.id.clone();
                                        view! { cx,
                                            <tr>
                                                <td>
                                                    {match entry.image.clone() {
                                                        Some(src) => view! { cx,
                                                            <img src=src alt=entry.title.clone()/>
                                                        }
                                                        .into_view(cx),
                                                        None => view! { cx,
                                                            <span class="no-image">"No Image"</span>
                                                        }
                                                        .into_view(cx),
                                                    }}
                                                </td>
                                                <td>{entry.title.clone()}</td>
                                                <td>{entry.category.clone()}</td>
                                                <td>{entry.director.clone().unwrap_or_else(|| "-".into())}</td>
                                                <td>{entry.budget.clone().unwrap_or_else(|| "-".into())}</td>
                                                <td>{entry.location.clone().unwrap_or_else(|| "-".into())}</td>
                                                <td>{entry.duration.clone().unwrap_or_else(|| "-".into())}</td>
                                                <td>{entry.year.clone().unwrap_or_else(|| "-".into())}</td>
                                                <td>
                                                    <button on:click=move |_| on_edit(edit_id.clone())>
                                                        "Edit"
                                                    </button>
                                                    <button on:click=move |_| on_delete(delete_id.clone())>
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                    .into_view(cx)
                }
            }}
        </main>
    }
}

fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}
