use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, use_params_map};
use web_sys::FormData;

use crate::{
    api::{self, AuthorizedApi},
    models::{CATEGORIES, MediaEntry},
    pages::Page,
};

/// Add/edit form for a media entry
///
/// In edit mode the entry is fetched to prefill the fields; leaving the
/// file input empty keeps the poster already stored on the server.
#[component]
pub fn MediaForm<F>(
    cx: Scope,
    api: Signal<Option<AuthorizedApi>>,
    on_unauthorized: F,
    #[prop(default = false)] editing: bool,
) -> impl IntoView
where
    F: Fn() + 'static + Clone + Copy,
{
    let params = use_params_map(cx);
    let entry_id = move || params.get().get("id").cloned();

    let (title, set_title) = create_signal(cx, String::new());
    let (category, set_category) = create_signal(cx, CATEGORIES[0].to_string());
    let (director, set_director) = create_signal(cx, String::new());
    let (budget, set_budget) = create_signal(cx, String::new());
    let (location, set_location) = create_signal(cx, String::new());
    let (duration, set_duration) = create_signal(cx, String::new());
    let (year, set_year) = create_signal(cx, String::new());
    let (current_image, set_current_image) = create_signal(cx, None::<String>);
    let (error, set_error) = create_signal(cx, None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(cx, false);

    let file_input = create_node_ref::<html::Input>(cx);

    let go_to_login = move || {
        on_unauthorized();
        let navigate = use_navigate(cx);
        let _ = navigate(Page::Auth.path(), Default::default());
    };

    // Prefill from the stored entry when editing
    let load_action = create_action(cx, move |id: &String| {
        let id = id.clone();
        let api = api.get_untracked();
        async move {
            match api {
                Some(api) => api.entry(&id).await,
                None => Err(api::Error::Unauthorized),
            }
        }
    });

    if editing {
        if let Some(id) = entry_id() {
            load_action.dispatch(id);
        }
    }

    create_effect(cx, move |_| {
        if let Some(result) = load_action.value().get() {
            match result {
                Ok(entry) => apply_entry(
                    &entry,
                    (
                        set_title,
                        set_category,
                        set_director,
                        set_budget,
                        set_location,
                        set_duration,
                        set_year,
                        set_current_image,
                    ),
                ),
                Err(api::Error::Unauthorized) => go_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let submit_action = create_action(cx, move |form: &FormData| {
        let form = form.clone();
        let api = api.get_untracked();
        let id = if editing { entry_id() } else { None };
        async move {
            match (api, id) {
                (Some(api), Some(id)) => api.update_entry(&id, form).await,
                (Some(api), None) => api.create_entry(form).await,
                (None, _) => Err(api::Error::Unauthorized),
            }
        }
    });

    create_effect(cx, move |_| {
        if let Some(result) = submit_action.value().get() {
            set_wait_for_response.set(false);
            match result {
                Ok(_) => {
                    let navigate = use_navigate(cx);
                    let _ = navigate(Page::MyMedia.path(), Default::default());
                }
                Err(api::Error::Unauthorized) => go_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Ok(form) = FormData::new() else {
            set_error.set(Some("Failed to build form data".to_string()));
            return;
        };

        let _ = form.append_with_str("title", &title.get_untracked());
        let _ = form.append_with_str("category", &category.get_untracked());
        let _ = form.append_with_str("director", &director.get_untracked());
        let _ = form.append_with_str("budget", &budget.get_untracked());
        let _ = form.append_with_str("location", &location.get_untracked());
        let _ = form.append_with_str("duration", &duration.get_untracked());
        let _ = form.append_with_str("year", &year.get_untracked());

        if let Some(input) = file_input.get() {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                let _ = form.append_with_blob("image", &file);
            }
        }

        set_wait_for_response.set(true);
        submit_action.dispatch(form);
    };

    view! { cx,
        <main class="media-form">
            <h2>{if editing { "Edit Media" } else { "Add Media" }}</h2>
            {move || error.get().map(|e| view! { cx, <p class="error">{e}</p> })}
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="title">"Title"</label>
                    <input
                        type="text"
                        id="title"
                        required=true
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {CATEGORIES
                            .iter()
                            .map(|c| view! { cx, <option value=*c>{*c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="director">"Director"</label>
                    <input
                        type="text"
                        id="director"
                        prop:value=move || director.get()
                        on:input=move |ev| set_director.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="budget">"Budget"</label>
                    <input
                        type="text"
                        id="budget"
                        prop:value=move || budget.get()
                        on:input=move |ev| set_budget.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="location">"Location"</label>
                    <input
                        type="text"
                        id="location"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="duration">"Duration"</label>
                    <input
                        type="text"
                        id="duration"
                        prop:value=move || duration.get()
                        on:input=move |ev| set_duration.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="year">"Year"</label>
                    <input
                        type="text"
                        id="year"
                        prop:value=move || year.get()
                        on:input=move |ev| set_year.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="image">"Poster image"</label>
                    <input type="file" id="image" accept="image/*" _ref=file_input/>
                    {move || {
                        current_image.get().map(|src| view! { cx,
                            <p class="current-image">
                                "Current poster kept unless a new file is chosen."
                                <img src=src alt="Current poster"/>
                            </p>
                        })
                    }}
                </div>
                <button type="submit" disabled=move || wait_for_response.get()>
                    {if editing { "Save changes" } else { "Add media" }}
                </button>
            </form>
        </main>
    }
}

type FieldSetters = (
    WriteSignal<String>,
    WriteSignal<String>,
    WriteSignal<String>,
    WriteSignal<String>,
    WriteSignal<String>,
    WriteSignal<String>,
    WriteSignal<String>,
    WriteSignal<Option<String>>,
);

fn apply_entry(entry: &MediaEntry, setters: FieldSetters) {
    let (
        set_title,
        set_category,
        set_director,
        set_budget,
        set_location,
        set_duration,
        set_year,
        set_current_image,
    ) = setters;

    set_title.set(entry.title.clone());
    set_category.set(entry.category.clone());
    set_director.set(entry.director.clone().unwrap_or_default());
    set_budget.set(entry.budget.clone().unwrap_or_default());
    set_location.set(entry.location.clone().unwrap_or_default());
    set_duration.set(entry.duration.clone().unwrap_or_default());
    set_year.set(entry.year.clone().unwrap_or_default());
    set_current_image.set(entry.image.clone());
}
