use std::time::Duration;

use leptos::*;

const FULL_TITLE: &str = "Medialog";

/// App title typed out one character at a time, with a blinking cursor
/// while the animation runs
#[component]
pub fn TypingTitle(cx: Scope) -> impl IntoView {
    let (text, set_text) = create_signal(cx, String::new());
    let (cursor, set_cursor) = create_signal(cx, true);

    type_next(set_text, set_cursor, 0);

    view! { cx,
        <span class="typing-title" class:cursor=move || cursor.get()>
            {text}
        </span>
    }
}

fn type_next(set_text: WriteSignal<String>, set_cursor: WriteSignal<bool>, index: usize) {
    set_text.set(FULL_TITLE[..index].to_string());

    if index < FULL_TITLE.len() {
        set_timeout(
            move || type_next(set_text, set_cursor, index + 1),
            Duration::from_millis(150),
        );
    } else {
        // Drop the cursor shortly after the title is complete
        set_timeout(move || set_cursor.set(false), Duration::from_millis(500));
    }
}
