use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::session::SessionContext;

const MOOD_EMOJIS: &[(i64, &str)] = &[
    (1, "\u{1F62D}"),
    (2, "\u{1F61E}"),
    (3, "\u{1F610}"),
    (4, "\u{1F642}"),
    (5, "\u{1F60A}"),
];

/// One-tap mood score for today, upserted client-side: the widget looks up
/// today's record on mount and PATCHes it when an id is cached, otherwise
/// POSTs and caches the returned id. Two tabs can both observe "no record"
/// and both POST; the server does not dedupe for us.
#[component]
pub fn MoodTracker() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let (selected, set_selected) = signal::<Option<i64>>(None);
    let (mood_id, set_mood_id) = signal::<Option<i64>>(None);
    let (is_saving, set_is_saving) = signal(false);
    let (message, set_message) = signal::<Option<(String, &'static str)>>(None);

    // Today's record, if any
    Effect::new(move |_| {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::mood_for_date(&token, &api::today()).await {
                Ok(Some(mood)) => {
                    set_mood_id.set(Some(mood.id));
                    set_selected.set(Some(mood.mood_score));
                }
                Ok(None) => {}
                Err(e) => {
                    leptos::logging::warn!(
                        "failed to load today's mood: {}",
                        e.message(&[], "error")
                    );
                }
            }
        });
    });

    let save_score = move |score: i64| {
        let Some(token) = session.token() else {
            set_message.set(Some(("Please log in to record your mood.".to_string(), "error")));
            return;
        };
        let cached_id = mood_id.get();

        set_is_saving.set(true);
        set_message.set(None);
        spawn_local(async move {
            let result = match cached_id {
                Some(id) => api::update_mood(&token, id, score).await,
                None => api::create_mood(&token, &api::today(), score).await,
            };
            match result {
                Ok(mood) => {
                    set_mood_id.set(Some(mood.id));
                    set_message.set(Some(("Mood saved.".to_string(), "success")));
                }
                Err(e) => set_message.set(Some((
                    e.message(&["mood_score", "date"], "Could not save your mood"),
                    "error",
                ))),
            }
            set_is_saving.set(false);
        });
    };

    let pick_score = move |score: i64| {
        if selected.get() == Some(score) {
            // Tapping the current score deselects locally, without a request
            set_selected.set(None);
            set_message.set(Some(("Selection cleared.".to_string(), "info")));
            return;
        }
        set_selected.set(Some(score));
        save_score(score);
    };

    view! {
        <div class="card mood-card">
            <h3 class="card-title">"How are you feeling today?"</h3>

            <div class="mood-row">
                {MOOD_EMOJIS.iter().map(|&(score, emoji)| {
                    view! {
                        <button
                            class="mood-button"
                            class:mood-selected=move || selected.get() == Some(score)
                            disabled=move || is_saving.get() && selected.get() != Some(score)
                            on:click=move |_| pick_score(score)
                        >
                            {emoji}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            <div class="mood-scale">
                <span>"Rough"</span>
                <span>"Great"</span>
            </div>

            <Show when=move || is_saving.get()>
                <p class="muted">"Saving..."</p>
            </Show>
            {move || message.get().map(|(text, kind)| {
                let class = match kind {
                    "success" => "form-success",
                    "error" => "form-error",
                    _ => "form-info",
                };
                view! { <p class=class>{text}</p> }
            })}
        </div>
    }
}
