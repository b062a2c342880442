use leptos::prelude::*;

use crate::api::WorkoutSession;

/// Row of buttons for filtering sets: all sessions, or one specific session.
#[component]
pub fn SessionPicker(
    sessions: Vec<WorkoutSession>,
    #[prop(into)] selected: Signal<Option<i64>>,
    #[prop(into)] on_select: Callback<Option<i64>>,
) -> impl IntoView {
    view! {
        <div class="session-picker">
            <button
                class="btn session-button"
                class:session-selected=move || selected.get().is_none()
                on:click=move |_| on_select.run(None)
            >
                "All sets"
            </button>
            {sessions.into_iter().map(|s| {
                let id = s.id;
                let label = s.date.unwrap_or_else(|| format!("Session #{id}"));
                view! {
                    <button
                        class="btn session-button"
                        class:session-selected=move || selected.get() == Some(id)
                        on:click=move |_| on_select.run(Some(id))
                    >
                        {label}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
