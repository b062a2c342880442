use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, WorkoutSession};
use crate::components::charts::WeeklyExerciseChart;
use crate::components::mood_tracker::MoodTracker;
use crate::components::sets_table::SetsTable;
use crate::components::water_tracker::WaterTracker;
use crate::session::SessionContext;

/// Landing page after login: greeting, daily widgets, the sets table for the
/// most recent session, and the weekly chart.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let (username, set_username) = signal::<Option<String>>(None);
    let (user_error, set_user_error) = signal::<Option<String>>(None);

    let (selected_session, set_selected_session) = signal::<Option<i64>>(None);
    let (sessions_error, set_sessions_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);

    // Who is logged in; skipped entirely without a credential
    Effect::new(move |_| {
        let token = session.token();
        spawn_local(async move {
            let Some(token) = token else {
                set_user_error.set(Some("Please log in to see your profile.".to_string()));
                return;
            };
            match api::me(&token).await {
                Ok(profile) => set_username.set(Some(profile.username)),
                Err(e) => {
                    set_user_error.set(Some(e.message(&[], "Could not load your profile")))
                }
            }
        });
    });

    // Pick the first session so the table opens on something recent
    Effect::new(move |_| {
        let token = session.token();
        set_is_loading.set(true);
        spawn_local(async move {
            let Some(token) = token else {
                set_sessions_error.set(Some("Please log in to see your sessions.".to_string()));
                set_is_loading.set(false);
                return;
            };
            match api::list_sessions(&token).await {
                Ok(sessions) => {
                    set_selected_session.set(sessions.first().map(|s: &WorkoutSession| s.id));
                }
                Err(e) => set_sessions_error
                    .set(Some(e.message(&[], "Could not load your workout sessions"))),
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="page home-page">
            <h2 class="page-heading">
                {move || match username.get() {
                    Some(name) => format!("Hey {name} \u{1F44B}"),
                    None => "Hey there".to_string(),
                }}
            </h2>

            {move || user_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || sessions_error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <Show when=move || !is_loading.get()>
                <div class="home-grid">
                    <SetsTable
                        session_id=selected_session
                        refresh=Signal::derive(|| 0_u32)
                    />
                    <div class="home-side">
                        <MoodTracker />
                        <WaterTracker />
                        <WeeklyExerciseChart />
                    </div>
                </div>
            </Show>
        </div>
    }
}
