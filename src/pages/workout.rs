use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Exercise, WorkoutSession};
use crate::components::create_exercise_form::CreateExerciseForm;
use crate::components::create_plan_form::CreatePlanForm;
use crate::components::create_set_form::CreateSetForm;
use crate::components::exercise_card::ExerciseSlider;
use crate::components::session_picker::SessionPicker;
use crate::components::sets_table::SetsTable;
use crate::session::SessionContext;

/// Workout hub: pick a session, log sets, and manage the exercise catalog
/// and plans through modal forms. The sets table never refetches on its own;
/// this page bumps `refresh_key` after a set is created.
#[component]
pub fn WorkoutPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    // Sessions
    let (sessions, set_sessions) = signal::<Vec<WorkoutSession>>(vec![]);
    let (selected_session, set_selected_session) = signal::<Option<i64>>(None);
    let (sessions_loading, set_sessions_loading) = signal(true);
    let (sessions_error, set_sessions_error) = signal::<Option<String>>(None);

    // Exercises
    let (exercises, set_exercises) = signal::<Vec<Exercise>>(vec![]);
    let (exercises_loading, set_exercises_loading) = signal(true);
    let (exercises_error, set_exercises_error) = signal::<Option<String>>(None);

    // Modals
    let (show_create_set, set_show_create_set) = signal(false);
    let (show_create_plan, set_show_create_plan) = signal(false);
    let (show_create_exercise, set_show_create_exercise) = signal(false);

    // Bumped whenever the table needs fresh data
    let (refresh_key, set_refresh_key) = signal(0_u32);

    let load_sessions = move || {
        let token = session.token();
        set_sessions_loading.set(true);
        set_sessions_error.set(None);
        spawn_local(async move {
            let Some(token) = token else {
                set_sessions_error
                    .set(Some("Please log in to see your workout sessions.".to_string()));
                set_sessions_loading.set(false);
                return;
            };
            match api::list_sessions(&token).await {
                Ok(list) => {
                    if selected_session.get_untracked().is_none() {
                        set_selected_session.set(list.first().map(|s| s.id));
                    }
                    set_sessions.set(list);
                }
                Err(e) => set_sessions_error
                    .set(Some(e.message(&[], "Could not load your workout sessions"))),
            }
            set_sessions_loading.set(false);
        });
    };

    let load_exercises = move || {
        let token = session.token();
        set_exercises_loading.set(true);
        set_exercises_error.set(None);
        spawn_local(async move {
            let Some(token) = token else {
                set_exercises_error.set(Some("Please log in to see exercises.".to_string()));
                set_exercises_loading.set(false);
                return;
            };
            match api::list_exercises(&token).await {
                Ok(list) => set_exercises.set(list),
                Err(e) => {
                    set_exercises_error.set(Some(e.message(&[], "Could not load exercises")))
                }
            }
            set_exercises_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_sessions();
        load_exercises();
    });

    // Start a new session dated today and focus it
    let start_session = move |_| {
        let Some(token) = session.token() else {
            set_sessions_error.set(Some("Please log in to start a session.".to_string()));
            return;
        };
        spawn_local(async move {
            match api::create_session(&token, &api::today()).await {
                Ok(created) => {
                    set_selected_session.set(Some(created.id));
                    load_sessions();
                }
                Err(e) => set_sessions_error
                    .set(Some(e.message(&["date"], "Could not start a session"))),
            }
        });
    };

    let on_set_created = move |()| {
        set_show_create_set.set(false);
        set_refresh_key.update(|k| *k += 1);
    };

    let on_exercise_created = move |()| {
        set_show_create_exercise.set(false);
        load_exercises();
    };

    let on_plan_created = move |()| {
        set_show_create_plan.set(false);
        load_sessions();
    };

    let retry = move |_| {
        if sessions_error.get().is_some() {
            load_sessions();
        }
        if exercises_error.get().is_some() {
            load_exercises();
        }
    };

    let is_loading = move || sessions_loading.get() || exercises_loading.get();
    let load_error = move || sessions_error.get().or_else(|| exercises_error.get());

    view! {
        <div class="page workout-page">
            <style>{include_str!("workout.css")}</style>

            <h2 class="page-heading">"Your workout sessions"</h2>

            <Show when=is_loading>
                <p class="muted">"Loading data..."</p>
            </Show>

            {move || (!is_loading()).then(|| load_error().map(|e| view! {
                <div class="error-box">
                    {e}
                    <button class="btn btn-secondary" on:click=retry>
                        "Try again"
                    </button>
                </div>
            }))}

            <Show when=move || !is_loading() && load_error().is_none()>
                <div class="workout-actions">
                    <button class="btn btn-primary" on:click=start_session>
                        "Start session today"
                    </button>
                    <button
                        class="btn btn-create"
                        disabled=move || selected_session.get().is_none()
                        on:click=move |_| set_show_create_set.set(true)
                    >
                        "Log a set"
                    </button>
                    <button class="btn btn-create" on:click=move |_| set_show_create_plan.set(true)>
                        "New workout plan"
                    </button>
                    <button class="btn btn-create" on:click=move |_| set_show_create_exercise.set(true)>
                        "New exercise"
                    </button>
                </div>

                {move || view! {
                    <SessionPicker
                        sessions=sessions.get()
                        selected=selected_session
                        on_select=move |id| set_selected_session.set(id)
                    />
                }}

                <SetsTable session_id=selected_session refresh=refresh_key />

                {move || view! { <ExerciseSlider exercises=exercises.get() /> }}
            </Show>

            <Show when=move || show_create_set.get()>
                <CreateSetForm
                    session_id=selected_session
                    on_close=move |()| set_show_create_set.set(false)
                    on_created=on_set_created
                />
            </Show>

            <Show when=move || show_create_plan.get()>
                <CreatePlanForm
                    on_close=move |()| set_show_create_plan.set(false)
                    on_created=on_plan_created
                />
            </Show>

            <Show when=move || show_create_exercise.get()>
                <CreateExerciseForm
                    on_close=move |()| set_show_create_exercise.set(false)
                    on_created=on_exercise_created
                />
            </Show>
        </div>
    }
}
