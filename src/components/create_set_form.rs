use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Exercise};
use crate::session::SessionContext;

/// Modal form for logging a new set against the selected session.
#[component]
pub fn CreateSetForm(
    /// Target session; the form refuses to submit without one.
    #[prop(into)]
    session_id: Signal<Option<i64>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let (exercises, set_exercises) = signal::<Vec<Exercise>>(vec![]);

    let (exercise_id, set_exercise_id) = signal(String::new());
    let (set_number, set_set_number) = signal(String::new());
    let (reps, set_reps) = signal(String::new());
    let (weight_kg, set_weight_kg) = signal(String::new());
    let (distance_km, set_distance_km) = signal(String::new());
    let (time_seconds, set_time_seconds) = signal(String::new());
    let (rpe, set_rpe) = signal(String::new());
    let (rest_seconds, set_rest_seconds) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    let (is_submitting, set_is_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    // Exercise dropdown options
    Effect::new(move |_| {
        let token = session.token();
        spawn_local(async move {
            let Some(token) = token else {
                set_error.set(Some("Please log in to load the exercise list.".to_string()));
                return;
            };
            match api::list_exercises(&token).await {
                Ok(list) => set_exercises.set(list),
                Err(e) => {
                    set_error.set(Some(e.message(&[], "Could not load the exercise list")))
                }
            }
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);

        let exercise = match api::parse_opt_i64(&exercise_id.get()) {
            Some(id) => id,
            None => {
                set_error.set(Some("Pick an exercise and a set number.".to_string()));
                return;
            }
        };
        let number = match api::parse_opt_i64(&set_number.get()) {
            Some(n) => n,
            None => {
                set_error.set(Some("Pick an exercise and a set number.".to_string()));
                return;
            }
        };
        let Some(workout_session) = session_id.get() else {
            set_error.set(Some("Select a workout session first.".to_string()));
            return;
        };
        let Some(token) = session.token() else {
            set_error.set(Some("Please log in to create a set.".to_string()));
            return;
        };

        let args = api::NewSetArgs {
            workout_session,
            exercise,
            set_number: number,
            reps: api::parse_opt_i64(&reps.get()),
            weight_kg: api::parse_opt_f64(&weight_kg.get()),
            distance_km: api::parse_opt_f64(&distance_km.get()),
            time_seconds: api::parse_opt_i64(&time_seconds.get()),
            rpe: api::parse_opt_i64(&rpe.get()),
            rest_seconds: api::parse_opt_i64(&rest_seconds.get()),
            notes: notes.get(),
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            match api::create_set(&token, &args).await {
                Ok(_) => {
                    set_success.set(Some("Set created.".to_string()));
                    on_created.run(());
                }
                Err(e) => set_error.set(Some(e.message(
                    &["non_field_errors", "exercise", "set_number"],
                    "Could not create the set",
                ))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal-title">"Log a new set"</h2>
                <p class="modal-subtitle">
                    {move || match session_id.get() {
                        Some(id) => format!("For session #{id}"),
                        None => "No session selected".to_string(),
                    }}
                </p>

                <Show when=move || is_submitting.get()>
                    <p class="muted">"Submitting..."</p>
                </Show>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || success.get().map(|s| view! { <p class="form-success">{s}</p> })}

                <form class="stacked-form" on:submit=submit>
                    <div class="form-group">
                        <label>"Exercise"</label>
                        <select
                            prop:value=move || exercise_id.get()
                            on:change=move |ev| set_exercise_id.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        >
                            <option value="">"Choose an exercise"</option>
                            {move || exercises.get().into_iter().map(|ex| view! {
                                <option value=ex.id.to_string()>{ex.name}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>

                    {number_field("Set number", "1", set_set_number, set_number, is_submitting)}

                    {number_field("Reps", "0", set_reps, reps, is_submitting)}
                    {number_field("Weight (kg)", "0", set_weight_kg, weight_kg, is_submitting)}
                    {number_field("Distance (km)", "0", set_distance_km, distance_km, is_submitting)}
                    {number_field("Time (seconds)", "0", set_time_seconds, time_seconds, is_submitting)}
                    {number_field("RPE (1-10)", "1", set_rpe, rpe, is_submitting)}
                    {number_field("Rest (seconds)", "0", set_rest_seconds, rest_seconds, is_submitting)}

                    <div class="form-group">
                        <label>"Notes"</label>
                        <textarea
                            rows="3"
                            prop:value=move || notes.get()
                            on:input=move |ev| set_notes.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        ></textarea>
                    </div>

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-cancel"
                            disabled=move || is_submitting.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                            "Create set"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn number_field(
    label: &'static str,
    min: &'static str,
    setter: WriteSignal<String>,
    value: ReadSignal<String>,
    disabled: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="number"
                min=min
                step="any"
                prop:value=move || value.get()
                on:input=move |ev| setter.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}
