use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Exercise};
use crate::session::SessionContext;

/// One row of the plan being assembled, kept stringified for input binding.
/// Order values are whatever the user typed; removing a row renumbers
/// nothing.
#[derive(Clone, Default, PartialEq)]
struct PlanExerciseDraft {
    exercise: String,
    order: String,
    default_sets: String,
    default_reps: String,
    default_weight_kg: String,
    default_distance_km: String,
    default_time_seconds: String,
    default_rpe: String,
    default_rest_seconds: String,
    default_notes: String,
}

/// Modal form for composing a workout plan with its exercise entries.
/// Everything is submitted as one combined POST.
#[component]
pub fn CreatePlanForm(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let (exercises, set_exercises) = signal::<Vec<Exercise>>(vec![]);

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (is_public, set_is_public) = signal(false);
    let (entries, set_entries) = signal::<Vec<PlanExerciseDraft>>(vec![]);

    let (is_submitting, set_is_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

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

    let add_entry = move |_| {
        set_entries.update(|list| list.push(PlanExerciseDraft::default()));
    };

    let remove_entry = move |index: usize| {
        set_entries.update(|list| {
            if index < list.len() {
                list.remove(index);
            }
        });
    };

    let edit_entry = move |index: usize, apply: fn(&mut PlanExerciseDraft, String), value: String| {
        set_entries.update(|list| {
            if let Some(entry) = list.get_mut(index) {
                apply(entry, value);
            }
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);

        if name.get().trim().is_empty() {
            set_error.set(Some("Enter a name for the workout plan.".to_string()));
            return;
        }

        let drafts = entries.get();
        let mut details = Vec::with_capacity(drafts.len());
        for draft in &drafts {
            let (Some(exercise), Some(order)) = (
                api::parse_opt_i64(&draft.exercise),
                api::parse_opt_i64(&draft.order),
            ) else {
                set_error.set(Some(
                    "Every added exercise needs an exercise and an order.".to_string(),
                ));
                return;
            };
            details.push(api::PlanExerciseArgs {
                exercise,
                order,
                default_sets: api::parse_opt_i64(&draft.default_sets),
                default_reps: api::parse_opt_i64(&draft.default_reps),
                default_weight_kg: api::parse_opt_f64(&draft.default_weight_kg),
                default_distance_km: api::parse_opt_f64(&draft.default_distance_km),
                default_time_seconds: api::parse_opt_i64(&draft.default_time_seconds),
                default_rpe: api::parse_opt_i64(&draft.default_rpe),
                default_rest_seconds: api::parse_opt_i64(&draft.default_rest_seconds),
                default_notes: draft.default_notes.clone(),
            });
        }

        let Some(token) = session.token() else {
            set_error.set(Some("Please log in to create a plan.".to_string()));
            return;
        };

        let args = api::NewPlanArgs {
            name: name.get(),
            description: description.get(),
            is_public: is_public.get(),
            exercises_details: details,
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            match api::create_plan(&token, &args).await {
                Ok(_) => {
                    set_success.set(Some("Workout plan created.".to_string()));
                    on_created.run(());
                }
                Err(e) => set_error.set(Some(e.message(
                    &[
                        "name",
                        "exercises_details.exercise",
                        "exercises_details.order",
                    ],
                    "Could not create the workout plan",
                ))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content modal-wide" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal-title">"New workout plan"</h2>

                <Show when=move || is_submitting.get()>
                    <p class="muted">"Submitting..."</p>
                </Show>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || success.get().map(|s| view! { <p class="form-success">{s}</p> })}

                <form class="stacked-form" on:submit=submit>
                    <div class="form-group">
                        <label>"Plan name"</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        />
                    </div>

                    <div class="form-group">
                        <label>"Description"</label>
                        <textarea
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        ></textarea>
                    </div>

                    <div class="form-group form-group-inline">
                        <input
                            id="plan-is-public"
                            type="checkbox"
                            prop:checked=move || is_public.get()
                            on:change=move |ev| {
                                if let Some(input) = ev
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                {
                                    set_is_public.set(input.checked());
                                }
                            }
                            disabled=move || is_submitting.get()
                        />
                        <label for="plan-is-public">"Public plan"</label>
                    </div>

                    <hr/>

                    <div class="plan-entries-header">
                        <h3>"Exercises in this plan"</h3>
                        <button type="button" class="btn btn-secondary" on:click=add_entry>
                            "Add exercise"
                        </button>
                    </div>

                    {move || entries.get().into_iter().enumerate().map(|(i, entry)| {
                        view! {
                            <div class="plan-entry">
                                <div class="plan-entry-row">
                                    <div class="form-group">
                                        <label>"Exercise"</label>
                                        <select
                                            prop:value=entry.exercise.clone()
                                            on:change=move |ev| edit_entry(
                                                i,
                                                |d, v| d.exercise = v,
                                                event_target_value(&ev),
                                            )
                                        >
                                            <option value="">"Choose an exercise"</option>
                                            {exercises.get().into_iter().map(|ex| view! {
                                                <option value=ex.id.to_string()>{ex.name}</option>
                                            }).collect::<Vec<_>>()}
                                        </select>
                                    </div>
                                    {entry_field("Order", &entry.order, i, |d, v| d.order = v, edit_entry)}
                                    {entry_field("Sets", &entry.default_sets, i, |d, v| d.default_sets = v, edit_entry)}
                                    {entry_field("Reps", &entry.default_reps, i, |d, v| d.default_reps = v, edit_entry)}
                                    {entry_field("Weight (kg)", &entry.default_weight_kg, i, |d, v| d.default_weight_kg = v, edit_entry)}
                                </div>
                                <div class="plan-entry-row">
                                    {entry_field("Distance (km)", &entry.default_distance_km, i, |d, v| d.default_distance_km = v, edit_entry)}
                                    {entry_field("Time (s)", &entry.default_time_seconds, i, |d, v| d.default_time_seconds = v, edit_entry)}
                                    {entry_field("RPE", &entry.default_rpe, i, |d, v| d.default_rpe = v, edit_entry)}
                                    {entry_field("Rest (s)", &entry.default_rest_seconds, i, |d, v| d.default_rest_seconds = v, edit_entry)}
                                    <div class="form-group">
                                        <label>"Notes"</label>
                                        <input
                                            type="text"
                                            prop:value=entry.default_notes.clone()
                                            on:input=move |ev| edit_entry(
                                                i,
                                                |d, v| d.default_notes = v,
                                                event_target_value(&ev),
                                            )
                                        />
                                    </div>
                                </div>
                                <button
                                    type="button"
                                    class="btn btn-cancel btn-small"
                                    on:click=move |_| remove_entry(i)
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }).collect::<Vec<_>>()}

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
                            "Create plan"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

type EditEntry = fn(&mut PlanExerciseDraft, String);

fn entry_field<F>(
    label: &'static str,
    value: &str,
    index: usize,
    apply: EditEntry,
    edit_entry: F,
) -> impl IntoView
where
    F: Fn(usize, EditEntry, String) + Copy + 'static,
{
    let value = value.to_string();
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="number"
                step="any"
                prop:value=value
                on:input=move |ev| edit_entry(index, apply, event_target_value(&ev))
            />
        </div>
    }
}
