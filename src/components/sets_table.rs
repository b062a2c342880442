use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Set};
use crate::session::SessionContext;

/// Table of logged sets with inline editing of reps and weight.
///
/// One row at a time can be in edit mode. Saving PATCHes only the two
/// editable columns and then replaces the whole row with the server's
/// response, so server-computed columns (total load) stay authoritative.
/// Refetching is driven entirely by the parent through `session_id` and
/// `refresh`; the table never reloads itself after its own writes.
#[component]
pub fn SetsTable(
    /// Session filter; None shows sets from every session.
    #[prop(into)]
    session_id: Signal<Option<i64>>,
    /// Opaque counter; any change forces a refetch.
    #[prop(into)]
    refresh: Signal<u32>,
) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let (sets, set_sets) = signal::<Vec<Set>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Inline edit state: one editing row, stringified buffers for the inputs
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let (edit_reps, set_edit_reps) = signal(String::new());
    let (edit_weight, set_edit_weight) = signal(String::new());
    let (is_saving, set_is_saving) = signal(false);

    Effect::new(move |_| {
        let sid = session_id.get();
        let _tick = refresh.get();
        let token = session.token();

        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let Some(token) = token else {
                set_error.set(Some("Please log in to see your logged sets.".to_string()));
                set_is_loading.set(false);
                return;
            };
            match api::list_sets(&token, sid).await {
                Ok(mut list) => {
                    api::sort_sets(&mut list);
                    set_sets.set(list);
                }
                Err(e) => set_error.set(Some(e.message(&[], "Could not load your sets"))),
            }
            set_is_loading.set(false);
        });
    });

    // Seed the buffers from the row being edited; any previous unsaved
    // buffer is abandoned.
    let start_edit = move |id: i64, reps: String, weight: String| {
        set_editing_id.set(Some(id));
        set_edit_reps.set(reps);
        set_edit_weight.set(weight);
        set_error.set(None);
    };

    let cancel_edit = move || {
        set_editing_id.set(None);
        set_edit_reps.set(String::new());
        set_edit_weight.set(String::new());
        set_error.set(None);
    };

    let save_edit = move |set_id: i64| {
        let reps_input = edit_reps.get();
        let weight_input = edit_weight.get();
        if reps_input.trim().is_empty() && weight_input.trim().is_empty() {
            set_error.set(Some("Fill in at least one field before saving.".to_string()));
            return;
        }
        let Some(token) = session.token() else {
            set_error.set(Some("Please log in to edit sets.".to_string()));
            return;
        };

        let payload = api::SetPatchArgs {
            reps: api::parse_opt_i64(&reps_input),
            weight_kg: api::parse_opt_f64(&weight_input),
        };

        set_is_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::update_set(&token, set_id, &payload).await {
                Ok(updated) => {
                    set_sets.update(|list| {
                        if let Some(row) = list.iter_mut().find(|s| s.id == updated.id) {
                            *row = updated;
                        }
                    });
                    set_editing_id.set(None);
                    set_edit_reps.set(String::new());
                    set_edit_weight.set(String::new());
                }
                Err(e) => {
                    // Stay in edit mode so the user's input survives
                    set_error.set(Some(
                        e.message(&["reps", "weight_kg"], "Could not save the set"),
                    ));
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="card sets-table-card">
            <h3 class="card-title">"Training log"</h3>

            <Show when=move || is_saving.get()>
                <p class="muted">"Saving changes..."</p>
            </Show>

            {move || error.get().map(|e| view! {
                <div class="error-box">
                    {e}
                    <button class="link-button" on:click=move |_| set_error.set(None)>
                        "Dismiss"
                    </button>
                </div>
            })}

            <Show when=move || is_loading.get()>
                <p class="muted">"Loading sets..."</p>
            </Show>

            <Show when=move || {
                !is_loading.get() && sets.with(|s| s.is_empty()) && error.with(|e| e.is_none())
            }>
                <p class="muted">"No sets logged yet."</p>
            </Show>

            <Show when=move || !is_loading.get() && sets.with(|s| !s.is_empty())>
                <div class="table-scroll">
                    <table class="sets-table">
                        <thead>
                            <tr>
                                <th>"Session date"</th>
                                <th>"Exercise"</th>
                                <th>"Set"</th>
                                <th>"Reps"</th>
                                <th>"Weight (kg)"</th>
                                <th>"Distance (km)"</th>
                                <th>"Time (s)"</th>
                                <th>"RPE"</th>
                                <th>"Load (kg)"</th>
                                <th>"Notes"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || sets.get().into_iter().map(|s| {
                                let id = s.id;
                                let date = s.workout_session
                                    .as_ref()
                                    .and_then(|ws| ws.date.clone())
                                    .unwrap_or_else(|| "unknown".to_string());
                                let reps_seed = s.reps.map(|v| v.to_string()).unwrap_or_default();
                                let weight_seed = s.weight_kg.map(|v| v.to_string()).unwrap_or_default();
                                let is_editing = move || editing_id.get() == Some(id);

                                view! {
                                    <tr>
                                        <td>{date}</td>
                                        <td>{dash_text(s.exercise_name.clone())}</td>
                                        <td>{dash_int(s.set_number)}</td>
                                        <td>
                                            {move || if is_editing() {
                                                view! {
                                                    <input
                                                        type="number"
                                                        min="0"
                                                        class="cell-input"
                                                        prop:value=move || edit_reps.get()
                                                        on:input=move |ev| set_edit_reps.set(event_target_value(&ev))
                                                        disabled=move || is_saving.get()
                                                    />
                                                }.into_any()
                                            } else {
                                                view! { <span>{dash_int(s.reps)}</span> }.into_any()
                                            }}
                                        </td>
                                        <td>
                                            {move || if is_editing() {
                                                view! {
                                                    <input
                                                        type="number"
                                                        min="0"
                                                        step="0.01"
                                                        class="cell-input"
                                                        prop:value=move || edit_weight.get()
                                                        on:input=move |ev| set_edit_weight.set(event_target_value(&ev))
                                                        disabled=move || is_saving.get()
                                                    />
                                                }.into_any()
                                            } else {
                                                view! { <span>{dash_unit(s.weight_kg, "kg")}</span> }.into_any()
                                            }}
                                        </td>
                                        <td>{dash_unit(s.distance_km, "km")}</td>
                                        <td>{dash_unit_int(s.time_seconds, "s")}</td>
                                        <td>{dash_int(s.rpe)}</td>
                                        <td>{dash_unit(s.load_kg, "kg")}</td>
                                        <td class="notes-cell">{dash_text(s.notes.clone())}</td>
                                        <td class="actions-cell">
                                            {move || if is_editing() {
                                                view! {
                                                    <div class="row-actions">
                                                        <button
                                                            class="btn btn-save"
                                                            disabled=move || is_saving.get()
                                                            on:click=move |_| save_edit(id)
                                                        >
                                                            "Save"
                                                        </button>
                                                        <button
                                                            class="btn btn-cancel"
                                                            disabled=move || is_saving.get()
                                                            on:click=move |_| cancel_edit()
                                                        >
                                                            "Cancel"
                                                        </button>
                                                    </div>
                                                }.into_any()
                                            } else {
                                                let reps_seed = reps_seed.clone();
                                                let weight_seed = weight_seed.clone();
                                                view! {
                                                    <button
                                                        class="btn btn-edit"
                                                        disabled=move || is_saving.get()
                                                        on:click=move |_| start_edit(
                                                            id,
                                                            reps_seed.clone(),
                                                            weight_seed.clone(),
                                                        )
                                                    >
                                                        "Edit"
                                                    </button>
                                                }.into_any()
                                            }}
                                        </td>
                                    </tr>
                                }
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

fn dash_int(v: Option<i64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "-".to_string())
}

fn dash_text(v: Option<String>) -> String {
    match v {
        Some(s) if !s.is_empty() => s,
        _ => "-".to_string(),
    }
}

fn dash_unit(v: Option<f64>, unit: &str) -> String {
    v.map(|x| format!("{x} {unit}"))
        .unwrap_or_else(|| "-".to_string())
}

fn dash_unit_int(v: Option<i64>, unit: &str) -> String {
    v.map(|x| format!("{x} {unit}"))
        .unwrap_or_else(|| "-".to_string())
}
