use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::session::SessionContext;

/// Modal form for adding an exercise to the catalog.
#[component]
pub fn CreateExerciseForm(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (video_url, set_video_url) = signal(String::new());
    let (is_cardio, set_is_cardio) = signal(false);

    let (is_submitting, set_is_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);

        let exercise_name = name.get();
        if exercise_name.trim().is_empty() {
            set_error.set(Some("Enter a name for the exercise.".to_string()));
            return;
        }
        let Some(token) = session.token() else {
            set_error.set(Some("Please log in to create an exercise.".to_string()));
            return;
        };

        let url = video_url.get();
        let args = api::NewExerciseArgs {
            name: exercise_name,
            description: description.get(),
            video_url: if url.trim().is_empty() { None } else { Some(url) },
            is_cardio: is_cardio.get(),
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            match api::create_exercise(&token, &args).await {
                Ok(_) => {
                    set_success.set(Some("Exercise created.".to_string()));
                    on_created.run(());
                }
                Err(e) => {
                    set_error.set(Some(e.message(&["name"], "Could not create the exercise")))
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal-title">"New exercise"</h2>

                <Show when=move || is_submitting.get()>
                    <p class="muted">"Submitting..."</p>
                </Show>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || success.get().map(|s| view! { <p class="form-success">{s}</p> })}

                <form class="stacked-form" on:submit=submit>
                    <div class="form-group">
                        <label>"Name"</label>
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

                    <div class="form-group">
                        <label>"Video URL"</label>
                        <input
                            type="url"
                            placeholder="https://..."
                            prop:value=move || video_url.get()
                            on:input=move |ev| set_video_url.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        />
                    </div>

                    <div class="form-group form-group-inline">
                        <input
                            id="is-cardio"
                            type="checkbox"
                            prop:checked=move || is_cardio.get()
                            on:change=move |ev| {
                                if let Some(input) = ev
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                {
                                    set_is_cardio.set(input.checked());
                                }
                            }
                            disabled=move || is_submitting.get()
                        />
                        <label for="is-cardio">"Cardio exercise"</label>
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
                            "Create exercise"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
