use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ProfileArgs, UserProfile};
use crate::session::SessionContext;
use crate::theme::ThemeContext;

/// Account details with a view/edit toggle. Saving PATCHes the whole field
/// set exactly as entered and replaces the local copy with the server's
/// response. The theme switch lives here too.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let theme_ctx = expect_context::<ThemeContext>();

    let (user, set_user) = signal::<Option<UserProfile>>(None);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_editing, set_is_editing) = signal(false);
    let (message, set_message) = signal::<Option<(String, &'static str)>>(None);

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());
    let (body_weight, set_body_weight) = signal(String::new());
    let (weight_unit, set_weight_unit) = signal(String::new());
    let (height, set_height) = signal(String::new());
    let (height_unit, set_height_unit) = signal(String::new());
    let (gender, set_gender) = signal(String::new());

    let seed_form = move |profile: &UserProfile| {
        set_username.set(profile.username.clone());
        set_email.set(profile.email.clone().unwrap_or_default());
        set_first_name.set(profile.first_name.clone().unwrap_or_default());
        set_last_name.set(profile.last_name.clone().unwrap_or_default());
        set_phone_number.set(profile.phone_number.clone().unwrap_or_default());
        set_body_weight.set(profile.body_weight.clone().unwrap_or_default());
        set_weight_unit.set(profile.weight_unit.clone().unwrap_or_default());
        set_height.set(profile.height.clone().unwrap_or_default());
        set_height_unit.set(profile.height_unit.clone().unwrap_or_default());
        set_gender.set(profile.gender.clone().unwrap_or_default());
    };

    Effect::new(move |_| {
        let token = session.token();
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let Some(token) = token else {
                set_error.set(Some(
                    "You need to be logged in to view your profile.".to_string(),
                ));
                set_is_loading.set(false);
                return;
            };
            match api::me(&token).await {
                Ok(profile) => {
                    seed_form(&profile);
                    set_user.set(Some(profile));
                }
                Err(e) => set_error.set(Some(e.message(&[], "Could not load your profile"))),
            }
            set_is_loading.set(false);
        });
    });

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_message.set(None);

        let Some(token) = session.token() else {
            set_message.set(Some(("Please log in to edit your profile.".to_string(), "error")));
            return;
        };
        let args = ProfileArgs {
            username: username.get(),
            email: email.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            phone_number: phone_number.get(),
            body_weight: body_weight.get(),
            weight_unit: weight_unit.get(),
            height: height.get(),
            height_unit: height_unit.get(),
            gender: gender.get(),
        };

        spawn_local(async move {
            match api::update_me(&token, &args).await {
                Ok(profile) => {
                    seed_form(&profile);
                    set_user.set(Some(profile));
                    set_message.set(Some(("Profile updated.".to_string(), "success")));
                    set_is_editing.set(false);
                }
                Err(e) => set_message.set(Some((
                    e.message(&["username", "email"], "Could not update your profile"),
                    "error",
                ))),
            }
        });
    };

    let toggle_theme = move |_| {
        let next = if theme_ctx.theme.get() == "dark" {
            "light"
        } else {
            "dark"
        };
        theme_ctx.set_theme.set(next.to_string());
    };

    let field = move |label: &'static str,
                      value: ReadSignal<String>,
                      setter: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                {move || if is_editing.get() {
                    view! {
                        <input
                            type="text"
                            prop:value=move || value.get()
                            on:input=move |ev| setter.set(event_target_value(&ev))
                        />
                    }.into_any()
                } else {
                    let shown = value.get();
                    let shown = if shown.is_empty() { "N/A".to_string() } else { shown };
                    view! { <p class="field-value">{shown}</p> }.into_any()
                }}
            </div>
        }
    };

    view! {
        <div class="page profile-page">
            <h2 class="page-heading">"Your profile"</h2>

            <Show when=move || is_loading.get()>
                <p class="muted">"Loading profile..."</p>
            </Show>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <Show when=move || !is_loading.get() && user.with(|u| u.is_some())>
                <form class="card profile-card" on:submit=save>
                    {move || message.get().map(|(text, kind)| {
                        let class = if kind == "success" { "form-success" } else { "form-error" };
                        view! { <p class=class>{text}</p> }
                    })}

                    <div class="form-grid">
                        {field("Username", username, set_username)}
                        {field("Email", email, set_email)}
                        {field("First name", first_name, set_first_name)}
                        {field("Last name", last_name, set_last_name)}
                        {field("Phone number", phone_number, set_phone_number)}
                        {field("Body weight", body_weight, set_body_weight)}
                        {field("Weight unit", weight_unit, set_weight_unit)}
                        {field("Height", height, set_height)}
                        {field("Height unit", height_unit, set_height_unit)}
                        {field("Gender", gender, set_gender)}
                    </div>

                    <div class="profile-actions">
                        {move || if is_editing.get() {
                            view! {
                                <button type="submit" class="btn btn-primary">"Save"</button>
                                <button
                                    type="button"
                                    class="btn btn-cancel"
                                    on:click=move |_| {
                                        if let Some(profile) = user.get() {
                                            seed_form(&profile);
                                        }
                                        set_is_editing.set(false);
                                        set_message.set(None);
                                    }
                                >
                                    "Cancel"
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <button
                                    type="button"
                                    class="btn btn-primary"
                                    on:click=move |_| set_is_editing.set(true)
                                >
                                    "Edit profile"
                                </button>
                            }.into_any()
                        }}
                        <button type="button" class="btn btn-secondary" on:click=toggle_theme>
                            {move || if theme_ctx.theme.get() == "dark" {
                                "Switch to light mode"
                            } else {
                                "Switch to dark mode"
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
