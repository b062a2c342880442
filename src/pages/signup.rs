use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, RegisterArgs};

fn opt(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password2, set_password2) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());
    let (body_weight, set_body_weight) = signal(String::new());
    let (weight_unit, set_weight_unit) = signal("kg".to_string());
    let (height, set_height) = signal(String::new());
    let (height_unit, set_height_unit) = signal("cm".to_string());
    let (gender, set_gender) = signal(String::new());

    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let clear_form = move || {
        set_username.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
        set_password2.set(String::new());
        set_first_name.set(String::new());
        set_last_name.set(String::new());
        set_phone_number.set(String::new());
        set_body_weight.set(String::new());
        set_weight_unit.set("kg".to_string());
        set_height.set(String::new());
        set_height_unit.set("cm".to_string());
        set_gender.set(String::new());
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);

        if username.get().is_empty() || email.get().is_empty() || password.get().is_empty() {
            set_error.set(Some(
                "Username, email, and password are required.".to_string(),
            ));
            return;
        }

        let args = RegisterArgs {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            password2: password2.get(),
            first_name: opt(first_name.get()),
            last_name: opt(last_name.get()),
            phone_number: opt(phone_number.get()),
            body_weight: opt(body_weight.get()),
            weight_unit: opt(weight_unit.get()),
            height: opt(height.get()),
            height_unit: opt(height_unit.get()),
            gender: opt(gender.get()),
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            match api::register(&args).await {
                Ok(_) => {
                    set_success.set(Some(
                        "Account created. You can log in now.".to_string(),
                    ));
                    clear_form();
                }
                Err(e) => set_error.set(Some(e.message(
                    &["password", "username", "email"],
                    "Could not sign up",
                ))),
            }
            set_is_submitting.set(false);
        });
    };

    let text_field = move |label: &'static str,
                          kind: &'static str,
                          value: ReadSignal<String>,
                          setter: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| setter.set(event_target_value(&ev))
                    disabled=move || is_submitting.get()
                />
            </div>
        }
    };

    view! {
        <div class="auth-page">
            <form class="card auth-card auth-card-wide" on:submit=submit>
                <h2 class="auth-title">"Create an account"</h2>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || success.get().map(|s| view! { <p class="form-success">{s}</p> })}

                <div class="form-grid">
                    {text_field("Username", "text", username, set_username)}
                    {text_field("Email", "email", email, set_email)}
                    {text_field("Password", "password", password, set_password)}
                    {text_field("Repeat password", "password", password2, set_password2)}
                    {text_field("First name", "text", first_name, set_first_name)}
                    {text_field("Last name", "text", last_name, set_last_name)}
                    {text_field("Phone number", "tel", phone_number, set_phone_number)}
                    {text_field("Body weight", "number", body_weight, set_body_weight)}

                    <div class="form-group">
                        <label>"Weight unit"</label>
                        <select
                            prop:value=move || weight_unit.get()
                            on:change=move |ev| set_weight_unit.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        >
                            <option value="kg">"kg"</option>
                            <option value="lb">"lb"</option>
                        </select>
                    </div>

                    {text_field("Height", "number", height, set_height)}

                    <div class="form-group">
                        <label>"Height unit"</label>
                        <select
                            prop:value=move || height_unit.get()
                            on:change=move |ev| set_height_unit.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        >
                            <option value="cm">"cm"</option>
                            <option value="in">"in"</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label>"Gender"</label>
                        <select
                            prop:value=move || gender.get()
                            on:change=move |ev| set_gender.set(event_target_value(&ev))
                            disabled=move || is_submitting.get()
                        >
                            <option value="">"Prefer not to say"</option>
                            <option value="male">"Male"</option>
                            <option value="female">"Female"</option>
                        </select>
                    </div>
                </div>

                <button type="submit" class="btn btn-primary btn-block" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Submitting..." } else { "Sign up" }}
                </button>

                <a href="/login" class="auth-switch-link">
                    "Already registered? Sign in"
                </a>
            </form>
        </div>
    }
}
