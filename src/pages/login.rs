use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiError};
use crate::session::SessionContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            set_error.set(Some("Enter your username and password.".to_string()));
            return;
        }

        let navigate = navigate.clone();
        set_is_submitting.set(true);
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(tokens) => {
                    session.store(&tokens.access, &tokens.refresh);
                    navigate("/home", Default::default());
                }
                Err(ApiError::Server { body, .. }) => {
                    let detail = body
                        .get("detail")
                        .and_then(|d| d.as_str())
                        .map(str::to_string);
                    set_error.set(Some(
                        detail.unwrap_or_else(|| "Invalid username or password.".to_string()),
                    ));
                }
                Err(_) => set_error.set(Some("Could not reach the server.".to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="card auth-card" on:submit=submit>
                <h2 class="auth-title">"Sign in"</h2>

                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        disabled=move || is_submitting.get()
                    />
                </div>
                <div class="form-group">
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        disabled=move || is_submitting.get()
                    />
                </div>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <button type="submit" class="btn btn-primary btn-block" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <a href="/signup" class="auth-switch-link">
                    "No account yet? Sign up"
                </a>
            </form>
        </div>
    }
}
