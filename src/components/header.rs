use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, WeatherReport};
use crate::session::SessionContext;

const WEATHER_CITY: &str = "Berlin";

/// Fixed top bar: app title, a best-effort weather readout, and logout.
/// Weather failures never surface to the user; they only hit the console.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_auth_page = move || {
        let path = pathname.get();
        path == "/login" || path == "/signup"
    };

    let (weather, set_weather) = signal::<Option<WeatherReport>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_weather(WEATHER_CITY).await {
                None => leptos::logging::log!("weather widget disabled: no API key"),
                Some(Ok(report)) => set_weather.set(Some(report)),
                Some(Err(e)) => {
                    leptos::logging::warn!(
                        "weather fetch failed: {}",
                        e.message(&[], "error")
                    );
                }
            }
        });
    });

    let logout = move |_| {
        session.clear();
        navigate("/login", Default::default());
    };

    view! {
        <header class="app-header">
            <span class="app-title">"IronLog"</span>

            <div class="header-middle">
                {move || weather.get().map(|w| {
                    let description = w.weather.first().map(|c| c.description.clone());
                    view! {
                        <span class="weather" title=description>
                            {format!("{:.0}\u{00b0}C", w.main.temp)}
                            <span class="weather-city">{w.name}</span>
                        </span>
                    }
                })}
            </div>

            <Show when=move || !on_auth_page() && session.is_logged_in()>
                <button class="btn btn-secondary" on:click=logout>
                    "Log out"
                </button>
            </Show>
        </header>
    }
}
