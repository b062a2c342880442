use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, WaterLog};
use crate::session::SessionContext;

const WATER_INCREMENT_ML: i64 = 250;
const MAX_BOTTLE_ICONS: i64 = 10;

/// Today's log from the full list, matched by date.
fn today_log(logs: &[WaterLog], today: &str) -> Option<WaterLog> {
    logs.iter().find(|log| log.date == today).cloned()
}

fn bottle_count(amount_ml: i64) -> i64 {
    (amount_ml / WATER_INCREMENT_ML).min(MAX_BOTTLE_ICONS)
}

/// Water intake counter for today. Same client-side upsert shape as the mood
/// widget: PUT when today's id is cached, POST otherwise.
#[component]
pub fn WaterTracker() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let (amount_ml, set_amount_ml) = signal(0_i64);
    let (log_id, set_log_id) = signal::<Option<i64>>(None);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (message, set_message) = signal::<Option<(String, &'static str)>>(None);

    Effect::new(move |_| {
        let token = session.token();
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let Some(token) = token else {
                set_error.set(Some("Please log in to track your water intake.".to_string()));
                set_is_loading.set(false);
                return;
            };
            match api::list_water_logs(&token).await {
                Ok(logs) => match today_log(&logs, &api::today()) {
                    Some(log) => {
                        set_amount_ml.set(log.amount_ml);
                        set_log_id.set(Some(log.id));
                    }
                    None => {
                        set_amount_ml.set(0);
                        set_log_id.set(None);
                    }
                },
                Err(e) => {
                    set_error.set(Some(e.message(&[], "Could not load your water intake")))
                }
            }
            set_is_loading.set(false);
        });
    });

    let write_amount = move |new_amount: i64| {
        let Some(token) = session.token() else {
            set_message.set(Some((
                "Please log in to record your water intake.".to_string(),
                "error",
            )));
            return;
        };
        let cached_id = log_id.get();

        set_is_loading.set(true);
        set_message.set(None);
        spawn_local(async move {
            let today = api::today();
            let result = match cached_id {
                Some(id) => api::update_water_log(&token, id, &today, new_amount).await,
                None => api::create_water_log(&token, &today, new_amount).await,
            };
            match result {
                Ok(log) => {
                    set_log_id.set(Some(log.id));
                    set_amount_ml.set(new_amount);
                    set_message.set(Some(("Water intake saved.".to_string(), "success")));
                }
                Err(e) => set_message.set(Some((
                    e.message(&["amount_ml"], "Could not save your water intake"),
                    "error",
                ))),
            }
            set_is_loading.set(false);
        });
    };

    let add_water = move |_| {
        write_amount(amount_ml.get() + WATER_INCREMENT_ML);
    };

    let reset_water = move |_| {
        write_amount(0);
    };

    view! {
        <div class="card water-card">
            <h3 class="card-title">"How much water today?"</h3>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <p class="water-amount">
                {move || format!("{:.2} L", amount_ml.get() as f64 / 1000.0)}
            </p>

            <div class="water-bottles">
                {move || (0..bottle_count(amount_ml.get())).map(|_| {
                    view! { <span class="water-bottle">"\u{1F4A7}"</span> }
                }).collect::<Vec<_>>()}
            </div>

            <div class="water-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || is_loading.get()
                    on:click=add_water
                >
                    {format!("+{WATER_INCREMENT_ML} ml")}
                </button>
                <button
                    class="btn btn-cancel"
                    disabled=move || is_loading.get()
                    on:click=reset_water
                >
                    "Reset"
                </button>
            </div>

            <Show when=move || is_loading.get()>
                <p class="muted">"Working..."</p>
            </Show>
            {move || message.get().map(|(text, kind)| {
                let class = if kind == "success" { "form-success" } else { "form-error" };
                view! { <p class=class>{text}</p> }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(id: i64, date: &str, amount_ml: i64) -> WaterLog {
        WaterLog {
            id,
            date: date.to_string(),
            amount_ml,
        }
    }

    #[test]
    fn today_log_matches_only_the_given_date() {
        let logs = vec![
            log(1, "2025-05-01", 500),
            log(2, "2025-05-02", 750),
        ];
        assert_eq!(today_log(&logs, "2025-05-02").map(|l| l.id), Some(2));
        assert!(today_log(&logs, "2025-05-03").is_none());
    }

    #[test]
    fn bottle_count_caps_at_the_icon_limit() {
        assert_eq!(bottle_count(0), 0);
        assert_eq!(bottle_count(249), 0);
        assert_eq!(bottle_count(500), 2);
        assert_eq!(bottle_count(25_000), MAX_BOTTLE_ICONS);
    }
}
