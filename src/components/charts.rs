use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, DaySummary};
use crate::components::bar_chart::{BarChart, BarPoint};
use crate::components::line_chart::{LineChart, LinePoint};
use crate::session::SessionContext;

/// Week axis, Saturday first. The backend only reports days with data, so
/// the client zero-fills the rest.
const WEEK_DAYS: &[&str] = &["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

fn week_points(rows: Vec<DaySummary>) -> Vec<BarPoint> {
    let totals: HashMap<String, i64> = rows
        .into_iter()
        .map(|r| (r.day, r.total_unique_exercises))
        .collect();
    WEEK_DAYS
        .iter()
        .map(|day| BarPoint {
            label: (*day).to_string(),
            value: totals.get(*day).copied().unwrap_or(0) as f64,
        })
        .collect()
}

/// "2025-05-04" → "05-04"; the year is noise on a 30-day axis.
fn short_date(date: &str) -> String {
    match date.split_once('-') {
        Some((_, rest)) => rest.to_string(),
        None => date.to_string(),
    }
}

#[component]
pub fn WeeklyExerciseChart() -> impl IntoView {
    let (points, set_points) = signal::<Vec<BarPoint>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    fetch_into(set_is_loading, set_error, move |token| async move {
        api::weekly_summary(&token).await.map(week_points)
    }, set_points);

    chart_card("Unique exercises per weekday", points, is_loading, error)
}

#[component]
pub fn MonthlyExerciseChart() -> impl IntoView {
    let (points, set_points) = signal::<Vec<BarPoint>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    fetch_into(set_is_loading, set_error, move |token| async move {
        api::monthly_summary(&token).await.map(|rows| {
            rows.into_iter()
                .map(|r| BarPoint {
                    label: r.month_year,
                    value: r.exercises as f64,
                })
                .collect()
        })
    }, set_points);

    chart_card("Unique exercises per month", points, is_loading, error)
}

#[component]
pub fn Last30DaysExerciseChart() -> impl IntoView {
    let (points, set_points) = signal::<Vec<BarPoint>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    fetch_into(set_is_loading, set_error, move |token| async move {
        api::last_30_days_summary(&token).await.map(|rows| {
            rows.into_iter()
                .map(|r| BarPoint {
                    label: short_date(&r.date),
                    value: r.exercises as f64,
                })
                .collect()
        })
    }, set_points);

    chart_card("Unique exercises, last 30 days", points, is_loading, error)
}

#[component]
pub fn MoodChart() -> impl IntoView {
    let (points, set_points) = signal::<Vec<BarPoint>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    fetch_into(set_is_loading, set_error, move |token| async move {
        api::mood_summary(&token).await.map(|rows| {
            rows.into_iter()
                .map(|r| BarPoint {
                    label: short_date(&r.date),
                    value: r.mood.unwrap_or(0.0),
                })
                .collect()
        })
    }, set_points);

    chart_card("Daily mood, last 30 days", points, is_loading, error)
}

#[component]
pub fn WaterChart() -> impl IntoView {
    let (points, set_points) = signal::<Vec<BarPoint>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    fetch_into(set_is_loading, set_error, move |token| async move {
        api::water_summary(&token).await.map(|rows| {
            rows.into_iter()
                .map(|r| BarPoint {
                    label: short_date(&r.date),
                    value: r.amount_ml.unwrap_or(0.0),
                })
                .collect()
        })
    }, set_points);

    chart_card("Water intake (ml), last 30 days", points, is_loading, error)
}

/// Weight keeps its gaps: a missing day must not plot as zero kilograms.
#[component]
pub fn WeightChart() -> impl IntoView {
    let (points, set_points) = signal::<Vec<LinePoint>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    fetch_into(set_is_loading, set_error, move |token| async move {
        api::weight_summary(&token).await.map(|rows| {
            rows.into_iter()
                .map(|r| LinePoint {
                    label: short_date(&r.date),
                    value: r.weight_kg,
                })
                .collect()
        })
    }, set_points);

    view! {
        <div class="card chart-card">
            <h3 class="card-title">"Body weight (kg), last 30 days"</h3>
            <Show when=move || is_loading.get()>
                <p class="muted">"Loading..."</p>
            </Show>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <Show when=move || !is_loading.get() && error.with(|e| e.is_none())>
                {move || view! { <LineChart points=points.get() /> }}
            </Show>
        </div>
    }
}

/// Shared fetch wiring: resolve the credential, run the request once on
/// mount, surface loading/error the same way everywhere.
fn fetch_into<T, F, Fut>(
    set_is_loading: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
    fetch: F,
    set_points: WriteSignal<Vec<T>>,
) where
    T: Send + Sync + 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<Vec<T>, api::ApiError>> + 'static,
{
    let session = expect_context::<SessionContext>();
    Effect::new(move |_| {
        let token = session.token();
        set_is_loading.set(true);
        set_error.set(None);
        let fut = token.map(|t| fetch(t));
        spawn_local(async move {
            match fut {
                None => set_error.set(Some("Please log in to see this chart.".to_string())),
                Some(fut) => match fut.await {
                    Ok(points) => set_points.set(points),
                    Err(e) => set_error.set(Some(e.message(&[], "Could not load chart data"))),
                },
            }
            set_is_loading.set(false);
        });
    });
}

fn chart_card(
    title: &'static str,
    points: ReadSignal<Vec<BarPoint>>,
    is_loading: ReadSignal<bool>,
    error: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="card chart-card">
            <h3 class="card-title">{title}</h3>
            <Show when=move || is_loading.get()>
                <p class="muted">"Loading..."</p>
            </Show>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <Show when=move || !is_loading.get() && error.with(|e| e.is_none())>
                {move || view! { <BarChart points=points.get() /> }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_points_zero_fill_missing_days_in_fixed_order() {
        let rows = vec![
            DaySummary {
                day: "Mon".to_string(),
                total_unique_exercises: 4,
            },
            DaySummary {
                day: "Sat".to_string(),
                total_unique_exercises: 2,
            },
        ];
        let points = week_points(rows);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, WEEK_DAYS.to_vec());
        assert_eq!(points[0].value, 2.0);
        assert_eq!(points[2].value, 4.0);
        assert_eq!(points[1].value, 0.0);
    }

    #[test]
    fn short_date_drops_the_year() {
        assert_eq!(short_date("2025-05-04"), "05-04");
        assert_eq!(short_date("nodate"), "nodate");
    }
}
