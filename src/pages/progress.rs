use leptos::prelude::*;

use crate::components::charts::{
    Last30DaysExerciseChart, MonthlyExerciseChart, MoodChart, WaterChart, WeeklyExerciseChart,
    WeightChart,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressView {
    MonthlyExercises,
    WeeklyExercises,
    Last30Days,
    Mood,
    Water,
    Weight,
}

const VIEWS: &[(ProgressView, &str)] = &[
    (ProgressView::MonthlyExercises, "Monthly exercises"),
    (ProgressView::WeeklyExercises, "Weekly exercises"),
    (ProgressView::Last30Days, "Last 30 days"),
    (ProgressView::Mood, "Mood"),
    (ProgressView::Water, "Water"),
    (ProgressView::Weight, "Weight"),
];

/// One chart at a time behind a row of toggle buttons.
#[component]
pub fn ProgressPage() -> impl IntoView {
    let (active_view, set_active_view) = signal(ProgressView::MonthlyExercises);

    view! {
        <div class="page progress-page">
            <style>{include_str!("progress.css")}</style>

            <h2 class="page-heading">"Your progress"</h2>

            <div class="progress-switcher">
                {VIEWS.iter().map(|&(view_kind, label)| {
                    view! {
                        <button
                            class="btn view-button"
                            class:view-selected=move || active_view.get() == view_kind
                            on:click=move |_| set_active_view.set(view_kind)
                        >
                            {label}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            {move || match active_view.get() {
                ProgressView::MonthlyExercises => view! { <MonthlyExerciseChart /> }.into_any(),
                ProgressView::WeeklyExercises => view! { <WeeklyExerciseChart /> }.into_any(),
                ProgressView::Last30Days => view! { <Last30DaysExerciseChart /> }.into_any(),
                ProgressView::Mood => view! { <MoodChart /> }.into_any(),
                ProgressView::Water => view! { <WaterChart /> }.into_any(),
                ProgressView::Weight => view! { <WeightChart /> }.into_any(),
            }}
        </div>
    }
}
