use leptos::prelude::*;

use crate::api::Exercise;

#[component]
pub fn ExerciseCard(exercise: Exercise) -> impl IntoView {
    view! {
        <div class="exercise-card">
            <h4 class="exercise-card-name">{exercise.name}</h4>
            {exercise.is_cardio.then(|| view! {
                <span class="exercise-card-tag">"Cardio"</span>
            })}
            <p class="exercise-card-description">
                {exercise.description.unwrap_or_else(|| "No description.".to_string())}
            </p>
            {exercise.video_url.map(|url| view! {
                <a href=url target="_blank" rel="noopener noreferrer" class="exercise-card-link">
                    "Watch video"
                </a>
            })}
        </div>
    }
}

/// Horizontal strip of exercise cards.
#[component]
pub fn ExerciseSlider(exercises: Vec<Exercise>) -> impl IntoView {
    view! {
        <div class="card exercise-slider">
            <h3 class="card-title">"Available exercises"</h3>
            <div class="exercise-slider-track">
                {exercises.into_iter().map(|ex| view! {
                    <ExerciseCard exercise=ex />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
