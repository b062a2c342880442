use leptos::prelude::*;

/// One sample on the line; None leaves a gap instead of dropping to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub value: Option<f64>,
}

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 280.0;
const PLOT_LEFT: f64 = 28.0;
const PLOT_TOP: f64 = 20.0;
const PLOT_BOTTOM: f64 = 236.0;
const LABEL_Y: f64 = 258.0;

/// Inline SVG line chart for sparse daily series. Consecutive recorded days
/// are connected; missing days break the line.
#[component]
pub fn LineChart(points: Vec<LinePoint>) -> impl IntoView {
    let values: Vec<f64> = points.iter().filter_map(|p| p.value).collect();
    if values.is_empty() {
        return view! { <p class="muted">"No data to show yet."</p> }.into_any();
    }

    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let range = if max - min < f64::EPSILON { 1.0 } else { max - min };

    let n = points.len();
    let step_x = (VIEW_W - PLOT_LEFT * 2.0) / (n.max(2) - 1) as f64;
    let y_of = move |v: f64| PLOT_BOTTOM - ((v - min) / range) * (PLOT_BOTTOM - PLOT_TOP);
    let label_step = n / 10 + 1;

    // Split the series into runs of consecutive recorded values
    let mut segments: Vec<Vec<(f64, f64)>> = vec![];
    let mut current: Vec<(f64, f64)> = vec![];
    let mut dots: Vec<(f64, f64)> = vec![];
    let mut labels: Vec<(f64, String)> = vec![];
    for (i, p) in points.iter().enumerate() {
        let x = PLOT_LEFT + step_x * i as f64;
        if i % label_step == 0 {
            labels.push((x, p.label.clone()));
        }
        match p.value {
            Some(v) => {
                let y = y_of(v);
                current.push((x, y));
                dots.push((x, y));
            }
            None => {
                if current.len() > 1 {
                    segments.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        segments.push(current);
    }

    let plot_right = VIEW_W - PLOT_LEFT;
    let view_box = format!("0 0 {VIEW_W} {VIEW_H}");
    view! {
        <svg class="chart" viewBox=view_box role="img">
            <line
                class="chart-axis"
                x1=PLOT_LEFT
                y1=PLOT_BOTTOM
                x2=plot_right
                y2=PLOT_BOTTOM
            ></line>
            {segments.into_iter().map(|seg| {
                let path = seg
                    .iter()
                    .map(|(x, y)| format!("{x:.1},{y:.1}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                view! { <polyline class="chart-line" points=path></polyline> }
            }).collect::<Vec<_>>()}
            {dots.into_iter().map(|(x, y)| view! {
                <circle class="chart-dot" cx=x cy=y r="3"></circle>
            }).collect::<Vec<_>>()}
            {labels.into_iter().map(|(x, label)| view! {
                <text class="chart-label" x=x y=LABEL_Y text-anchor="middle">{label}</text>
            }).collect::<Vec<_>>()}
        </svg>
    }
    .into_any()
}
