use leptos::prelude::*;

/// One bar: category label plus value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
}

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 280.0;
const PLOT_LEFT: f64 = 20.0;
const PLOT_TOP: f64 = 20.0;
const PLOT_BOTTOM: f64 = 236.0;
const LABEL_Y: f64 = 258.0;

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Inline SVG bar chart. Display only: no tooltips, no interaction. When
/// there are many bars, only every n-th label is drawn to keep the axis
/// readable.
#[component]
pub fn BarChart(points: Vec<BarPoint>) -> impl IntoView {
    if points.is_empty() {
        return view! { <p class="muted">"No data to show yet."</p> }.into_any();
    }

    let max = points
        .iter()
        .map(|p| p.value)
        .fold(f64::MIN, f64::max)
        .max(1.0);
    let n = points.len();
    let band = (VIEW_W - PLOT_LEFT * 2.0) / n as f64;
    let bar_w = band * 0.6;
    let label_step = n / 10 + 1;

    let bars = points
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let x = PLOT_LEFT + band * i as f64 + (band - bar_w) / 2.0;
            let h = (p.value / max) * (PLOT_BOTTOM - PLOT_TOP);
            let y = PLOT_BOTTOM - h;
            let value_y = y - 6.0;
            let center = x + bar_w / 2.0;
            let show_label = i % label_step == 0;
            view! {
                <g>
                    <rect class="chart-bar" x=x y=y width=bar_w height=h rx="2"></rect>
                    {show_label.then(|| view! {
                        <text class="chart-value" x=center y=value_y text-anchor="middle">
                            {fmt_value(p.value)}
                        </text>
                        <text class="chart-label" x=center y=LABEL_Y text-anchor="middle">
                            {p.label.clone()}
                        </text>
                    })}
                </g>
            }
        })
        .collect::<Vec<_>>();

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
            {bars}
        </svg>
    }
    .into_any()
}
