use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Backend host, overridable at build time with `API_BASE_URL`.
/// Every call site goes through [`api_base`]; there is exactly one fallback.
const DEFAULT_API_BASE: &str = "https://strong-backend-5caa.onrender.com";

pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

// -- Errors --

#[derive(Debug, Clone)]
pub enum ApiError {
    /// No stored credential. Raised before any request is sent.
    NoSession,
    /// Network or decoding failure.
    Transport(String),
    /// Non-2xx response, with whatever JSON body the server produced.
    Server { status: u16, body: serde_json::Value },
}

impl ApiError {
    /// Collapse the error into a single user-facing line. `fields` are
    /// checked against the server body in order and the first match wins,
    /// then `non_field_errors`, then `detail`, then `fallback` with the
    /// stringified body appended.
    pub fn message(&self, fields: &[&str], fallback: &str) -> String {
        match self {
            ApiError::NoSession => "Please log in to continue.".to_string(),
            ApiError::Transport(msg) => format!("{fallback}: {msg}"),
            ApiError::Server { body, .. } => {
                for key in fields.iter().copied().chain(["non_field_errors"]) {
                    if let Some(text) = field_error(body, key) {
                        return text;
                    }
                }
                if let Some(detail) = body.get("detail").and_then(|d| d.as_str()) {
                    return detail.to_string();
                }
                format!("{fallback}: {body}")
            }
        }
    }
}

/// Look up a validation message under `key`, which may be a dot-separated
/// path (nested serializers report errors as lists of per-row objects, so
/// each array level is entered through its first element).
fn field_error(body: &serde_json::Value, key: &str) -> Option<String> {
    let mut cur = body;
    for seg in key.split('.') {
        if let serde_json::Value::Array(items) = cur {
            cur = items.first()?;
        }
        cur = cur.get(seg)?;
    }
    match cur {
        serde_json::Value::Array(items) => {
            items.first().and_then(|v| v.as_str()).map(str::to_string)
        }
        serde_json::Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

// -- Response normalization --

/// List endpoints answer with either a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Paginated { results: Vec<T> },
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Paginated { results } => results,
        }
    }
}

// -- Request plumbing --

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if resp.ok() {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    } else {
        let status = resp.status();
        let body = resp
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        Err(ApiError::Server { status, body })
    }
}

async fn get_authed<T: DeserializeOwned>(token: &str, path: &str) -> Result<T, ApiError> {
    let resp = Request::get(&format!("{}{}", api_base(), path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let mut builder = Request::post(&format!("{}{}", api_base(), path));
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer(token));
    }
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

async fn patch_authed<B: Serialize, T: DeserializeOwned>(
    token: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = Request::patch(&format!("{}{}", api_base(), path))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

async fn put_authed<B: Serialize, T: DeserializeOwned>(
    token: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = Request::put(&format!("{}{}", api_base(), path))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

// -- Auth --

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

pub async fn login(username: &str, password: &str) -> Result<TokenPair, ApiError> {
    post_json("/api/token/", None, &LoginArgs { username, password }).await
}

/// Registration payload. Optional fields are omitted entirely when the user
/// left them blank, since the backend validates some of them conditionally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterArgs {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

pub async fn register(args: &RegisterArgs) -> Result<serde_json::Value, ApiError> {
    post_json("/api/register/", None, args).await
}

// -- Profile --

/// Decimal fields come back as either JSON numbers or strings depending on
/// the serializer; normalize both into a display string.
fn de_stringly<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "de_stringly")]
    pub body_weight: Option<String>,
    #[serde(default)]
    pub weight_unit: Option<String>,
    #[serde(default, deserialize_with = "de_stringly")]
    pub height: Option<String>,
    #[serde(default)]
    pub height_unit: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Profile edit payload; fields are sent exactly as entered.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileArgs {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub body_weight: String,
    pub weight_unit: String,
    pub height: String,
    pub height_unit: String,
    pub gender: String,
}

pub async fn me(token: &str) -> Result<UserProfile, ApiError> {
    get_authed(token, "/api/me/").await
}

pub async fn update_me(token: &str, args: &ProfileArgs) -> Result<UserProfile, ApiError> {
    patch_authed(token, "/api/me/", args).await
}

// -- Exercises --

#[derive(Debug, Clone, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub is_cardio: bool,
}

/// Create payload; an empty video URL is sent as an explicit null.
#[derive(Debug, Clone, Serialize)]
pub struct NewExerciseArgs {
    pub name: String,
    pub description: String,
    pub video_url: Option<String>,
    pub is_cardio: bool,
}

pub async fn list_exercises(token: &str) -> Result<Vec<Exercise>, ApiError> {
    let resp: ListResponse<Exercise> = get_authed(token, "/api/exercises/").await?;
    Ok(resp.into_items())
}

pub async fn create_exercise(token: &str, args: &NewExerciseArgs) -> Result<Exercise, ApiError> {
    post_json("/api/exercises/", Some(token), args).await
}

// -- Workout sessions --

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WorkoutSession {
    pub id: i64,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Serialize)]
struct NewSessionArgs<'a> {
    date: &'a str,
}

pub async fn list_sessions(token: &str) -> Result<Vec<WorkoutSession>, ApiError> {
    let resp: ListResponse<WorkoutSession> = get_authed(token, "/api/workout-sessions/").await?;
    Ok(resp.into_items())
}

pub async fn create_session(token: &str, date: &str) -> Result<WorkoutSession, ApiError> {
    post_json("/api/workout-sessions/", Some(token), &NewSessionArgs { date }).await
}

// -- Sets --

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Set {
    pub id: i64,
    #[serde(default)]
    pub workout_session: Option<WorkoutSession>,
    #[serde(default)]
    pub exercise_name: Option<String>,
    #[serde(default)]
    pub set_number: Option<i64>,
    #[serde(default)]
    pub reps: Option<i64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub time_seconds: Option<i64>,
    #[serde(default)]
    pub rpe: Option<i64>,
    #[serde(default)]
    pub rest_seconds: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Server-computed; never written by the client.
    #[serde(default)]
    pub load_kg: Option<f64>,
}

/// Create payload. Blank optional numerics serialize as explicit nulls,
/// never as empty strings or zeroes.
#[derive(Debug, Clone, Serialize)]
pub struct NewSetArgs {
    pub workout_session: i64,
    pub exercise: i64,
    pub set_number: i64,
    pub reps: Option<i64>,
    pub weight_kg: Option<f64>,
    pub distance_km: Option<f64>,
    pub time_seconds: Option<i64>,
    pub rpe: Option<i64>,
    pub rest_seconds: Option<i64>,
    pub notes: String,
}

/// Partial update for the two inline-editable columns. Both keys are always
/// present so a cleared field reaches the server as null rather than being
/// silently omitted.
#[derive(Debug, Clone, Serialize)]
pub struct SetPatchArgs {
    pub reps: Option<i64>,
    pub weight_kg: Option<f64>,
}

pub async fn list_sets(token: &str, session_id: Option<i64>) -> Result<Vec<Set>, ApiError> {
    let path = match session_id {
        Some(id) => format!("/api/sets/?session_id={id}"),
        None => "/api/sets/".to_string(),
    };
    let resp: ListResponse<Set> = get_authed(token, &path).await?;
    Ok(resp.into_items())
}

pub async fn create_set(token: &str, args: &NewSetArgs) -> Result<Set, ApiError> {
    post_json("/api/sets/", Some(token), args).await
}

pub async fn update_set(token: &str, id: i64, args: &SetPatchArgs) -> Result<Set, ApiError> {
    patch_authed(token, &format!("/api/sets/{id}/"), args).await
}

// -- Workout plans --

#[derive(Debug, Clone, Serialize)]
pub struct PlanExerciseArgs {
    pub exercise: i64,
    pub order: i64,
    pub default_sets: Option<i64>,
    pub default_reps: Option<i64>,
    pub default_weight_kg: Option<f64>,
    pub default_distance_km: Option<f64>,
    pub default_time_seconds: Option<i64>,
    pub default_rpe: Option<i64>,
    pub default_rest_seconds: Option<i64>,
    pub default_notes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPlanArgs {
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub exercises_details: Vec<PlanExerciseArgs>,
}

pub async fn create_plan(token: &str, args: &NewPlanArgs) -> Result<serde_json::Value, ApiError> {
    post_json("/api/workout-plans/", Some(token), args).await
}

// -- Daily moods --

#[derive(Debug, Clone, Deserialize)]
pub struct DailyMood {
    pub id: i64,
    pub date: String,
    pub mood_score: i64,
}

#[derive(Serialize)]
struct NewMoodArgs<'a> {
    mood_score: i64,
    date: &'a str,
}

#[derive(Serialize)]
struct MoodPatchArgs {
    mood_score: i64,
}

/// The record for a given date, if one exists.
pub async fn mood_for_date(token: &str, date: &str) -> Result<Option<DailyMood>, ApiError> {
    let resp: ListResponse<DailyMood> =
        get_authed(token, &format!("/api/daily-moods/?date={date}")).await?;
    Ok(resp.into_items().into_iter().next())
}

pub async fn create_mood(token: &str, date: &str, score: i64) -> Result<DailyMood, ApiError> {
    post_json(
        "/api/daily-moods/",
        Some(token),
        &NewMoodArgs { mood_score: score, date },
    )
    .await
}

pub async fn update_mood(token: &str, id: i64, score: i64) -> Result<DailyMood, ApiError> {
    patch_authed(
        token,
        &format!("/api/daily-moods/{id}/"),
        &MoodPatchArgs { mood_score: score },
    )
    .await
}

// -- Daily water logs --

#[derive(Debug, Clone, Deserialize)]
pub struct WaterLog {
    pub id: i64,
    pub date: String,
    pub amount_ml: i64,
}

#[derive(Serialize)]
struct WaterArgs<'a> {
    date: &'a str,
    amount_ml: i64,
}

pub async fn list_water_logs(token: &str) -> Result<Vec<WaterLog>, ApiError> {
    let resp: ListResponse<WaterLog> = get_authed(token, "/api/daily-water-logs/").await?;
    Ok(resp.into_items())
}

pub async fn create_water_log(
    token: &str,
    date: &str,
    amount_ml: i64,
) -> Result<WaterLog, ApiError> {
    post_json(
        "/api/daily-water-logs/",
        Some(token),
        &WaterArgs { date, amount_ml },
    )
    .await
}

pub async fn update_water_log(
    token: &str,
    id: i64,
    date: &str,
    amount_ml: i64,
) -> Result<WaterLog, ApiError> {
    put_authed(
        token,
        &format!("/api/daily-water-logs/{id}/"),
        &WaterArgs { date, amount_ml },
    )
    .await
}

// -- Progress summaries --

/// Weekday totals; only days with data are present in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct DaySummary {
    pub day: String,
    pub total_unique_exercises: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthSummary {
    pub month_year: String,
    pub exercises: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateCountSummary {
    pub date: String,
    pub exercises: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoodSummary {
    pub date: String,
    #[serde(default)]
    pub mood: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaterSummary {
    pub date: String,
    #[serde(default)]
    pub amount_ml: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightSummary {
    pub date: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

pub async fn weekly_summary(token: &str) -> Result<Vec<DaySummary>, ApiError> {
    get_authed(token, "/workouts/workout-summary-by-day/").await
}

pub async fn monthly_summary(token: &str) -> Result<Vec<MonthSummary>, ApiError> {
    get_authed(token, "/workouts/workout-summary-by-month/").await
}

pub async fn last_30_days_summary(token: &str) -> Result<Vec<DateCountSummary>, ApiError> {
    get_authed(token, "/workouts/workout-summary-last-30-days/").await
}

pub async fn mood_summary(token: &str) -> Result<Vec<MoodSummary>, ApiError> {
    get_authed(token, "/progress/daily-mood-summary-last-30-days/").await
}

pub async fn water_summary(token: &str) -> Result<Vec<WaterSummary>, ApiError> {
    get_authed(token, "/progress/daily-water-summary-last-30-days/").await
}

pub async fn weight_summary(token: &str) -> Result<Vec<WeightSummary>, ApiError> {
    get_authed(token, "/progress/weight-summary-last-30-days/").await
}

// -- Weather (header widget, best-effort) --

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    pub main: WeatherMain,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub icon: String,
    pub description: String,
}

/// Current weather for the header. Returns None when no API key was baked in.
pub async fn fetch_weather(city: &str) -> Option<Result<WeatherReport, ApiError>> {
    let key = option_env!("OPENWEATHER_API_KEY")?;
    let url = format!(
        "https://api.openweathermap.org/data/2.5/weather?q={city}&units=metric&appid={key}"
    );
    let resp = match Request::get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => return Some(Err(ApiError::Transport(e.to_string()))),
    };
    Some(read_json(resp).await)
}

// -- Input coercion --

/// Blank means "not provided"; anything else must parse.
pub fn parse_opt_i64(s: &str) -> Option<i64> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        t.parse().ok()
    }
}

pub fn parse_opt_f64(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        t.parse().ok()
    }
}

/// Today's calendar date in the backend's YYYY-MM-DD format.
pub fn today() -> String {
    let iso = js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default();
    iso.split('T').next().unwrap_or_default().to_string()
}

/// Newest session first, then highest set number within a session. ISO dates
/// compare correctly as strings; rows without a session date sort last.
pub fn sort_sets(sets: &mut [Set]) {
    sets.sort_by(|a, b| {
        let date_a = a
            .workout_session
            .as_ref()
            .and_then(|s| s.date.as_deref())
            .unwrap_or("");
        let date_b = b
            .workout_session
            .as_ref()
            .and_then(|s| s.date.as_deref())
            .unwrap_or("");
        date_b
            .cmp(date_a)
            .then_with(|| b.set_number.unwrap_or(0).cmp(&a.set_number.unwrap_or(0)))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(id: i64, date: &str, set_number: i64) -> Set {
        Set {
            id,
            workout_session: Some(WorkoutSession {
                id: 1,
                date: Some(date.to_string()),
            }),
            exercise_name: None,
            set_number: Some(set_number),
            reps: None,
            weight_kg: None,
            distance_km: None,
            time_seconds: None,
            rpe: None,
            rest_seconds: None,
            notes: None,
            load_kg: None,
        }
    }

    #[test]
    fn list_response_accepts_bare_array() {
        let parsed: ListResponse<WorkoutSession> =
            serde_json::from_value(json!([{"id": 1, "date": "2025-05-01"}])).unwrap();
        let items = parsed.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn list_response_accepts_paginated_envelope() {
        let parsed: ListResponse<WorkoutSession> = serde_json::from_value(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [{"id": 1}, {"id": 2}]
        }))
        .unwrap();
        let items = parsed.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, 2);
    }

    #[test]
    fn set_patch_always_carries_both_keys() {
        let patch = SetPatchArgs {
            reps: Some(10),
            weight_kg: None,
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"reps": 10, "weight_kg": null})
        );
    }

    #[test]
    fn new_set_serializes_blank_numerics_as_null() {
        let args = NewSetArgs {
            workout_session: 7,
            exercise: 3,
            set_number: 2,
            reps: parse_opt_i64("8"),
            weight_kg: parse_opt_f64(""),
            distance_km: parse_opt_f64("  "),
            time_seconds: parse_opt_i64(""),
            rpe: parse_opt_i64("9"),
            rest_seconds: parse_opt_i64(""),
            notes: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "workout_session": 7,
                "exercise": 3,
                "set_number": 2,
                "reps": 8,
                "weight_kg": null,
                "distance_km": null,
                "time_seconds": null,
                "rpe": 9,
                "rest_seconds": null,
                "notes": ""
            })
        );
    }

    #[test]
    fn parse_opt_handles_blank_and_numeric_input() {
        assert_eq!(parse_opt_i64(""), None);
        assert_eq!(parse_opt_i64("   "), None);
        assert_eq!(parse_opt_i64("12"), Some(12));
        assert_eq!(parse_opt_i64("abc"), None);
        assert_eq!(parse_opt_f64(""), None);
        assert_eq!(parse_opt_f64("72.5"), Some(72.5));
    }

    #[test]
    fn sets_sort_by_date_then_set_number_descending() {
        let mut sets = vec![
            set(1, "2025-05-01", 1),
            set(2, "2025-05-02", 1),
            set(3, "2025-05-02", 3),
            set(4, "2025-05-01", 2),
        ];
        sort_sets(&mut sets);
        let order: Vec<i64> = sets.iter().map(|s| s.id).collect();
        assert_eq!(order, vec![3, 2, 4, 1]);
    }

    #[test]
    fn server_error_prefers_field_keys_in_order() {
        let err = ApiError::Server {
            status: 400,
            body: json!({
                "weight_kg": ["Must be positive."],
                "reps": ["Too many reps."]
            }),
        };
        assert_eq!(
            err.message(&["reps", "weight_kg"], "Could not save"),
            "Too many reps."
        );
    }

    #[test]
    fn server_error_falls_back_to_non_field_errors_then_detail() {
        let err = ApiError::Server {
            status: 400,
            body: json!({"non_field_errors": ["Duplicate set."]}),
        };
        assert_eq!(err.message(&["reps"], "Could not save"), "Duplicate set.");

        let err = ApiError::Server {
            status: 403,
            body: json!({"detail": "Token expired."}),
        };
        assert_eq!(err.message(&["reps"], "Could not save"), "Token expired.");
    }

    #[test]
    fn server_error_without_known_keys_uses_fallback_and_body() {
        let err = ApiError::Server {
            status: 500,
            body: json!({"oops": true}),
        };
        let msg = err.message(&["reps"], "Could not save");
        assert!(msg.starts_with("Could not save: "));
        assert!(msg.contains("oops"));
    }

    #[test]
    fn nested_field_errors_are_reachable_by_path() {
        let err = ApiError::Server {
            status: 400,
            body: json!({
                "exercises_details": [{"exercise": ["Invalid pk."]}]
            }),
        };
        assert_eq!(
            err.message(
                &["name", "exercises_details.exercise", "exercises_details.order"],
                "Could not create the plan"
            ),
            "Invalid pk."
        );
    }

    #[test]
    fn transport_error_appends_reason_to_fallback() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(
            err.message(&[], "Could not reach the server"),
            "Could not reach the server: connection refused"
        );
    }

    #[test]
    fn missing_session_has_a_fixed_message() {
        assert_eq!(
            ApiError::NoSession.message(&["anything"], "whatever"),
            "Please log in to continue."
        );
    }

    #[test]
    fn profile_decimals_accept_numbers_and_strings() {
        let p: UserProfile = serde_json::from_value(json!({
            "username": "sam",
            "body_weight": "82.5",
            "height": 184
        }))
        .unwrap();
        assert_eq!(p.body_weight.as_deref(), Some("82.5"));
        assert_eq!(p.height.as_deref(), Some("184"));
    }

    #[test]
    fn register_args_omit_blank_optional_fields() {
        let args = RegisterArgs {
            username: "sam".into(),
            email: "sam@example.com".into(),
            password: "pw".into(),
            password2: "pw".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "sam",
                "email": "sam@example.com",
                "password": "pw",
                "password2": "pw"
            })
        );
    }
}
