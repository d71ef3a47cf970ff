//! HTTP API for the forecast service
//!
//! `GET /` serves the coordinate form; `POST /get-forecast` runs the
//! resolve-fetch-classify pipeline for both route points and renders the
//! combined verdict fragment.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use futures::try_join;
use serde::Deserialize;

use crate::accuweather::AccuWeatherClient;
use crate::assessment::{self, Verdict};
use crate::error::{RoutePoint, RoutecastError};

/// Shared handler state
pub type AppState = Arc<AccuWeatherClient>;

const HOME_PAGE: &str = include_str!("../assets/home.html");

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/get-forecast", post(get_forecast))
        .with_state(state)
}

async fn home_page() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// Coordinate form fields, as submitted
#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub latitude_start: String,
    #[serde(default)]
    pub longitude_start: String,
    #[serde(default)]
    pub latitude_end: String,
    #[serde(default)]
    pub longitude_end: String,
}

impl ForecastRequest {
    fn is_complete(&self) -> bool {
        [
            &self.latitude_start,
            &self.longitude_start,
            &self.latitude_end,
            &self.longitude_end,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }
}

async fn get_forecast(
    State(client): State<AppState>,
    Form(request): Form<ForecastRequest>,
) -> Result<Html<String>, RoutecastError> {
    if !request.is_complete() {
        return Err(RoutecastError::MissingCoordinates);
    }

    // The two chains are independent; join both before classifying.
    let (start, end) = try_join!(
        client.point_readings(
            &request.latitude_start,
            &request.longitude_start,
            RoutePoint::Start,
        ),
        client.point_readings(
            &request.latitude_end,
            &request.longitude_end,
            RoutePoint::End,
        ),
    )?;

    let start_verdict = assessment::assess_conditions(&start);
    let end_verdict = assessment::assess_conditions(&end);

    Ok(Html(render_verdicts(start_verdict, end_verdict)))
}

fn render_verdicts(start: Verdict, end: Verdict) -> String {
    format!(
        "<h2>Weather at the start point:</h2>\n\
         <p>{start}</p>\n\
         <h2>Weather at the end point:</h2>\n\
         <p>{end}</p>\n\
         <a href=\"/\">Back</a>"
    )
}
