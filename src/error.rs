//! Error types and handling for the `Routecast` application

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;
use thiserror::Error;

/// Which end of the route a lookup was performed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePoint {
    Start,
    End,
}

impl fmt::Display for RoutePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutePoint::Start => write!(f, "start"),
            RoutePoint::End => write!(f, "end"),
        }
    }
}

/// Main error type for the `Routecast` application
#[derive(Error, Debug)]
pub enum RoutecastError {
    /// Client submitted an incomplete coordinate form
    #[error("All coordinates must be provided.")]
    MissingCoordinates,

    /// Provider could not map the coordinates to a location key
    #[error("Could not find a location for the {point} point.")]
    LocationNotFound { point: RoutePoint },

    /// Provider returned no usable forecast for the location
    #[error("Forecast data is unavailable for the {point} point.")]
    ForecastUnavailable { point: RoutePoint },

    /// Network-level failure talking to the provider
    #[error("Weather provider request failed: {source}")]
    Upstream {
        #[from]
        source: reqwest::Error,
    },

    /// Provider response did not have the expected shape
    #[error("Weather provider returned an unusable payload: {message}")]
    InvalidPayload { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl RoutecastError {
    /// Create a new invalid-payload error
    pub fn invalid_payload<S: Into<String>>(message: S) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status this error renders as.
    ///
    /// Client input and upstream-data errors keep the original 400 contract;
    /// transport and parse failures map to the gateway statuses instead.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            RoutecastError::MissingCoordinates
            | RoutecastError::LocationNotFound { .. }
            | RoutecastError::ForecastUnavailable { .. } => StatusCode::BAD_REQUEST,
            RoutecastError::Upstream { source } if source.is_timeout() => {
                StatusCode::GATEWAY_TIMEOUT
            }
            RoutecastError::Upstream { .. } | RoutecastError::InvalidPayload { .. } => {
                StatusCode::BAD_GATEWAY
            }
            RoutecastError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RoutecastError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let payload_err = RoutecastError::invalid_payload("missing Key field");
        assert!(matches!(payload_err, RoutecastError::InvalidPayload { .. }));

        let config_err = RoutecastError::config("missing API key");
        assert!(matches!(config_err, RoutecastError::Config { .. }));
    }

    #[test]
    fn test_client_errors_are_bad_request() {
        assert_eq!(
            RoutecastError::MissingCoordinates.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RoutecastError::LocationNotFound {
                point: RoutePoint::Start
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RoutecastError::ForecastUnavailable {
                point: RoutePoint::End
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_payload_errors_are_bad_gateway() {
        let err = RoutecastError::invalid_payload("truncated body");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_messages_name_the_route_point() {
        let start = RoutecastError::LocationNotFound {
            point: RoutePoint::Start,
        };
        assert!(start.to_string().contains("start"));

        let end = RoutecastError::ForecastUnavailable {
            point: RoutePoint::End,
        };
        assert!(end.to_string().contains("end"));
    }
}
