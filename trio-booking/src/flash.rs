//! Flash-message responses for booking mutations
//!
//! Every create, update and delete answers with
//! `{flash: {category, message}, redirect}`. Success is a 200 carrying the
//! page to go to next; failure carries the error's status and no redirect.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use trio_core::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashBody {
    pub flash: Flash,
    pub redirect: Option<String>,
}

/// A flash document plus its HTTP status
#[derive(Debug)]
pub struct FlashResponse {
    status: StatusCode,
    body: FlashBody,
}

impl FlashResponse {
    pub fn success(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: FlashBody {
                flash: Flash {
                    category: FlashCategory::Success,
                    message: message.into(),
                },
                redirect: Some(redirect.into()),
            },
        }
    }

    /// Error flash with the status `err` maps to. The error itself is logged.
    pub fn failure(err: &ApiError, message: impl Into<String>) -> Self {
        err.log();
        Self {
            status: err.status(),
            body: FlashBody {
                flash: Flash {
                    category: FlashCategory::Error,
                    message: message.into(),
                },
                redirect: None,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &FlashBody {
        &self.body
    }
}

impl IntoResponse for FlashResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
