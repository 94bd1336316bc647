//! HTTP error responses
//!
//! Every failure leaves the server as `{"error": "<message>"}`. Internal
//! detail goes to the log, never to the client.

use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;
use tracing::error;
use vestibule_domain::error::Error;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Client-facing message
    pub error: String,
}

impl ErrorBody {
    /// Build a `(status, body)` responder
    pub fn respond(status: Status, message: impl Into<String>) -> (Status, Json<Self>) {
        (
            status,
            Json(Self {
                error: message.into(),
            }),
        )
    }
}

/// A domain error mapped to an HTTP status and safe message
#[derive(Debug)]
pub struct ApiError {
    status: Status,
    message: String,
}

impl ApiError {
    /// Create an error with an explicit status
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 for a body that could not be parsed
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(Status::BadRequest, message)
    }

    /// HTTP status of this error
    pub fn status(&self) -> Status {
        self.status
    }

    /// Client-facing message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput { message } => Self::new(Status::BadRequest, message),
            Error::InvalidCredentials => Self::new(Status::Unauthorized, err.to_string()),
            Error::Token(_) => Self::new(Status::Unauthorized, "Unauthorized"),
            Error::DuplicateUsername { .. } => Self::new(Status::Conflict, "Username already exists"),
            other => {
                error!(error = %other, "Request failed");
                Self::new(Status::InternalServerError, "Internal server error")
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        ErrorBody::respond(self.status, self.message).respond_to(request)
    }
}
