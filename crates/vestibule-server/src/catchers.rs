//! JSON error catchers
//!
//! Rocket routes failed guards and unmatched requests here. The 401 catcher
//! reports the authentication gate's rejection when there is one.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, catch, catchers};

use crate::auth::gate::cached_rejection;
use crate::error::ErrorBody;

#[catch(400)]
fn bad_request() -> (Status, Json<ErrorBody>) {
    ErrorBody::respond(Status::BadRequest, "Invalid request body")
}

#[catch(401)]
fn unauthorized(request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    let message = cached_rejection(request).map_or("Unauthorized", |r| r.message());
    ErrorBody::respond(Status::Unauthorized, message)
}

#[catch(404)]
fn not_found() -> (Status, Json<ErrorBody>) {
    ErrorBody::respond(Status::NotFound, "Not found")
}

#[catch(413)]
fn payload_too_large() -> (Status, Json<ErrorBody>) {
    ErrorBody::respond(Status::PayloadTooLarge, "Request body too large")
}

#[catch(422)]
fn unprocessable() -> (Status, Json<ErrorBody>) {
    ErrorBody::respond(Status::UnprocessableEntity, "Invalid request body")
}

#[catch(500)]
fn internal_error() -> (Status, Json<ErrorBody>) {
    ErrorBody::respond(Status::InternalServerError, "Internal server error")
}

#[catch(default)]
fn fallback(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    ErrorBody::respond(status, status.reason_lossy())
}

/// All catchers, for mounting at `/`
pub fn all() -> Vec<Catcher> {
    catchers![
        bad_request,
        unauthorized,
        not_found,
        payload_too_large,
        unprocessable,
        internal_error,
        fallback
    ]
}
