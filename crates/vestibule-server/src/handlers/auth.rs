//! Authentication routes
//!
//! Request bodies are never logged. Parse failures are answered here
//! rather than by Rocket so every malformed body gets the same 400.

use chrono::{DateTime, Utc};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get, post};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use vestibule_application::Registration;
use vestibule_domain::value_objects::SignedToken;

use crate::auth::Authenticated;
use crate::error::ApiError;
use crate::state::AppState;

type JsonBody<'r, T> = Result<Json<T>, rocket::serde::json::Error<'r>>;

/// `POST /auth/register` body
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` body
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub uuid: Uuid,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: SignedToken,
    pub message: &'static str,
}

/// The authenticated caller, as carried by their token
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub uuid: Uuid,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

fn parsed<T>(body: JsonBody<'_, T>) -> Result<T, ApiError> {
    body.map(Json::into_inner).map_err(|e| {
        debug!(error = %e, "Rejected request body");
        ApiError::bad_request("Invalid request body")
    })
}

/// Create an identity
#[post("/register", data = "<body>")]
pub async fn register(
    state: &State<AppState>,
    body: JsonBody<'_, RegisterRequest>,
) -> Result<(Status, Json<RegisterResponse>), ApiError> {
    let RegisterRequest {
        username,
        email,
        password,
    } = parsed(body)?;

    let identity = state
        .accounts
        .register(Registration {
            username,
            email,
            password,
        })
        .await?;

    Ok((
        Status::Created,
        Json(RegisterResponse {
            message: "User created successfully",
            uuid: identity.uuid,
        }),
    ))
}

/// Exchange credentials for a session token
#[post("/login", data = "<body>")]
pub async fn login(
    state: &State<AppState>,
    body: JsonBody<'_, LoginRequest>,
) -> Result<(Status, Json<LoginResponse>), ApiError> {
    let LoginRequest { username, password } = parsed(body)?;
    let session = state.accounts.login(username, password).await?;

    Ok((
        Status::Created,
        Json(LoginResponse {
            token: session.token,
            message: "Login successful",
        }),
    ))
}

/// Describe the caller from their verified claims
#[get("/me")]
pub fn me(auth: Authenticated) -> Json<MeResponse> {
    let claims = auth.into_claims();
    Json(MeResponse {
        uuid: claims.sub,
        issued_at: claims.issued_at(),
        expires_at: claims.expires_at(),
        username: claims.username,
    })
}
