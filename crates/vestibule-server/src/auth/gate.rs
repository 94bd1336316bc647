//! Bearer token authentication gate
//!
//! Each request moves through `Unauthenticated -> HeaderChecked ->
//! TokenVerified -> Authorized`, or is rejected at the first failing step:
//!
//! 1. No `Authorization` header: [`GateRejection::MissingHeader`]
//! 2. Header without the exact `Bearer ` prefix: [`GateRejection::BadScheme`]
//! 3. Any token verifier failure: [`GateRejection::Unauthorized`]
//!
//! The outcome is stored in Rocket's per-request cache. Handlers read the
//! claims through the guard value; the 401 catcher reads the rejection to
//! pick its message. Nothing survives past the request.
//!
//! ```rust,ignore
//! #[get("/me")]
//! fn me(auth: Authenticated) -> String {
//!     auth.claims().username.clone()
//! }
//! ```

use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use tracing::{debug, error};
use vestibule_domain::constants::{AUTHORIZATION_HEADER, BEARER_PREFIX};
use vestibule_domain::value_objects::SessionClaims;

use crate::state::AppState;

/// Why the gate refused a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    /// No `Authorization` header
    MissingHeader,
    /// Header present but not `Bearer <token>`
    BadScheme,
    /// Token failed verification; the reason is deliberately not exposed
    Unauthorized,
}

impl GateRejection {
    /// Client-facing message
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingHeader => "Missing Authorization header",
            Self::BadScheme => "Invalid Authorization header format",
            Self::Unauthorized => "Unauthorized",
        }
    }
}

/// Verified claims of the current request
///
/// Obtaining this value is proof the bearer token passed verification.
#[derive(Debug, Clone)]
pub struct Authenticated(SessionClaims);

impl Authenticated {
    /// Claims carried by the verified token
    pub fn claims(&self) -> &SessionClaims {
        &self.0
    }

    /// Consume into the claims
    pub fn into_claims(self) -> SessionClaims {
        self.0
    }
}

/// Per-request cache slot for the gate outcome
struct GateOutcome(Option<Result<SessionClaims, GateRejection>>);

/// The rejection recorded for this request, if the gate ran and refused it
pub fn cached_rejection(request: &Request<'_>) -> Option<GateRejection> {
    match &request.local_cache(|| GateOutcome(None)).0 {
        Some(Err(rejection)) => Some(*rejection),
        _ => None,
    }
}

fn authenticate(request: &Request<'_>) -> Result<SessionClaims, GateRejection> {
    let header = request
        .headers()
        .get_one(AUTHORIZATION_HEADER)
        .ok_or(GateRejection::MissingHeader)?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(GateRejection::BadScheme)?;

    let Some(state) = request.rocket().state::<AppState>() else {
        error!("Authentication gate reached without managed AppState");
        return Err(GateRejection::Unauthorized);
    };

    state.verifier.verify(token).map_err(|kind| {
        debug!(reason = %kind, "Bearer token rejected");
        GateRejection::Unauthorized
    })
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = GateRejection;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let cached = request.local_cache(|| GateOutcome(Some(authenticate(request))));

        match &cached.0 {
            Some(Ok(claims)) => Outcome::Success(Self(claims.clone())),
            Some(Err(rejection)) => Outcome::Error((Status::Unauthorized, *rejection)),
            // The catcher touched the cache first; the gate never ran
            None => Outcome::Error((Status::Unauthorized, GateRejection::Unauthorized)),
        }
    }
}
