//! Rocket fairings
//!
//! CORS headers and per-request access logging.

use std::time::Instant;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method};
use rocket::{Data, Request, Response};
use tracing::info;
use vestibule_infrastructure::config::CorsConfig;
use vestibule_infrastructure::constants::{
    CORS_ALLOWED_HEADERS, CORS_ALLOWED_METHODS, CORS_EXPOSED_HEADERS, CORS_MAX_AGE_SECS,
};

/// CORS Fairing for Rocket
///
/// Echoes an allowed `Origin` back with credentials enabled. A configured
/// `*` allows any origin. Preflight responses also advertise the allowed
/// methods, headers and cache lifetime.
pub struct Cors {
    allowed_origins: Vec<String>,
}

impl Cors {
    /// Create from the `server.cors` configuration section
    pub fn new(config: &CorsConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
        }
    }

    fn allows(&self, origin: &str) -> bool {
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == "*" || allowed == origin)
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let Some(origin) = request.headers().get_one("Origin") else {
            return;
        };
        if !self.allows(origin) {
            return;
        }

        response.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        response.set_header(Header::new("Access-Control-Expose-Headers", CORS_EXPOSED_HEADERS));
        response.adjoin_header(Header::new("Vary", "Origin"));

        if request.method() == Method::Options {
            response.set_header(Header::new("Access-Control-Allow-Methods", CORS_ALLOWED_METHODS));
            response.set_header(Header::new("Access-Control-Allow-Headers", CORS_ALLOWED_HEADERS));
            response.set_header(Header::new(
                "Access-Control-Max-Age",
                CORS_MAX_AGE_SECS.to_string(),
            ));
        }
    }
}

/// Request start time, kept in the request-local cache
struct RequestStart(Instant);

/// Access log fairing
///
/// Records method, path, status and latency. Headers and bodies are never
/// logged, so credentials and tokens stay out of the log.
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut Data<'_>) {
        request.local_cache(|| RequestStart(Instant::now()));
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let started = request.local_cache(|| RequestStart(Instant::now()));
        info!(
            method = %request.method(),
            path = %request.uri().path(),
            status = response.status().code,
            elapsed_ms = u64::try_from(started.0.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Request completed"
        );
    }
}
