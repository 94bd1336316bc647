//! Rocket application assembly

use rocket::config::LogLevel;
use rocket::data::{ByteUnit, Limits};
use rocket::http::Status;
use rocket::{Build, Rocket, options, routes};
use vestibule_infrastructure::config::ServerConfig;
use vestibule_infrastructure::constants::MAX_REQUEST_BODY_SIZE;

use crate::catchers;
use crate::fairings::{Cors, RequestLogger};
use crate::handlers::{auth, health};
use crate::state::AppState;

/// Answers CORS preflight for every path; the CORS fairing adds the headers
#[options("/<_..>")]
fn preflight() -> Status {
    Status::NoContent
}

/// Build the Rocket application
///
/// Bind address and port come from `server`; Rocket's own logger is
/// silenced in favour of the tracing-based request logger.
pub fn build_rocket(state: AppState, server: &ServerConfig) -> Rocket<Build> {
    let body_limit = ByteUnit::from(MAX_REQUEST_BODY_SIZE);
    let figment = rocket::Config::figment()
        .merge(("address", server.host.clone()))
        .merge(("port", server.port))
        .merge(("log_level", LogLevel::Off))
        .merge((
            "limits",
            Limits::default().limit("json", body_limit).limit("data-form", body_limit),
        ));

    let mut rocket = rocket::custom(figment)
        .manage(state)
        .attach(RequestLogger)
        .mount("/", routes![health::health])
        .mount("/auth", routes![auth::register, auth::login, auth::me])
        .register("/", catchers::all());

    if server.cors.enabled {
        rocket = rocket.attach(Cors::new(&server.cors)).mount("/", routes![preflight]);
    }

    rocket
}
