//! Authentication gate behaviour on a protected route

use chrono::{TimeDelta, Utc};
use rocket::http::Status;
use std::sync::Arc;
use vestibule_domain::entities::Identity;
use vestibule_domain::ports::TokenIssuer;
use vestibule_domain::value_objects::{HashedSecret, SigningSecret};
use vestibule_infrastructure::crypto::JwtTokenService;

use crate::helpers::{FrozenClock, client, get_me, signing_secret, token_for};

fn alice() -> Identity {
    Identity::register("alice", "a@x.io", HashedSecret::new("$2b$04$x"), Utc::now())
}

#[rocket::async_test]
async fn test_missing_header() {
    let client = client().await;
    let (status, body) = get_me(&client, None).await;
    assert_eq!(status, Status::Unauthorized);
    assert_eq!(body["error"], "Missing Authorization header");
}

#[rocket::async_test]
async fn test_basic_scheme_is_bad_format() {
    let client = client().await;
    let (status, body) = get_me(&client, Some("Basic YWxpY2U6czNjcmV0")).await;
    assert_eq!(status, Status::Unauthorized);
    assert_eq!(body["error"], "Invalid Authorization header format");
}

#[rocket::async_test]
async fn test_scheme_prefix_is_exact() {
    let client = client().await;
    let token = token_for(&client, "alice", "pw").await;

    for header in [format!("bearer {token}"), format!("Bearer  {token}"), token.clone()] {
        let (status, _) = get_me(&client, Some(&header)).await;
        assert_eq!(status, Status::Unauthorized, "{header:?}");
    }
}

#[rocket::async_test]
async fn test_empty_bearer_token_is_unauthorized() {
    let client = client().await;
    let (status, body) = get_me(&client, Some("Bearer ")).await;
    assert_eq!(status, Status::Unauthorized);
    assert_eq!(body["error"], "Unauthorized");
}

#[rocket::async_test]
async fn test_foreign_secret_is_unauthorized() {
    let client = client().await;
    let foreign = JwtTokenService::new(
        &SigningSecret::new("some-other-deployment-secret-0123456789").unwrap(),
        Arc::new(FrozenClock(Utc::now())),
    );
    let token = foreign.issue(&alice(), TimeDelta::hours(1)).unwrap();

    let (status, body) = get_me(&client, Some(&format!("Bearer {}", token.as_str()))).await;
    assert_eq!(status, Status::Unauthorized);
    assert_eq!(body["error"], "Unauthorized");
}

#[rocket::async_test]
async fn test_expired_token_is_unauthorized() {
    let client = client().await;
    let past = JwtTokenService::new(
        &signing_secret(),
        Arc::new(FrozenClock(Utc::now() - TimeDelta::hours(2))),
    );
    let token = past.issue(&alice(), TimeDelta::hours(1)).unwrap();

    let (status, body) = get_me(&client, Some(&format!("Bearer {}", token.as_str()))).await;
    assert_eq!(status, Status::Unauthorized);
    assert_eq!(body["error"], "Unauthorized");
}

#[rocket::async_test]
async fn test_token_from_the_future_is_unauthorized() {
    let client = client().await;
    let future = JwtTokenService::new(
        &signing_secret(),
        Arc::new(FrozenClock(Utc::now() + TimeDelta::hours(1))),
    );
    let token = future.issue(&alice(), TimeDelta::hours(1)).unwrap();

    let (status, _) = get_me(&client, Some(&format!("Bearer {}", token.as_str()))).await;
    assert_eq!(status, Status::Unauthorized);
}

#[rocket::async_test]
async fn test_valid_token_for_unregistered_subject_still_passes_gate() {
    // The gate trusts the signature; it does not consult the store
    let client = client().await;
    let issuer = JwtTokenService::new(&signing_secret(), Arc::new(FrozenClock(Utc::now())));
    let identity = alice();
    let token = issuer.issue(&identity, TimeDelta::hours(1)).unwrap();

    let (status, body) = get_me(&client, Some(&format!("Bearer {}", token.as_str()))).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(body["uuid"], identity.uuid.to_string());
}
