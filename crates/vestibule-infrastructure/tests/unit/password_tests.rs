//! Password hashing tests

use vestibule_domain::constants::MAX_PASSWORD_BYTES;
use vestibule_domain::error::Error;
use vestibule_domain::ports::PasswordHashing;
use vestibule_domain::value_objects::HashedSecret;
use vestibule_infrastructure::config::PasswordAlgorithm;
use vestibule_infrastructure::crypto::{HashScheme, PasswordService};

use crate::support::fast_hasher;

#[test]
fn test_bcrypt_hash_and_verify() {
    let hasher = fast_hasher();
    let hash = hasher.hash("correct horse").unwrap();

    assert_eq!(HashScheme::detect(hash.as_str()), Some(HashScheme::Bcrypt));
    assert!(hasher.verify("correct horse", &hash).unwrap());
    assert!(!hasher.verify("wrong horse", &hash).unwrap());
}

#[test]
fn test_hash_is_salted() {
    let hasher = fast_hasher();
    let first = hasher.hash("same input").unwrap();
    let second = hasher.hash("same input").unwrap();

    assert_ne!(first, second);
    assert!(hasher.verify("same input", &first).unwrap());
    assert!(hasher.verify("same input", &second).unwrap());
}

#[test]
fn test_bcrypt_embeds_configured_cost() {
    let hash = fast_hasher().hash("pw").unwrap();
    assert!(hash.as_str().starts_with("$2b$04$"));
}

#[test]
fn test_argon2_hash_and_verify() {
    let hasher = PasswordService::new(PasswordAlgorithm::Argon2, 10).unwrap();
    let hash = hasher.hash("argon password").unwrap();

    assert!(hash.as_str().starts_with("$argon2id$"));
    assert!(hasher.verify("argon password", &hash).unwrap());
    assert!(!hasher.verify("other password", &hash).unwrap());
}

#[test]
fn test_verify_detects_algorithm_from_prefix() {
    let bcrypt = fast_hasher();
    let argon2 = PasswordService::new(PasswordAlgorithm::Argon2, 10).unwrap();

    let bcrypt_hash = bcrypt.hash("shared").unwrap();
    let argon2_hash = argon2.hash("shared").unwrap();

    assert!(argon2.verify("shared", &bcrypt_hash).unwrap());
    assert!(bcrypt.verify("shared", &argon2_hash).unwrap());
}

#[test]
fn test_unknown_prefix_is_malformed() {
    let hasher = fast_hasher();
    for bogus in ["", "plaintext", "$1$md5crypt$abc"] {
        let result = hasher.verify("anything", &HashedSecret::new(bogus));
        assert!(
            matches!(result, Err(Error::MalformedHash { .. })),
            "{bogus:?} should be malformed"
        );
    }
}

#[test]
fn test_truncated_bcrypt_hash_is_malformed() {
    let result = fast_hasher().verify("anything", &HashedSecret::new("$2b$04$tooshort"));
    assert!(matches!(result, Err(Error::MalformedHash { .. })));
}

#[test]
fn test_bcrypt_accepts_longest_allowed_password() {
    let hasher = fast_hasher();
    let longest = "x".repeat(MAX_PASSWORD_BYTES);
    let hash = hasher.hash(&longest).unwrap();

    assert!(hasher.verify(&longest, &hash).unwrap());
    assert!(!hasher.verify(&"x".repeat(MAX_PASSWORD_BYTES - 1), &hash).unwrap());
}

#[test]
fn test_bcrypt_refuses_to_hash_over_long_password() {
    let result = fast_hasher().hash(&"x".repeat(100));
    assert!(matches!(result, Err(Error::InvalidInput { .. })));
}

#[test]
fn test_bcrypt_does_not_match_on_shared_prefix() {
    let hasher = fast_hasher();
    let stored = "x".repeat(MAX_PASSWORD_BYTES);
    let hash = hasher.hash(&stored).unwrap();

    // Same leading bytes, longer input: must not verify
    for candidate in [stored.clone() + "x", "x".repeat(80), "x".repeat(100)] {
        assert!(!hasher.verify(&candidate, &hash).unwrap(), "{} bytes", candidate.len());
    }
}
