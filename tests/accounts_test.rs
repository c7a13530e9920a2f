// ABOUTME: Integration tests for account registration and login
// ABOUTME: Verifies case-insensitive duplicate detection, password rules and credential errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use athleton::errors::ErrorCode;
use athleton::services::{LoginRequest, RegisterRequest};

fn register_request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        display_name: None,
    }
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_normalizes_email() {
    let services = common::create_test_services().await.unwrap();
    let ctx = common::register_user(&services, "  Ana@Example.COM ")
        .await
        .unwrap();
    assert_eq!(ctx.email, "ana@example.com");
    assert_eq!(ctx.greeting_name(), "Test Athlete");
}

#[tokio::test]
async fn test_register_rejects_case_insensitive_duplicate() {
    let services = common::create_test_services().await.unwrap();
    common::register_user(&services, "ana@example.com")
        .await
        .unwrap();

    let error = services
        .accounts
        .register(register_request("ANA@example.com", "another-pass"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(error.message, "An account with that email already exists");
}

#[tokio::test]
async fn test_register_validates_input() {
    let services = common::create_test_services().await.unwrap();

    let blank = services
        .accounts
        .register(register_request("   ", "s3cretpass"))
        .await
        .unwrap_err();
    assert_eq!(blank.code, ErrorCode::InvalidInput);

    let malformed = services
        .accounts
        .register(register_request("not-an-email", "s3cretpass"))
        .await
        .unwrap_err();
    assert_eq!(malformed.code, ErrorCode::InvalidInput);

    let short = services
        .accounts
        .register(register_request("ana@example.com", "short"))
        .await
        .unwrap_err();
    assert_eq!(short.code, ErrorCode::InvalidInput);
    assert!(short.message.contains('8'));
}

#[tokio::test]
async fn test_register_rejects_password_past_bcrypt_limit() {
    let services = common::create_test_services().await.unwrap();

    // 73 bytes: bcrypt would silently drop the last one
    let error = services
        .accounts
        .register(register_request("ana@example.com", &"x".repeat(73)))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("72"));

    // Multi-byte characters count by bytes: 37 x 2 bytes = 74
    let error = services
        .accounts
        .register(register_request("ana@example.com", &"ñ".repeat(37)))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    assert!(services
        .accounts
        .login(LoginRequest {
            email: "ana@example.com".to_owned(),
            password: "x".repeat(73),
        })
        .await
        .is_err());
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_returns_user_context() {
    let services = common::create_test_services().await.unwrap();
    let registered = common::register_user(&services, "ana@example.com")
        .await
        .unwrap();

    let ctx = services
        .accounts
        .login(LoginRequest {
            email: "ANA@example.com".to_owned(),
            password: "s3cretpass".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(ctx, registered);
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let services = common::create_test_services().await.unwrap();
    common::register_user(&services, "ana@example.com")
        .await
        .unwrap();

    let wrong_password = services
        .accounts
        .login(LoginRequest {
            email: "ana@example.com".to_owned(),
            password: "wrong-password".to_owned(),
        })
        .await
        .unwrap_err();
    let unknown_email = services
        .accounts
        .login(LoginRequest {
            email: "bob@example.com".to_owned(),
            password: "s3cretpass".to_owned(),
        })
        .await
        .unwrap_err();

    for error in [wrong_password, unknown_email] {
        assert_eq!(error.code, ErrorCode::AuthInvalid);
        assert_eq!(error.message, "Invalid email or password");
    }
}
