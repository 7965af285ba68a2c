use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement, TransactionTrait};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenClaims;

#[derive(Serialize)]
pub struct RandomAccountResponse {
    email: String,
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_referrals: u64,
    deleted_referral_codes: u64,
    deleted_users: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Debug)]
enum TokenKind {
    Valid,
    Expired,
    NotYetValid,
    InvalidSignature,
    Malformed,
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(TokenKind::Valid),
            "Expired" => Ok(TokenKind::Expired),
            "NotYetValid" => Ok(TokenKind::NotYetValid),
            "InvalidSignature" => Ok(TokenKind::InvalidSignature),
            "Malformed" => Ok(TokenKind::Malformed),
            _ => Err(format!("Unknown token_kind: {}", s)),
        }
    }
}

fn random_hex(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| format!("{:x}", rng.gen_range(0..16u8)))
        .collect()
}

/// Generate random test credentials that pass registration validation
/// GET /test/account/random
pub async fn generate_random_account() -> Result<HttpResponse> {
    let ts = Utc::now().timestamp();

    let email = format!("user{}.{}@example.test", ts, random_hex(4));
    let username = format!("user_{}_{}", ts, random_hex(4));
    let password = format!("Pw{}{}", ts, random_hex(4));

    Ok(HttpResponse::Ok().json(RandomAccountResponse {
        email,
        username,
        password,
    }))
}

/// Remove a test user together with their referral code and ledger edges
/// DELETE /test/cleanup/all/{user_id}
pub async fn cleanup_test_user(
    user_id: web::Path<Uuid>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let user_id = user_id.into_inner();

    let txn = db.as_ref().begin().await.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Transaction error: {}", e))
    })?;

    let delete = |sql: &str| {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, vec![user_id.into()])
    };

    let referrals = txn
        .execute(delete(
            "DELETE FROM referrals WHERE referrer_id = $1 OR referred_id = $1",
        ))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete referrals: {}", e))
        })?;

    let codes = txn
        .execute(delete("DELETE FROM referral_codes WHERE user_id = $1"))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!(
                "Failed to delete referral codes: {}",
                e
            ))
        })?;

    let users = txn
        .execute(delete("DELETE FROM users WHERE id = $1"))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete user: {}", e))
        })?;

    if users.rows_affected() == 0 {
        txn.rollback().await.ok();
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "User not found"
        })));
    }

    txn.commit()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Commit failed: {}", e)))?;

    Ok(HttpResponse::Ok().json(CleanupResponse {
        deleted_referrals: referrals.rows_affected(),
        deleted_referral_codes: codes.rows_affected(),
        deleted_users: users.rows_affected(),
    }))
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        tracing::error!("Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Access tokens in various states (Valid, Expired, NotYetValid, InvalidSignature, Malformed)
/// GET /test/token/{token_kind}/{user_id}
pub async fn generate_test_token(path: web::Path<(String, Uuid)>) -> Result<HttpResponse> {
    let (token_kind_str, user_id) = path.into_inner();

    let token_kind: TokenKind = token_kind_str
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    tracing::debug!(?token_kind, %user_id, "Generating test token");

    // Must match the running server's config
    let valid_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "test-secret".to_string());
    let issuer =
        std::env::var("JWT_ISSUER").unwrap_or_else(|_| "referral-service".to_string());

    let now = Utc::now().timestamp();
    let claims = |iat: i64, nbf: i64, exp: i64| TokenClaims {
        sub: user_id,
        exp,
        iat,
        nbf,
        iss: issuer.clone(),
        token_type: "access".to_string(),
    };

    let (claims, secret) = match token_kind {
        TokenKind::Valid => (claims(now, now - 32, now + 3600), valid_secret.as_str()),
        TokenKind::Expired => (claims(now - 7200, now - 7200, now - 60), valid_secret.as_str()),
        // Beyond the 30s leeway
        TokenKind::NotYetValid => (claims(now, now + 300, now + 3600), valid_secret.as_str()),
        TokenKind::InvalidSignature => (claims(now, now, now + 3600), "wrong-secret"),
        TokenKind::Malformed => {
            return Ok(HttpResponse::Ok().json(TokenResponse {
                token: format!("malformed.{}.token", Uuid::new_v4()),
            }));
        }
    };

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/account/random", web::get().to(generate_random_account))
            .route(
                "/cleanup/all/{user_id}",
                web::delete().to(cleanup_test_user),
            )
            .route(
                "/token/{token_kind}/{user_id}",
                web::get().to(generate_test_token),
            ),
    );
}
