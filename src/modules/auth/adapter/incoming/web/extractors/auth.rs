use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::{auth::application::helpers::ResolveUserIdError, shared::api::ApiResponse};
use crate::{auth::application::ports::outgoing::token_provider::TokenProvider, AppState};

/// Caller identity taken from a valid `Authorization: Bearer <jwt>` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    tracing::error!("TokenProvider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
            })),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolves an email to an active user's id, or the error response to return.
pub async fn resolve_user_id_by_email_or_response(
    data: &web::Data<AppState>,
    email: &str,
) -> Result<Uuid, HttpResponse> {
    match data.user_identity_resolver.by_email(email).await {
        Ok(user_id) => Ok(user_id.value()),

        Err(ResolveUserIdError::NotFound) => {
            Err(ApiResponse::not_found("USER_NOT_FOUND", "User not found"))
        }

        Err(ResolveUserIdError::RepositoryError(msg)) => {
            tracing::error!("Repository error resolving email {}: {}", email, msg);
            Err(ApiResponse::internal_error())
        }
    }
}
