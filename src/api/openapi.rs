use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, LoginResponse, LoginUserInfo, RegisterUserResponse,
    RegisteredUser, UserProfileResponse,
};

// Referral
use crate::referral::adapter::incoming::web::routes::{
    CreateReferralCodeRequest, RedeemReferralCodeRequest, ReferralCodeResponse, ReferralResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Referral Service API",
        version = "1.0.0",
        description = "User accounts, referral codes and the referral ledger",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,

        // Referral code endpoints
        crate::referral::adapter::incoming::web::routes::get_referral_code_handler,
        crate::referral::adapter::incoming::web::routes::create_referral_code_handler,
        crate::referral::adapter::incoming::web::routes::delete_referral_code_handler,
        crate::referral::adapter::incoming::web::routes::get_referral_code_by_email_handler,
        crate::referral::adapter::incoming::web::routes::get_referral_code_by_id_handler,
        crate::referral::adapter::incoming::web::routes::delete_referral_code_by_id_handler,

        // Referral endpoints
        crate::referral::adapter::incoming::web::routes::redeem_referral_code_handler,
        crate::referral::adapter::incoming::web::routes::get_referrals_handler,
        crate::referral::adapter::incoming::web::routes::get_referral_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterUserResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            CreateUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            UserProfileResponse,

            // Referral DTOs
            ReferralCodeResponse,
            ReferralResponse,
            CreateReferralCodeRequest,
            RedeemReferralCodeRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User profile endpoints"),
        (name = "referral-codes", description = "Referral code registry endpoints"),
        (name = "referrals", description = "Referral ledger endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
