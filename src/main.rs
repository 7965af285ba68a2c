pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::{auth, referral};

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::auth::application::services::FetchUserProfileService;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    fetch_profile::FetchUserProfileUseCase,
    login_user::{ILoginUserUseCase, LoginUserUseCase},
};
use crate::referral::adapter::outgoing::{
    ReferralCodeQueryPostgres, ReferralCodeRepositoryPostgres, ReferralQueryPostgres,
    ReferralRepositoryPostgres,
};
use crate::referral::application::domain::code_generator::{
    RandomCodeGenerator, ReferralCodeGenerator,
};
use crate::referral::application::domain::policies::{
    CodeLookupPolicy, ReferralVisibility, SelfReferralPolicy,
};
use crate::referral::application::referral_use_cases::ReferralUseCases;
use crate::referral::application::services::{
    CreateReferralCodeService, DeleteReferralCodeByIdService, DeleteReferralCodeService,
    GetReferralCodeByIdService, GetReferralCodeService, GetReferralService, GetReferralsService,
    RedeemReferralCodeService,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_user_profile_use_case: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub referral: ReferralUseCases,
    pub referral_code_lookup: CodeLookupPolicy,
    pub user_identity_resolver: UserIdentityResolver,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            error!("test-helpers feature enabled in production environment");
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "test-helpers feature enabled in production environment",
            ));
        }
        tracing::warn!("Test helper routes are ENABLED for environment: {}", env);
    }

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    // Database connection
    let db_settings = &config.database;
    let mut opt = ConnectOptions::new(db_settings.url.clone());
    opt.max_connections(db_settings.max_connections)
        .min_connections(db_settings.min_connections)
        .connect_timeout(Duration::from_secs(db_settings.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(db_settings.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(db_settings.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None).await.map_err(|e| {
            error!("Migration failed: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;
    }

    let db_arc = Arc::new(conn);

    // Auth components
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(
        Argon2Hasher::from_settings(&config.argon2).map_err(|e| {
            error!("Invalid Argon2 settings: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
        })?,
    );
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_query_arc: Arc<dyn UserQuery + Send + Sync> = Arc::new(user_query.clone());

    let create_user_use_case =
        CreateUserUseCase::new(user_query.clone(), user_repo, Arc::clone(&password_hasher));
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        password_hasher,
        Arc::clone(&token_provider_arc),
    );
    let fetch_user_profile_use_case = FetchUserProfileService::new(user_query);

    // Referral components
    let code_repo = ReferralCodeRepositoryPostgres::new(Arc::clone(&db_arc));
    let code_query = ReferralCodeQueryPostgres::new(Arc::clone(&db_arc));
    let referral_repo = ReferralRepositoryPostgres::new(Arc::clone(&db_arc));
    let referral_query = ReferralQueryPostgres::new(Arc::clone(&db_arc));

    let code_generator: Arc<dyn ReferralCodeGenerator> =
        Arc::new(RandomCodeGenerator::new(config.referral.code_length));
    let self_referral = SelfReferralPolicy::from_allow(config.referral.allow_self_referral);
    let visibility =
        ReferralVisibility::from_participants_only(config.referral.referrals_visible_to_participants_only);

    let referral = ReferralUseCases {
        get_code: Arc::new(GetReferralCodeService::new(code_query.clone())),
        get_code_by_id: Arc::new(GetReferralCodeByIdService::new(code_query)),
        create_code: Arc::new(CreateReferralCodeService::new(
            code_repo.clone(),
            code_generator,
            config.referral.max_code_attempts,
        )),
        delete_code: Arc::new(DeleteReferralCodeService::new(code_repo.clone())),
        delete_code_by_id: Arc::new(DeleteReferralCodeByIdService::new(code_repo)),
        redeem: Arc::new(RedeemReferralCodeService::new(referral_repo, self_referral)),
        get_referrals: Arc::new(GetReferralsService::new(referral_query.clone())),
        get_referral: Arc::new(GetReferralService::new(referral_query, visibility)),
    };

    let state = AppState {
        create_user_use_case: Arc::new(create_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        fetch_user_profile_use_case: Arc::new(fetch_user_profile_use_case),
        referral,
        referral_code_lookup: CodeLookupPolicy::from_lookup_by_email(
            config.referral.lookup_code_by_email,
        ),
        user_identity_resolver: UserIdentityResolver::new(user_query_arc),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_profile_handler);
    // Referral codes
    cfg.service(crate::referral::adapter::incoming::web::routes::get_referral_code_handler);
    cfg.service(crate::referral::adapter::incoming::web::routes::create_referral_code_handler);
    cfg.service(crate::referral::adapter::incoming::web::routes::delete_referral_code_handler);
    cfg.service(
        crate::referral::adapter::incoming::web::routes::get_referral_code_by_email_handler,
    );
    cfg.service(crate::referral::adapter::incoming::web::routes::get_referral_code_by_id_handler);
    cfg.service(
        crate::referral::adapter::incoming::web::routes::delete_referral_code_by_id_handler,
    );
    // Referrals
    cfg.service(crate::referral::adapter::incoming::web::routes::redeem_referral_code_handler);
    cfg.service(crate::referral::adapter::incoming::web::routes::get_referrals_handler);
    cfg.service(crate::referral::adapter::incoming::web::routes::get_referral_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
