//! Application state and factory.
//!
//! `create_app` assembles the middleware stack and the route table around
//! an [`AppState`]; the binary and the integration tests both build their
//! applications through it, differing only in the injected services.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use pw_core::repositories::UserRepository;
use pw_core::services::dispatch::DispatchQueue;
use pw_core::services::registration::RegistrationService;
use pw_core::services::verification::{ChallengeGenerator, EphemeralStore, VerificationService};
use pw_shared::config::CorsConfig;
use pw_shared::types::{ApiResponse, ErrorCode, HealthResponse};
use pw_shared::utils::phone::MOBILE_ROUTE_PATTERN;
use pw_shared::utils::validation::USERNAME_ROUTE_PATTERN;

use crate::middleware::cors::create_cors;
use crate::routes::registration::register;
use crate::routes::verification::{image_code, mobile_check, sms_code, username_check};

/// Shared services handed to every request handler.
pub struct AppState<S, G, U, Q>
where
    S: EphemeralStore,
    G: ChallengeGenerator,
    U: UserRepository,
    Q: DispatchQueue,
{
    pub verification: Arc<VerificationService<S, G, U, Q>>,
    pub registration: Arc<RegistrationService<S, U>>,
}

/// Create and configure the application with all dependencies.
pub fn create_app<S, G, U, Q>(
    app_state: web::Data<AppState<S, G, U, Q>>,
    cors_config: CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: EphemeralStore + 'static,
    G: ChallengeGenerator + 'static,
    U: UserRepository + 'static,
    Q: DispatchQueue + 'static,
{
    let cors = create_cors(&cors_config);

    // An unreadable JSON body answers with the canned parameter-error
    // envelope instead of the framework's plain-text 400.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::Ok().json(ApiResponse::<()>::err(ErrorCode::ParamError));
        actix_web::error::InternalError::from_response(err, response).into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .route(
            "/image_codes/{image_code_id}",
            web::get().to(image_code::<S, G, U, Q>),
        )
        .route(
            &format!("/usernames/{{username:{}}}", USERNAME_ROUTE_PATTERN),
            web::get().to(username_check::<S, G, U, Q>),
        )
        .route(
            &format!("/mobiles/{{mobile:{}}}", MOBILE_ROUTE_PATTERN),
            web::get().to(mobile_check::<S, G, U, Q>),
        )
        .route("/sms_codes/", web::post().to(sms_code::<S, G, U, Q>))
        .route("/register/", web::post().to(register::<S, G, U, Q>))
        .default_service(web::route().to(not_found))
}

/// Liveness probe: service name and version, no dependency checks.
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(HealthResponse {
        service: "presswire-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::err(ErrorCode::NoData))
}
