//! PressWire verification API server.
//!
//! Wires the Redis store, the MySQL user repository, the CAPTCHA generator
//! and the SMS dispatch worker together and serves the HTTP surface.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use pw_api::app::{create_app, AppState};
use pw_core::services::dispatch::{dispatch_channel, run_dispatch_worker};
use pw_core::services::registration::RegistrationService;
use pw_core::services::verification::VerificationService;
use pw_infra::{
    CaptchaGenerator, DatabasePool, MockSmsGateway, MySqlUserRepository, RedisStore,
    ZhenziSmsClient,
};
use pw_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter())),
        )
        .init();

    tracing::info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "starting presswire api server"
    );

    let store = Arc::new(
        RedisStore::connect(config.cache.clone())
            .await
            .map_err(init_error)?,
    );
    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(init_error)?;
    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let generator = Arc::new(CaptchaGenerator::new());

    let (queue, jobs) = dispatch_channel();
    let queue = Arc::new(queue);

    match config.sms_gateway.provider.as_str() {
        "zhenzi" if config.sms_gateway.has_credentials() => {
            let gateway =
                Arc::new(ZhenziSmsClient::new(config.sms_gateway.clone()).map_err(init_error)?);
            tokio::spawn(run_dispatch_worker(jobs, gateway));
            tracing::info!(provider = "zhenzi", "sms dispatch worker started");
        }
        provider => {
            if provider == "zhenzi" {
                tracing::warn!("zhenzi credentials missing, using the mock sms gateway");
            }
            tokio::spawn(run_dispatch_worker(jobs, Arc::new(MockSmsGateway::new())));
            tracing::info!(provider = "mock", "sms dispatch worker started");
        }
    }

    let verification = Arc::new(VerificationService::new(
        Arc::clone(&store),
        generator,
        Arc::clone(&users),
        queue,
        config.verification.clone(),
    ));
    let registration = Arc::new(RegistrationService::new(store, users));

    let app_state = web::Data::new(AppState {
        verification,
        registration,
    });

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "http server listening");

    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), cors_config.clone()))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

fn init_error(error: pw_infra::InfrastructureError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error)
}
