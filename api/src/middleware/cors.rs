//! CORS middleware configuration.
//!
//! The verification endpoints are called from the browser frontend of the
//! news portal, which may live on a different origin than the API. The
//! configuration is permissive in development and origin-listed in
//! production.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use pw_shared::config::CorsConfig;

/// Build the CORS layer from configuration.
///
/// A `*` entry in `allowed_origins` (the development default) switches to
/// allow-any-origin; otherwise only the listed origins are accepted. With
/// CORS disabled the layer stays at its same-origin default.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age as usize);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
