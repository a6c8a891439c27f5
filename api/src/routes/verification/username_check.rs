//! Handler for `GET /usernames/{username}`.

use actix_web::{web, HttpResponse};

use pw_core::repositories::UserRepository;
use pw_core::services::dispatch::DispatchQueue;
use pw_core::services::verification::{ChallengeGenerator, EphemeralStore};
use pw_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::UsernameCountResponse;
use crate::routes::domain_error_response;

/// Report how many accounts carry this username (0 or 1).
///
/// The route pattern already restricts `username` to 5-20 word characters;
/// anything else never reaches this handler.
pub async fn username_check<S, G, U, Q>(
    state: web::Data<AppState<S, G, U, Q>>,
    path: web::Path<String>,
) -> HttpResponse
where
    S: EphemeralStore + 'static,
    G: ChallengeGenerator + 'static,
    U: UserRepository + 'static,
    Q: DispatchQueue + 'static,
{
    let username = path.into_inner();

    match state.verification.username_exists(&username).await {
        Ok(exists) => HttpResponse::Ok().json(ApiResponse::ok(UsernameCountResponse {
            count: u64::from(exists),
            username,
        })),
        Err(error) => domain_error_response(&error),
    }
}
