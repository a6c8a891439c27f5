//! Handler for `GET /mobiles/{mobile}`.

use actix_web::{web, HttpResponse};

use pw_core::repositories::UserRepository;
use pw_core::services::dispatch::DispatchQueue;
use pw_core::services::verification::{ChallengeGenerator, EphemeralStore};
use pw_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::MobileCountResponse;
use crate::routes::domain_error_response;

/// Report how many accounts carry this mobile number (0 or 1).
///
/// The route pattern already restricts `mobile` to the Chinese mainland
/// number shape; anything else never reaches this handler.
pub async fn mobile_check<S, G, U, Q>(
    state: web::Data<AppState<S, G, U, Q>>,
    path: web::Path<String>,
) -> HttpResponse
where
    S: EphemeralStore + 'static,
    G: ChallengeGenerator + 'static,
    U: UserRepository + 'static,
    Q: DispatchQueue + 'static,
{
    let mobile = path.into_inner();

    match state.verification.mobile_exists(&mobile).await {
        Ok(exists) => HttpResponse::Ok().json(ApiResponse::ok(MobileCountResponse {
            count: u64::from(exists),
            mobile,
        })),
        Err(error) => domain_error_response(&error),
    }
}
