//! Handler for `GET /image_codes/{image_code_id}`.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use pw_core::repositories::UserRepository;
use pw_core::services::dispatch::DispatchQueue;
use pw_core::services::verification::{ChallengeGenerator, EphemeralStore};

use crate::app::AppState;
use crate::routes::domain_error_response;

/// Issue an image challenge for the caller-supplied id.
///
/// The challenge text is stored server-side under the id; the response body
/// is the rendered JPEG. Re-requesting the same id replaces the stored text.
pub async fn image_code<S, G, U, Q>(
    state: web::Data<AppState<S, G, U, Q>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    S: EphemeralStore + 'static,
    G: ChallengeGenerator + 'static,
    U: UserRepository + 'static,
    Q: DispatchQueue + 'static,
{
    let image_code_id = path.into_inner();

    match state.verification.issue_image_challenge(image_code_id).await {
        Ok(image) => HttpResponse::Ok().content_type("image/jpg").body(image),
        Err(error) => domain_error_response(&error),
    }
}
