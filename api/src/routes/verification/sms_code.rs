//! Handler for `POST /sms_codes/`.

use actix_web::{web, HttpResponse};
use validator::Validate;

use pw_core::repositories::UserRepository;
use pw_core::services::dispatch::DispatchQueue;
use pw_core::services::verification::{ChallengeGenerator, EphemeralStore};
use pw_shared::types::ApiResponse;
use pw_shared::utils::phone::mask_mobile;

use crate::app::AppState;
use crate::dto::{joined_error_message, SmsCodeRequest};
use crate::routes::{domain_error_response, param_error_response};

/// Validate the image challenge answer and queue an SMS code.
///
/// On success the caller gets an acknowledgment immediately; delivery
/// happens on the dispatch worker and is never awaited here.
pub async fn sms_code<S, G, U, Q>(
    state: web::Data<AppState<S, G, U, Q>>,
    request: web::Json<SmsCodeRequest>,
) -> HttpResponse
where
    S: EphemeralStore + 'static,
    G: ChallengeGenerator + 'static,
    U: UserRepository + 'static,
    Q: DispatchQueue + 'static,
{
    if let Err(errors) = request.0.validate() {
        let errmsg = joined_error_message(&errors, SmsCodeRequest::FIELD_ORDER);
        tracing::warn!(
            mobile = %mask_mobile(&request.mobile),
            errmsg = %errmsg,
            "sms code request failed field validation"
        );
        return param_error_response(errmsg);
    }

    match state
        .verification
        .request_sms_code(&request.mobile, &request.text, request.image_code_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::ok_message("短信验证码发送成功")),
        Err(error) => domain_error_response(&error),
    }
}
