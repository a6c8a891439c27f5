//! Handler for `POST /register/`.

use actix_web::{web, HttpResponse};
use validator::Validate;

use pw_core::repositories::UserRepository;
use pw_core::services::dispatch::DispatchQueue;
use pw_core::services::registration::NewRegistration;
use pw_core::services::verification::{ChallengeGenerator, EphemeralStore};
use pw_shared::types::ApiResponse;
use pw_shared::utils::phone::mask_mobile;

use crate::app::AppState;
use crate::dto::{joined_error_message, RegisterRequest};
use crate::routes::{domain_error_response, param_error_response};

/// Create an account once the submitted SMS code matches the stored one.
pub async fn register<S, G, U, Q>(
    state: web::Data<AppState<S, G, U, Q>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    S: EphemeralStore + 'static,
    G: ChallengeGenerator + 'static,
    U: UserRepository + 'static,
    Q: DispatchQueue + 'static,
{
    if let Err(errors) = request.0.validate() {
        let errmsg = joined_error_message(&errors, RegisterRequest::FIELD_ORDER);
        tracing::warn!(
            mobile = %mask_mobile(&request.mobile),
            errmsg = %errmsg,
            "registration failed field validation"
        );
        return param_error_response(errmsg);
    }

    let registration = NewRegistration {
        username: request.username.clone(),
        password: request.password.clone(),
        password_repeat: request.password_repeat.clone(),
        mobile: request.mobile.clone(),
        sms_code: request.sms_code.clone(),
    };

    match state.registration.register(registration).await {
        Ok(user) => {
            tracing::info!(
                username = %user.username,
                mobile = %mask_mobile(&user.mobile),
                event = "user_registered",
                "account created"
            );
            HttpResponse::Ok().json(ApiResponse::<()>::ok_message("恭喜您，注册成功！"))
        }
        Err(error) => domain_error_response(&error),
    }
}
