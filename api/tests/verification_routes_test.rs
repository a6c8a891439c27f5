//! Integration tests for the verification endpoints.

mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use serde_json::{json, Value};

use pw_api::app::create_app;
use pw_core::services::verification::EphemeralStore;
use pw_shared::config::CorsConfig;

use common::{sample_user, test_context, CHALLENGE_ID, MOBILE};

#[actix_rt::test]
async fn test_health_reports_service_and_version() {
    let ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 0);
    assert_eq!(body["data"]["service"], "presswire-api");
    assert!(body["data"]["version"].is_string());
}

#[actix_rt::test]
async fn test_image_code_returns_jpeg_and_stores_text() {
    let ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::get()
        .uri(&format!("/image_codes/{}", CHALLENGE_ID))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/jpg"
    );
    let body = test::read_body(response).await;
    assert!(body.starts_with(&[0xFF, 0xD8]));

    let stored = ctx
        .store
        .get(&format!("img_{}", CHALLENGE_ID))
        .await
        .unwrap();
    assert_eq!(stored.as_deref(), Some("A1B2"));
}

#[actix_rt::test]
async fn test_sms_code_happy_path_stores_code_and_enqueues_job() {
    let mut ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::get()
        .uri(&format!("/image_codes/{}", CHALLENGE_ID))
        .to_request();
    test::call_service(&app, request).await;

    let request = test::TestRequest::post()
        .uri("/sms_codes/")
        .set_json(json!({
            "mobile": MOBILE,
            "text": "A1B2",
            "image_code_id": CHALLENGE_ID,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 0);
    assert_eq!(body["errmsg"], "短信验证码发送成功");
    assert!(body.get("data").is_none());

    let code = ctx
        .store
        .get(&format!("sms_{}", MOBILE))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    let flag = ctx
        .store
        .get(&format!("sms_flag_{}", MOBILE))
        .await
        .unwrap();
    assert_eq!(flag.as_deref(), Some("1"));

    let job = ctx.jobs.try_recv().unwrap();
    assert_eq!(job.mobile, MOBILE);
    assert_eq!(job.code, code);
}

#[actix_rt::test]
async fn test_second_request_in_cool_down_is_rejected() {
    let mut ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let sms_request = || {
        test::TestRequest::post()
            .uri("/sms_codes/")
            .set_json(json!({
                "mobile": MOBILE,
                "text": "A1B2",
                "image_code_id": CHALLENGE_ID,
            }))
            .to_request()
    };
    let challenge_request = || {
        test::TestRequest::get()
            .uri(&format!("/image_codes/{}", CHALLENGE_ID))
            .to_request()
    };

    test::call_service(&app, challenge_request()).await;
    let response = test::call_service(&app, sms_request()).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 0);
    assert!(ctx.jobs.try_recv().is_ok());

    // Fresh challenge, same mobile, still inside the cool-down window
    test::call_service(&app, challenge_request()).await;
    let response = test::call_service(&app, sms_request()).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 4201);
    assert_eq!(body["errmsg"], "获取手机短信验证码过于频繁");
    assert!(ctx.jobs.try_recv().is_err());
}

#[actix_rt::test]
async fn test_challenge_is_single_use() {
    let ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::get()
        .uri(&format!("/image_codes/{}", CHALLENGE_ID))
        .to_request();
    test::call_service(&app, request).await;

    // Wrong answer consumes the challenge
    let request = test::TestRequest::post()
        .uri("/sms_codes/")
        .set_json(json!({
            "mobile": MOBILE,
            "text": "XXXX",
            "image_code_id": CHALLENGE_ID,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 4201);
    assert_eq!(body["errmsg"], "图形验证失败！");

    // Correct answer now fails too: the entry is gone
    let request = test::TestRequest::post()
        .uri("/sms_codes/")
        .set_json(json!({
            "mobile": MOBILE,
            "text": "A1B2",
            "image_code_id": CHALLENGE_ID,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errmsg"], "图形验证失败！");
}

#[actix_rt::test]
async fn test_challenge_compare_is_case_sensitive() {
    let ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::get()
        .uri(&format!("/image_codes/{}", CHALLENGE_ID))
        .to_request();
    test::call_service(&app, request).await;

    let request = test::TestRequest::post()
        .uri("/sms_codes/")
        .set_json(json!({
            "mobile": MOBILE,
            "text": "a1b2",
            "image_code_id": CHALLENGE_ID,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 4201);
    assert_eq!(body["errmsg"], "图形验证失败！");
}

#[actix_rt::test]
async fn test_registered_mobile_rejected_before_consuming_challenge() {
    let ctx = test_context("A1B2");
    ctx.users
        .insert(sample_user("presswirefan", MOBILE))
        .await;
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::get()
        .uri(&format!("/image_codes/{}", CHALLENGE_ID))
        .to_request();
    test::call_service(&app, request).await;

    let request = test::TestRequest::post()
        .uri("/sms_codes/")
        .set_json(json!({
            "mobile": MOBILE,
            "text": "A1B2",
            "image_code_id": CHALLENGE_ID,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 4201);
    assert_eq!(body["errmsg"], "此手机号已注册，请重新输入！");

    // The existence check runs first, so the challenge survives
    let stored = ctx
        .store
        .get(&format!("img_{}", CHALLENGE_ID))
        .await
        .unwrap();
    assert_eq!(stored.as_deref(), Some("A1B2"));
}

#[actix_rt::test]
async fn test_field_errors_are_joined_in_order() {
    let ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::post()
        .uri("/sms_codes/")
        .set_json(json!({
            "mobile": "123",
            "text": "A1",
            "image_code_id": CHALLENGE_ID,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 4201);
    assert_eq!(body["errmsg"], "手机号长度有误/图片验证码长度有误");
}

#[actix_rt::test]
async fn test_unreadable_body_answers_with_canned_param_error() {
    let ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::post()
        .uri("/sms_codes/")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("not json")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 4201);
    assert_eq!(body["errmsg"], "参数错误");
}

#[actix_rt::test]
async fn test_username_count_reflects_registration() {
    let ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::get()
        .uri("/usernames/presswirefan")
        .to_request();
    let response = test::call_service(&app, request).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 0);
    assert_eq!(body["data"], json!({"count": 0, "username": "presswirefan"}));

    ctx.users
        .insert(sample_user("presswirefan", MOBILE))
        .await;

    let request = test::TestRequest::get()
        .uri("/usernames/presswirefan")
        .to_request();
    let response = test::call_service(&app, request).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["count"], 1);
}

#[actix_rt::test]
async fn test_username_route_pattern_rejects_bad_shapes() {
    let ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    // Too short for the route pattern, falls through to the 404 handler
    let request = test::TestRequest::get().uri("/usernames/abc").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 4004);
}

#[actix_rt::test]
async fn test_mobile_count_reflects_registration() {
    let ctx = test_context("A1B2");
    ctx.users
        .insert(sample_user("presswirefan", MOBILE))
        .await;
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::get()
        .uri(&format!("/mobiles/{}", MOBILE))
        .to_request();
    let response = test::call_service(&app, request).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errno"], 0);
    assert_eq!(body["data"], json!({"count": 1, "mobile": MOBILE}));
}

#[actix_rt::test]
async fn test_mobile_route_pattern_rejects_bad_shapes() {
    let ctx = test_context("A1B2");
    let app = test::init_service(create_app(ctx.state.clone(), CorsConfig::development())).await;

    let request = test::TestRequest::get().uri("/mobiles/12345").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
