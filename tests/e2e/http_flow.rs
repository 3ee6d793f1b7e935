//! Login, protected call and logout over HTTP

use crate::common::ConfigFactory;
use crate::common::fixtures::PASSWORD;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, test as actix_test, web};
use daas_token::SecurityContext;
use daas_token::server::{AppState, AuthenticatedUser, HttpServer, TokenSecurity};
use serde_json::{Value, json};

async fn report(user: AuthenticatedUser, path: web::Path<String>) -> HttpResponse {
    let context = SecurityContext::current().map(|a| a.principal_id().to_string());
    HttpResponse::Ok().json(json!({
        "report": path.into_inner(),
        "user": user.principal_id(),
        "context": context,
    }))
}

async fn admin() -> HttpResponse {
    HttpResponse::Ok().body("admin")
}

macro_rules! service {
    () => {{
        let config = ConfigFactory::base();
        let engine = ConfigFactory::engine();
        let security = TokenSecurity::new(engine.clone(), config.filter()).unwrap();
        let state = web::Data::new(AppState::new(config, engine));
        actix_test::init_service(
            HttpServer::create_app(state, security)
                .route("/api/reports/{id}", web::get().to(report))
                .route("/api/admin/users", web::get().to(admin)),
        )
        .await
    }};
}

macro_rules! login {
    ($app:expr, $user:expr) => {{
        let req = actix_test::TestRequest::post()
            .uri("/token/login")
            .set_json(json!({"username": $user, "password": PASSWORD}))
            .to_request();
        let resp = actix_test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["expiredAt"].is_string());
        body["data"]["token"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_full_session() {
    let app = service!();
    let token = login!(&app, "alice");

    let req = actix_test::TestRequest::get()
        .uri("/api/reports/q3")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::SERVER).unwrap(),
        "daas-token"
    );
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["report"], "q3");
    assert_eq!(body["user"], "alice");
    assert_eq!(body["context"], "alice");

    let req = actix_test::TestRequest::post()
        .uri("/token/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = actix_test::TestRequest::get()
        .uri("/api/reports/q3")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["error"]["message_key"], "daas.token.not_found");
}

#[actix_web::test]
async fn test_admin_area_by_user() {
    let app = service!();
    let alice = login!(&app, "alice");
    let root = login!(&app, "root");

    let req = actix_test::TestRequest::get()
        .uri("/api/admin/users")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", alice)))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = actix_test::TestRequest::get()
        .uri("/api/admin/users")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", root)))
        .to_request();
    let body = actix_test::call_and_read_body(&app, req).await;
    assert_eq!(body, web::Bytes::from_static(b"admin"));
}

#[actix_web::test]
async fn test_unknown_user_cannot_log_in() {
    let app = service!();

    let req = actix_test::TestRequest::post()
        .uri("/token/login")
        .set_json(json!({"username": "mallory", "password": PASSWORD}))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["message_key"], "daas.token.identity.not_found");
}

#[actix_web::test]
async fn test_protected_call_without_token() {
    let app = service!();

    let req = actix_test::TestRequest::get().uri("/api/reports/q3").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
