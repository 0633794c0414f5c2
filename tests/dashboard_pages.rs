use actix_web::{http::header, http::StatusCode, test, web, App};
use dashboard::{
    middlewares::AuthSettings, modules::dashboard::route, modules::user::schema::UserRole,
    utils::Claims,
};
use serde_json::Value;

const SECRET: &str = "pages-secret";

fn bearer(sub: &str, role: UserRole) -> (header::HeaderName, String) {
    let token = Claims::new(sub, role, 3600).encode(SECRET.as_bytes()).unwrap();
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

macro_rules! dashboard_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AuthSettings { jwt_secret: SECRET.into() }))
                .configure(route::configure),
        )
        .await
    };
}

fn nav_keys(body: &Value) -> Vec<String> {
    body["data"]["navigation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["key"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn admin_opens_admin_pages() {
    let app = dashboard_app!();

    for (path, key) in [("/dashboard/users", "users"), ("/dashboard/task-types", "taskTypes")] {
        let req =
            test::TestRequest::get().uri(path).insert_header(bearer("admin-1", UserRole::Admin)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["key"], key);
        assert_eq!(body["data"]["path"], path);
        assert_eq!(body["data"]["viewerId"], "admin-1");
        assert_eq!(nav_keys(&body), ["overview", "users", "taskTypes", "account"]);
    }
}

#[actix_web::test]
async fn non_admin_is_redirected_to_overview() {
    let app = dashboard_app!();

    let req = test::TestRequest::get()
        .uri("/dashboard/users")
        .insert_header(bearer("user-1", UserRole::User))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/dashboard");
}

#[actix_web::test]
async fn anonymous_is_redirected_to_sign_in() {
    let app = dashboard_app!();

    for path in ["/dashboard/users", "/dashboard/task-types"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/auth/sign-in");
    }
}

#[actix_web::test]
async fn public_pages_hide_admin_navigation() {
    let app = dashboard_app!();

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .insert_header(bearer("user-1", UserRole::User))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["key"], "overview");
    assert_eq!(body["data"]["viewerId"], "user-1");
    assert_eq!(nav_keys(&body), ["overview", "account"]);

    for (path, key) in [
        ("/dashboard/account", "account"),
        ("/dashboard/tasks", "tasks"),
        ("/dashboard/my-tasks", "myTasks"),
        ("/dashboard/messages", "messages"),
        ("/dashboard/timekeeping", "timekeeping"),
    ] {
        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri(path).to_request())
                .await;
        assert_eq!(body["data"]["key"], key);
        assert_eq!(body["data"]["viewerId"], Value::Null);
        assert_eq!(nav_keys(&body), ["overview", "account"]);
    }
}

#[actix_web::test]
async fn admin_cookie_is_accepted() {
    let app = dashboard_app!();

    let token = Claims::new("admin-2", UserRole::Admin, 3600).encode(SECRET.as_bytes()).unwrap();
    let req = test::TestRequest::get()
        .uri("/dashboard/task-types")
        .cookie(actix_web::cookie::Cookie::new("access_token", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn unknown_dashboard_page_is_a_json_404() {
    let app = dashboard_app!();

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/dashboard/reports").to_request())
            .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No dashboard page at /dashboard/reports");
}

#[actix_web::test]
async fn missing_auth_settings_is_a_server_error() {
    let app = test::init_service(App::new().configure(route::configure)).await;

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .insert_header(bearer("user-1", UserRole::User))
        .to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();
    let resp = err.error_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    assert_eq!(body, r#"{"message":"Internal Server Error"}"#);
}
