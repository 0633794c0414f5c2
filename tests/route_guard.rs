use actix_web::{
    middleware::from_fn, test, web, App, HttpMessage, HttpRequest, HttpResponse,
};
use dashboard::{
    middlewares::{identify, route_guard, AuthSettings, RouteAccess},
    modules::user::schema::UserRole,
    utils::Claims,
};

const SECRET: &str = "route-guard-secret";

/// Reports what the middleware stack attached to the request.
async fn echo(req: HttpRequest) -> HttpResponse {
    let access = req.extensions().get::<RouteAccess>().copied();
    let caller = req.extensions().get::<Claims>().map(|c| c.sub.clone());
    HttpResponse::Ok().body(format!("{access:?}|{}", caller.unwrap_or_else(|| "anonymous".into())))
}

fn token(sub: &str, role: UserRole) -> String {
    Claims::new(sub, role, 3600).encode(SECRET.as_bytes()).unwrap()
}

macro_rules! guarded_app {
    () => {
        test::init_service(
            App::new().app_data(web::Data::new(AuthSettings { jwt_secret: SECRET.into() })).service(
                web::scope("/dashboard")
                    .wrap(from_fn(route_guard))
                    .wrap(from_fn(identify))
                    .route("", web::get().to(echo))
                    .route("/{tail:.*}", web::get().to(echo)),
            ),
        )
        .await
    };
}

#[actix_web::test]
async fn passes_every_dashboard_path_for_every_caller() {
    let app = guarded_app!();

    let callers = [
        None,
        Some(token("admin-1", UserRole::Admin)),
        Some(token("user-1", UserRole::User)),
        Some("not-a-jwt".to_string()),
    ];
    let paths = [
        ("/dashboard/users", "Some(AdminOnly)"),
        ("/dashboard/users/42", "Some(AdminOnly)"),
        ("/dashboard/task-types", "Some(AdminOnly)"),
        ("/dashboard", "Some(Public)"),
        ("/dashboard/account", "Some(Public)"),
        ("/dashboard/messages", "Some(Public)"),
    ];

    for caller in &callers {
        for (path, expected) in paths {
            let mut req = test::TestRequest::get().uri(path);
            if let Some(token) = caller {
                req = req.insert_header(("Authorization", format!("Bearer {token}")));
            }
            let resp = test::call_service(&app, req.to_request()).await;
            assert!(resp.status().is_success(), "{path} blocked for {caller:?}");

            let body = test::read_body(resp).await;
            let body = std::str::from_utf8(&body).unwrap();
            assert!(body.starts_with(expected), "{path}: {body}");
        }
    }
}

#[actix_web::test]
async fn identifies_callers_from_header_or_cookie() {
    let app = guarded_app!();

    let req = test::TestRequest::get()
        .uri("/dashboard/users")
        .insert_header(("Authorization", format!("Bearer {}", token("admin-1", UserRole::Admin))))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "Some(AdminOnly)|admin-1");

    let req = test::TestRequest::get()
        .uri("/dashboard/account")
        .cookie(actix_web::cookie::Cookie::new("access_token", token("user-7", UserRole::User)))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "Some(Public)|user-7");
}

#[actix_web::test]
async fn invalid_tokens_leave_the_caller_anonymous() {
    let app = guarded_app!();

    let foreign = Claims::new("intruder", UserRole::Admin, 3600).encode(b"another-secret").unwrap();
    let req = test::TestRequest::get()
        .uri("/dashboard/users")
        .insert_header(("Authorization", format!("Bearer {foreign}")))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "Some(AdminOnly)|anonymous");
}
