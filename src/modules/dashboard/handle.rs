use actix_web::{get, web, Either, HttpRequest, HttpResponse};

use crate::{
    api::{error, success},
    middlewares::{enforce, get_claims, get_route_access, GuardOutcome},
    modules::dashboard::model::{Page, PageResponse},
};

type PageResult = Either<web::Redirect, success::Success<PageResponse>>;

fn render(page: Page, req: &HttpRequest) -> PageResult {
    let claims = get_claims(req);

    match enforce(get_route_access(req), claims.as_ref()) {
        GuardOutcome::Render => {
            let body = PageResponse::new(page, claims.as_ref());
            Either::Right(success::Success::ok(Some(body)).message("Page retrieved successfully"))
        }
        GuardOutcome::Redirect(to) => {
            log::info!("Redirecting {} to {to}", req.path());
            Either::Left(web::Redirect::to(to).see_other())
        }
    }
}

#[get("")]
pub async fn overview(req: HttpRequest) -> PageResult {
    render(Page::Overview, &req)
}

#[get("/account")]
pub async fn account(req: HttpRequest) -> PageResult {
    render(Page::Account, &req)
}

#[get("/users")]
pub async fn users(req: HttpRequest) -> PageResult {
    render(Page::Users, &req)
}

#[get("/task-types")]
pub async fn task_types(req: HttpRequest) -> PageResult {
    render(Page::TaskTypes, &req)
}

#[get("/tasks")]
pub async fn tasks(req: HttpRequest) -> PageResult {
    render(Page::Tasks, &req)
}

#[get("/my-tasks")]
pub async fn my_tasks(req: HttpRequest) -> PageResult {
    render(Page::MyTasks, &req)
}

#[get("/messages")]
pub async fn messages(req: HttpRequest) -> PageResult {
    render(Page::Messages, &req)
}

#[get("/timekeeping")]
pub async fn timekeeping(req: HttpRequest) -> PageResult {
    render(Page::Timekeeping, &req)
}

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, error::Error> {
    Err(error::Error::not_found(format!("No dashboard page at {}", req.path())))
}
