use actix_web::{
    middleware::from_fn,
    web::{self, scope, ServiceConfig},
};

use crate::{
    constants::paths,
    middlewares::{identify, route_guard},
    modules::dashboard::handle::*,
};

/// Mounts every dashboard page under `/dashboard`, behind the route guard.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope(paths::dashboard::OVERVIEW)
            .wrap(from_fn(route_guard))
            .wrap(from_fn(identify))
            .service(overview)
            .service(account)
            .service(users)
            .service(task_types)
            .service(tasks)
            .service(my_tasks)
            .service(messages)
            .service(timekeeping)
            .default_service(web::to(not_found)),
    );
}
