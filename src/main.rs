use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::LazyLock;

use dashboard::{constants, middlewares::AuthSettings, modules};

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let jwt_secret = ENV.jwt_secret.clone().ok_or_else(|| {
        std::io::Error::other("SECRET_KEY must be set in .env file or environment variable")
    })?;
    let auth = web::Data::new(AuthSettings { jwt_secret });

    log::info!("Starting dashboard at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(auth.clone())
            .service(health_check)
            .configure(modules::dashboard::route::configure)
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
