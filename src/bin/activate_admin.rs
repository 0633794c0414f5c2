//! Marks the administrator account active. Run once after seeding:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo run --bin activate_admin
//! ```

use std::{process::ExitCode, sync::Arc, sync::LazyLock};

use dashboard::{
    configs::connect_database,
    constants,
    modules::user::{repository_pg::UserRepositoryPg, service::AdminActivationService},
};

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    constants::Env::default()
});

#[actix_web::main]
async fn main() -> ExitCode {
    let email = ENV.admin_email.as_str();

    let pool = match connect_database(ENV.database_url.as_deref()).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Database connection error: {e}");
            eprintln!("Could not connect to the database: {e}");
            return ExitCode::FAILURE;
        }
    };

    let service =
        AdminActivationService::with_dependencies(Arc::new(UserRepositoryPg::new(pool.clone())));

    let outcome = match service.activate(email).await {
        Ok(user) => {
            println!("Admin account {} ({}) is now active", user.email, user.full_name());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Activation of {email} failed: {e:?}");
            eprintln!("Failed to activate admin account {email}: {e}");
            ExitCode::FAILURE
        }
    };

    pool.close().await;
    outcome
}
