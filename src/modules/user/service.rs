use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::user::{model::User, repository::UserRepository};

/// Flips an administrator account to active. Running it again against the
/// same account is a no-op by value.
#[derive(Clone)]
pub struct AdminActivationService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl AdminActivationService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("AdminActivationService initialized with dependencies");
        AdminActivationService { repo }
    }

    pub async fn activate(&self, email: &str) -> Result<User, error::SystemError> {
        let entity = self.repo.activate_by_email(email).await?;
        info!("Account {} is active (status {:?})", entity.email, entity.status);
        Ok(User::from(entity))
    }
}
