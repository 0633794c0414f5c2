use crate::{api::error, modules::user::schema::UserEntity};

#[async_trait::async_trait]
pub trait UserRepository {
    /// Sets `is_active = true` and `status = ACTIVE` on the account with this
    /// email. Fails with `SystemError::NotFound` when no row matches.
    async fn activate_by_email(&self, email: &str) -> Result<UserEntity, error::SystemError>;
}
