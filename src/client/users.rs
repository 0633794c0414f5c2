use std::sync::Arc;

use serde::de::IgnoredAny;
use validator::Validate;

use crate::{
    api::error::ApiError,
    client::{ApiClient, RequestOptions},
    constants::endpoints::Endpoint,
    modules::user::model::{NewUserModel, UpdateUserModel, User},
};

/// User administration calls. All of them need an admin bearer token.
#[derive(Clone)]
pub struct UsersApi {
    client: Arc<ApiClient>,
}

impl UsersApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, token: &str) -> Result<Vec<User>, ApiError> {
        self.client.call(Endpoint::ListUsers, RequestOptions::default().bearer(token)?).await
    }

    pub async fn create(&self, token: &str, user: &NewUserModel) -> Result<User, ApiError> {
        user.validate()?;
        let options = RequestOptions::default().bearer(token)?.json(user)?;
        self.client.call(Endpoint::CreateUser, options).await
    }

    pub async fn update(
        &self,
        token: &str,
        id: &str,
        user: &UpdateUserModel,
    ) -> Result<User, ApiError> {
        if user.is_empty() {
            return Err(ApiError::invalid_request("No fields to update"));
        }
        user.validate()?;
        let options = RequestOptions::default().bearer(token)?.json(user)?;
        self.client.call(Endpoint::UpdateUser(id), options).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny =
            self.client.call(Endpoint::DeleteUser(id), RequestOptions::default().bearer(token)?).await?;
        Ok(())
    }

    pub async fn activate(&self, token: &str, id: &str) -> Result<User, ApiError> {
        self.client.call(Endpoint::ActivateUser(id), RequestOptions::default().bearer(token)?).await
    }

    pub async fn deactivate(&self, token: &str, id: &str) -> Result<User, ApiError> {
        self.client
            .call(Endpoint::DeactivateUser(id), RequestOptions::default().bearer(token)?)
            .await
    }
}
