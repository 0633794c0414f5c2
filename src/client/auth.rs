use std::sync::Arc;

use validator::Validate;

use crate::{
    api::error::ApiError,
    client::{ApiClient, RequestOptions},
    constants::endpoints::Endpoint,
    modules::user::model::{LoginModel, LoginResponse, User},
};

#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &LoginModel) -> Result<LoginResponse, ApiError> {
        credentials.validate()?;
        self.client.call(Endpoint::Login, RequestOptions::default().json(credentials)?).await
    }

    pub async fn me(&self, token: &str) -> Result<User, ApiError> {
        self.client.call(Endpoint::Me, RequestOptions::default().bearer(token)?).await
    }
}
