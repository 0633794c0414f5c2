use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::{
    api::error::ApiError,
    client::{ApiClient, RequestOptions},
    constants::endpoints::Endpoint,
    modules::upload::model::{AvatarFile, UploadResponse},
};

/// Multipart field the backend reads the avatar from.
pub const AVATAR_FIELD: &str = "avatar";

#[derive(Clone)]
pub struct UploadApi {
    client: Arc<ApiClient>,
}

impl UploadApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn upload_avatar(
        &self,
        token: &str,
        file: AvatarFile,
    ) -> Result<UploadResponse, ApiError> {
        let mime_type = file.resolved_mime_type();
        log::info!("Uploading avatar {} ({} bytes, {mime_type})", file.file_name, file.bytes.len());

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&mime_type)
            .map_err(|_| ApiError::invalid_request(format!("Invalid MIME type '{mime_type}'")))?;
        let form = Form::new().part(AVATAR_FIELD, part);

        let options = RequestOptions::default().bearer(token)?.multipart(form);
        self.client.call(Endpoint::UploadAvatar, options).await
    }
}
