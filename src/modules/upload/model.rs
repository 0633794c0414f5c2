use serde::{Deserialize, Serialize};

/// Metadata of a stored upload, present only on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub filename: String,
    pub path: String,
    pub size: u64,
    pub mimetype: String,
}

#[derive(Deserialize)]
struct RawUploadResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<UploadedFile>,
}

/// Envelope returned by the upload endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawUploadResponse")]
pub enum UploadResponse {
    Success { message: Option<String>, file: Option<UploadedFile> },
    Failure { message: Option<String> },
}

impl TryFrom<RawUploadResponse> for UploadResponse {
    type Error = String;

    fn try_from(raw: RawUploadResponse) -> Result<Self, Self::Error> {
        match (raw.success, raw.data) {
            (true, file) => Ok(UploadResponse::Success { message: raw.message, file }),
            (false, None) => Ok(UploadResponse::Failure { message: raw.message }),
            (false, Some(_)) => Err("upload metadata present on a failed upload".to_string()),
        }
    }
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadResponse::Success { .. })
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        match self {
            UploadResponse::Success { file, .. } => file.as_ref(),
            UploadResponse::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            UploadResponse::Success { message, .. } | UploadResponse::Failure { message } => {
                message.as_deref()
            }
        }
    }
}

/// File handed to the avatar upload. `mime_type` is guessed from the file
/// name when absent.
#[derive(Debug, Clone)]
pub struct AvatarFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

impl AvatarFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), bytes, mime_type: None }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn resolved_mime_type(&self) -> String {
        self.mime_type.clone().unwrap_or_else(|| {
            mime_guess::from_path(&self.file_name).first_or_octet_stream().essence_str().to_string()
        })
    }
}
