//! Photo upload helpers: multipart parsing, file checks and storage naming.

use axum::extract::Multipart;
use chrono::Utc;
use entity::sea_orm_active_enums::PhotoContext;
use rand::{distr::Alphanumeric, Rng};
use sea_orm::ActiveEnum;
use uuid::Uuid;

use crate::server::error::AppError;

/// Largest accepted upload, 5 MiB.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

const MAX_FILENAME_LEN: usize = 255;

/// Accepted MIME types with the file extensions allowed for each. The first extension is the
/// one used when the uploaded name carries none.
const ALLOWED_TYPES: &[(&str, &[&str])] = &[
    ("image/jpeg", &["jpg", "jpeg"]),
    ("image/jpg", &["jpg", "jpeg"]),
    ("image/png", &["png"]),
    ("image/gif", &["gif"]),
    ("image/webp", &["webp"]),
];

/// A file part read fully into memory.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Checks type, size and extension of the file.
    ///
    /// # Returns
    /// - `Ok(&str)` - Extension to store the file under
    /// - `Err(AppError::BadRequest)` - File is not an accepted image or too large
    pub fn validate(&self) -> Result<&'static str, AppError> {
        let content_type = self.content_type.to_ascii_lowercase();
        let extensions = ALLOWED_TYPES
            .iter()
            .find(|(mime, _)| *mime == content_type)
            .map(|(_, extensions)| *extensions)
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Invalid file type. Only JPEG, PNG, GIF, and WebP images are allowed."
                        .to_string(),
                )
            })?;

        if self.bytes.len() > MAX_FILE_SIZE {
            return Err(AppError::BadRequest(
                "File too large. Maximum file size is 5MB.".to_string(),
            ));
        }

        match file_extension(&self.file_name) {
            None => Ok(extensions[0]),
            Some(ext) => extensions
                .iter()
                .find(|allowed| **allowed == ext)
                .copied()
                .ok_or_else(|| {
                    AppError::BadRequest("File extension does not match file type".to_string())
                }),
        }
    }
}

/// Fields of the photo upload form.
#[derive(Debug, Default)]
pub struct PhotoUploadForm {
    pub file: Option<UploadedFile>,
    pub context: Option<String>,
    pub route_id: Option<String>,
    pub route_call_id: Option<String>,
    pub caption: Option<String>,
}

impl PhotoUploadForm {
    /// Reads every part of a multipart request. Unknown parts are skipped and empty text
    /// values count as absent.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "file" {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                form.file = Some(UploadedFile {
                    file_name: sanitize_filename(&file_name),
                    content_type,
                    bytes: bytes.to_vec(),
                });
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            let value = Some(value).filter(|v| !v.trim().is_empty());
            match name.as_str() {
                "context" => form.context = value,
                "routeId" => form.route_id = value,
                "routeCallId" => form.route_call_id = value,
                "caption" => form.caption = value,
                _ => {}
            }
        }

        Ok(form)
    }

    /// Takes the uploaded file or fails with "No file uploaded".
    pub fn take_file(&mut self) -> Result<UploadedFile, AppError> {
        self.file
            .take()
            .ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))
    }

    pub fn photo_context(&self) -> Result<PhotoContext, AppError> {
        let raw = self
            .context
            .clone()
            .ok_or_else(|| AppError::BadRequest("context is required".to_string()))?;

        PhotoContext::try_from_value(&raw).map_err(|_| {
            AppError::BadRequest(
                "context must be one of ROUTE_GALLERY, ROUTE_CALL_COVER, ROUTE_CALL_GALLERY"
                    .to_string(),
            )
        })
    }

    pub fn route_id(&self) -> Result<Option<Uuid>, AppError> {
        parse_uuid(self.route_id.as_deref(), "routeId")
    }

    pub fn route_call_id(&self) -> Result<Option<Uuid>, AppError> {
        parse_uuid(self.route_call_id.as_deref(), "routeCallId")
    }
}

fn parse_uuid(value: Option<&str>, field: &str) -> Result<Option<Uuid>, AppError> {
    value
        .map(|v| {
            Uuid::parse_str(v.trim())
                .map_err(|_| AppError::BadRequest(format!("{} must be a valid UUID", field)))
        })
        .transpose()
}

/// Makes a client supplied file name safe to log and store.
///
/// Characters outside `[A-Za-z0-9._-]` become `_`, runs of dots collapse to one, leading dots
/// are dropped and the result is cut to 255 characters.
pub fn sanitize_filename(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            c
        } else {
            '_'
        };
        if c == '.' && sanitized.ends_with('.') {
            continue;
        }
        sanitized.push(c);
    }

    let mut sanitized = sanitized.trim_start_matches('.').to_string();
    sanitized.truncate(MAX_FILENAME_LEN);
    sanitized
}

fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    (!stem.is_empty() && !ext.is_empty()).then(|| ext.to_ascii_lowercase())
}

/// Storage folder for each photo context.
pub fn folder_for(context: PhotoContext) -> &'static str {
    match context {
        PhotoContext::RouteGallery => "routes",
        PhotoContext::RouteCallCover => "route-calls/covers",
        PhotoContext::RouteCallGallery => "route-calls/gallery",
    }
}

/// Builds a fresh object path `{folder}/{millis}-{random}.{ext}`.
pub fn object_path(folder: &str, extension: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();

    format!(
        "{}/{}-{}.{}",
        folder,
        Utc::now().timestamp_millis(),
        suffix,
        extension
    )
}
