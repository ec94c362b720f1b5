use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use futures_util::TryStreamExt;
use log::{debug, error, info, warn};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::errors::AppError;
use crate::models::file::UploadedImage;
use crate::utils::upload::{
    content_type, is_safe_name, original_extension, public_path, sniffed_extension, stored_file_name,
};

const IMAGE_FIELD: &str = "image";
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Directory uploaded images are written to and served from.
#[derive(Debug, Clone)]
pub struct UploadDir(pub PathBuf);

fn malformed(err: MultipartError) -> AppError {
    warn!("Malformed multipart upload: {}", err);
    AppError::BadRequest(err.to_string())
}

fn disk_failure(context: &str, err: io::Error) -> AppError {
    error!("{}: {}", context, err);
    AppError::Io("Error processing file".to_string())
}

pub async fn upload_file(
    upload_dir: web::Data<UploadDir>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
        let disposition = field.content_disposition();
        let is_image = disposition.get_name() == Some(IMAGE_FIELD);
        let original = disposition
            .get_filename()
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        match (is_image, original) {
            (true, Some(original)) => {
                let stored = store_field(&upload_dir.0, &original, field).await?;
                info!("Stored upload {} as {}", original, stored);
                return Ok(HttpResponse::Ok().json(UploadedImage {
                    image_url: public_path(&stored),
                }));
            }
            _ => {
                // Skip anything that is not the image file part.
                while field.try_next().await.map_err(malformed)?.is_some() {}
            }
        }
    }

    Err(AppError::UploadMissing)
}

async fn store_field(dir: &Path, original: &str, mut field: Field) -> Result<String, AppError> {
    let first = field.try_next().await.map_err(malformed)?;
    let extension = original_extension(original)
        .or_else(|| first.as_deref().and_then(sniffed_extension))
        .unwrap_or_default();

    fs::create_dir_all(dir)
        .await
        .map_err(|err| disk_failure("Error creating upload directory", err))?;
    let (path, name, mut file) = create_unique(dir, &extension).await?;

    let written = async {
        if let Some(chunk) = first {
            file.write_all(&chunk)
                .await
                .map_err(|err| disk_failure("Error writing upload", err))?;
        }
        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            file.write_all(&chunk)
                .await
                .map_err(|err| disk_failure("Error writing upload", err))?;
        }
        file.flush()
            .await
            .map_err(|err| disk_failure("Error writing upload", err))
    }
    .await;

    if let Err(err) = written {
        drop(file);
        if let Err(cleanup) = fs::remove_file(&path).await {
            warn!("Could not remove partial upload {}: {}", path.display(), cleanup);
        }
        return Err(err);
    }

    debug!("Wrote upload to {}", path.display());
    Ok(name)
}

async fn create_unique(dir: &Path, extension: &str) -> Result<(PathBuf, String, fs::File), AppError> {
    let millis = Utc::now().timestamp_millis();

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let name = stored_file_name(millis, attempt, extension);
        let path = dir.join(&name);
        match fs::OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => return Ok((path, name, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(disk_failure("Error creating upload file", err)),
        }
    }

    error!("No free upload name for timestamp {}", millis);
    Err(AppError::Io("Error processing file".to_string()))
}

pub async fn serve_upload(
    upload_dir: web::Data<UploadDir>,
    file_name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let file_name = file_name.into_inner();
    if !is_safe_name(&file_name) {
        return Err(AppError::BadRequest("Invalid file name".to_string()));
    }

    match fs::read(upload_dir.0.join(&file_name)).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type(content_type(&bytes))
            .body(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(AppError::NotFound("File not found".to_string()))
        }
        Err(err) => {
            error!("Error reading upload {}: {}", file_name, err);
            Err(AppError::Io("Error reading file".to_string()))
        }
    }
}
