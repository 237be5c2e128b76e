// server/src/services/image_storage.rs

//! Persistence of uploaded product images.
//!
//! The catalog engine only ever sees the public path returned by
//! [`ImageStorage::store`]; the bytes live wherever the implementation puts them.

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// An image file received from a client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
  /// File name as sent by the client, used only for its extension.
  pub file_name: Option<String>,
  /// MIME essence, e.g. `image/png`.
  pub content_type: String,
  pub bytes: Vec<u8>,
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
  /// Persists the upload and returns its public path (`{prefix}{stored_name}`).
  async fn store(&self, upload: ImageUpload) -> anyhow::Result<String>;

  /// Removes a previously stored image. Unknown paths are not an error.
  async fn remove(&self, public_path: &str) -> anyhow::Result<()>;

  /// Reads a stored image by its file name; `None` if it does not exist.
  async fn load(&self, file_name: &str) -> anyhow::Result<Option<Vec<u8>>>;
}

/// Writes images into a directory on the local file system.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
  dir: PathBuf,
  prefix: String,
}

impl LocalImageStorage {
  pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
    Self {
      dir: dir.into(),
      prefix: prefix.into(),
    }
  }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
  #[instrument(name = "LocalImageStorage::store", skip(self, upload), fields(content_type = %upload.content_type, size = upload.bytes.len()))]
  async fn store(&self, upload: ImageUpload) -> anyhow::Result<String> {
    let stored_name = stored_file_name(&upload);
    tokio::fs::create_dir_all(&self.dir)
      .await
      .with_context(|| format!("creating upload directory {}", self.dir.display()))?;
    let path = self.dir.join(&stored_name);
    tokio::fs::write(&path, &upload.bytes)
      .await
      .with_context(|| format!("writing upload {}", path.display()))?;
    info!("Stored uploaded image as {}", stored_name);
    Ok(format!("{}{}", self.prefix, stored_name))
  }

  async fn remove(&self, public_path: &str) -> anyhow::Result<()> {
    let file_name = public_path
      .strip_prefix(&self.prefix)
      .filter(|name| is_safe_file_name(name))
      .ok_or_else(|| anyhow!("'{}' is not a stored upload path", public_path))?;
    match tokio::fs::remove_file(self.dir.join(file_name)).await {
      Ok(()) => {
        debug!("Removed uploaded image {}", file_name);
        Ok(())
      }
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e).with_context(|| format!("removing upload {}", file_name)),
    }
  }

  async fn load(&self, file_name: &str) -> anyhow::Result<Option<Vec<u8>>> {
    if !is_safe_file_name(file_name) {
      return Ok(None);
    }
    match tokio::fs::read(self.dir.join(file_name)).await {
      Ok(bytes) => Ok(Some(bytes)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e).with_context(|| format!("reading upload {}", file_name)),
    }
  }
}

/// Random name keeping a short alphanumeric extension from the client name or
/// the content type.
pub fn stored_file_name(upload: &ImageUpload) -> String {
  let from_name = upload
    .file_name
    .as_deref()
    .and_then(|name| name.rsplit_once('.'))
    .map(|(_, ext)| ext.to_ascii_lowercase());
  let from_type = upload
    .content_type
    .strip_prefix("image/")
    .map(|subtype| subtype.split('+').next().unwrap_or(subtype).to_ascii_lowercase());
  let extension = from_name
    .into_iter()
    .chain(from_type)
    .find(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()));

  let stem = Uuid::new_v4().simple().to_string();
  match extension {
    Some(ext) => format!("{}.{}", stem, ext),
    None => stem,
  }
}

/// A single path component without traversal or hidden-file tricks.
pub fn is_safe_file_name(name: &str) -> bool {
  !name.is_empty()
    && !name.starts_with('.')
    && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

/// Content type served for a stored image, by extension.
pub fn content_type_for(file_name: &str) -> &'static str {
  let extension = file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
  match extension.as_deref() {
    Some("png") => "image/png",
    Some("jpg") | Some("jpeg") => "image/jpeg",
    Some("gif") => "image/gif",
    Some("webp") => "image/webp",
    Some("avif") => "image/avif",
    Some("bmp") => "image/bmp",
    Some("svg") => "image/svg+xml",
    _ => "application/octet-stream",
  }
}
