// server/src/services/image_storage_mock.rs
use super::image_storage::{stored_file_name, ImageStorage, ImageUpload};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::info;

/// Keeps uploads in memory; used by the HTTP tests.
#[derive(Debug, Default)]
pub struct MemoryImageStorage {
  prefix: String,
  files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryImageStorage {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self {
      prefix: prefix.into(),
      files: Mutex::new(HashMap::new()),
    }
  }

  pub fn file_count(&self) -> usize {
    self.files.lock().len()
  }
}

#[async_trait]
impl ImageStorage for MemoryImageStorage {
  async fn store(&self, upload: ImageUpload) -> anyhow::Result<String> {
    let stored_name = stored_file_name(&upload);
    info!("Simulating image store: {} ({} bytes)", stored_name, upload.bytes.len());
    self.files.lock().insert(stored_name.clone(), upload.bytes);
    Ok(format!("{}{}", self.prefix, stored_name))
  }

  async fn remove(&self, public_path: &str) -> anyhow::Result<()> {
    if let Some(name) = public_path.strip_prefix(&self.prefix) {
      self.files.lock().remove(name);
    }
    Ok(())
  }

  async fn load(&self, file_name: &str) -> anyhow::Result<Option<Vec<u8>>> {
    Ok(self.files.lock().get(file_name).cloned())
  }
}
