// server/src/state.rs
use crate::config::AppConfig;
use crate::services::image_storage::ImageStorage;
use catalog::{PayloadValidator, ProductStore};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// The product store behind a single writer lock, shared by all workers.
///
/// Guards obtained here are blocking and MUST be dropped before any `.await`.
#[derive(Debug)]
pub struct SharedStore(Arc<RwLock<ProductStore>>);

impl SharedStore {
  pub fn new(store: ProductStore) -> Self {
    SharedStore(Arc::new(RwLock::new(store)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, ProductStore> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, ProductStore> {
    self.0.write()
  }
}

impl Clone for SharedStore {
  fn clone(&self) -> Self {
    SharedStore(Arc::clone(&self.0))
  }
}

#[derive(Clone)]
pub struct AppState {
  pub store: SharedStore,
  pub validator: Arc<PayloadValidator>,
  pub uploads: Arc<dyn ImageStorage>,
  pub config: Arc<AppConfig>, // Share loaded config
}
