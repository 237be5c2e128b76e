// server/src/services/mod.rs

pub mod image_storage;
#[cfg(test)]
pub mod image_storage_mock;
