//! Port contracts for image storage.

pub mod store;

pub use store::{ImageStore, ImageStoreError, ImageStoreResult};
