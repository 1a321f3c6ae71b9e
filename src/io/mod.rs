pub mod data_dir;
pub mod recovery;
pub mod store;

pub use store::{JsonStore, MemoryStore, Store, StoreError};
