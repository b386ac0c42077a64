mod client;
mod memory;
mod models;
mod store;

pub use client::SupabaseStore;
pub use memory::MemoryStore;
pub use models::*;
pub use store::{CustomerStore, StoreError};
