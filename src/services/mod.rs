// Service exports
pub mod memory;
pub mod postgres;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use seed::{seed_store, SeedSummary};
pub use store::{RecordKind, RecordStore, StoreError};
