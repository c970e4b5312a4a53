//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Single-statement methods take any `PgExecutor` as the first argument so
//! handlers can run them against the pool or inside a transaction.

pub mod client_repo;
pub mod founder_repo;

pub use client_repo::ClientRepo;
pub use founder_repo::FounderRepo;
