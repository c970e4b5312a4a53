//! Domain types and relationship rules shared by the `clientele` crates.

pub mod client_type;
pub mod error;
pub mod linking;
pub mod types;
