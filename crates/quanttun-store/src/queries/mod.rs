//! Query functions over the key-value store, one module per record family.

pub mod notes;
pub mod routes;
pub mod sessions;
pub mod users;
