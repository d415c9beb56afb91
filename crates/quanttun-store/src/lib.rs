//! Local key-value persistence for quanttun.
//!
//! All state lives in a single string-keyed, string-valued store. The
//! [`storage::Storage`] trait is the seam: production code uses
//! [`storage::JsonFileStorage`], tests substitute [`storage::MemoryStorage`].

pub mod config;
pub mod models;
pub mod queries;
pub mod storage;
