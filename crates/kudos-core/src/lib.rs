//! Core types and trait definitions for the kudos feed.
//!
//! This crate is free of HTTP and storage-backend dependencies. Every other
//! crate depends on it; the repository backend is chosen by the caller.

pub mod clock;
pub mod directory;
pub mod error;
pub mod feed;
pub mod fixtures;
pub mod id;
pub mod kudos;
pub mod repository;
pub mod store;

pub use error::{Error, Result, ValidationError};
