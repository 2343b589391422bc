//! In-process backend for the kudos store.
//!
//! Records live in a single ordered collection for the lifetime of the
//! process; nothing is persisted.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryRepository;
