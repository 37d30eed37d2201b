//! # Nebula Core
//!
//! The domain layer of the Nebula blog.
//! This crate contains the post model, the listing projection and the post
//! store, written against ports only. It performs no I/O of its own.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, StoreError};
