//! Core types and trait definitions for the Folio portfolio backend.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! Every other crate depends on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod chat;
pub mod contact;
pub mod error;
pub mod id;
pub mod portfolio;
pub mod store;
pub mod user;

pub use error::{Error, Result};
pub use id::Id;
