//! optio Core - Typed optional containers
//!
//! This crate defines the containers used throughout optio:
//! - `Optional<T>`: present (exactly one value) or absent
//! - `AsyncOptional<'a, T>`: a pending computation of an `Optional<T>`,
//!   or an already-decided absence
//! - Presence classification (`IntoOptional`, `AlwaysPresent`)
//! - JSON capability (`AsJson`) and serde support
//! - The algebraic laws both containers keep

pub mod classify;
pub mod optional;
pub mod async_optional;
pub mod json;
pub mod laws;
pub mod error;

pub use classify::*;
pub use optional::*;
pub use async_optional::*;
pub use json::*;
pub use error::*;
