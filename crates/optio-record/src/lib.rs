//! optio Record - Entity serialization and declarative field mapping
//!
//! This crate consumes the `AsJson` contract of `optio-core`:
//! - `Entity`: records with a self-describing field list
//! - `MappingSpec`: copy, rename, transform and nested field rules
//! - `Mapper`: runs a spec under a `MapperConfig`

pub mod entity;
pub mod mapping;
pub mod mapper;
pub mod error;

pub use entity::*;
pub use mapping::*;
pub use mapper::*;
pub use error::*;

pub use optio_core::{AsJson, OptionalError, OptionalResult};
pub use serde_json::{Map, Value};
