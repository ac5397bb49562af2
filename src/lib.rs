//! OpenAPI Specification

pub mod app;
pub mod cache;
pub mod common;
pub mod error;
pub mod fetch;
pub mod migrate;
pub mod model;
pub mod primitive;
pub mod reloc;
pub mod resolver;
pub mod scanner;
pub mod validate;
pub mod validation;

#[cfg(feature = "v1_2")]
pub mod v1_2;

#[cfg(feature = "v2")]
pub mod v2;

#[cfg(feature = "v3_0")]
pub mod v3_0;

pub use app::App;
pub use error::Error;
pub use model::Version;
