//! Implementation of OpenAPI v3.0.X Specification
//!
//! Full specification can be found [here](https://spec.openapis.org/oas/v3.0.3).
pub mod callback;
pub mod components;
pub mod discriminator;
pub mod example;
pub mod external_documentation;
pub mod header;
pub mod info;
pub mod link;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod path_item;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod security_scheme;
pub mod server;
pub mod spec;
pub mod tag;
pub mod xml;
