//! Implementation of v2.0 Specification

pub mod external_documentation;
pub mod header;
pub mod info;
pub mod items;
pub mod operation;
pub mod parameter;
pub mod paths;
pub mod response;
pub mod schema;
pub mod security_scheme;
pub mod spec;
pub mod tag;
pub mod xml;
