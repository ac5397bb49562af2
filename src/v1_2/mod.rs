//! Implementation of the Swagger 1.2 Specification.
//!
//! Swagger 1.2 split a single API into a Resource Listing (this module's
//! `Spec`) plus one API Declaration document per resource, each fetched
//! separately and joined under the scope of its `resourcePath`. There is no
//! single self-contained 1.2 document the way there is for 2.0/3.0.0 — the
//! resolver has to fetch every declaration before migration can proceed
//! (see `migrate::v1_2_to_2_0`).

pub mod api_declaration;
pub mod authorization;
pub mod info;
pub mod model;
pub mod operation;
pub mod parameter;
pub mod resource_listing;

pub use api_declaration::{Api, ApiDeclaration};
pub use authorization::{Authorization, GrantType, Scope};
pub use info::Info;
pub use model::Model;
pub use operation::Operation;
pub use parameter::{Items, Parameter};
pub use resource_listing::{ResourceListing, ResourceRef};
