//! The version-erased object graph: every specification document,
//! regardless of version, is represented internally as a `serde_json::Value`
//! tree addressed by JSON Pointer. The per-version typed structs
//! (`crate::v1_2`, `crate::v2`, `crate::v3_0`) remain the ergonomic, typed
//! view used at the edges — deserialized from the tree for field-level
//! validation during `App::prepare` (reusing the existing
//! `ValidateWithContext` impls). `App::root` itself stays untyped
//! (`&serde_json::Value`), since callers may hold a document mid-migration,
//! where no single typed `Spec` can describe it.
//!
//! Migration and reference resolution both operate on the untyped
//! tree, mirroring the original implementation this design distills from:
//! its migration converters return untyped dict trees too, and a JSON
//! Reference is fundamentally a pointer into a JSON tree, not into a
//! particular Rust type.

pub mod build;
pub mod dump;
pub mod node;
pub mod resolve;

pub use node::{Located, Node, Version};
