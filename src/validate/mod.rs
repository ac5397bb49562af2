//! Structural validation that spans the whole document rather than one
//! object in isolation — the existing `Validate`/`ValidateWithContext`
//! traits (see `crate::validation`, `crate::common::helpers`) already cover
//! per-object field checks; this module covers the cross-object check they
//! can't: schema-inclusion cycles.

pub mod cycle;

pub use cycle::detect_allof_cycles;
