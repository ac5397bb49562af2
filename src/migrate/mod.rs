//! Migration pipeline: moves a document from whatever version it was
//! authored in up to a requested target version.
//!
//! 1.2 -> 2.0 is a wholesale rebuild (a Resource Listing plus its API
//! Declarations becomes one 2.0 document) and emits no relocation map — the
//! original document's pointers don't correspond to anything in the 2.0
//! shape node-for-node. 2.0 -> 3.0.0 walks the tree node by node and records
//! every pointer it moves, per `crate::reloc`.

pub mod v1_2_to_2_0;
pub mod v2_0_to_3_0_0;

use serde_json::Value;

use crate::error::{Error, MigrateError};
use crate::model::node::Version;
use crate::reloc::RelocationMap;

/// Migrates `document` (currently at `from`) forward to `to`, recording any
/// pointer relocations produced along the way into `relocations` under
/// `url`. Refuses to move backward (invariant: migration is monotonic).
pub fn migrate(
    document: Value,
    from: Version,
    to: Version,
    url: &str,
    relocations: &mut RelocationMap,
) -> Result<Value, Error> {
    if to < from {
        return Err(MigrateError::Downgrade {
            from: from.to_string(),
            to: to.to_string(),
        }
        .into());
    }

    let mut current = document;
    let mut current_version = from;

    if current_version == Version::V1_2 && to >= Version::V2_0 {
        current = v1_2_to_2_0::migrate(current)?;
        current_version = Version::V2_0;
    }

    if current_version == Version::V2_0 && to >= Version::V3_0_0 {
        current = v2_0_to_3_0_0::migrate(current, url, relocations)?;
    }

    Ok(current)
}
