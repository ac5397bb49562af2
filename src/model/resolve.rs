//! Local resolution (§4.3): descend a sequence of pointer segments inside
//! one already-fetched document. Cross-document resolution (following a
//! non-empty url half of a `$ref`) is `crate::resolver`'s job; this module
//! only walks within a single tree.

use serde_json::Value;

use crate::common::pointer;

/// Resolves `pointer` within `root`, returning `None` if any segment along
/// the way is missing — the design's "failing a lookup yields a null
/// object", left to the caller to turn into a resolution error if presence
/// is required.
pub fn local_resolve<'a>(root: &'a Value, ptr: &str) -> Option<&'a Value> {
    let segments = pointer::jp_split(ptr);
    let mut current = root;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
