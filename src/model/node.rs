//! The `Node` sum type: a cached, addressable location in the object graph.

use std::fmt;
use std::sync::Arc;

/// Spec versions this crate understands, totally ordered so migration (and
/// relocation-map chaining) can walk "forward" from a document's original
/// version to any later target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    V1_2,
    V2_0,
    V3_0_0,
}

impl Version {
    pub const ALL: [Version; 3] = [Version::V1_2, Version::V2_0, Version::V3_0_0];

    pub fn parse(raw: &str) -> Option<Version> {
        match raw {
            "1.2" => Some(Version::V1_2),
            "2.0" => Some(Version::V2_0),
            "3.0.0" | "3.0.1" | "3.0.2" | "3.0.3" | "3.0.4" | "3.0" => Some(Version::V3_0_0),
            _ => None,
        }
    }

    /// Best-effort detection of a document's spec version from its root
    /// object, used right after parse/fetch before any typed deserialization
    /// is attempted.
    pub fn detect(root: &serde_json::Value) -> Option<Version> {
        if let Some(v) = root.get("swaggerVersion").and_then(|v| v.as_str()) {
            return Version::parse(v);
        }
        if let Some(v) = root.get("swagger").and_then(|v| v.as_str()) {
            return Version::parse(v);
        }
        if let Some(v) = root.get("openapi").and_then(|v| v.as_str()) {
            return Version::parse(v);
        }
        None
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V1_2 => write!(f, "1.2"),
            Version::V2_0 => write!(f, "2.0"),
            Version::V3_0_0 => write!(f, "3.0.0"),
        }
    }
}

/// An object wrapped with its `(url, pointer)` identity. Identity is
/// attached extrinsically rather than stored inside the wire type, so the
/// per-version typed structs stay plain serde structs with no cache
/// back-pointers baked in.
#[derive(Clone, Debug)]
pub struct Located<T> {
    pub url: String,
    pub pointer: String,
    pub value: T,
}

/// The state a `Reference` node carries between "the cache slot was created"
/// and "the real target landed" — see Design Notes on dummy objects.
#[derive(Clone, Debug, PartialEq)]
pub enum RefState {
    /// A cache slot reserved to break a cycle: the real object is still
    /// under construction elsewhere on the call stack.
    Constructing,
    /// Resolution finished; `target` names where the referent actually lives.
    Ready { target_url: String, target_pointer: String },
    /// Resolution was attempted and failed.
    Unresolved,
}

/// One addressable node in the graph.
#[derive(Clone, Debug)]
pub enum Node {
    /// A plain JSON subtree, addressed by pointer within its owning document.
    Value(Arc<serde_json::Value>),

    /// A `{"$ref": ...}` node. `raw` is the reference exactly as written;
    /// `normalized` is its absolute `<url>#<pointer>` form once phase 1 of
    /// resolution (§4.6) has run.
    Reference {
        raw: String,
        normalized: Option<String>,
        state: RefState,
    },

    /// A placeholder occupying a cache slot during cyclic resolution.
    Placeholder,
}

impl Node {
    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            Node::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Node::Placeholder)
    }
}
