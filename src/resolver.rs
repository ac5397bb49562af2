//! JSON Reference resolution, in two phases:
//!
//! 1. **Normalize** — turn whatever a `$ref` says (relative path, bare
//!    pointer, absolute URL+pointer) into an absolute `<url>#<pointer>` form,
//!    joined against the document it appears in.
//! 2. **Resolve** — fetch (and parse, and cache) the target document if it
//!    isn't already cached, then walk the pointer down to the target node,
//!    guarding against cyclic references with a `Constructing` placeholder.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::cache::Cache;
use crate::common::{pointer, url as urlutil};
use crate::error::{Error, ReferenceError};
use crate::fetch::{ContentType, Getter};
use crate::model::node::{Node, RefState, Version};

/// Parses fetched bytes per their content-type hint into a generic tree.
pub fn parse_document(bytes: &[u8], content_type: ContentType) -> Result<Value, Error> {
    match content_type {
        ContentType::Json => {
            serde_json::from_slice(bytes).map_err(|e| Error::Parse(e.to_string()))
        }
        ContentType::Yaml => {
            serde_yaml::from_slice(bytes).map_err(|e| Error::Parse(e.to_string()))
        }
    }
}

/// Normalizes a `$ref` string found at `(containing_url, containing_pointer)`
/// into an absolute `<url>#<pointer>` reference.
pub fn normalize_reference(raw: &str, containing_url: &str) -> Result<String, ReferenceError> {
    if raw.is_empty() {
        return Err(ReferenceError::Empty);
    }
    let (url_half, pointer_half) = pointer::jr_split(raw);
    let absolute_url = if url_half.is_empty() {
        containing_url.to_owned()
    } else {
        urlutil::url_join(containing_url, url_half)
            .map_err(|_| ReferenceError::Invalid(raw.to_owned()))?
    };
    Ok(pointer::jr_compose(&absolute_url, pointer_half))
}

/// Holds the documents fetched so far, keyed by normalized URL, so a
/// resolution pass can re-descend into an already-fetched root without
/// refetching it.
pub struct DocumentStore {
    documents: HashMap<String, Arc<Value>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    pub fn get_or_fetch(
        &mut self,
        url: &str,
        getter: &dyn Getter,
    ) -> Result<Arc<Value>, Error> {
        if let Some(doc) = self.documents.get(url) {
            return Ok(doc.clone());
        }
        let (bytes, content_type) = getter.load(url)?;
        let value = parse_document(&bytes, content_type)?;
        let arc = Arc::new(value);
        self.documents.insert(url.to_owned(), arc.clone());
        Ok(arc)
    }

    pub fn insert(&mut self, url: &str, value: Value) {
        self.documents.insert(url.to_owned(), Arc::new(value));
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a normalized `<url>#<pointer>` reference to its target node,
/// using `cache` as the sole source of truth for in-flight (cyclic)
/// resolutions and `store`/`getter` to obtain documents not yet cached.
///
/// On first encountering `(url, pointer)`, a `Constructing` placeholder is
/// recorded before descending, so a reference cycle resolves to that
/// placeholder rather than recursing forever; the caller is expected to
/// replace it with `Ready` once the real target is known.
pub fn resolve(
    normalized: &str,
    version: Version,
    cache: &mut Cache,
    store: &mut DocumentStore,
    getter: &dyn Getter,
) -> Result<Node, Error> {
    let (target_url, target_pointer) = pointer::jr_split(normalized);
    let target_url = if target_url.is_empty() {
        return Err(ReferenceError::Invalid(normalized.to_owned()).into());
    } else {
        target_url.to_owned()
    };
    let target_pointer = if target_pointer.is_empty() {
        "#".to_owned()
    } else {
        target_pointer.to_owned()
    };

    if let Some(node) = cache.get(&target_url, &target_pointer, version) {
        return Ok(node);
    }

    cache.set(Node::Placeholder, &target_url, &target_pointer, version);

    let root = store.get_or_fetch(&target_url, getter)?;
    let segments = pointer::jp_split(&target_pointer);
    let json_ptr = json_pointer_from_segments(&segments);
    let found = root
        .pointer(&json_ptr)
        .ok_or_else(|| ReferenceError::Unresolved(normalized.to_owned()))?;

    let node = Node::Value(Arc::new(found.clone()));
    cache.set(node.clone(), &target_url, &target_pointer, version);
    Ok(node)
}

/// Builds a `Node::Reference` for a `{"$ref": raw}` object found while
/// scanning, recording the normalized form it resolves to. Resolution
/// itself (phase 2) is deferred to `resolve`, called once per unique
/// normalized target.
pub fn reference_node(raw: &str, containing_url: &str) -> Result<Node, Error> {
    let normalized = normalize_reference(raw, containing_url)?;
    let (target_url, target_pointer) = pointer::jr_split(&normalized);
    Ok(Node::Reference {
        raw: raw.to_owned(),
        normalized: Some(normalized.clone()),
        state: RefState::Ready {
            target_url: target_url.to_owned(),
            target_pointer: if target_pointer.is_empty() {
                "#".to_owned()
            } else {
                target_pointer.to_owned()
            },
        },
    })
}

fn json_pointer_from_segments(segments: &[String]) -> String {
    let mut s = String::new();
    for seg in segments {
        s.push('/');
        s.push_str(&pointer::escape_segment(seg));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use serde_json::json;

    struct StaticGetter(std::collections::HashMap<String, (Vec<u8>, ContentType)>);

    impl Getter for StaticGetter {
        fn load(&self, url: &str) -> Result<(Vec<u8>, ContentType), FetchError> {
            self.0
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Unreachable(url.to_owned(), "not found".into()))
        }
    }

    #[test]
    fn test_normalize_reference_same_document() {
        let n = normalize_reference("#/definitions/Pet", "doc.json").unwrap();
        assert_eq!(n, "doc.json#/definitions/Pet");
    }

    #[test]
    fn test_normalize_reference_cross_document() {
        let n = normalize_reference("other.json#/Pet", "https://h/dir/doc.json").unwrap();
        assert_eq!(n, "https://h/dir/other.json#/Pet");
    }

    #[test]
    fn test_normalize_reference_empty_is_error() {
        assert_eq!(normalize_reference("", "doc.json"), Err(ReferenceError::Empty));
    }

    #[test]
    fn test_resolve_same_document() {
        let mut docs = std::collections::HashMap::new();
        docs.insert(
            "doc.json".to_owned(),
            (
                serde_json::to_vec(&json!({"definitions": {"Pet": {"type": "object"}}})).unwrap(),
                ContentType::Json,
            ),
        );
        let getter = StaticGetter(docs);
        let mut cache = Cache::new();
        let mut store = DocumentStore::new();
        let node = resolve(
            "doc.json#/definitions/Pet",
            Version::V2_0,
            &mut cache,
            &mut store,
            &getter,
        )
        .unwrap();
        assert_eq!(node.as_value().unwrap(), &json!({"type": "object"}));
    }

    #[test]
    fn test_resolve_unreachable_document_errors() {
        let getter = StaticGetter(std::collections::HashMap::new());
        let mut cache = Cache::new();
        let mut store = DocumentStore::new();
        let err = resolve(
            "missing.json#/x",
            Version::V2_0,
            &mut cache,
            &mut store,
            &getter,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_resolve_missing_pointer_errors() {
        let mut docs = std::collections::HashMap::new();
        docs.insert(
            "doc.json".to_owned(),
            (serde_json::to_vec(&json!({})).unwrap(), ContentType::Json),
        );
        let getter = StaticGetter(docs);
        let mut cache = Cache::new();
        let mut store = DocumentStore::new();
        let err = resolve(
            "doc.json#/nope",
            Version::V2_0,
            &mut cache,
            &mut store,
            &getter,
        );
        assert!(matches!(err, Err(Error::Reference(ReferenceError::Unresolved(_)))));
    }
}
