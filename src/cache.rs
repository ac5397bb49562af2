//! Prepared-object cache: `(url, json-pointer, version) -> Node`.
//!
//! Mirrors the original implementation's `SpecObjCache`, with one
//! deliberate deviation: prefix lookup here prefers the **longest**
//! matching prefix, for determinism, rather than the first one a hash map
//! iteration happens to produce.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::common::pointer;
use crate::model::node::{Node, Version};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CacheError {
    #[error("get_under with remove=true requires a non-empty pointer")]
    RemoveRequiresPointer,
}

/// `url -> pointer -> version -> Node`. `BTreeMap` throughout so iteration
/// (longest-prefix scans, dumps) is deterministic without a separate sort.
#[derive(Default)]
pub struct Cache {
    entries: BTreeMap<String, BTreeMap<String, BTreeMap<Version, Node>>>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `node` at the given key. Last writer wins.
    pub fn set(&mut self, node: Node, url: &str, pointer: &str, version: Version) {
        self.entries
            .entry(url.to_owned())
            .or_default()
            .entry(pointer.to_owned())
            .or_default()
            .insert(version, node);
    }

    /// Looks up `(url, pointer, version)`. Falls back to the longest cached
    /// prefix pointer under `url` whose remainder resolves inside the cached
    /// node via local (JSON-pointer) descent.
    pub fn get(&self, url: &str, pointer: &str, version: Version) -> Option<Node> {
        let url_cache = self.entries.get(url)?;

        if let Some(by_version) = url_cache.get(pointer) {
            if let Some(node) = by_version.get(&version) {
                return Some(node.clone());
            }
        }

        let mut best: Option<(&str, &Node)> = None;
        for (cached_pointer, by_version) in url_cache.iter() {
            if !pointer::starts_with_prefix(pointer, cached_pointer) {
                continue;
            }
            let Some(node) = by_version.get(&version) else {
                continue;
            };
            let better = match best {
                None => true,
                Some((best_pointer, _)) => cached_pointer.len() > best_pointer.len(),
            };
            if better {
                best = Some((cached_pointer, node));
            }
        }

        let (prefix, node) = best?;
        if prefix == pointer {
            return Some(node.clone());
        }
        let remainder_segments = pointer::remainder(pointer, prefix);
        let value = node.as_value()?;
        let remainder_pointer = json_pointer_str(&remainder_segments);
        let resolved = value.pointer(&remainder_pointer)?;
        Some(Node::Value(std::sync::Arc::new(resolved.clone())))
    }

    /// Collects every cached entry under `url` whose pointer starts with
    /// `pointer`, keyed by the pointer remainder, optionally removing them.
    pub fn get_under(
        &mut self,
        url: &str,
        pointer: &str,
        version: Version,
        remove: bool,
    ) -> Result<BTreeMap<String, Node>, CacheError> {
        if remove && pointer.is_empty() {
            return Err(CacheError::RemoveRequiresPointer);
        }

        let mut out = BTreeMap::new();
        let Some(url_cache) = self.entries.get_mut(url) else {
            return Ok(out);
        };

        let mut to_remove = Vec::new();
        for (cached_pointer, by_version) in url_cache.iter_mut() {
            if cached_pointer == pointer || !pointer::starts_with_prefix(cached_pointer, pointer) {
                continue;
            }
            if let Some(node) = by_version.get(&version) {
                let rest = pointer::remainder(cached_pointer, pointer);
                out.insert(json_pointer_str(&rest).trim_start_matches('/').to_owned(), node.clone());
                if remove {
                    to_remove.push(cached_pointer.clone());
                }
            }
        }
        for p in to_remove {
            if let Some(by_version) = url_cache.get_mut(&p) {
                by_version.remove(&version);
            }
        }
        Ok(out)
    }
}

fn json_pointer_str(segments: &[String]) -> String {
    let mut s = String::new();
    for seg in segments {
        s.push('/');
        s.push_str(&seg.replace('~', "~0").replace('/', "~1"));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value_node(v: serde_json::Value) -> Node {
        Node::Value(std::sync::Arc::new(v))
    }

    #[test]
    fn test_set_get_exact() {
        let mut cache = Cache::new();
        cache.set(value_node(json!({"a": 1})), "u", "#", Version::V3_0_0);
        let got = cache.get("u", "#", Version::V3_0_0).unwrap();
        assert_eq!(got.as_value().unwrap(), &json!({"a": 1}));
    }

    #[test]
    fn test_get_missing_version() {
        let mut cache = Cache::new();
        cache.set(value_node(json!({"a": 1})), "u", "#", Version::V2_0);
        assert!(cache.get("u", "#", Version::V3_0_0).is_none());
    }

    #[test]
    fn test_prefix_lookup_longest_wins() {
        let mut cache = Cache::new();
        cache.set(
            value_node(json!({"schemas": {"Pet": {"type": "object"}}})),
            "u",
            "#/components",
            Version::V3_0_0,
        );
        cache.set(
            value_node(json!({"type": "object", "properties": {}})),
            "u",
            "#/components/schemas/Pet",
            Version::V3_0_0,
        );
        let got = cache
            .get("u", "#/components/schemas/Pet", Version::V3_0_0)
            .unwrap();
        // the longer (exact) entry wins over the coarser "#/components" one
        assert_eq!(got.as_value().unwrap()["type"], json!("object"));
        assert!(got.as_value().unwrap().get("properties").is_some());
    }

    #[test]
    fn test_prefix_lookup_descends_into_coarser_entry() {
        let mut cache = Cache::new();
        cache.set(
            value_node(json!({"schemas": {"Pet": {"type": "object"}}})),
            "u",
            "#/components",
            Version::V3_0_0,
        );
        let got = cache
            .get("u", "#/components/schemas/Pet", Version::V3_0_0)
            .unwrap();
        assert_eq!(got.as_value().unwrap(), &json!({"type": "object"}));
    }

    #[test]
    fn test_get_under_remove_empty_pointer_fails() {
        let mut cache = Cache::new();
        cache.set(value_node(json!(1)), "u", "#/a", Version::V2_0);
        let err = cache.get_under("u", "", Version::V2_0, true).unwrap_err();
        assert_eq!(err, CacheError::RemoveRequiresPointer);
    }

    #[test]
    fn test_get_under_idempotent_remove() {
        let mut cache = Cache::new();
        cache.set(value_node(json!(1)), "u", "#/a/b", Version::V2_0);
        cache.set(value_node(json!(2)), "u", "#/a/c", Version::V2_0);
        let first = cache.get_under("u", "#/a", Version::V2_0, true).unwrap();
        assert_eq!(first.len(), 2);
        let second = cache.get_under("u", "#/a", Version::V2_0, true).unwrap();
        assert!(second.is_empty());
    }
}
