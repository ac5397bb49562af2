//! Construction protocol (§4.3 steps 1-4), realized over the version-erased
//! tree: a node's shape (`$ref` vs. plain value) is all that distinguishes a
//! `Reference` from a `Value`, since field/child classification is owned by
//! the per-version typed structs layered on top, not by this generic graph.

use std::sync::Arc;

use serde_json::Value;

use crate::model::node::Node;

/// Builds the `Node` found at `pointer` within `tree`. `overrides` installs
/// previously materialized objects at specific sub-pointers without
/// reconstructing them (step 3 of the construction protocol) — used by the
/// resolver to drop a finished object into the slot a `Placeholder` left
/// behind.
pub fn build_node(tree: &Value, pointer: &str, overrides: &[(String, Node)]) -> Node {
    for (override_pointer, node) in overrides {
        if override_pointer == pointer {
            return node.clone();
        }
    }

    if let Value::Object(map) = tree {
        if map.len() == 1 {
            if let Some(Value::String(raw)) = map.get("$ref") {
                return Node::Reference {
                    raw: raw.clone(),
                    normalized: None,
                    state: crate::model::node::RefState::Unresolved,
                };
            }
        }
    }

    Node::Value(Arc::new(tree.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_plain_value() {
        let tree = json!({"type": "string"});
        let node = build_node(&tree, "#/x", &[]);
        assert_eq!(node.as_value(), Some(&tree));
    }

    #[test]
    fn test_build_reference_node() {
        let tree = json!({"$ref": "#/definitions/Pet"});
        let node = build_node(&tree, "#/x", &[]);
        assert!(matches!(node, Node::Reference { .. }));
    }

    #[test]
    fn test_override_wins_over_tree() {
        let tree = json!({"type": "string"});
        let overridden = Node::Value(Arc::new(json!({"type": "integer"})));
        let node = build_node(&tree, "#/x", &[("#/x".to_owned(), overridden)]);
        assert_eq!(node.as_value().unwrap()["type"], json!("integer"));
    }
}
