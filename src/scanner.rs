//! Graph traversal: visits every reachable node of a prepared document,
//! routing each one to a `Visitor` by its structural role rather than by its
//! Rust type, since the graph is represented as `serde_json::Value`.
//!
//! Two traversal modes mirror the original's `Scanner` / `Scanner2`:
//! `Scanner` walks the live tree as found (a node discovered mid-walk may
//! itself be visited later in the same pass), `Scanner2` snapshots the
//! worklist up front so mutations made by visitors don't feed back into the
//! same pass.

use serde_json::Value;

/// The structural role of a node being visited, used to route it to the
/// right `Visitor` callback. Distinct from spec *version* — the same route
/// applies whether the document is 2.0 or 3.0.0 shaped, since both use
/// `$ref`-bearing objects and schema objects in the same structural spots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    PathItem,
    Operation,
    Parameter,
    Response,
    Schema,
    Reference,
    Other,
}

/// What a visitor wants done with the node it was just given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitAction {
    /// Continue descending into this node's children.
    Continue,
    /// Don't descend into this node's children (but siblings still run).
    Prune,
    /// Abort the entire scan immediately.
    Stop,
}

pub trait Visitor {
    /// Called once per visited node, before descending into its children.
    /// `pointer` is the node's location within the document being scanned.
    fn visit(&mut self, route: Route, pointer: &str, node: &Value) -> VisitAction;

    /// Restricts which routes this visitor is willing to receive; nodes on
    /// other routes are still traversed (so their children are reached) but
    /// are not passed to `visit`. Default: every route.
    fn accepts(&self, _route: Route) -> bool {
        true
    }
}

fn route_for(pointer: &str) -> Route {
    let segments = crate::common::pointer::jp_split(pointer);
    if segments.is_empty() {
        return Route::Root;
    }
    match segments.as_slice() {
        [top, ..] if top == "paths" && segments.len() == 2 => Route::PathItem,
        [top, _, method, ..] if top == "paths" && is_http_method(method) => {
            if segments.len() == 3 {
                Route::Operation
            } else {
                route_for_tail(&segments[3..])
            }
        }
        [top, ..] if top == "definitions" || top == "components" => Route::Schema,
        _ => Route::Other,
    }
}

fn route_for_tail(tail: &[String]) -> Route {
    match tail.first().map(String::as_str) {
        Some("parameters") => Route::Parameter,
        Some("responses") => Route::Response,
        _ => Route::Other,
    }
}

fn is_http_method(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "get" | "put" | "post" | "delete" | "options" | "head" | "patch" | "trace"
    )
}

fn node_route(value: &Value, pointer: &str) -> Route {
    if let Value::Object(map) = value {
        if map.len() == 1 && map.contains_key("$ref") {
            return Route::Reference;
        }
    }
    route_for(pointer)
}

/// Forward-only traversal: descends live, so a visitor that rewrites a
/// subtree it hasn't reached yet will see the rewritten version.
pub struct Scanner<'a, V: Visitor> {
    visitor: &'a mut V,
}

impl<'a, V: Visitor> Scanner<'a, V> {
    pub fn new(visitor: &'a mut V) -> Self {
        Self { visitor }
    }

    pub fn scan(&mut self, root: &Value) {
        self.walk(root, "#");
    }

    fn walk(&mut self, value: &Value, pointer: &str) -> bool {
        let route = node_route(value, pointer);
        let action = if self.visitor.accepts(route) {
            self.visitor.visit(route, pointer, value)
        } else {
            VisitAction::Continue
        };
        match action {
            VisitAction::Stop => return false,
            VisitAction::Prune => return true,
            VisitAction::Continue => {}
        }
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter() {
                    let child_pointer = crate::common::pointer::jp_push(pointer, key);
                    if !self.walk(child, &child_pointer) {
                        return false;
                    }
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    let child_pointer = crate::common::pointer::jp_push(pointer, &i.to_string());
                    if !self.walk(child, &child_pointer) {
                        return false;
                    }
                }
            }
            _ => {}
        }
        true
    }
}

/// Snapshotting traversal: the full worklist of `(pointer, value)` pairs is
/// collected before any `visit` call runs, so visitors that mutate a live
/// document elsewhere don't perturb this pass.
pub struct Scanner2<'a, V: Visitor> {
    visitor: &'a mut V,
}

impl<'a, V: Visitor> Scanner2<'a, V> {
    pub fn new(visitor: &'a mut V) -> Self {
        Self { visitor }
    }

    pub fn scan(&mut self, root: &Value) {
        let mut worklist = Vec::new();
        collect(root, "#", &mut worklist);
        for (pointer, value) in worklist {
            let route = node_route(&value, &pointer);
            if !self.visitor.accepts(route) {
                continue;
            }
            if self.visitor.visit(route, &pointer, &value) == VisitAction::Stop {
                break;
            }
        }
    }
}

fn collect(value: &Value, pointer: &str, out: &mut Vec<(String, Value)>) {
    out.push((pointer.to_owned(), value.clone()));
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter() {
                collect(child, &crate::common::pointer::jp_push(pointer, key), out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect(child, &crate::common::pointer::jp_push(pointer, &i.to_string()), out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Counter {
        routes: Vec<Route>,
    }

    impl Visitor for Counter {
        fn visit(&mut self, route: Route, _pointer: &str, _node: &Value) -> VisitAction {
            self.routes.push(route);
            VisitAction::Continue
        }
    }

    #[test]
    fn test_scan_visits_reference_nodes() {
        let doc = json!({
            "definitions": {
                "Pet": {"properties": {"tag": {"$ref": "#/definitions/Tag"}}},
                "Tag": {"type": "string"}
            }
        });
        let mut counter = Counter { routes: Vec::new() };
        Scanner::new(&mut counter).scan(&doc);
        assert!(counter.routes.contains(&Route::Reference));
    }

    #[test]
    fn test_prune_skips_children() {
        struct Pruner;
        impl Visitor for Pruner {
            fn visit(&mut self, route: Route, _pointer: &str, _node: &Value) -> VisitAction {
                if route == Route::Schema {
                    VisitAction::Prune
                } else {
                    VisitAction::Continue
                }
            }
        }
        let doc = json!({"definitions": {"Pet": {"properties": {"name": {"type": "string"}}}}});
        let mut counter = Counter { routes: Vec::new() };
        struct Wrap<'a>(&'a mut Counter);
        impl<'a> Visitor for Wrap<'a> {
            fn visit(&mut self, route: Route, pointer: &str, node: &Value) -> VisitAction {
                self.0.visit(route, pointer, node);
                if route == Route::Schema {
                    VisitAction::Prune
                } else {
                    VisitAction::Continue
                }
            }
        }
        let mut wrap = Wrap(&mut counter);
        Scanner::new(&mut wrap).scan(&doc);
        assert!(!counter.routes.contains(&Route::Reference));
    }

    #[test]
    fn test_stop_halts_traversal() {
        struct StopAfterFirst(usize);
        impl Visitor for StopAfterFirst {
            fn visit(&mut self, _route: Route, _pointer: &str, _node: &Value) -> VisitAction {
                self.0 += 1;
                VisitAction::Stop
            }
        }
        let doc = json!({"a": {"b": {"c": 1}}});
        let mut v = StopAfterFirst(0);
        Scanner::new(&mut v).scan(&doc);
        assert_eq!(v.0, 1);
    }

    #[test]
    fn test_scanner2_snapshots_before_visiting() {
        let doc = json!({"a": 1, "b": 2});
        let mut counter = Counter { routes: Vec::new() };
        Scanner2::new(&mut counter).scan(&doc);
        assert_eq!(counter.routes.len(), 3);
    }
}
