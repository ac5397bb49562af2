//! Schema-inclusion cycle detection.
//!
//! Only `allOf` composition edges count: a schema cannot include itself
//! (directly or transitively) as a parent. A `$ref` reached through
//! `properties` or `items` is ordinary recursive structure (a `Node` can
//! legitimately point to a `Tag` that itself has a `Node` property) and is
//! *not* a cycle in this sense, even when two schemas reference each other
//! mutually through `properties.$ref`.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use crate::error::Error;

/// Detects cycles in the `allOf` parent graph of `schemas` (a
/// `definitions`/`components.schemas` map whose refs are assumed already
/// normalized to point within the same container). Returns one path per
/// cycle found, each ending back at its own start for readability.
pub fn detect_allof_cycles(schemas: &Map<String, Value>) -> Vec<Vec<String>> {
    let graph = build_allof_graph(schemas);
    let mut state: HashMap<String, VisitState> = HashMap::new();
    let mut cycles = Vec::new();

    for name in schemas.keys() {
        if !state.contains_key(name) {
            let mut stack = Vec::new();
            walk(name, &graph, &mut state, &mut stack, &mut cycles);
        }
    }
    cycles
}

/// Runs `detect_allof_cycles` and turns any findings into `Error::CycleDetection`.
pub fn check_allof_cycles(schemas: &Map<String, Value>) -> Result<(), Error> {
    let cycles = detect_allof_cycles(schemas);
    if cycles.is_empty() {
        return Ok(());
    }
    let rendered = cycles
        .iter()
        .map(|cycle| cycle.join(" -> "))
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::CycleDetection(rendered))
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    InProgress,
    Done,
}

fn build_allof_graph(schemas: &Map<String, Value>) -> HashMap<String, HashSet<String>> {
    let mut graph = HashMap::new();
    for (name, schema) in schemas.iter() {
        let mut parents = HashSet::new();
        if let Some(Value::Array(items)) = schema.get("allOf") {
            for item in items {
                if let Some(Value::String(r)) = item.get("$ref") {
                    if let Some(target) = schema_name_from_ref(r) {
                        parents.insert(target);
                    }
                }
            }
        }
        graph.insert(name.clone(), parents);
    }
    graph
}

fn schema_name_from_ref(r: &str) -> Option<String> {
    r.rsplit('/').next().map(str::to_owned)
}

fn walk(
    name: &str,
    graph: &HashMap<String, HashSet<String>>,
    state: &mut HashMap<String, VisitState>,
    stack: &mut Vec<String>,
    cycles: &mut Vec<Vec<String>>,
) {
    state.insert(name.to_owned(), VisitState::InProgress);
    stack.push(name.to_owned());

    if let Some(parents) = graph.get(name).cloned() {
        for parent in parents {
            match state.get(parent.as_str()) {
                Some(VisitState::InProgress) => {
                    let start = stack.iter().position(|s| s == &parent).unwrap_or(0);
                    let mut cycle: Vec<String> = stack[start..].to_vec();
                    cycle.push(parent);
                    cycles.push(cycle);
                }
                Some(VisitState::Done) => {}
                None => {
                    if graph.contains_key(&parent) {
                        walk(&parent, graph, state, stack, cycles);
                    }
                }
            }
        }
    }

    stack.pop();
    state.insert(name.to_owned(), VisitState::Done);
}
