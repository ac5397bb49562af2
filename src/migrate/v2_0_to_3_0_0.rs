//! Swagger 2.0 to OpenAPI 3.0.0, grounded on the original
//! `migration/versions/v3_0_0/main.py` converter.
//!
//! Unlike the 1.2 step, this one preserves most of the document's shape —
//! only a handful of top-level containers move (`definitions` ->
//! `components.schemas`, global `parameters`/`responses` ->
//! `components.parameters`/`components.responses`,
//! `securityDefinitions` -> `components.securitySchemes`) — so every moved
//! pointer is recorded in the relocation map and every `$ref` in the
//! document is rewritten to match, before a final pass inlines any Path
//! Item that is itself a bare `$ref`.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::common::pointer;
use crate::error::Error;
use crate::model::node::Version;
use crate::reloc::RelocationMap;

const MOVES: &[(&str, &str)] = &[
    ("#/definitions", "#/components/schemas"),
    ("#/parameters", "#/components/parameters"),
    ("#/responses", "#/components/responses"),
    ("#/securityDefinitions", "#/components/securitySchemes"),
];

pub fn migrate(document: Value, url: &str, relocations: &mut RelocationMap) -> Result<Value, Error> {
    let mut root = document.as_object().cloned().unwrap_or_default();

    root.insert("openapi".into(), json!("3.0.0"));
    root.remove("swagger");

    convert_host_to_servers(&mut root);

    let mut components = root
        .remove("components")
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();

    for (name, container_key) in [
        ("definitions", "schemas"),
        ("parameters", "parameters"),
        ("responses", "responses"),
        ("securityDefinitions", "securitySchemes"),
    ] {
        if let Some(Value::Object(items)) = root.remove(name) {
            let mut container = components
                .remove(container_key)
                .and_then(|v| v.as_object().cloned())
                .unwrap_or_default();
            for (item_name, item_value) in items {
                let old_pointer = pointer::jp_push(&format!("#/{name}"), &item_name);
                let new_pointer = pointer::jp_push(&format!("#/components/{container_key}"), &item_name);
                relocations.record(url, Version::V3_0_0, &old_pointer, &new_pointer);
                container.insert(item_name, item_value);
            }
            components.insert(container_key.into(), Value::Object(container));
        }
    }
    if !components.is_empty() {
        root.insert("components".into(), Value::Object(components));
    }

    if let Some(Value::Object(paths)) = root.get_mut("paths") {
        for (_, path_item) in paths.iter_mut() {
            convert_path_item(path_item);
        }
    }

    let mut value = Value::Object(root);
    rewrite_refs(&mut value, url, relocations);
    merge_path_item_refs(&mut value);
    Ok(value)
}

/// Inlines any Path Item that is itself a bare `$ref` (`{"$ref": "#/..."}`)
/// by copying the target Path Item's fields into the referring one. Fields
/// already present on the referring item win, matching the Path Item
/// Object's own sibling-field-overrides-`$ref` semantics. Only same-document
/// (`#/...`) targets are merged — an external Path Item reference is left
/// as-is, consistent with this pass's single-document scope.
fn merge_path_item_refs(value: &mut Value) {
    let snapshot = value.clone();
    let Some(paths) = value.get_mut("paths").and_then(Value::as_object_mut) else {
        return;
    };
    for (_, path_item) in paths.iter_mut() {
        let Value::Object(map) = path_item else { continue };
        let Some(Value::String(raw)) = map.get("$ref").cloned() else { continue };
        let (ref_url, ref_pointer) = pointer::jr_split(&raw);
        if !ref_url.is_empty() {
            continue;
        }
        let Some(Value::Object(target)) = resolve_local_pointer(&snapshot, ref_pointer) else {
            continue;
        };
        map.remove("$ref");
        for (key, val) in target {
            map.entry(key).or_insert(val);
        }
    }
}

/// Resolves a `#`-prefixed JSON Pointer against `root`. `$ref` escaping
/// (`~0`/`~1`) already matches RFC 6901, so the pointer half can be handed to
/// `serde_json::Value::pointer` directly once the leading `#` is stripped.
fn resolve_local_pointer(root: &Value, pointer: &str) -> Option<Value> {
    let rest = pointer.strip_prefix('#').unwrap_or(pointer);
    if rest.is_empty() {
        return Some(root.clone());
    }
    root.pointer(rest).cloned()
}

/// `host` + `basePath` + `schemes` becomes a `servers` list, one entry per
/// scheme (defaulting to `https` if no scheme was given).
fn convert_host_to_servers(root: &mut Map<String, Value>) {
    let host = root.remove("host").and_then(|v| v.as_str().map(str::to_owned));
    let base_path = root
        .remove("basePath")
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default();
    let schemes = root
        .remove("schemes")
        .and_then(|v| v.as_array().cloned())
        .unwrap_or_else(|| vec![json!("https")]);

    let Some(host) = host else { return };

    let servers: Vec<Value> = schemes
        .iter()
        .filter_map(Value::as_str)
        .map(|scheme| json!({"url": format!("{scheme}://{host}{base_path}")}))
        .collect();
    if !servers.is_empty() {
        root.insert("servers".into(), Value::Array(servers));
    }
}

fn convert_path_item(path_item: &mut Value) {
    let Value::Object(methods) = path_item else { return };
    for (key, operation) in methods.iter_mut() {
        if !is_http_method(key) {
            continue;
        }
        convert_operation(operation);
    }
}

fn is_http_method(s: &str) -> bool {
    matches!(
        s,
        "get" | "put" | "post" | "delete" | "options" | "head" | "patch" | "trace"
    )
}

fn convert_operation(operation: &mut Value) {
    let Value::Object(op) = operation else { return };
    let produces = op.remove("produces").and_then(|v| v.as_array().cloned());
    let consumes = op.remove("consumes").and_then(|v| v.as_array().cloned());

    let mut body_param = None;
    if let Some(Value::Array(params)) = op.get_mut("parameters") {
        let mut kept = Vec::new();
        for param in params.drain(..) {
            if param.get("in").and_then(Value::as_str) == Some("body") {
                body_param = Some(param);
            } else {
                kept.push(convert_non_body_parameter(param));
            }
        }
        *params = kept;
    }
    if let Some(body) = body_param {
        op.insert(
            "requestBody".into(),
            build_request_body(body, consumes.as_deref()),
        );
    }
    if matches!(op.get("parameters"), Some(Value::Array(p)) if p.is_empty()) {
        op.remove("parameters");
    }

    if let Some(Value::Object(responses)) = op.get_mut("responses") {
        for (_, response) in responses.iter_mut() {
            convert_response(response, produces.as_deref());
        }
    }
}

fn convert_non_body_parameter(param: Value) -> Value {
    let Value::Object(mut map) = param else { return param };
    if let Some(collection_format) = map.remove("collectionFormat") {
        let (style, explode) = style_for_collection_format(
            collection_format.as_str().unwrap_or("csv"),
        );
        map.insert("style".into(), json!(style));
        map.insert("explode".into(), json!(explode));
    }
    Value::Object(map)
}

fn style_for_collection_format(format: &str) -> (&'static str, bool) {
    match format {
        "csv" => ("form", false),
        "ssv" => ("spaceDelimited", false),
        "pipes" => ("pipeDelimited", false),
        "multi" => ("form", true),
        _ => ("form", false),
    }
}

fn build_request_body(body_param: Value, consumes: Option<&[Value]>) -> Value {
    let schema = body_param.get("schema").cloned().unwrap_or(json!({}));
    let media_types = consumes
        .map(|v| v.to_vec())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec![json!("application/json")]);

    let mut content = Map::new();
    for mt in media_types {
        if let Some(name) = mt.as_str() {
            content.insert(name.to_owned(), json!({"schema": schema.clone()}));
        }
    }
    let required = body_param.get("required").cloned().unwrap_or(json!(false));
    json!({"content": content, "required": required})
}

fn convert_response(response: &mut Value, produces: Option<&[Value]>) {
    let Value::Object(resp) = response else { return };
    let Some(schema) = resp.remove("schema") else { return };
    let media_types = produces
        .map(|v| v.to_vec())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec![json!("application/json")]);
    let mut content = Map::new();
    for mt in media_types {
        if let Some(name) = mt.as_str() {
            content.insert(name.to_owned(), json!({"schema": schema.clone()}));
        }
    }
    resp.insert("content".into(), Value::Object(content));
}

/// Rewrites every `$ref` string in `value` whose target moved, using the
/// relocation map just populated by this same pass.
fn rewrite_refs(value: &mut Value, url: &str, relocations: &RelocationMap) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(raw)) = map.get("$ref").cloned() {
                let (ref_url, ref_pointer) = pointer::jr_split(&raw);
                if ref_url.is_empty() {
                    if let Some(resolved) = find_move(ref_pointer, relocations, url) {
                        map.insert("$ref".into(), json!(resolved));
                    }
                }
            }
            for (_, child) in map.iter_mut() {
                rewrite_refs(child, url, relocations);
            }
        }
        Value::Array(items) => {
            for child in items.iter_mut() {
                rewrite_refs(child, url, relocations);
            }
        }
        _ => {}
    }
}

fn find_move(pointer: &str, relocations: &RelocationMap, url: &str) -> Option<String> {
    relocations.resolve_if_moved(url, Version::V3_0_0, pointer)
}
