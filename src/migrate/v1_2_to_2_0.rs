//! Swagger 1.2 (a Resource Listing plus one API Declaration per resource) to
//! Swagger 2.0 (a single document), grounded on the original
//! `scanner/v1_2/upgrade.py` converter this module distills.
//!
//! 1.2 is multi-document: the Resource Listing only names *where* to fetch
//! each resource's API Declaration. `combine` assembles those already-fetched
//! pieces into the single input shape the generic `migrate` pipeline expects;
//! `migrate` then performs the actual structural conversion.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::error::{Error, MigrateError};

/// Joins a resource scope (derived from `resourcePath`) and a bare model id
/// into the qualified name `App.m` looks models up by, per the glossary's
/// "scope separator". An empty scope leaves the name unqualified.
pub const DEFAULT_SCOPE_SEPARATOR: &str = ".";

pub fn qualify_model_name(scope: &str, model_id: &str, separator: &str) -> String {
    if scope.is_empty() {
        model_id.to_owned()
    } else {
        format!("{scope}{separator}{model_id}")
    }
}

/// Bundles a Resource Listing with its already-fetched API Declarations
/// (keyed by `resourcePath`) into the shape `migrate` consumes.
pub fn combine(listing: Value, declarations: BTreeMap<String, Value>) -> Value {
    let mut decls = Map::new();
    for (path, doc) in declarations {
        decls.insert(path, doc);
    }
    json!({
        "resourceListing": listing,
        "apiDeclarations": Value::Object(decls),
    })
}

pub fn migrate(document: Value) -> Result<Value, Error> {
    let listing = document
        .get("resourceListing")
        .cloned()
        .ok_or_else(|| MigrateError::Schema {
            path: "#".into(),
            message: "missing resourceListing".into(),
        })?;
    let declarations = document
        .get("apiDeclarations")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let info = listing.get("info").cloned();
    let decl_values: Vec<&Value> = declarations.values().collect();

    let (host, base_path) = extract_host_and_base_path(&decl_values);

    let mut paths = Map::new();
    let mut definitions = Map::new();
    let mut consumes: Vec<Value> = Vec::new();
    let mut produces: Vec<Value> = Vec::new();
    let mut sub_types: Vec<(String, String)> = Vec::new();

    for decl in decl_values.iter() {
        let scope = decl
            .get("resourcePath")
            .and_then(Value::as_str)
            .map(|p| p.trim_start_matches('/').replace('/', "."))
            .unwrap_or_default();
        if let Some(models) = decl.get("models").and_then(Value::as_object) {
            for (name, model) in models.iter() {
                let qualified = qualify_model_name(&scope, name, DEFAULT_SCOPE_SEPARATOR);
                if let Some(children) = model.get("subTypes").and_then(Value::as_array) {
                    for child in children {
                        if let Some(child_name) = child.as_str() {
                            let qualified_child =
                                qualify_model_name(&scope, child_name, DEFAULT_SCOPE_SEPARATOR);
                            sub_types.push((qualified_child, qualified.clone()));
                        }
                    }
                }
                definitions.insert(qualified, convert_model_scoped(model, &scope));
            }
        }
        if let Some(c) = decl.get("consumes").and_then(Value::as_array) {
            for v in c {
                if !consumes.contains(v) {
                    consumes.push(v.clone());
                }
            }
        }
        if let Some(p) = decl.get("produces").and_then(Value::as_array) {
            for v in p {
                if !produces.contains(v) {
                    produces.push(v.clone());
                }
            }
        }

        let resource_path = decl
            .get("resourcePath")
            .and_then(Value::as_str)
            .unwrap_or("");
        let resource_path = resource_path.strip_prefix(&base_path).unwrap_or(resource_path);

        let apis = decl.get("apis").and_then(Value::as_array).cloned().unwrap_or_default();
        for api in apis {
            let sub_path = api.get("path").and_then(Value::as_str).unwrap_or("");
            let full_path = format!("{resource_path}{sub_path}");
            let operations = api.get("operations").and_then(Value::as_array).cloned().unwrap_or_default();

            let mut path_item = paths
                .remove(&full_path)
                .and_then(|v: Value| v.as_object().cloned())
                .unwrap_or_default();

            for op in operations {
                let method = op
                    .get("method")
                    .and_then(Value::as_str)
                    .unwrap_or("GET")
                    .to_ascii_lowercase();
                path_item.insert(method, convert_operation(&op));
            }
            paths.insert(full_path, Value::Object(path_item));
        }
    }

    for (child_name, parent_name) in sub_types {
        if let Some(child) = definitions.remove(&child_name) {
            definitions.insert(child_name, apply_sub_type(child, &parent_name));
        }
    }

    let security_definitions = listing
        .get("authorizations")
        .and_then(Value::as_object)
        .map(|auths| {
            let mut out = Map::new();
            for (name, auth) in auths.iter() {
                out.insert(name.clone(), convert_authorization(auth));
            }
            out
        })
        .unwrap_or_default();

    let mut root = Map::new();
    root.insert("swagger".into(), json!("2.0"));
    if let Some(info) = info {
        root.insert("info".into(), info);
    }
    if !host.is_empty() {
        root.insert("host".into(), json!(host));
    }
    if !base_path.is_empty() {
        root.insert("basePath".into(), json!(base_path));
    }
    if !consumes.is_empty() {
        root.insert("consumes".into(), Value::Array(consumes));
    }
    if !produces.is_empty() {
        root.insert("produces".into(), Value::Array(produces));
    }
    root.insert("paths".into(), Value::Object(paths));
    if !definitions.is_empty() {
        root.insert("definitions".into(), Value::Object(definitions));
    }
    if !security_definitions.is_empty() {
        root.insert("securityDefinitions".into(), Value::Object(security_definitions));
    }

    Ok(Value::Object(root))
}

/// Converts a 1.2 Authorization Object to a 2.0 Security Scheme Object.
/// `basicAuth` becomes `type: basic`; `apiKey` carries `name`/`in` over from
/// `keyname`/`passAs`; `oauth2` picks `flow: implicit` or `flow: accessCode`
/// depending on which grant type's endpoint is present, reading the
/// `authorization_code` grant's own `tokenEndpoint`/`tokenRequestEndpoint`
/// fields for `tokenUrl`/`authorizationUrl`.
fn convert_authorization(auth: &Value) -> Value {
    let auth_type = auth.get("type").and_then(Value::as_str).unwrap_or("");
    let mut out = Map::new();

    out.insert(
        "type".into(),
        json!(if auth_type == "basicAuth" { "basic" } else { auth_type }),
    );

    let mut scopes = Map::new();
    if let Some(list) = auth.get("scopes").and_then(Value::as_array) {
        for scope in list {
            if let Some(name) = scope.get("scope").and_then(Value::as_str) {
                scopes.insert(
                    name.to_owned(),
                    scope.get("description").cloned().unwrap_or(Value::Null),
                );
            }
        }
    }

    match auth_type {
        "oauth2" => {
            out.insert("scopes".into(), Value::Object(scopes));
            let implicit_url = auth
                .pointer("/grantTypes/implicit/loginEndpoint/url")
                .and_then(Value::as_str);
            let access_code_url = auth
                .pointer("/grantTypes/authorization_code/tokenEndpoint/url")
                .and_then(Value::as_str);
            if let Some(url) = implicit_url {
                out.insert("flow".into(), json!("implicit"));
                out.insert("authorizationUrl".into(), json!(url));
            } else if let Some(url) = access_code_url {
                out.insert("flow".into(), json!("accessCode"));
                out.insert("tokenUrl".into(), json!(url));
                if let Some(auth_url) = auth
                    .pointer("/grantTypes/authorization_code/tokenRequestEndpoint/url")
                    .and_then(Value::as_str)
                {
                    out.insert("authorizationUrl".into(), json!(auth_url));
                }
            }
        }
        "apiKey" => {
            if let Some(name) = auth.get("keyname").and_then(Value::as_str) {
                out.insert("name".into(), json!(name));
            }
            if let Some(pass_as) = auth.get("passAs").and_then(Value::as_str) {
                out.insert("in".into(), json!(pass_as));
            }
        }
        _ => {}
    }

    Value::Object(out)
}

/// Splits each declaration's `basePath` into scheme+host and the remainder,
/// returning the host shared by all declarations (1.2 allows it to vary per
/// resource; 2.0 has exactly one `host`, so the first one wins) and the
/// longest common path prefix across every declaration, which becomes 2.0's
/// single `basePath`.
pub fn extract_host_and_base_path(declarations: &[&Value]) -> (String, String) {
    let mut host = String::new();
    let mut base_paths: Vec<String> = Vec::new();

    for decl in declarations {
        let Some(raw) = decl.get("basePath").and_then(Value::as_str) else {
            continue;
        };
        if let Ok(parsed) = url::Url::parse(raw) {
            if host.is_empty() {
                if let Some(h) = parsed.host_str() {
                    host = match parsed.port() {
                        Some(port) => format!("{h}:{port}"),
                        None => h.to_owned(),
                    };
                }
            }
            base_paths.push(parsed.path().trim_end_matches('/').to_owned());
        } else {
            base_paths.push(raw.trim_end_matches('/').to_owned());
        }
    }

    let base_path = common_prefix(&base_paths);
    (host, base_path)
}

fn common_prefix(paths: &[String]) -> String {
    let Some(first) = paths.first() else {
        return String::new();
    };
    let first_segments: Vec<&str> = first.split('/').collect();
    let mut prefix_len = first_segments.len();
    for path in &paths[1..] {
        let segments: Vec<&str> = path.split('/').collect();
        let shared = first_segments
            .iter()
            .zip(segments.iter())
            .take_while(|(a, b)| a == b)
            .count();
        prefix_len = prefix_len.min(shared);
    }
    first_segments[..prefix_len].join("/")
}

/// Converts a 1.2 Model to a 2.0 Schema object. `subTypes` (a list of model
/// names inheriting from this one) has no direct 2.0 equivalent: `migrate`
/// reads it off the parent before calling this function, then applies
/// `apply_sub_type` to each named child's own definition once every model is
/// converted. Here we only strip `subTypes` from the parent's own schema,
/// since 2.0 schemas don't declare their own descendants.
pub fn convert_model(model: &Value) -> Value {
    convert_model_scoped(model, "")
}

/// Like `convert_model`, but bare `$ref`s are qualified with `scope` (the
/// owning resource's scope name) so sibling models within the same resource
/// keep resolving to each other after qualification.
pub fn convert_model_scoped(model: &Value, scope: &str) -> Value {
    let mut out = model.as_object().cloned().unwrap_or_default();
    out.remove("subTypes");
    out.remove("id");
    if let Some(discriminator) = out.remove("discriminator") {
        out.insert("discriminator".into(), discriminator);
    }
    if let Some(Value::Object(props)) = out.get_mut("properties") {
        for (_, prop) in props.iter_mut() {
            rename_ref_field_scoped(prop, scope);
        }
    }
    rename_ref_field_in_place_scoped(&mut out, scope);
    Value::Object(out)
}

/// Applies the 1.2 subtype relationship by wrapping `child` in `allOf` with
/// a reference to `parent_name`, called once the full model graph is known.
pub fn apply_sub_type(child: Value, parent_name: &str) -> Value {
    json!({
        "allOf": [
            {"$ref": format!("#/definitions/{parent_name}")},
            child
        ]
    })
}

fn convert_operation(op: &Value) -> Value {
    let mut out = Map::new();
    if let Some(nickname) = op.get("nickname") {
        out.insert("operationId".into(), nickname.clone());
    }
    for key in ["summary", "notes", "produces", "consumes"] {
        if let Some(v) = op.get(key) {
            out.insert(key.into(), v.clone());
        }
    }
    if let Some(params) = op.get("parameters").and_then(Value::as_array) {
        let converted: Vec<Value> = params.iter().map(convert_parameter).collect();
        out.insert("parameters".into(), Value::Array(converted));
    }

    let mut schema = Map::new();
    rename_ref_field_in_place_from(op, &mut schema);
    if let Some(t) = op.get("type") {
        schema.insert("type".into(), t.clone());
    }
    if let Some(items) = op.get("items") {
        schema.insert("items".into(), convert_items(items));
    }
    let response_schema = if schema.is_empty() { None } else { Some(Value::Object(schema)) };

    let mut response = Map::new();
    response.insert(
        "description".into(),
        op.get("notes").cloned().unwrap_or_else(|| json!("")),
    );
    if let Some(s) = response_schema {
        response.insert("schema".into(), s);
    }
    let mut responses = Map::new();
    responses.insert("200".into(), Value::Object(response));
    out.insert("responses".into(), Value::Object(responses));

    Value::Object(out)
}

fn convert_parameter(param: &Value) -> Value {
    let mut out = param.as_object().cloned().unwrap_or_default();
    if let Some(param_type) = out.remove("paramType") {
        out.insert("in".into(), param_type);
    }
    if let Some(value_type) = out.remove("valueType") {
        out.insert("type".into(), value_type);
    }
    if let Some(items) = out.get("items").cloned() {
        out.insert("items".into(), convert_items(&items));
    }
    rename_ref_field_in_place(&mut out);
    Value::Object(out)
}

fn convert_items(items: &Value) -> Value {
    let mut out = items.as_object().cloned().unwrap_or_default();
    rename_ref_field_in_place(&mut out);
    Value::Object(out)
}

/// 1.2 used `$ref` pointing at a bare model name (e.g. `"Pet"`); 2.0 requires
/// a full JSON Reference (`"#/definitions/Pet"`).
fn rename_ref_field_in_place(map: &mut Map<String, Value>) {
    rename_ref_field_in_place_scoped(map, "")
}

fn rename_ref_field_in_place_scoped(map: &mut Map<String, Value>, scope: &str) {
    if let Some(Value::String(raw)) = map.get("$ref").cloned() {
        if !raw.starts_with('#') {
            let qualified = qualify_model_name(scope, &raw, DEFAULT_SCOPE_SEPARATOR);
            map.insert("$ref".into(), json!(format!("#/definitions/{qualified}")));
        }
    }
}

fn rename_ref_field_in_place_from(src: &Value, dst: &mut Map<String, Value>) {
    if let Some(Value::String(raw)) = src.get("$ref") {
        let full = if raw.starts_with('#') {
            raw.clone()
        } else {
            format!("#/definitions/{raw}")
        };
        dst.insert("$ref".into(), json!(full));
    }
}

fn rename_ref_field_scoped(value: &mut Value, scope: &str) {
    if let Value::Object(map) = value {
        rename_ref_field_in_place_scoped(map, scope);
    }
}
