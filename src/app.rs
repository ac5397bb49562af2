//! The `App` façade: the one public entry point orchestrating
//! load -> migrate -> resolve -> validate, per the design note "version as
//! data" — there is exactly one façade type, not one per spec version.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::info;

use crate::cache::Cache;
use crate::error::{Error, MigrateError};
use crate::fetch::{ContentType, DefaultGetter, Getter, UrlLoadHook};
use crate::migrate;
use crate::model::dump;
use crate::model::node::Version;
use crate::reloc::RelocationMap;
use crate::resolver::{self, DocumentStore};
use crate::validate::cycle;
use crate::validation::{Options, Validate};

pub const DEFAULT_TARGET_VERSION: Version = Version::V3_0_0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Created,
    Loaded,
    Prepared,
}

/// Orchestrates the pipeline described by the design's data-flow diagram.
/// Single-threaded during `load`/`migrate`/`prepare`; once `Prepared`,
/// `resolve`/`dump`/`op`/`m` are read-only and safe to call concurrently
/// from multiple readers (§5).
pub struct App {
    getter: Box<dyn Getter + Send + Sync>,
    url_hook: Option<UrlLoadHook>,
    cache: Cache,
    store: DocumentStore,
    relocations: RelocationMap,
    state: AppState,
    url: Option<String>,
    version: Option<Version>,
    root: Option<Value>,
    operations: BTreeMap<String, String>,
    models: BTreeMap<String, String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            getter: Box::new(DefaultGetter::default()),
            url_hook: None,
            cache: Cache::new(),
            store: DocumentStore::new(),
            relocations: RelocationMap::new(),
            state: AppState::Created,
            url: None,
            version: None,
            root: None,
            operations: BTreeMap::new(),
            models: BTreeMap::new(),
        }
    }

    pub fn with_getter(mut self, getter: Box<dyn Getter + Send + Sync>) -> Self {
        self.getter = getter;
        self
    }

    pub fn with_url_load_hook(mut self, hook: UrlLoadHook) -> Self {
        self.url_hook = Some(hook);
        self
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn version(&self) -> Option<Version> {
        self.version
    }

    pub fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }

    /// Fetches `url`, parses it, detects its spec version, and reaches
    /// `Loaded`. Does not migrate or resolve references.
    #[tracing::instrument(skip(self))]
    pub fn load(&mut self, url: &str) -> Result<&mut Self, Error> {
        let normalized = crate::common::url::normalize_url(url).map_err(|e| Error::Parse(e.to_string()))?;
        let effective = match &self.url_hook {
            Some(hook) => hook(&normalized),
            None => normalized.clone(),
        };
        let (bytes, content_type) = self.getter.load(&effective)?;
        let root = resolver::parse_document(&bytes, content_type)?;
        let version = Version::detect(&root).ok_or_else(|| {
            MigrateError::UnsupportedVersion("could not detect spec version".into())
        })?;

        self.store.insert(&normalized, root.clone());
        self.url = Some(normalized);
        self.version = Some(version);
        self.root = Some(root);
        self.state = AppState::Loaded;
        info!(version = %version, "document loaded");
        Ok(self)
    }

    /// Loads a Swagger 1.2 Resource Listing together with its already
    /// fetched API Declarations (1.2 is the one version that spans more
    /// than one document; see `migrate::v1_2_to_2_0::combine`).
    pub fn load_v1_2(
        &mut self,
        url: &str,
        listing: Value,
        declarations: BTreeMap<String, Value>,
    ) -> Result<&mut Self, Error> {
        let normalized = crate::common::url::normalize_url(url).map_err(|e| Error::Parse(e.to_string()))?;
        let combined = migrate::v1_2_to_2_0::combine(listing, declarations);
        self.store.insert(&normalized, combined.clone());
        self.url = Some(normalized);
        self.version = Some(Version::V1_2);
        self.root = Some(combined);
        self.state = AppState::Loaded;
        Ok(self)
    }

    fn require_loaded_or_prepared(&self, op: &str) -> Result<(), Error> {
        match self.state {
            AppState::Created => Err(Error::InvalidState(format!("`{op}` requires `load` first"))),
            _ => Ok(()),
        }
    }

    /// Re-runs migration to `target`, independent of `prepare`. Leaves the
    /// App in `Loaded` — callers that need the operation/model indices
    /// rebuilt must call `prepare` again afterward.
    #[tracing::instrument(skip(self))]
    pub fn migrate(&mut self, target: Version) -> Result<&mut Self, Error> {
        self.require_loaded_or_prepared("migrate")?;
        let current_version = self.version.expect("checked by require_loaded_or_prepared");
        let url = self.url.clone().expect("checked by require_loaded_or_prepared");
        let document = self.root.take().expect("checked by require_loaded_or_prepared");

        let migrated = migrate::migrate(document, current_version, target, &url, &mut self.relocations)?;
        self.store.insert(&url, migrated.clone());
        self.root = Some(migrated);
        self.version = Some(target);
        self.state = AppState::Loaded;
        Ok(self)
    }

    /// Validates, migrates to the default target version, resolves every
    /// reachable reference, and builds the operation/model indices. No
    /// partial `Prepared` state is observable: a failing call leaves the
    /// App in `Loaded`.
    #[tracing::instrument(skip(self))]
    pub fn prepare(&mut self, strict: bool) -> Result<&mut Self, Error> {
        self.require_loaded_or_prepared("prepare")?;

        if self.version != Some(DEFAULT_TARGET_VERSION) {
            self.migrate(DEFAULT_TARGET_VERSION)?;
        }

        let url = self.url.clone().expect("checked above");
        let root = self.root.clone().expect("checked above");

        validate_root(self.version.expect("checked above"), &root, strict)?;

        if let Some(schemas) = root
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(Value::as_object)
        {
            if strict {
                cycle::check_allof_cycles(schemas)?;
            } else if !cycle::detect_allof_cycles(schemas).is_empty() {
                info!("schema inclusion cycle(s) detected; continuing (non-strict)");
            }
        }

        self.cache_all_refs(&root, &url)?;
        self.build_indices(&root);

        self.state = AppState::Prepared;
        Ok(self)
    }

    /// Warms the cache with every `$ref` target reachable from `root`, and
    /// installs a `Node::Reference` link at each `$ref`'s own location so
    /// the referencing node, not just the target, is resolvable from the
    /// cache — the weak-link step of phase 2 resolution.
    fn cache_all_refs(&mut self, root: &Value, url: &str) -> Result<(), Error> {
        use crate::scanner::{Route, Scanner2, VisitAction, Visitor};

        struct RefCollector {
            refs: Vec<(String, String)>,
        }
        impl Visitor for RefCollector {
            fn visit(&mut self, route: Route, pointer: &str, node: &Value) -> VisitAction {
                if route == Route::Reference {
                    if let Some(raw) = node.get("$ref").and_then(Value::as_str) {
                        self.refs.push((pointer.to_owned(), raw.to_owned()));
                    }
                }
                VisitAction::Continue
            }
        }

        let mut collector = RefCollector { refs: Vec::new() };
        Scanner2::new(&mut collector).scan(root);

        let version = self.version.unwrap_or(DEFAULT_TARGET_VERSION);
        for (ref_pointer, raw) in collector.refs {
            let normalized = resolver::normalize_reference(&raw, url)?;
            resolver::resolve(
                &normalized,
                version,
                &mut self.cache,
                &mut self.store,
                self.getter.as_ref(),
            )?;

            let link = resolver::reference_node(&raw, url)?;
            self.cache.set(link, url, &ref_pointer, version);
        }
        Ok(())
    }

    /// Looks up the `(target_url, target_pointer)` a `$ref` found at
    /// `pointer` (within the App's own root document) resolves to, once
    /// `prepare` has warmed the cache. Returns `None` if `pointer` doesn't
    /// hold a reference or the App hasn't been prepared.
    pub fn reference_target(&self, pointer: &str) -> Option<(String, String)> {
        use crate::model::node::{Node, RefState};

        let url = self.url.as_ref()?;
        let node = self.cache.get(url, pointer, self.version?)?;
        match node {
            Node::Reference {
                state: RefState::Ready { target_url, target_pointer },
                ..
            } => Some((target_url, target_pointer)),
            _ => None,
        }
    }

    fn build_indices(&mut self, root: &Value) {
        self.operations.clear();
        self.models.clear();

        if let Some(paths) = root.get("paths").and_then(Value::as_object) {
            for (path, path_item) in paths.iter() {
                let Some(methods) = path_item.as_object() else { continue };
                for (method, operation) in methods.iter() {
                    let Some(operation_id) = operation.get("operationId").and_then(Value::as_str) else {
                        continue;
                    };
                    let pointer = crate::common::pointer::jp_compose(
                        &[path.clone(), method.clone()],
                        None,
                    );
                    self.operations.insert(operation_id.to_owned(), pointer);
                }
            }
        }

        if let Some(schemas) = root
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(Value::as_object)
        {
            for name in schemas.keys() {
                let pointer = crate::common::pointer::jp_compose(
                    &["components".to_owned(), "schemas".to_owned(), name.clone()],
                    None,
                );
                self.models.insert(name.clone(), pointer);
            }
        }
    }

    /// Resolves a `$ref` string found at the App's root document.
    pub fn resolve(&mut self, reference: &str, target_version: Option<Version>) -> Result<Value, Error> {
        let url = self.url.clone().ok_or_else(|| {
            Error::InvalidState("`resolve` requires `load` first".into())
        })?;
        let version = target_version.or(self.version).unwrap_or(DEFAULT_TARGET_VERSION);
        let normalized = resolver::normalize_reference(reference, &url)?;
        let node = resolver::resolve(&normalized, version, &mut self.cache, &mut self.store, self.getter.as_ref())?;
        node.as_value()
            .cloned()
            .ok_or_else(|| crate::error::ReferenceError::Unresolved(reference.to_owned()).into())
    }

    /// Looks up an operation by its `operationId`.
    pub fn op(&self, operation_id: &str) -> Option<&Value> {
        let pointer = self.operations.get(operation_id)?;
        crate::model::resolve::local_resolve(self.root.as_ref()?, pointer)
    }

    /// Looks up a schema by its (possibly scope-qualified) name.
    pub fn m(&self, name: &str) -> Option<&Value> {
        let pointer = self.models.get(name)?;
        crate::model::resolve::local_resolve(self.root.as_ref()?, pointer)
    }

    /// Looks up a 1.2-style resource-qualified model, joining `resource` and
    /// `model` with the default scope separator.
    pub fn m_scoped(&self, resource: &str, model: &str) -> Option<&Value> {
        let qualified = migrate::v1_2_to_2_0::qualify_model_name(
            resource,
            model,
            migrate::v1_2_to_2_0::DEFAULT_SCOPE_SEPARATOR,
        );
        self.m(&qualified)
    }

    /// Returns the current root document as an untyped tree, with explicit
    /// nulls dropped.
    pub fn dump(&self) -> Option<Value> {
        self.root.as_ref().map(dump::dump)
    }

    /// Serializes the current root document to bytes in the given format.
    pub fn dump_bytes(&self, content_type: ContentType) -> Result<Vec<u8>, Error> {
        let root = self.dump().ok_or_else(|| {
            Error::InvalidState("`dump_bytes` requires `load` first".into())
        })?;
        match content_type {
            ContentType::Json => serde_json::to_vec_pretty(&root).map_err(|e| Error::Parse(e.to_string())),
            ContentType::Yaml => serde_yaml::to_string(&root)
                .map(|s| s.into_bytes())
                .map_err(|e| Error::Parse(e.to_string())),
        }
    }

    /// Resolves a legacy pointer through every relocation recorded between
    /// `from_version` and the App's current version.
    pub fn reloc_resolve(&self, from_version: Version, pointer: &str) -> Option<String> {
        let url = self.url.as_ref()?;
        let current = self.version?;
        Some(self.relocations.resolve_chain(url, from_version, current, pointer))
    }
}

/// Runs the version-specific field/object validation rules by deserializing
/// `root` into that version's typed `Spec` and calling its `Validate` impl.
/// In strict mode, a validation failure is returned as `Error::Validation`;
/// otherwise it is logged and the caller proceeds with the document as-is.
/// `V1_2` has no typed `Spec`/`Validate` impl of its own — 1.2 documents are
/// always migrated to 2.0 or later before `prepare` reaches this point, so
/// this is only ever reached for `V2_0`/`V3_0_0`.
fn validate_root(version: Version, root: &Value, strict: bool) -> Result<(), Error> {
    let options = Options::new();
    let result = match version {
        Version::V2_0 => validate_v2(root, options),
        Version::V3_0_0 => validate_v3_0(root, options),
        Version::V1_2 => Ok(()),
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) if strict => Err(err),
        Err(err) => {
            info!(error = %err, "validation failed; continuing (non-strict)");
            Ok(())
        }
    }
}

#[cfg(feature = "v2")]
fn validate_v2(root: &Value, options: enumset::EnumSet<Options>) -> Result<(), Error> {
    serde_json::from_value::<crate::v2::spec::Spec>(root.clone())
        .map_err(|e| Error::Parse(e.to_string()))
        .and_then(|spec| spec.validate(options).map_err(Error::from))
}

#[cfg(not(feature = "v2"))]
fn validate_v2(_root: &Value, _options: enumset::EnumSet<Options>) -> Result<(), Error> {
    Ok(())
}

#[cfg(feature = "v3_0")]
fn validate_v3_0(root: &Value, options: enumset::EnumSet<Options>) -> Result<(), Error> {
    serde_json::from_value::<crate::v3_0::spec::Spec>(root.clone())
        .map_err(|e| Error::Parse(e.to_string()))
        .and_then(|spec| spec.validate(options).map_err(Error::from))
}

#[cfg(not(feature = "v3_0"))]
fn validate_v3_0(_root: &Value, _options: enumset::EnumSet<Options>) -> Result<(), Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use serde_json::json;

    struct StaticGetter(Value, ContentType);
    impl Getter for StaticGetter {
        fn load(&self, _url: &str) -> Result<(Vec<u8>, ContentType), FetchError> {
            Ok((serde_json::to_vec(&self.0).unwrap(), self.1))
        }
    }

    fn petstore_2_0() -> Value {
        json!({
            "swagger": "2.0",
            "info": {"title": "Petstore", "version": "1.0.0"},
            "paths": {
                "/pets/{id}": {
                    "get": {
                        "operationId": "getPetById",
                        "responses": {"200": {"description": "ok", "schema": {"$ref": "#/definitions/Pet"}}}
                    }
                }
            },
            "definitions": {
                "Pet": {"type": "object", "properties": {"name": {"type": "string"}}}
            }
        })
    }

    #[test]
    fn test_load_detects_version() {
        let mut app = App::new().with_getter(Box::new(StaticGetter(petstore_2_0(), ContentType::Json)));
        app.load("doc.json").unwrap();
        assert_eq!(app.state(), AppState::Loaded);
        assert_eq!(app.version(), Some(Version::V2_0));
    }

    #[test]
    fn test_prepare_migrates_to_3_0_0_and_builds_indices() {
        let mut app = App::new().with_getter(Box::new(StaticGetter(petstore_2_0(), ContentType::Json)));
        app.load("doc.json").unwrap();
        app.prepare(true).unwrap();
        assert_eq!(app.state(), AppState::Prepared);
        assert_eq!(app.version(), Some(Version::V3_0_0));
        assert!(app.op("getPetById").is_some());
        assert!(app.m("Pet").is_some());
    }

    #[test]
    fn test_prepare_before_load_errors() {
        let mut app = App::new();
        let err = app.prepare(true);
        assert!(matches!(err, Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_resolve_after_load() {
        let mut app = App::new().with_getter(Box::new(StaticGetter(petstore_2_0(), ContentType::Json)));
        app.load("doc.json").unwrap();
        let resolved = app.resolve("#/definitions/Pet", Some(Version::V2_0)).unwrap();
        assert_eq!(resolved["type"], json!("object"));
    }

    #[test]
    fn test_prepare_links_reference_node_to_target() {
        let mut app = App::new().with_getter(Box::new(StaticGetter(petstore_2_0(), ContentType::Json)));
        app.load("doc.json").unwrap();
        app.prepare(true).unwrap();
        let (target_url, target_pointer) = app
            .reference_target("#/paths/~1pets~1{id}/get/responses/200/content/application~1json/schema")
            .unwrap();
        assert!(target_url.ends_with("doc.json"));
        assert_eq!(target_pointer, "#/components/schemas/Pet");
    }

    #[test]
    fn test_dump_strips_nulls() {
        let mut app = App::new().with_getter(Box::new(StaticGetter(
            json!({"swagger": "2.0", "host": null, "paths": {}}),
            ContentType::Json,
        )));
        app.load("doc.json").unwrap();
        let dumped = app.dump().unwrap();
        assert!(dumped.get("host").is_none());
    }
}
