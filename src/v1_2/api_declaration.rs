//! API Declaration Object (Swagger 1.2) — one per resource, fetched
//! separately from the Resource Listing by following each `apis[].path`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::common::helpers::{Context, ValidateWithContext};
use crate::v1_2::info::Info;
use crate::v1_2::model::Model;
use crate::v1_2::operation::Operation;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct ApiDeclaration {
    #[serde(rename = "swaggerVersion")]
    pub swagger_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "basePath")]
    pub base_path: Option<String>,

    /// **Required** The common URL prefix for every path under this
    /// resource, e.g. `/pet`. Becomes part of the 2.0 path key, scoped under
    /// it per `migrate::v1_2_to_2_0`.
    #[serde(rename = "resourcePath")]
    pub resource_path: String,

    pub apis: Vec<Api>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<BTreeMap<String, Model>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Api {
    /// Path relative to `resourcePath`, e.g. `/{petId}`.
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub operations: Vec<Operation>,
}

impl<T> ValidateWithContext<T> for ApiDeclaration {
    fn validate_with_context(&self, ctx: &mut Context<T>, path: String) {
        if self.swagger_version != "1.2" {
            ctx.error(
                format!("{path}.swaggerVersion"),
                format!("must be `1.2`, found `{}`", self.swagger_version),
            );
        }
        if !self.resource_path.starts_with('/') {
            ctx.error(format!("{path}.resourcePath"), "must start with `/`");
        }
        for (i, api) in self.apis.iter().enumerate() {
            if api.operations.is_empty() {
                ctx.error(format!("{path}.apis[{i}]"), "has no operations");
            }
        }
    }
}
