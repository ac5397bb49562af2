//! Resource Listing Object (Swagger 1.2 root document).

use serde::{Deserialize, Serialize};

use crate::common::helpers::{Context, ValidateWithContext};
use crate::v1_2::authorization::Authorization;
use crate::v1_2::info::Info;
use std::collections::BTreeMap;

/// The root document of a Swagger 1.2 API: a listing of every resource
/// (each identified by a `path` to its own API Declaration document), plus
/// shared `info` and `authorizations`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct ResourceListing {
    /// **Required** Must be `"1.2"`.
    #[serde(rename = "swaggerVersion")]
    pub swagger_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "apiVersion")]
    pub api_version: Option<String>,

    pub apis: Vec<ResourceRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<BTreeMap<String, Authorization>>,
}

/// One entry in the Resource Listing's `apis` array: the relative path to
/// that resource's own API Declaration document.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct ResourceRef {
    /// Relative path (from the Resource Listing's own URL) to the API
    /// Declaration document for this resource, e.g. `/pet`.
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl<T> ValidateWithContext<T> for ResourceListing {
    fn validate_with_context(&self, ctx: &mut Context<T>, path: String) {
        if self.swagger_version != "1.2" {
            ctx.error(
                format!("{path}.swaggerVersion"),
                format!("must be `1.2`, found `{}`", self.swagger_version),
            );
        }
        for (i, api) in self.apis.iter().enumerate() {
            if !api.path.starts_with('/') {
                ctx.error(format!("{path}.apis[{i}].path"), "must start with `/`");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let rl: ResourceListing = serde_json::from_value(serde_json::json!({
            "swaggerVersion": "1.2",
            "apis": [{"path": "/pet"}, {"path": "/store"}],
        }))
        .unwrap();
        assert_eq!(rl.apis.len(), 2);
        assert_eq!(rl.apis[0].path, "/pet");
    }
}
