//! Link Object

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::helpers::{Context, PushError, ValidateWithContext};
use crate::v3_0::server::Server;
use crate::v3_0::spec::Spec;

/// The Link object represents a possible design-time link for a response.
/// The presence of a link does not guarantee the caller's ability to successfully invoke it,
/// rather it provides a known relationship and traversal mechanism between responses and
/// other operations.
///
/// Specification example:
/// ```yaml
/// operationId: getUserAddressByUUID
/// parameters:
///   userUuid: $response.body#/uuid
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Link {
    /// A relative or absolute URI reference to an OAS operation.
    /// This field is mutually exclusive of the `operationId` field, and MUST point to an
    /// `Operation Object`.
    #[serde(rename = "operationRef")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_ref: Option<String>,

    /// The name of an existing, resolvable OAS operation, as defined with a unique
    /// `operationId`.
    /// This field is mutually exclusive of the `operationRef` field.
    #[serde(rename = "operationId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// A map representing parameters to pass to an operation as specified with `operationId` or
    /// identified via `operationRef`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, serde_json::Value>>,

    /// A literal value or `{expression}` to use as a request body when calling the target
    /// operation.
    #[serde(rename = "requestBody")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A server object to be used by the target operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,

    #[serde(flatten)]
    #[serde(with = "crate::common::extensions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, serde_json::Value>>,
}

impl ValidateWithContext<Spec> for Link {
    fn validate_with_context(&self, ctx: &mut Context<Spec>, path: String) {
        if self.operation_ref.is_some() && self.operation_id.is_some() {
            ctx.error(
                path.clone(),
                ".operationRef and .operationId are mutually exclusive",
            );
        }
        if self.operation_ref.is_none() && self.operation_id.is_none() {
            ctx.error(path.clone(), "one of .operationRef or .operationId is required");
        }
        if let Some(server) = &self.server {
            server.validate_with_context(ctx, format!("{path}.server"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Options;

    #[test]
    fn test_link_roundtrip() {
        let value = serde_json::json!({
            "operationId": "getUserAddressByUUID",
            "parameters": {
                "userUuid": "$response.body#/uuid",
            },
        });
        let link = serde_json::from_value::<Link>(value.clone()).unwrap();
        assert_eq!(
            link,
            Link {
                operation_id: Some("getUserAddressByUUID".to_owned()),
                parameters: Some(BTreeMap::from([(
                    "userUuid".to_owned(),
                    serde_json::json!("$response.body#/uuid"),
                )])),
                ..Default::default()
            },
        );
        assert_eq!(serde_json::to_value(link).unwrap(), value);
    }

    #[test]
    fn test_link_requires_operation_reference() {
        let spec = Spec::default();
        let mut ctx = Context::new(&spec, Options::new());
        Link::default().validate_with_context(&mut ctx, "link".to_owned());
        assert!(!ctx.errors.is_empty());
    }
}
