//! Security Scheme Object

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::helpers::{
    Context, PushError, ValidateWithContext, validate_required_string, validate_required_url,
};
use crate::v3_0::spec::Spec;

/// Defines a security scheme that can be used by the operations.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    #[serde(rename = "apiKey")]
    ApiKey(ApiKeySecurityScheme),

    #[serde(rename = "http")]
    Http(HttpSecurityScheme),

    #[serde(rename = "oauth2")]
    OAuth2(OAuth2SecurityScheme),

    #[serde(rename = "openIdConnect")]
    OpenIdConnect(OpenIdConnectSecurityScheme),
}

/// The location of the API key.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub enum ApiKeyLocation {
    #[default]
    #[serde(rename = "query")]
    Query,

    #[serde(rename = "header")]
    Header,

    #[serde(rename = "cookie")]
    Cookie,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct ApiKeySecurityScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// **Required** The name of the header, query or cookie parameter to be used.
    pub name: String,

    /// **Required** The location of the API key.
    #[serde(rename = "in")]
    pub location: ApiKeyLocation,

    #[serde(flatten)]
    #[serde(with = "crate::common::extensions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct HttpSecurityScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// **Required** The name of the HTTP Authorization scheme to be used in the
    /// `Authorization` header as defined in RFC7235.
    pub scheme: String,

    /// A hint to the client to identify how the bearer token is formatted.
    /// Bearer tokens are usually generated by an authorization server, so this information is
    /// primarily for documentation purposes.
    #[serde(rename = "bearerFormat")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,

    #[serde(flatten)]
    #[serde(with = "crate::common::extensions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct OAuth2SecurityScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// **Required** An object containing configuration information for the flow types supported.
    pub flows: OAuthFlows,

    #[serde(flatten)]
    #[serde(with = "crate::common::extensions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct OpenIdConnectSecurityScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// **Required** OpenId Connect URL to discover OAuth2 configuration values.
    #[serde(rename = "openIdConnectUrl")]
    pub open_id_connect_url: String,

    #[serde(flatten)]
    #[serde(with = "crate::common::extensions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, serde_json::Value>>,
}

/// Allows configuration of the supported OAuth Flows.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,

    #[serde(rename = "clientCredentials")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,

    #[serde(rename = "authorizationCode")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,

    #[serde(flatten)]
    #[serde(with = "crate::common::extensions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, serde_json::Value>>,
}

/// Configuration details for a supported OAuth Flow.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct OAuthFlow {
    /// **Required** for `oauth2` (`implicit`, `authorizationCode`).
    /// The authorization URL to be used for this flow.
    #[serde(rename = "authorizationUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,

    /// **Required** for `oauth2` (`password`, `clientCredentials`, `authorizationCode`).
    /// The token URL to be used for this flow.
    #[serde(rename = "tokenUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,

    /// The URL to be used for obtaining refresh tokens.
    #[serde(rename = "refreshUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,

    /// **Required** The available scopes for the OAuth2 security scheme.
    /// A map between the scope name and a short description for it.
    pub scopes: BTreeMap<String, String>,

    #[serde(flatten)]
    #[serde(with = "crate::common::extensions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, serde_json::Value>>,
}

impl ValidateWithContext<Spec> for SecurityScheme {
    fn validate_with_context(&self, ctx: &mut Context<Spec>, path: String) {
        match self {
            SecurityScheme::ApiKey(s) => s.validate_with_context(ctx, path),
            SecurityScheme::Http(s) => s.validate_with_context(ctx, path),
            SecurityScheme::OAuth2(s) => s.validate_with_context(ctx, path),
            SecurityScheme::OpenIdConnect(s) => s.validate_with_context(ctx, path),
        }
    }
}

impl ValidateWithContext<Spec> for ApiKeySecurityScheme {
    fn validate_with_context(&self, ctx: &mut Context<Spec>, path: String) {
        validate_required_string(&self.name, ctx, format!("{path}.name"));
    }
}

impl ValidateWithContext<Spec> for HttpSecurityScheme {
    fn validate_with_context(&self, ctx: &mut Context<Spec>, path: String) {
        validate_required_string(&self.scheme, ctx, format!("{path}.scheme"));
    }
}

impl ValidateWithContext<Spec> for OAuth2SecurityScheme {
    fn validate_with_context(&self, ctx: &mut Context<Spec>, path: String) {
        self.flows.validate_with_context(ctx, format!("{path}.flows"));
    }
}

impl ValidateWithContext<Spec> for OpenIdConnectSecurityScheme {
    fn validate_with_context(&self, ctx: &mut Context<Spec>, path: String) {
        validate_required_url(
            &self.open_id_connect_url,
            ctx,
            format!("{path}.openIdConnectUrl"),
        );
    }
}

impl ValidateWithContext<Spec> for OAuthFlows {
    fn validate_with_context(&self, ctx: &mut Context<Spec>, path: String) {
        if let Some(flow) = &self.implicit {
            flow.validate_with_context(ctx, format!("{path}.implicit"));
            if flow.authorization_url.is_none() {
                ctx.error(path.clone(), ".implicit.authorizationUrl: is required");
            }
        }
        if let Some(flow) = &self.password {
            flow.validate_with_context(ctx, format!("{path}.password"));
            if flow.token_url.is_none() {
                ctx.error(path.clone(), ".password.tokenUrl: is required");
            }
        }
        if let Some(flow) = &self.client_credentials {
            flow.validate_with_context(ctx, format!("{path}.clientCredentials"));
            if flow.token_url.is_none() {
                ctx.error(path.clone(), ".clientCredentials.tokenUrl: is required");
            }
        }
        if let Some(flow) = &self.authorization_code {
            flow.validate_with_context(ctx, format!("{path}.authorizationCode"));
            if flow.authorization_url.is_none() {
                ctx.error(path.clone(), ".authorizationCode.authorizationUrl: is required");
            }
            if flow.token_url.is_none() {
                ctx.error(path.clone(), ".authorizationCode.tokenUrl: is required");
            }
        }
    }
}

impl ValidateWithContext<Spec> for OAuthFlow {
    fn validate_with_context(&self, ctx: &mut Context<Spec>, path: String) {
        if let Some(url) = &self.authorization_url {
            validate_required_url(url, ctx, format!("{path}.authorizationUrl"));
        }
        if let Some(url) = &self.token_url {
            validate_required_url(url, ctx, format!("{path}.tokenUrl"));
        }
        if let Some(url) = &self.refresh_url {
            validate_required_url(url, ctx, format!("{path}.refreshUrl"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_roundtrip() {
        let value = serde_json::json!({
            "type": "apiKey",
            "name": "api_key",
            "in": "header",
        });
        let scheme = serde_json::from_value::<SecurityScheme>(value.clone()).unwrap();
        assert_eq!(
            scheme,
            SecurityScheme::ApiKey(ApiKeySecurityScheme {
                name: "api_key".to_owned(),
                location: ApiKeyLocation::Header,
                ..Default::default()
            }),
        );
        assert_eq!(serde_json::to_value(scheme).unwrap(), value);
    }

    #[test]
    fn test_oauth2_roundtrip() {
        let value = serde_json::json!({
            "type": "oauth2",
            "flows": {
                "implicit": {
                    "authorizationUrl": "https://example.com/api/oauth/dialog",
                    "scopes": {
                        "write:pets": "modify pets in your account",
                        "read:pets": "read your pets",
                    },
                },
            },
        });
        let scheme = serde_json::from_value::<SecurityScheme>(value.clone()).unwrap();
        assert_eq!(
            scheme,
            SecurityScheme::OAuth2(OAuth2SecurityScheme {
                flows: OAuthFlows {
                    implicit: Some(OAuthFlow {
                        authorization_url: Some(
                            "https://example.com/api/oauth/dialog".to_owned()
                        ),
                        scopes: BTreeMap::from([
                            ("write:pets".to_owned(), "modify pets in your account".to_owned()),
                            ("read:pets".to_owned(), "read your pets".to_owned()),
                        ]),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
        assert_eq!(serde_json::to_value(scheme).unwrap(), value);
    }
}
