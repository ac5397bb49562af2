//! Authorization Object (Swagger 1.2) — predecessor of 2.0's security schemes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of `basicAuth`, `apiKey`, `oauth2`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Authorization {
    #[serde(rename = "type")]
    pub auth_type: String,

    /// Only meaningful for `apiKey`: `header` or `query`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "passAs")]
    pub pass_as: Option<String>,

    /// Only meaningful for `apiKey`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "keyname")]
    pub key_name: Option<String>,

    /// Only meaningful for `oauth2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "grantTypes")]
    pub grant_types: Option<GrantTypes>,

    /// Only meaningful for `oauth2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct GrantTypes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<GrantType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "authorization_code")]
    pub access_code: Option<GrantType>,
}

/// Describes one oauth2 flow. `token_name`/`token_request_endpoint` apply to
/// `implicit`; `token_endpoint` applies to `access_code`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct GrantType {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "loginEndpoint")]
    pub login_endpoint: Option<Endpoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "tokenName")]
    pub token_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "tokenRequestEndpoint")]
    pub token_request_endpoint: Option<Endpoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "tokenEndpoint")]
    pub token_endpoint: Option<Endpoint>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Endpoint {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "clientIdName")]
    pub client_id_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "clientSecretName")]
    pub client_secret_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "tokenName")]
    pub token_name: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Scope {
    pub scope: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub type Authorizations = BTreeMap<String, Authorization>;
