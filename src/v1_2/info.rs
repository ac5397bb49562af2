//! Info Object (Swagger 1.2)

use serde::{Deserialize, Serialize};

use crate::common::helpers::{Context, ValidateWithContext, validate_required_string};

/// General metadata about the API, shared by the Resource Listing.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Info {
    /// **Required** A unique and precise title of the API.
    pub title: String,

    /// A semantic version number of the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "termsOfServiceUrl")]
    pub terms_of_service_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "licenseUrl")]
    pub license_url: Option<String>,
}

impl<T> ValidateWithContext<T> for Info {
    fn validate_with_context(&self, ctx: &mut Context<T>, path: String) {
        validate_required_string(&self.title, ctx, format!("{path}.title"));
    }
}
