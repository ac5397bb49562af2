//! Parameter and Items Objects (Swagger 1.2).
//!
//! Unlike 2.0, a single `Parameter` struct carries every `paramType`
//! (`path`, `query`, `header`, `body`, `form`) — the version didn't yet
//! discriminate by shape the way 2.0's `in` does.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Parameter {
    /// One of `path`, `query`, `body`, `header`, `form`.
    #[serde(rename = "paramType")]
    pub param_type: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Present when this parameter's type is itself a model reference
    /// (mainly `body` parameters).
    #[serde(rename = "$ref")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub param_value_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "allowMultiple")]
    pub allow_multiple: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Items>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "uniqueItems")]
    pub unique_items: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "defaultValue")]
    pub default_value: Option<serde_json::Value>,
}

/// Describes the element type of an `array`-typed `Parameter`/`Model` property.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Items {
    #[serde(rename = "$ref")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub item_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
