//! Model Object (Swagger 1.2) — migrates into a `#/definitions` Schema in 2.0.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::v1_2::parameter::Items;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Model {
    /// **Required** Unique name for this model within its resource.
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Property>>,

    /// Names of models that inherit from this one (polymorphism). Each
    /// becomes its own `Model` entry in the declaration with `subTypes`
    /// pointing back here via `discriminator`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "subTypes")]
    pub sub_types: Option<Vec<String>>,

    /// Name of the property used to discriminate between `subTypes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct Property {
    #[serde(rename = "$ref")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub prop_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

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
    #[serde(rename = "defaultValue")]
    pub default_value: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}
