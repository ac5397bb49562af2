//! Named external collaborators the façade depends on through traits rather
//! than concrete types, mirroring how the original implementation's
//! `App` takes a pluggable `prim_factory` — here narrowed to what this
//! design actually needs pluggable: how a parsed body maps to bytes on the
//! wire and back (`MimeCodec`) and the content-type-detection policy used
//! when a fetch response doesn't name one explicitly.

use serde_json::Value;

use crate::fetch::ContentType;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum CodecError {
    #[error("failed to encode document: {0}")]
    Encode(String),
    #[error("failed to decode document: {0}")]
    Decode(String),
}

/// Encodes/decodes a document tree to/from a wire format. The default
/// `JsonYamlCodec` below handles both formats this design supports; a test
/// or embedding crate can swap in something else (e.g. to round-trip through
/// a custom canonical form) without touching the resolver or migrator.
pub trait MimeCodec {
    fn decode(&self, bytes: &[u8], content_type: ContentType) -> Result<Value, CodecError>;
    fn encode(&self, value: &Value, content_type: ContentType) -> Result<Vec<u8>, CodecError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonYamlCodec;

impl MimeCodec for JsonYamlCodec {
    fn decode(&self, bytes: &[u8], content_type: ContentType) -> Result<Value, CodecError> {
        match content_type {
            ContentType::Json => {
                serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
            }
            ContentType::Yaml => {
                serde_yaml::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
            }
        }
    }

    fn encode(&self, value: &Value, content_type: ContentType) -> Result<Vec<u8>, CodecError> {
        match content_type {
            ContentType::Json => {
                serde_json::to_vec_pretty(value).map_err(|e| CodecError::Encode(e.to_string()))
            }
            ContentType::Yaml => {
                serde_yaml::to_string(value)
                    .map(|s| s.into_bytes())
                    .map_err(|e| CodecError::Encode(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_roundtrip() {
        let codec = JsonYamlCodec;
        let value = json!({"a": 1});
        let bytes = codec.encode(&value, ContentType::Json).unwrap();
        let decoded = codec.decode(&bytes, ContentType::Json).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let codec = JsonYamlCodec;
        let value = json!({"a": 1, "b": [1, 2, 3]});
        let bytes = codec.encode(&value, ContentType::Yaml).unwrap();
        let decoded = codec.decode(&bytes, ContentType::Yaml).unwrap();
        assert_eq!(decoded, value);
    }
}
