#[cfg(feature = "v3_0")]
mod v3_0_tests {
    use oaspec::v3_0::spec::Spec;
    use oaspec::validation::{Options, Validate};

    const DOCS: &[&str] = &[
        r#"{
            "openapi": "3.0.3",
            "info": {"title": "Minimal API", "version": "1.0.0"},
            "paths": {}
        }"#,
        r##"{
            "openapi": "3.0.3",
            "info": {"title": "Petstore", "version": "1.0.1"},
            "servers": [
                {"url": "https://petstore.example.com/v1"}
            ],
            "paths": {
                "/pets/{id}": {
                    "get": {
                        "operationId": "getPetById",
                        "parameters": [
                            {
                                "name": "id",
                                "in": "path",
                                "required": true,
                                "schema": {"type": "string"}
                            }
                        ],
                        "security": [
                            {"api_key": []}
                        ],
                        "responses": {
                            "200": {
                                "description": "pet response",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/Pet"}
                                    }
                                },
                                "headers": {
                                    "X-Rate-Limit": {
                                        "description": "calls per hour allowed",
                                        "schema": {"type": "integer", "format": "int32"}
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Pet": {
                        "type": "object",
                        "required": ["id", "name"],
                        "properties": {
                            "id": {"type": "integer", "format": "int64"},
                            "name": {"type": "string"}
                        }
                    }
                },
                "securitySchemes": {
                    "api_key": {
                        "type": "apiKey",
                        "name": "api_key",
                        "in": "header"
                    }
                }
            }
        }"##,
    ];

    #[test]
    fn files() {
        for json_spec in DOCS {
            let spec = serde_json::from_str::<Spec>(json_spec).unwrap();
            match spec.validate(Options::IgnoreMissingTags.only()) {
                Ok(_) => {}
                Err(err) => {
                    panic!("validation failed: {}", err);
                }
            }
            assert_eq!(
                serde_json::from_str::<serde_json::Value>(json_spec).unwrap(),
                serde_json::to_value(spec).unwrap(),
            );
        }
    }
}
