//! TypeScript type generation for feature definitions
//!
//! Renders the `AppFeatures` type consumed by the GrowthBook JS/React SDKs
//! (`new GrowthBook<AppFeatures>()`). Output is deterministic for a given
//! feature list: entries follow the API order and JSON object keys keep the
//! order of the feature's default value.

use crate::api::{Feature, ValueType};
use serde_json::Value;

/// File name of the generated types file
pub const APP_FEATURES_FILENAME: &str = "app-features.ts";

/// First line of every generated file
pub const GENERATED_HEADER: &str =
    "// This file is generated by the GrowthBook CLI. Do not edit it by hand.";

/// Render the complete `app-features.ts` contents
pub fn render_app_features(features: &[Feature]) -> String {
    let mut output = String::new();
    output.push_str(GENERATED_HEADER);
    output.push_str("\n\n");

    if features.is_empty() {
        output.push_str("export type AppFeatures = {};\n");
        return output;
    }

    output.push_str("export type AppFeatures = {\n");
    for feature in features {
        if let Some(doc) = doc_comment(feature) {
            output.push_str(&format!("  /** {} */\n", doc));
        }
        output.push_str(&format!(
            "  {}: {};\n",
            quote_key(&feature.id),
            ts_type_for_feature(feature)
        ));
    }
    output.push_str("};\n");

    output
}

/// TypeScript type for a single feature
pub fn ts_type_for_feature(feature: &Feature) -> String {
    match feature.value_type {
        ValueType::Boolean => "boolean".to_string(),
        ValueType::String => "string".to_string(),
        ValueType::Number => "number".to_string(),
        ValueType::Json => serde_json::from_str::<Value>(&feature.default_value)
            .map(|value| ts_type_from_json(&value))
            .unwrap_or_else(|_| "unknown".to_string()),
        ValueType::Unknown => "unknown".to_string(),
    }
}

/// Infer a TypeScript type from a JSON value
pub fn ts_type_from_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => {
            let mut element_types: Vec<String> = Vec::new();
            for item in items {
                let ty = ts_type_from_json(item);
                if !element_types.contains(&ty) {
                    element_types.push(ty);
                }
            }
            match element_types.len() {
                0 => "unknown[]".to_string(),
                1 => format!("{}[]", element_types[0]),
                _ => format!("({})[]", element_types.join(" | ")),
            }
        }
        Value::Object(map) if map.is_empty() => "Record<string, unknown>".to_string(),
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{}: {}", quote_key(key), ts_type_from_json(value)))
                .collect();
            format!("{{ {} }}", fields.join("; "))
        }
    }
}

/// Quote a property name as a TypeScript string literal
fn quote_key(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}

/// Single-line JSDoc body for a feature, if it has anything to say.
///
/// Archived features are still emitted, tagged `@deprecated`.
fn doc_comment(feature: &Feature) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    let description = feature
        .description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "* /");
    if !description.is_empty() {
        parts.push(description);
    }
    if feature.archived {
        parts.push("@deprecated This feature is archived.".to_string());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(id: &str, value_type: ValueType, default_value: &str) -> Feature {
        Feature {
            id: id.to_string(),
            value_type,
            default_value: default_value.to_string(),
            description: String::new(),
            archived: false,
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render_app_features(&[]),
            format!("{}\n\nexport type AppFeatures = {{}};\n", GENERATED_HEADER)
        );
    }

    #[test]
    fn test_render_mixed_features() {
        let mut banner = feature("banner", ValueType::Json, r#"{"text": "Hi", "dismissable": true}"#);
        banner.description = "Top banner\n  shown on */ home".to_string();

        let features = vec![
            feature("dark-mode", ValueType::Boolean, "false"),
            feature("hero-copy", ValueType::String, "Welcome"),
            feature("max-items", ValueType::Number, "10"),
            banner,
        ];

        let expected = format!(
            "{}\n\n\
export type AppFeatures = {{\n  \
\"dark-mode\": boolean;\n  \
\"hero-copy\": string;\n  \
\"max-items\": number;\n  \
/** Top banner shown on * / home */\n  \
\"banner\": {{ \"text\": string; \"dismissable\": boolean }};\n\
}};\n",
            GENERATED_HEADER
        );
        assert_eq!(render_app_features(&features), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let features = vec![
            feature("b", ValueType::Json, r#"{"z": 1, "a": [1, "x"]}"#),
            feature("a", ValueType::Boolean, "true"),
        ];
        assert_eq!(render_app_features(&features), render_app_features(&features));
    }

    #[test]
    fn test_json_inference() {
        assert_eq!(ts_type_from_json(&json!(null)), "null");
        assert_eq!(ts_type_from_json(&json!([])), "unknown[]");
        assert_eq!(ts_type_from_json(&json!([1, 2, 3])), "number[]");
        assert_eq!(ts_type_from_json(&json!([1, "a", 2])), "(number | string)[]");
        assert_eq!(ts_type_from_json(&json!({})), "Record<string, unknown>");
        assert_eq!(
            ts_type_from_json(&json!({"items": [{"id": 1}], "meta": null})),
            r#"{ "items": { "id": number }[]; "meta": null }"#
        );
    }

    #[test]
    fn test_unparseable_json_and_unknown_types() {
        assert_eq!(
            ts_type_for_feature(&feature("x", ValueType::Json, "{not json")),
            "unknown"
        );
        assert_eq!(ts_type_for_feature(&feature("x", ValueType::Json, "")), "unknown");
        assert_eq!(
            ts_type_for_feature(&feature("x", ValueType::Unknown, "2024-01-01")),
            "unknown"
        );
    }

    #[test]
    fn test_archived_feature_is_deprecated() {
        let mut old = feature("old-checkout", ValueType::Boolean, "false");
        old.archived = true;
        let rendered = render_app_features(&[old.clone()]);
        assert!(rendered.contains(
            "  /** @deprecated This feature is archived. */\n  \"old-checkout\": boolean;\n"
        ));

        old.description = "Legacy flow".to_string();
        let rendered = render_app_features(&[old]);
        assert!(rendered.contains("  /** Legacy flow @deprecated This feature is archived. */\n"));
    }

    #[test]
    fn test_keys_are_escaped() {
        let features = vec![feature("say \"hi\"", ValueType::Boolean, "true")];
        assert!(render_app_features(&features).contains(r#"  "say \"hi\"": boolean;"#));
    }
}
