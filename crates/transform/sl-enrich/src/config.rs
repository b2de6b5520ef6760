//! Configuration types for the JSON enricher.

use crate::registry::DEFAULT_SERIALIZER;
use serde::{Deserialize, Serialize};
use sl_error::{EnrichError, Result, SlError};
use sl_types::Context;
use std::collections::BTreeMap;
use tracing::warn;

/// Flat configuration key: destination header name.
pub const CONFIG_HEADER_NAME: &str = "name";
/// Flat configuration key: path expression.
pub const CONFIG_HEADER_JSONPATH: &str = "jsonpath";
/// Flat configuration key: whitespace-separated serializer logical names.
pub const CONFIG_SERIALIZERS: &str = "serializers";
/// Scoped serializer key: type identifier.
pub const CONFIG_SERIALIZER_TYPE: &str = "type";
/// Scoped serializer key: logical name (bookkeeping only).
pub const CONFIG_SERIALIZER_NAME: &str = "name";

/// Configuration for one enrichment stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichConfig {
    /// Destination header name.
    pub name: String,

    /// Path expression evaluated against the event body.
    pub jsonpath: String,

    /// Configured serializers. Only the first is honored.
    #[serde(default)]
    pub serializers: Vec<SerializerConfig>,
}

/// Configuration for one serializer instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializerConfig {
    /// Logical name, required for configuration bookkeeping.
    pub name: String,

    /// Type identifier resolved against the registry.
    #[serde(rename = "type", default = "default_serializer_type")]
    pub serializer_type: String,

    /// Serializer-specific keys (`pattern`, `inputpattern`, `outputpattern`).
    #[serde(flatten)]
    pub options: BTreeMap<String, String>,
}

fn default_serializer_type() -> String {
    DEFAULT_SERIALIZER.to_string()
}

impl SerializerConfig {
    /// Returns the options as a configuration scope for a factory.
    pub fn options_context(&self) -> Context {
        self.options.clone().into_iter().collect()
    }
}

impl EnrichConfig {
    /// Parses the flat dotted-key configuration surface.
    ///
    /// Recognized keys: `name`, `jsonpath`, `serializers` (whitespace-
    /// separated logical names), and per logical name the scope
    /// `serializers.<logical>.{type,name,...}`.
    ///
    /// When more than one serializer name is supplied, only the first is
    /// honored; the rest are ignored with a warning. This matches the
    /// long-standing behavior of existing deployments and is deliberately
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` or `jsonpath` is absent or empty, or if
    /// the selected serializer's `name` is absent or empty.
    pub fn from_context(context: &Context) -> Result<Self> {
        let name = context
            .get(CONFIG_HEADER_NAME)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| SlError::Config("Header name was misconfigured".to_string()))?
            .to_string();
        let jsonpath = context
            .get(CONFIG_HEADER_JSONPATH)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| SlError::Config("Header JSONPath was misconfigured".to_string()))?
            .to_string();

        let mut serializers = Vec::new();
        if let Some(list) = context.get(CONFIG_SERIALIZERS) {
            let logical_names: Vec<&str> = list.split_whitespace().collect();
            if logical_names.len() > 1 {
                warn!(
                    supplied = logical_names.len(),
                    "Only one serializer is supported; ignoring the rest"
                );
            }
            if let Some(logical) = logical_names.first() {
                let scopes = context.sub_properties(CONFIG_SERIALIZERS);
                let scope = scopes.sub_properties(logical);
                serializers.push(Self::parse_serializer(&scope)?);
            }
        }

        Ok(Self {
            name,
            jsonpath,
            serializers,
        })
    }

    fn parse_serializer(scope: &Context) -> Result<SerializerConfig> {
        let name = match scope.get(CONFIG_SERIALIZER_NAME) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => return Err(EnrichError::MissingKey(CONFIG_SERIALIZER_NAME.to_string()).into()),
        };
        let serializer_type = scope
            .get_or(CONFIG_SERIALIZER_TYPE, DEFAULT_SERIALIZER)
            .to_string();
        let options = scope
            .iter()
            .filter(|(key, _)| *key != CONFIG_SERIALIZER_TYPE && *key != CONFIG_SERIALIZER_NAME)
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Ok(SerializerConfig {
            name,
            serializer_type,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_context() -> Context {
        let mut context = Context::new();
        context.put("name", "testName");
        context.put("jsonpath", "$.published");
        context.put("serializers", "s1");
        context.put("serializers.s1.name", "s1");
        context.put("serializers.s1.type", "millis");
        context.put("serializers.s1.pattern", "%Y-%m-%dT%H:%M:%S%z");
        context
    }

    #[test]
    fn test_from_context() {
        let config = EnrichConfig::from_context(&flat_context()).unwrap();
        assert_eq!(config.name, "testName");
        assert_eq!(config.jsonpath, "$.published");
        assert_eq!(config.serializers.len(), 1);

        let serializer = &config.serializers[0];
        assert_eq!(serializer.name, "s1");
        assert_eq!(serializer.serializer_type, "millis");
        assert_eq!(
            serializer.options.get("pattern").map(String::as_str),
            Some("%Y-%m-%dT%H:%M:%S%z")
        );
        assert!(!serializer.options.contains_key("type"));
        assert!(!serializer.options.contains_key("name"));
    }

    #[test]
    fn test_missing_name_fails() {
        let mut context = flat_context();
        context.put("name", "");
        assert!(EnrichConfig::from_context(&context).is_err());

        let mut context = Context::new();
        context.put("jsonpath", "$.published");
        assert!(EnrichConfig::from_context(&context).is_err());
    }

    #[test]
    fn test_missing_jsonpath_fails() {
        let mut context = flat_context();
        context.put("jsonpath", "");
        assert!(EnrichConfig::from_context(&context).is_err());
    }

    #[test]
    fn test_no_serializers_key_yields_empty_list() {
        let mut context = Context::new();
        context.put("name", "testName");
        context.put("jsonpath", "$.published");

        let config = EnrichConfig::from_context(&context).unwrap();
        assert!(config.serializers.is_empty());
    }

    #[test]
    fn test_empty_serializers_value_yields_empty_list() {
        let mut context = Context::new();
        context.put("name", "testName");
        context.put("jsonpath", "$.published");
        context.put("serializers", "   ");

        let config = EnrichConfig::from_context(&context).unwrap();
        assert!(config.serializers.is_empty());
    }

    #[test]
    fn test_only_first_serializer_honored() {
        let mut context = flat_context();
        context.put("serializers", "s1 s2");
        context.put("serializers.s2.name", "s2");
        context.put("serializers.s2.type", "datetime-format");

        let config = EnrichConfig::from_context(&context).unwrap();
        assert_eq!(config.serializers.len(), 1);
        assert_eq!(config.serializers[0].name, "s1");
        assert_eq!(config.serializers[0].serializer_type, "millis");
    }

    #[test]
    fn test_serializer_type_defaults() {
        let mut context = Context::new();
        context.put("name", "testName");
        context.put("jsonpath", "$.published");
        context.put("serializers", "s1");
        context.put("serializers.s1.name", "s1");

        let config = EnrichConfig::from_context(&context).unwrap();
        assert_eq!(config.serializers[0].serializer_type, DEFAULT_SERIALIZER);
    }

    #[test]
    fn test_serializer_name_required() {
        let mut context = flat_context();
        context.put("serializers.s1.name", "");
        assert!(EnrichConfig::from_context(&context).is_err());
    }

    #[test]
    fn test_config_yaml() {
        let yaml = r#"
name: testName
jsonpath: $.published
serializers:
  - name: s1
    type: millis
    pattern: "%Y-%m-%dT%H:%M:%S%z"
"#;
        let config: EnrichConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "testName");
        assert_eq!(config.serializers[0].serializer_type, "millis");
        assert_eq!(
            config.serializers[0].options.get("pattern").map(String::as_str),
            Some("%Y-%m-%dT%H:%M:%S%z")
        );
    }

    #[test]
    fn test_config_yaml_type_defaults() {
        let yaml = r#"
name: testName
jsonpath: $.published
serializers:
  - name: s1
"#;
        let config: EnrichConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.serializers[0].serializer_type, DEFAULT_SERIALIZER);
        assert!(config.serializers[0].options.is_empty());
    }
}
