// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_MAX_DEPTH, MAX_MAX_DEPTH, MIN_MAX_DEPTH};
use crate::errors::ConfigError;
use crate::observability::messages::config::{ConfigLoaded, ConfigValidationFailed};
use crate::observability::messages::StructuredLog;
use crate::term::Operator;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure for the connective engine.
///
/// Holds the evaluator options and an optional list of named checks, each a
/// single connective over declarative terms. It is typically loaded from a
/// YAML or TOML file.
///
/// # Fields
/// * `evaluator` - Evaluator options (optional)
/// * `checks` - Named connective checks (optional)
///
/// # Example
/// ```yaml
/// evaluator:
///   max_depth: 16
/// checks:
///   - id: "ready"
///     operator: and
///     terms:
///       - value: true
///       - value: 1
///         delay_ms: 20
///       - lazy: true
///         fail: "probe failed"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub evaluator: EvaluatorOptions,
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

/// Evaluator options.
///
/// # Fields
/// * `max_depth` - How many nested callables one term may unroll (optional,
///   defaults to `DEFAULT_MAX_DEPTH`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvaluatorOptions {
    pub max_depth: Option<usize>,
}

impl EvaluatorOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Configured depth clamped to `MIN_MAX_DEPTH..=MAX_MAX_DEPTH`.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth
            .unwrap_or(DEFAULT_MAX_DEPTH)
            .clamp(MIN_MAX_DEPTH, MAX_MAX_DEPTH)
    }
}

/// One named connective invocation.
///
/// # Fields
/// * `id` - Unique name of the check
/// * `operator` - Which connective to apply
/// * `terms` - Terms in call order (an empty list is allowed and fails at run time)
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub id: String,
    pub operator: Operator,
    #[serde(default)]
    pub terms: Vec<TermConfig>,
}

/// A declarative term.
///
/// # Fields
/// * `value` - Literal result, coerced through its truthiness (defaults to `null`)
/// * `delay_ms` - Resolve asynchronously after this many milliseconds
/// * `lazy` - Wrap the term in a callable, invoked only when evaluated
/// * `fail` - Fail with this message instead of producing `value`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TermConfig {
    #[serde(default)]
    pub value: serde_json::Value,
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub lazy: bool,
    pub fail: Option<String>,
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }
}

/// Parse a config from a string in the given format
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file, chosen by extension
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse_config(&content, format)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        format: format.name(),
        check_count: cfg.checks.len(),
    }
    .log();
    Ok(cfg)
}

/// Load and validate a config from a YAML or TOML file
///
/// Fails with `ConfigError::Validation` carrying every problem found, not just
/// the first one.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_config(&cfg) {
        ConfigValidationFailed {
            error_count: validation_errors.len(),
        }
        .log();
        return Err(ConfigError::Validation(validation_errors));
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
evaluator:
  max_depth: 8
checks:
  - id: reachable
    operator: or
    terms:
      - value: false
      - value: "up"
        delay_ms: 5
      - lazy: true
        fail: "dns lookup failed"
"#;
        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.evaluator.max_depth, Some(8));
        assert_eq!(cfg.checks.len(), 1);

        let check = &cfg.checks[0];
        assert_eq!(check.id, "reachable");
        assert_eq!(check.operator, Operator::Or);
        assert_eq!(check.terms[0].value, json!(false));
        assert_eq!(check.terms[1].delay_ms, Some(5));
        assert!(check.terms[2].lazy);
        assert_eq!(check.terms[2].fail.as_deref(), Some("dns lookup failed"));
        assert_eq!(check.terms[2].value, serde_json::Value::Null);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[evaluator]
max_depth = 4

[[checks]]
id = "all_green"
operator = "every"

[[checks.terms]]
value = 1

[[checks.terms]]
value = "ok"
lazy = true
"#;
        let cfg = parse_config(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.evaluator.effective_max_depth(), 4);
        assert_eq!(cfg.checks[0].operator, Operator::Every);
        assert_eq!(cfg.checks[0].terms.len(), 2);
        assert!(cfg.checks[0].terms[1].lazy);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let cfg = parse_config("{}", ConfigFormat::Yaml).unwrap();
        assert!(cfg.checks.is_empty());
        assert_eq!(cfg.evaluator, EvaluatorOptions::default());
        assert_eq!(cfg.evaluator.effective_max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_effective_max_depth_is_clamped() {
        assert_eq!(EvaluatorOptions::with_max_depth(0).effective_max_depth(), MIN_MAX_DEPTH);
        assert_eq!(
            EvaluatorOptions::with_max_depth(usize::MAX).effective_max_depth(),
            MAX_MAX_DEPTH
        );
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let yaml = "checks:\n  - id: x\n    operator: xor\n";
        let err = parse_config(yaml, ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_load_config_by_extension() {
        let file = write_temp(
            ".yml",
            "checks:\n  - id: a\n    operator: not\n    terms:\n      - value: 0\n",
        );
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.checks[0].operator, Operator::Not);
    }

    #[test]
    fn test_load_config_rejects_unknown_extension() {
        let file = write_temp(".json", "{}");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
