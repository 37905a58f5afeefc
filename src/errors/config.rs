// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating a check configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A check was declared without an id
    #[error("Check #{index} has an empty id")]
    EmptyCheckId {
        /// Position of the check in the configuration
        index: usize,
    },
    /// Two checks share the same id
    #[error("Duplicate check id: '{check_id}'")]
    DuplicateCheckId {
        /// The duplicate check id
        check_id: String,
    },
    /// A `not` check lists more than one term
    #[error("Check '{check_id}' negates {term_count} terms; 'not' takes at most one")]
    TooManyNegatedTerms {
        check_id: String,
        term_count: usize,
    },
    /// The configured nesting depth is outside the supported range
    #[error("max_depth {requested} is outside the supported range {min}..={max}")]
    MaxDepthOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
}

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported configuration format for '{}' (expected yaml or toml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Configuration validation failed:\n{}", join_lines(.0))]
    Validation(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
