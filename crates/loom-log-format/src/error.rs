// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use loom_stacktrace_core::StackTraceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config: {0}")]
	TomlParse(#[from] toml::de::Error),

	#[error("invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },

	#[error(transparent)]
	Option(#[from] StackTraceError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
