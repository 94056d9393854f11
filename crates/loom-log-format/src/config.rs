// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Log formatter configuration: TOML file, then `LOOM_LOG_FORMAT_*`
//! environment variables.
//!
//! ```toml
//! root_cause_first = true
//! max_frames_per_throwable = 10
//! max_nested_throwables = 3
//! max_stack_trace_string_length = 8000
//!
//! [class_name]
//! package_abbreviation = "fill_segments_from_end"
//! ```
//!
//! Limits are unbounded when absent or negative.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use loom_classname::{
	ClassNameAbbreviationStrategy, ClassNameAbbreviatorOptions, MinPackageNameTooLongStrategy,
	PackageAbbreviationStrategy,
};
use loom_stacktrace_core::{Limit, StackTraceFormatterOptions, StackTraceShortenerOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ConfigError, Result};

pub const ENV_PREFIX: &str = "LOOM_LOG_FORMAT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFormatterConfig {
	pub root_cause_first: bool,
	pub max_frames_per_throwable: Limit,
	pub max_nested_throwables: Limit,
	pub max_suppressed_throwables: Limit,
	pub max_stack_trace_string_length: Limit,
	pub ignore_suppressed_exceptions: bool,
	pub line_separator: String,
	/// Logger name abbreviation; defaults apply when absent.
	pub class_name: Option<ClassNameAbbreviatorOptions>,
}

impl Default for LogFormatterConfig {
	fn default() -> Self {
		Self {
			root_cause_first: false,
			max_frames_per_throwable: Limit::Unbounded,
			max_nested_throwables: Limit::Unbounded,
			max_suppressed_throwables: Limit::Unbounded,
			max_stack_trace_string_length: Limit::Unbounded,
			ignore_suppressed_exceptions: false,
			line_separator: "\n".to_string(),
			class_name: None,
		}
	}
}

impl LogFormatterConfig {
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let config: Self = toml::from_str(content)?;
		trace!("parsed log formatter config from TOML");
		Ok(config)
	}

	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		debug!(path = %path.display(), "loading log formatter config file");
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
			path: path.to_path_buf(),
			source: e,
		})?;
		Self::from_toml_str(&content)
	}

	/// Defaults overridden by the process environment.
	pub fn from_env() -> Result<Self> {
		Self::default().apply_env_overrides(|name| std::env::var(name).ok())
	}

	/// Load `path` if it exists, then apply the process environment.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		Self::load_with(path, |name| std::env::var(name).ok())
	}

	/// Load `path` if it exists, then apply overrides resolved through `lookup`.
	pub fn load_with(
		path: Option<&Path>,
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<Self> {
		let config = match path {
			Some(path) if path.exists() => Self::from_toml_file(path)?,
			Some(path) => {
				debug!(path = %path.display(), "config file not found, skipping");
				Self::default()
			}
			None => Self::default(),
		};
		config.apply_env_overrides(lookup)
	}

	/// Override fields from `LOOM_LOG_FORMAT_<KEY>` variables resolved through
	/// `lookup`. Empty values are ignored.
	pub fn apply_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let env = EnvOverrides { lookup };

		if let Some(value) = env.bool("root_cause_first")? {
			self.root_cause_first = value;
		}
		if let Some(value) = env.limit("max_frames_per_throwable")? {
			self.max_frames_per_throwable = value;
		}
		if let Some(value) = env.limit("max_nested_throwables")? {
			self.max_nested_throwables = value;
		}
		if let Some(value) = env.limit("max_suppressed_throwables")? {
			self.max_suppressed_throwables = value;
		}
		if let Some(value) = env.limit("max_stack_trace_string_length")? {
			self.max_stack_trace_string_length = value;
		}
		if let Some(value) = env.bool("ignore_suppressed_exceptions")? {
			self.ignore_suppressed_exceptions = value;
		}
		if let Some((_, value)) = env.var("line_separator") {
			self.line_separator = unescape_line_separator(&value);
		}

		let class_name_abbreviation =
			env.parsed::<ClassNameAbbreviationStrategy>("class_name_abbreviation")?;
		let package_abbreviation = env.parsed::<PackageAbbreviationStrategy>("package_abbreviation")?;
		let min_package_name_too_long_strategy =
			env.parsed::<MinPackageNameTooLongStrategy>("min_package_name_too_long_strategy")?;
		let ellipsis = env.var("class_name_abbreviation_ellipsis").map(|(_, value)| value);

		if class_name_abbreviation.is_some()
			|| package_abbreviation.is_some()
			|| min_package_name_too_long_strategy.is_some()
			|| ellipsis.is_some()
		{
			let class_name = self.class_name.get_or_insert_with(Default::default);
			if let Some(strategy) = class_name_abbreviation {
				class_name.class_name_abbreviation = strategy;
			}
			if let Some(strategy) = package_abbreviation {
				class_name.package_abbreviation = strategy;
			}
			if let Some(strategy) = min_package_name_too_long_strategy {
				class_name.min_package_name_too_long_strategy = strategy;
			}
			if let Some(ellipsis) = ellipsis {
				class_name.class_name_abbreviation_ellipsis = ellipsis;
			}
		}

		Ok(self)
	}

	pub fn is_default(&self) -> bool {
		*self == Self::default()
	}

	pub fn shortener_options(&self) -> StackTraceShortenerOptions {
		StackTraceShortenerOptions {
			max_frames_per_throwable: self.max_frames_per_throwable,
			max_nested_throwables: self.max_nested_throwables,
			max_suppressed_throwables: self.max_suppressed_throwables,
			root_cause_first: self.root_cause_first,
		}
	}

	pub fn formatter_options(&self) -> StackTraceFormatterOptions {
		StackTraceFormatterOptions::builder()
			.ignore_suppressed_exceptions(self.ignore_suppressed_exceptions)
			.line_separator(self.line_separator.clone())
			.max_stack_trace_string_length(self.max_stack_trace_string_length)
			.build()
	}

	pub fn abbreviator_options(&self) -> ClassNameAbbreviatorOptions {
		self.class_name.clone().unwrap_or_default()
	}
}

/// Accepts `\n` and `\r\n` written as escape sequences.
fn unescape_line_separator(value: &str) -> String {
	value.replace("\\r", "\r").replace("\\n", "\n")
}

struct EnvOverrides<F> {
	lookup: F,
}

impl<F: Fn(&str) -> Option<String>> EnvOverrides<F> {
	/// Returns the variable name and its non-empty value.
	fn var(&self, key: &str) -> Option<(String, String)> {
		let name = format!("{}{}", ENV_PREFIX, key.to_ascii_uppercase());
		let value = (self.lookup)(&name).filter(|value| !value.is_empty())?;
		trace!(name = %name, "applying environment override");
		Some((name, value))
	}

	fn parsed<T>(&self, key: &str) -> Result<Option<T>>
	where
		T: FromStr,
		T::Err: Display,
	{
		match self.var(key) {
			Some((name, value)) => value
				.trim()
				.parse()
				.map(Some)
				.map_err(|e| ConfigError::InvalidValue {
					key: name,
					message: format!("'{}': {}", value, e),
				}),
			None => Ok(None),
		}
	}

	fn bool(&self, key: &str) -> Result<Option<bool>> {
		match self.var(key) {
			Some((name, value)) => match value.trim().to_ascii_lowercase().as_str() {
				"true" | "1" | "yes" => Ok(Some(true)),
				"false" | "0" | "no" => Ok(Some(false)),
				_ => Err(ConfigError::InvalidValue {
					key: name,
					message: format!("invalid boolean value '{}'", value),
				}),
			},
			None => Ok(None),
		}
	}

	fn limit(&self, key: &str) -> Result<Option<Limit>> {
		Ok(self
			.parsed::<i64>(key)?
			.map(|value| Limit::from_signed(Some(value))))
	}
}
