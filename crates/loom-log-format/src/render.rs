// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Log field renderers for exceptions and logger names.

use loom_classname::{ClassNameAbbreviator, ClassNameAbbreviatorOptions};
use loom_stacktrace::{StackTraceFormatter, StackTraceShortener};
use loom_stacktrace_core::{
	StackTraceError, StackTraceFormatterOptions, StackTraceShortenerOptions, Throwable,
};
use tracing::debug;

use crate::config::LogFormatterConfig;
use crate::error::Result;

/// Renders the exception field of a log event.
pub struct ThrowableRenderer {
	formatter: StackTraceFormatter,
}

impl ThrowableRenderer {
	pub fn new(
		shortener_options: StackTraceShortenerOptions,
		formatter_options: StackTraceFormatterOptions,
	) -> Self {
		let formatter = StackTraceFormatter::new(formatter_options)
			.with_shortener(StackTraceShortener::new(shortener_options));
		Self { formatter }
	}

	/// Build from a field option such as `"5,2,1"`
	/// (`maxFrames[,maxNested[,maxSuppressed]]`).
	///
	/// The rendered field ends with a line separator.
	pub fn from_option_string(option: &str) -> Result<Self> {
		let shortener_options: StackTraceShortenerOptions = option.parse()?;
		debug!(
			max_frames = %shortener_options.max_frames_per_throwable,
			max_nested = %shortener_options.max_nested_throwables,
			max_suppressed = %shortener_options.max_suppressed_throwables,
			"parsed throwable field option"
		);
		Ok(Self::new(shortener_options, field_formatter_options(StackTraceFormatterOptions::default())))
	}

	/// The rendered field ends with the configured line separator.
	pub fn from_config(config: &LogFormatterConfig) -> Self {
		Self::new(
			config.shortener_options(),
			field_formatter_options(config.formatter_options()),
		)
	}

	pub fn formatter(&self) -> &StackTraceFormatter {
		&self.formatter
	}

	pub fn render(&self, throwable: &Throwable) -> String {
		self.formatter.format_throwable(throwable)
	}

	pub fn render_text(&self, stack_trace: &str) -> String {
		self.formatter.format_text(stack_trace)
	}
}

fn field_formatter_options(mut options: StackTraceFormatterOptions) -> StackTraceFormatterOptions {
	options.add_line_separator_at_end = true;
	options
}

/// Renders the logger name field, abbreviated when a maximum length is set.
#[derive(Debug, Clone, Default)]
pub struct LoggerNameRenderer {
	max_length: Option<usize>,
	abbreviator: ClassNameAbbreviator,
}

impl LoggerNameRenderer {
	pub fn new(max_length: Option<usize>, options: ClassNameAbbreviatorOptions) -> Self {
		Self {
			max_length,
			abbreviator: ClassNameAbbreviator::new(options),
		}
	}

	/// Build from a field option such as `"36"`. A blank or negative option
	/// disables abbreviation.
	pub fn from_option_string(option: &str) -> Result<Self> {
		Ok(Self::new(parse_max_length(option)?, ClassNameAbbreviatorOptions::default()))
	}

	pub fn from_config(config: &LogFormatterConfig, max_length: Option<usize>) -> Self {
		Self::new(max_length, config.abbreviator_options())
	}

	pub fn max_length(&self) -> Option<usize> {
		self.max_length
	}

	pub fn render(&self, logger_name: &str) -> String {
		match self.max_length {
			Some(max_length) => self.abbreviator.abbreviate(logger_name, max_length),
			None => logger_name.to_string(),
		}
	}
}

fn parse_max_length(option: &str) -> Result<Option<usize>> {
	let option = option.trim();
	if option.is_empty() {
		return Ok(None);
	}

	let value = option.parse::<i64>().map_err(|e| {
		StackTraceError::invalid_option(option, format!("'{}' is not an integer: {}", option, e))
	})?;
	Ok(usize::try_from(value).ok())
}
