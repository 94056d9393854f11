// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Options for shortening and formatting stack traces.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, StackTraceError};
use crate::limit::Limit;

/// How much of a [`crate::StackTrace`] survives shortening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackTraceShortenerOptions {
	/// Frames kept per throwable; the rest is counted as truncated.
	pub max_frames_per_throwable: Limit,
	/// Causes kept below the outermost throwable. `AtMost(0)` keeps only the
	/// outermost throwable itself.
	pub max_nested_throwables: Limit,
	/// Suppressed exceptions kept per throwable.
	pub max_suppressed_throwables: Limit,
	/// Put the innermost exception first and label its former parents as
	/// "wrapped by". Shared frames are still only printed for the outermost
	/// exception.
	pub root_cause_first: bool,
}

impl StackTraceShortenerOptions {
	pub fn with_max_frames_per_throwable(mut self, limit: impl Into<Limit>) -> Self {
		self.max_frames_per_throwable = limit.into();
		self
	}

	pub fn with_max_nested_throwables(mut self, limit: impl Into<Limit>) -> Self {
		self.max_nested_throwables = limit.into();
		self
	}

	pub fn with_max_suppressed_throwables(mut self, limit: impl Into<Limit>) -> Self {
		self.max_suppressed_throwables = limit.into();
		self
	}

	pub fn with_root_cause_first(mut self, root_cause_first: bool) -> Self {
		self.root_cause_first = root_cause_first;
		self
	}
}

/// Parses `maxFrames[,maxNested[,maxSuppressed]]`, e.g. `"5,2,1"` or `"10,,0"`.
///
/// Blank entries and negative numbers leave the corresponding limit unbounded.
impl FromStr for StackTraceShortenerOptions {
	type Err = StackTraceError;

	fn from_str(s: &str) -> Result<Self> {
		let entries: Vec<&str> = s.split(',').map(str::trim).collect();
		if entries.len() > 3 {
			return Err(StackTraceError::invalid_option(
				s,
				format!("expected at most 3 comma separated limits, got {}", entries.len()),
			));
		}

		let mut limits = [Limit::Unbounded; 3];
		for (slot, entry) in limits.iter_mut().zip(&entries) {
			if entry.is_empty() {
				continue;
			}
			let value = entry.parse::<i64>().map_err(|e| {
				StackTraceError::invalid_option(s, format!("'{}' is not an integer: {}", entry, e))
			})?;
			*slot = Limit::from_signed(Some(value));
		}

		let [max_frames_per_throwable, max_nested_throwables, max_suppressed_throwables] = limits;
		Ok(Self {
			max_frames_per_throwable,
			max_nested_throwables,
			max_suppressed_throwables,
			root_cause_first: false,
		})
	}
}

/// How a [`crate::ShortenedStackTrace`] is turned into text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackTraceFormatterOptions {
	pub message_line_indent: String,
	pub stack_frame_indent: String,

	pub caused_by_indent: String,
	pub caused_by_message_prefix: String,

	pub ignore_suppressed_exceptions: bool,
	pub suppressed_exception_indent: String,
	pub suppressed_exception_message_prefix: String,

	/// Indent of a former parent when the chain is printed root cause first.
	pub wrapped_by_indent: String,
	pub wrapped_by_message_prefix: String,

	pub line_separator: String,
	pub add_line_separator_at_end: bool,

	/// Marker for anything that has been left out.
	pub ellipsis: String,
	/// Maximum character count of the whole output, ellipsis included.
	/// Only limits greater than zero are applied.
	pub max_stack_trace_string_length: Limit,
}

impl Default for StackTraceFormatterOptions {
	fn default() -> Self {
		Self {
			message_line_indent: String::new(),
			stack_frame_indent: "    ".to_string(),
			caused_by_indent: String::new(),
			caused_by_message_prefix: "Caused by: ".to_string(),
			ignore_suppressed_exceptions: false,
			suppressed_exception_indent: "    ".to_string(),
			suppressed_exception_message_prefix: "Suppressed: ".to_string(),
			wrapped_by_indent: String::new(),
			wrapped_by_message_prefix: "Wrapped by: ".to_string(),
			line_separator: "\n".to_string(),
			add_line_separator_at_end: false,
			ellipsis: "...".to_string(),
			max_stack_trace_string_length: Limit::Unbounded,
		}
	}
}

impl StackTraceFormatterOptions {
	pub fn builder() -> StackTraceFormatterOptionsBuilder {
		StackTraceFormatterOptionsBuilder::new()
	}

	/// The length limit, if one applies.
	pub fn max_length(&self) -> Option<usize> {
		self.max_stack_trace_string_length.value().filter(|max| *max > 0)
	}
}

/// Builder for [`StackTraceFormatterOptions`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct StackTraceFormatterOptionsBuilder {
	options: StackTraceFormatterOptions,
}

impl StackTraceFormatterOptionsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn message_line_indent(mut self, indent: impl Into<String>) -> Self {
		self.options.message_line_indent = indent.into();
		self
	}

	pub fn stack_frame_indent(mut self, indent: impl Into<String>) -> Self {
		self.options.stack_frame_indent = indent.into();
		self
	}

	pub fn caused_by_indent(mut self, indent: impl Into<String>) -> Self {
		self.options.caused_by_indent = indent.into();
		self
	}

	pub fn caused_by_message_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.options.caused_by_message_prefix = prefix.into();
		self
	}

	pub fn ignore_suppressed_exceptions(mut self, ignore: bool) -> Self {
		self.options.ignore_suppressed_exceptions = ignore;
		self
	}

	pub fn suppressed_exception_indent(mut self, indent: impl Into<String>) -> Self {
		self.options.suppressed_exception_indent = indent.into();
		self
	}

	pub fn suppressed_exception_message_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.options.suppressed_exception_message_prefix = prefix.into();
		self
	}

	pub fn wrapped_by_indent(mut self, indent: impl Into<String>) -> Self {
		self.options.wrapped_by_indent = indent.into();
		self
	}

	pub fn wrapped_by_message_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.options.wrapped_by_message_prefix = prefix.into();
		self
	}

	pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
		self.options.line_separator = separator.into();
		self
	}

	pub fn add_line_separator_at_end(mut self, add: bool) -> Self {
		self.options.add_line_separator_at_end = add;
		self
	}

	pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
		self.options.ellipsis = ellipsis.into();
		self
	}

	pub fn max_stack_trace_string_length(mut self, limit: impl Into<Limit>) -> Self {
		self.options.max_stack_trace_string_length = limit.into();
		self
	}

	pub fn build(self) -> StackTraceFormatterOptions {
		self.options
	}
}
