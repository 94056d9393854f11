// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! A single line of a rendered call stack.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A function/method call on the call stack, as it appeared in the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackFrame {
	/// The frame's display text with surrounding whitespace removed,
	/// e.g. `at org.example.Service.run(Service.java:42)`.
	pub line: String,
	/// Leading whitespace stripped from [`StackFrame::line`].
	pub original_indent: String,
	/// The untrimmed source line.
	pub original_line: String,
}

impl StackFrame {
	/// Build a frame from an untrimmed line of a rendered stack trace.
	pub fn from_line(original_line: &str) -> Self {
		let trimmed_start = original_line.trim_start();
		let original_indent = &original_line[..original_line.len() - trimmed_start.len()];

		Self {
			line: trimmed_start.trim_end().to_string(),
			original_indent: original_indent.to_string(),
			original_line: original_line.to_string(),
		}
	}

	/// Build a frame that has no indentation to preserve.
	pub fn new(line: impl Into<String>) -> Self {
		let line = line.into();
		Self {
			original_line: line.clone(),
			line,
			original_indent: String::new(),
		}
	}
}

impl fmt::Display for StackFrame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.line)
	}
}
