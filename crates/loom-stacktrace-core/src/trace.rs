// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Raw stack trace tree as extracted from the rendered text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::frame::StackFrame;

/// One throwable of a rendered stack trace together with its nested throwables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackTrace {
	/// Exception type and message, e.g. `java.lang.RuntimeException: Something went wrong`.
	pub message_line: String,
	/// Frames in the order they were printed: the most recent call first.
	pub frames: Vec<StackFrame>,
	#[serde(default)]
	pub caused_by: Option<Box<StackTrace>>,
	/// Suppressed exceptions in textual order.
	#[serde(default)]
	pub suppressed: Vec<StackTrace>,
	/// Frames the renderer left out because they are identical to the enclosing trace's.
	#[serde(default)]
	pub count_skipped_common_frames: usize,
	/// Set on every node of a cause chain that has been inverted, so the
	/// formatter can label causes as "wrapped by" instead of "caused by".
	#[serde(default)]
	pub is_root_cause_first: bool,
}

impl StackTrace {
	pub fn new(message_line: impl Into<String>, frames: Vec<StackFrame>) -> Self {
		Self {
			message_line: message_line.into(),
			frames,
			caused_by: None,
			suppressed: Vec::new(),
			count_skipped_common_frames: 0,
			is_root_cause_first: false,
		}
	}

	pub fn with_caused_by(mut self, caused_by: StackTrace) -> Self {
		self.caused_by = Some(Box::new(caused_by));
		self
	}

	pub fn with_suppressed(mut self, suppressed: Vec<StackTrace>) -> Self {
		self.suppressed = suppressed;
		self
	}

	pub fn with_skipped_common_frames(mut self, count: usize) -> Self {
		self.count_skipped_common_frames = count;
		self
	}

	/// Iterate over this node and its cause chain, outermost first.
	pub fn cause_chain(&self) -> CauseChain<'_> {
		CauseChain {
			next: Some(self),
		}
	}

	/// The innermost throwable of the cause chain.
	pub fn root_cause(&self) -> &StackTrace {
		let mut current = self;
		while let Some(cause) = current.caused_by.as_deref() {
			current = cause;
		}
		current
	}
}

impl fmt::Display for StackTrace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, {} stack frames", self.message_line, self.frames.len())
	}
}

/// Iterator over a [`StackTrace`] and its causes.
pub struct CauseChain<'a> {
	next: Option<&'a StackTrace>,
}

impl<'a> Iterator for CauseChain<'a> {
	type Item = &'a StackTrace;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = current.caused_by.as_deref();
		Some(current)
	}
}
