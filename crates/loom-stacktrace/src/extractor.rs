// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Parser for textually rendered stack traces.
//!
//! Two renderings of skipped common frames are recognised:
//!
//! ```text
//! Java:        ... 46 more
//! all others:  ... and 13 more common stack frames skipped
//! ```
//!
//! A line starting with `Caused by: ` in the first column or a (possibly
//! indented) `Suppressed: ` line ends the frames of the current throwable.

use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

use loom_stacktrace_core::{StackFrame, StackTrace, StackTraceError, Throwable};

use crate::reporter::{ErrorReporter, TracingErrorReporter};

pub const CAUSED_BY_PREFIX: &str = "Caused by: ";
pub const SUPPRESSED_PREFIX: &str = "Suppressed: ";

/// Message line of the trace returned for empty input.
pub const EMPTY_STACK_TRACE_MESSAGE: &str = "Empty string, not a Stack Trace";

static SUPPRESSED_EXCEPTION_LINE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*Suppressed: .+$").expect("suppressed line pattern is valid"));

static SKIPPED_COMMON_FRAMES_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*\.\.\. (?:and )?(\d+) more\s*(?:common stack frames skipped)?$")
		.expect("skipped frames pattern is valid")
});

/// Parses rendered stack traces into [`StackTrace`] trees.
#[derive(Clone)]
pub struct StackTraceExtractor {
	reporter: Arc<dyn ErrorReporter>,
}

impl Default for StackTraceExtractor {
	fn default() -> Self {
		Self::new(Arc::new(TracingErrorReporter))
	}
}

impl StackTraceExtractor {
	pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
		Self { reporter }
	}

	/// Parse the recorded rendering of a throwable.
	pub fn extract_from_throwable(&self, throwable: &Throwable) -> StackTrace {
		self.extract_stack_trace(&throwable.rendered())
	}

	/// Parse a rendered stack trace.
	///
	/// Never fails: an empty string yields a trace with
	/// [`EMPTY_STACK_TRACE_MESSAGE`] and no frames, and unparseable nested
	/// sections are reported and dropped.
	pub fn extract_stack_trace(&self, text: &str) -> StackTrace {
		let lines: Vec<&str> = text.lines().collect();

		let Some((message_line, rest)) = lines.split_first() else {
			return StackTrace::new(EMPTY_STACK_TRACE_MESSAGE, Vec::new());
		};

		let stack_trace = self.extract_lines(message_line, rest);
		debug!(
			message_line = %stack_trace.message_line,
			frames = stack_trace.frames.len(),
			causes = stack_trace.cause_chain().count() - 1,
			root_cause = %stack_trace.root_cause().message_line,
			suppressed = stack_trace.suppressed.len(),
			"extracted stack trace"
		);
		stack_trace
	}

	/// Returns `true` if `line` starts a cause section.
	pub fn is_caused_by_line(&self, line: &str) -> bool {
		line.starts_with(CAUSED_BY_PREFIX)
	}

	/// Returns `true` if `line` starts a suppressed exception section.
	pub fn is_suppressed_exception_line(&self, line: &str) -> bool {
		SUPPRESSED_EXCEPTION_LINE.is_match(line)
	}

	/// Count of skipped common frames if the last line is a skipped frames marker.
	pub fn extract_skipped_common_frames(&self, lines: &[&str]) -> Option<usize> {
		let last = lines.last()?;
		let captures = SKIPPED_COMMON_FRAMES_LINE.captures(last)?;
		captures.get(1)?.as_str().parse().ok()
	}

	fn extract_lines(&self, message_line: &str, lines_after_message: &[&str]) -> StackTrace {
		let (mut stack_trace, nested_lines) = self.extract_section(message_line, lines_after_message);

		if !nested_lines.is_empty() {
			let (caused_by, suppressed) = self.extract_caused_by_and_suppressed(nested_lines);
			stack_trace.caused_by = caused_by.map(Box::new);
			stack_trace.suppressed = suppressed;
		}

		stack_trace
	}

	/// Parse one throwable without its nested sections, returning them unparsed.
	fn extract_section<'a, 'b>(
		&self,
		message_line: &str,
		lines_after_message: &'a [&'b str],
	) -> (StackTrace, &'a [&'b str]) {
		let frames_end = lines_after_message
			.iter()
			.position(|line| self.is_caused_by_line(line) || self.is_suppressed_exception_line(line));

		let (frame_lines, nested_lines) = match frames_end {
			Some(end) => lines_after_message.split_at(end),
			None => (lines_after_message, &[][..]),
		};

		let (frame_lines, count_skipped_common_frames) = self.split_skipped_common_frames(frame_lines);
		let frames = frame_lines.iter().map(|line| StackFrame::from_line(line)).collect();

		let stack_trace = StackTrace::new(message_line, frames)
			.with_skipped_common_frames(count_skipped_common_frames);
		(stack_trace, nested_lines)
	}

	/// Drops trailing blank lines and a trailing skipped frames marker.
	fn split_skipped_common_frames<'a, 'b>(&self, lines: &'a [&'b str]) -> (&'a [&'b str], usize) {
		let mut end = lines.len();
		while end > 0 && lines[end - 1].trim().is_empty() {
			end -= 1;
		}
		let lines = &lines[..end];

		match self.extract_skipped_common_frames(lines) {
			Some(count) => (&lines[..lines.len() - 1], count),
			None => (lines, 0),
		}
	}

	/// Parse the sections following a throwable's frames, starting at a
	/// `Caused by: ` or `Suppressed: ` line.
	///
	/// Suppressed sections belong to the closest preceding throwable of the
	/// cause chain, so a suppressed exception never has nested throwables of
	/// its own. The cause chain is collected in order and linked from the
	/// innermost cause outward.
	pub(crate) fn extract_caused_by_and_suppressed(
		&self,
		lines: &[&str],
	) -> (Option<StackTrace>, Vec<StackTrace>) {
		let mut suppressed = Vec::new();
		let mut causes: Vec<StackTrace> = Vec::new();
		let mut remaining = lines;

		while let Some((first, rest)) = remaining.split_first() {
			if let Some(message_line) = first.strip_prefix(CAUSED_BY_PREFIX) {
				trace!(message_line, "extracting cause");
				let (cause, next) = self.extract_section(message_line, rest);
				causes.push(cause);
				remaining = next;
				continue;
			}

			if let Some(message_line) = self.suppressed_message_line(first) {
				trace!(message_line, "extracting suppressed exception");
				let (section, next) = self.extract_section(message_line, rest);
				match causes.last_mut() {
					Some(cause) => cause.suppressed.push(section),
					None => suppressed.push(section),
				}
				remaining = next;
				continue;
			}

			let error = StackTraceError::UnexpectedNestedLine {
				line: first.to_string(),
			};
			self.reporter.report_error(
				"Cannot extract caused by or suppressed stack trace",
				Some(&error),
			);
			break;
		}

		let caused_by = causes.into_iter().rev().fold(None, |inner: Option<StackTrace>, mut cause| {
			cause.caused_by = inner.map(Box::new);
			Some(cause)
		});
		(caused_by, suppressed)
	}

	fn suppressed_message_line<'a>(&self, line: &'a str) -> Option<&'a str> {
		if !self.is_suppressed_exception_line(line) {
			return None;
		}
		line.split_once(SUPPRESSED_PREFIX).map(|(_, message_line)| message_line)
	}
}
