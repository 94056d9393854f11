// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Renders a [`ShortenedStackTrace`] as text.
//!
//! All lengths are counted in characters, not bytes. A transport with a byte
//! budget may still need to cut output that contains non-ASCII text.

use std::sync::Arc;
use tracing::debug;

use loom_stacktrace_core::{
	ShortenedStackTrace, StackFrame, StackTrace, StackTraceFormatterOptions, Throwable,
};

use crate::extractor::StackTraceExtractor;
use crate::shortener::{Shortener, StackTraceShortener};

/// Renders a single frame; the default is the frame's trimmed line.
pub type FrameFormatter = Arc<dyn Fn(&StackFrame) -> String + Send + Sync>;

/// Formats stack traces according to [`StackTraceFormatterOptions`].
///
/// Raw [`StackTrace`]s and [`Throwable`]s are passed through the configured
/// [`Shortener`] first, which bounds nothing unless configured to.
pub struct StackTraceFormatter {
	options: StackTraceFormatterOptions,
	shortener: Arc<dyn Shortener>,
	extractor: StackTraceExtractor,
	frame_formatter: Option<FrameFormatter>,
}

impl Default for StackTraceFormatter {
	fn default() -> Self {
		Self::new(StackTraceFormatterOptions::default())
	}
}

impl StackTraceFormatter {
	pub fn new(options: StackTraceFormatterOptions) -> Self {
		Self {
			options,
			shortener: Arc::new(StackTraceShortener::default()),
			extractor: StackTraceExtractor::default(),
			frame_formatter: None,
		}
	}

	pub fn with_shortener(mut self, shortener: impl Shortener + 'static) -> Self {
		self.shortener = Arc::new(shortener);
		self
	}

	pub fn with_extractor(mut self, extractor: StackTraceExtractor) -> Self {
		self.extractor = extractor;
		self
	}

	pub fn with_frame_formatter(
		mut self,
		frame_formatter: impl Fn(&StackFrame) -> String + Send + Sync + 'static,
	) -> Self {
		self.frame_formatter = Some(Arc::new(frame_formatter));
		self
	}

	pub fn options(&self) -> &StackTraceFormatterOptions {
		&self.options
	}

	pub fn format_throwable(&self, throwable: &Throwable) -> String {
		self.format_stack_trace(&self.extractor.extract_from_throwable(throwable))
	}

	/// Parse, shorten and format a rendered stack trace.
	pub fn format_text(&self, text: &str) -> String {
		self.format_stack_trace(&self.extractor.extract_stack_trace(text))
	}

	pub fn format_stack_trace(&self, stack_trace: &StackTrace) -> String {
		self.format(&self.shortener.shorten(stack_trace))
	}

	pub fn format(&self, stack_trace: &ShortenedStackTrace) -> String {
		self.format_with_options(stack_trace, &self.options)
	}

	pub fn format_with_options(
		&self,
		stack_trace: &ShortenedStackTrace,
		options: &StackTraceFormatterOptions,
	) -> String {
		let mut output = Output::new(options.max_length());

		self.append_stack_trace_and_children(stack_trace, &mut output, options, "", "");

		if options.add_line_separator_at_end {
			output.push(&options.line_separator);
		}

		output.finish(&options.ellipsis)
	}

	fn append_stack_trace_and_children(
		&self,
		stack_trace: &ShortenedStackTrace,
		output: &mut Output,
		options: &StackTraceFormatterOptions,
		additional_indent: &str,
		message_line_prefix: &str,
	) {
		self.append_stack_trace(stack_trace, output, options, additional_indent, message_line_prefix);

		let has_nested = stack_trace.caused_by.is_some() || stack_trace.count_skipped_nested_throwables > 0;
		let has_suppressed = !options.ignore_suppressed_exceptions
			&& (!stack_trace.suppressed.is_empty() || stack_trace.count_skipped_suppressed_throwables > 0);

		if output.stop_if_full(has_suppressed || has_nested) {
			return;
		}

		if !options.ignore_suppressed_exceptions {
			let suppressed_indent =
				format!("{}{}", additional_indent, options.suppressed_exception_indent);

			for suppressed in &stack_trace.suppressed {
				if output.stop_if_full(true) {
					return;
				}
				output.push(&options.line_separator);
				self.append_stack_trace_and_children(
					suppressed,
					output,
					options,
					&suppressed_indent,
					&options.suppressed_exception_message_prefix,
				);
			}

			if output.stop_if_full(stack_trace.count_skipped_suppressed_throwables > 0 || has_nested) {
				return;
			}

			if stack_trace.count_skipped_suppressed_throwables > 0 {
				output.push_line(
					&options.line_separator,
					&suppressed_indent,
					&format!(
						"{} {} suppressed exception(s) omitted",
						options.ellipsis, stack_trace.count_skipped_suppressed_throwables
					),
				);
			}
		}

		let (cause_indent, cause_prefix) = if stack_trace.is_root_cause_first {
			(&options.wrapped_by_indent, &options.wrapped_by_message_prefix)
		} else {
			(&options.caused_by_indent, &options.caused_by_message_prefix)
		};
		let cause_indent = format!("{}{}", additional_indent, cause_indent);

		if let Some(caused_by) = stack_trace.caused_by.as_deref() {
			if output.stop_if_full(true) {
				return;
			}
			output.push(&options.line_separator);
			self.append_stack_trace_and_children(caused_by, output, options, &cause_indent, cause_prefix);
		}

		if stack_trace.count_skipped_nested_throwables > 0 {
			if output.stop_if_full(true) {
				return;
			}
			output.push_line(
				&options.line_separator,
				&cause_indent,
				&format!(
					"{} {} nested cause(s) omitted",
					options.ellipsis, stack_trace.count_skipped_nested_throwables
				),
			);
		}
	}

	fn append_stack_trace(
		&self,
		stack_trace: &ShortenedStackTrace,
		output: &mut Output,
		options: &StackTraceFormatterOptions,
		additional_indent: &str,
		message_line_prefix: &str,
	) {
		output.push(additional_indent);
		output.push(&options.message_line_indent);
		output.push(message_line_prefix);
		output.push(&stack_trace.message_line);

		let frame_indent = format!("{}{}", additional_indent, options.stack_frame_indent);
		for frame in &stack_trace.frames_to_display {
			if output.stop_if_full(true) {
				return;
			}
			output.push_line(&options.line_separator, &frame_indent, &self.format_frame(frame));
		}

		let has_frames_line =
			stack_trace.count_truncated_frames > 0 || stack_trace.count_skipped_common_frames > 0;
		if output.stop_if_full(has_frames_line) {
			return;
		}

		if stack_trace.count_truncated_frames > 0 {
			let mut line = format!(
				"{} {} frames truncated",
				options.ellipsis, stack_trace.count_truncated_frames
			);
			if stack_trace.count_skipped_common_frames > 0 {
				line.push_str(&format!(
					" (including {} common frames)",
					stack_trace.count_skipped_common_frames
				));
			}
			output.push_line(&options.line_separator, &frame_indent, &line);
		} else if stack_trace.count_skipped_common_frames > 0 {
			output.push_line(
				&options.line_separator,
				&frame_indent,
				&format!(
					"{} {} common frames omitted",
					options.ellipsis, stack_trace.count_skipped_common_frames
				),
			);
		}
	}

	fn format_frame(&self, frame: &StackFrame) -> String {
		match &self.frame_formatter {
			Some(frame_formatter) => frame_formatter(frame),
			None => frame.line.clone(),
		}
	}
}

/// Output buffer that tracks its length in characters.
struct Output {
	buffer: String,
	chars: usize,
	max_length: Option<usize>,
	/// Content was left out because the maximum length had been reached.
	elided: bool,
}

impl Output {
	fn new(max_length: Option<usize>) -> Self {
		Self {
			buffer: String::new(),
			chars: 0,
			max_length,
			elided: false,
		}
	}

	fn push(&mut self, text: &str) {
		self.buffer.push_str(text);
		self.chars += text.chars().count();
	}

	fn push_line(&mut self, line_separator: &str, indent: &str, text: &str) {
		self.push(line_separator);
		self.push(indent);
		self.push(text);
	}

	/// Returns `true` once the maximum length has been reached and nothing
	/// more should be appended. `has_more` tells whether the caller would
	/// have appended anything else.
	fn stop_if_full(&mut self, has_more: bool) -> bool {
		let full = self.max_length.is_some_and(|max| self.chars >= max);
		if full && has_more {
			debug!(length = self.chars, "maximum stack trace length reached");
			self.elided = true;
		}
		full
	}

	/// Crop to the maximum length, ending with `ellipsis`.
	fn finish(self, ellipsis: &str) -> String {
		let Some(max) = self.max_length else {
			return self.buffer;
		};
		if self.chars <= max && !self.elided {
			return self.buffer;
		}

		let ellipsis_chars = ellipsis.chars().count();
		debug!(length = self.chars, max_length = max, "cropping formatted stack trace");

		if max < ellipsis_chars {
			return ellipsis.chars().take(max).collect();
		}

		let mut cropped: String = self.buffer.chars().take(max - ellipsis_chars).collect();
		cropped.push_str(ellipsis);
		cropped
	}
}
