// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bounded view of a [`StackTrace`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::frame::StackFrame;
use crate::trace::StackTrace;

/// A [`StackTrace`] after the shortening passes.
///
/// Every field is computed once while the tree is built, the original frames
/// are kept next to the frames that are displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedStackTrace {
	pub message_line: String,
	pub original_frames: Vec<StackFrame>,
	/// Prefix of [`ShortenedStackTrace::original_frames`] that should be displayed.
	pub frames_to_display: Vec<StackFrame>,
	pub caused_by: Option<Box<ShortenedStackTrace>>,
	pub suppressed: Vec<ShortenedStackTrace>,
	pub count_skipped_common_frames: usize,
	/// Frames removed by the per-throwable frame limit.
	pub count_truncated_frames: usize,
	/// Causes removed by the nesting limit.
	pub count_skipped_nested_throwables: usize,
	/// Suppressed exceptions removed by the suppressed limit.
	pub count_skipped_suppressed_throwables: usize,
	pub is_root_cause_first: bool,
}

impl ShortenedStackTrace {
	/// Mirror a [`StackTrace`] without eliding anything.
	pub fn unshortened(trace: &StackTrace) -> Self {
		Self {
			message_line: trace.message_line.clone(),
			original_frames: trace.frames.clone(),
			frames_to_display: trace.frames.clone(),
			caused_by: trace
				.caused_by
				.as_deref()
				.map(|cause| Box::new(Self::unshortened(cause))),
			suppressed: trace.suppressed.iter().map(Self::unshortened).collect(),
			count_skipped_common_frames: trace.count_skipped_common_frames,
			count_truncated_frames: 0,
			count_skipped_nested_throwables: 0,
			count_skipped_suppressed_throwables: 0,
			is_root_cause_first: trace.is_root_cause_first,
		}
	}

	/// Iterate over this node and its (retained) cause chain, outermost first.
	pub fn cause_chain(&self) -> impl Iterator<Item = &ShortenedStackTrace> {
		std::iter::successors(Some(self), |node| node.caused_by.as_deref())
	}

	/// Returns `true` if any information was elided at this node.
	pub fn is_shortened(&self) -> bool {
		self.count_truncated_frames > 0
			|| self.count_skipped_nested_throwables > 0
			|| self.count_skipped_suppressed_throwables > 0
	}
}

impl From<&StackTrace> for ShortenedStackTrace {
	fn from(trace: &StackTrace) -> Self {
		Self::unshortened(trace)
	}
}

impl fmt::Display for ShortenedStackTrace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}, {} of {} stack frames displayed",
			self.message_line,
			self.frames_to_display.len(),
			self.original_frames.len()
		)
	}
}
