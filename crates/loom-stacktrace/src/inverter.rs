// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reverses a cause chain so the root cause comes first.

use tracing::trace;

use loom_stacktrace_core::StackTrace;

/// Puts the innermost cause of a [`StackTrace`] first.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackTraceInverter;

impl StackTraceInverter {
	pub fn new() -> Self {
		Self
	}

	pub fn root_cause_first(&self, stack_trace: StackTrace) -> StackTrace {
		root_cause_first(stack_trace)
	}
}

/// Rebuild the cause chain of `stack_trace` in reverse order.
///
/// The former root cause becomes the outermost node and each former parent
/// becomes the `caused_by` of the node it wrapped. Frames and suppressed
/// exceptions stay with their node. Every node of the result is marked
/// [`StackTrace::is_root_cause_first`].
pub fn root_cause_first(mut stack_trace: StackTrace) -> StackTrace {
	stack_trace.is_root_cause_first = true;

	let Some(cause) = stack_trace.caused_by.take() else {
		return stack_trace;
	};

	let mut wrapped_by = stack_trace;
	let mut current = *cause;
	let mut depth = 1usize;

	loop {
		let inner = current.caused_by.take();
		current.caused_by = Some(Box::new(wrapped_by));
		current.is_root_cause_first = true;

		match inner {
			Some(inner) => {
				wrapped_by = current;
				current = *inner;
				depth += 1;
			}
			None => {
				trace!(depth, "inverted cause chain");
				return current;
			}
		}
	}
}
