// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bounds the size of a [`StackTrace`].
//!
//! Common frames that reoccur in nested causes are already omitted by the
//! runtime's rendering and only show up as
//! [`ShortenedStackTrace::count_skipped_common_frames`].

use std::collections::HashSet;
use tracing::{debug, trace};

use loom_stacktrace_core::{ShortenedStackTrace, StackTrace, StackTraceShortenerOptions};

use crate::inverter::root_cause_first;

/// Produces the bounded view of a [`StackTrace`].
pub trait Shortener: Send + Sync {
	fn shorten(&self, stack_trace: &StackTrace) -> ShortenedStackTrace;
}

/// The default [`Shortener`], configured once with its options.
#[derive(Debug, Clone, Default)]
pub struct StackTraceShortener {
	options: StackTraceShortenerOptions,
}

impl StackTraceShortener {
	pub fn new(options: StackTraceShortenerOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &StackTraceShortenerOptions {
		&self.options
	}

	pub fn shorten(&self, stack_trace: &StackTrace) -> ShortenedStackTrace {
		shorten(stack_trace, &self.options)
	}
}

impl Shortener for StackTraceShortener {
	fn shorten(&self, stack_trace: &StackTrace) -> ShortenedStackTrace {
		shorten(stack_trace, &self.options)
	}
}

/// Shorten `stack_trace` without touching it.
///
/// With `root_cause_first` the cause chain is inverted before anything else.
/// Every retained node then has its nested causes, suppressed exceptions and
/// frames bounded independently; a limit left [`Unbounded`] skips that pass.
/// Suppressed exceptions that are dropped take their own causes with them.
///
/// [`Unbounded`]: loom_stacktrace_core::Limit::Unbounded
pub fn shorten(
	stack_trace: &StackTrace,
	options: &StackTraceShortenerOptions,
) -> ShortenedStackTrace {
	let shortened = if options.root_cause_first {
		let inverted = root_cause_first(stack_trace.clone());
		shorten_node(&inverted, options, 0)
	} else {
		shorten_node(stack_trace, options, 0)
	};

	if shortened.cause_chain().any(ShortenedStackTrace::is_shortened) {
		debug!(
			message_line = %shortened.message_line,
			root_cause_first = options.root_cause_first,
			"shortened stack trace"
		);
	}

	shortened
}

/// `depth` is the number of causes between the outermost retained node and
/// `stack_trace`. Suppressed exceptions start counting from zero again.
fn shorten_node(
	stack_trace: &StackTrace,
	options: &StackTraceShortenerOptions,
	depth: usize,
) -> ShortenedStackTrace {
	let original_frames = stack_trace.frames.clone();
	let max_frames = options.max_frames_per_throwable;
	let (frames_to_display, count_truncated_frames) = match max_frames.value() {
		Some(max) if max_frames.is_exceeded_by(original_frames.len()) => {
			(original_frames[..max].to_vec(), original_frames.len() - max)
		}
		_ => (original_frames.clone(), 0),
	};

	let total_suppressed = stack_trace.suppressed.len();
	let max_suppressed = options.max_suppressed_throwables;
	let kept_suppressed = match max_suppressed.value() {
		Some(max) if max_suppressed.is_exceeded_by(total_suppressed) => max,
		_ => total_suppressed,
	};
	let suppressed = stack_trace.suppressed[..kept_suppressed]
		.iter()
		.map(|suppressed| shorten_node(suppressed, options, 0))
		.collect();

	let (caused_by, count_skipped_nested_throwables) = match stack_trace.caused_by.as_deref() {
		None => (None, 0),
		Some(cause) => match options.max_nested_throwables.value() {
			Some(max) if depth >= max => (None, count_cause_chain(cause)),
			_ => (
				Some(Box::new(shorten_node(cause, options, depth + 1))),
				0,
			),
		},
	};

	let shortened = ShortenedStackTrace {
		message_line: stack_trace.message_line.clone(),
		original_frames,
		frames_to_display,
		caused_by,
		suppressed,
		count_skipped_common_frames: stack_trace.count_skipped_common_frames,
		count_truncated_frames,
		count_skipped_nested_throwables,
		count_skipped_suppressed_throwables: total_suppressed - kept_suppressed,
		is_root_cause_first: stack_trace.is_root_cause_first,
	};

	if shortened.is_shortened() {
		trace!(
			message_line = %shortened.message_line,
			truncated_frames = shortened.count_truncated_frames,
			omitted_causes = shortened.count_skipped_nested_throwables,
			omitted_suppressed = shortened.count_skipped_suppressed_throwables,
			"bounded stack trace node"
		);
	}

	shortened
}

/// Number of nodes in the cause chain starting at `first`, stopping at the
/// first node that has been seen before.
fn count_cause_chain(first: &StackTrace) -> usize {
	let mut visited: HashSet<*const StackTrace> = HashSet::new();
	let mut current = Some(first);

	while let Some(node) = current {
		if !visited.insert(node as *const StackTrace) {
			break;
		}
		current = node.caused_by.as_deref();
	}

	visited.len()
}

#[cfg(test)]
mod tests {
	use super::*;
	use loom_stacktrace_core::{Limit, StackFrame};

	fn frames(prefix: &str, count: usize) -> Vec<StackFrame> {
		(0..count)
			.map(|i| StackFrame::new(format!("at {}.m{}({}.java:{})", prefix, i, prefix, i)))
			.collect()
	}

	/// `A` caused by `B` caused by `C` caused by `D`, 5 frames each.
	fn chain() -> StackTrace {
		StackTrace::new("A", frames("A", 5)).with_caused_by(
			StackTrace::new("B", frames("B", 5)).with_caused_by(
				StackTrace::new("C", frames("C", 5))
					.with_caused_by(StackTrace::new("D", frames("D", 5))),
			),
		)
	}

	fn with_suppressed() -> StackTrace {
		StackTrace::new("Main", frames("Main", 3)).with_suppressed(vec![
			StackTrace::new("S1", frames("S1", 4))
				.with_caused_by(StackTrace::new("S1 cause", frames("S1c", 1))),
			StackTrace::new("S2", frames("S2", 4))
				.with_caused_by(StackTrace::new("S2 cause", frames("S2c", 1))),
			StackTrace::new("S3", frames("S3", 4)),
		])
	}

	fn options() -> StackTraceShortenerOptions {
		StackTraceShortenerOptions::default()
	}

	#[test]
	fn unbounded_options_keep_everything() {
		let trace = with_suppressed().with_caused_by(chain());

		let shortened = shorten(&trace, &options());

		assert_eq!(shortened, ShortenedStackTrace::unshortened(&trace));
	}

	#[test]
	fn max_nested_zero_keeps_only_outermost() {
		let shortened = shorten(&chain(), &options().with_max_nested_throwables(Limit::AtMost(0)));

		assert!(shortened.caused_by.is_none());
		assert_eq!(shortened.count_skipped_nested_throwables, 3);
	}

	#[test]
	fn max_nested_counts_on_deepest_retained_node() {
		let shortened = shorten(&chain(), &options().with_max_nested_throwables(Limit::AtMost(1)));

		assert_eq!(shortened.cause_chain().count(), 2);
		assert_eq!(shortened.count_skipped_nested_throwables, 0);
		let deepest = shortened.cause_chain().last().unwrap();
		assert_eq!(deepest.message_line, "B");
		assert_eq!(deepest.count_skipped_nested_throwables, 2);
	}

	#[test]
	fn max_nested_larger_than_chain_changes_nothing() {
		let shortened = shorten(&chain(), &options().with_max_nested_throwables(Limit::AtMost(10)));

		assert_eq!(shortened.cause_chain().count(), 4);
		assert!(shortened.cause_chain().all(|node| node.count_skipped_nested_throwables == 0));
	}

	#[test]
	fn max_suppressed_keeps_first_children() {
		let shortened =
			shorten(&with_suppressed(), &options().with_max_suppressed_throwables(Limit::AtMost(1)));

		assert_eq!(shortened.suppressed.len(), 1);
		assert_eq!(shortened.suppressed[0].message_line, "S1");
		assert_eq!(shortened.count_skipped_suppressed_throwables, 2);
	}

	#[test]
	fn dropped_suppressed_causes_are_discarded() {
		let shortened =
			shorten(&with_suppressed(), &options().with_max_suppressed_throwables(Limit::AtMost(1)));

		assert!(shortened.caused_by.is_none());
		assert_eq!(shortened.count_skipped_nested_throwables, 0);
		assert_eq!(
			shortened.suppressed[0].caused_by.as_deref().unwrap().message_line,
			"S1 cause"
		);
	}

	#[test]
	fn max_suppressed_zero_drops_all() {
		let shortened =
			shorten(&with_suppressed(), &options().with_max_suppressed_throwables(Limit::AtMost(0)));

		assert!(shortened.suppressed.is_empty());
		assert_eq!(shortened.count_skipped_suppressed_throwables, 3);
	}

	#[test]
	fn suppressed_at_limit_are_all_kept() {
		let shortened =
			shorten(&with_suppressed(), &options().with_max_suppressed_throwables(Limit::AtMost(3)));

		assert_eq!(shortened.suppressed.len(), 3);
		assert_eq!(shortened.count_skipped_suppressed_throwables, 0);
		assert!(!shortened.is_shortened());
	}

	#[test]
	fn suppressed_children_get_their_own_nesting_budget() {
		let trace = StackTrace::new("Main", Vec::new()).with_suppressed(vec![chain()]);

		let shortened = shorten(&trace, &options().with_max_nested_throwables(Limit::AtMost(1)));

		let suppressed = &shortened.suppressed[0];
		assert_eq!(suppressed.cause_chain().count(), 2);
		assert_eq!(suppressed.cause_chain().last().unwrap().count_skipped_nested_throwables, 2);
	}

	#[test]
	fn max_frames_applies_to_every_node() {
		let trace = with_suppressed().with_caused_by(chain());

		let shortened = shorten(&trace, &options().with_max_frames_per_throwable(Limit::AtMost(2)));

		assert_eq!(shortened.frames_to_display.len(), 2);
		assert_eq!(shortened.count_truncated_frames, 1);
		for suppressed in &shortened.suppressed {
			assert_eq!(suppressed.frames_to_display.len(), 2);
			assert_eq!(suppressed.count_truncated_frames, 2);
			let cause = suppressed.caused_by.as_deref();
			assert!(cause.map_or(true, |c| c.count_truncated_frames == 0));
		}
		for node in shortened.cause_chain().skip(1) {
			assert_eq!(node.frames_to_display.len(), 2);
			assert_eq!(node.original_frames.len(), 5);
			assert_eq!(node.count_truncated_frames, 3);
		}
	}

	#[test]
	fn max_frames_zero_hides_all_frames() {
		let shortened = shorten(&chain(), &options().with_max_frames_per_throwable(Limit::AtMost(0)));

		assert!(shortened.frames_to_display.is_empty());
		assert_eq!(shortened.count_truncated_frames, 5);
	}

	#[test]
	fn frames_at_limit_are_not_truncated() {
		let shortened = shorten(&chain(), &options().with_max_frames_per_throwable(Limit::AtMost(5)));

		assert_eq!(shortened.frames_to_display.len(), 5);
		assert_eq!(shortened.count_truncated_frames, 0);
	}

	#[test]
	fn root_cause_first_inverts_before_bounding() {
		let options = options()
			.with_root_cause_first(true)
			.with_max_nested_throwables(Limit::AtMost(1));

		let shortened = StackTraceShortener::new(options).shorten(&chain());

		let messages: Vec<_> = shortened.cause_chain().map(|n| n.message_line.as_str()).collect();
		assert_eq!(messages, vec!["D", "C"]);
		assert!(shortened.cause_chain().all(|n| n.is_root_cause_first));
		assert_eq!(shortened.cause_chain().last().unwrap().count_skipped_nested_throwables, 2);
	}

	#[test]
	fn input_is_left_untouched() {
		let trace = chain();
		let before = trace.clone();

		let _ = shorten(
			&trace,
			&options()
				.with_root_cause_first(true)
				.with_max_frames_per_throwable(Limit::AtMost(1)),
		);

		assert_eq!(trace, before);
	}

	#[test]
	fn count_cause_chain_counts_every_node() {
		assert_eq!(count_cause_chain(&chain()), 4);
		assert_eq!(count_cause_chain(&StackTrace::new("alone", Vec::new())), 1);
	}

	#[test]
	fn shortener_trait_object() {
		let shortener: Box<dyn Shortener> = Box::new(StackTraceShortener::new(
			options().with_max_frames_per_throwable(Limit::AtMost(1)),
		));

		let shortened = shortener.shorten(&chain());

		assert_eq!(shortened.frames_to_display.len(), 1);
	}
}
