// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack trace pipeline for Loom log output.
//!
//! This crate turns the textual rendering of an exception into a compact,
//! bounded string:
//! - [`StackTraceExtractor`] parses the rendered text into a [`StackTrace`] tree
//! - [`StackTraceInverter`] puts the root cause first
//! - [`StackTraceShortener`] bounds frames, nested causes and suppressed exceptions
//! - [`StackTraceFormatter`] renders the bounded tree, optionally cropped to a
//!   maximum length
//!
//! None of the operations fail. Malformed input is reported through an
//! [`ErrorReporter`] and the parsed part is returned.
//!
//! # Example
//!
//! ```
//! use loom_stacktrace::{StackTraceExtractor, StackTraceFormatter, StackTraceShortener};
//! use loom_stacktrace_core::{Limit, StackTraceShortenerOptions};
//!
//! let text = "java.lang.IllegalStateException: boom\n\
//!             \tat a.b.C.first(C.java:1)\n\
//!             \tat a.b.C.second(C.java:2)\n\
//!             \tat a.b.C.third(C.java:3)";
//!
//! let trace = StackTraceExtractor::default().extract_stack_trace(text);
//! let options = StackTraceShortenerOptions::default()
//!     .with_max_frames_per_throwable(Limit::AtMost(1));
//! let shortened = StackTraceShortener::new(options).shorten(&trace);
//!
//! let formatted = StackTraceFormatter::default().format(&shortened);
//! assert_eq!(
//!     formatted,
//!     "java.lang.IllegalStateException: boom\n    at a.b.C.first(C.java:1)\n    ... 2 frames truncated"
//! );
//! ```

pub mod extractor;
pub mod formatter;
pub mod inverter;
pub mod reporter;
pub mod shortener;

pub use extractor::{
	StackTraceExtractor, CAUSED_BY_PREFIX, EMPTY_STACK_TRACE_MESSAGE, SUPPRESSED_PREFIX,
};
pub use formatter::{FrameFormatter, StackTraceFormatter};
pub use inverter::{root_cause_first, StackTraceInverter};
pub use reporter::{ErrorReporter, TracingErrorReporter};
pub use shortener::{shorten, Shortener, StackTraceShortener};

pub use loom_stacktrace_core::{
	Limit, ShortenedStackTrace, StackFrame, StackTrace, StackTraceError,
	StackTraceFormatterOptions, StackTraceShortenerOptions, Throwable,
};
