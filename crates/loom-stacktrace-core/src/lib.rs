// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for Loom stack trace processing.
//!
//! This crate provides the data model shared by the stack trace pipeline
//! (`loom-stacktrace`) and the log field renderers (`loom-log-format`).
//!
//! # Overview
//!
//! - [`StackTrace`]: a tree parsed from the textual rendering of an exception
//!   (message line, frames, cause, suppressed exceptions, skipped common frames)
//! - [`ShortenedStackTrace`]: the bounded view of a [`StackTrace`] that records
//!   what was elided without discarding the original frames
//! - [`Throwable`]: a serialisable record of an exception received from elsewhere
//! - [`StackTraceShortenerOptions`] and [`StackTraceFormatterOptions`]: pure
//!   data option structs, each field independently defaulted
//! - [`Limit`]: the explicit "unbounded or at most N" value used by every
//!   bounding option

pub mod error;
pub mod frame;
pub mod limit;
pub mod options;
pub mod shortened;
pub mod throwable;
pub mod trace;

pub use error::{Result, StackTraceError};
pub use frame::StackFrame;
pub use limit::Limit;
pub use options::{
	StackTraceFormatterOptions, StackTraceFormatterOptionsBuilder, StackTraceShortenerOptions,
};
pub use shortened::ShortenedStackTrace;
pub use throwable::Throwable;
pub use trace::StackTrace;
