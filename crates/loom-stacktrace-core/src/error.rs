// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for stack trace processing.

use thiserror::Error;

/// Errors that can occur while processing stack traces.
///
/// The pipeline itself never fails: parse anomalies are reported and
/// recovered from. These errors surface only from option parsing, or as the
/// `cause` handed to an error reporter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackTraceError {
	#[error(
		"unexpected stack trace line '{line}', expected it to start with 'Caused by: ' or 'Suppressed: '"
	)]
	UnexpectedNestedLine { line: String },

	#[error("invalid option '{value}': {reason}")]
	InvalidOption { value: String, reason: String },
}

impl StackTraceError {
	pub fn invalid_option(value: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::InvalidOption {
			value: value.into(),
			reason: reason.into(),
		}
	}
}

/// Result type for stack trace operations.
pub type Result<T> = std::result::Result<T, StackTraceError>;
