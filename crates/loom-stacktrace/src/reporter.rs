// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sink for recoverable anomalies found while processing stack traces.

use std::error::Error;
use tracing::warn;

/// Receives anomalies the pipeline recovered from.
///
/// Implementations must not panic; the caller continues with a partial result
/// after reporting.
pub trait ErrorReporter: Send + Sync {
	fn report_error(&self, message: &str, cause: Option<&(dyn Error + 'static)>);
}

/// Reports anomalies as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
	fn report_error(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
		match cause {
			Some(cause) => warn!(error = %cause, "{}", message),
			None => warn!("{}", message),
		}
	}
}
