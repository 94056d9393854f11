// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassNameError {
	#[error("unknown {kind} '{value}', expected one of: {expected}")]
	UnknownStrategy {
		kind: &'static str,
		value: String,
		expected: String,
	},
}

pub type Result<T> = std::result::Result<T, ClassNameError>;
