// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Explicit bound for the shortening and formatting options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Either no limit at all, or at most `n` items.
///
/// Configuration sources express "unbounded" as an absent value or a negative
/// number; both are normalised to [`Limit::Unbounded`] at the boundary so the
/// rest of the pipeline never has to guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum Limit {
	#[default]
	Unbounded,
	AtMost(usize),
}

impl Limit {
	/// Normalise a nullable, possibly negative value.
	pub fn from_signed(value: Option<i64>) -> Self {
		match value {
			Some(n) if n >= 0 => Self::AtMost(usize::try_from(n).unwrap_or(usize::MAX)),
			_ => Self::Unbounded,
		}
	}

	pub fn value(self) -> Option<usize> {
		match self {
			Self::Unbounded => None,
			Self::AtMost(n) => Some(n),
		}
	}

	/// Returns `true` if `count` items exceed this limit.
	pub fn is_exceeded_by(self, count: usize) -> bool {
		match self {
			Self::Unbounded => false,
			Self::AtMost(n) => count > n,
		}
	}
}

impl From<Option<i64>> for Limit {
	fn from(value: Option<i64>) -> Self {
		Self::from_signed(value)
	}
}

impl From<Limit> for Option<i64> {
	fn from(limit: Limit) -> Self {
		limit
			.value()
			.map(|n| i64::try_from(n).unwrap_or(i64::MAX))
	}
}

impl From<usize> for Limit {
	fn from(value: usize) -> Self {
		Self::AtMost(value)
	}
}

impl fmt::Display for Limit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unbounded => write!(f, "unbounded"),
			Self::AtMost(n) => write!(f, "{}", n),
		}
	}
}
