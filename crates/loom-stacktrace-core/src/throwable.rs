// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Serialisable record of an exception.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// An exception as received from a runtime or a log shipper.
///
/// `stack_trace` holds the runtime's own textual rendering (e.g. the output of
/// `Throwable.printStackTrace()`), which is what the extractor parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throwable {
	#[serde(rename = "type")]
	pub type_name: String,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub stack_trace: Option<String>,
	#[serde(default)]
	pub cause: Option<Box<Throwable>>,
}

impl Throwable {
	pub fn new(type_name: impl Into<String>, message: Option<String>) -> Self {
		Self {
			type_name: type_name.into(),
			message,
			stack_trace: None,
			cause: None,
		}
	}

	pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
		self.stack_trace = Some(stack_trace.into());
		self
	}

	pub fn with_cause(mut self, cause: Throwable) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}

	/// Capture a [`std::error::Error`] and its source chain.
	///
	/// Rust errors carry neither a type name at runtime nor frames, so the
	/// outermost error is named after `E` and each source is recorded by its
	/// `Display` output alone.
	pub fn from_error<E: Error + 'static>(error: &E) -> Self {
		let type_name = std::any::type_name::<E>();
		let short_type = type_name
			.split('<')
			.next()
			.and_then(|path| path.rsplit("::").next())
			.unwrap_or(type_name);

		let mut throwable = Self::new(short_type, Some(error.to_string()));
		throwable.cause = error
			.source()
			.map(|source| Box::new(Self::from_source(source)));
		throwable
	}

	fn from_source(error: &(dyn Error + 'static)) -> Self {
		let mut throwable = Self::new(error.to_string(), None);
		throwable.cause = error
			.source()
			.map(|source| Box::new(Self::from_source(source)));
		throwable
	}

	/// The textual rendering handed to the extractor.
	///
	/// Falls back to a frame-less rendering of the cause chain when no
	/// runtime rendering was recorded.
	pub fn rendered(&self) -> String {
		if let Some(stack_trace) = &self.stack_trace {
			return stack_trace.clone();
		}

		let mut rendered = self.to_string();
		let mut cause = self.cause.as_deref();
		while let Some(current) = cause {
			rendered.push_str("\nCaused by: ");
			rendered.push_str(&current.to_string());
			cause = current.cause.as_deref();
		}
		rendered
	}
}

impl fmt::Display for Throwable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.message {
			Some(message) => write!(f, "{}: {}", self.type_name, message),
			None => f.write_str(&self.type_name),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Inner;

	impl fmt::Display for Inner {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "connection refused")
		}
	}

	impl Error for Inner {}

	#[derive(Debug)]
	struct Outer(Inner);

	impl fmt::Display for Outer {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "failed to load profile")
		}
	}

	impl Error for Outer {
		fn source(&self) -> Option<&(dyn Error + 'static)> {
			Some(&self.0)
		}
	}

	#[test]
	fn recorded_rendering_wins() {
		let throwable = Throwable::new("java.lang.IllegalStateException", Some("boom".into()))
			.with_stack_trace("java.lang.IllegalStateException: boom\n\tat a.B.c(B.java:1)");

		assert_eq!(
			throwable.rendered(),
			"java.lang.IllegalStateException: boom\n\tat a.B.c(B.java:1)"
		);
	}

	#[test]
	fn renders_cause_chain_without_recorded_text() {
		let throwable = Throwable::new("ParentException", Some("Wrapper #1".into()))
			.with_cause(Throwable::new("RootCauseException", Some("Root cause".into())));

		assert_eq!(
			throwable.rendered(),
			"ParentException: Wrapper #1\nCaused by: RootCauseException: Root cause"
		);
	}

	#[test]
	fn from_error_walks_sources() {
		let throwable = Throwable::from_error(&Outer(Inner));

		assert_eq!(throwable.type_name, "Outer");
		assert_eq!(throwable.message.as_deref(), Some("failed to load profile"));
		assert_eq!(
			throwable.rendered(),
			"Outer: failed to load profile\nCaused by: connection refused"
		);
	}

	#[test]
	fn deserializes_with_type_key() {
		let json = r#"{"type": "RootCauseException", "message": "Root cause"}"#;
		let throwable: Throwable = serde_json::from_str(json).unwrap();

		assert_eq!(throwable.to_string(), "RootCauseException: Root cause");
		assert!(throwable.cause.is_none());
	}
}
