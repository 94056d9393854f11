// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack trace and logger name fields for Loom log output.
//!
//! This crate provides:
//! - [`LogFormatterConfig`], loaded from TOML and `LOOM_LOG_FORMAT_*`
//!   environment variables
//! - [`ThrowableRenderer`], the shortened and cropped exception field
//! - [`LoggerNameRenderer`], the abbreviated logger name field
//!
//! # Usage
//!
//! ```
//! use loom_log_format::{LoggerNameRenderer, ThrowableRenderer};
//!
//! let throwable = ThrowableRenderer::from_option_string("1")?;
//! let rendered = throwable.render_text(
//!     "java.lang.IllegalStateException: boom\n\tat a.b.C.m(C.java:1)\n\tat a.b.C.n(C.java:2)",
//! );
//! assert_eq!(
//!     rendered,
//!     "java.lang.IllegalStateException: boom\n    at a.b.C.m(C.java:1)\n    ... 1 frames truncated\n"
//! );
//!
//! let logger = LoggerNameRenderer::from_option_string("20")?;
//! assert_eq!(logger.render("org.example.service.UserService"), "or.ex.se.UserService");
//! # Ok::<(), loom_log_format::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod render;

pub use config::{LogFormatterConfig, ENV_PREFIX};
pub use error::{ConfigError, Result};
pub use render::{LoggerNameRenderer, ThrowableRenderer};
