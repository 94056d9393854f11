// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Abbreviation of qualified class and logger names.
//!
//! ```
//! use loom_classname::{ClassNameAbbreviator, ClassNameAbbreviatorOptions};
//!
//! let abbreviator = ClassNameAbbreviator::new(ClassNameAbbreviatorOptions::logback());
//! assert_eq!(abbreviator.abbreviate("mainPackage.sub.sample.Bar", 16), "m.sub.sample.Bar");
//! ```

pub mod abbreviator;
pub mod error;
pub mod options;
pub mod strategy;

pub use abbreviator::{abbreviate, ClassNameAbbreviator};
pub use error::{ClassNameError, Result};
pub use options::{ClassNameAbbreviatorOptions, DEFAULT_ELLIPSIS};
pub use strategy::{
	ClassNameAbbreviationStrategy, MinPackageNameTooLongStrategy, PackageAbbreviationStrategy,
};
