// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::strategy::{
	ClassNameAbbreviationStrategy, MinPackageNameTooLongStrategy, PackageAbbreviationStrategy,
};

pub const DEFAULT_ELLIPSIS: &str = "..";

/// Options for [`crate::ClassNameAbbreviator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNameAbbreviatorOptions {
	/// Applied if the class name alone exceeds the maximum length.
	pub class_name_abbreviation: ClassNameAbbreviationStrategy,
	/// Applied if class and package name together exceed the maximum length.
	pub package_abbreviation: PackageAbbreviationStrategy,
	pub min_package_name_too_long_strategy: MinPackageNameTooLongStrategy,
	/// Used by the `Ellipsis*` class name strategies.
	pub class_name_abbreviation_ellipsis: String,
}

impl Default for ClassNameAbbreviatorOptions {
	fn default() -> Self {
		Self {
			class_name_abbreviation: ClassNameAbbreviationStrategy::default(),
			package_abbreviation: PackageAbbreviationStrategy::default(),
			min_package_name_too_long_strategy: MinPackageNameTooLongStrategy::default(),
			class_name_abbreviation_ellipsis: DEFAULT_ELLIPSIS.to_string(),
		}
	}
}

impl ClassNameAbbreviatorOptions {
	/// Logback's behaviour: fill package segments from the end and never drop
	/// the class name or the first character of each package segment.
	pub fn logback() -> Self {
		Self {
			class_name_abbreviation:
				ClassNameAbbreviationStrategy::KeepClassNameAndFirstCharacterOfEachPackageSegmentEvenIfLonger,
			package_abbreviation: PackageAbbreviationStrategy::FillSegmentsFromEnd,
			min_package_name_too_long_strategy:
				MinPackageNameTooLongStrategy::KeepOnlyIfMaxLengthLongerThanClassName,
			class_name_abbreviation_ellipsis: DEFAULT_ELLIPSIS.to_string(),
		}
	}

	pub fn with_class_name_abbreviation(mut self, strategy: ClassNameAbbreviationStrategy) -> Self {
		self.class_name_abbreviation = strategy;
		self
	}

	pub fn with_package_abbreviation(mut self, strategy: PackageAbbreviationStrategy) -> Self {
		self.package_abbreviation = strategy;
		self
	}

	pub fn with_min_package_name_too_long_strategy(
		mut self,
		strategy: MinPackageNameTooLongStrategy,
	) -> Self {
		self.min_package_name_too_long_strategy = strategy;
		self
	}

	pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
		self.class_name_abbreviation_ellipsis = ellipsis.into();
		self
	}
}
