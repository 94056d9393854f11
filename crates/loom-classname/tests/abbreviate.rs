// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use loom_classname::{
	abbreviate, ClassNameAbbreviationStrategy, ClassNameAbbreviator, ClassNameAbbreviatorOptions,
	MinPackageNameTooLongStrategy, PackageAbbreviationStrategy,
};
use proptest::prelude::*;

fn arb_qualified_name() -> impl Strategy<Value = String> {
	(prop::collection::vec("[a-z]{1,12}", 0..8), "[A-Z][A-Za-z0-9]{0,30}").prop_map(
		|(packages, class_name)| {
			let mut name = packages.join(".");
			if !name.is_empty() {
				name.push('.');
			}
			name.push_str(&class_name);
			name
		},
	)
}

fn arb_clipping_strategy() -> impl Strategy<Value = ClassNameAbbreviationStrategy> {
	prop::sample::select(vec![
		ClassNameAbbreviationStrategy::ClipStart,
		ClassNameAbbreviationStrategy::ClipEnd,
		ClassNameAbbreviationStrategy::EllipsisStart,
		ClassNameAbbreviationStrategy::EllipsisMiddle,
		ClassNameAbbreviationStrategy::EllipsisEnd,
	])
}

fn arb_package_strategy() -> impl Strategy<Value = PackageAbbreviationStrategy> {
	prop::sample::select(PackageAbbreviationStrategy::ALL.to_vec())
}

#[test]
fn logger_names_as_logback_prints_them() {
	let abbreviator = ClassNameAbbreviator::new(ClassNameAbbreviatorOptions::logback());

	assert_eq!(
		abbreviator.abbreviate("org.springframework.boot.SpringApplication", 36),
		"o.springframe.boot.SpringApplication"
	);
	assert_eq!(
		abbreviator.abbreviate("org.springframework.boot.SpringApplication", 26),
		"o.s.boot.SpringApplication"
	);
	assert_eq!(
		abbreviator.abbreviate("org.springframework.boot.SpringApplication", 100),
		"org.springframework.boot.SpringApplication"
	);
}

proptest! {
	#[test]
	fn fitting_names_are_returned_unchanged(name in arb_qualified_name(), extra in 0usize..10) {
		let max_length = name.chars().count() + extra;

		prop_assert_eq!(abbreviate(&name, max_length, &ClassNameAbbreviatorOptions::default()), name);
	}

	#[test]
	fn ellipsis_end_fills_max_length_exactly(class_name in "[A-Z][a-zA-Z]{0,40}", max_length in 2usize..40) {
		let result = abbreviate(&class_name, max_length, &ClassNameAbbreviatorOptions::default());

		if class_name.len() > max_length {
			prop_assert_eq!(result.chars().count(), max_length);
			prop_assert!(result.ends_with(".."));
			prop_assert!(class_name.starts_with(&result[..max_length - 2]));
		} else {
			prop_assert_eq!(result, class_name);
		}
	}

	#[test]
	fn clipping_strategies_never_exceed_max_length(
		name in arb_qualified_name(),
		max_length in 2usize..60,
		class_name_strategy in arb_clipping_strategy(),
		package_strategy in arb_package_strategy(),
	) {
		let options = ClassNameAbbreviatorOptions::default()
			.with_class_name_abbreviation(class_name_strategy)
			.with_package_abbreviation(package_strategy)
			.with_min_package_name_too_long_strategy(MinPackageNameTooLongStrategy::Omit);

		let result = abbreviate(&name, max_length, &options);

		prop_assert!(result.chars().count() <= max_length, "{} -> {}", name, result);
	}

	#[test]
	fn keep_strategies_preserve_class_name(name in arb_qualified_name(), max_length in 0usize..60) {
		let options = ClassNameAbbreviatorOptions::logback();
		let class_name = name.rsplit('.').next().unwrap_or_default();

		let result = abbreviate(&name, max_length, &options);

		prop_assert!(result.ends_with(class_name));
	}
}
