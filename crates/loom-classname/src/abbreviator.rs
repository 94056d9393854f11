// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shortens dotted names like `org.company.project.Service` to a maximum
//! length, keeping the class name readable for as long as possible.
//!
//! Lengths are counted in characters.

use tracing::trace;

use crate::options::ClassNameAbbreviatorOptions;
use crate::strategy::{
	ClassNameAbbreviationStrategy, MinPackageNameTooLongStrategy, PackageAbbreviationStrategy,
};

/// Abbreviates qualified class names with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct ClassNameAbbreviator {
	options: ClassNameAbbreviatorOptions,
}

impl ClassNameAbbreviator {
	pub fn new(options: ClassNameAbbreviatorOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &ClassNameAbbreviatorOptions {
		&self.options
	}

	pub fn abbreviate(&self, qualified_class_name: &str, max_length: usize) -> String {
		abbreviate(qualified_class_name, max_length, &self.options)
	}
}

/// Abbreviate `qualified_class_name` to at most `max_length` characters.
///
/// Names that already fit are returned unchanged. Otherwise the class name
/// is shortened first if it does not fit on its own, then package segments
/// are reduced to what is left of the budget. Some strategies deliberately
/// return a result longer than `max_length`.
pub fn abbreviate(
	qualified_class_name: &str,
	max_length: usize,
	options: &ClassNameAbbreviatorOptions,
) -> String {
	if char_len(qualified_class_name) <= max_length {
		return qualified_class_name.to_string();
	}

	let mut package_segments: Vec<&str> = qualified_class_name.split('.').collect();
	let class_name = package_segments.pop().unwrap_or_default();

	let class_name = if char_len(class_name) > max_length {
		trace!(
			class_name,
			max_length,
			strategy = %options.class_name_abbreviation,
			"class name exceeds maximum length"
		);
		if options.class_name_abbreviation
			== ClassNameAbbreviationStrategy::KeepClassNameAndFirstCharacterOfEachPackageSegmentEvenIfLonger
		{
			return combine(&first_character_of_each_segment(&package_segments), class_name);
		}
		abbreviate_class_name(class_name, max_length, options)
	} else {
		class_name.to_string()
	};

	if package_segments.is_empty() {
		return class_name;
	}

	let class_name_length = char_len(&class_name);
	let min_length = class_name_length + package_segments.len() * 2;
	if min_length > max_length {
		return match options.min_package_name_too_long_strategy {
			MinPackageNameTooLongStrategy::KeepEvenIfLongerThanMaxLength => {
				combine(&first_character_of_each_segment(&package_segments), &class_name)
			}
			MinPackageNameTooLongStrategy::KeepOnlyIfMaxLengthLongerThanClassName
				if max_length > class_name_length =>
			{
				combine(&first_character_of_each_segment(&package_segments), &class_name)
			}
			_ => class_name,
		};
	}

	match options.package_abbreviation {
		PackageAbbreviationStrategy::FillSegmentsEqually => {
			fill_segments_equally(&class_name, &package_segments, max_length)
		}
		PackageAbbreviationStrategy::FillSegmentsFromStart => fill_segments_in_order(
			&class_name,
			&package_segments,
			max_length,
			0..package_segments.len(),
		),
		PackageAbbreviationStrategy::FillSegmentsFromEnd => fill_segments_in_order(
			&class_name,
			&package_segments,
			max_length,
			(0..package_segments.len()).rev(),
		),
	}
}

fn abbreviate_class_name(
	class_name: &str,
	max_length: usize,
	options: &ClassNameAbbreviatorOptions,
) -> String {
	let ellipsis = options.class_name_abbreviation_ellipsis.as_str();
	let budget = max_length.saturating_sub(char_len(ellipsis));

	match options.class_name_abbreviation {
		ClassNameAbbreviationStrategy::KeepClassNameEvenIfLonger
		| ClassNameAbbreviationStrategy::KeepClassNameAndFirstCharacterOfEachPackageSegmentEvenIfLonger => {
			class_name.to_string()
		}
		ClassNameAbbreviationStrategy::ClipStart => take_last(class_name, max_length),
		ClassNameAbbreviationStrategy::ClipEnd => take(class_name, max_length),
		ClassNameAbbreviationStrategy::EllipsisStart => {
			format!("{}{}", ellipsis, take_last(class_name, budget))
		}
		ClassNameAbbreviationStrategy::EllipsisMiddle => {
			let end_length = budget / 2;
			let start_length = end_length + budget % 2;
			format!(
				"{}{}{}",
				take(class_name, start_length),
				ellipsis,
				take_last(class_name, end_length)
			)
		}
		ClassNameAbbreviationStrategy::EllipsisEnd => {
			format!("{}{}", take(class_name, budget), ellipsis)
		}
	}
}

/// Every segment gets the same number of characters, at least one. The
/// remainder of the division is left unused.
fn fill_segments_equally(class_name: &str, package_segments: &[&str], max_length: usize) -> String {
	let remaining = max_length
		.saturating_sub(char_len(class_name))
		.saturating_sub(package_segments.len());
	let chars_per_segment = (remaining / package_segments.len()).max(1);

	let segments: Vec<String> = package_segments
		.iter()
		.map(|segment| take(segment, chars_per_segment))
		.collect();
	combine(&segments, class_name)
}

/// Starting from one character per segment, expand whole segments in `order`
/// until the next one would overflow; that one is cut to fit.
fn fill_segments_in_order(
	class_name: &str,
	package_segments: &[&str],
	max_length: usize,
	order: impl Iterator<Item = usize>,
) -> String {
	let mut segments = first_character_of_each_segment(package_segments);

	for index in order {
		segments[index] = package_segments[index].to_string();

		let length = combined_len(&segments, class_name);
		if length > max_length {
			let overflow = length - max_length;
			let segment_length = char_len(package_segments[index]);
			segments[index] = if segment_length <= overflow {
				take(package_segments[index], 1)
			} else {
				take(package_segments[index], segment_length - overflow)
			};
			break;
		}
	}

	combine(&segments, class_name)
}

fn first_character_of_each_segment(package_segments: &[&str]) -> Vec<String> {
	package_segments
		.iter()
		.map(|segment| take(segment, 1))
		.collect()
}

fn combine<S: AsRef<str>>(package_segments: &[S], class_name: &str) -> String {
	let mut combined = String::new();
	for segment in package_segments {
		combined.push_str(segment.as_ref());
		combined.push('.');
	}
	combined.push_str(class_name);
	combined
}

fn combined_len(package_segments: &[String], class_name: &str) -> usize {
	package_segments
		.iter()
		.map(|segment| char_len(segment) + 1)
		.sum::<usize>()
		+ char_len(class_name)
}

fn char_len(text: &str) -> usize {
	text.chars().count()
}

fn take(text: &str, count: usize) -> String {
	text.chars().take(count).collect()
}

fn take_last(text: &str, count: usize) -> String {
	let skip = char_len(text).saturating_sub(count);
	text.chars().skip(skip).collect()
}
