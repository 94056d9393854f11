// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Strategies used when a qualified name exceeds its maximum length.
//!
//! Values parse from their snake_case name; case, `-` and `_` are ignored, so
//! `EllipsisEnd`, `ellipsis-end` and `ellipsis_end` are equivalent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClassNameError;

/// What to do with a class name that on its own exceeds the maximum length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassNameAbbreviationStrategy {
	/// Keep the class name; the result exceeds the maximum length.
	KeepClassNameEvenIfLonger,
	/// Keep the class name prefixed by the first character of each package
	/// segment, e.g. `o.c.p.ServiceWithALongClassName`. This is Logback's
	/// behaviour.
	KeepClassNameAndFirstCharacterOfEachPackageSegmentEvenIfLonger,
	/// Keep the last `max_length` characters.
	ClipStart,
	/// Keep the first `max_length` characters.
	ClipEnd,
	/// `..ssName`
	EllipsisStart,
	/// `ServiceW..lassName`; an odd remainder goes to the start.
	EllipsisMiddle,
	/// `Servic..`
	#[default]
	EllipsisEnd,
}

impl ClassNameAbbreviationStrategy {
	pub const ALL: [Self; 7] = [
		Self::KeepClassNameEvenIfLonger,
		Self::KeepClassNameAndFirstCharacterOfEachPackageSegmentEvenIfLonger,
		Self::ClipStart,
		Self::ClipEnd,
		Self::EllipsisStart,
		Self::EllipsisMiddle,
		Self::EllipsisEnd,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::KeepClassNameEvenIfLonger => "keep_class_name_even_if_longer",
			Self::KeepClassNameAndFirstCharacterOfEachPackageSegmentEvenIfLonger => {
				"keep_class_name_and_first_character_of_each_package_segment_even_if_longer"
			}
			Self::ClipStart => "clip_start",
			Self::ClipEnd => "clip_end",
			Self::EllipsisStart => "ellipsis_start",
			Self::EllipsisMiddle => "ellipsis_middle",
			Self::EllipsisEnd => "ellipsis_end",
		}
	}
}

/// How package segments are expanded when there is room beyond one
/// character per segment.
///
/// For `org.company.project.module.submodule.feature.service`:
/// - [`FillSegmentsEqually`](Self::FillSegmentsEqually): `org.comp.proj.modu.subm.feat.serv`
/// - [`FillSegmentsFromStart`](Self::FillSegmentsFromStart): `org.company.project.m.s.f.s`
/// - [`FillSegmentsFromEnd`](Self::FillSegmentsFromEnd): `o.c.p.m.submodule.feature.service`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageAbbreviationStrategy {
	#[default]
	FillSegmentsEqually,
	FillSegmentsFromStart,
	/// Logback's behaviour.
	FillSegmentsFromEnd,
}

impl PackageAbbreviationStrategy {
	pub const ALL: [Self; 3] = [
		Self::FillSegmentsEqually,
		Self::FillSegmentsFromStart,
		Self::FillSegmentsFromEnd,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::FillSegmentsEqually => "fill_segments_equally",
			Self::FillSegmentsFromStart => "fill_segments_from_start",
			Self::FillSegmentsFromEnd => "fill_segments_from_end",
		}
	}
}

/// What to do if even one character per package segment, e.g. `o.c.p.m.s.f.s`,
/// does not fit next to the class name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinPackageNameTooLongStrategy {
	/// Keep the one character segments; the result exceeds the maximum length.
	KeepEvenIfLongerThanMaxLength,
	/// Keep the one character segments only if the maximum length is greater
	/// than the class name's length. This is Logback's behaviour.
	KeepOnlyIfMaxLengthLongerThanClassName,
	/// Drop the package.
	#[default]
	Omit,
}

impl MinPackageNameTooLongStrategy {
	pub const ALL: [Self; 3] = [
		Self::KeepEvenIfLongerThanMaxLength,
		Self::KeepOnlyIfMaxLengthLongerThanClassName,
		Self::Omit,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::KeepEvenIfLongerThanMaxLength => "keep_even_if_longer_than_max_length",
			Self::KeepOnlyIfMaxLengthLongerThanClassName => {
				"keep_only_if_max_length_longer_than_class_name"
			}
			Self::Omit => "omit",
		}
	}
}

fn normalize(name: &str) -> String {
	name.chars()
		.filter(|c| *c != '_' && *c != '-')
		.flat_map(char::to_lowercase)
		.collect()
}

fn parse_strategy<T: Copy>(
	value: &str,
	kind: &'static str,
	all: &[T],
	as_str: impl Fn(&T) -> &'static str,
) -> Result<T, ClassNameError> {
	let wanted = normalize(value.trim());
	all.iter()
		.find(|candidate| normalize(as_str(*candidate)) == wanted)
		.copied()
		.ok_or_else(|| ClassNameError::UnknownStrategy {
			kind,
			value: value.to_string(),
			expected: all.iter().map(&as_str).collect::<Vec<_>>().join(", "),
		})
}

impl FromStr for ClassNameAbbreviationStrategy {
	type Err = ClassNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_strategy(s, "class name abbreviation strategy", &Self::ALL, Self::as_str)
	}
}

impl FromStr for PackageAbbreviationStrategy {
	type Err = ClassNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_strategy(s, "package abbreviation strategy", &Self::ALL, Self::as_str)
	}
}

impl FromStr for MinPackageNameTooLongStrategy {
	type Err = ClassNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_strategy(s, "min package name too long strategy", &Self::ALL, Self::as_str)
	}
}

impl fmt::Display for ClassNameAbbreviationStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl fmt::Display for PackageAbbreviationStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl fmt::Display for MinPackageNameTooLongStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
