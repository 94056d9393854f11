// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use loom_log_format::{LogFormatterConfig, LoggerNameRenderer, ThrowableRenderer};
use loom_stacktrace_core::{Limit, Throwable};
use proptest::prelude::*;

const SUPPRESSED_TRACE: &str = "\
java.io.IOException: Failed to close resources
	at org.example.io.Resources.closeAll(Resources.java:44)
	at org.example.Main.main(Main.java:12)
	Suppressed: java.io.IOException: close failed #1
		at org.example.io.Resource.close(Resource.java:20)
		... 2 more
	Suppressed: java.io.IOException: close failed #2
		at org.example.io.Resource.close(Resource.java:20)
		... 2 more
	Suppressed: java.io.IOException: close failed #3
		at org.example.io.Resource.close(Resource.java:20)
		... 2 more
";

#[test]
fn configured_throwable_field() {
	let config = LogFormatterConfig::from_toml_str(
		r#"
		max_frames_per_throwable = 1
		max_suppressed_throwables = 1
		"#,
	)
	.unwrap();

	let rendered = ThrowableRenderer::from_config(&config).render_text(SUPPRESSED_TRACE);

	assert_eq!(
		rendered,
		"java.io.IOException: Failed to close resources
    at org.example.io.Resources.closeAll(Resources.java:44)
    ... 1 frames truncated
    Suppressed: java.io.IOException: close failed #1
        at org.example.io.Resource.close(Resource.java:20)
        ... 2 common frames omitted
    ... 2 suppressed exception(s) omitted
"
	);
}

#[test]
fn ignoring_suppressed_exceptions() {
	let config = LogFormatterConfig::default()
		.apply_env_overrides(|name| {
			(name == "LOOM_LOG_FORMAT_IGNORE_SUPPRESSED_EXCEPTIONS").then(|| "true".to_string())
		})
		.unwrap();

	let rendered = ThrowableRenderer::from_config(&config).render_text(SUPPRESSED_TRACE);

	assert!(!rendered.contains("Suppressed"));
	assert!(!rendered.contains("suppressed exception(s) omitted"));
}

#[test]
fn rust_error_chain() {
	let error = std::io::Error::new(std::io::ErrorKind::Other, std::fmt::Error);

	let rendered = ThrowableRenderer::from_config(&LogFormatterConfig::default())
		.render(&Throwable::from_error(&error));

	assert!(rendered.starts_with("Error: an error occurred when formatting an argument"));
	assert!(rendered.ends_with('\n'));
}

#[test]
fn logger_and_throwable_from_same_config() {
	let config = LogFormatterConfig::from_toml_str(
		r#"
		max_nested_throwables = 0

		[class_name]
		class_name_abbreviation = "keep_class_name_and_first_character_of_each_package_segment_even_if_longer"
		package_abbreviation = "fill_segments_from_end"
		min_package_name_too_long_strategy = "keep_only_if_max_length_longer_than_class_name"
		"#,
	)
	.unwrap();
	assert_eq!(config.max_nested_throwables, Limit::AtMost(0));

	let logger = LoggerNameRenderer::from_config(&config, Some(16));

	assert_eq!(logger.render("mainPackage.sub.sample.Bar"), "m.sub.sample.Bar");
}

proptest! {
	#[test]
	fn cropped_field_never_exceeds_max_length(max_length in 1usize..400) {
		let config = LogFormatterConfig {
			max_stack_trace_string_length: Limit::AtMost(max_length),
			..Default::default()
		};

		let rendered = ThrowableRenderer::from_config(&config).render_text(SUPPRESSED_TRACE);

		prop_assert!(rendered.chars().count() <= max_length);
	}

	#[test]
	fn logger_names_within_limit_are_untouched(name in "[a-z]{1,8}(\\.[a-z]{1,8}){0,4}\\.[A-Z][a-zA-Z]{0,12}") {
		let renderer = LoggerNameRenderer::from_option_string(&name.len().to_string()).unwrap();

		prop_assert_eq!(renderer.render(&name), name);
	}
}
