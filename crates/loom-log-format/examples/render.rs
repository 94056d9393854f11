// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Formats a rendered stack trace read from a file or stdin.
//!
//! ```text
//! RUST_LOG=loom_stacktrace=debug cargo run -p loom-log-format --example render -- \
//!     --limits 5,2,1 --max-length 2000 trace.txt
//! ```

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use loom_log_format::{LogFormatterConfig, LoggerNameRenderer, ThrowableRenderer};
use loom_stacktrace_core::Limit;
use tracing_subscriber::EnvFilter;

/// Shorten and format a stack trace
#[derive(Parser, Debug)]
#[command(name = "render")]
struct Args {
	/// Rendered stack trace; stdin when absent
	input: Option<PathBuf>,

	/// TOML configuration file
	#[arg(long, env = "LOOM_LOG_FORMAT_CONFIG")]
	config: Option<PathBuf>,

	/// Field option `maxFrames[,maxNested[,maxSuppressed]]`, replaces the
	/// configured limits
	#[arg(long)]
	limits: Option<String>,

	/// Crop the output to this many characters
	#[arg(long)]
	max_length: Option<usize>,

	/// Print the logger name abbreviated to `--logger-length`
	#[arg(long)]
	logger: Option<String>,

	#[arg(long, default_value_t = 36)]
	logger_length: usize,
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();

	let mut config = LogFormatterConfig::load(args.config.as_deref())?;
	if let Some(limits) = &args.limits {
		let options: loom_stacktrace_core::StackTraceShortenerOptions = limits.parse()?;
		config.max_frames_per_throwable = options.max_frames_per_throwable;
		config.max_nested_throwables = options.max_nested_throwables;
		config.max_suppressed_throwables = options.max_suppressed_throwables;
	}
	if let Some(max_length) = args.max_length {
		config.max_stack_trace_string_length = Limit::AtMost(max_length);
	}

	if let Some(logger) = &args.logger {
		let renderer = LoggerNameRenderer::from_config(&config, Some(args.logger_length));
		println!("{}", renderer.render(logger));
	}

	let text = match &args.input {
		Some(path) => std::fs::read_to_string(path)?,
		None => {
			let mut text = String::new();
			std::io::stdin().read_to_string(&mut text)?;
			text
		}
	};

	print!("{}", ThrowableRenderer::from_config(&config).render_text(&text));
	Ok(())
}
