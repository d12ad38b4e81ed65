//! Stage description validation utility.
//!
//! Reads a JSON stage description from a file and reports every
//! configuration problem `validate` finds, so hosts can catch malformed
//! timelines at load time instead of debugging silent per-frame no-ops.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use animstage_rs::prelude::*;

#[derive(Parser)]
#[command(name = "spec_check")]
#[command(author = "animstage-rs project")]
#[command(version)]
#[command(about = "Validate a JSON stage description", long_about = None)]
struct Cli {
	/// Path to the stage description
	#[arg(value_name = "FILE")]
	path: PathBuf,
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	let text = fs::read_to_string(&cli.path)
		.with_context(|| format!("reading {}", cli.path.display()))?;
	let spec: StageSpec = serde_json::from_str(&text)
		.with_context(|| format!("parsing {}", cli.path.display()))?;

	match spec.validate() {
		Ok(()) => {
			log::info!(
				"{}: ok ({} timeline(s), {} group(s))",
				cli.path.display(),
				spec.timelines.len(),
				spec.groups.len()
			);
			Ok(())
		}
		Err(err) => {
			for finding in err.findings() {
				log::error!("{finding}");
			}
			bail!("{}: {err}", cli.path.display())
		}
	}
}
