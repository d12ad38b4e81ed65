//! Stage playback demo.
//!
//! Builds a stage from an inline JSON description and drives it through a
//! synthetic host loop, logging every draw call a real rendering surface
//! would receive. Useful for eyeballing timeline behavior without a
//! graphical backend.

use anyhow::Result;
use clap::Parser;

use animstage_rs::prelude::*;

#[derive(Parser)]
#[command(name = "stage_playback")]
#[command(author = "animstage-rs project")]
#[command(version)]
#[command(about = "Run a demo stage against a logging surface", long_about = None)]
struct Cli {
	/// Number of host frame ticks to simulate
	#[arg(short, long, default_value_t = 40)]
	ticks: u32,

	/// Milliseconds between host frame ticks
	#[arg(short, long, default_value_t = 100.0)]
	step: f64,

	/// Tick at which to toggle pause (twice: pause, then resume)
	#[arg(short, long)]
	pause_at: Option<u32>,
}

const DESCRIPTION: &str = r#"{
	"timelines": [
		{
			"id": "bird",
			"src": "wing0.png,wing1.png,200",
			"group": "sky",
			"events": [
				{"type": "interp", "starttime": 0, "endtime": 2000,
				 "startx": 0, "starty": 40, "endx": 300, "endy": 40},
				{"type": "periodic", "starttime": 2000, "endtime": -1,
				 "startx": 300, "starty": 40, "dx": 20, "dy": 0, "period": 400}
			]
		},
		{
			"id": "sun",
			"src": "sun.png",
			"group": "sky",
			"events": [
				{"type": "static", "starttime": 0, "endtime": -1, "x": 500, "y": 10}
			]
		}
	],
	"groups": {"sky": {"x": 0, "y": 20}},
	"restartAfter": 6000
}"#;

/// Surface that logs draw calls instead of rendering them.
struct LogSurface {
	tick: u32,
}

impl Surface<String> for LogSurface {
	fn draw_image(&mut self, image: &String, x: f64, y: f64) {
		log::info!("tick {:>4}: draw {image} at ({x:.1}, {y:.1})", self.tick);
	}
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	let spec: StageSpec = serde_json::from_str(DESCRIPTION)?;
	spec.validate()?;

	let mut stage: Stage<String> = Stage::new(spec);
	let mut surface = LogSurface {
		tick: 0,
	};

	for tick in 0..cli.ticks {
		let now = f64::from(tick) * cli.step;
		surface.tick = tick;

		if let Some(pause_at) = cli.pause_at
			&& (tick == pause_at || tick == pause_at.saturating_mul(2))
		{
			stage.toggle_pause(now);
			log::info!(
				"tick {tick:>4}: {}",
				if stage.is_paused() { "paused" } else { "resumed" }
			);
		}

		stage.draw(&mut surface, now);
	}

	Ok(())
}
