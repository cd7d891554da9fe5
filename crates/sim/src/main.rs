//! Toastkit scenario runner.
//!
//! Drives toast items through scripted host sessions on a recording surface
//! and logs every emitted event. Useful for checking a config file and for
//! watching the lifecycle without a renderer.

mod scenario;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use scenario::Scenario;
use toastkit_config::ToastConfig;
use tracing::info;

/// Scenario runner command line arguments.
#[derive(Parser, Debug)]
#[command(name = "toastkit-sim")]
#[command(about = "Run scripted toast lifecycle scenarios headlessly")]
struct Args {
	/// Stack config file (TOML)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Scenarios to run, all when omitted
	#[arg(value_enum)]
	scenarios: Vec<Scenario>,

	/// Log surface operations too
	#[arg(long)]
	ops: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::TRACE
		} else {
			tracing::Level::INFO
		})
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let config = match &args.config {
		Some(path) => ToastConfig::load(path)?,
		None => ToastConfig::default(),
	};
	info!(
		stacking = %config.stacking,
		position = %config.position,
		max_depth = config.max_stack_depth(),
		"config"
	);
	let config = Arc::new(config);

	let scenarios = if args.scenarios.is_empty() {
		Scenario::value_variants().to_vec()
	} else {
		args.scenarios
	};

	for scenario in scenarios {
		info!(?scenario, "scenario.start");
		let transcript = scenario.run(&config);
		if args.ops {
			for op in &transcript.ops {
				info!(?op, "surface");
			}
		}
		if transcript.leaked_listeners > 0 {
			tracing::warn!(
				?scenario,
				listeners = transcript.leaked_listeners,
				"listeners left registered"
			);
		}
		info!(?scenario, events = transcript.events.len(), "scenario.done");
	}

	Ok(())
}
