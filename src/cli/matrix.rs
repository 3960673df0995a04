use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use rollbook_compat::{MatrixConfig, RandomNames, run_matrix};

use crate::cnf::{DEFAULT_CONFIG, DEFAULT_FIXTURES};

#[derive(Args, Debug)]
pub struct MatrixCommandArguments {
	#[arg(help = "Path to the matrix configuration")]
	#[arg(long, default_value = DEFAULT_CONFIG)]
	config: PathBuf,
	#[arg(help = "Directory holding recorded samples, overriding the configuration")]
	#[arg(long)]
	fixtures: Option<PathBuf>,
	#[arg(help = "Seed for the names in live samples")]
	#[arg(long)]
	seed: Option<u64>,
}

pub fn init(args: MatrixCommandArguments) -> Result<()> {
	let MatrixCommandArguments {
		config,
		fixtures,
		seed,
	} = args;
	// Load the configuration, falling back to the built-in generations
	let config = if config.exists() {
		MatrixConfig::from_file(&config)
			.with_context(|| format!("Failed to load {}", config.display()))?
	} else {
		warn!(
			path = %config.display(),
			fixtures = DEFAULT_FIXTURES,
			"No configuration found, using the default matrix; pass --fixtures when not running from the repository root"
		);
		MatrixConfig::default().with_fixtures(DEFAULT_FIXTURES)
	};
	let config = match fixtures {
		Some(dir) => config.with_fixtures(dir),
		None => config,
	};
	let mut names = match seed {
		Some(seed) => RandomNames::seeded(seed),
		None => RandomNames::new(),
	};
	let report = run_matrix(&config, &mut names).context("Failed to set up the matrix")?;
	println!("{report}");
	if !report.passed() {
		bail!("{} of {} pairs failed", report.failed().count(), report.pairs().len());
	}
	Ok(())
}
