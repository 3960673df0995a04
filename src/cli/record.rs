use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::PossibleValuesParser;
use rollbook_compat::{GENERATIONS, RandomNames, load_generation, produce_sample};

#[derive(Args, Debug)]
pub struct RecordCommandArguments {
	#[arg(help = "The schema generation writing the sample")]
	#[arg(long, value_parser = PossibleValuesParser::new(GENERATIONS.iter().copied()))]
	generation: String,
	#[arg(help = "Path of the sample file to write")]
	#[arg(long)]
	out: PathBuf,
	#[arg(help = "Seed for the generated names")]
	#[arg(long)]
	seed: Option<u64>,
}

pub fn init(args: RecordCommandArguments) -> Result<()> {
	let RecordCommandArguments {
		generation,
		out,
		seed,
	} = args;
	let handle = load_generation(&generation)?;
	let mut names = match seed {
		Some(seed) => RandomNames::seeded(seed),
		None => RandomNames::new(),
	};
	let sample = produce_sample(&handle, &mut names)
		.with_context(|| format!("Failed to produce a sample for `{generation}`"))?;
	fs::write(&out, sample.bytes())
		.with_context(|| format!("Failed to write {}", out.display()))?;
	info!(
		generation = %generation,
		records = sample.count(),
		bytes = sample.bytes().len(),
		path = %out.display(),
		"Recorded sample"
	);
	Ok(())
}
