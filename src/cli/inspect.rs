use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::PossibleValuesParser;
use rollbook_compat::{GENERATIONS, load_generation};
use rollbook_record::RecordStream;

#[derive(Args, Debug)]
pub struct InspectCommandArguments {
	#[arg(help = "The schema generation reading the sample")]
	#[arg(long, value_parser = PossibleValuesParser::new(GENERATIONS.iter().copied()))]
	generation: String,
	#[arg(help = "Also list the wire fields present in each record")]
	#[arg(long)]
	fields: bool,
	#[arg(help = "Path of the sample file to read")]
	#[arg(index = 1)]
	file: PathBuf,
}

pub fn init(args: InspectCommandArguments) -> Result<()> {
	let InspectCommandArguments {
		generation,
		fields,
		file,
	} = args;
	let bytes = fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
	let handle = load_generation(&generation)?;
	let people = handle
		.cross_decode(&bytes)
		.with_context(|| format!("`{generation}` can not read {}", file.display()))?;
	for (i, person) in people.iter().enumerate() {
		println!("{i}: {person}");
	}
	if fields {
		for (i, record) in RecordStream::new(bytes.as_slice()).enumerate() {
			let record = record?;
			println!("{i}: {}", record.names().collect::<Vec<_>>().join(", "));
		}
	}
	debug!(generation = %generation, records = people.len(), "Inspected sample");
	Ok(())
}
