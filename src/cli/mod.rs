mod inspect;
mod matrix;
mod record;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use inspect::InspectCommandArguments;
use matrix::MatrixCommandArguments;
use record::RecordCommandArguments;

use crate::cnf::{DEFAULT_LOG, INFO, LOG_ENV, PKG_NAME, PKG_VERSION};
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(name = PKG_NAME, bin_name = PKG_NAME)]
#[command(about = INFO)]
#[command(version = PKG_VERSION, disable_version_flag = false, arg_required_else_help = true)]
struct Cli {
	#[arg(help = "The logging level or filter directives")]
	#[arg(env = LOG_ENV, long = "log", global = true)]
	#[arg(default_value = DEFAULT_LOG)]
	log: String,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	#[command(about = "Read every generation's sample with every generation")]
	Matrix(MatrixCommandArguments),
	#[command(about = "Write a fresh sample for one generation")]
	Record(RecordCommandArguments),
	#[command(about = "Decode a sample with one generation and print each person")]
	Inspect(InspectCommandArguments),
}

pub fn init() -> ExitCode {
	let args = Cli::parse();
	if let Err(e) = telemetry::builder().with_filter(&args.log).init() {
		eprintln!("{e:#}");
		return ExitCode::FAILURE;
	}
	let output = match args.command {
		Commands::Matrix(args) => matrix::init(args),
		Commands::Record(args) => record::init(args),
		Commands::Inspect(args) => inspect::init(args),
	};
	if let Err(e) = output {
		error!("{e:#}");
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}
