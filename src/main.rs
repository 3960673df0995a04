use std::process::ExitCode;

fn main() -> ExitCode {
	rollbook::init()
}
