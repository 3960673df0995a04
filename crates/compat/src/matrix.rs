use tracing::{info, warn};

use crate::config::MatrixConfig;
use crate::err::SetupError;
use crate::fixture::FixtureStore;
use crate::handle::{GenerationHandle, load_configured};
use crate::names::NameSource;
use crate::report::{MatrixReport, Mismatch, PairReport};
use crate::sample::{Sample, produce_sample};

/// Loads every configured generation, gathers one sample per writer, and
/// reads every sample with every generation.
///
/// Only setup problems are returned as errors. Incompatibilities are
/// collected in the report, one entry per writer and reader pair.
pub fn run_matrix(
	config: &MatrixConfig,
	names: &mut dyn NameSource,
) -> Result<MatrixReport, SetupError> {
	if config.generations.is_empty() {
		return Err(SetupError::NoGenerations);
	}
	for key in config.unused_keys() {
		warn!(key = %key, "Ignoring unknown configuration key");
	}
	// Load each generation in its own handle
	let mut handles: Vec<GenerationHandle> = Vec::with_capacity(config.generations.len());
	for entry in config.generations.iter() {
		if handles.iter().any(|h| h.id() == entry.id) {
			return Err(SetupError::DuplicateGeneration(entry.id.clone()));
		}
		handles.push(load_configured(entry)?);
	}
	// Gather the sample written by each generation
	let fixtures = FixtureStore::new(&config.fixtures);
	let mut samples = Vec::with_capacity(handles.len());
	for (entry, handle) in config.generations.iter().zip(handles.iter()) {
		let sample = match entry.sample.as_deref() {
			Some(id) => Sample::recorded(handle, id, fixtures.load(id)?),
			None => produce_sample(handle, names).map_err(|source| SetupError::Sample {
				id: handle.id().to_owned(),
				source,
			})?,
		};
		samples.push(sample);
	}
	let report = run_pairs(&samples, &handles);
	info!(pairs = report.pairs().len(), failed = report.failed().count(), "Finished matrix");
	Ok(report)
}

/// Reads every sample with every reader.
pub fn run_pairs(samples: &[Sample], readers: &[GenerationHandle]) -> MatrixReport {
	let mut report = MatrixReport::default();
	for sample in samples {
		for reader in readers {
			report.push(check_pair(sample, reader));
		}
	}
	report
}

/// Reads one sample with one reader and checks nothing was lost beyond what
/// the reader is unable to represent.
pub fn check_pair(sample: &Sample, reader: &GenerationHandle) -> PairReport {
	let mut pair = PairReport::new(sample.writer(), reader.id());
	let decoded = match reader.cross_decode(sample.bytes()) {
		Ok(v) => v,
		Err(e) => {
			pair.fail(e.index(), Mismatch::Decode(e.to_string()));
			log_pair(&pair);
			return pair;
		}
	};
	pair.records = decoded.len();
	if decoded.len() != sample.count() {
		pair.fail(
			None,
			Mismatch::Count {
				expected: sample.count(),
				actual: decoded.len(),
			},
		);
	}
	let labels = reader.labels();
	for (i, got) in decoded.iter().enumerate() {
		if !labels.contains(&got.label) {
			pair.fail(Some(i), Mismatch::UnknownLabel(got.label.to_owned()));
		}
	}
	match sample.expected() {
		Err(e) => pair.fail(None, Mismatch::UnreadableSample(e.to_owned())),
		Ok(expected) => {
			for (i, (want, got)) in expected.iter().zip(decoded.iter()).enumerate() {
				if want.name != got.name {
					pair.fail(
						Some(i),
						Mismatch::Name {
							expected: want.name.clone(),
							actual: got.name.clone(),
						},
					);
				}
				// A label the reader does not know is coarsened to its fallback
				let label = if labels.contains(&want.label) {
					want.label
				} else {
					reader.fallback()
				};
				if label != got.label {
					pair.fail(
						Some(i),
						Mismatch::Label {
							expected: label.to_owned(),
							actual: got.label.to_owned(),
						},
					);
				} else if label != want.label {
					pair.coarsened += 1;
				}
			}
		}
	}
	log_pair(&pair);
	pair
}

fn log_pair(pair: &PairReport) {
	if pair.passed() {
		info!(
			writer = %pair.writer,
			reader = %pair.reader,
			records = pair.records,
			coarsened = pair.coarsened,
			"Pair is compatible"
		);
	} else {
		for failure in pair.failures.iter() {
			warn!(writer = %pair.writer, reader = %pair.reader, "{failure}");
		}
	}
}
