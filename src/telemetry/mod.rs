mod logs;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cnf::DEFAULT_LOG;

#[derive(Default, Debug, Clone)]
pub struct Builder {
	filter: Option<String>,
}

pub fn builder() -> Builder {
	Builder::default()
}

impl Builder {
	/// Set the log level or filter directives on the builder
	pub fn with_filter(mut self, filter: &str) -> Self {
		self.filter = Some(filter.to_owned());
		self
	}

	/// Build a tracing dispatcher with the fmt subscriber (logs)
	pub fn build(self) -> Result<Box<dyn Subscriber + Send + Sync + 'static>> {
		let directives = self.filter.as_deref().unwrap_or(DEFAULT_LOG);
		let filter = EnvFilter::try_new(directives)
			.with_context(|| format!("Invalid log filter '{directives}'"))?;
		let registry = tracing_subscriber::registry();
		let registry = registry.with(logs::new(filter)?);
		Ok(Box::new(registry))
	}

	/// tracing pipeline
	pub fn init(self) -> Result<()> {
		self.build()?.try_init().context("Failed to install the log subscriber")
	}
}

#[cfg(test)]
mod tests {
	use tracing::{Level, span};
	use tracing_subscriber::util::SubscriberInitExt;

	use crate::telemetry;

	#[test]
	fn builds_with_a_level() {
		let _enter = telemetry::builder().with_filter("debug").build().unwrap().set_default();
		let span = span!(Level::INFO, "test-rollbook-span");
		let _enter = span.enter();
		tracing::info!("test-rollbook-event");
	}

	#[test]
	fn builds_with_directives() {
		assert!(telemetry::builder().with_filter("rollbook_compat=trace,warn").build().is_ok());
		assert!(telemetry::builder().build().is_ok());
	}

	#[test]
	fn rejects_an_invalid_filter() {
		assert!(telemetry::builder().with_filter("rollbook=[=").build().is_err());
	}
}
