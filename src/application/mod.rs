mod request_executor;
mod profile_aggregator;
mod url_parser;
mod config;

#[cfg(test)]
mod test_support;

pub use request_executor::RequestExecutor;
pub use profile_aggregator::ProfileAggregator;
pub use url_parser::parse_target;
pub use config::{Config, parse_duration};
