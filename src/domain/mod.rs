mod error;
mod response;
mod sample;
pub mod stats;
mod summary;
mod target;

pub use error::{ErrorClass, GetprofError};
pub use response::{RawResponse, StatusCode};
pub use sample::Sample;
pub use summary::ProfileSummary;
pub use target::{IpFamily, ResolvedTarget, Target};
