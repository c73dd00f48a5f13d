//! Element id + window in, nine proportion rows out.

pub mod fetcher;
pub mod request;
pub mod rows;
pub mod time_range;

pub use self::fetcher::StateDistributionFetcher;
pub use self::request::build_request;
pub use self::rows::{build_rows, PercentFormat};
pub use self::time_range::{format_time_range, format_time_range_in};
