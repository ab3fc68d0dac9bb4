mod http;
mod url;

pub use http::{Fetcher, HttpFetcher};
pub use url::{file_name, parse_url};
