pub(crate) mod fetch;
pub(crate) mod writer;

pub use fetch::{HttpTextFetcher, TextFetcher};
