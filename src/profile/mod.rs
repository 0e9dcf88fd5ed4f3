pub(crate) mod builder;
pub(crate) mod classifier;
pub(crate) mod compare;
pub(crate) mod types;

pub use builder::{ProfileBuilder, DEFAULT_SAMPLE_COUNT};
pub use classifier::Classifier;
pub use types::{FrequencyProfile, LanguageCode, LanguageMatch};
