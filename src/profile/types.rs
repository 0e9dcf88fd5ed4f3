use serde::{Deserialize, Serialize};

use crate::error::DetectError;
use crate::letters::ALPHABET_LEN;

/// Opaque short language identifier (e.g. "en", "pl", "cz"); doubles as
/// the cache key and the article-source locator.
pub type LanguageCode = String;

/// Normalized letter-frequency vector for a language or a text sample.
///
/// Entries are ordered a through z and sum to 1.0 within floating
/// tolerance. Immutable after construction. Serializes as a flat JSON
/// array of 26 numbers, which is also the on-disk cache format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyProfile {
    frequencies: [f64; ALPHABET_LEN],
}

impl FrequencyProfile {
    /// Normalize raw letter counts into frequencies.
    ///
    /// `total` must equal the sum of `counts`; a counter maintains that
    /// by construction. Fails with `EmptySample` when no alphabetic
    /// characters were observed, since dividing by zero would poison the
    /// profile with NaN.
    pub fn from_counts(counts: &[u64; ALPHABET_LEN], total: u64) -> Result<Self, DetectError> {
        debug_assert_eq!(counts.iter().sum::<u64>(), total);

        if total == 0 {
            return Err(DetectError::EmptySample);
        }

        let mut frequencies = [0.0; ALPHABET_LEN];
        for (freq, &count) in frequencies.iter_mut().zip(counts) {
            *freq = count as f64 / total as f64;
        }

        Ok(FrequencyProfile { frequencies })
    }

    /// Frequencies in alphabetical order.
    pub fn values(&self) -> &[f64] {
        &self.frequencies
    }

    /// Frequency of a single letter by alphabet index.
    pub fn frequency(&self, index: usize) -> f64 {
        self.frequencies[index]
    }

    /// Sum of all frequencies; ~1.0 for a well-formed profile.
    pub fn checksum(&self) -> f64 {
        self.frequencies.iter().sum()
    }
}

/// One row of a classification result.
#[derive(Debug, Clone)]
pub struct LanguageMatch {
    /// Language the base profile belongs to
    pub language: LanguageCode,
    /// Pearson correlation against the control profile (-1.0 to 1.0)
    pub similarity: f64,
}
