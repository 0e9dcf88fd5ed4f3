use log::{debug, info, warn};

use crate::error::DetectError;
use crate::io::fetch::TextFetcher;
use crate::letters::LetterCounter;

use super::types::FrequencyProfile;

/// Default number of sampled articles per base profile.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Builds frequency profiles from sampled articles or a single text.
pub struct ProfileBuilder {
    sample_count: usize,
    retry_limit: u32,
}

impl ProfileBuilder {
    pub fn new(sample_count: usize) -> Self {
        ProfileBuilder {
            sample_count,
            retry_limit: 0,
        }
    }

    /// Allow up to `retry_limit` additional attempts per failed article
    /// fetch. The default of 0 keeps the all-or-nothing build: one failed
    /// fetch aborts the run rather than silently biasing the aggregate.
    pub fn with_retry_limit(mut self, retry_limit: u32) -> Self {
        self.retry_limit = retry_limit;
        self
    }

    /// Build the base profile for a language from `sample_count` randomly
    /// sampled articles.
    ///
    /// Counts are pooled across all samples and normalized once at the
    /// end, not averaged per sample. Any fetch that still fails after the
    /// retry budget aborts the whole build.
    pub fn build_base_profile<F>(
        &self,
        language: &str,
        fetcher: &F,
    ) -> Result<FrequencyProfile, DetectError>
    where
        F: TextFetcher + ?Sized,
    {
        info!(
            "Building base profile for {} from {} sampled articles...",
            language, self.sample_count
        );

        let mut counter = LetterCounter::new();
        for i in 0..self.sample_count {
            let article = self.fetch_sample(language, fetcher)?;
            counter.count_text(&article);

            debug!("Progress: {}/{} articles", i + 1, self.sample_count);
            if (i + 1) % 100 == 0 {
                info!(
                    "Progress: {}/{} articles for {}",
                    i + 1,
                    self.sample_count,
                    language
                );
            }
        }

        info!(
            "Sampled {} alphabetic characters for {}",
            counter.total(),
            language
        );
        FrequencyProfile::from_counts(counter.counts(), counter.total())
    }

    /// Build the control profile from a single already-fetched text.
    pub fn build_control_profile(&self, text: &str) -> Result<FrequencyProfile, DetectError> {
        let mut counter = LetterCounter::new();
        counter.count_text(text);

        debug!(
            "Control sample has {} alphabetic characters",
            counter.total()
        );
        FrequencyProfile::from_counts(counter.counts(), counter.total())
    }

    fn fetch_sample<F>(&self, language: &str, fetcher: &F) -> Result<String, DetectError>
    where
        F: TextFetcher + ?Sized,
    {
        let mut attempt = 0;
        loop {
            match fetcher.fetch_random_article(language) {
                Ok(article) => return Ok(article),
                Err(err) if attempt < self.retry_limit => {
                    attempt += 1;
                    warn!(
                        "Fetch failed for {} (retry {}/{}): {}",
                        language, attempt, self.retry_limit, err
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT)
    }
}
