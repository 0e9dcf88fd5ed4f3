use std::time::Duration;

use crate::error::DetectError;

/// External collaborator that retrieves document text.
///
/// Failure is always an error, never an empty string, so callers can tell
/// a dead source apart from a genuinely empty document.
pub trait TextFetcher {
    /// Full text of one randomly-selected reference article for a language.
    fn fetch_random_article(&self, language: &str) -> Result<String, DetectError>;

    /// Full text of the document at a locator.
    fn fetch_document(&self, url: &str) -> Result<String, DetectError>;
}

/// Random-article source for a language code.
pub(crate) fn random_article_url(language: &str) -> String {
    format!("https://{language}.wikipedia.org/wiki/Special:Random")
}

/// Blocking HTTP fetcher (sync via ureq, no async runtime needed).
pub struct HttpTextFetcher {
    agent: ureq::Agent,
}

impl HttpTextFetcher {
    /// Create a fetcher with a global per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::config::Config::builder()
            .timeout_global(Some(timeout))
            .build()
            .new_agent();

        HttpTextFetcher { agent }
    }

    fn get(&self, url: &str) -> Result<String, DetectError> {
        let response = self.agent.get(url).call().map_err(|err| DetectError::Fetch {
            locator: url.to_string(),
            source: Box::new(err),
        })?;

        response
            .into_body()
            .read_to_string()
            .map_err(|err| DetectError::Fetch {
                locator: url.to_string(),
                source: Box::new(err),
            })
    }
}

impl TextFetcher for HttpTextFetcher {
    fn fetch_random_article(&self, language: &str) -> Result<String, DetectError> {
        self.get(&random_article_url(language))
    }

    fn fetch_document(&self, url: &str) -> Result<String, DetectError> {
        self.get(url)
    }
}
