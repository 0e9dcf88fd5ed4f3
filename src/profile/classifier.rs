use log::{debug, info, warn};

use crate::cache::ProfileStore;
use crate::error::DetectError;
use crate::io::fetch::TextFetcher;

use super::builder::ProfileBuilder;
use super::compare;
use super::types::{LanguageCode, LanguageMatch};

/// Orchestrates a classification request: load or build base profiles,
/// build the control profile, rank languages by similarity.
pub struct Classifier {
    store: ProfileStore,
    builder: ProfileBuilder,
}

impl Classifier {
    pub fn new(store: ProfileStore, builder: ProfileBuilder) -> Self {
        Classifier { store, builder }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn builder(&self) -> &ProfileBuilder {
        &self.builder
    }

    /// Rank `languages` by similarity of their base profiles to the
    /// letter frequencies of `source_text`, most similar first.
    ///
    /// Base profiles missing from the cache are generated (and persisted)
    /// only if the injected `consent` capability agrees; otherwise those
    /// languages are left out of the ranking entirely. Ties keep the
    /// input order. Any error aborts the whole classification; no partial
    /// ranking is returned.
    pub fn classify<F, C>(
        &self,
        source_text: &str,
        languages: &[LanguageCode],
        fetcher: &F,
        consent: C,
    ) -> Result<Vec<LanguageMatch>, DetectError>
    where
        F: TextFetcher + ?Sized,
        C: FnOnce(&[LanguageCode]) -> bool,
    {
        let languages = dedupe(languages);
        info!("Classifying against {} candidate languages", languages.len());

        let mut profiles = self.store.load_cached(&languages)?;

        let missing: Vec<LanguageCode> = languages
            .iter()
            .filter(|language| !profiles.contains_key(*language))
            .cloned()
            .collect();

        if !missing.is_empty() {
            info!("Missing base profiles for: {}", missing.join(", "));
            if consent(&missing) {
                for language in &missing {
                    let profile = self.builder.build_base_profile(language, fetcher)?;
                    self.store.save(language, &profile)?;
                    profiles.insert(language.clone(), profile);
                }
            } else {
                warn!(
                    "Proceeding without base profiles for: {}",
                    missing.join(", ")
                );
            }
        }

        let control = self.builder.build_control_profile(source_text)?;

        let mut matches = Vec::with_capacity(profiles.len());
        for language in &languages {
            let Some(base) = profiles.get(language) else {
                continue;
            };
            let similarity = compare::similarity(base, &control)?;
            debug!("Similarity for {}: {:.6}", language, similarity);
            matches.push(LanguageMatch {
                language: language.clone(),
                similarity,
            });
        }

        // Stable sort: equal scores keep the caller's language order.
        matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        info!("Ranked {} languages", matches.len());
        Ok(matches)
    }
}

fn dedupe(languages: &[LanguageCode]) -> Vec<LanguageCode> {
    let mut seen = Vec::with_capacity(languages.len());
    for language in languages {
        if !seen.contains(language) {
            seen.push(language.clone());
        }
    }
    seen
}
