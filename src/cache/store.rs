use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::DetectError;
use crate::profile::{FrequencyProfile, LanguageCode};

use super::types::ProfileSummary;

/// Persists base profiles as one JSON file per language code.
///
/// Each entry is a flat array of 26 frequencies; the filename stem is the
/// language code. Reads and writes are whole-file, so entries are never
/// partially visible.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// Create a store over an explicit cache directory. The directory is
    /// created lazily on first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        ProfileStore {
            dir: dir.as_ref().to_owned(),
        }
    }

    fn entry_path(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{language}.json"))
    }

    /// Load every cached profile whose language is in `languages`.
    ///
    /// Languages without a cache entry are simply absent from the result;
    /// entries outside the requested set are never touched.
    pub fn load_cached(
        &self,
        languages: &[LanguageCode],
    ) -> Result<HashMap<LanguageCode, FrequencyProfile>, DetectError> {
        let mut profiles = HashMap::new();
        for language in languages {
            let path = self.entry_path(language);
            if !path.exists() {
                debug!("No cached profile for {}", language);
                continue;
            }
            profiles.insert(language.clone(), read_entry(&path)?);
        }

        info!(
            "Loaded {}/{} cached profiles from {}",
            profiles.len(),
            languages.len(),
            self.dir.display()
        );
        Ok(profiles)
    }

    /// Load a single profile, if cached.
    pub fn load(&self, language: &str) -> Result<Option<FrequencyProfile>, DetectError> {
        let path = self.entry_path(language);
        if !path.exists() {
            return Ok(None);
        }
        read_entry(&path).map(Some)
    }

    /// Persist a profile under its language key, overwriting any existing
    /// entry.
    pub fn save(&self, language: &str, profile: &FrequencyProfile) -> Result<(), DetectError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.entry_path(language);
        let contents = serde_json::to_string(profile).map_err(|err| {
            DetectError::MalformedProfile {
                path: path.clone(),
                reason: err.to_string(),
            }
        })?;
        fs::write(&path, contents)?;

        info!("Saved profile for {} to {}", language, path.display());
        Ok(())
    }

    /// Summaries of all cached profiles, sorted by language.
    pub fn list(&self) -> Result<Vec<ProfileSummary>, DetectError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            summaries.push(ProfileSummary {
                language: language.to_string(),
                path: path.clone(),
            });
        }

        summaries.sort_by(|a, b| a.language.cmp(&b.language));
        Ok(summaries)
    }

    /// Remove a cached profile. Returns whether an entry existed.
    pub fn remove(&self, language: &str) -> Result<bool, DetectError> {
        let path = self.entry_path(language);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        info!("Removed cached profile for {}", language);
        Ok(true)
    }
}

fn read_entry(path: &Path) -> Result<FrequencyProfile, DetectError> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|err| DetectError::MalformedProfile {
        path: path.to_owned(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::ALPHABET_LEN;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_profile(dominant: usize) -> FrequencyProfile {
        let mut counts = [1u64; ALPHABET_LEN];
        counts[dominant] = 100;
        let total = counts.iter().sum();
        FrequencyProfile::from_counts(&counts, total).unwrap()
    }

    #[test]
    fn test_save_load_round_trip() -> Result<(), DetectError> {
        let dir = tempdir()?;
        let store = ProfileStore::new(dir.path());

        let profile = sample_profile(4);
        store.save("en", &profile)?;

        let loaded = store.load_cached(&["en".to_string()])?;
        assert_eq!(loaded.len(), 1);
        let round_tripped = &loaded["en"];
        for (a, b) in profile.values().iter().zip(round_tripped.values()) {
            assert!((a - b).abs() < 1e-12);
        }

        Ok(())
    }

    #[test]
    fn test_missing_entries_are_not_errors() -> Result<(), DetectError> {
        let dir = tempdir()?;
        let store = ProfileStore::new(dir.path());
        store.save("en", &sample_profile(4))?;

        let loaded = store.load_cached(&["en".to_string(), "pl".to_string()])?;
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key("en"));
        assert!(!loaded.contains_key("pl"));

        Ok(())
    }

    #[test]
    fn test_only_requested_languages_returned() -> Result<(), DetectError> {
        let dir = tempdir()?;
        let store = ProfileStore::new(dir.path());
        store.save("en", &sample_profile(4))?;
        store.save("pl", &sample_profile(0))?;
        store.save("cz", &sample_profile(25))?;

        let loaded = store.load_cached(&["pl".to_string()])?;
        assert_eq!(loaded.keys().collect::<Vec<_>>(), vec!["pl"]);

        Ok(())
    }

    #[test]
    fn test_malformed_entry_errors() -> Result<(), DetectError> {
        let dir = tempdir()?;
        let store = ProfileStore::new(dir.path());
        fs::create_dir_all(dir.path())?;
        fs::write(dir.path().join("en.json"), "[0.5, 0.5]")?;

        let result = store.load_cached(&["en".to_string()]);
        assert!(matches!(
            result,
            Err(DetectError::MalformedProfile { .. })
        ));

        Ok(())
    }

    #[test]
    fn test_save_overwrites() -> Result<(), DetectError> {
        let dir = tempdir()?;
        let store = ProfileStore::new(dir.path());

        store.save("en", &sample_profile(4))?;
        let replacement = sample_profile(0);
        store.save("en", &replacement)?;

        let loaded = store.load("en")?.unwrap();
        assert_eq!(loaded, replacement);

        Ok(())
    }

    #[test]
    fn test_list_sorted_by_language() -> Result<(), DetectError> {
        let dir = tempdir()?;
        let store = ProfileStore::new(dir.path());
        store.save("pl", &sample_profile(0))?;
        store.save("cz", &sample_profile(1))?;
        store.save("en", &sample_profile(2))?;

        let languages: Vec<_> = store
            .list()?
            .into_iter()
            .map(|summary| summary.language)
            .collect();
        assert_eq!(languages, vec!["cz", "en", "pl"]);

        Ok(())
    }

    #[test]
    fn test_list_empty_when_dir_missing() -> Result<(), DetectError> {
        let dir = tempdir()?;
        let store = ProfileStore::new(dir.path().join("never-created"));
        assert!(store.list()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_remove() -> Result<(), DetectError> {
        let dir = tempdir()?;
        let store = ProfileStore::new(dir.path());
        store.save("en", &sample_profile(4))?;

        assert!(store.remove("en")?);
        assert!(!store.remove("en")?);
        assert!(store.load("en")?.is_none());

        Ok(())
    }
}
