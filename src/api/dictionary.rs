//! Free Dictionary API client
//!
//! Looks up English words and parses entries into [`WordEntry`].
//! API docs: https://dictionaryapi.dev

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Meaning, WordEntry};

/// Default API host
const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev";

/// Dictionary API error types
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Word not found")]
    NotFound,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Dictionary API client
///
/// Construct once per process and share it; the word cache built on top
/// (see `lookup::LookupService`) assumes a single client lifetime.
pub struct DictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictionaryClient {
    /// Create a new client against the public API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Look up a word.
    ///
    /// The word is percent-encoded into the request path, so queries with
    /// spaces or reserved characters stay well-formed. Any non-2xx status
    /// and any payload that does not contain at least one entry resolve to
    /// [`DictionaryError::NotFound`] / [`DictionaryError::InvalidResponse`];
    /// malformed payloads never panic.
    pub async fn lookup(&self, word: &str) -> Result<WordEntry, DictionaryError> {
        let url = format!(
            "{}/api/v2/entries/en/{}",
            self.base_url,
            urlencoding::encode(word)
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(DictionaryError::ServerError(status.as_u16()));
        }
        if !status.is_success() {
            // The API answers 404 for unknown words; treat every other
            // non-2xx the same way, per the uniform "not found" contract.
            return Err(DictionaryError::NotFound);
        }

        let body = response.text().await?;
        let entries: Vec<EntryRaw> = serde_json::from_str(&body)
            .map_err(|e| DictionaryError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        entries
            .into_iter()
            .next()
            .map(EntryRaw::into_entry)
            .ok_or_else(|| DictionaryError::InvalidResponse("empty entry list".into()))
    }
}

impl Default for DictionaryClient {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct EntryRaw {
    word: String,
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<PhoneticRaw>,
    #[serde(default)]
    meanings: Vec<MeaningRaw>,
}

impl EntryRaw {
    fn into_entry(self) -> WordEntry {
        // Some entries omit the top-level phonetic but carry text variants
        // in the phonetics list.
        let phonetic = self
            .phonetic
            .filter(|p| !p.is_empty())
            .or_else(|| {
                self.phonetics
                    .iter()
                    .find_map(|p| p.text.clone().filter(|t| !t.is_empty()))
            });

        let audio_url = self
            .phonetics
            .into_iter()
            .find_map(|p| p.audio.filter(|a| !a.is_empty()));

        let meanings = self
            .meanings
            .into_iter()
            .filter_map(MeaningRaw::into_meaning)
            .collect();

        WordEntry {
            word: self.word,
            phonetic,
            meanings,
            audio_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PhoneticRaw {
    text: Option<String>,
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MeaningRaw {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<DefinitionRaw>,
}

impl MeaningRaw {
    /// Keep the primary definition; meanings without any are dropped
    fn into_meaning(self) -> Option<Meaning> {
        let first = self.definitions.into_iter().next()?;
        Some(Meaning {
            part_of_speech: self.part_of_speech,
            definition: first.definition,
            example: first.example.filter(|e| !e.is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct DefinitionRaw {
    definition: String,
    example: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_folds_first_audio() {
        let raw = EntryRaw {
            word: "hello".into(),
            phonetic: Some("/həˈləʊ/".into()),
            phonetics: vec![
                PhoneticRaw {
                    text: None,
                    audio: Some(String::new()),
                },
                PhoneticRaw {
                    text: Some("/həˈləʊ/".into()),
                    audio: Some("https://example.com/hello.mp3".into()),
                },
            ],
            meanings: vec![],
        };

        let entry = raw.into_entry();
        assert_eq!(entry.audio_url.as_deref(), Some("https://example.com/hello.mp3"));
    }

    #[test]
    fn test_entry_phonetic_fallback() {
        let raw = EntryRaw {
            word: "word".into(),
            phonetic: None,
            phonetics: vec![PhoneticRaw {
                text: Some("/wɜːd/".into()),
                audio: None,
            }],
            meanings: vec![],
        };

        let entry = raw.into_entry();
        assert_eq!(entry.phonetic.as_deref(), Some("/wɜːd/"));
        assert!(entry.audio_url.is_none());
    }

    #[test]
    fn test_meaning_without_definitions_dropped() {
        let raw = EntryRaw {
            word: "word".into(),
            phonetic: None,
            phonetics: vec![],
            meanings: vec![
                MeaningRaw {
                    part_of_speech: "noun".into(),
                    definitions: vec![],
                },
                MeaningRaw {
                    part_of_speech: "verb".into(),
                    definitions: vec![DefinitionRaw {
                        definition: "to express in words".into(),
                        example: None,
                    }],
                },
            ],
        };

        let entry = raw.into_entry();
        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].part_of_speech, "verb");
    }
}
