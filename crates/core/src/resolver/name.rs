// Name resolution - exact-containment pass, then fuzzy fallback.
// The fuzzy matching mode depends on the token count of the input: multi-word
// inputs match against full reference names, single-word inputs against the
// last token of each reference name, so "Nolan" resolves against directors'
// surnames rather than requiring the full name.

use thiserror::Error;
use tracing::debug;

use crate::resolver::outcome::ResolutionAttempt;
use crate::resolver::similarity::{
    JaroWinkler, SimilarityScorer, DEFAULT_ACCEPTANCE_THRESHOLD,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("resolution input is empty")]
    EmptyInput,
}

pub struct NameResolver<S = JaroWinkler> {
    scorer: S,
    threshold: f64,
}

impl NameResolver<JaroWinkler> {
    pub fn new() -> Self {
        Self::with_scorer(JaroWinkler, DEFAULT_ACCEPTANCE_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self::with_scorer(JaroWinkler, threshold)
    }
}

impl Default for NameResolver<JaroWinkler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SimilarityScorer> NameResolver<S> {
    pub fn with_scorer(scorer: S, threshold: f64) -> Self {
        Self { scorer, threshold }
    }

    /// Resolve free-text input against a reference set.
    ///
    /// The exact pass returns every reference value containing the input as a
    /// case-insensitive substring; the fuzzy fallback only runs when the
    /// exact pass yields nothing. Ties in fuzzy score go to the first
    /// candidate in reference iteration order.
    pub fn resolve(
        &self,
        input: &str,
        references: &[String],
    ) -> Result<ResolutionAttempt, ResolveError> {
        let needle = input.trim();
        if needle.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        let lowered = needle.to_lowercase();
        let direct: Vec<String> = references
            .iter()
            .filter(|reference| reference.to_lowercase().contains(&lowered))
            .cloned()
            .collect();
        if !direct.is_empty() {
            return Ok(ResolutionAttempt::Direct(direct));
        }

        let surname_mode = needle.split_whitespace().count() == 1;
        let mut best: Option<(&String, f64)> = None;
        for reference in references {
            let target = if surname_mode {
                last_token(reference)
            } else {
                reference.as_str()
            };
            let score = self.scorer.score(needle, target);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((reference, score));
            }
        }

        match best {
            Some((name, score)) if score >= self.threshold => {
                debug!(
                    input = needle,
                    corrected = name.as_str(),
                    score,
                    surname_mode,
                    "fuzzy correction accepted"
                );
                Ok(ResolutionAttempt::Corrected {
                    name: name.clone(),
                    score,
                })
            }
            _ => Ok(ResolutionAttempt::NotFound),
        }
    }
}

/// Last whitespace-delimited token of a name; the name itself when it has no
/// whitespace.
pub fn last_token(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or(name)
}
