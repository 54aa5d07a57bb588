//! Entity resolution engine.
//!
//! This module turns free-text slot values into canonical catalog identities:
//! an exact-containment pass, a fuzzy fallback with score-based acceptance,
//! and surname-collision disambiguation, parameterized by field selector.
//!
//! # Example
//!
//! ```ignore
//! use cine_core::model::EntityField;
//! use cine_core::resolver::resolve_entity;
//!
//! let outcome = resolve_entity(&catalog, EntityField::Director, "Nolan", &config)?;
//! assert!(outcome.is_resolved() || outcome.advisory.is_some());
//! ```
pub mod disambiguate;
pub mod name;
pub mod outcome;
pub mod similarity;

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::ResolverConfig;
use crate::model::{EntityField, Movie};
use crate::resolver::disambiguate::disambiguate;
use crate::resolver::name::{last_token, NameResolver, ResolveError};
use crate::resolver::outcome::{
    Advisory, Decision, MatchKind, ResolutionAttempt, ResolutionOutcome,
};

/// Resolve a free-text slot value against the catalog for the given field.
///
/// Runs the resolver over the field's reference set, re-collects the catalog
/// entries consistent with what the input actually pinned down (the raw input
/// for exact hits, the corrected full name for multi-word fuzzy hits, the
/// corrected surname for single-word fuzzy hits), then applies the
/// disambiguation policy. Title resolution disambiguates on distinct matched
/// titles instead of surnames. Every path yields a fully-defined outcome.
pub fn resolve_entity(
    catalog: &Catalog,
    field: EntityField,
    input: &str,
    config: &ResolverConfig,
) -> Result<ResolutionOutcome, ResolveError> {
    let references = catalog.reference_values(field);
    let resolver = NameResolver::with_threshold(config.threshold_for(field));

    let (candidate, kind, probe, correction) = match resolver.resolve(input, &references)? {
        ResolutionAttempt::NotFound => {
            debug!(?field, input, "resolution found no candidate");
            return Ok(ResolutionOutcome::not_found(Advisory::NotFound));
        }
        ResolutionAttempt::Direct(hits) => {
            let candidate = hits[0].clone();
            (candidate, MatchKind::Exact, input.trim().to_string(), None)
        }
        ResolutionAttempt::Corrected { name, .. } => {
            let surname_mode = input.trim().split_whitespace().count() == 1;
            let probe = if surname_mode {
                last_token(&name).to_string()
            } else {
                name.clone()
            };
            (name, MatchKind::Fuzzy, probe, Some(Advisory::DidYouMean))
        }
    };

    let matched = catalog.entries_matching(field, &probe);

    if field == EntityField::Title {
        return Ok(resolve_title(&candidate, kind, correction, &matched));
    }

    let outcome = match disambiguate(&candidate, &matched, field) {
        Decision::Confirmed { name } => ResolutionOutcome::resolved(name, kind, correction),
        Decision::NeedsDisambiguation { candidates } => {
            debug!(?field, candidate = candidate.as_str(), count = candidates.len(), "surname collision");
            ResolutionOutcome::ambiguous(candidates)
        }
        Decision::Rejected => ResolutionOutcome::not_found(Advisory::ClarifyName),
    };
    Ok(outcome)
}

/// Titles carry no surname structure; several distinct titles matching the
/// probe is already the ambiguity.
fn resolve_title(
    candidate: &str,
    kind: MatchKind,
    correction: Option<Advisory>,
    matched: &[&Movie],
) -> ResolutionOutcome {
    let mut seen = HashSet::new();
    let mut titles: Vec<String> = Vec::new();
    for entry in matched {
        if seen.insert(entry.title.clone()) {
            titles.push(entry.title.clone());
        }
    }

    match titles.len() {
        0 => ResolutionOutcome::resolved(candidate.to_string(), kind, correction),
        1 => ResolutionOutcome::resolved(titles.remove(0), kind, correction),
        _ => ResolutionOutcome::ambiguous(titles),
    }
}
