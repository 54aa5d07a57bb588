mod common;

use cine_core::model::EntityField;
use cine_core::resolver::name::ResolveError;
use cine_core::resolver::resolve_entity;
use cine_core::{Advisory, Catalog, MatchKind, Resolution, ResolverConfig};
use common::{movie, sample_catalog};

fn config() -> ResolverConfig {
    ResolverConfig::default()
}

#[test]
fn surname_shared_by_two_directors_needs_disambiguation() {
    let catalog = sample_catalog();
    let outcome = resolve_entity(&catalog, EntityField::Director, "Nolan", &config()).unwrap();

    match outcome.resolution {
        Resolution::Ambiguous { candidates } => {
            assert!(candidates.contains(&"Christopher Nolan".to_string()));
            assert!(candidates.contains(&"Jonathan Nolan".to_string()));
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
    assert_eq!(outcome.advisory, Some(Advisory::Ambiguous));
}

#[test]
fn unique_surname_confirms_the_full_name() {
    let catalog = Catalog::from_entries(vec![movie(
        "Inception",
        "Christopher Nolan",
        &["Leonardo DiCaprio"],
        "Sci-Fi",
        Some(2010),
        Some(8.8),
        2_067_042,
        None,
    )]);
    let outcome = resolve_entity(&catalog, EntityField::Director, "Nolan", &config()).unwrap();

    assert_eq!(
        outcome.resolution,
        Resolution::Resolved {
            name: "Christopher Nolan".to_string(),
            kind: MatchKind::Exact,
        }
    );
    assert_eq!(outcome.advisory, None);
}

#[test]
fn full_name_input_bypasses_the_surname_collision() {
    let catalog = sample_catalog();
    let outcome =
        resolve_entity(&catalog, EntityField::Director, "Christopher Nolan", &config()).unwrap();

    assert_eq!(
        outcome.resolution,
        Resolution::Resolved {
            name: "Christopher Nolan".to_string(),
            kind: MatchKind::Exact,
        }
    );
}

#[test]
fn misspelled_surname_resolves_with_a_correction_advisory() {
    let catalog = sample_catalog();
    let outcome =
        resolve_entity(&catalog, EntityField::Director, "Tarantinno", &config()).unwrap();

    assert_eq!(
        outcome.resolution,
        Resolution::Resolved {
            name: "Quentin Tarantino".to_string(),
            kind: MatchKind::Fuzzy,
        }
    );
    assert_eq!(outcome.advisory, Some(Advisory::DidYouMean));
}

#[test]
fn corrected_surname_still_collides_when_shared() {
    let catalog = sample_catalog();
    // "Nolam" corrects to a Nolan; the surname is shared, so the correction
    // must not silently pick one of the two.
    let outcome = resolve_entity(&catalog, EntityField::Director, "Nolam", &config()).unwrap();

    match outcome.resolution {
        Resolution::Ambiguous { candidates } => assert_eq!(candidates.len(), 2),
        other => panic!("expected ambiguity, got {other:?}"),
    }
}

#[test]
fn empty_input_is_invalid_before_any_matching() {
    let catalog = sample_catalog();
    let error = resolve_entity(&catalog, EntityField::Director, "   ", &config()).unwrap_err();
    assert_eq!(error, ResolveError::EmptyInput);
}

#[test]
fn unknown_name_is_not_found() {
    let catalog = sample_catalog();
    let outcome =
        resolve_entity(&catalog, EntityField::Director, "Zzyzx Quux", &config()).unwrap();

    assert_eq!(outcome.resolution, Resolution::NotFound);
    assert_eq!(outcome.advisory, Some(Advisory::NotFound));
}

#[test]
fn actor_resolution_walks_the_star_slots() {
    let catalog = sample_catalog();
    let outcome = resolve_entity(&catalog, EntityField::Actor, "Hanks", &config()).unwrap();

    assert_eq!(
        outcome.resolution,
        Resolution::Resolved {
            name: "Tom Hanks".to_string(),
            kind: MatchKind::Exact,
        }
    );
}

#[test]
fn title_fragment_matching_several_titles_is_ambiguous() {
    let catalog = sample_catalog();
    let outcome = resolve_entity(&catalog, EntityField::Title, "The", &config()).unwrap();

    match outcome.resolution {
        Resolution::Ambiguous { candidates } => {
            assert!(candidates.contains(&"The Prestige".to_string()));
            assert!(candidates.contains(&"The Terminal".to_string()));
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
}

#[test]
fn title_fragment_with_one_match_resolves() {
    let catalog = sample_catalog();
    let outcome = resolve_entity(&catalog, EntityField::Title, "inception", &config()).unwrap();

    assert_eq!(
        outcome.resolution,
        Resolution::Resolved {
            name: "Inception".to_string(),
            kind: MatchKind::Exact,
        }
    );
}

#[test]
fn a_stricter_threshold_turns_a_correction_into_not_found() {
    let catalog = sample_catalog();
    let strict = ResolverConfig {
        director_threshold: Some(99.0),
        ..Default::default()
    };
    let outcome = resolve_entity(&catalog, EntityField::Director, "Tarantinno", &strict).unwrap();
    assert_eq!(outcome.resolution, Resolution::NotFound);
}
