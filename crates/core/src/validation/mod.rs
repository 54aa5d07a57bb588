//! Slot validation.
//!
//! Raw slot text is validated and parsed here before it enters a constraint
//! record. Failures are per-slot values the caller surfaces as a validation
//! message; the offending slot simply stays unset.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Genre tags accepted by [`parse_genres`].
pub const VALID_GENRES: &[&str] = &[
    "Drama",
    "Crime",
    "Action",
    "Adventure",
    "Biography",
    "History",
    "Sci-Fi",
    "Romance",
    "Western",
    "Fantasy",
    "Comedy",
    "Thriller",
    "Animation",
    "Family",
    "War",
    "Mystery",
    "Music",
    "Horror",
    "Musical",
    "Film-Noir",
    "Sport",
];

lazy_static! {
    static ref VOTES_PATTERN: Regex = Regex::new(r"^\d+$").expect("votes pattern");
    static ref GROSS_PATTERN: Regex = Regex::new(r"^\d+(\.\d+)?$").expect("gross pattern");
    static ref DIGIT_PATTERN: Regex = Regex::new(r"\d").expect("digit pattern");
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("rating '{value}' is not a number between 0 and 10")]
    InvalidRating { value: String },
    #[error("votes '{value}' is not a positive integer")]
    InvalidVotes { value: String },
    #[error("gross '{value}' is not a positive number")]
    InvalidGross { value: String },
    #[error("unknown genres: {genres:?}")]
    UnknownGenres { genres: Vec<String> },
    #[error("'{value}' is not a usable person name")]
    InvalidName { value: String },
}

/// Parse a rating slot. A comma decimal separator is normalized to a dot;
/// the value must lie in [0.0, 10.0].
pub fn parse_rating(value: &str) -> Result<f64, SlotError> {
    let normalized = value.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(rating) if (0.0..=10.0).contains(&rating) => Ok(rating),
        _ => Err(SlotError::InvalidRating {
            value: value.to_string(),
        }),
    }
}

/// Parse a votes slot: digits only, strictly positive.
pub fn parse_votes(value: &str) -> Result<u64, SlotError> {
    let trimmed = value.trim();
    let invalid = || SlotError::InvalidVotes {
        value: value.to_string(),
    };
    if !VOTES_PATTERN.is_match(trimmed) {
        return Err(invalid());
    }
    match trimmed.parse::<u64>() {
        Ok(votes) if votes > 0 => Ok(votes),
        _ => Err(invalid()),
    }
}

/// Parse a gross slot: a positive integer or decimal with a dot separator.
pub fn parse_gross(value: &str) -> Result<f64, SlotError> {
    let trimmed = value.trim();
    let invalid = || SlotError::InvalidGross {
        value: value.to_string(),
    };
    if !GROSS_PATTERN.is_match(trimmed) {
        return Err(invalid());
    }
    match trimmed.parse::<f64>() {
        Ok(gross) if gross > 0.0 => Ok(gross),
        _ => Err(invalid()),
    }
}

/// Parse a comma-separated genre slot against [`VALID_GENRES`]. Returns the
/// accepted tags lowercased; the error names every rejected tag.
pub fn parse_genres(value: &str) -> Result<Vec<String>, SlotError> {
    let genres: Vec<String> = value
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    let rejected: Vec<String> = genres
        .iter()
        .filter(|tag| {
            !VALID_GENRES
                .iter()
                .any(|valid| valid.eq_ignore_ascii_case(tag))
        })
        .cloned()
        .collect();

    if genres.is_empty() || !rejected.is_empty() {
        return Err(SlotError::UnknownGenres { genres: rejected });
    }
    Ok(genres)
}

/// A person-name slot must be non-empty after trimming and free of digits.
pub fn validate_person_name(value: &str) -> Result<String, SlotError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || DIGIT_PATTERN.is_match(trimmed) {
        return Err(SlotError::InvalidName {
            value: value.to_string(),
        });
    }
    Ok(trimmed.to_string())
}
