use crate::model::{Movie, QueryConstraints};

/// Entries satisfying every present constraint, in dataset order.
pub fn apply_constraints<'a>(
    entries: &'a [Movie],
    constraints: &QueryConstraints,
) -> Vec<&'a Movie> {
    entries
        .iter()
        .filter(|entry| matches_constraints(entry, constraints))
        .collect()
}

/// Conjunction of all present constraints; an absent constraint imposes no
/// restriction.
pub fn matches_constraints(entry: &Movie, constraints: &QueryConstraints) -> bool {
    if let Some(min_year) = constraints.min_year {
        // Unparseable years count as year 0, failing any positive minimum.
        if entry.year.unwrap_or(0) < min_year {
            return false;
        }
    }

    if !constraints.genres.is_empty() {
        let genre = entry.genre.to_lowercase();
        let all_present = constraints
            .genres
            .iter()
            .all(|tag| genre.contains(&tag.trim().to_lowercase()));
        if !all_present {
            return false;
        }
    }

    if let Some(min_rating) = constraints.min_rating {
        match entry.rating {
            Some(rating) if rating >= min_rating => {}
            _ => return false,
        }
    }

    if let Some(min_votes) = constraints.min_votes {
        if entry.votes < min_votes {
            return false;
        }
    }

    if let Some(min_gross) = constraints.min_gross {
        // Entries whose gross does not parse are excluded, never treated as 0.
        match entry.normalized_gross() {
            Some(gross) if gross >= min_gross => {}
            _ => return false,
        }
    }

    if let Some(director) = constraints.director.as_deref() {
        if !entry.director.eq_ignore_ascii_case(director) {
            return false;
        }
    }

    if let Some(actor) = constraints.actor.as_deref() {
        if !entry
            .stars
            .iter()
            .any(|star| star.eq_ignore_ascii_case(actor))
        {
            return false;
        }
    }

    if let Some(title) = constraints.title.as_deref() {
        if !entry.title.to_lowercase().contains(&title.to_lowercase()) {
            return false;
        }
    }

    true
}
