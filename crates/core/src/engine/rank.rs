// Result ordering and capping. Sorting is stable, so entries that compare
// equal keep dataset order, and the cap is applied only after sorting so it
// never displaces a higher-ranked entry.

use crate::model::{Movie, QueryConstraints};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    DatasetOrder,
    /// Year descending, then rating descending.
    YearThenRating,
    /// Vote count descending, then normalized gross descending.
    VotesThenGross,
}

/// Ordering implied by a constraint record: votes/gross thresholds take
/// precedence over year/genre/rating criteria; identity-only queries keep
/// dataset order.
pub fn sort_order_for(constraints: &QueryConstraints) -> SortOrder {
    if constraints.min_votes.is_some() || constraints.min_gross.is_some() {
        SortOrder::VotesThenGross
    } else if constraints.min_year.is_some()
        || constraints.min_rating.is_some()
        || !constraints.genres.is_empty()
    {
        SortOrder::YearThenRating
    } else {
        SortOrder::DatasetOrder
    }
}

pub fn rank<'a>(
    mut entries: Vec<&'a Movie>,
    order: SortOrder,
    limit: Option<usize>,
) -> Vec<&'a Movie> {
    match order {
        SortOrder::DatasetOrder => {}
        SortOrder::YearThenRating => entries.sort_by(|a, b| {
            b.year
                .unwrap_or(0)
                .cmp(&a.year.unwrap_or(0))
                .then_with(|| {
                    b.rating
                        .unwrap_or(0.0)
                        .total_cmp(&a.rating.unwrap_or(0.0))
                })
        }),
        SortOrder::VotesThenGross => entries.sort_by(|a, b| {
            b.votes.cmp(&a.votes).then_with(|| {
                b.normalized_gross()
                    .unwrap_or(0.0)
                    .total_cmp(&a.normalized_gross().unwrap_or(0.0))
            })
        }),
    }

    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}
