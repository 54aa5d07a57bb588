// Query execution - applies a constraint record to the catalog and returns
// an ordered, capped result set.

use tracing::debug;

use crate::catalog::Catalog;
use crate::engine::filter::apply_constraints;
use crate::engine::rank::{rank, sort_order_for, SortOrder};
use crate::model::{Movie, QueryConstraints};

/// Cap for recommendation queries.
pub const RECOMMENDATION_LIMIT: usize = 5;
/// Cap for the votes/gross query.
pub const TOP_RESULTS_LIMIT: usize = 10;

/// Apply `constraints` to the catalog, order by the constraint-implied sort,
/// and cap to `limit` entries (after sorting).
pub fn execute<'a>(
    catalog: &'a Catalog,
    constraints: &QueryConstraints,
    limit: Option<usize>,
) -> Vec<&'a Movie> {
    let matched = apply_constraints(catalog.entries(), constraints);
    debug!(matched = matched.len(), ?limit, "constraints applied");
    rank(matched, sort_order_for(constraints), limit)
}

/// All films by a confirmed director identity, optionally refined by a
/// minimum rating. Uncapped, dataset order; callers derive the film count
/// from the result length.
pub fn filmography<'a>(
    catalog: &'a Catalog,
    director: &str,
    min_rating: Option<f64>,
) -> Vec<&'a Movie> {
    let constraints = QueryConstraints {
        director: Some(director.to_string()),
        min_rating,
        ..Default::default()
    };
    apply_constraints(catalog.entries(), &constraints)
}

/// Recommendation query over year/genre/rating preferences: year descending,
/// then rating descending, capped to [`RECOMMENDATION_LIMIT`].
pub fn recommend<'a>(catalog: &'a Catalog, constraints: &QueryConstraints) -> Vec<&'a Movie> {
    rank(
        apply_constraints(catalog.entries(), constraints),
        SortOrder::YearThenRating,
        Some(RECOMMENDATION_LIMIT),
    )
}

/// Popularity query: vote count descending, then gross descending, capped to
/// [`TOP_RESULTS_LIMIT`].
pub fn top_by_votes_and_gross<'a>(
    catalog: &'a Catalog,
    min_votes: u64,
    min_gross: f64,
) -> Vec<&'a Movie> {
    let constraints = QueryConstraints {
        min_votes: Some(min_votes),
        min_gross: Some(min_gross),
        ..Default::default()
    };
    rank(
        apply_constraints(catalog.entries(), &constraints),
        SortOrder::VotesThenGross,
        Some(TOP_RESULTS_LIMIT),
    )
}
