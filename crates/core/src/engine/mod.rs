pub mod executor;
pub mod filter;
pub mod rank;

pub use executor::{
    execute, filmography, recommend, top_by_votes_and_gross, RECOMMENDATION_LIMIT,
    TOP_RESULTS_LIMIT,
};
pub use filter::{apply_constraints, matches_constraints};
pub use rank::{rank, sort_order_for, SortOrder};
