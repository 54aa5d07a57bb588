use anyhow::Result;
use clap::Parser;
use cine_core::validation::{parse_gross, parse_votes};
use cine_core::{top_by_votes_and_gross, Catalog};

/// Top movies by vote count and gross revenue
#[derive(Debug, Parser)]
pub struct TopCommand {
    /// Minimum number of votes (positive integer)
    #[arg(long, value_name = "VOTES")]
    pub min_votes: String,

    /// Minimum gross revenue in dollars (decimal separator: '.')
    #[arg(long, value_name = "GROSS")]
    pub min_gross: String,
}

impl TopCommand {
    pub fn execute(&self, catalog: &Catalog) -> Result<i32> {
        let min_votes = parse_votes(&self.min_votes)?;
        let min_gross = parse_gross(&self.min_gross)?;

        let results = top_by_votes_and_gross(catalog, min_votes, min_gross);
        println!("{}", serde_json::to_string_pretty(&results)?);
        Ok(if results.is_empty() { 1 } else { 0 })
    }
}
