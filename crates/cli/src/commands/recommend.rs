use anyhow::Result;
use clap::Parser;
use cine_core::model::QueryConstraints;
use cine_core::validation::{parse_genres, parse_rating};
use cine_core::{recommend, Catalog};

/// Recommend movies by year, genres and rating
#[derive(Debug, Parser)]
pub struct RecommendCommand {
    /// Earliest acceptable release year
    #[arg(long, value_name = "YEAR")]
    pub min_year: Option<i32>,

    /// Genre tags the recommendation must all carry (comma-separated)
    #[arg(long, value_name = "GENRES")]
    pub genres: Option<String>,

    /// Minimum rating (0-10)
    #[arg(long, value_name = "RATING")]
    pub min_rating: Option<String>,
}

impl RecommendCommand {
    pub fn execute(&self, catalog: &Catalog) -> Result<i32> {
        let genres = self
            .genres
            .as_deref()
            .map(parse_genres)
            .transpose()?
            .unwrap_or_default();
        let min_rating = self
            .min_rating
            .as_deref()
            .map(parse_rating)
            .transpose()?;

        let constraints = QueryConstraints {
            min_year: self.min_year,
            genres,
            min_rating,
            ..Default::default()
        };

        let results = recommend(catalog, &constraints);
        println!("{}", serde_json::to_string_pretty(&results)?);
        Ok(if results.is_empty() { 1 } else { 0 })
    }
}
