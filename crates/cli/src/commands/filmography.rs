use anyhow::Result;
use clap::Parser;
use cine_core::model::EntityField;
use cine_core::validation::{parse_rating, validate_person_name};
use cine_core::{filmography, resolve_entity, Catalog, Resolution, ResolverConfig};
use serde::Serialize;
use serde_json::json;

/// List films by a director, with the film count
#[derive(Debug, Parser)]
pub struct FilmographyCommand {
    /// Director name, full or surname only
    #[arg(value_name = "DIRECTOR")]
    pub director: String,

    /// Only count films rated at least this highly (0-10)
    #[arg(long, value_name = "RATING")]
    pub min_rating: Option<String>,
}

#[derive(Debug, Serialize)]
struct FilmographyReport<'a> {
    director: &'a str,
    count: usize,
    films: Vec<&'a cine_core::Movie>,
}

impl FilmographyCommand {
    pub fn execute(&self, catalog: &Catalog, config: &ResolverConfig) -> Result<i32> {
        let name = validate_person_name(&self.director)?;
        let min_rating = self
            .min_rating
            .as_deref()
            .map(parse_rating)
            .transpose()?;

        let outcome = resolve_entity(catalog, EntityField::Director, &name, config)?;
        let director = match &outcome.resolution {
            Resolution::Resolved { name, .. } => name,
            _ => {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(1);
            }
        };

        let films = filmography(catalog, director, min_rating);
        let report = FilmographyReport {
            director,
            count: films.len(),
            films,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "advisory": outcome.advisory,
                "report": report,
            }))?
        );
        Ok(0)
    }
}
