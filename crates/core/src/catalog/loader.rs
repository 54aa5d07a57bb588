// Dataset ingest - reads the movie CSV into the in-memory catalog.
// All columns are read as strings and parsed into typed fields here, so a
// stray non-numeric cell (a "PG" in the year column, an "N/A" gross) degrades
// to a missing value instead of poisoning the whole load.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::catalog::Catalog;
use crate::model::Movie;

const TITLE: &str = "Series_Title";
const DIRECTOR: &str = "Director";
const STARS: [&str; 4] = ["Star1", "Star2", "Star3", "Star4"];
const GENRE: &str = "Genre";
const YEAR: &str = "Released_Year";
const RATING: &str = "IMDB_Rating";
const VOTES: &str = "No_of_Votes";
const GROSS: &str = "Gross";
const OVERVIEW: &str = "Overview";
const POSTER_LINK: &str = "Poster_Link";
const RUNTIME: &str = "Runtime";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read dataset '{path}'")]
    CsvLoad {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("dataset column '{column}' is missing or not readable as text")]
    Column {
        column: String,
        #[source]
        source: PolarsError,
    },
}

/// Load the catalog from a CSV dataset. Rows without a title or director are
/// skipped; every other field degrades to a missing value when unparseable.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(0))
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|source| CatalogError::CsvLoad {
            path: path.to_path_buf(),
            source,
        })?;

    let titles = column_str(&df, TITLE)?;
    let directors = column_str(&df, DIRECTOR)?;
    let star_columns = [
        column_str(&df, STARS[0])?,
        column_str(&df, STARS[1])?,
        column_str(&df, STARS[2])?,
        column_str(&df, STARS[3])?,
    ];
    let genres = column_str(&df, GENRE)?;
    let years = column_str(&df, YEAR)?;
    let ratings = column_str(&df, RATING)?;
    let votes = column_str(&df, VOTES)?;
    let grosses = column_str(&df, GROSS)?;
    let overviews = column_str(&df, OVERVIEW)?;
    let posters = column_str(&df, POSTER_LINK)?;
    let runtimes = column_str(&df, RUNTIME)?;

    let mut entries = Vec::with_capacity(df.height());
    let mut skipped = 0usize;
    for idx in 0..df.height() {
        let (Some(title), Some(director)) = (non_empty(titles.get(idx)), non_empty(directors.get(idx)))
        else {
            skipped += 1;
            continue;
        };

        let stars = star_columns
            .iter()
            .filter_map(|column| non_empty(column.get(idx)))
            .map(str::to_string)
            .collect();

        entries.push(Movie {
            title: title.to_string(),
            director: director.to_string(),
            stars,
            genre: non_empty(genres.get(idx)).unwrap_or_default().to_string(),
            year: non_empty(years.get(idx)).and_then(|raw| raw.parse::<i32>().ok()),
            rating: non_empty(ratings.get(idx)).and_then(|raw| raw.parse::<f64>().ok()),
            votes: non_empty(votes.get(idx))
                .and_then(|raw| raw.parse::<u64>().ok())
                .unwrap_or(0),
            gross: non_empty(grosses.get(idx)).map(str::to_string),
            overview: non_empty(overviews.get(idx)).map(str::to_string),
            poster_link: non_empty(posters.get(idx)).map(str::to_string),
            runtime: non_empty(runtimes.get(idx)).map(str::to_string),
        });
    }

    debug!(
        path = %path.display(),
        entries = entries.len(),
        skipped,
        "catalog loaded"
    );

    Ok(Catalog::from_entries(entries))
}

fn column_str<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked, CatalogError> {
    df.column(name)
        .and_then(|column| column.str())
        .map_err(|source| CatalogError::Column {
            column: name.to_string(),
            source,
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
