use serde::{Deserialize, Serialize};

/// Which catalog field an entity name resolves against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityField {
    Director,
    Actor,
    Title,
}

/// One catalog entry. Built once at load time and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub director: String,
    /// Billed cast, up to four names. Missing star slots are dropped at load.
    #[serde(default)]
    pub stars: Vec<String>,
    /// Comma-delimited genre tags as they appear in the dataset.
    pub genre: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub votes: u64,
    /// Raw gross revenue string; may carry thousands separators or be
    /// unparseable ("N/A"). See [`Movie::normalized_gross`].
    #[serde(default)]
    pub gross: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_link: Option<String>,
    #[serde(default)]
    pub runtime: Option<String>,
}

impl Movie {
    /// Values of the selected field for this entry. Director and title are
    /// single-valued; the actor field stacks all star slots.
    pub fn field_values(&self, field: EntityField) -> Vec<&str> {
        match field {
            EntityField::Director => vec![self.director.as_str()],
            EntityField::Title => vec![self.title.as_str()],
            EntityField::Actor => self.stars.iter().map(String::as_str).collect(),
        }
    }

    /// Gross revenue with thousands separators stripped. Returns `None` when
    /// the raw value is absent or does not parse; callers must treat that as
    /// missing, not as zero.
    pub fn normalized_gross(&self) -> Option<f64> {
        let raw = self.gross.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        raw.replace(',', "").parse::<f64>().ok()
    }
}
