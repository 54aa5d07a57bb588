pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod resolver;
pub mod validation;

pub use catalog::{load_catalog, Catalog, CatalogError};
pub use config::{ConfigError, ResolverConfig};
pub use engine::{execute, filmography, recommend, top_by_votes_and_gross};
pub use error::{CoreError, Result};
pub use model::{EntityField, Movie, QueryConstraints};
pub use resolver::name::{NameResolver, ResolveError};
pub use resolver::outcome::{Advisory, MatchKind, Resolution, ResolutionOutcome};
pub use resolver::resolve_entity;
