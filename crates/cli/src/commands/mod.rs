mod filmography;
mod recommend;
mod resolve;
mod top;

pub use filmography::FilmographyCommand;
pub use recommend::RecommendCommand;
pub use resolve::ResolveCommand;
pub use top::TopCommand;

use clap::ValueEnum;
use cine_core::EntityField;

/// Catalog field a name resolves against.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldArg {
    Director,
    Actor,
    Title,
}

impl From<FieldArg> for EntityField {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Director => EntityField::Director,
            FieldArg::Actor => EntityField::Actor,
            FieldArg::Title => EntityField::Title,
        }
    }
}
