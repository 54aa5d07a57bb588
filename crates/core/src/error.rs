use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Resolve(#[from] crate::resolver::name::ResolveError),

    #[error(transparent)]
    Slot(#[from] crate::validation::SlotError),
}
