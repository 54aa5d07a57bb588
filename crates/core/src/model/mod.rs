pub mod constraints;
pub mod movie;

pub use constraints::QueryConstraints;
pub use movie::{EntityField, Movie};
