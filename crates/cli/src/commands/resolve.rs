use anyhow::Result;
use clap::Parser;
use cine_core::{resolve_entity, Catalog, ResolverConfig};

use crate::commands::FieldArg;

/// Resolve a free-text name against the catalog
#[derive(Debug, Parser)]
pub struct ResolveCommand {
    /// Field to resolve against
    #[arg(long, value_enum, default_value = "director")]
    pub field: FieldArg,

    /// Free-text name to resolve
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl ResolveCommand {
    pub fn execute(&self, catalog: &Catalog, config: &ResolverConfig) -> Result<i32> {
        let outcome = resolve_entity(catalog, self.field.into(), &self.name, config)?;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        Ok(if outcome.is_resolved() { 0 } else { 1 })
    }
}
