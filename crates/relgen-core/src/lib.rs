#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

pub mod naming;
pub use naming::Naming;

pub mod relation;
pub use relation::{Cardinality, RelationEdge, TableRelations};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses relgen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Resolve, deduplicate, and project every relation declared in `schema`.
///
/// Returns one [`TableRelations`] per model, in declaration order. Fails on
/// the first structural error; no partial output is produced.
pub fn relations(schema: &Schema, naming: &Naming) -> Result<Vec<TableRelations>> {
    let edges = relation::resolve(schema)?;
    let edges = relation::dedup(edges);
    let tables = relation::project(schema, &edges, naming);

    relation::verify(schema, &tables);

    Ok(tables)
}
