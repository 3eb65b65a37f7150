//! Relation resolution: from declared association fields to the per-table
//! relation lists a renderer consumes.
//!
//! The pipeline is [`resolve`] → [`dedup`] → [`project`]. Each stage is a
//! pure function of its inputs.

mod dedup;
pub use dedup::dedup;

mod edge;
pub use edge::{Cardinality, RelationEdge};

mod project;
pub use project::{project, ProjectedRelation, TableRelations};

mod resolve;
pub use resolve::resolve;

mod verify;
pub use verify::verify;
