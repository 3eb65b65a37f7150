use super::{Cardinality, RelationEdge};
use crate::schema::ModelId;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Collapse edges reached through more than one traversal path.
///
/// At most one edge survives per `(source, name, cardinality)`; the first
/// emitted wins and order is otherwise preserved. A collision is always a
/// re-derivation of the same edge, so nothing is merged.
pub fn dedup(edges: Vec<RelationEdge>) -> Vec<RelationEdge> {
    let before = edges.len();
    let mut unique: IndexMap<(ModelId, String, Cardinality), RelationEdge> =
        IndexMap::with_capacity(edges.len());

    for edge in edges {
        match unique.entry((edge.source, edge.name.clone(), edge.cardinality)) {
            Entry::Vacant(entry) => {
                entry.insert(edge);
            }
            Entry::Occupied(entry) => {
                debug_assert_eq!(entry.get(), &edge, "distinct edges share a key");
                tracing::trace!(
                    source = ?edge.source,
                    name = %edge.name,
                    cardinality = ?edge.cardinality,
                    "dropping duplicate relation edge"
                );
            }
        }
    }

    tracing::debug!(before, after = unique.len(), "deduplicated relation edges");

    unique.into_values().collect()
}
