use crate::schema::{ForeignKey, ModelId, ReferentialAction, Schema};

/// One directional, resolved endpoint of an association.
///
/// Every edge is derived from exactly one declared relation field; `name`
/// is that field's name, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelationEdge {
    /// Model on which the edge is rendered
    pub source: ModelId,

    pub cardinality: Cardinality,

    /// Model the edge points at
    pub target: ModelId,

    /// Field name on `source`
    pub name: String,

    /// Local and target columns. Only set on the `One` edge of the side that
    /// owns the foreign key.
    pub foreign_key: Option<ForeignKey>,

    /// A `One` edge without columns: the non-owning side of a one-to-one.
    pub reverse_singular: bool,

    /// Neither side of the association owns a foreign key.
    pub implicit_many_to_many: bool,

    pub on_delete: Option<ReferentialAction>,

    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum Cardinality {
    One,
    Many,
}

impl RelationEdge {
    /// The `One` edge of the foreign-key owning side.
    pub(crate) fn owner(
        source: ModelId,
        target: ModelId,
        name: &str,
        foreign_key: ForeignKey,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
    ) -> RelationEdge {
        RelationEdge {
            foreign_key: Some(foreign_key),
            on_delete,
            on_update,
            ..RelationEdge::bare(source, Cardinality::One, target, name)
        }
    }

    /// A `Many` edge. It never carries columns.
    pub(crate) fn many(source: ModelId, target: ModelId, name: &str) -> RelationEdge {
        RelationEdge::bare(source, Cardinality::Many, target, name)
    }

    pub(crate) fn implicit_many(source: ModelId, target: ModelId, name: &str) -> RelationEdge {
        RelationEdge {
            implicit_many_to_many: true,
            ..RelationEdge::many(source, target, name)
        }
    }

    pub(crate) fn reverse_one(source: ModelId, target: ModelId, name: &str) -> RelationEdge {
        RelationEdge {
            reverse_singular: true,
            ..RelationEdge::bare(source, Cardinality::One, target, name)
        }
    }

    fn bare(
        source: ModelId,
        cardinality: Cardinality,
        target: ModelId,
        name: &str,
    ) -> RelationEdge {
        RelationEdge {
            source,
            cardinality,
            target,
            name: name.to_string(),
            foreign_key: None,
            reverse_singular: false,
            implicit_many_to_many: false,
            on_delete: None,
            on_update: None,
        }
    }

    /// True if this edge carries the association's foreign-key columns.
    pub fn owns_foreign_key(&self) -> bool {
        self.foreign_key.is_some()
    }

    /// Local foreign-key columns, empty unless this edge owns the key.
    pub fn local_columns(&self) -> &[String] {
        self.foreign_key
            .as_ref()
            .map(|fk| fk.columns.as_slice())
            .unwrap_or(&[])
    }

    /// Referenced target columns, empty unless this edge owns the key.
    pub fn target_columns(&self) -> &[String] {
        self.foreign_key
            .as_ref()
            .map(|fk| fk.references.as_slice())
            .unwrap_or(&[])
    }

    /// `Source.name -> Target` for logs and diagnostics.
    pub fn describe(&self, schema: &Schema) -> String {
        format!(
            "{}.{} -> {} ({:?})",
            schema.model(self.source).name,
            self.name,
            schema.model(self.target).name,
            self.cardinality,
        )
    }
}
