use super::{Cardinality, RelationEdge};
use crate::naming::Naming;
use crate::schema::{ForeignKey, Model, ModelId, Schema};
use indexmap::{IndexMap, IndexSet};

/// Relations to render for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRelations {
    pub model: ModelId,

    /// Identifier of the table constant
    pub table_ident: String,

    /// Identifier of the table's relation map
    pub relations_ident: String,

    /// Relations in edge order
    pub relations: Vec<ProjectedRelation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRelation {
    pub edge: RelationEdge,

    /// Identifier of the target table constant
    pub target_ident: String,
}

/// Split `edges` by table, keeping only edges that name a field the table
/// actually declares.
///
/// Returns one entry per model, in schema order, including models without
/// relations.
pub fn project(schema: &Schema, edges: &[RelationEdge], naming: &Naming) -> Vec<TableRelations> {
    let mut by_source: IndexMap<ModelId, Vec<&RelationEdge>> = IndexMap::new();

    for edge in edges {
        by_source.entry(edge.source).or_default().push(edge);
    }

    schema
        .models()
        .map(|model| {
            let edges = by_source.get(&model.id).map(Vec::as_slice).unwrap_or(&[]);
            project_table(schema, model, edges, naming)
        })
        .collect()
}

fn project_table(
    schema: &Schema,
    model: &Model,
    edges: &[&RelationEdge],
    naming: &Naming,
) -> TableRelations {
    let relations: Vec<_> = edges
        .iter()
        .filter(|edge| {
            let declared = model.field_by_name(&edge.name).is_some();

            if !declared {
                tracing::trace!(
                    model = %model.name,
                    name = %edge.name,
                    "dropping relation edge without a declared field"
                );
            }

            declared
        })
        .map(|edge| ProjectedRelation {
            edge: (*edge).clone(),
            target_ident: naming.table_ident(schema.model(edge.target)),
        })
        .collect();

    tracing::debug!(
        model = %model.name,
        relations = relations.len(),
        "projected table relations"
    );

    TableRelations {
        model: model.id,
        table_ident: naming.table_ident(model),
        relations_ident: naming.relations_ident(model),
        relations,
    }
}

impl TableRelations {
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Find a relation by field name and cardinality.
    pub fn get(&self, name: &str, cardinality: Cardinality) -> Option<&ProjectedRelation> {
        self.relations
            .iter()
            .find(|relation| relation.edge.name == name && relation.edge.cardinality == cardinality)
    }

    /// Target table identifiers, each listed once, in first-use order.
    pub fn referenced_tables(&self) -> impl Iterator<Item = &str> + '_ {
        self.relations
            .iter()
            .map(|relation| relation.target_ident.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
    }
}

impl ProjectedRelation {
    /// Columns to emit, if this side owns the foreign key.
    pub fn foreign_key(&self) -> Option<&ForeignKey> {
        self.edge.foreign_key.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std_util::prelude::*;

    #[test]
    fn drops_edges_without_declared_field() {
        let schema = assert_ok!(Schema::builder()
            .model("User", |m| m.scalar("id", "Int").relation("posts", "Post", |r| r.list()))
            .model("Post", |m| {
                m.scalar("id", "Int")
                    .scalar("authorId", "Int")
                    .relation("author", "User", |r| r.fields(["authorId"]).references(["id"]))
            })
            .build());

        let user = ModelId(0);
        let post = ModelId(1);

        // An edge named after the target table rather than a declared field.
        let edges = vec![
            RelationEdge::many(user, post, "posts"),
            RelationEdge::many(user, post, "post"),
        ];

        let tables = project(&schema, &edges, &Naming::default());

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].table_ident, "users");
        assert_eq!(tables[0].relations_ident, "usersRelations");
        assert_eq!(
            tables[0].relations,
            [ProjectedRelation {
                edge: RelationEdge::many(user, post, "posts"),
                target_ident: "posts".to_string(),
            }]
        );
        assert!(tables[1].is_empty());
    }

    #[test]
    fn reserved_target_identifier_is_escaped() {
        let schema = assert_ok!(Schema::builder()
            .model("Relation", |m| {
                m.scalar("id", "Int")
                    .relation("owners", "Owner", |r| r.list())
            })
            .model("Owner", |m| {
                m.scalar("id", "Int")
                    .scalar("relationId", "Int")
                    .relation("relation", "Relation", |r| {
                        r.fields(["relationId"]).references(["id"])
                    })
            })
            .build());

        let edges = crate::relation::resolve(&schema).unwrap();
        let tables = project(&schema, &edges, &Naming::default());

        assert_eq!(tables[0].table_ident, "relationsTable");
        let owner = tables[1].get("relation", Cardinality::One).unwrap();
        assert_eq!(owner.target_ident, "relationsTable");
        assert_eq!(
            owner.foreign_key(),
            Some(&ForeignKey::new(["relationId"], ["id"]))
        );
    }

    #[test]
    fn referenced_tables_are_unique() {
        let schema = assert_ok!(Schema::builder()
            .model("User", |m| {
                m.scalar("id", "Int")
                    .relation("posts", "Post", |r| r.name("Authored").list())
                    .relation("edits", "Post", |r| r.name("Edited").list())
            })
            .model("Post", |m| {
                m.scalar("id", "Int")
                    .scalar("authorId", "Int")
                    .scalar("editorId", "Int")
                    .relation("author", "User", |r| {
                        r.name("Authored").fields(["authorId"]).references(["id"])
                    })
                    .relation("editor", "User", |r| {
                        r.name("Edited").fields(["editorId"]).references(["id"])
                    })
            })
            .build());

        let edges = crate::relation::resolve(&schema).unwrap();
        let tables = project(&schema, &edges, &Naming::default());

        assert_eq!(tables[0].relations.len(), 2);
        assert_eq!(tables[0].referenced_tables().collect::<Vec<_>>(), ["posts"]);
    }
}
