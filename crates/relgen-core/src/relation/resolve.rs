use super::RelationEdge;
use crate::schema::{Field, ModelId, Relation, Schema};
use crate::{Error, Result};

/// Derive the relation edges of every association declared in `schema`.
///
/// Edges are emitted in field declaration order. A self-relation's
/// collection edge may be emitted twice (once as the companion of the
/// foreign-key owner, once from the collection field itself); [`dedup`]
/// collapses those.
///
/// Resolution stops at the first structural error.
///
/// [`dedup`]: super::dedup
pub fn resolve(schema: &Schema) -> Result<Vec<RelationEdge>> {
    let mut resolver = Resolver {
        schema,
        edges: vec![],
    };

    for (field, relation) in schema.relation_fields() {
        resolver.resolve_field(field, relation)?;
    }

    tracing::debug!(edges = resolver.edges.len(), "resolved relation edges");

    Ok(resolver.edges)
}

struct Resolver<'a> {
    schema: &'a Schema,
    edges: Vec<RelationEdge>,
}

impl<'a> Resolver<'a> {
    fn resolve_field(&mut self, field: &'a Field, relation: &'a Relation) -> Result<()> {
        let source = field.id.model;
        let target = self.target(field, relation)?;
        let sibling = self.sibling(field, relation, target)?;

        match &relation.foreign_key {
            Some(_) if field.list => {
                // The loader rejects this; a graph can only get here if that
                // check is bypassed.
                bail!(
                    "list field `{}` cannot declare foreign-key columns",
                    field.full_name(self.schema)
                );
            }
            Some(foreign_key) => {
                if let Some(sibling) = sibling {
                    if sibling.owns_foreign_key() {
                        return Err(self.ambiguous(field, sibling));
                    }
                }

                self.push(RelationEdge::owner(
                    source,
                    target,
                    &field.name,
                    foreign_key.clone(),
                    relation.on_delete,
                    relation.on_update,
                ));

                // A self-relation's collection side has no columns to derive
                // its edge from; name it after the sibling collection field.
                if source == target {
                    if let Some(sibling) = sibling.filter(|sibling| sibling.list) {
                        self.push(RelationEdge::many(source, target, &sibling.name));
                    }
                }

                Ok(())
            }
            None => {
                let Some(sibling) = sibling else {
                    return Err(Error::invalid_schema(format!(
                        "field `{}` declares no foreign key and `{}` has no field pairing with it \
                         through relation `{}`",
                        field.full_name(self.schema),
                        relation.target,
                        relation.name,
                    )));
                };

                let edge = match (field.list, sibling.owns_foreign_key(), sibling.list) {
                    (true, true, _) => RelationEdge::many(source, target, &field.name),
                    (true, false, true) => RelationEdge::implicit_many(source, target, &field.name),
                    (false, true, false) => RelationEdge::reverse_one(source, target, &field.name),
                    _ => return Err(self.ambiguous(field, sibling)),
                };

                self.push(edge);
                Ok(())
            }
        }
    }

    fn target(&self, field: &Field, relation: &Relation) -> Result<ModelId> {
        match self.schema.model_by_name(&relation.target) {
            Some(model) => Ok(model.id),
            None => Err(Error::relation_target_not_found(
                &self.schema.model(field.id.model).name,
                &field.name,
                &relation.target,
            )),
        }
    }

    /// The other field sharing `relation`'s name, if any.
    ///
    /// Fails when more than two fields share the name, or when the pair does
    /// not point at each other's models.
    fn sibling(
        &self,
        field: &Field,
        relation: &Relation,
        target: ModelId,
    ) -> Result<Option<&'a Field>> {
        let group = self.schema.relation_group(&relation.name);
        let mut others = group.iter().filter(|id| **id != field.id);

        let Some(first) = others.next() else {
            return Ok(None);
        };

        if others.next().is_some() {
            return Err(Error::relation_participants(
                &relation.name,
                group.iter().map(|id| self.schema.field(*id).full_name(self.schema)),
            ));
        }

        let sibling = self.schema.field(*first);
        let source = self.schema.model(field.id.model);
        let points_back = sibling
            .ty
            .as_relation()
            .is_some_and(|sibling_relation| sibling_relation.target == source.name);

        if sibling.id.model != target || !points_back {
            return Err(Error::invalid_schema(format!(
                "relation `{}` pairs `{}` with `{}`, but they do not reference each other's models",
                relation.name,
                field.full_name(self.schema),
                sibling.full_name(self.schema),
            )));
        }

        Ok(Some(sibling))
    }

    fn ambiguous(&self, field: &Field, other: &Field) -> Error {
        Error::relation_ambiguous(
            &self.schema.model(field.id.model).name,
            &field.name,
            other.full_name(self.schema),
        )
    }

    fn push(&mut self, edge: RelationEdge) {
        tracing::trace!(edge = %edge.describe(self.schema), "emit relation edge");
        self.edges.push(edge);
    }
}
