use super::{
    Definition, Enum, Field, FieldDef, FieldId, FieldTy, ForeignKey, Model, ModelDef, ModelId,
    Relation, RelationDef, ScalarType, Schema,
};
use crate::{Error, Result};
use indexmap::{IndexMap, IndexSet};

/// Validates a [`Definition`] and turns it into an immutable [`Schema`].
pub(super) struct Loader {
    definition: Definition,
    enums: IndexMap<String, Enum>,
    model_names: IndexMap<String, ModelId>,
}

impl Loader {
    pub(super) fn new(definition: Definition) -> Loader {
        Loader {
            definition,
            enums: IndexMap::new(),
            model_names: IndexMap::new(),
        }
    }

    pub(super) fn load(mut self) -> Result<Schema> {
        self.load_enums()?;
        self.load_model_names()?;

        let mut models = IndexMap::with_capacity(self.definition.models.len());
        let mut relations: IndexMap<String, Vec<FieldId>> = IndexMap::new();

        for (index, def) in self.definition.models.iter().enumerate() {
            let model = self.load_model(ModelId(index), def)?;

            for field in &model.fields {
                if let FieldTy::Relation(relation) = &field.ty {
                    relations
                        .entry(relation.name.clone())
                        .or_default()
                        .push(field.id);
                }
            }

            models.insert(model.id, model);
        }

        tracing::debug!(
            models = models.len(),
            relations = relations.len(),
            "loaded schema"
        );

        Ok(Schema {
            models,
            enums: self.enums,
            model_names: self.model_names,
            relations,
        })
    }

    fn load_enums(&mut self) -> Result<()> {
        for def in &self.definition.enums {
            let prev = self.enums.insert(
                def.name.clone(),
                Enum {
                    name: def.name.clone(),
                    variants: def.values.clone(),
                },
            );

            if prev.is_some() {
                return Err(Error::invalid_schema(format!(
                    "enum `{}` is declared more than once",
                    def.name
                )));
            }
        }

        Ok(())
    }

    fn load_model_names(&mut self) -> Result<()> {
        for (index, def) in self.definition.models.iter().enumerate() {
            if self.enums.contains_key(&def.name) {
                return Err(Error::invalid_schema(format!(
                    "`{}` is declared both as a model and as an enum",
                    def.name
                )));
            }

            if self
                .model_names
                .insert(def.name.clone(), ModelId(index))
                .is_some()
            {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is declared more than once",
                    def.name
                )));
            }
        }

        Ok(())
    }

    fn load_model(&self, id: ModelId, def: &ModelDef) -> Result<Model> {
        let mut names = IndexSet::with_capacity(def.fields.len());

        for field in &def.fields {
            if !names.insert(field.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "field `{}.{}` is declared more than once",
                    def.name, field.name
                )));
            }
        }

        let fields = def
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                Ok(Field {
                    id: id.field(index),
                    name: field.name.clone(),
                    ty: self.load_field_ty(def, field)?,
                    list: field.list,
                    required: field.required,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Model {
            id,
            name: def.name.clone(),
            table_name: def.table_name.clone(),
            fields,
        })
    }

    fn load_field_ty(&self, model: &ModelDef, field: &FieldDef) -> Result<FieldTy> {
        match &field.relation {
            Some(relation) => Ok(FieldTy::Relation(self.load_relation(model, field, relation)?)),
            None if self.model_names.contains_key(&field.ty) => Ok(FieldTy::Relation(
                self.load_relation(model, field, &RelationDef::default())?,
            )),
            None if self.enums.contains_key(&field.ty) => {
                Ok(FieldTy::Scalar(ScalarType::Enum(field.ty.clone())))
            }
            None => ScalarType::from_name(&field.ty)
                .map(FieldTy::Scalar)
                .ok_or_else(|| Error::unsupported_scalar_type(&model.name, &field.name, &field.ty)),
        }
    }

    fn load_relation(
        &self,
        model: &ModelDef,
        field: &FieldDef,
        def: &RelationDef,
    ) -> Result<Relation> {
        let full_name = || format!("{}.{}", model.name, field.name);

        let foreign_key = match (&def.fields[..], &def.references[..]) {
            ([], []) => None,
            (columns, references) if columns.len() != references.len() => {
                return Err(Error::invalid_schema(format!(
                    "field `{}` declares {} foreign-key column(s) but references {}",
                    full_name(),
                    columns.len(),
                    references.len()
                )));
            }
            (columns, references) => {
                if field.list {
                    return Err(Error::invalid_schema(format!(
                        "list field `{}` cannot declare foreign-key columns",
                        full_name()
                    )));
                }

                for column in columns {
                    let declared = model
                        .fields
                        .iter()
                        .any(|f| &f.name == column && f.relation.is_none());

                    if !declared {
                        return Err(Error::invalid_schema(format!(
                            "foreign-key column `{column}` of field `{}` is not a scalar field \
                             of `{}`",
                            full_name(),
                            model.name
                        )));
                    }
                }

                Some(ForeignKey::new(columns.iter().cloned(), references.iter().cloned()))
            }
        };

        if foreign_key.is_none() && (def.on_delete.is_some() || def.on_update.is_some()) {
            return Err(Error::invalid_schema(format!(
                "field `{}` sets a referential action without declaring foreign-key columns",
                full_name()
            )));
        }

        let name = def
            .name
            .clone()
            .unwrap_or_else(|| implicit_relation_name(&model.name, &field.ty));

        Ok(Relation {
            target: field.ty.clone(),
            name,
            foreign_key,
            on_delete: def.on_delete,
            on_update: def.on_update,
        })
    }
}

/// Name given to an association declared without one: both model names,
/// sorted, joined by `To`.
fn implicit_relation_name(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}To{b}")
    } else {
        format!("{b}To{a}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ReferentialAction;
    use std_util::prelude::*;

    fn user_post() -> crate::schema::Builder {
        Schema::builder()
            .model("User", |m| {
                m.scalar("id", "Int")
                    .relation("posts", "Post", |r| r.list())
            })
            .model("Post", |m| {
                m.scalar("id", "Int")
                    .scalar("authorId", "Int")
                    .relation("author", "User", |r| {
                        r.fields(["authorId"])
                            .references(["id"])
                            .on_delete(ReferentialAction::Cascade)
                    })
            })
    }

    #[test]
    fn unnamed_pair_shares_implicit_name() {
        let schema = assert_ok!(user_post().build());
        let group = schema.relation_group("PostToUser");

        assert_eq!(group, [ModelId(0).field(1), ModelId(1).field(2)]);
        assert_empty!(schema.relation_group("UserToPost"));
    }

    #[test]
    fn implicit_name_for_self_relation() {
        assert_eq!(implicit_relation_name("Node", "Node"), "NodeToNode");
        assert_eq!(implicit_relation_name("Tag", "Post"), "PostToTag");
    }

    #[test]
    fn relation_attributes_are_kept() {
        let schema = assert_ok!(user_post().build());
        let post = schema.model_by_name("Post").unwrap();
        let author = post.field_by_name("author").unwrap().ty.expect_relation();

        assert_eq!(author.target, "User");
        assert_eq!(
            author.foreign_key,
            Some(ForeignKey::new(["authorId"], ["id"]))
        );
        assert_eq!(author.on_delete, Some(ReferentialAction::Cascade));
        assert_none!(author.on_update);
    }

    #[test]
    fn enum_fields_are_scalars() {
        let schema = assert_ok!(Schema::builder()
            .enumeration("Role", ["ADMIN", "MEMBER"])
            .model("User", |m| m.scalar("id", "Int").scalar("role", "Role"))
            .build());

        let user = schema.model(ModelId(0));
        assert_eq!(
            user.fields[1].ty.as_scalar(),
            Some(&ScalarType::Enum("Role".to_string()))
        );
        assert_eq!(schema.enums["Role"].variants, ["ADMIN", "MEMBER"]);
    }

    #[test]
    fn unknown_scalar_type() {
        let err = assert_err!(Schema::builder()
            .model("User", |m| m.scalar("id", "Integer"))
            .build());

        assert!(err.is_unsupported_scalar_type());
        assert!(err.to_string().contains("`User.id`"));
    }

    #[test]
    fn duplicate_model() {
        let err = assert_err!(Schema::builder()
            .model("User", |m| m.scalar("id", "Int"))
            .model("User", |m| m.scalar("id", "Int"))
            .build());

        assert!(err.is_invalid_schema());
    }

    #[test]
    fn duplicate_field() {
        let err = assert_err!(Schema::builder()
            .model("User", |m| m.scalar("id", "Int").scalar("id", "String"))
            .build());

        assert_eq!(
            err.to_string(),
            "invalid schema: field `User.id` is declared more than once"
        );
    }

    #[test]
    fn foreign_key_length_mismatch() {
        let err = assert_err!(Schema::builder()
            .model("User", |m| m.scalar("id", "Int").scalar("tenant", "Int"))
            .model("Post", |m| {
                m.scalar("authorId", "Int")
                    .relation("author", "User", |r| {
                        r.fields(["authorId"]).references(["tenant", "id"])
                    })
            })
            .build());

        assert!(err.is_invalid_schema());
    }

    #[test]
    fn foreign_key_on_list_field() {
        let err = assert_err!(Schema::builder()
            .model("User", |m| {
                m.scalar("id", "Int")
                    .scalar("postId", "Int")
                    .relation("posts", "Post", |r| {
                        r.list().fields(["postId"]).references(["id"])
                    })
            })
            .model("Post", |m| m.scalar("id", "Int"))
            .build());

        assert!(err.is_invalid_schema());
    }

    #[test]
    fn foreign_key_column_must_exist() {
        let err = assert_err!(Schema::builder()
            .model("User", |m| m.scalar("id", "Int"))
            .model("Post", |m| {
                m.scalar("id", "Int")
                    .relation("author", "User", |r| r.fields(["userId"]).references(["id"]))
            })
            .build());

        assert!(err.to_string().contains("`userId`"));
    }

    #[test]
    fn referential_action_requires_foreign_key() {
        let err = assert_err!(Schema::builder()
            .model("User", |m| {
                m.scalar("id", "Int").relation("posts", "Post", |r| {
                    r.list().on_delete(ReferentialAction::Cascade)
                })
            })
            .model("Post", |m| m.scalar("id", "Int"))
            .build());

        assert!(err.is_invalid_schema());
    }

    #[test]
    fn unknown_relation_target_is_deferred() {
        // The target is only checked when relations are resolved.
        let schema = assert_ok!(Schema::builder()
            .model("Post", |m| {
                m.scalar("id", "Int")
                    .scalar("authorId", "Int")
                    .relation("author", "Person", |r| {
                        r.fields(["authorId"]).references(["id"])
                    })
            })
            .build());

        assert_eq!(schema.relation_group("PersonToPost").len(), 1);
    }
}
