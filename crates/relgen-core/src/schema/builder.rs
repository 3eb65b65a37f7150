use super::{
    Definition, EnumDef, FieldDef, ModelDef, ReferentialAction, RelationDef, Schema,
};
use crate::Result;

/// Assembles a [`Definition`] in code and loads it into a [`Schema`].
///
/// ```
/// # use relgen_core::Schema;
/// let schema = Schema::builder()
///     .model("User", |m| {
///         m.scalar("id", "Int")
///             .relation("posts", "Post", |r| r.list())
///     })
///     .model("Post", |m| {
///         m.scalar("id", "Int")
///             .scalar("authorId", "Int")
///             .relation("author", "User", |r| r.fields(["authorId"]).references(["id"]))
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.relation_group("PostToUser").len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    definition: Definition,
}

#[derive(Debug)]
pub struct ModelBuilder {
    def: ModelDef,
}

#[derive(Debug)]
pub struct RelationBuilder {
    field: FieldDef,
    relation: RelationDef,
}

impl Builder {
    pub fn model(
        mut self,
        name: impl Into<String>,
        f: impl FnOnce(ModelBuilder) -> ModelBuilder,
    ) -> Self {
        let model = f(ModelBuilder {
            def: ModelDef {
                name: name.into(),
                table_name: None,
                fields: vec![],
            },
        });
        self.definition.models.push(model.def);
        self
    }

    pub fn enumeration<I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.definition.enums.push(EnumDef {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn build(self) -> Result<Schema> {
        Schema::from_definition(self.definition)
    }
}

impl ModelBuilder {
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.def.table_name = Some(name.into());
        self
    }

    /// Add a required scalar (or enum) field.
    pub fn scalar(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.push_scalar(name.into(), ty.into(), true)
    }

    /// Add a nullable scalar (or enum) field.
    pub fn optional_scalar(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.push_scalar(name.into(), ty.into(), false)
    }

    pub fn relation(
        mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        f: impl FnOnce(RelationBuilder) -> RelationBuilder,
    ) -> Self {
        let builder = f(RelationBuilder {
            field: FieldDef {
                name: name.into(),
                ty: target.into(),
                list: false,
                required: true,
                relation: None,
            },
            relation: RelationDef::default(),
        });

        let mut field = builder.field;
        field.relation = Some(builder.relation);
        self.def.fields.push(field);
        self
    }

    fn push_scalar(mut self, name: String, ty: String, required: bool) -> Self {
        self.def.fields.push(FieldDef {
            name,
            ty,
            list: false,
            required,
            relation: None,
        });
        self
    }
}

impl RelationBuilder {
    /// Explicit relation name shared with the opposite field.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.relation.name = Some(name.into());
        self
    }

    /// The to-many side of the association.
    pub fn list(mut self) -> Self {
        self.field.list = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.field.required = false;
        self
    }

    pub fn fields<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.relation.fields = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn references<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.relation.references = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.relation.on_delete = Some(action);
        self
    }

    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.relation.on_update = Some(action);
        self
    }
}
