//! The model graph: models, fields and their declared associations.
//!
//! A [`Schema`] is built once, from a [`Definition`] or with a [`Builder`],
//! and is immutable afterwards. Building validates the structure the
//! relation engine relies on and indexes every association by relation
//! name.

mod builder;
pub use builder::{Builder, ModelBuilder, RelationBuilder};

mod definition;
pub use definition::{Definition, EnumDef, FieldDef, ModelDef, RelationDef};

mod field;
pub use field::{Field, FieldId, FieldTy};

mod load;

mod model;
pub use model::{Model, ModelId};

mod relation;
pub use relation::{ForeignKey, ReferentialAction, Relation};

mod scalar;
pub use scalar::{Enum, ScalarType};

use crate::Result;
use indexmap::IndexMap;

#[derive(Debug)]
pub struct Schema {
    /// Models in declaration order
    pub models: IndexMap<ModelId, Model>,

    /// Enum declarations, keyed by name
    pub enums: IndexMap<String, Enum>,

    /// Model lookup by name
    model_names: IndexMap<String, ModelId>,

    /// Fields participating in each association, keyed by relation name, in
    /// declaration order.
    relations: IndexMap<String, Vec<FieldId>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Build a schema from a normalized definition, validating its structure.
    pub fn from_definition(definition: Definition) -> Result<Schema> {
        load::Loader::new(definition).load()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.model_names.get(name).map(|id| &self.models[id])
    }

    /// Get a field by ID
    #[track_caller]
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }

    /// All fields sharing `relation_name`, in declaration order.
    pub fn relation_group(&self, relation_name: &str) -> &[FieldId] {
        self.relations
            .get(relation_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Relation fields across all models, in declaration order.
    pub fn relation_fields(&self) -> impl Iterator<Item = (&Field, &Relation)> + '_ {
        self.models().flat_map(|model| {
            model
                .fields
                .iter()
                .filter_map(|field| field.ty.as_relation().map(|relation| (field, relation)))
        })
    }
}
