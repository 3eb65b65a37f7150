use super::{Cardinality, TableRelations};
use crate::schema::Schema;
use std::collections::HashMap;
use std_util::slice::SliceUtil;

struct Verify<'a> {
    schema: &'a Schema,
}

/// Assert the invariants every projection must hold. A no-op in release
/// builds.
pub fn verify(schema: &Schema, tables: &[TableRelations]) {
    if cfg!(debug_assertions) {
        Verify { schema }.verify(tables);
    }
}

impl Verify<'_> {
    fn verify(&self, tables: &[TableRelations]) {
        for table in tables {
            self.verify_fields_are_declared(table);
            self.verify_edges_are_unique(table);
            self.verify_column_placement(table);
        }

        self.verify_single_foreign_key_owner(tables);
    }

    fn verify_fields_are_declared(&self, table: &TableRelations) {
        let model = self.schema.model(table.model);

        for relation in &table.relations {
            assert_eq!(relation.edge.source, table.model);
            assert!(
                model.field_by_name(&relation.edge.name).is_some(),
                "`{}` has no field `{}`",
                model.name,
                relation.edge.name
            );
        }
    }

    fn verify_edges_are_unique(&self, table: &TableRelations) {
        let keys: Vec<_> = table
            .relations
            .iter()
            .map(|relation| (relation.edge.name.as_str(), relation.edge.cardinality))
            .collect();

        assert!(
            keys.is_unique(),
            "duplicate relation on `{}`; relations={keys:?}",
            self.schema.model(table.model).name
        );
    }

    fn verify_column_placement(&self, table: &TableRelations) {
        for relation in &table.relations {
            let edge = &relation.edge;

            if edge.owns_foreign_key() {
                assert_eq!(edge.cardinality, Cardinality::One);
                assert!(!edge.reverse_singular);
            }

            if edge.reverse_singular {
                assert_eq!(edge.cardinality, Cardinality::One);
            }

            if edge.implicit_many_to_many {
                assert_eq!(edge.cardinality, Cardinality::Many);
                assert!(!edge.owns_foreign_key());
            }

            if !edge.owns_foreign_key() {
                assert!(edge.on_delete.is_none() && edge.on_update.is_none());
            }
        }
    }

    fn verify_single_foreign_key_owner(&self, tables: &[TableRelations]) {
        let mut owners: HashMap<&str, usize> = HashMap::new();

        for relation in tables.iter().flat_map(|table| &table.relations) {
            if !relation.edge.owns_foreign_key() {
                continue;
            }

            let relation_name = self
                .schema
                .model(relation.edge.source)
                .field_by_name(&relation.edge.name)
                .and_then(|field| field.ty.as_relation())
                .map(|declared| declared.name.as_str());

            if let Some(relation_name) = relation_name {
                *owners.entry(relation_name).or_default() += 1;
            }
        }

        for (relation_name, count) in owners {
            assert!(
                count <= 1,
                "relation `{relation_name}` has {count} foreign-key owners"
            );
        }
    }
}
