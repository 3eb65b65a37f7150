use relgen_core::schema::{ModelId, ReferentialAction};
use relgen_core::{relation, relations, Cardinality, Naming, Schema};

use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn category_tree() -> Schema {
    assert_ok!(Schema::builder()
        .model("Category", |m| {
            m.scalar("id", "Int")
                .optional_scalar("parentId", "Int")
                .relation("parent", "Category", |r| {
                    r.name("CategoryTree")
                        .optional()
                        .fields(["parentId"])
                        .references(["id"])
                        .on_delete(ReferentialAction::SetNull)
                })
                .relation("children", "Category", |r| r.name("CategoryTree").list())
        })
        .build())
}

#[test]
fn parent_children_resolve_to_two_edges_on_one_table() {
    let schema = category_tree();
    let tables = assert_ok!(relations(&schema, &Naming::default()));

    assert_eq!(tables.len(), 1);
    let table = &tables[0];
    assert_eq!(table.table_ident, "categories");
    assert_eq!(table.relations.len(), 2);

    let parent = table.get("parent", Cardinality::One).unwrap();
    assert_eq!(parent.edge.source, ModelId(0));
    assert_eq!(parent.edge.target, ModelId(0));
    assert_eq!(parent.edge.local_columns(), ["parentId"]);
    assert_eq!(parent.edge.target_columns(), ["id"]);
    assert_eq!(parent.edge.on_delete, Some(ReferentialAction::SetNull));

    let children = table.get("children", Cardinality::Many).unwrap();
    assert_eq!(children.edge.target, ModelId(0));
    assert_none!(children.foreign_key());
    assert!(!children.edge.implicit_many_to_many);
    assert_eq!(children.target_ident, "categories");
}

#[test]
fn collection_field_declared_first() {
    // Same tree, but the collection side comes before the owner.
    let schema = assert_ok!(Schema::builder()
        .model("Employee", |m| {
            m.scalar("id", "Int")
                .relation("reports", "Employee", |r| r.name("Management").list())
                .optional_scalar("managerId", "Int")
                .relation("manager", "Employee", |r| {
                    r.name("Management")
                        .optional()
                        .fields(["managerId"])
                        .references(["id"])
                })
        })
        .build());

    let edges = assert_ok!(relation::resolve(&schema));
    let edges = relation::dedup(edges);

    let names: Vec<_> = edges
        .iter()
        .map(|edge| (edge.name.as_str(), edge.cardinality))
        .collect();
    assert_eq!(
        names,
        [("reports", Cardinality::Many), ("manager", Cardinality::One)]
    );
}

#[test]
fn self_one_to_one() {
    let schema = assert_ok!(Schema::builder()
        .model("Step", |m| {
            m.scalar("id", "Int")
                .optional_scalar("nextId", "Int")
                .relation("next", "Step", |r| {
                    r.name("Sequence")
                        .optional()
                        .fields(["nextId"])
                        .references(["id"])
                })
                .relation("previous", "Step", |r| r.name("Sequence").optional())
        })
        .build());

    let tables = assert_ok!(relations(&schema, &Naming::default()));
    let relations = &tables[0].relations;

    assert_eq!(relations.len(), 2);
    assert!(relations[0].edge.owns_foreign_key());
    assert_eq!(relations[0].edge.name, "next");

    assert_eq!(relations[1].edge.name, "previous");
    assert_eq!(relations[1].edge.cardinality, Cardinality::One);
    assert!(relations[1].edge.reverse_singular);
    assert_none!(relations[1].foreign_key());
}

#[test]
fn self_many_to_many() {
    let schema = assert_ok!(Schema::builder()
        .model("User", |m| {
            m.scalar("id", "Int")
                .relation("followers", "User", |r| r.name("Follows").list())
                .relation("following", "User", |r| r.name("Follows").list())
        })
        .build());

    let tables = assert_ok!(relations(&schema, &Naming::default()));
    let relations = &tables[0].relations;

    assert_eq!(relations.len(), 2);
    for relation in relations {
        assert_eq!(relation.edge.cardinality, Cardinality::Many);
        assert!(relation.edge.implicit_many_to_many);
        assert_none!(relation.foreign_key());
    }
}
