use relgen_core::{relation, relations, Naming, Schema};

use std_util::prelude::*;

fn assert_missing_model_error(err: &relgen_core::Error, model_name: &str, field_name: &str) {
    let msg = err.to_string();
    assert!(
        err.is_relation_target_not_found(),
        "expected a missing target error, got: {msg}"
    );
    assert!(
        msg.contains(&format!("`{model_name}.{field_name}`")),
        "error should mention `{model_name}.{field_name}`, got: {msg}"
    );
    assert!(
        msg.contains("does not exist"),
        "error should say 'does not exist', got: {msg}"
    );
}

#[test]
fn belongs_to_target_not_registered() {
    let schema = assert_ok!(Schema::builder()
        .model("Talk", |m| {
            m.scalar("id", "Int")
                .scalar("speakerId", "Int")
                .relation("speaker", "Speaker", |r| {
                    r.fields(["speakerId"]).references(["id"])
                })
        })
        .build());

    let err = assert_err!(relation::resolve(&schema));
    assert_missing_model_error(&err, "Talk", "speaker");
}

#[test]
fn has_many_target_not_registered() {
    let schema = assert_ok!(Schema::builder()
        .model("Conference", |m| {
            m.scalar("id", "Int")
                .relation("talks", "Talk", |r| r.list())
        })
        .build());

    let err = assert_err!(relations(&schema, &Naming::default()));
    assert_missing_model_error(&err, "Conference", "talks");
}

#[test]
fn has_one_target_not_registered() {
    let schema = assert_ok!(Schema::builder()
        .model("User", |m| {
            m.scalar("id", "Int")
                .relation("profile", "Profile", |r| r.optional())
        })
        .build());

    let err = assert_err!(relation::resolve(&schema));
    assert_missing_model_error(&err, "User", "profile");
}
