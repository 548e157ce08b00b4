//! End-to-end mutation flow tests.
//!
//! These tests drive a session the way a surrounding application would:
//! build schemas and models, seed state with tables, then apply a sequence
//! of mutations and observe the resulting rows.

use std::collections::HashMap;
use std::sync::Arc;

use strata_core::{fields, RecordId};
use strata_schema::{FieldDef, FieldKind, FieldValue, ModelDef, ModelType, Schema};
use strata_session::{Mutation, Session, State};
use strata_store::{MemoryTable, Table};

fn contact_schema() -> Schema {
    Schema::builder()
        .field(FieldDef::new("name", FieldKind::Text).required())
        .field(FieldDef::new("email", FieldKind::Text).with_pattern("^[^@]+@[^@]+$"))
        .field(FieldDef::new("age", FieldKind::Integer))
        .build()
        .unwrap()
}

fn group_schema() -> Schema {
    Schema::builder()
        .field(FieldDef::new("label", FieldKind::Text).required())
        .build()
        .unwrap()
}

fn contact_model() -> Arc<dyn ModelType> {
    Arc::new(ModelDef::new("Contact", contact_schema()).with_table_key("contacts"))
}

fn group_model() -> Arc<dyn ModelType> {
    Arc::new(ModelDef::new("Group", group_schema()).with_table_key("groups"))
}

fn new_session() -> Session {
    let mut state: State = HashMap::new();
    state.insert(
        "contacts".to_string(),
        Box::new(MemoryTable::new(contact_schema())),
    );
    state.insert(
        "groups".to_string(),
        Box::new(MemoryTable::new(group_schema())),
    );

    let mut session = Session::new(state);
    session.add_models(vec![contact_model(), group_model()]);
    session
}

#[test]
fn test_full_mutation_lifecycle() {
    let mut session = new_session();

    // Insert two contacts and a group.
    session
        .apply_mutation(&Mutation::insert(
            contact_model(),
            fields! { "id" => 1i64, "name" => "Alice", "email" => "alice@example.org" },
        ))
        .unwrap();
    session
        .apply_mutation(&Mutation::insert(
            contact_model(),
            fields! { "id" => 2i64, "name" => "Bob", "age" => 40i64 },
        ))
        .unwrap();
    session
        .apply_mutation(&Mutation::insert(
            group_model(),
            fields! { "id" => 1i64, "label" => "Friends" },
        ))
        .unwrap();

    assert_eq!(session.table("contacts").unwrap().row_count(), 2);
    assert_eq!(session.table("groups").unwrap().row_count(), 1);

    // Update merges into the existing row.
    session
        .apply_mutation(&Mutation::update(
            contact_model(),
            RecordId::new(2),
            fields! { "email" => "bob@example.org" },
        ))
        .unwrap();

    let bob = session
        .table("contacts")
        .unwrap()
        .get_row(RecordId::new(2))
        .unwrap();
    assert_eq!(bob.get("name"), Some(&FieldValue::Text("Bob".into())));
    assert_eq!(
        bob.get("email"),
        Some(&FieldValue::Text("bob@example.org".into()))
    );
    assert_eq!(bob.get("age"), Some(&FieldValue::Integer(40)));

    // Upsert replaces a row wholesale.
    session
        .apply_mutation(&Mutation::upsert(
            contact_model(),
            fields! { "id" => 2i64, "name" => "Robert" },
        ))
        .unwrap();

    let robert = session
        .table("contacts")
        .unwrap()
        .get_row(RecordId::new(2))
        .unwrap();
    assert_eq!(robert.get("name"), Some(&FieldValue::Text("Robert".into())));
    assert_eq!(robert.get("age"), Some(&FieldValue::Null));

    // Delete by id, then truncate the rest.
    session
        .apply_mutation(&Mutation::delete(contact_model(), RecordId::new(1)))
        .unwrap();
    assert_eq!(session.table("contacts").unwrap().row_count(), 1);

    session
        .apply_mutation(&Mutation::truncate(contact_model()))
        .unwrap();
    assert_eq!(session.table("contacts").unwrap().row_count(), 0);

    // The other model's table is unaffected throughout.
    assert_eq!(session.table("groups").unwrap().row_count(), 1);
}

#[test]
fn test_failed_mutations_leave_state_committed_so_far() {
    let mut session = new_session();

    session
        .apply_mutation(&Mutation::insert(
            contact_model(),
            fields! { "id" => 1i64, "name" => "Alice" },
        ))
        .unwrap();

    // A mutation with a field the schema does not know is rejected.
    let superfluous = Mutation::insert(
        contact_model(),
        fields! { "id" => 2i64, "name" => "Mallory", "admin" => true },
    );
    assert!(session.apply_mutation(&superfluous).is_err());

    // A mutation violating a field constraint is rejected by the table.
    let bad_email = Mutation::insert(
        contact_model(),
        fields! { "id" => 2i64, "name" => "Mallory", "email" => "not-an-address" },
    );
    assert!(session.apply_mutation(&bad_email).is_err());

    // Prior state survives; the failed mutations applied nothing.
    let table = session.table("contacts").unwrap();
    assert_eq!(table.row_count(), 1);
    assert!(table.contains_row(RecordId::new(1)));
    assert!(!table.contains_row(RecordId::new(2)));
}

#[test]
fn test_error_messages_are_contract_surface() {
    let mut session = new_session();

    let no_fields = Mutation::new(
        strata_session::MutationKind::Insert,
        contact_model(),
        None,
        None,
        false,
    );
    assert_eq!(
        session.apply_mutation(&no_fields).unwrap_err().to_string(),
        "Fields are required for INSERT MutationType."
    );

    let no_id = Mutation::new(
        strata_session::MutationKind::Delete,
        contact_model(),
        None,
        None,
        false,
    );
    assert_eq!(
        session.apply_mutation(&no_id).unwrap_err().to_string(),
        "Model ID cannot be null for DELETE MutationType."
    );

    let unmapped: Arc<dyn ModelType> = Arc::new(ModelDef::new("Contact", contact_schema()));
    let no_pointer = Mutation::truncate(unmapped);
    assert_eq!(
        session.apply_mutation(&no_pointer).unwrap_err().to_string(),
        "Cannot apply mutation to Model without table pointer."
    );

    let superfluous = Mutation::insert(
        contact_model(),
        fields! { "id" => 1i64, "name" => "a", "extra" => 1i64 },
    );
    assert_eq!(
        session.apply_mutation(&superfluous).unwrap_err().to_string(),
        "Cannot apply mutation to Contact model, found superfluous property 'extra'."
    );

    let no_identifier = Mutation::insert(contact_model(), fields! { "name" => "a" });
    assert_eq!(
        session
            .apply_mutation(&no_identifier)
            .unwrap_err()
            .to_string(),
        "ID is a required field for Model schema definition."
    );
}
