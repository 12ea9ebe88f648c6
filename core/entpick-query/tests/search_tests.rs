use chrono::NaiveDate;
use entpick_model::{EntityMeta, FieldMeta, FieldType, FieldValue};
use entpick_query::{QueryError, SearchQuery};
use pretty_assertions::assert_eq;

fn user_meta() -> EntityMeta {
    EntityMeta {
        name: "user".to_string(),
        fields: vec![
            FieldMeta::integer("id", true),
            FieldMeta::string("email", true),
            FieldMeta::boolean("active", false),
        ],
    }
}

fn ready_query() -> SearchQuery {
    let mut query = SearchQuery::new();
    query.initialize(user_meta()).unwrap();
    query
}

// ── State machine ───────────────────────────────────────────────

#[test]
fn operations_before_initialize_fail() {
    let mut query = SearchQuery::new();
    assert!(!query.is_initialized());
    assert_eq!(query.build().unwrap_err(), QueryError::NotInitialized);
    assert_eq!(
        query.set_value("email", "x".into()).unwrap_err(),
        QueryError::NotInitialized
    );
    assert_eq!(query.clear("email").unwrap_err(), QueryError::NotInitialized);
    assert_eq!(query.reset().unwrap_err(), QueryError::NotInitialized);
}

#[test]
fn initialize_rejects_unnamed_entity() {
    let mut query = SearchQuery::new();
    let err = query
        .initialize(EntityMeta {
            name: String::new(),
            fields: vec![],
        })
        .unwrap_err();
    assert!(matches!(err, QueryError::Metadata(_)));
    assert!(!query.is_initialized());
}

#[test]
fn initialize_is_reentrant_and_replaces_state() {
    let mut query = ready_query();
    query.set_value("email", "a@b.com".into()).unwrap();

    let order_meta = EntityMeta {
        name: "order".to_string(),
        fields: vec![FieldMeta::float("total", true)],
    };
    query.initialize(order_meta).unwrap();

    assert_eq!(query.entity_name(), Some("order"));
    let names: Vec<&str> = query.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["total"]);
    // the stale field is gone, not carried over
    assert_eq!(
        query.set_value("email", "a@b.com".into()).unwrap_err(),
        QueryError::UnknownField("email".to_string())
    );
    assert_eq!(query.build().unwrap(), "select * from order;");
}

// ── Field derivation ────────────────────────────────────────────

#[test]
fn derives_exactly_the_searchable_subset_in_order() {
    let query = ready_query();
    let fields: Vec<(&str, FieldType)> = query
        .fields()
        .iter()
        .map(|f| (f.name(), f.field_type()))
        .collect();
    assert_eq!(
        fields,
        vec![("id", FieldType::Integer), ("email", FieldType::String)]
    );
    for field in query.fields() {
        assert!(field.value().is_none());
    }
}

#[test]
fn non_searchable_field_is_rejected() {
    let mut query = ready_query();
    assert_eq!(
        query.set_value("active", true.into()).unwrap_err(),
        QueryError::UnknownField("active".to_string())
    );
}

#[test]
fn unknown_field_is_rejected() {
    let mut query = ready_query();
    assert_eq!(
        query.set_value("nope", 1i64.into()).unwrap_err(),
        QueryError::UnknownField("nope".to_string())
    );
}

// ── Value entry ─────────────────────────────────────────────────

#[test]
fn set_value_overwrites() {
    let mut query = ready_query();
    query.set_value("email", "first@x.com".into()).unwrap();
    query.set_value("email", "second@x.com".into()).unwrap();
    assert_eq!(
        query.value("email"),
        Some(&FieldValue::Text("second@x.com".into()))
    );
}

#[test]
fn set_value_validates_type_immediately() {
    let mut query = ready_query();
    let err = query.set_value("id", "not a number".into()).unwrap_err();
    assert!(matches!(err, QueryError::Format(_)));
    // rejected values leave the slot untouched
    assert_eq!(query.value("id"), None);
}

#[test]
fn clear_unsets_one_field() {
    let mut query = ready_query();
    query.set_value("email", "a@b.com".into()).unwrap();
    query.clear("email").unwrap();
    assert_eq!(query.value("email"), None);
    assert_eq!(query.build().unwrap(), "select * from user;");
}

#[test]
fn reset_clears_values_but_keeps_fields() {
    let mut query = ready_query();
    query.set_value("id", 7i64.into()).unwrap();
    query.set_value("email", "a@b.com".into()).unwrap();
    query.reset().unwrap();
    assert_eq!(query.fields().len(), 2);
    assert!(query.fields().iter().all(|f| f.value().is_none()));
    assert_eq!(query.build().unwrap(), "select * from user;");
}

// ── Query assembly ──────────────────────────────────────────────

#[test]
fn single_filter_query() {
    let mut query = ready_query();
    query.set_value("email", "a@b.com".into()).unwrap();
    assert_eq!(
        query.build().unwrap(),
        "select * from user where email='a@b.com';"
    );
}

#[test]
fn multiple_filters_join_with_and_in_metadata_order() {
    let mut query = ready_query();
    // set in reverse order; output follows metadata order
    query.set_value("email", "a@b.com".into()).unwrap();
    query.set_value("id", 42i64.into()).unwrap();
    assert_eq!(
        query.build().unwrap(),
        "select * from user where id=42 and email='a@b.com';"
    );
}

#[test]
fn no_filters_yields_bare_select() {
    let query = ready_query();
    assert_eq!(query.build().unwrap(), "select * from user;");
}

#[test]
fn empty_string_value_is_omitted() {
    let mut query = ready_query();
    query.set_value("email", "".into()).unwrap();
    assert_eq!(query.build().unwrap(), "select * from user;");
}

#[test]
fn falsy_values_still_produce_clauses() {
    let meta = EntityMeta {
        name: "task".to_string(),
        fields: vec![
            FieldMeta::boolean("done", true),
            FieldMeta::integer("priority", true),
            FieldMeta::float("progress", true),
        ],
    };
    let mut query = SearchQuery::new();
    query.initialize(meta).unwrap();
    query.set_value("done", false.into()).unwrap();
    query.set_value("priority", 0i64.into()).unwrap();
    query.set_value("progress", 0.0f64.into()).unwrap();
    assert_eq!(
        query.build().unwrap(),
        "select * from task where done=false and priority=0 and progress=0.0;"
    );
}

#[test]
fn date_filter_renders_quoted() {
    let meta = EntityMeta {
        name: "user".to_string(),
        fields: vec![FieldMeta::date("joined", true)],
    };
    let mut query = SearchQuery::new();
    query.initialize(meta).unwrap();
    query
        .set_value("joined", NaiveDate::from_ymd_opt(2017, 3, 1).unwrap().into())
        .unwrap();
    assert_eq!(
        query.build().unwrap(),
        "select * from user where joined='2017-03-01';"
    );
}

#[test]
fn build_is_idempotent() {
    let mut query = ready_query();
    query.set_value("id", 7i64.into()).unwrap();
    query.set_value("email", "a@b.com".into()).unwrap();
    let first = query.build().unwrap();
    let second = query.build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn quoted_value_cannot_break_out() {
    let mut query = ready_query();
    query.set_value("email", "a'--".into()).unwrap();
    assert_eq!(
        query.build().unwrap(),
        "select * from user where email='a''--';"
    );
}
