use super::*;
use serde_json::json;

// =============================================================================
// from_document
// =============================================================================

#[test]
fn missing_roles_normalize_to_empty_sequence() {
    let record = UserRecord::from_document(&json!({ "id": 1, "account": "a", "password": "p" })).unwrap();
    assert_eq!(record.id, Some(1));
    assert_eq!(record.account.as_deref(), Some("a"));
    assert_eq!(record.password.as_deref(), Some("p"));
    assert!(record.roles.is_empty());
}

#[test]
fn null_roles_normalize_to_empty_sequence() {
    let record = UserRecord::from_document(&json!({ "roles": null })).unwrap();
    assert!(record.roles.is_empty());
}

#[test]
fn empty_document_is_a_valid_shape() {
    let record = UserRecord::from_document(&json!({})).unwrap();
    assert_eq!(record, UserRecord::default());
}

#[test]
fn roles_keep_their_order() {
    let record = UserRecord::from_document(&json!({ "roles": ["editor", "admin", "viewer"] })).unwrap();
    assert_eq!(record.roles, vec!["editor", "admin", "viewer"]);
}

#[test]
fn lone_role_is_wrapped() {
    let record = UserRecord::from_document(&json!({ "roles": "admin" })).unwrap();
    assert_eq!(record.roles, vec!["admin"]);
}

#[test]
fn numeric_role_elements_cast_to_text() {
    let record = UserRecord::from_document(&json!({ "roles": [7, true] })).unwrap();
    assert_eq!(record.roles, vec!["7", "true"]);
}

#[test]
fn nested_role_element_reports_its_index() {
    let err = UserRecord::from_document(&json!({ "roles": ["ok", { "x": 1 }] })).unwrap_err();
    assert_eq!(
        err,
        ShapeError::Cast { path: "roles.1".to_owned(), expected: "text", found: "object" }
    );
}

#[test]
fn numeric_string_id_is_cast() {
    let record = UserRecord::from_document(&json!({ "id": " 42 " })).unwrap();
    assert_eq!(record.id, Some(42));
}

#[test]
fn integral_float_id_is_cast() {
    let record = UserRecord::from_document(&json!({ "id": 3.0 })).unwrap();
    assert_eq!(record.id, Some(3));
}

#[test]
fn fractional_id_is_rejected() {
    let err = UserRecord::from_document(&json!({ "id": 1.5 })).unwrap_err();
    assert!(matches!(err, ShapeError::Cast { ref path, expected: "number", found: "number" } if path == "id"));
}

#[test]
fn empty_string_id_is_absent() {
    let record = UserRecord::from_document(&json!({ "id": "" })).unwrap();
    assert_eq!(record.id, None);
}

#[test]
fn boolean_id_casts_to_zero_or_one() {
    assert_eq!(UserRecord::from_document(&json!({ "id": true })).unwrap().id, Some(1));
    assert_eq!(UserRecord::from_document(&json!({ "id": false })).unwrap().id, Some(0));
}

#[test]
fn non_numeric_id_is_rejected() {
    let err = UserRecord::from_document(&json!({ "id": "abc" })).unwrap_err();
    assert_eq!(err.to_string(), "cannot cast `id` to number: found string");
}

#[test]
fn numeric_account_casts_to_text() {
    let record = UserRecord::from_document(&json!({ "account": 1001 })).unwrap();
    assert_eq!(record.account.as_deref(), Some("1001"));
}

#[test]
fn object_password_is_rejected() {
    let err = UserRecord::from_document(&json!({ "password": { "hash": "x" } })).unwrap_err();
    assert!(matches!(err, ShapeError::Cast { ref path, .. } if path == "password"));
}

#[test]
fn unknown_keys_are_dropped() {
    let record = UserRecord::from_document(&json!({ "_id": "abc", "__v": 0, "nickname": "z", "id": 5 })).unwrap();
    assert_eq!(record, UserRecord::default().with_id(5));
}

#[test]
fn non_object_document_is_rejected() {
    let err = UserRecord::from_document(&json!([1, 2])).unwrap_err();
    assert_eq!(err, ShapeError::NotADocument { found: "array" });
}

// =============================================================================
// serde
// =============================================================================

#[test]
fn deserialize_defaults_roles() {
    let record: UserRecord = serde_json::from_str(r#"{"id":1,"account":"a","password":"p"}"#).unwrap();
    assert!(record.roles.is_empty());
}

#[test]
fn serialize_skips_absent_scalars_but_keeps_roles() {
    let value = serde_json::to_value(UserRecord::default().with_account("root")).unwrap();
    assert_eq!(value, json!({ "account": "root", "roles": [] }));
}

// =============================================================================
// accessors
// =============================================================================

#[test]
fn is_present_treats_empty_roles_as_absent() {
    let record = UserRecord::default().with_id(1);
    assert!(record.is_present(Field::Id));
    assert!(!record.is_present(Field::Account));
    assert!(!record.is_present(Field::Roles));
    assert!(record.with_roles(["admin"]).is_present(Field::Roles));
}

#[test]
fn text_only_exposes_text_fields() {
    let record = UserRecord::default().with_id(9).with_account("a").with_password("p");
    assert_eq!(record.text(Field::Account), Some("a"));
    assert_eq!(record.text(Field::Password), Some("p"));
    assert_eq!(record.text(Field::Id), None);
    assert_eq!(record.text(Field::Roles), None);
}

#[test]
fn field_names_match_document_keys() {
    let names: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(names, vec!["id", "account", "password", "roles"]);
    assert_eq!(Field::Roles.to_string(), "roles");
}
