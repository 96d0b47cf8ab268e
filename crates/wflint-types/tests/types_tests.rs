use super::*;

#[test]
fn test_map_object_has_no_props() {
    let ty = ExprType::map_object(ExprType::String);
    let obj = ty.as_object().expect("object type");

    assert!(obj.props().is_none());
    assert_eq!(obj.declared().count(), 0);
    assert_eq!(obj.mapped(), Some(&ExprType::String));
    assert!(obj.is_map());
    assert!(!obj.is_strict());
}

#[test]
fn test_into_strict_and_into_loose() {
    let obj = ObjectType::open(Vec::<(String, ExprType)>::new());
    assert!(!obj.is_strict());
    assert!(obj.is_loose());

    let obj = obj.into_strict();
    assert!(obj.is_strict());
    assert!(!obj.is_loose());

    let obj = obj.into_loose();
    assert!(!obj.is_strict());
    assert!(obj.is_loose());
}

#[test]
fn test_into_strict_keeps_map_object() {
    let obj = ObjectType::map(ExprType::Number).into_strict();
    assert!(obj.is_map());
    assert!(!obj.is_strict());
    assert_eq!(obj.mapped(), Some(&ExprType::Number));
}

#[test]
fn test_lookup_open_object() {
    let obj = ObjectType::open([("foo", ExprType::Number)]);

    assert_eq!(obj.lookup("foo"), PropLookup::Declared(&ExprType::Number));
    assert_eq!(obj.lookup("bar"), PropLookup::Implicit);
    assert_eq!(obj.prop_type("bar"), Some(ExprType::Any));
}

#[test]
fn test_lookup_strict_object() {
    let obj = ObjectType::strict([("foo", ExprType::Bool)]);

    assert_eq!(obj.lookup("foo"), PropLookup::Declared(&ExprType::Bool));
    assert_eq!(obj.lookup("bar"), PropLookup::Missing);
    assert_eq!(obj.prop_type("bar"), None);
}

#[test]
fn test_lookup_map_object() {
    let obj = ObjectType::map(ExprType::String);

    assert_eq!(
        obj.lookup("anything"),
        PropLookup::Mapped(&ExprType::String)
    );
    assert_eq!(obj.prop_type("anything"), Some(ExprType::String));
}

#[test]
fn test_repeated_key_keeps_last_value() {
    let ty = ExprType::object([("a", ExprType::Number), ("a", ExprType::Bool)]);
    let obj = ty.as_object().expect("object type");

    assert_eq!(obj.declared().count(), 1);
    assert_eq!(obj.prop_type("a"), Some(ExprType::Bool));
}

#[test]
fn test_prop_order_does_not_affect_equality() {
    let a = ExprType::strict_object([("x", ExprType::Number), ("y", ExprType::String)]);
    let b = ExprType::strict_object([("y", ExprType::String), ("x", ExprType::Number)]);
    assert_eq!(a, b);
}

#[test]
fn test_array_constructors() {
    let plain = ExprType::array(ExprType::Bool);
    let deref = ExprType::array_deref(ExprType::Bool);

    assert_eq!(plain.as_array().map(|a| a.deref), Some(false));
    assert_eq!(deref.as_array().map(|a| a.deref), Some(true));
    assert_eq!(ExprType::array_with(ExprType::Bool, true), deref);
    assert_ne!(plain, deref);
}

#[test]
fn test_kind_names() {
    assert_eq!(ExprType::Any.kind_name(), "any");
    assert_eq!(ExprType::empty_object().kind_name(), "object");
    assert_eq!(ExprType::empty_strict_object().kind_name(), "strict object");
    assert_eq!(
        ExprType::map_object(ExprType::Null).kind_name(),
        "map object"
    );
    assert_eq!(ExprType::array(ExprType::Any).kind_name(), "array");
}

#[test]
fn test_serialized_form() {
    let ty = ExprType::strict_object([("a", ExprType::array(ExprType::Null))]);
    let json = serde_json::to_value(&ty).expect("serializable");

    assert_eq!(
        json,
        serde_json::json!({
            "kind": "object",
            "shape": {
                "strict": {
                    "a": {
                        "kind": "array",
                        "shape": { "elem": { "kind": "null" }, "deref": false }
                    }
                }
            }
        })
    );

    let back: ExprType = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, ty);
}

#[test]
fn test_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ExprType>();
}
